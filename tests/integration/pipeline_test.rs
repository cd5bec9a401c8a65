//! Integration tests for the extraction pipeline on in-memory fragments

use proptest::prelude::*;

use super::helpers::default_pipeline;
use ticket_kb::extractor::{ContentKind, Fragment, KbFilter, RawFragment};
use ticket_kb::Visibility;

#[test]
fn public_comment_loses_header_and_signature() {
    let result = default_pipeline().run(
        "INC1",
        vec![
            RawFragment::author("Alice"),
            RawFragment::type_marker("Additional comments • 2 hours ago", "2 hours ago"),
            RawFragment::content(
                ContentKind::Summary,
                "Reply from: Bob\nPlease call 555-1234\n-- \nProf. Smith, Dept. of X",
            ),
        ],
    );

    assert_eq!(result.entries.len(), 1);
    let entry = &result.entries[0];
    assert_eq!(entry.author(), "Alice");
    assert_eq!(entry.activity_type(), Some("Additional comments"));
    assert_eq!(entry.visibility(), Visibility::Public);
    assert_eq!(entry.content(), "Please call 555-1234");
}

#[test]
fn internal_note_is_kept_verbatim() {
    let result = default_pipeline().run(
        "INC2",
        vec![
            RawFragment::author("Carol"),
            RawFragment::type_marker("Internal Work notes • 1 day ago", "1 day ago"),
            RawFragment::content(ContentKind::Record, "Field X changed from A to B"),
        ],
    );

    assert_eq!(result.entries.len(), 1);
    assert_eq!(result.entries[0].visibility(), Visibility::Internal);
    assert_eq!(result.entries[0].content(), "Field X changed from A to B");
}

#[test]
fn content_without_author_yields_nothing() {
    let result = default_pipeline().run(
        "INC3",
        vec![
            RawFragment::type_marker("Additional comments", ""),
            RawFragment::content(ContentKind::Summary, "hello"),
        ],
    );

    assert_eq!(result.activities, 0);
    assert!(result.entries.is_empty());
}

#[test]
fn second_type_marker_replaces_first() {
    let result = default_pipeline().run(
        "INC4",
        vec![
            RawFragment::author("Dana"),
            RawFragment::type_marker("Field changes • now", "t1"),
            RawFragment::type_marker("Internal Work notes • later", "t2"),
            RawFragment::content(ContentKind::RichText, "note"),
        ],
    );

    let entry = &result.entries[0];
    assert_eq!(entry.activity_type(), Some("Internal Work notes"));
    assert_eq!(entry.timestamp(), Some("t2"));
    assert_eq!(entry.visibility(), Visibility::Internal);
}

fn type_label() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        Just(None),
        Just(Some("Internal Work notes")),
        Just(Some("Additional comments")),
        Just(Some("Field changes")),
    ]
}

fn body() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(""), Just("  "), Just("text"), Just("-- signature only")]
}

proptest! {
    #[test]
    fn author_markers_alone_give_one_empty_activity_each(n in 0usize..20) {
        let fragments: Vec<_> = (0..n).map(|i| RawFragment::author(format!("author {}", i))).collect();
        let activities = default_pipeline().segmenter().segment(
            "INC5",
            fragments.iter().map(|f| Fragment::from_source(f)),
        );

        prop_assert_eq!(activities.len(), n);
        for activity in &activities {
            prop_assert_eq!(activity.content(), "");
            prop_assert_eq!(activity.activity_type(), None);
            prop_assert_eq!(activity.timestamp(), None);
        }
    }

    #[test]
    fn filter_keeps_exactly_typed_non_blank_activities(
        specs in proptest::collection::vec((type_label(), body()), 0..12)
    ) {
        let mut fragments = Vec::new();
        for (i, (label, text)) in specs.iter().enumerate() {
            fragments.push(RawFragment::author(format!("a{}", i)));
            if let Some(label) = label {
                fragments.push(RawFragment::type_marker(*label, "now"));
            }
            fragments.push(RawFragment::content(ContentKind::Summary, *text));
        }

        let pipeline = default_pipeline();
        let activities = pipeline.segmenter().segment(
            "INC6",
            fragments.iter().map(|f| Fragment::from_source(f)),
        );
        let expected: Vec<_> = activities
            .iter()
            .filter(|a| {
                matches!(a.activity_type(), Some("Internal Work notes") | Some("Additional comments"))
                    && !a.content().trim().is_empty()
            })
            .cloned()
            .collect();

        prop_assert_eq!(KbFilter::default().filter(activities), expected);
    }
}
