//! Structural fragment classification.
//!
//! A fragment is one card of a ticket's activity stream. Classification looks
//! only at which structural markers a card carries, never at its text, so the
//! same segmenter works for any export format that implements
//! [`FragmentSource`].

use serde::{Deserialize, Serialize};

use super::config::DEFAULT_TYPE_SEPARATORS;

/// The three kinds of content card, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Field changes and other record-style content
    Record,
    /// Comment or work note summary
    Summary,
    /// Rich text editor block
    RichText,
}

impl ContentKind {
    /// Content kinds in the order they are checked. First match wins.
    pub const PRIORITY: [ContentKind; 3] = [Self::Record, Self::Summary, Self::RichText];
}

/// What a fragment means to the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// Opens a new activity
    AuthorMarker,
    /// Carries the activity type label and its timestamp
    TypeMarker,
    /// A block of activity content
    Content(ContentKind),
    /// Nothing the segmenter recognizes
    Unclassified,
}

/// Structural view of one card, implemented by each document adapter.
///
/// The `*_text` methods are only called after the matching query returned
/// true. Implementations may return an empty string otherwise.
pub trait FragmentSource {
    /// Whether the card names the author of a new activity.
    fn is_author_marker(&self) -> bool;

    /// Whether the card carries a type label and timestamp.
    fn is_type_marker(&self) -> bool;

    /// Whether the card holds content of the given kind.
    fn has_content(&self, kind: ContentKind) -> bool;

    /// Author name of an author marker.
    fn author_text(&self) -> String;

    /// Raw type label of a type marker, suffixes included.
    fn type_label(&self) -> String;

    /// Rendered timestamp of a type marker.
    fn timestamp_text(&self) -> String;

    /// Text of a content card of the given kind.
    fn content_text(&self, kind: ContentKind) -> String;
}

/// Classify a card by its structural markers.
///
/// Author markers take precedence over type markers, which take precedence
/// over content. Content kinds are checked in [`ContentKind::PRIORITY`] order.
pub fn classify<S: FragmentSource + ?Sized>(source: &S) -> FragmentKind {
    if source.is_author_marker() {
        return FragmentKind::AuthorMarker;
    }
    if source.is_type_marker() {
        return FragmentKind::TypeMarker;
    }
    ContentKind::PRIORITY
        .into_iter()
        .find(|kind| source.has_content(*kind))
        .map_or(FragmentKind::Unclassified, FragmentKind::Content)
}

/// A classified fragment with its text extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Author(String),
    TypeMarker { label: String, timestamp: String },
    Content { kind: ContentKind, text: String },
    Unclassified,
}

impl Fragment {
    /// Classify `source` and pull out the text its kind calls for.
    pub fn from_source<S: FragmentSource + ?Sized>(source: &S) -> Self {
        match classify(source) {
            FragmentKind::AuthorMarker => Self::Author(source.author_text()),
            FragmentKind::TypeMarker => Self::TypeMarker {
                label: source.type_label(),
                timestamp: source.timestamp_text(),
            },
            FragmentKind::Content(kind) => Self::Content {
                kind,
                text: source.content_text(kind),
            },
            FragmentKind::Unclassified => Self::Unclassified,
        }
    }

    pub fn kind(&self) -> FragmentKind {
        match self {
            Self::Author(_) => FragmentKind::AuthorMarker,
            Self::TypeMarker { .. } => FragmentKind::TypeMarker,
            Self::Content { kind, .. } => FragmentKind::Content(*kind),
            Self::Unclassified => FragmentKind::Unclassified,
        }
    }
}

/// Strip the relative-time suffix from an activity type label.
///
/// `"Additional comments • 2 hours ago"` becomes `"Additional comments"`.
pub fn normalize_activity_type(label: &str) -> String {
    normalize_activity_type_with(label, DEFAULT_TYPE_SEPARATORS)
}

/// Like [`normalize_activity_type`] with explicit separators.
///
/// Truncates at the earliest occurrence of any non-empty separator, then
/// trims. Without a separator the trimmed label is returned.
pub fn normalize_activity_type_with<S: AsRef<str>>(label: &str, separators: &[S]) -> String {
    let cut = separators
        .iter()
        .map(AsRef::as_ref)
        .filter(|sep| !sep.is_empty())
        .filter_map(|sep| label.find(sep))
        .min()
        .unwrap_or(label.len());
    label[..cut].trim().to_string()
}

/// In-memory fragment, also the element type of JSON fragment lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RawFragment {
    Author {
        text: String,
    },
    TypeMarker {
        text: String,
        #[serde(default)]
        timestamp: String,
    },
    Record {
        text: String,
    },
    Summary {
        text: String,
    },
    #[serde(rename = "richtext")]
    RichText {
        text: String,
    },
    #[serde(other)]
    Other,
}

impl RawFragment {
    pub fn author(name: impl Into<String>) -> Self {
        Self::Author { text: name.into() }
    }

    pub fn type_marker(label: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self::TypeMarker {
            text: label.into(),
            timestamp: timestamp.into(),
        }
    }

    pub fn content(kind: ContentKind, text: impl Into<String>) -> Self {
        let text = text.into();
        match kind {
            ContentKind::Record => Self::Record { text },
            ContentKind::Summary => Self::Summary { text },
            ContentKind::RichText => Self::RichText { text },
        }
    }
}

impl FragmentSource for RawFragment {
    fn is_author_marker(&self) -> bool {
        matches!(self, Self::Author { .. })
    }

    fn is_type_marker(&self) -> bool {
        matches!(self, Self::TypeMarker { .. })
    }

    fn has_content(&self, kind: ContentKind) -> bool {
        matches!(
            (self, kind),
            (Self::Record { .. }, ContentKind::Record)
                | (Self::Summary { .. }, ContentKind::Summary)
                | (Self::RichText { .. }, ContentKind::RichText)
        )
    }

    fn author_text(&self) -> String {
        match self {
            Self::Author { text } => text.trim().to_string(),
            _ => String::new(),
        }
    }

    fn type_label(&self) -> String {
        match self {
            Self::TypeMarker { text, .. } => text.clone(),
            _ => String::new(),
        }
    }

    fn timestamp_text(&self) -> String {
        match self {
            Self::TypeMarker { timestamp, .. } => timestamp.clone(),
            _ => String::new(),
        }
    }

    fn content_text(&self, kind: ContentKind) -> String {
        match (self, kind) {
            (Self::Record { text }, ContentKind::Record)
            | (Self::Summary { text }, ContentKind::Summary)
            | (Self::RichText { text }, ContentKind::RichText) => text.clone(),
            _ => String::new(),
        }
    }
}
