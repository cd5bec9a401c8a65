//! Activity segmentation state machine.
//!
//! Folds an ordered fragment sequence into activities. An author marker opens
//! an activity; type markers and content attach to whichever activity is
//! open; the next author marker (or the end of input) finalizes it.

use super::activity::{Activity, ActivityBuilder};
use super::cleaner::ContentCleaner;
use super::fragment::{normalize_activity_type_with, Fragment};

/// Segmenter state between fragments.
#[derive(Debug)]
enum State {
    /// Nothing to attach content to yet
    NoCurrent,
    /// An activity is collecting content
    Open(ActivityBuilder),
}

/// Splits one ticket's fragments into [`Activity`] records.
///
/// Holds no per-ticket state, so one segmenter can serve many tickets.
#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'a> {
    cleaner: &'a ContentCleaner,
    type_separators: &'a [String],
}

impl<'a> Segmenter<'a> {
    pub fn new(cleaner: &'a ContentCleaner, type_separators: &'a [String]) -> Self {
        Self {
            cleaner,
            type_separators,
        }
    }

    /// Segment fragments into activities, in the order they close.
    pub fn segment<I>(&self, ticket_id: &str, fragments: I) -> Vec<Activity>
    where
        I: IntoIterator<Item = Fragment>,
    {
        let mut activities = Vec::new();
        let mut state = State::NoCurrent;

        for fragment in fragments {
            state = self.step(state, fragment, ticket_id, &mut activities);
        }

        if let State::Open(builder) = state {
            activities.push(builder.finish(self.cleaner));
        }

        activities
    }

    fn step(
        &self,
        state: State,
        fragment: Fragment,
        ticket_id: &str,
        activities: &mut Vec<Activity>,
    ) -> State {
        match (state, fragment) {
            (State::NoCurrent, Fragment::Author(author)) => {
                State::Open(ActivityBuilder::new(ticket_id, author))
            }
            (State::Open(builder), Fragment::Author(author)) => {
                activities.push(builder.finish(self.cleaner));
                State::Open(ActivityBuilder::new(ticket_id, author))
            }
            (State::Open(mut builder), Fragment::TypeMarker { label, timestamp }) => {
                let activity_type = normalize_activity_type_with(&label, self.type_separators);
                builder.set_type(activity_type, timestamp);
                State::Open(builder)
            }
            (State::Open(mut builder), Fragment::Content { text, .. }) => {
                builder.push_block(text);
                State::Open(builder)
            }
            // Orphaned markers/content and unclassified cards
            (state, _) => state,
        }
    }
}
