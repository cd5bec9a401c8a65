//! Activity records and their construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cleaner::ContentCleaner;
use super::config::INTERNAL_WORK_NOTES;

/// Separator placed between content blocks when an activity is finalized.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Who can see an activity on the ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Internal,
    /// No type marker seen yet
    Unknown,
}

impl Visibility {
    /// Derive visibility from an activity type.
    pub fn for_type(activity_type: Option<&str>) -> Self {
        match activity_type {
            Some(INTERNAL_WORK_NOTES) => Self::Internal,
            Some(_) => Self::Public,
            None => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finalized activity from a ticket timeline.
///
/// Activities are only produced by [`ActivityBuilder::finish`], so the
/// content is already joined and, for public activities, cleaned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    ticket_id: String,
    author: String,
    #[serde(rename = "type")]
    activity_type: Option<String>,
    timestamp: Option<String>,
    visibility: Visibility,
    content: String,
}

/// An activity that passed the KB filter.
pub type KbEntry = Activity;

impl Activity {
    pub fn ticket_id(&self) -> &str {
        &self.ticket_id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn activity_type(&self) -> Option<&str> {
        self.activity_type.as_deref()
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// An activity that is still collecting content.
///
/// The author is fixed at creation. Type and timestamp are set together and a
/// later marker replaces an earlier one.
#[derive(Debug, Clone)]
pub struct ActivityBuilder {
    ticket_id: String,
    author: String,
    activity_type: Option<String>,
    timestamp: Option<String>,
    blocks: Vec<String>,
}

impl ActivityBuilder {
    pub fn new(ticket_id: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            ticket_id: ticket_id.into(),
            author: author.into(),
            activity_type: None,
            timestamp: None,
            blocks: Vec::new(),
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Set type and timestamp, replacing any earlier values.
    pub fn set_type(&mut self, activity_type: impl Into<String>, timestamp: impl Into<String>) {
        self.activity_type = Some(activity_type.into());
        self.timestamp = Some(timestamp.into());
    }

    pub fn push_block(&mut self, block: impl Into<String>) {
        self.blocks.push(block.into());
    }

    pub fn visibility(&self) -> Visibility {
        Visibility::for_type(self.activity_type.as_deref())
    }

    /// Join the content blocks and freeze the activity.
    ///
    /// Public content goes through `cleaner`; internal and untyped content is
    /// kept verbatim.
    pub fn finish(self, cleaner: &ContentCleaner) -> Activity {
        let visibility = self.visibility();
        let joined = self.blocks.join(BLOCK_SEPARATOR);
        let content = match visibility {
            Visibility::Public => cleaner.clean(&joined),
            Visibility::Internal | Visibility::Unknown => joined,
        };

        Activity {
            ticket_id: self.ticket_id,
            author: self.author,
            activity_type: self.activity_type,
            timestamp: self.timestamp,
            visibility,
            content,
        }
    }
}
