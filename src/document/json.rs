//! JSON fragment list adapter.
//!
//! Accepts either a bare array of fragments or an object that also names the
//! ticket:
//!
//! ```json
//! {"ticket_id": "INC0012345", "fragments": [{"kind": "author", "text": "Alice"}]}
//! ```

use serde::Deserialize;

use crate::extractor::RawFragment;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FragmentFile {
    List(Vec<RawFragment>),
    Ticket {
        #[serde(default)]
        ticket_id: Option<String>,
        fragments: Vec<RawFragment>,
    },
}

/// Fragments read from a JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentList {
    /// Ticket id given inside the document, if any
    pub ticket_id: Option<String>,
    pub fragments: Vec<RawFragment>,
}

/// Parse a JSON fragment document.
pub fn parse(content: &str) -> Result<FragmentList, serde_json::Error> {
    let list = match serde_json::from_str(content)? {
        FragmentFile::Ticket {
            ticket_id,
            fragments,
        } => FragmentList {
            ticket_id: ticket_id.filter(|id| !id.trim().is_empty()),
            fragments,
        },
        FragmentFile::List(fragments) => FragmentList {
            ticket_id: None,
            fragments,
        },
    };
    Ok(list)
}
