//! KB-worthiness filter.

use std::collections::BTreeSet;

use super::activity::Activity;
use super::config::{ExtractionConfig, DEFAULT_KB_TYPES};

/// Keeps activities of a KB-worthy type with non-blank content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KbFilter {
    kb_types: BTreeSet<String>,
}

impl KbFilter {
    pub fn new<I, S>(kb_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kb_types: kb_types.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new(config.kb_types.iter().cloned())
    }

    /// Configured KB-worthy types, sorted.
    pub fn kb_types(&self) -> impl Iterator<Item = &str> {
        self.kb_types.iter().map(String::as_str)
    }

    pub fn is_kb_worthy(&self, activity: &Activity) -> bool {
        activity
            .activity_type()
            .is_some_and(|t| self.kb_types.contains(t))
            && !activity.content().trim().is_empty()
    }

    /// Keep the KB-worthy activities, preserving order.
    pub fn filter(&self, activities: Vec<Activity>) -> Vec<Activity> {
        activities
            .into_iter()
            .filter(|activity| self.is_kb_worthy(activity))
            .collect()
    }
}

impl Default for KbFilter {
    fn default() -> Self {
        Self::new(DEFAULT_KB_TYPES.iter().copied())
    }
}
