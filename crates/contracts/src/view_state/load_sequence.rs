//! Generation counter for tab fragment loads.
//!
//! Every load takes a ticket; only the ticket of the most recent request may
//! write into the content region. Older responses are dropped on arrival.

use crate::site::TabBehavior;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    tab_id: String,
}

impl LoadTicket {
    pub fn tab_id(&self) -> &str {
        &self.tab_id
    }
}

/// What to do with a finished fragment fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A newer load was requested meanwhile; the content region stays as is
    Stale,
    /// Inject `html`, then wire what `behavior` calls for
    Mount { behavior: TabBehavior, html: String },
    /// Render `message` inline; nothing gets wired
    Failed { message: String },
}

impl LoadOutcome {
    /// Behavior wired by this outcome, if any
    pub fn behavior(&self) -> Option<TabBehavior> {
        match self {
            LoadOutcome::Mount { behavior, .. } => Some(*behavior),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSequence {
    latest: u64,
}

impl LoadSequence {
    pub fn begin(&mut self, tab_id: &str) -> LoadTicket {
        self.latest += 1;
        LoadTicket {
            generation: self.latest,
            tab_id: tab_id.to_string(),
        }
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_request_wins() {
        let mut seq = LoadSequence::default();
        let api = seq.begin("api");
        let example = seq.begin("example");
        // the api response resolves last but was requested first
        assert!(!seq.is_current(&api));
        assert!(seq.is_current(&example));
        assert_eq!(example.tab_id(), "example");
    }

    #[test]
    fn test_reload_of_same_tab_supersedes() {
        let mut seq = LoadSequence::default();
        let first = seq.begin("api");
        let second = seq.begin("api");
        assert!(!seq.is_current(&first));
        assert!(seq.is_current(&second));
    }
}
