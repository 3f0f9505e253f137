//! Per-request pipeline states.

/// State of one analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Waiting for the next request.
    Idle,

    /// Querying the lyrics provider.
    Searching,

    /// Fetching the lyrics page and extracting its text.
    Scraping,

    /// Waiting for the language model.
    Analyzing,

    /// Turning the completion into an emotion record.
    Parsing,

    /// Showing the result.
    Presenting,

    /// Report written.
    Saved,

    /// Request aborted.
    Failed,
}

impl PipelineState {
    /// Check if the request is in a terminal state.
    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineState::Saved | PipelineState::Failed)
    }

    pub fn can_transition_to(self, next: PipelineState) -> bool {
        use PipelineState::*;
        match (self, next) {
            (Idle, Searching)
            | (Searching, Scraping)
            | (Scraping, Analyzing)
            | (Analyzing, Parsing)
            | (Parsing, Presenting)
            | (Presenting, Saved)
            | (Saved, Idle)
            | (Failed, Idle) => true,
            (from, Failed) => !from.is_terminal(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PipelineState::*;

    #[test]
    fn test_happy_path_transitions() {
        let path = [
            Idle, Searching, Scraping, Analyzing, Parsing, Presenting, Saved, Idle,
        ];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]), "{:?} -> {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_any_active_state_can_fail() {
        for state in [Idle, Searching, Scraping, Analyzing, Parsing, Presenting] {
            assert!(state.can_transition_to(Failed));
        }
        assert!(!Saved.can_transition_to(Failed));
        assert!(!Failed.can_transition_to(Failed));
        assert!(Failed.can_transition_to(Idle));
    }

    #[test]
    fn test_no_skipping_steps() {
        assert!(!Idle.can_transition_to(Analyzing));
        assert!(!Searching.can_transition_to(Saved));
        assert!(!Saved.can_transition_to(Searching));
        assert!(!Parsing.can_transition_to(Analyzing));
    }
}
