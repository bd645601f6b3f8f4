/// Lifecycle of the quote form's submit button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

impl SubmitState {
    pub fn label(self) -> &'static str {
        match self {
            SubmitState::Idle => "SUBMIT ENQUIRY",
            SubmitState::Submitting => "SUBMITTING...",
        }
    }

    pub fn is_disabled(self) -> bool {
        matches!(self, SubmitState::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle_and_enabled() {
        let state = SubmitState::default();
        assert_eq!(state, SubmitState::Idle);
        assert_eq!(state.label(), "SUBMIT ENQUIRY");
        assert!(!state.is_disabled());
    }

    #[test]
    fn test_submitting_is_disabled() {
        assert_eq!(SubmitState::Submitting.label(), "SUBMITTING...");
        assert!(SubmitState::Submitting.is_disabled());
    }
}
