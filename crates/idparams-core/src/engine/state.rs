use super::error::Stage;
use std::fmt;

/// Where an invocation is in the validate, bind and persist sequence.
///
/// ```text
/// Start -> GeneralValidated -> ModificationsValidated -> OptionsValidated -> Bound -> Done
///   \______________________\_________________________\___________> Rejected
/// ```
///
/// Listing modifications goes from `Start` straight to `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrchestratorState {
    Start,
    GeneralValidated,
    ModificationsValidated,
    OptionsValidated,
    Bound,
    Done,
    Rejected,
}

impl OrchestratorState {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrchestratorState::Done | OrchestratorState::Rejected)
    }

    /// The state a validation pass starts from.
    pub fn before(stage: Stage) -> Self {
        match stage {
            Stage::General => OrchestratorState::Start,
            Stage::Modifications => OrchestratorState::GeneralValidated,
            Stage::Options => OrchestratorState::ModificationsValidated,
        }
    }

    /// The state reached when a validation pass succeeds.
    pub fn after(stage: Stage) -> Self {
        match stage {
            Stage::General => OrchestratorState::GeneralValidated,
            Stage::Modifications => OrchestratorState::ModificationsValidated,
            Stage::Options => OrchestratorState::OptionsValidated,
        }
    }
}

impl fmt::Display for OrchestratorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_chain_into_each_other() {
        assert_eq!(
            OrchestratorState::after(Stage::General),
            OrchestratorState::before(Stage::Modifications)
        );
        assert_eq!(
            OrchestratorState::after(Stage::Modifications),
            OrchestratorState::before(Stage::Options)
        );
    }

    #[test]
    fn only_done_and_rejected_are_terminal() {
        assert!(OrchestratorState::Done.is_terminal());
        assert!(OrchestratorState::Rejected.is_terminal());
        assert!(!OrchestratorState::Bound.is_terminal());
    }
}
