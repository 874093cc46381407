/// Lifecycle of one load attempt. `Populated` and `Failed` are terminal
/// until the next navigation starts a fresh fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Fetching,
    Populated,
    Failed,
}

impl LoadPhase {
    pub fn is_fetching(&self) -> bool {
        matches!(self, LoadPhase::Fetching)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadPhase::Populated | LoadPhase::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(LoadPhase::default(), LoadPhase::Idle);
        assert!(!LoadPhase::Idle.is_terminal());
        assert!(LoadPhase::Fetching.is_fetching());
        assert!(LoadPhase::Failed.is_terminal());
    }
}
