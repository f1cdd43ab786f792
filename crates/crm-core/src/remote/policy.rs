//! Per-table outcome policies for remote mutations.

use serde::Serialize;

/// How a multi-record delete is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeletePolicy {
    /// Succeeds only when every requested record was deleted.
    AllOrNothing,
    /// Succeeds when at least one record was deleted.
    AnySuccess,
}

impl DeletePolicy {
    pub fn is_satisfied(&self, successes: usize, requested: usize) -> bool {
        match self {
            DeletePolicy::AllOrNothing => successes == requested,
            DeletePolicy::AnySuccess => successes > 0,
        }
    }
}

/// What a failed mutation returns to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailurePolicy {
    /// Log, notify and return `None`.
    Absorb,
    /// Log, notify and return the error.
    Raise,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_delete() {
        assert!(!DeletePolicy::AllOrNothing.is_satisfied(1, 2));
        assert!(DeletePolicy::AnySuccess.is_satisfied(1, 2));
        assert!(DeletePolicy::AllOrNothing.is_satisfied(2, 2));
        assert!(!DeletePolicy::AnySuccess.is_satisfied(0, 2));
    }
}
