use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::SolveError;

/// Limits applied to a solve. The default places none.
///
/// Both limits are checked once per round, before either frontier steps, so
/// the main and twin searches always stop level with each other.
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    max_rounds: Option<u64>,
    cancel: Option<Arc<AtomicBool>>,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop with [`SolveError::BudgetExhausted`] once this many rounds ran.
    pub fn with_max_rounds(mut self, rounds: u64) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    /// Stop with [`SolveError::Cancelled`] as soon as `flag` is set.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn max_rounds(&self) -> Option<u64> {
        self.max_rounds
    }

    pub(crate) fn check(&self, rounds: u64) -> Result<(), SolveError> {
        if let Some(flag) = &self.cancel {
            if flag.load(Ordering::Relaxed) {
                return Err(SolveError::Cancelled { rounds });
            }
        }
        match self.max_rounds {
            Some(limit) if rounds >= limit => Err(SolveError::BudgetExhausted { rounds }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let config = SolverConfig::default();
        assert_eq!(config.max_rounds(), None);
        assert_eq!(config.check(u64::MAX), Ok(()));
    }

    #[test]
    fn test_round_budget() {
        let config = SolverConfig::new().with_max_rounds(3);
        assert_eq!(config.check(2), Ok(()));
        assert_eq!(
            config.check(3),
            Err(SolveError::BudgetExhausted { rounds: 3 })
        );
    }

    #[test]
    fn test_cancel_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        let config = SolverConfig::new().with_cancel_flag(Arc::clone(&flag));
        assert_eq!(config.check(10), Ok(()));
        flag.store(true, Ordering::Relaxed);
        assert_eq!(config.check(11), Err(SolveError::Cancelled { rounds: 11 }));
    }
}
