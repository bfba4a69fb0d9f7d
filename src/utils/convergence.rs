//! Round bookkeeping & iteration limits for fixed-point loops.

/// Optional bound on the number of rounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundLimit {
    pub max_rounds: Option<usize>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundStats {
    pub rounds: usize,
    pub converged: bool,
}

impl RoundLimit {
    pub fn new(max_rounds: Option<usize>) -> Self {
        Self { max_rounds }
    }

    /// `true` once `rounds` completed rounds have used up the budget.
    #[inline]
    pub fn exhausted(&self, rounds: usize) -> bool {
        self.max_rounds.is_some_and(|m| rounds >= m)
    }
}

/// Safety bound for the balanced relaxation: `n³`, saturating, at least 1.
pub(crate) fn cubic_sweep_bound(n: usize) -> usize {
    n.saturating_mul(n).saturating_mul(n).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_exhaustion() {
        let unlimited = RoundLimit::default();
        assert!(!unlimited.exhausted(1_000_000));
        let two = RoundLimit::new(Some(2));
        assert!(!two.exhausted(1));
        assert!(two.exhausted(2));
    }

    #[test]
    fn cubic_bound_saturates() {
        assert_eq!(cubic_sweep_bound(0), 1);
        assert_eq!(cubic_sweep_bound(4), 64);
        assert_eq!(cubic_sweep_bound(usize::MAX), usize::MAX);
    }
}
