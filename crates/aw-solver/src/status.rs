use serde::{Deserialize, Serialize};
use std::fmt;

/// How trustworthy an equilibrium result is.
///
/// Ordered from best to worst so that combining passes is a `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvergenceStatus {
    /// Both loops met their tolerances.
    Converged,
    /// An iteration cap was hit; values are the last estimate.
    MaxIterationsReached,
    /// A degenerate step (flat or non-finite slope, non-finite iterate,
    /// non-positive open-hole rate) stopped iteration; values are the last
    /// finite estimate.
    Diverged,
}

impl ConvergenceStatus {
    pub fn worst(self, other: ConvergenceStatus) -> ConvergenceStatus {
        self.max(other)
    }

    pub fn is_converged(self) -> bool {
        self == ConvergenceStatus::Converged
    }
}

impl fmt::Display for ConvergenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConvergenceStatus::Converged => "converged",
            ConvergenceStatus::MaxIterationsReached => "max-iterations",
            ConvergenceStatus::Diverged => "diverged",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worst_takes_precedence() {
        use ConvergenceStatus::*;
        assert_eq!(Converged.worst(MaxIterationsReached), MaxIterationsReached);
        assert_eq!(Diverged.worst(MaxIterationsReached), Diverged);
        assert_eq!(Converged.worst(Converged), Converged);
    }
}
