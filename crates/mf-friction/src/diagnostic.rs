//! Soft diagnostics that accompany a still-valid friction factor.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Non-fatal quality warning attached to an [`Estimate`].
///
/// The value is usable; the caller decides whether to surface, log or ignore it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Diagnostic {
    /// Colebrook iteration stopped at its budget before meeting tolerance.
    IterationBudgetExhausted { iterations: usize, last_delta: f64 },
    /// Haaland evaluated in `2300 <= Re < 3000`, where its fit is poor.
    HaalandLowReynolds { reynolds: f64 },
    /// Laminar closed form evaluated above the transition Reynolds number.
    LaminarAboveTransition { reynolds: f64 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::IterationBudgetExhausted {
                iterations,
                last_delta,
            } => write!(
                f,
                "Maximum number of iterations ({iterations}) reached before convergence \
                 (last step {last_delta:.3e}); result might be inaccurate"
            ),
            Diagnostic::HaalandLowReynolds { reynolds } => write!(
                f,
                "Haaland formula is not reliable for Re < 3000 (Re = {reynolds})"
            ),
            Diagnostic::LaminarAboveTransition { reynolds } => write!(
                f,
                "Flow is usually not laminar for Re > 2300 (Re = {reynolds})"
            ),
        }
    }
}

/// A friction factor paired with an optional soft diagnostic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Estimate {
    /// Darcy friction factor, finite and strictly positive.
    pub factor: f64,
    pub diagnostic: Option<Diagnostic>,
}

impl Estimate {
    pub fn clean(factor: f64) -> Self {
        Self {
            factor,
            diagnostic: None,
        }
    }

    pub fn flagged(factor: f64, diagnostic: Diagnostic) -> Self {
        Self {
            factor,
            diagnostic: Some(diagnostic),
        }
    }

    /// True when no diagnostic was raised.
    pub fn is_clean(&self) -> bool {
        self.diagnostic.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_iterations() {
        let d = Diagnostic::IterationBudgetExhausted {
            iterations: 7,
            last_delta: 0.25,
        };
        let msg = d.to_string();
        assert!(msg.contains("(7)"));
        assert!(msg.contains("inaccurate"));
    }

    #[test]
    fn clean_and_flagged() {
        assert!(Estimate::clean(0.02).is_clean());
        let e = Estimate::flagged(
            0.05,
            Diagnostic::HaalandLowReynolds { reynolds: 2500.0 },
        );
        assert!(!e.is_clean());
        assert_eq!(e.factor, 0.05);
    }
}
