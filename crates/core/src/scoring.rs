//! Scoring module - points awarded for a line sweep
//!
//! The policy is chosen per session. `Disabled` awards nothing, which keeps
//! the score at zero for the whole game.

use std::fmt;

/// Points policy applied to the number of rows removed by one sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringPolicy {
    /// No points for clears
    Disabled,
    /// The first row is worth `base`, each further row in the same sweep
    /// doubles: `base * (2^n - 1)` in total
    Doubling { base: u32 },
    /// A flat amount per row
    PerLine { points: u32 },
}

/// Base value for the default doubling policy
pub const DEFAULT_LINE_BASE: u32 = 10;

impl Default for ScoringPolicy {
    fn default() -> Self {
        ScoringPolicy::Doubling {
            base: DEFAULT_LINE_BASE,
        }
    }
}

impl ScoringPolicy {
    /// Points for removing `lines` rows in a single sweep.
    ///
    /// ```
    /// use blocktris_core::ScoringPolicy;
    ///
    /// let policy = ScoringPolicy::default();
    /// assert_eq!(policy.points(0), 0);
    /// assert_eq!(policy.points(1), 10);
    /// assert_eq!(policy.points(4), 150);
    /// assert_eq!(ScoringPolicy::Disabled.points(4), 0);
    /// ```
    pub fn points(&self, lines: u32) -> u32 {
        if lines == 0 {
            return 0;
        }
        match *self {
            ScoringPolicy::Disabled => 0,
            ScoringPolicy::Doubling { base } => {
                // 2^n - 1 saturates instead of overflowing on absurd sweeps
                let factor = 1u32
                    .checked_shl(lines)
                    .map(|v| v - 1)
                    .unwrap_or(u32::MAX);
                base.saturating_mul(factor)
            }
            ScoringPolicy::PerLine { points } => points.saturating_mul(lines),
        }
    }

    /// Parse a policy name.
    ///
    /// Accepts `off`, `doubling`, `doubling:<base>`, `per-line:<points>`
    /// (case-insensitive).
    ///
    /// ```
    /// use blocktris_core::ScoringPolicy;
    ///
    /// assert_eq!(ScoringPolicy::from_str("off"), Some(ScoringPolicy::Disabled));
    /// assert_eq!(
    ///     ScoringPolicy::from_str("per-line:100"),
    ///     Some(ScoringPolicy::PerLine { points: 100 })
    /// );
    /// assert_eq!(ScoringPolicy::from_str("per-line"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg.trim())),
            None => (s.as_str(), None),
        };
        match (name.trim(), arg) {
            ("off" | "disabled" | "none", None) => Some(ScoringPolicy::Disabled),
            ("doubling", None) => Some(ScoringPolicy::default()),
            ("doubling", Some(arg)) => arg.parse().ok().map(|base| ScoringPolicy::Doubling { base }),
            ("per-line" | "perline", Some(arg)) => {
                arg.parse().ok().map(|points| ScoringPolicy::PerLine { points })
            }
            _ => None,
        }
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringPolicy::Disabled => write!(f, "off"),
            ScoringPolicy::Doubling { base } => write!(f, "doubling:{}", base),
            ScoringPolicy::PerLine { points } => write!(f, "per-line:{}", points),
        }
    }
}
