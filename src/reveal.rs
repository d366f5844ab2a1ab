//! Progressive reveal: wrong-guess count to visual fidelity tier.

use serde::Serialize;
use std::fmt;

/// Highest pre-reveal tier index.
pub const MAX_BLUR_TIER: u8 = 5;

/// Visual fidelity of the shape.
///
/// `Obscured(0)` is the most obscured; `Obscured(5)` the clearest tier while
/// guessing continues. `Revealed` is used once the round is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RevealTier {
    /// Pre-reveal tier, 0..=5.
    Obscured(u8),
    /// Round is over; show the shape unobscured.
    Revealed,
}

impl RevealTier {
    /// Tier for `wrong_guesses` while the round is in progress, or
    /// `Revealed` when `finished`.
    #[must_use]
    pub fn for_round(wrong_guesses: usize, finished: bool) -> Self {
        if finished {
            return Self::Revealed;
        }
        let capped = wrong_guesses.min(usize::from(MAX_BLUR_TIER));
        Self::Obscured(u8::try_from(capped).unwrap_or(MAX_BLUR_TIER))
    }

    /// Blur radius hint for the renderer, in pixels.
    #[must_use]
    pub const fn blur_px(self) -> u8 {
        match self {
            Self::Obscured(0) => 24,
            Self::Obscured(1) => 16,
            Self::Obscured(2) => 10,
            Self::Obscured(3) => 6,
            Self::Obscured(4) => 3,
            Self::Obscured(_) => 1,
            Self::Revealed => 0,
        }
    }

    /// Whether the shape is fully shown.
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

impl fmt::Display for RevealTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Obscured(n) => write!(f, "tier {n}"),
            Self::Revealed => f.write_str("revealed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_tracks_wrong_guesses() {
        for n in 0..=5 {
            assert_eq!(RevealTier::for_round(n, false), RevealTier::Obscured(n as u8));
        }
    }

    #[test]
    fn test_tier_caps_at_five() {
        assert_eq!(RevealTier::for_round(6, false), RevealTier::Obscured(5));
        assert_eq!(RevealTier::for_round(100, false), RevealTier::Obscured(5));
    }

    #[test]
    fn test_finished_is_revealed() {
        assert_eq!(RevealTier::for_round(0, true), RevealTier::Revealed);
        assert_eq!(RevealTier::for_round(6, true), RevealTier::Revealed);
    }

    #[test]
    fn test_ordering_and_blur_monotonic() {
        let tiers: Vec<RevealTier> = (0..=6)
            .map(|n| RevealTier::for_round(n, n == 6))
            .collect();
        for pair in tiers.windows(2) {
            assert!(pair[0] <= pair[1]);
            assert!(pair[0].blur_px() >= pair[1].blur_px());
        }
        assert!(RevealTier::Revealed.is_revealed());
        assert_eq!(RevealTier::Revealed.blur_px(), 0);
    }
}
