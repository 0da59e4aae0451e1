// ============================================================================
// Transcriber Configuration
// How sub-satang precision is resolved before transcription
// ============================================================================

use rust_decimal::RoundingStrategy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Cents Rounding
// ============================================================================

/// Rule applied to digits past the second fractional place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CentsRounding {
    /// Drop extra digits (toward zero).
    /// - 0.001 → 0 satang
    /// - 42.125 → 12 satang
    /// - 0.999 → 99 satang
    #[default]
    Truncate,

    /// Round to the nearest satang, ties away from zero.
    /// - 42.124 → 12 satang
    /// - 42.125 → 13 satang
    /// - 0.995 → 1 baht, 0 satang
    HalfAwayFromZero,
}

impl CentsRounding {
    /// The matching `rust_decimal` rounding strategy
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            CentsRounding::Truncate => RoundingStrategy::ToZero,
            CentsRounding::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
        }
    }
}

// ============================================================================
// Transcriber Configuration
// ============================================================================

/// Configuration for a [`BahtTranscriber`](crate::engine::BahtTranscriber)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TranscriberConfig {
    /// Rounding of sub-satang digits
    pub cents_rounding: CentsRounding,
}

impl TranscriberConfig {
    pub fn new(cents_rounding: CentsRounding) -> Self {
        Self { cents_rounding }
    }

    /// Builder method: Set cents rounding rule
    pub fn with_cents_rounding(mut self, cents_rounding: CentsRounding) -> Self {
        self.cents_rounding = cents_rounding;
        self
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl TranscriberConfig {
    /// Drop sub-satang digits (the default)
    pub fn truncating() -> Self {
        Self::new(CentsRounding::Truncate)
    }

    /// Round to the nearest satang, ties away from zero
    pub fn rounding_half_away() -> Self {
        Self::new(CentsRounding::HalfAwayFromZero)
    }
}
