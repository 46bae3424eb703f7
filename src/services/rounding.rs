use rust_decimal::{Decimal, RoundingStrategy};

/// Rounding to whole currency units for displayed figures.
///
/// Halves round away from zero, so 0.5 => 1 and 49.5 => 50.

/// Rounds a monetary value to the nearest whole currency unit.
pub fn nearest_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
