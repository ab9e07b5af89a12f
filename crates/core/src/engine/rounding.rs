use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to the nearest whole unit, with halves going toward positive
/// infinity (`-2.5` becomes `-2`).
pub fn round_half_up(value: Decimal) -> Decimal {
    (value + Decimal::new(5, 1)).floor()
}

/// Rounds to cents (or hundredths of a cup).
pub fn round_hundredths(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a computed amount, clamping magnitudes Decimal cannot hold.
pub fn saturating_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(if value < 0.0 { Decimal::MIN } else { Decimal::MAX })
}

/// Rounds half up to a whole count, clamped to the `u32` range.
pub fn saturating_whole(value: f64) -> u32 {
    let rounded = round_half_up(saturating_decimal(value));
    rounded.to_u32().unwrap_or(if rounded.is_sign_negative() { 0 } else { u32::MAX })
}

/// Scales a whole number of weeks by a percentage, rounding halves up.
pub fn scale_weeks(weeks: u32, percent: u32) -> u32 {
    (weeks * percent + 50) / 100
}
