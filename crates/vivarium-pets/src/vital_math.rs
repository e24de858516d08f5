//! Exact decimal arithmetic for vital values.
//!
//! Rates are whole points per hour; windows are whole seconds. All helpers
//! clamp into the vital range and use checked operations so no input can
//! panic or wrap.

use rust_decimal::Decimal;
use vivarium_types::Vitals;

/// Seconds per hour, as a decimal divisor.
const SECS_PER_HOUR: Decimal = Decimal::from_parts(3600, 0, 0, false, 0);

/// Points accrued by `rate_per_hour` over `secs` seconds.
pub(crate) fn points_over(rate_per_hour: u32, secs: u64) -> Decimal {
    Decimal::from(rate_per_hour)
        .checked_mul(Decimal::from(secs))
        .and_then(|p| p.checked_div(SECS_PER_HOUR))
        .unwrap_or(Decimal::ZERO)
}

/// Points accrued by `rate_per_hour`, scaled by an integer percent
/// modifier, over `secs` seconds.
pub(crate) fn points_over_pct(rate_per_hour: u32, pct: u32, secs: u64) -> Decimal {
    points_over(rate_per_hour, secs)
        .checked_mul(Decimal::from(pct))
        .and_then(|p| p.checked_div(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

/// Add a decimal amount to a vital, clamped to `[0, 100]`.
pub(crate) fn add(value: Decimal, amount: Decimal) -> Decimal {
    Vitals::clamped(value.checked_add(amount).unwrap_or(Decimal::ONE_HUNDRED))
}

/// Subtract a decimal amount from a vital, clamped to `[0, 100]`.
pub(crate) fn sub(value: Decimal, amount: Decimal) -> Decimal {
    Vitals::clamped(value.checked_sub(amount).unwrap_or(Decimal::ZERO))
}

/// Add whole points to a vital, clamped to `[0, 100]`.
pub(crate) fn add_points(value: Decimal, points: u32) -> Decimal {
    add(value, Decimal::from(points))
}

/// Subtract whole points from a vital, clamped to `[0, 100]`.
pub(crate) fn sub_points(value: Decimal, points: u32) -> Decimal {
    sub(value, Decimal::from(points))
}

/// Seconds until a vital decaying at `rate_per_hour` (scaled by `pct`)
/// reaches zero, rounded up. `None` if the effective rate is zero.
pub(crate) fn secs_to_deplete(value: Decimal, rate_per_hour: u32, pct: u32) -> Option<Decimal> {
    let effective = Decimal::from(rate_per_hour)
        .checked_mul(Decimal::from(pct))
        .and_then(|r| r.checked_div(Decimal::ONE_HUNDRED))?;
    if effective <= Decimal::ZERO {
        return None;
    }
    value
        .checked_mul(SECS_PER_HOUR)
        .and_then(|v| v.checked_div(effective))
        .map(|secs| secs.ceil())
}
