use num_format::{Locale, ToFormattedString as _};
use rust_decimal::{prelude::ToPrimitive as _, Decimal, RoundingStrategy};

/// Format an amount with thousands separators and exactly `decimal_places`
/// decimals.
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of user's locale. Could be generalized in the future.
pub(crate) fn format_amount(amount: Decimal, decimal_places: u32) -> String {
    let rounded = amount
        .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
        .abs();
    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let integer_part = rounded
        .trunc()
        .to_u128()
        .unwrap_or_default()
        .to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        return format!("{}{}", sign, integer_part);
    }
    let fractional_part = (rounded.fract() * Decimal::from(10u64.pow(decimal_places)))
        .trunc()
        .to_u128()
        .unwrap_or_default();
    format!(
        "{}{}.{:0width$}",
        sign,
        integer_part,
        fractional_part,
        width = decimal_places as usize
    )
}
