//! Money labels for chart axes and tooltips.

use crate::data::{CURRENCY_SYMBOL, SUFFIX_MULTIPLIERS};

/// Render an amount with the largest fitting suffix, e.g. `€2.5M`.
///
/// The suffix is chosen on the rounded figure, so 999_960 shows as `€1M`
/// rather than `€1000K`.
pub fn format_money(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let magnitude = amount.abs();

    // Index into SUFFIX_MULTIPLIERS, None for plain units.
    let mut tier = SUFFIX_MULTIPLIERS.iter().rposition(|(_, multiplier)| magnitude >= *multiplier);

    loop {
        let multiplier = tier.map_or(1.0, |i| SUFFIX_MULTIPLIERS[i].1);
        let shown = short_decimal(magnitude / multiplier);
        let next = tier.map_or(0, |i| i + 1);

        let rounds_up = shown.parse::<f64>().is_ok_and(|v| v >= 1000.0);
        if rounds_up && next < SUFFIX_MULTIPLIERS.len() {
            tier = Some(next);
            continue;
        }

        let suffix = tier.map(|i| SUFFIX_MULTIPLIERS[i].0.to_string()).unwrap_or_default();
        return format!("{}{}{}{}", sign, CURRENCY_SYMBOL, shown, suffix);
    }
}

/// One decimal place, without a trailing ".0".
fn short_decimal(value: f64) -> String {
    let formatted = format!("{:.1}", value);
    match formatted.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(2_500_000.0), "€2.5M");
        assert_eq!(format_money(1000.0), "€1K");
        assert_eq!(format_money(1_000_000_000.0), "€1B");
        assert_eq!(format_money(110_500_000.0), "€110.5M");
        assert_eq!(format_money(950.0), "€950");
        assert_eq!(format_money(0.0), "€0");
    }

    #[test]
    fn test_format_money_rounds_into_next_suffix() {
        assert_eq!(format_money(999_960.0), "€1M");
        assert_eq!(format_money(999.99), "€1K");
        assert_eq!(format_money(999_960_000.0), "€1B");
        assert_eq!(format_money(999_900.0), "€999.9K");
        assert_eq!(format_money(2_000_000_000_000.0), "€2000B");
    }

    #[test]
    fn test_format_negative_money() {
        assert_eq!(format_money(-9_000_000.0), "-€9M");
    }
}
