//! Number formatting for balances.

use num_format::{Locale, ToFormattedString};

/// Drops per XRP.
pub const DROPS_PER_XRP: u64 = 1_000_000;

/// Render a drop amount as XRP using `en` locale rules: grouped thousands,
/// at most three fraction digits, no trailing zeros.
pub fn format_drops_as_xrp(drops: u64) -> String {
    let mut whole = drops / DROPS_PER_XRP;
    let mut thousandths = (drops % DROPS_PER_XRP + 500) / 1_000;
    if thousandths == 1_000 {
        whole += 1;
        thousandths = 0;
    }

    let mut out = whole.to_formatted_string(&Locale::en);
    if thousandths > 0 {
        let digits = format!("{:03}", thousandths);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// Format a ledger balance string (drops). Unparseable input is returned
/// as-is.
pub fn format_balance(drops: &str) -> String {
    match drops.trim().parse::<u64>() {
        Ok(d) => format_drops_as_xrp(d),
        Err(_) => drops.to_string(),
    }
}
