//! Human-readable number formatting.

/// Compact magnitude: `2.4M`, `1.5K`, `999`.
///
/// - `>= 1_000_000`: one-decimal millions
/// - `>= 1_000`: one-decimal thousands
/// - otherwise: grouped integer, or up to three decimals for fractional values
///
/// The tenth is rounded like JavaScript's `toFixed(1)`: on the exact binary
/// value of the scaled number, with exact halves going up. So `1250 -> 1.3K`
/// but `1150 -> 1.1K` (1.15 is stored as 1.1499...). Negative values format
/// their magnitude with a leading `-`; NaN and infinities format as `n/a`.
pub fn format_compact(n: f64) -> String {
    if !n.is_finite() {
        return "n/a".to_string();
    }
    if n < 0.0 {
        return format!("-{}", format_compact(-n));
    }
    if n >= 1_000_000.0 {
        return format!("{}M", to_fixed_1(n / 1_000_000.0));
    }
    if n >= 1_000.0 {
        return format!("{}K", to_fixed_1(n / 1_000.0));
    }

    let rounded = (n * 1000.0).round() / 1000.0;
    if rounded.fract() == 0.0 {
        format_grouped(rounded as u64)
    } else {
        format!("{rounded}")
    }
}

/// One decimal place, rounding the exact value of `x` (non-negative, finite).
///
/// `{:.1}` already rounds the exact binary value; only exact ties need
/// forcing upward, since std rounds those to even.
fn to_fixed_1(x: f64) -> String {
    // Every finite f64 has a terminating decimal expansion; for the
    // magnitudes formatted here 60 places reach the end of it.
    let exact = format!("{x:.60}");
    let tail = exact.split_once('.').map(|(_, frac)| frac.get(1..).unwrap_or("")).unwrap_or("");
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if is_tie {
        format!("{:.1}", ((x * 10.0).floor() + 1.0) / 10.0)
    } else {
        format!("{x:.1}")
    }
}

/// Integer with `,` thousands separators.
pub fn format_grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Asking price, e.g. `$3,500`.
pub fn format_price(n: u64) -> String {
    format!("${}", format_grouped(n))
}
