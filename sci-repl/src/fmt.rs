//! Formatting of results.

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// Round to this many significant digits, printing the shorter of fixed and scientific
    /// notation, like C's `%g`.
    Significant(usize),

    /// Print the shortest representation that round-trips.
    Full,
}

impl NumberFormat {
    /// Creates the format for the given number of significant digits, where `0` means
    /// [`NumberFormat::Full`].
    pub fn with_precision(precision: usize) -> Self {
        match precision {
            0 => Self::Full,
            digits => Self::Significant(digits),
        }
    }

    /// Formats a value.
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Full => value.to_string(),
            Self::Significant(digits) => general(value, digits),
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::Significant(6)
    }
}

/// Strips trailing zeros after the decimal point, and the point itself if nothing follows it.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Formats `value` with `digits` significant digits in `%g` style.
fn general(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    } else if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    } else if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let digits = digits.max(1);

    // the exponent must be taken after rounding to `digits`, so let `{:e}` do the rounding
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}
