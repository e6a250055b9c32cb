use crate::model::CalcError;

/// Treats an absent or empty query value as missing.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Reads the longest numeric prefix after leading whitespace, so `20%` is 20
/// and `100abc` is 100. Fails when there is no prefix or it is not finite.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_digits = leading_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = leading_digits(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_digits = leading_digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

fn leading_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// A non-negative monetary amount. `abs` folds `-0` into `0`.
pub fn parse_amount(raw: &str) -> Result<f64, CalcError> {
    match parse_number(raw) {
        Some(n) if n >= 0.0 => Ok(n.abs()),
        _ => Err(CalcError::InvalidAmount),
    }
}

/// Rounds to the cent, half away from zero. At 2^52 / 100 and above a float
/// has no fractional cents left, and scaling by 100 could overflow.
pub fn round2(value: f64) -> f64 {
    if value.abs() >= 2f64.powi(52) / 100.0 {
        return value;
    }
    (value * 100.0).round() / 100.0
}

/// Rounds a computed amount, rejecting results that overflowed.
pub fn round_amount(value: f64) -> Result<f64, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::InvalidAmount);
    }
    Ok(round2(value))
}
