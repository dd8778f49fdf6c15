//! Plain-text signal loading
//!
//! One sample per line. Each trimmed line contributes its leading number, so
//! `0.5,1.0` reads as 0.5 and `3 V` as 3, the same way uploaded signal files
//! are read by the web client. Lines without a leading number are skipped.

/// Parse newline-separated samples
///
/// Only the first numeric value of a line is used; trailing columns and
/// units are ignored. `Infinity` (optionally signed) is kept so that buffer
/// validation can reject it. Lines with no numeric prefix, including NaN,
/// are skipped.
pub fn parse_samples(text: &str) -> Vec<f64> {
    text.lines()
        .filter_map(|line| leading_number(line.trim()))
        .collect()
}

/// Longest prefix of `text` that reads as a decimal number
///
/// Accepts an optional sign, digits with an optional fraction (`5.`, `.5`)
/// and an exponent only when it carries at least one digit.
fn leading_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            end = 1;
            true
        }
        Some(b'+') => {
            end = 1;
            false
        }
        _ => false,
    };

    if text[end..].starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_samples() {
        let text = "1.0\n2.5\n\n  -3\nheader\n4e-1\n";
        assert_eq!(parse_samples(text), vec![1.0, 2.5, -3.0, 0.4]);
    }

    #[test]
    fn test_parse_crlf_and_nan() {
        let text = "0.5\r\nNaN\r\n1\r\n";
        assert_eq!(parse_samples(text), vec![0.5, 1.0]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_samples("").is_empty());
        assert!(parse_samples("time,value\n").is_empty());
    }

    #[test]
    fn test_leading_value_of_each_line() {
        let text = "0.5,1.0\n1.5,2.0\n3 V\n4\n";
        assert_eq!(parse_samples(text), vec![0.5, 1.5, 3.0, 4.0]);
    }

    #[test]
    fn test_partial_numbers() {
        assert_eq!(parse_samples(".5\n5.\n-.25x\n+2"), vec![0.5, 5.0, -0.25, 2.0]);
        // An exponent marker without digits ends the number
        assert_eq!(parse_samples("1e\n2e+\n3E2kHz"), vec![1.0, 2.0, 300.0]);
        assert!(parse_samples(".\n-\n+.e5\nV 3").is_empty());
    }

    #[test]
    fn test_infinity_is_kept() {
        let values = parse_samples("Infinity\n-Infinity dB\ninf\n");
        assert_eq!(values, vec![f64::INFINITY, f64::NEG_INFINITY]);
    }
}
