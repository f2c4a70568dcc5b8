//! Incremental input masking for form fields.
//!
//! These functions reformat raw keystrokes into display strings as the
//! user types, without changing the underlying digits. Feed them the
//! current contents of the input field on every change event and write
//! the result back.
//!
//! # Format Conventions
//!
//! - **CPF**: `ddd.ddd.ddd-dd` (dots after the 3rd and 6th digit, dash
//!   after the 9th), capped at 11 digits
//! - **Birth date**: `dd/mm/yyyy`, capped at 8 digits
//!
//! Separators appear only once the digit after them exists, so the output
//! never ends in a dangling `.`, `-` or `/`.
//!
//! # Example
//!
//! ```
//! use cadastro::format::{format_cpf, format_birth_date};
//!
//! assert_eq!(format_cpf("5299"), "529.9");
//! assert_eq!(format_cpf("52998224725"), "529.982.247-25");
//!
//! assert_eq!(format_birth_date("0101"), "01/01");
//! assert_eq!(format_birth_date("01012000"), "01/01/2000");
//! ```

use crate::cpf::CPF_DIGITS;

/// Number of digits in a fully typed birth date.
const DATE_DIGITS: usize = 8;

/// Formats CPF input as the user types.
///
/// Strips every non-digit character, keeps at most 11 digits, and inserts
/// the standard separators. The result is always the longest prefix of
/// `ddd.ddd.ddd-dd` the available digits support; extra digits past the
/// 11th are discarded.
///
/// Pure and idempotent: re-applying it to its own output changes nothing.
///
/// # Example
///
/// ```
/// use cadastro::format::format_cpf;
///
/// assert_eq!(format_cpf("529"), "529");
/// assert_eq!(format_cpf("5299822"), "529.982.2");
/// assert_eq!(format_cpf("529.982.247-25"), "529.982.247-25");
/// assert_eq!(format_cpf("529982247259999"), "529.982.247-25");
/// ```
pub fn format_cpf(input: &str) -> String {
    let mut result = String::with_capacity(14);
    let mut count = 0usize;

    for c in input.chars() {
        if !c.is_ascii_digit() {
            continue;
        }
        if count == CPF_DIGITS {
            break;
        }
        if count == 3 || count == 6 {
            result.push('.');
        } else if count == 9 {
            result.push('-');
        }
        result.push(c);
        count += 1;
    }

    result
}

/// Formats birth date input as the user types.
///
/// Same scheme as [`format_cpf`] with `/` separators after the day and
/// month groups: the longest prefix of `dd/mm/yyyy` the digits support,
/// extra digits past the 8th discarded.
///
/// # Example
///
/// ```
/// use cadastro::format::format_birth_date;
///
/// assert_eq!(format_birth_date("0"), "0");
/// assert_eq!(format_birth_date("011"), "01/1");
/// assert_eq!(format_birth_date("01/01/2000"), "01/01/2000");
/// assert_eq!(format_birth_date("010120001"), "01/01/2000");
/// ```
pub fn format_birth_date(input: &str) -> String {
    let mut result = String::with_capacity(10);
    let mut count = 0usize;

    for c in input.chars() {
        if !c.is_ascii_digit() {
            continue;
        }
        if count == DATE_DIGITS {
            break;
        }
        if count == 2 || count == 4 {
            result.push('/');
        }
        result.push(c);
        count += 1;
    }

    result
}

/// Strips all formatting, leaving only digits.
///
/// # Example
///
/// ```
/// use cadastro::format::strip_formatting;
///
/// assert_eq!(strip_formatting("529.982.247-25"), "52998224725");
/// assert_eq!(strip_formatting("01/01/2000"), "01012000");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cpf_progressive() {
        assert_eq!(format_cpf(""), "");
        assert_eq!(format_cpf("5"), "5");
        assert_eq!(format_cpf("52"), "52");
        assert_eq!(format_cpf("529"), "529");
        assert_eq!(format_cpf("5299"), "529.9");
        assert_eq!(format_cpf("529982"), "529.982");
        assert_eq!(format_cpf("5299822"), "529.982.2");
        assert_eq!(format_cpf("529982247"), "529.982.247");
        assert_eq!(format_cpf("5299822472"), "529.982.247-2");
        assert_eq!(format_cpf("52998224725"), "529.982.247-25");
    }

    #[test]
    fn test_format_cpf_no_trailing_separator() {
        // A separator only appears once the digit after it exists
        for input in ["529", "529982", "529982247"] {
            let formatted = format_cpf(input);
            assert!(
                !formatted.ends_with('.') && !formatted.ends_with('-'),
                "{:?} must not end in a separator",
                formatted
            );
        }
    }

    #[test]
    fn test_format_cpf_truncates_extra_digits() {
        assert_eq!(format_cpf("529982247259"), "529.982.247-25");
        assert_eq!(format_cpf("52998224725999999"), "529.982.247-25");
    }

    #[test]
    fn test_format_cpf_ignores_non_digits() {
        assert_eq!(format_cpf("529.982.247-25"), "529.982.247-25");
        assert_eq!(format_cpf("5a2b9"), "529");
        assert_eq!(format_cpf("   "), "");
        assert_eq!(format_cpf("abc"), "");
    }

    #[test]
    fn test_format_cpf_idempotent() {
        let once = format_cpf("52998224725");
        assert_eq!(format_cpf(&once), once);

        let partial = format_cpf("52998");
        assert_eq!(format_cpf(&partial), partial);
    }

    #[test]
    fn test_format_birth_date_progressive() {
        assert_eq!(format_birth_date(""), "");
        assert_eq!(format_birth_date("0"), "0");
        assert_eq!(format_birth_date("01"), "01");
        assert_eq!(format_birth_date("010"), "01/0");
        assert_eq!(format_birth_date("0101"), "01/01");
        assert_eq!(format_birth_date("01012"), "01/01/2");
        assert_eq!(format_birth_date("01012000"), "01/01/2000");
    }

    #[test]
    fn test_format_birth_date_truncates_extra_digits() {
        assert_eq!(format_birth_date("010120009"), "01/01/2000");
        assert_eq!(format_birth_date("01012000123456"), "01/01/2000");
    }

    #[test]
    fn test_format_birth_date_no_trailing_separator() {
        assert_eq!(format_birth_date("01"), "01");
        assert_eq!(format_birth_date("0101"), "01/01");
        assert!(!format_birth_date("01").ends_with('/'));
    }

    #[test]
    fn test_format_birth_date_idempotent() {
        let once = format_birth_date("01012000");
        assert_eq!(format_birth_date(&once), once);
    }

    #[test]
    fn test_strip_formatting() {
        assert_eq!(strip_formatting("529.982.247-25"), "52998224725");
        assert_eq!(strip_formatting("01/01/2000"), "01012000");
        assert_eq!(strip_formatting("no digits"), "");
    }

    #[test]
    fn test_strip_roundtrip() {
        // Stripping the formatted output recovers the typed digits
        for digits in ["5", "5299", "529982247", "52998224725"] {
            assert_eq!(strip_formatting(&format_cpf(digits)), digits);
        }
        for digits in ["0", "01", "0101", "01012000"] {
            assert_eq!(strip_formatting(&format_birth_date(digits)), digits);
        }
    }
}
