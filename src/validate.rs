//! CPF validation orchestration.
//!
//! This module provides the primary `validate_cpf` function that combines
//! digit extraction, the repeated-digit rule, and modulo-11 check digit
//! verification into a single operation.
//!
//! Formatting characters are not errors: everything that is not an ASCII
//! digit is stripped before validation, exactly as a masked input field
//! delivers its value. `"529.982.247-25"` and `"52998224725"` validate
//! identically.

use crate::cpf::{Cpf, CPF_DIGITS};
use crate::error::CpfError;
use crate::mod11;

/// Validates a CPF string.
///
/// This is the primary validation function. It performs:
/// 1. Digit extraction (every non-digit character is stripped)
/// 2. Length validation (exactly 11 digits)
/// 3. Repeated-digit rejection
/// 4. Verification of both modulo-11 check digits
///
/// # Arguments
///
/// * `input` - The CPF as a string, formatted or not.
///
/// # Returns
///
/// * `Ok(Cpf)` - If the CPF is valid
/// * `Err(CpfError)` - If validation fails, with details about why
///
/// # Example
///
/// ```
/// use cadastro::{validate_cpf, CpfError};
///
/// let cpf = validate_cpf("529.982.247-25").unwrap();
/// assert_eq!(cpf.masked(), "***.***.***-25");
///
/// // Wrong check digits
/// let err = validate_cpf("529.982.247-00").unwrap_err();
/// assert!(matches!(err, CpfError::CheckDigitMismatch { .. }));
/// ```
pub fn validate_cpf(input: &str) -> Result<Cpf, CpfError> {
    if input.trim().is_empty() {
        return Err(CpfError::Empty);
    }

    // Extract digits, dropping formatting of any shape. Digits past the
    // 11th are only counted so the error can report the real length.
    let mut digits = [0u8; CPF_DIGITS];
    let mut count = 0usize;

    for c in input.chars() {
        if c.is_ascii_digit() {
            if count < CPF_DIGITS {
                digits[count] = (c as u8) - b'0';
            }
            count += 1;
        }
    }

    if count != CPF_DIGITS {
        return Err(CpfError::WrongLength { length: count });
    }

    if mod11::all_repeated(&digits) {
        return Err(CpfError::RepeatedDigits);
    }

    let first = mod11::check_digit(&digits[..9]);
    if first != digits[9] {
        return Err(CpfError::CheckDigitMismatch {
            position: 1,
            expected: first,
            found: digits[9],
        });
    }

    let second = mod11::check_digit(&digits[..10]);
    if second != digits[10] {
        return Err(CpfError::CheckDigitMismatch {
            position: 2,
            expected: second,
            found: digits[10],
        });
    }

    Ok(Cpf::new(digits))
}

/// Quickly checks whether a CPF string is valid.
///
/// This is the boolean form of [`validate_cpf`] for callers that do not
/// need the reason for a failure.
///
/// # Example
///
/// ```
/// use cadastro::is_valid_cpf;
///
/// assert!(is_valid_cpf("52998224725"));
/// assert!(is_valid_cpf("529.982.247-25"));
/// assert!(!is_valid_cpf("52998224700"));
/// assert!(!is_valid_cpf("11111111111"));
/// ```
#[inline]
pub fn is_valid_cpf(input: &str) -> bool {
    validate_cpf(input).is_ok()
}
