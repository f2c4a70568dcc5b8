//! Rich error types for CPF validation.
//!
//! Each variant pins down exactly why a CPF was rejected, so a caller can
//! surface an actionable message instead of a bare boolean.

use std::fmt;

/// Errors that can occur during CPF validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CpfError {
    /// The input string was empty or contained only whitespace.
    Empty,

    /// The input did not contain exactly 11 digits.
    WrongLength {
        /// The number of digits found after stripping formatting.
        length: usize,
    },

    /// All 11 digits are identical.
    ///
    /// These sequences satisfy the check-digit arithmetic but are not
    /// issued by the registry.
    RepeatedDigits,

    /// A check digit does not match the value computed from the digits
    /// before it. This usually indicates a typo.
    CheckDigitMismatch {
        /// Which check digit failed: 1 (10th digit) or 2 (11th digit).
        position: u8,
        /// The digit the modulo-11 scheme requires.
        expected: u8,
        /// The digit actually present in the input.
        found: u8,
    },
}

impl fmt::Display for CpfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "CPF is empty"),

            Self::WrongLength { length } => {
                write!(f, "CPF must have 11 digits, got {}", length)
            }

            Self::RepeatedDigits => {
                write!(f, "CPF with 11 repeated digits is not issued by the registry")
            }

            Self::CheckDigitMismatch {
                position,
                expected,
                found,
            } => {
                write!(
                    f,
                    "check digit {} mismatch: expected {}, found {} - please verify the number",
                    position, expected, found
                )
            }
        }
    }
}

impl std::error::Error for CpfError {}
