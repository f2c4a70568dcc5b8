//! Birth date parsing and validation.
//!
//! Dates arrive from the masked input field in `dd/mm/yyyy` form and are
//! validated strictly: exact syntax, a real calendar day, and not in the
//! future. Calendar rules (month lengths, leap years) come from `chrono`
//! rather than hand-rolled arithmetic, so `31/04/2024` and `29/02/2001`
//! are rejected instead of rolling into the next month.
//!
//! # Example
//!
//! ```
//! use cadastro::date::{parse_birth_date, is_valid_birth_date};
//!
//! let date = parse_birth_date("01/01/2000").unwrap();
//! assert_eq!(date.day(), 1);
//! assert_eq!(date.year(), 2000);
//!
//! assert!(is_valid_birth_date("29/02/2000")); // leap year
//! assert!(!is_valid_birth_date("29/02/2001")); // not a leap year
//! ```

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

/// A validated birth date.
///
/// Only `Serialize` is derived: deserializing field-by-field could build
/// a date that never went through calendar validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BirthDate {
    /// Day of month (1-31)
    day: u8,
    /// Month (1-12)
    month: u8,
    /// Four-digit year
    year: u16,
}

impl BirthDate {
    /// Creates a new birth date.
    ///
    /// Returns `None` if the day/month/year combination is not a real
    /// calendar date.
    pub fn new(day: u8, month: u8, year: u16) -> Option<Self> {
        NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
            .map(|_| Self { day, month, year })
    }

    /// Returns the day of month (1-31).
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the age in whole years on the given reference date.
    ///
    /// Returns 0 if the reference date is before the birth date.
    pub fn age_on(&self, reference: NaiveDate) -> u32 {
        let mut years = reference.year() - self.year as i32;
        let before_birthday = (reference.month(), reference.day())
            < (self.month as u32, self.day as u32);
        if before_birthday {
            years -= 1;
        }
        years.max(0) as u32
    }

    /// Returns the age in whole years today (local calendar date).
    pub fn age(&self) -> u32 {
        self.age_on(Local::now().date_naive())
    }

    /// Converts to a `chrono` date.
    ///
    /// Infallible because a `BirthDate` is only constructed from a real
    /// calendar date.
    pub(crate) fn to_naive(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year as i32, self.month as u32, self.day as u32)
            .unwrap_or_default()
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

/// Errors that can occur during birth date parsing/validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateError {
    /// The input string is empty.
    Empty,
    /// The input does not match `dd/mm/yyyy` exactly.
    InvalidFormat,
    /// Syntactically well-formed but not a real calendar date, e.g.
    /// `31/04/2024` or `29/02/2001`.
    ImpossibleDate {
        /// Day as parsed from the input.
        day: u8,
        /// Month as parsed from the input.
        month: u8,
        /// Year as parsed from the input.
        year: u16,
    },
    /// A real calendar date, but after the validation date.
    FutureDate {
        /// The rejected date.
        date: BirthDate,
    },
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "birth date is empty"),
            Self::InvalidFormat => {
                write!(f, "invalid date format (expected dd/mm/yyyy)")
            }
            Self::ImpossibleDate { day, month, year } => {
                write!(
                    f,
                    "{:02}/{:02}/{:04} is not a calendar date",
                    day, month, year
                )
            }
            Self::FutureDate { date } => {
                write!(f, "birth date {} is in the future", date)
            }
        }
    }
}

impl std::error::Error for DateError {}

/// Parses a birth date string in strict `dd/mm/yyyy` form.
///
/// Exactly ten characters, `/` at positions 2 and 5, digits everywhere
/// else. No trimming, no partial dates, no alternate separators - the
/// masked input field only ever produces this shape.
///
/// # Example
///
/// ```
/// use cadastro::date::{parse_birth_date, DateError};
///
/// let date = parse_birth_date("29/02/2000").unwrap();
/// assert_eq!((date.day(), date.month(), date.year()), (29, 2, 2000));
///
/// assert_eq!(parse_birth_date("1/1/2000").unwrap_err(), DateError::InvalidFormat);
/// assert_eq!(parse_birth_date("01-01-2000").unwrap_err(), DateError::InvalidFormat);
/// ```
pub fn parse_birth_date(input: &str) -> Result<BirthDate, DateError> {
    if input.is_empty() {
        return Err(DateError::Empty);
    }

    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
        return Err(DateError::InvalidFormat);
    }

    for &i in &[0usize, 1, 3, 4, 6, 7, 8, 9] {
        if !bytes[i].is_ascii_digit() {
            return Err(DateError::InvalidFormat);
        }
    }

    let day = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    let month = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
    let year = bytes[6..10]
        .iter()
        .fold(0u16, |acc, &b| acc * 10 + (b - b'0') as u16);

    BirthDate::new(day, month, year).ok_or(DateError::ImpossibleDate { day, month, year })
}

/// Validates a birth date string against an explicit reference date.
///
/// Parses with [`parse_birth_date`] and rejects dates strictly after
/// `today`. A date equal to `today` is accepted. Useful for tests and for
/// callers that need a fixed clock.
pub fn validate_birth_date_on(input: &str, today: NaiveDate) -> Result<BirthDate, DateError> {
    let date = parse_birth_date(input)?;

    if date.to_naive() > today {
        return Err(DateError::FutureDate { date });
    }

    Ok(date)
}

/// Validates a birth date string.
///
/// Like [`validate_birth_date_on`], with "today" taken from the local
/// calendar date at the moment of validation.
///
/// # Example
///
/// ```
/// use cadastro::date::{validate_birth_date, DateError};
///
/// assert!(validate_birth_date("01/01/2000").is_ok());
///
/// // Far-future date
/// let err = validate_birth_date("01/01/9999").unwrap_err();
/// assert!(matches!(err, DateError::FutureDate { .. }));
/// ```
pub fn validate_birth_date(input: &str) -> Result<BirthDate, DateError> {
    validate_birth_date_on(input, Local::now().date_naive())
}

/// Quickly checks whether a birth date string is valid.
///
/// The boolean form of [`validate_birth_date`].
#[inline]
pub fn is_valid_birth_date(input: &str) -> bool {
    validate_birth_date(input).is_ok()
}
