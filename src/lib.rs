//! # cadastro
//!
//! Passenger registration form validation for Rust.
//!
//! ## Features
//!
//! - CPF validation via the modulo-11 check digit scheme
//! - Strict birth date validation (real calendar dates, no future dates)
//! - Incremental input masking for CPF and date fields
//! - Form orchestration with a field-level error map
//!
//! ## Quick Start
//!
//! ```rust
//! use cadastro::{is_valid_cpf, validate_cpf};
//!
//! // Quick boolean check, formatted or not
//! assert!(is_valid_cpf("529.982.247-25"));
//! assert!(!is_valid_cpf("529.982.247-00"));
//!
//! // Full validation with a typed result
//! let cpf = validate_cpf("52998224725").unwrap();
//! assert_eq!(cpf.formatted(), "529.982.247-25");
//!
//! // Safe for logging - never exposes the full number
//! println!("document: {}", cpf); // "***.***.***-25"
//! ```
//!
//! ## Input Masking
//!
//! Feed each keystroke's field contents through the formatters and write
//! the result back into the input:
//!
//! ```rust
//! use cadastro::{format_cpf, format_birth_date};
//!
//! assert_eq!(format_cpf("5299822"), "529.982.2");
//! assert_eq!(format_birth_date("010120"), "01/01/20");
//! ```
//!
//! ## Birth Dates
//!
//! ```rust
//! use cadastro::is_valid_birth_date;
//!
//! assert!(is_valid_birth_date("29/02/2000")); // leap year
//! assert!(!is_valid_birth_date("29/02/2001")); // rejected, not rolled to March
//! assert!(!is_valid_birth_date("31/04/2024")); // April has 30 days
//! ```
//!
//! ## Form Orchestration
//!
//! ```rust
//! use cadastro::{Field, FieldError, RegistrationForm};
//!
//! let mut form = RegistrationForm::new();
//! form.input_full_name("Ana Silva");
//! form.input_cpf("52998224700"); // bad check digits
//! form.input_birth_date("01012000");
//!
//! let errors = form.submit().unwrap_err();
//! assert_eq!(errors.get(Field::Cpf), Some(FieldError::Invalid));
//! assert_eq!(errors.message_for(Field::Cpf).unwrap(), "CPF is invalid");
//!
//! form.input_cpf("52998224725");
//! assert!(form.submit().is_ok());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serializable fields, error maps and birth dates |
//! | `generate` | Random test CPF generation |
//! | `cli` | Command-line tool |
//!
//! ## Handling of personal data
//!
//! A CPF identifies a natural person, so the [`Cpf`] type is built for
//! LGPD-conscious codebases:
//!
//! - Digits stored in a fixed-size array, not a heap string
//! - Automatic memory zeroization when a `Cpf` is dropped
//! - `Debug` and `Display` show masked numbers only
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cpf;
pub mod date;
pub mod error;
pub mod form;
pub mod format;
pub mod generate;
pub mod mod11;
pub mod validate;

// Re-export main types at crate root
pub use cpf::{Cpf, CPF_DIGITS};
pub use date::{
    is_valid_birth_date, parse_birth_date, validate_birth_date, validate_birth_date_on, BirthDate,
    DateError,
};
pub use error::CpfError;
pub use form::{Field, FieldError, FormErrors, RegistrationForm};
pub use format::{format_birth_date, format_cpf, strip_formatting};
pub use validate::{is_valid_cpf, validate_cpf};
