//! Registration form state and submit orchestration.
//!
//! [`RegistrationForm`] is the thin shell a UI layer drives: it stores the
//! three field values, runs the masking formatters on keystrokes, and on
//! submit runs every field validator unconditionally so the caller can
//! show all problems at once.
//!
//! The form has exactly two observable states - "has outstanding errors"
//! and "clean" - transitioning only on submit attempts and resetting to
//! the initial state on success.
//!
//! # Example
//!
//! ```
//! use cadastro::RegistrationForm;
//!
//! let mut form = RegistrationForm::new();
//! form.input_full_name("Ana Silva");
//! form.input_cpf("52998224725");
//! form.input_birth_date("01012000");
//!
//! assert_eq!(form.cpf(), "529.982.247-25");
//! assert_eq!(form.birth_date(), "01/01/2000");
//!
//! assert!(form.submit().is_ok());
//! // Success resets the form
//! assert_eq!(form.full_name(), "");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::date::is_valid_birth_date;
use crate::format::{format_birth_date, format_cpf};
use crate::validate::is_valid_cpf;

/// The three fields of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    /// The passenger's full name.
    FullName,
    /// The passenger's CPF.
    Cpf,
    /// The passenger's birth date.
    BirthDate,
}

impl Field {
    /// All form fields, in display order.
    pub const ALL: [Field; 3] = [Field::FullName, Field::Cpf, Field::BirthDate];

    /// Returns the stable string key for this field.
    #[inline]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Cpf => "cpf",
            Self::BirthDate => "birth_date",
        }
    }

    /// Returns the human-readable label used in error messages.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FullName => "full name",
            Self::Cpf => "CPF",
            Self::BirthDate => "birth date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Why a field failed validation on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldError {
    /// The field was empty or whitespace-only.
    Required,
    /// The field was filled in but failed its validator.
    Invalid,
}

impl FieldError {
    /// Renders the inline error message for a field.
    pub fn message(&self, field: Field) -> String {
        match self {
            Self::Required => format!("{} is required", field.label()),
            Self::Invalid => format!("{} is invalid", field.label()),
        }
    }
}

/// The field-to-error map produced by a failed submit.
///
/// Absence of a field means it is valid. Iteration order is fixed to the
/// form's display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormErrors(BTreeMap<Field, FieldError>);

impl FormErrors {
    /// Creates an empty error map.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    /// Returns the error for a field, if any.
    #[inline]
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Returns the rendered message for a field, if it has an error.
    pub fn message_for(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| e.message(field))
    }

    /// Returns true if no field has an error.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of fields with errors.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over `(field, error)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(&field, &error)| (field, error))
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", error.message(field))?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

/// The passenger registration form.
///
/// Owns the current field values (formatted as typed) and the error map
/// from the last submit attempt. Created empty, mutated on every
/// keystroke through the `input_*` methods, validated on [`submit`].
///
/// [`submit`]: RegistrationForm::submit
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    full_name: String,
    cpf: String,
    birth_date: String,
    errors: FormErrors,
}

impl RegistrationForm {
    /// Creates an empty form.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the full name field verbatim.
    pub fn input_full_name(&mut self, value: &str) {
        self.full_name = value.to_string();
    }

    /// Runs the CPF mask over the input, stores the result, and returns
    /// the display string for the UI to write back into the field.
    pub fn input_cpf(&mut self, value: &str) -> &str {
        self.cpf = format_cpf(value);
        &self.cpf
    }

    /// Runs the date mask over the input, stores the result, and returns
    /// the display string for the UI to write back into the field.
    pub fn input_birth_date(&mut self, value: &str) -> &str {
        self.birth_date = format_birth_date(value);
        &self.birth_date
    }

    /// Returns the current full name value.
    #[inline]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the current CPF display value.
    #[inline]
    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    /// Returns the current birth date display value.
    #[inline]
    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    /// Returns the error map from the last submit attempt.
    #[inline]
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Validates all three fields and submits.
    ///
    /// Every field is validated on every attempt - no short-circuiting -
    /// so the returned map carries every problem at once. On failure the
    /// field values are left untouched for correction; on success all
    /// fields and errors reset to empty.
    pub fn submit(&mut self) -> Result<(), FormErrors> {
        self.submit_with(|| {})
    }

    /// Like [`submit`](RegistrationForm::submit), invoking `on_success`
    /// before the reset.
    ///
    /// The callback is where a UI layer hooks its success notification;
    /// it only runs when the error map is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use cadastro::RegistrationForm;
    ///
    /// let mut form = RegistrationForm::new();
    /// form.input_full_name("Ana Silva");
    /// form.input_cpf("529.982.247-25");
    /// form.input_birth_date("01/01/2000");
    ///
    /// let mut notified = false;
    /// form.submit_with(|| notified = true).unwrap();
    /// assert!(notified);
    /// ```
    pub fn submit_with<F: FnOnce()>(&mut self, on_success: F) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();

        if self.full_name.trim().is_empty() {
            errors.insert(Field::FullName, FieldError::Required);
        }

        if self.cpf.trim().is_empty() {
            errors.insert(Field::Cpf, FieldError::Required);
        } else if !is_valid_cpf(&self.cpf) {
            errors.insert(Field::Cpf, FieldError::Invalid);
        }

        if self.birth_date.trim().is_empty() {
            errors.insert(Field::BirthDate, FieldError::Required);
        } else if !is_valid_birth_date(&self.birth_date) {
            errors.insert(Field::BirthDate, FieldError::Invalid);
        }

        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }

        on_success();

        self.full_name.clear();
        self.cpf.clear();
        self.birth_date.clear();
        self.errors.clear();

        Ok(())
    }
}
