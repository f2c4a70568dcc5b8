//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use cadastro::{
    format_birth_date, format_cpf, is_valid_birth_date, is_valid_cpf, mod11, parse_birth_date,
    strip_formatting, validate_cpf, RegistrationForm,
};
use chrono::NaiveDate;
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Generates a random digit string of a given length.
fn digit_string(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generates a random digit string with a length within range.
fn digit_string_range(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    range.prop_flat_map(digit_string)
}

/// Generates a valid CPF by computing check digits over random base digits.
fn valid_cpf_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..10, 9)
        .prop_filter("repeated base digits produce reserved sequences", |base| {
            base.iter().any(|&d| d != base[0])
        })
        .prop_map(|base| {
            let mut digits = [0u8; 11];
            digits[..9].copy_from_slice(&base);
            digits[9] = mod11::check_digit(&digits[..9]);
            digits[10] = mod11::check_digit(&digits[..10]);
            digits.iter().map(|&d| (b'0' + d) as char).collect()
        })
}

// =============================================================================
// INPUT MASKING PROPERTIES
// =============================================================================

proptest! {
    /// Property: stripping the CPF mask recovers the typed digits.
    #[test]
    fn cpf_mask_roundtrip(digits in digit_string_range(0..=11)) {
        let formatted = format_cpf(&digits);
        prop_assert_eq!(strip_formatting(&formatted), digits);
    }

    /// Property: stripping the date mask recovers the typed digits.
    #[test]
    fn date_mask_roundtrip(digits in digit_string_range(0..=8)) {
        let formatted = format_birth_date(&digits);
        prop_assert_eq!(strip_formatting(&formatted), digits);
    }

    /// Property: the formatters are idempotent on their own output.
    #[test]
    fn formatters_idempotent(input in ".*") {
        let cpf_once = format_cpf(&input);
        prop_assert_eq!(format_cpf(&cpf_once), cpf_once.clone());

        let date_once = format_birth_date(&input);
        prop_assert_eq!(format_birth_date(&date_once), date_once.clone());
    }

    /// Property: formatted output never exceeds the full mask length and
    /// never ends in a separator.
    #[test]
    fn mask_shape(input in ".*") {
        let cpf = format_cpf(&input);
        prop_assert!(cpf.len() <= 14);
        prop_assert!(!cpf.ends_with('.') && !cpf.ends_with('-'));

        let date = format_birth_date(&input);
        prop_assert!(date.len() <= 10);
        prop_assert!(!date.ends_with('/'));
    }

    /// Property: excess digits are discarded, keeping the first 11/8.
    #[test]
    fn mask_truncates(digits in digit_string_range(12..=30)) {
        prop_assert_eq!(strip_formatting(&format_cpf(&digits)), &digits[..11]);
        prop_assert_eq!(strip_formatting(&format_birth_date(&digits)), &digits[..8]);
    }
}

// =============================================================================
// CPF VALIDATION PROPERTIES
// =============================================================================

proptest! {
    /// Property: computed check digits always produce a valid CPF.
    #[test]
    fn computed_check_digits_validate(cpf in valid_cpf_strategy()) {
        prop_assert!(is_valid_cpf(&cpf), "should be valid: {}", cpf);
    }

    /// Property: the mask never changes the validation verdict.
    #[test]
    fn mask_preserves_validity(cpf in valid_cpf_strategy()) {
        prop_assert!(is_valid_cpf(&format_cpf(&cpf)));
    }

    /// Property: changing either check digit invalidates the CPF.
    ///
    /// (Base-digit changes are not covered: the remainder collapse in the
    /// modulo-11 scheme means two valid CPFs can differ in one base
    /// digit.)
    #[test]
    fn check_digit_change_invalidates(
        cpf in valid_cpf_strategy(),
        position in 9usize..11,
        delta in 1u8..10,
    ) {
        let mut digits: Vec<u8> = cpf.bytes().map(|b| b - b'0').collect();
        digits[position] = (digits[position] + delta) % 10;
        let mutated: String = digits.iter().map(|&d| (b'0' + d) as char).collect();
        prop_assert!(
            !is_valid_cpf(&mutated),
            "changing digit {} of {} should invalidate ({})",
            position,
            cpf,
            mutated
        );
    }

    /// Property: repeated-digit sequences never validate.
    #[test]
    fn repeated_sequences_rejected(digit in 0u8..10) {
        let cpf: String = std::iter::repeat((b'0' + digit) as char).take(11).collect();
        prop_assert!(!is_valid_cpf(&cpf));
    }

    /// Property: only 11-digit inputs can validate.
    #[test]
    fn wrong_length_rejected(digits in digit_string_range(0..=25)) {
        if digits.len() != 11 {
            prop_assert!(!is_valid_cpf(&digits));
        }
    }

    /// Property: is_valid_cpf is consistent with validate_cpf.
    #[test]
    fn is_valid_consistent_with_validate(input in ".*") {
        prop_assert_eq!(is_valid_cpf(&input), validate_cpf(&input).is_ok());
    }

    /// Property: validation never panics on any input.
    #[test]
    fn validation_never_panics(input in ".*") {
        let _ = validate_cpf(&input);
        let _ = is_valid_cpf(&input);
    }
}

// =============================================================================
// BIRTH DATE PROPERTIES
// =============================================================================

proptest! {
    /// Property: parsing agrees with the calendar on date existence.
    #[test]
    fn parse_agrees_with_calendar(day in 0u32..40, month in 0u32..15, year in 1800u32..2200) {
        let input = format!("{:02}/{:02}/{:04}", day, month, year);
        let exists = NaiveDate::from_ymd_opt(year as i32, month, day).is_some();
        prop_assert_eq!(parse_birth_date(&input).is_ok(), exists, "input {}", input);
    }

    /// Property: parsed dates display back to the exact input.
    #[test]
    fn parse_display_roundtrip(day in 1u32..=28, month in 1u32..=12, year in 1900u32..=2020) {
        let input = format!("{:02}/{:02}/{:04}", day, month, year);
        let date = parse_birth_date(&input).unwrap();
        prop_assert_eq!(date.to_string(), input);
    }

    /// Property: safely-past dates always validate.
    #[test]
    fn past_dates_validate(day in 1u32..=28, month in 1u32..=12, year in 1900u32..=2000) {
        let input = format!("{:02}/{:02}/{:04}", day, month, year);
        prop_assert!(is_valid_birth_date(&input));
    }

    /// Property: date validation never panics on any input.
    #[test]
    fn date_validation_never_panics(input in ".*") {
        let _ = parse_birth_date(&input);
        let _ = is_valid_birth_date(&input);
    }
}

// =============================================================================
// FORM PROPERTIES
// =============================================================================

proptest! {
    /// Property: a submit attempt either succeeds and clears the form or
    /// fails and leaves every field untouched.
    #[test]
    fn submit_all_or_nothing(name in ".*", cpf_input in ".*", date_input in ".*") {
        let mut form = RegistrationForm::new();
        form.input_full_name(&name);
        form.input_cpf(&cpf_input);
        form.input_birth_date(&date_input);

        let cpf_before = form.cpf().to_string();
        let date_before = form.birth_date().to_string();

        match form.submit() {
            Ok(()) => {
                prop_assert_eq!(form.full_name(), "");
                prop_assert_eq!(form.cpf(), "");
                prop_assert_eq!(form.birth_date(), "");
            }
            Err(errors) => {
                prop_assert!(!errors.is_empty());
                prop_assert_eq!(form.full_name(), name.as_str());
                prop_assert_eq!(form.cpf(), cpf_before.as_str());
                prop_assert_eq!(form.birth_date(), date_before.as_str());
            }
        }
    }

    /// Property: a fully valid form always submits.
    #[test]
    fn valid_form_submits(cpf in valid_cpf_strategy(), day in 1u32..=28, month in 1u32..=12) {
        let mut form = RegistrationForm::new();
        form.input_full_name("Ana Silva");
        form.input_cpf(&cpf);
        form.input_birth_date(&format!("{:02}{:02}1990", day, month));
        prop_assert!(form.submit().is_ok());
    }
}
