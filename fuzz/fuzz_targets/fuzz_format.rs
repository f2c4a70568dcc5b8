//! Fuzz target for input masking.
//!
//! Tests that the formatters never panic and hold the roundtrip and
//! idempotence invariants on arbitrary input.

#![no_main]

use cadastro::{format_birth_date, format_cpf, strip_formatting};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let cpf = format_cpf(data);
    let date = format_birth_date(data);
    let digits = strip_formatting(data);

    // Length caps
    assert!(cpf.len() <= 14);
    assert!(date.len() <= 10);

    // Stripping the mask recovers the (truncated) typed digits
    let cap = digits.len().min(11);
    assert_eq!(strip_formatting(&cpf), &digits[..cap]);
    let cap = digits.len().min(8);
    assert_eq!(strip_formatting(&date), &digits[..cap]);

    // Idempotence
    assert_eq!(format_cpf(&cpf), cpf);
    assert_eq!(format_birth_date(&date), date);
});
