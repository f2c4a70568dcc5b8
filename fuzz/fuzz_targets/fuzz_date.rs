//! Fuzz target for birth date parsing.
//!
//! Tests that date functions never panic on arbitrary input.

#![no_main]

use cadastro::{is_valid_birth_date, parse_birth_date, validate_birth_date};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let parsed = parse_birth_date(data);
    let _ = validate_birth_date(data);
    let _ = is_valid_birth_date(data);

    if let Ok(date) = parsed {
        // A parsed date displays back to its own input
        assert_eq!(date.to_string(), data);
        assert!((1..=31).contains(&date.day()));
        assert!((1..=12).contains(&date.month()));
    }
});
