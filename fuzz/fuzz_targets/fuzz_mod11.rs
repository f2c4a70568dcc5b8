//! Fuzz target for the modulo-11 arithmetic.
//!
//! Tests that the check digit functions never panic and maintain
//! invariants.

#![no_main]

use cadastro::mod11;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Clamp values to valid digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    let _ = mod11::all_repeated(&digits);
    let _ = mod11::validate(&digits);

    if !digits.is_empty() && digits.len() <= 10 {
        let check = mod11::check_digit(&digits);
        assert!(check <= 9, "check digit should be 0-9");
    }

    // Appending both computed check digits to a 9-digit base yields a
    // sequence that validates unless it is a repeated run
    if digits.len() == 9 {
        let mut full = digits.clone();
        full.push(mod11::check_digit(&full));
        full.push(mod11::check_digit(&full));
        if !mod11::all_repeated(&full) {
            assert!(mod11::validate(&full), "computed check digits should validate");
        }
    }
});
