//! Fuzz target for CPF validation.
//!
//! Tests that validation never panics and stays consistent with the
//! boolean form.

#![no_main]

use cadastro::{is_valid_cpf, validate_cpf};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let result = validate_cpf(data);
    assert_eq!(is_valid_cpf(data), result.is_ok());

    if let Ok(cpf) = result {
        // A validated CPF renders consistently
        assert_eq!(cpf.digits().len(), 11);
        assert_eq!(cpf.formatted().len(), 14);
        assert!(cpf.masked().starts_with("***"));
        assert!(cpf.fiscal_region() <= 9);
    }
});
