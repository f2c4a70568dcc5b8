//! Basic CPF and date validation example.
//!
//! Run with: `cargo run --example basic`

use cadastro::{is_valid_birth_date, is_valid_cpf, validate_birth_date, validate_cpf, CpfError};

fn main() {
    println!("=== Basic CPF Validation ===\n");

    // Example 1: Validate a CPF
    let document = "529.982.247-25";
    println!("Validating: {}", document);

    match validate_cpf(document) {
        Ok(cpf) => {
            println!("  Valid: yes");
            println!("  Masked: {}", cpf.masked());
            println!("  Check Digits: {:?}", cpf.check_digits());
            println!("  Fiscal Region: {}", cpf.fiscal_region());
            println!("  Issuing States: {}", cpf.issuing_states().join(", "));
        }
        Err(e) => {
            println!("  Valid: no");
            println!("  Error: {}", e);
        }
    }
    println!();

    // Example 2: Quick boolean checks
    let documents = [
        ("52998224725", "valid, raw digits"),
        ("529.982.247-25", "valid, formatted"),
        ("52998224700", "wrong check digits"),
        ("11111111111", "repeated digits"),
        ("123", "too short"),
    ];

    println!("Quick validation checks:");
    for (number, description) in documents {
        let valid = is_valid_cpf(number);
        println!(
            "  {:16} - {}: {}",
            number,
            description,
            if valid { "VALID" } else { "INVALID" }
        );
    }
    println!();

    // Example 3: Handling validation errors
    println!("Error handling examples:");

    let error_cases = ["", "5299822472", "11111111111", "52998224700"];

    for number in error_cases {
        match validate_cpf(number) {
            Ok(_) => println!("  {:?}: unexpectedly valid", number),
            Err(e) => {
                let kind = match e {
                    CpfError::Empty => "Empty",
                    CpfError::WrongLength { .. } => "WrongLength",
                    CpfError::RepeatedDigits => "RepeatedDigits",
                    CpfError::CheckDigitMismatch { .. } => "CheckDigitMismatch",
                };
                println!("  {:?}: {} - {}", number, kind, e);
            }
        }
    }
    println!();

    // Example 4: Birth dates
    println!("Birth date checks:");
    let dates = [
        ("01/01/2000", "ordinary date"),
        ("29/02/2000", "leap day"),
        ("29/02/2001", "not a leap year"),
        ("31/04/2024", "April has 30 days"),
        ("31/12/9998", "in the future"),
    ];

    for (date, description) in dates {
        let verdict = if is_valid_birth_date(date) {
            "VALID".to_string()
        } else {
            format!("INVALID ({})", validate_birth_date(date).unwrap_err())
        };
        println!("  {} - {}: {}", date, description, verdict);
    }
}
