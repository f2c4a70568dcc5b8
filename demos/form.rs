//! Registration form walkthrough.
//!
//! Simulates the keystroke -> mask -> submit flow a UI layer drives.
//!
//! Run with: `cargo run --example form`

use cadastro::{Field, RegistrationForm};

fn main() {
    let mut form = RegistrationForm::new();

    // The user types the CPF digit by digit; the mask formats as they go
    println!("Typing a CPF:");
    for typed in ["5", "52", "529", "5299", "529982", "52998224725"] {
        let display = form.input_cpf(typed).to_string();
        println!("  field {:13} -> display {:?}", format!("{:?}", typed), display);
    }
    println!();

    // First submit attempt: name and date still missing
    println!("Submitting with missing fields:");
    if let Err(errors) = form.submit() {
        for (field, error) in errors.iter() {
            println!("  {}: {}", field.key(), error.message(field));
        }
    }
    println!();

    // Fill in the rest
    form.input_full_name("Ana Silva");
    form.input_birth_date("01012000");
    println!("Date field shows: {:?}", form.birth_date());
    println!();

    // Second attempt succeeds, the callback fires, the form resets
    println!("Submitting the completed form:");
    match form.submit_with(|| println!("  >> registration completed!")) {
        Ok(()) => {
            for field in Field::ALL {
                println!("  {} cleared: {}", field.key(), form.errors().get(field).is_none());
            }
            println!("  cpf field now: {:?}", form.cpf());
        }
        Err(errors) => println!("  unexpected errors: {}", errors),
    }
}
