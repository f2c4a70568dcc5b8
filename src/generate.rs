//! CPF generation for testing purposes.
//!
//! This module generates numbers that pass CPF validation. They are
//! mathematically valid but not tied to any real person; use them only as
//! test data.
//!
//! # Example
//!
//! ```
//! use cadastro::generate::{generate_cpf_deterministic, CpfGenerator};
//!
//! // Deterministic (no randomness required)
//! let cpf = generate_cpf_deterministic();
//! assert!(cadastro::is_valid_cpf(&cpf));
//!
//! // Pin the fiscal region digit
//! let cpf = CpfGenerator::new().region(8).generate_deterministic();
//! assert!(cadastro::is_valid_cpf(&cpf));
//! ```

use crate::mod11;

#[cfg(feature = "generate")]
use rand::Rng;

/// Base digits used by the deterministic generator.
const DETERMINISTIC_BASE: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Appends both check digits to a 9-digit base and renders the result.
fn finish(base: [u8; 9]) -> String {
    let mut digits = [0u8; 11];
    digits[..9].copy_from_slice(&base);
    digits[9] = mod11::check_digit(&digits[..9]);
    digits[10] = mod11::check_digit(&digits[..10]);
    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

/// Generates a valid CPF deterministically (no randomness).
///
/// Produces the same output on every call, which is what tests usually
/// want.
///
/// # Example
///
/// ```
/// use cadastro::generate::generate_cpf_deterministic;
///
/// let cpf = generate_cpf_deterministic();
/// assert!(cadastro::is_valid_cpf(&cpf));
/// assert_eq!(cpf, generate_cpf_deterministic());
/// ```
pub fn generate_cpf_deterministic() -> String {
    finish(DETERMINISTIC_BASE)
}

/// Generates a valid CPF deterministically with the given fiscal-region
/// digit (the 9th digit).
///
/// # Panics
///
/// Panics if `region` is greater than 9.
pub fn generate_cpf_deterministic_for_region(region: u8) -> String {
    assert!(region <= 9, "fiscal region digit must be 0-9");
    let mut base = DETERMINISTIC_BASE;
    base[8] = region;
    finish(base)
}

/// Generates a valid CPF using random base digits.
///
/// Requires the `generate` feature (which enables the `rand` dependency).
///
/// # Example
///
/// ```
/// use cadastro::generate::generate_cpf;
///
/// let cpf = generate_cpf();
/// assert_eq!(cpf.len(), 11);
/// assert!(cadastro::is_valid_cpf(&cpf));
/// ```
#[cfg(feature = "generate")]
pub fn generate_cpf() -> String {
    let mut rng = rand::thread_rng();
    generate_cpf_with_rng(&mut rng)
}

/// Generates a valid CPF using a provided RNG.
///
/// Useful for reproducible test generation with seeded RNGs.
#[cfg(feature = "generate")]
pub fn generate_cpf_with_rng<R: Rng>(rng: &mut R) -> String {
    generate_with(rng, None)
}

#[cfg(feature = "generate")]
fn generate_with<R: Rng>(rng: &mut R, region: Option<u8>) -> String {
    loop {
        let mut base = [0u8; 9];
        for d in base.iter_mut() {
            *d = rng.gen_range(0..10);
        }
        if let Some(r) = region {
            base[8] = r;
        }
        // The repeated-digit bases would produce an invalid CPF; re-roll
        if mod11::all_repeated(&base) {
            continue;
        }
        return finish(base);
    }
}

/// Generates multiple valid CPFs.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_cpfs(count: usize) -> Vec<String> {
    (0..count).map(|_| generate_cpf()).collect()
}

/// CPF generator builder.
///
/// Lets tests pin the fiscal-region digit while leaving the rest of the
/// number free.
#[derive(Debug, Clone, Default)]
pub struct CpfGenerator {
    region: Option<u8>,
}

impl CpfGenerator {
    /// Creates a new generator with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the fiscal-region digit (the 9th digit).
    ///
    /// # Panics
    ///
    /// Panics if `region` is greater than 9.
    pub fn region(mut self, region: u8) -> Self {
        assert!(region <= 9, "fiscal region digit must be 0-9");
        self.region = Some(region);
        self
    }

    /// Generates a CPF deterministically.
    pub fn generate_deterministic(&self) -> String {
        match self.region {
            Some(r) => generate_cpf_deterministic_for_region(r),
            None => generate_cpf_deterministic(),
        }
    }

    /// Generates a CPF with randomness.
    #[cfg(feature = "generate")]
    pub fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        generate_with(&mut rng, self.region)
    }

    /// Generates multiple CPFs.
    #[cfg(feature = "generate")]
    pub fn generate_many(&self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.generate()).collect()
    }
}
