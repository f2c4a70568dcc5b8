//! CLI tool for registration form validation.
//!
//! # Usage
//!
//! ```bash
//! # Validate a CPF
//! cadastro validate 529.982.247-25
//!
//! # Validate a birth date
//! cadastro date 01/01/2000
//!
//! # Apply the input mask to raw digits
//! cadastro format cpf 52998224725
//! cadastro format date 01012000
//!
//! # Mask a CPF for display
//! cadastro mask 52998224725
//!
//! # Generate test CPFs
//! cadastro generate --count 5 --formatted
//! ```

use cadastro::{format, generate, validate_birth_date, validate_cpf};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cadastro")]
#[command(author, version, about = "Passenger registration form validation tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a CPF
    Validate {
        /// CPF to validate (formatting characters allowed)
        cpf: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Validate a birth date (dd/mm/yyyy)
    Date {
        /// Date to validate
        date: String,
    },

    /// Apply the input mask to a value
    Format {
        /// Which mask to apply
        kind: FormatKind,

        /// Raw input to format
        value: String,
    },

    /// Mask a CPF for display
    Mask {
        /// CPF to mask
        cpf: String,
    },

    /// Generate test CPFs (for testing only)
    Generate {
        /// Number of CPFs to generate
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Pin the fiscal-region digit (0-9)
        #[arg(short, long)]
        region: Option<u8>,

        /// Output formatted (with separators)
        #[arg(short, long)]
        formatted: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatKind {
    Cpf,
    Date,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { cpf, output } => {
            cmd_validate(&cpf, output);
        }
        Commands::Date { date } => {
            cmd_date(&date);
        }
        Commands::Format { kind, value } => {
            cmd_format(kind, &value);
        }
        Commands::Mask { cpf } => {
            cmd_mask(&cpf);
        }
        Commands::Generate {
            count,
            region,
            formatted,
        } => {
            cmd_generate(count, region, formatted);
        }
    }
}

fn cmd_validate(input: &str, output: OutputFormat) {
    match validate_cpf(input) {
        Ok(cpf) => {
            match output {
                OutputFormat::Text => {
                    println!("Valid: yes");
                    println!("Masked: {}", cpf.masked());
                    println!("Fiscal Region: {}", cpf.fiscal_region());
                    println!("Issuing States: {}", cpf.issuing_states().join(", "));
                }
                OutputFormat::Json => {
                    println!("{{");
                    println!("  \"valid\": true,");
                    println!("  \"masked\": \"{}\",", cpf.masked());
                    println!("  \"fiscal_region\": {}", cpf.fiscal_region());
                    println!("}}");
                }
            }
            std::process::exit(0);
        }
        Err(e) => {
            match output {
                OutputFormat::Text => {
                    println!("Valid: no");
                    println!("Error: {}", e);
                }
                OutputFormat::Json => {
                    println!("{{");
                    println!("  \"valid\": false,");
                    println!("  \"error\": \"{}\"", e);
                    println!("}}");
                }
            }
            std::process::exit(1);
        }
    }
}

fn cmd_date(input: &str) {
    match validate_birth_date(input) {
        Ok(date) => {
            println!("Valid: yes");
            println!("Date: {}", date);
            println!("Age: {}", date.age());
            std::process::exit(0);
        }
        Err(e) => {
            println!("Valid: no");
            println!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn cmd_format(kind: FormatKind, value: &str) {
    let formatted = match kind {
        FormatKind::Cpf => format::format_cpf(value),
        FormatKind::Date => format::format_birth_date(value),
    };
    println!("{}", formatted);
}

fn cmd_mask(input: &str) {
    match validate_cpf(input) {
        Ok(cpf) => {
            println!("{}", cpf.masked());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn cmd_generate(count: usize, region: Option<u8>, formatted: bool) {
    let mut generator = generate::CpfGenerator::new();
    if let Some(r) = region {
        if r > 9 {
            eprintln!("Error: fiscal region digit must be 0-9");
            std::process::exit(1);
        }
        generator = generator.region(r);
    }

    for cpf in generator.generate_many(count) {
        if formatted {
            println!("{}", format::format_cpf(&cpf));
        } else {
            println!("{}", cpf);
        }
    }
}
