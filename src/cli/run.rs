use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::CommandFactory;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use super::{Cli, Commands};
use crate::bsn::{generate_multiple_bsn_with, validate_bsn};
use crate::core::NummerError;
use crate::iban::{BankCode, format_iban, generate_multiple_iban_with, validate_iban};
use crate::loonheffingen::{
    LOONHEFFINGEN_SUFFIX, generate_multiple_loonheffingennummer_with,
    validate_loonheffingennummer, validate_suffixed_loonheffingennummer, with_suffix,
};

/// Outcome of a `validate-*` command, as printed with `--json`.
#[derive(Debug, Serialize)]
struct ValidationReport<'a> {
    kind: &'static str,
    input: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

/// Execute a parsed command line, writing results to `out`.
///
/// # Errors
///
/// Fails on an unknown bank code, a missing argument to a `validate-*`
/// command, or when writing to `out` fails.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let Some(command) = &cli.command else {
        write!(out, "{}", Cli::command().render_long_help())?;
        return Ok(());
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::debug!(?command, seed = ?cli.seed, "running command");

    match command {
        Commands::Bsn { count } => {
            let bsns = generate_multiple_bsn_with(&mut rng, *count as usize)?;
            print_generated(out, cli.json, "BSN", &bsns)
        }
        Commands::Iban { count, bank } => {
            let bank = bank
                .as_deref()
                .map(str::parse::<BankCode>)
                .transpose()?;
            let ibans = generate_multiple_iban_with(&mut rng, *count as usize, bank);
            let shown: Vec<String> = if cli.json {
                ibans
            } else {
                ibans.iter().map(|i| format_iban(i)).collect()
            };
            print_generated(out, cli.json, "IBAN", &shown)
        }
        Commands::Loonheffingennummer { count, suffix } => {
            let mut numbers = generate_multiple_loonheffingennummer_with(&mut rng, *count as usize)?;
            if *suffix {
                numbers = numbers.iter().map(|n| with_suffix(n)).collect();
            }
            print_generated(out, cli.json, "Loonheffingennummer", &numbers)
        }
        Commands::ValidateBsn { number } => {
            let number = required(number.as_deref(), "a BSN")?;
            print_validation(out, cli.json, "BSN", number, validate_bsn(number))
        }
        Commands::ValidateIban { iban } => {
            let iban = required(iban.as_deref(), "an IBAN")?;
            print_validation(out, cli.json, "IBAN", iban, validate_iban(iban))
        }
        Commands::ValidateLoonheffingennummer { number } => {
            let number = required(number.as_deref(), "a Loonheffingennummer")?;
            let result = if number.ends_with(LOONHEFFINGEN_SUFFIX) {
                validate_suffixed_loonheffingennummer(number)
            } else {
                validate_loonheffingennummer(number)
            };
            print_validation(out, cli.json, "Loonheffingennummer", number, result)
        }
    }
}

fn required<'a>(value: Option<&'a str>, what: &str) -> Result<&'a str> {
    match value {
        Some(v) => Ok(v),
        None => bail!("please provide {what} to validate"),
    }
}

fn print_generated<W: Write>(out: &mut W, json: bool, kind: &str, values: &[String]) -> Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(values).context("serializing results")?;
        writeln!(out, "{rendered}")?;
        return Ok(());
    }
    writeln!(out, "Generated {kind} number(s):")?;
    for value in values {
        writeln!(out, "  {value}")?;
    }
    Ok(())
}

fn print_validation<W: Write>(
    out: &mut W,
    json: bool,
    kind: &'static str,
    input: &str,
    result: Result<(), NummerError>,
) -> Result<()> {
    if json {
        let report = ValidationReport {
            kind,
            input,
            valid: result.is_ok(),
            reason: result.err().map(|e| e.to_string()),
        };
        let rendered = serde_json::to_string_pretty(&report).context("serializing report")?;
        writeln!(out, "{rendered}")?;
        return Ok(());
    }
    match result {
        Ok(()) => writeln!(out, "{kind} {input} is VALID ✓")?,
        Err(e) => writeln!(out, "{kind} {input} is INVALID ✗ ({e})")?,
    }
    Ok(())
}
