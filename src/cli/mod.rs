//! Command-line front end for the `testnummers` binary.
//!
//! ```text
//! testnummers bsn 5
//! testnummers iban 3 INGB
//! testnummers loonheffingennummer --suffix
//! testnummers validate-bsn 123456782
//! testnummers validate-iban "NL91 ABNA 0417 1643 00"
//! testnummers --seed 42 --json iban 2
//! ```

use clap::{Parser, Subcommand};

mod run;

pub use run::run;

/// Generate and validate Dutch test numbers (BSN, IBAN, Loonheffingennummer)
#[derive(Debug, Parser)]
#[command(name = "testnummers")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Seed for reproducible output
    #[arg(long, env = "TESTNUMMERS_SEED", global = true)]
    pub seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate BSN number(s)
    Bsn {
        /// Number of BSNs to generate
        #[arg(default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
    },

    /// Generate Dutch IBAN number(s)
    Iban {
        /// Number of IBANs to generate
        #[arg(default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
        /// Bank code (ABNA, INGB, RABO, SNSB, TRIO, KNAB, BUNQ, ASNB); random if omitted
        bank: Option<String>,
    },

    /// Generate Loonheffingennummer(s)
    #[command(visible_alias = "lhn")]
    Loonheffingennummer {
        /// Number of Loonheffingennummers to generate
        #[arg(default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
        /// Append the L01 suffix
        #[arg(long)]
        suffix: bool,
    },

    /// Validate a BSN number
    ValidateBsn {
        /// The BSN to check
        number: Option<String>,
    },

    /// Validate an IBAN number
    ValidateIban {
        /// The IBAN to check (spaces allowed)
        iban: Option<String>,
    },

    /// Validate a Loonheffingennummer (with or without L01 suffix)
    #[command(visible_alias = "validate-lhn")]
    ValidateLoonheffingennummer {
        /// The number to check
        number: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_iban_with_bank() {
        let cli = Cli::try_parse_from(["testnummers", "iban", "3", "ingb"]).unwrap();
        match cli.command {
            Some(Commands::Iban { count, bank }) => {
                assert_eq!(count, 3);
                assert_eq!(bank.as_deref(), Some("ingb"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn count_defaults_to_one() {
        let cli = Cli::try_parse_from(["testnummers", "bsn"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Bsn { count: 1 })));
    }

    #[test]
    fn zero_count_rejected() {
        assert!(Cli::try_parse_from(["testnummers", "bsn", "0"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["testnummers", "lhn", "--json", "--seed", "9"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.seed, Some(9));
    }
}
