//! Dutch bank codes accepted in generated IBANs.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::NummerError;

/// The fixed set of bank codes, in display order.
pub const DUTCH_BANK_CODES: [&str; 8] = [
    "ABNA", "INGB", "RABO", "SNSB", "TRIO", "KNAB", "BUNQ", "ASNB",
];

/// A Dutch bank identifier (the four letters after the IBAN check digits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BankCode {
    /// ABN AMRO.
    Abna,
    /// ING Bank.
    Ingb,
    /// Rabobank.
    Rabo,
    /// SNS Bank.
    Snsb,
    /// Triodos Bank.
    Trio,
    /// Knab.
    Knab,
    /// bunq.
    Bunq,
    /// ASN Bank.
    Asnb,
}

impl BankCode {
    /// Every bank code, in the same order as [`DUTCH_BANK_CODES`].
    pub const ALL: [Self; 8] = [
        Self::Abna,
        Self::Ingb,
        Self::Rabo,
        Self::Snsb,
        Self::Trio,
        Self::Knab,
        Self::Bunq,
        Self::Asnb,
    ];

    /// The four-letter code, e.g. "INGB".
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Abna => "ABNA",
            Self::Ingb => "INGB",
            Self::Rabo => "RABO",
            Self::Snsb => "SNSB",
            Self::Trio => "TRIO",
            Self::Knab => "KNAB",
            Self::Bunq => "BUNQ",
            Self::Asnb => "ASNB",
        }
    }

    /// Pick a bank code uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for BankCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BankCode {
    type Err = NummerError;

    /// Parse a bank code, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == code)
            .ok_or_else(|| NummerError::InvalidBankCode(s.to_string()))
    }
}
