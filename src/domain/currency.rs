use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Fiat unit used to display token prices
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[display(fmt = "USD")]
    USD,
}

impl Currency {
    /// Number of decimal places shown for amounts in this currency
    pub const fn precision(&self) -> usize {
        match self {
            Currency::USD => 2,
        }
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            other => Err(format!("Unsupported currency '{}'", other)),
        }
    }
}
