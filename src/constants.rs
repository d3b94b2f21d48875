use alloy::primitives::U256;

use crate::domain::Currency;

pub const PREFERRED_CURRENCY_KEY: &str = "currency";

pub const PREFERRED_CURRENCY: Currency = Currency::USD;

pub const PREFERRED_CURRENCY_PRECISION: usize = PREFERRED_CURRENCY.precision();

/// Milliseconds before a notification is dismissed
pub const SNACKBAR_AUTO_HIDE_DURATION: u64 = 5000;

/// Milliseconds between balance/price refreshes
pub const AUTO_REFRESH_RATE: u64 = 15000;

/// Field IDs of the third-party bug report form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportErrorFormEntries {
    pub url: &'static str,
    pub network: &'static str,
    pub platform: &'static str,
    pub error: &'static str,
}

pub const REPORT_ERROR_FORM_ENTRIES: ReportErrorFormEntries = ReportErrorFormEntries {
    url: "entry.2056392454",
    network: "entry.1632331664",
    platform: "entry.259085709",
    error: "entry.1383309652",
};

pub const REPORT_ERROR_FORM_URL: &str =
    "https://docs.google.com/forms/d/1YOvhK2RfTQmYO8DGMRqN7FYxRhBZd9jB6PZ7InJirTk/viewform";

pub const BRIDGE_CALL_GAS_INCREASE_PERCENTAGE: u64 = 10;

pub const ETH_TOKEN_LOGO_URI: &str =
    "https://raw.githubusercontent.com/Uniswap/interface/main/src/assets/images/ethereum-logo.png";

pub const USDT_TOKEN_LOGO_URI: &str = "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains/ethereum/assets/0xdAC17F958D2ee523a2206206994597C13D831ec7/logo.png";

/// Pads a gas estimate for bridge calls by `BRIDGE_CALL_GAS_INCREASE_PERCENTAGE`
pub fn increase_gas_estimate(gas: U256) -> U256 {
    gas * U256::from(100 + BRIDGE_CALL_GAS_INCREASE_PERCENTAGE) / U256::from(100)
}

/// Formats a fiat amount with the preferred currency precision, e.g. `12.50 USD`
pub fn format_fiat_amount(amount: f64) -> String {
    format!(
        "{:.*} {}",
        PREFERRED_CURRENCY_PRECISION, amount, PREFERRED_CURRENCY
    )
}
