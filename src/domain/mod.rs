pub mod chain;
pub mod currency;
pub mod token;

pub use chain::{Chain, ChainKey};
pub use currency::Currency;
pub use token::Token;
