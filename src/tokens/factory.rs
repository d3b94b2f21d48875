use alloy::primitives::Address;

use crate::constants::{ETH_TOKEN_LOGO_URI, USDT_TOKEN_LOGO_URI};
use crate::domain::{Chain, Token};

/// Native coin of `chain`, addressed by the zero address
pub fn get_ether_token(chain: &Chain) -> Token {
    Token {
        name: "Ether".to_string(),
        address: Address::ZERO,
        chain_id: chain.chain_id,
        symbol: "ETH".to_string(),
        decimals: 18,
        logo_uri: ETH_TOKEN_LOGO_URI.to_string(),
    }
}

pub fn get_usdt_token(address: Address, chain_id: u64) -> Token {
    Token {
        name: "Tether USD".to_string(),
        address,
        chain_id,
        symbol: "USDT".to_string(),
        decimals: 6,
        logo_uri: USDT_TOKEN_LOGO_URI.to_string(),
    }
}


#[cfg(test)]
mod tests {
    use super::test_utils::offline_chain;
    use super::*;
    use crate::domain::ChainKey;
    use alloy::primitives::address;

    #[tokio::test]
    async fn test_ether_token() {
        let chain = offline_chain(ChainKey::Ethereum, 5);

        let token = get_ether_token(&chain);
        assert_eq!(token.name, "Ether");
        assert_eq!(token.symbol, "ETH");
        assert_eq!(token.decimals, 18);
        assert_eq!(token.address, Address::ZERO);
        assert_eq!(token.chain_id, 5);
        assert_eq!(token.logo_uri, ETH_TOKEN_LOGO_URI);
        assert!(token.is_native());

        assert_eq!(get_ether_token(&chain), token);
        assert_eq!(get_ether_token(&chain.clone()), token);
    }

    #[test]
    fn test_usdt_token() {
        let usdt = address!("0xdac17f958d2ee523a2206206994597c13d831ec7");

        assert_eq!(
            get_usdt_token(usdt, 5),
            Token {
                name: "Tether USD".to_string(),
                address: usdt,
                chain_id: 5,
                symbol: "USDT".to_string(),
                decimals: 6,
                logo_uri: USDT_TOKEN_LOGO_URI.to_string(),
            }
        );
    }
}
