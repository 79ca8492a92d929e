use crate::network::provider::{NetworkProfile, NetworkProvider, ETHEREUM};
use crate::util::{keccak256, Result};
use secp256k1::PublicKey;

/// EIP-55 checksummed address provider for Ethereum
#[derive(Debug, Clone)]
pub struct EthereumProvider {
    profile: NetworkProfile,
    chain_id: Option<u32>,
}

impl EthereumProvider {
    /// Creates the standard Ethereum mainnet provider
    pub fn new() -> EthereumProvider {
        EthereumProvider {
            profile: ETHEREUM,
            chain_id: None,
        }
    }

    /// Creates a provider whose address checksum is salted with a chain id (EIP-1191)
    pub fn with_chain_id(chain_id: u32) -> EthereumProvider {
        EthereumProvider {
            profile: ETHEREUM,
            chain_id: Some(chain_id),
        }
    }
}

impl Default for EthereumProvider {
    fn default() -> EthereumProvider {
        EthereumProvider::new()
    }
}

impl NetworkProvider for EthereumProvider {
    fn profile(&self) -> NetworkProfile {
        self.profile
    }

    fn address(&self, public_key: &[u8; 33]) -> Result<String> {
        let public_key = PublicKey::from_slice(public_key)?;
        let uncompressed = public_key.serialize_uncompressed();
        let hash = keccak256(&uncompressed[1..]);
        Ok(checksum_address(&hex::encode(&hash.0[12..]), self.chain_id))
    }

    fn is_valid_address(&self, address: &str) -> bool {
        let hex_part = match address.strip_prefix("0x") {
            Some(h) => h,
            None => return false,
        };
        if hex_part.len() != 40 || !hex_part.bytes().all(|b| b.is_ascii_hexdigit()) {
            return false;
        }
        // All-lowercase and all-uppercase addresses carry no checksum
        let has_lower = hex_part.bytes().any(|b| b.is_ascii_lowercase());
        let has_upper = hex_part.bytes().any(|b| b.is_ascii_uppercase());
        if !has_lower || !has_upper {
            return true;
        }
        checksum_address(&hex_part.to_ascii_lowercase(), self.chain_id) == address
    }
}

/// Applies the EIP-55 mixed-case checksum to 40 lowercase hex characters
///
/// With a chain id, the checksum hash is computed over `"<chainId>0x"`
/// followed by the address, per EIP-1191.
pub fn checksum_address(lower: &str, chain_id: Option<u32>) -> String {
    let mut preimage = String::new();
    if let Some(id) = chain_id {
        preimage.push_str(&id.to_string());
        preimage.push_str("0x");
    }
    preimage.push_str(lower);
    let hash = hex::encode(keccak256(preimage.as_bytes()).0);
    let mut address = String::with_capacity(42);
    address.push_str("0x");
    for (c, h) in lower.chars().zip(hash.chars()) {
        if c.is_ascii_alphabetic() && matches!(h, '8' | '9' | 'a'..='f') {
            address.push(c.to_ascii_uppercase());
        } else {
            address.push(c);
        }
    }
    address
}
