use crate::network::provider::{NetworkProfile, NetworkProvider, BITCOIN};
use crate::util::{hash160, sha256d, Result};

/// Pay-to-public-key-hash address provider for Bitcoin-like networks
#[derive(Debug, Clone)]
pub struct BitcoinProvider {
    profile: NetworkProfile,
    pub_key_hash: u8,
}

impl BitcoinProvider {
    /// Creates the standard Bitcoin mainnet provider
    pub fn new() -> BitcoinProvider {
        BitcoinProvider::with_pub_key_hash(0x00)
    }

    /// Creates a provider for an alternate network sharing the P2PKH address shape
    pub fn with_pub_key_hash(pub_key_hash: u8) -> BitcoinProvider {
        BitcoinProvider {
            profile: BITCOIN,
            pub_key_hash,
        }
    }

    /// Returns the version byte prepended to the public key hash
    pub fn pub_key_hash(&self) -> u8 {
        self.pub_key_hash
    }
}

impl Default for BitcoinProvider {
    fn default() -> BitcoinProvider {
        BitcoinProvider::new()
    }
}

impl NetworkProvider for BitcoinProvider {
    fn profile(&self) -> NetworkProfile {
        self.profile
    }

    fn address(&self, public_key: &[u8; 33]) -> Result<String> {
        let hash = hash160(public_key);
        let mut payload = Vec::with_capacity(25);
        payload.push(self.pub_key_hash);
        payload.extend_from_slice(&hash.0);
        let checksum = sha256d(&payload);
        payload.extend_from_slice(&checksum.0[..4]);
        Ok(bs58::encode(payload).into_string())
    }

    fn is_valid_address(&self, address: &str) -> bool {
        let v = match bs58::decode(address).into_vec() {
            Ok(v) => v,
            Err(_) => return false,
        };
        v.len() == 25 && v[0] == self.pub_key_hash && sha256d(&v[..21]).0[..4] == v[21..]
    }
}
