use crate::util::{Error, Result};

/// Version byte constants a network uses for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkProfile {
    /// 4-byte prefix for serialized extended public keys
    pub public_prefix: u32,
    /// 4-byte prefix for serialized extended private keys
    pub private_prefix: u32,
    /// Version byte for WIF private key encoding
    pub wif: u8,
    /// Prefix prepended to signed messages
    pub message_prefix: &'static str,
}

/// "xpub" prefix for public extended keys on mainnet
pub const MAINNET_PUBLIC_EXTENDED_KEY: u32 = 0x0488B21E;
/// "xprv" prefix for private extended keys on mainnet
pub const MAINNET_PRIVATE_EXTENDED_KEY: u32 = 0x0488ADE4;

/// Serialization profile for Bitcoin mainnet
pub const BITCOIN: NetworkProfile = NetworkProfile {
    public_prefix: MAINNET_PUBLIC_EXTENDED_KEY,
    private_prefix: MAINNET_PRIVATE_EXTENDED_KEY,
    wif: 0x80,
    message_prefix: "\x18Signed Message:\n",
};

/// Serialization profile for Ethereum, sharing Bitcoin's extended key prefixes
pub const ETHEREUM: NetworkProfile = NetworkProfile {
    public_prefix: MAINNET_PUBLIC_EXTENDED_KEY,
    private_prefix: MAINNET_PRIVATE_EXTENDED_KEY,
    wif: 0x60,
    message_prefix: "\x18Signed Message:\n",
};

/// Converts public keys into one network's addresses
///
/// Address derivation is an optional capability. A provider that only carries
/// serialization constants keeps the default `address` implementation, and
/// callers get a typed error instead of a panic.
pub trait NetworkProvider: Send + Sync {
    /// Returns the version byte profile used for extended key serialization
    fn profile(&self) -> NetworkProfile;

    /// Converts a compressed public key into the network's address
    fn address(&self, _public_key: &[u8; 33]) -> Result<String> {
        Err(Error::UnsupportedByNetworkProvider(
            "address derivation".to_string(),
        ))
    }

    /// Checks whether a string is a syntactically valid address for the network
    fn is_valid_address(&self, address: &str) -> bool;
}
