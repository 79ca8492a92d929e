use crate::network::NetworkProvider;
use crate::util::{Hash160, Result};
use crate::wallet::extended_key::ExtendedKey;
use std::fmt;
use std::sync::Arc;

/// An immutable wallet binding one extended key to one network provider
///
/// Every derivation returns a new wallet wrapping the child key and the same
/// shared provider, so wallets may be used from multiple threads freely.
#[derive(Clone)]
pub struct HDWallet {
    key: ExtendedKey,
    provider: Arc<dyn NetworkProvider>,
}

impl HDWallet {
    /// Creates a wallet from a 16 to 64 byte seed
    pub fn from_seed(seed: &[u8], provider: Arc<dyn NetworkProvider>) -> Result<HDWallet> {
        let key = ExtendedKey::from_seed(seed, provider.profile())?;
        Ok(HDWallet { key, provider })
    }

    /// Creates a wallet from a base58check serialized extended key
    pub fn from_base58(s: &str, provider: Arc<dyn NetworkProvider>) -> Result<HDWallet> {
        let key = ExtendedKey::decode(s, provider.profile())?;
        Ok(HDWallet { key, provider })
    }

    /// Creates a wallet from a raw private scalar and chain code
    pub fn from_private_key(
        private_key: &[u8],
        chain_code: &[u8],
        provider: Arc<dyn NetworkProvider>,
    ) -> Result<HDWallet> {
        let key = ExtendedKey::from_private_key(private_key, chain_code, provider.profile())?;
        Ok(HDWallet { key, provider })
    }

    /// Creates a wallet from a compressed public key and chain code
    pub fn from_public_key(
        public_key: &[u8],
        chain_code: &[u8],
        provider: Arc<dyn NetworkProvider>,
    ) -> Result<HDWallet> {
        let key = ExtendedKey::from_public_key(public_key, chain_code, provider.profile())?;
        Ok(HDWallet { key, provider })
    }

    /// Gets the wallet's extended key
    pub fn extended_key(&self) -> &ExtendedKey {
        &self.key
    }

    /// Gets the wallet's network provider
    pub fn provider(&self) -> &Arc<dyn NetworkProvider> {
        &self.provider
    }

    /// Gets the hash160 of the compressed public key
    pub fn identifier(&self) -> Result<Hash160> {
        self.key.identifier()
    }

    /// Gets the number of derivation steps from the master key
    pub fn depth(&self) -> u8 {
        self.key.depth()
    }

    /// Gets the index this key was derived with, hardened flag included
    pub fn index(&self) -> u32 {
        self.key.index()
    }

    /// Gets the chain code
    pub fn chain_code(&self) -> [u8; 32] {
        self.key.chain_code()
    }

    /// Gets the compressed public key
    pub fn public_key(&self) -> Result<[u8; 33]> {
        self.key.public_key()
    }

    /// Gets the private scalar, or None for a neutered wallet
    pub fn private_key(&self) -> Option<[u8; 32]> {
        self.key.private_key()
    }

    /// Returns true if the wallet carries no private material
    pub fn is_neutered(&self) -> bool {
        self.key.is_neutered()
    }

    /// Derives the child wallet at an index, hardened or not
    pub fn derive(&self, index: u32, hardened: bool) -> Result<HDWallet> {
        Ok(HDWallet {
            key: self.key.derive(index, hardened)?,
            provider: self.provider.clone(),
        })
    }

    /// Derives a child wallet using BIP-32 path notation
    pub fn derive_path(&self, path: &str) -> Result<HDWallet> {
        Ok(HDWallet {
            key: self.key.derive_path(path)?,
            provider: self.provider.clone(),
        })
    }

    /// Returns a wallet with the private material removed
    pub fn neuter(&self) -> Result<HDWallet> {
        Ok(HDWallet {
            key: self.key.neuter()?,
            provider: self.provider.clone(),
        })
    }

    /// Encodes the extended key into a base58check string
    pub fn to_base58(&self) -> String {
        self.key.encode()
    }

    /// Gets the network address for the wallet's public key
    pub fn address(&self) -> Result<String> {
        self.provider.address(&self.key.public_key()?)
    }

    /// Checks whether a string is a valid address on the wallet's network
    pub fn is_valid_address(&self, address: &str) -> bool {
        self.provider.is_valid_address(address)
    }

    /// Signs a 32-byte digest, returning the compact 64-byte signature
    pub fn sign(&self, hash: &[u8; 32], low_r: bool) -> Result<[u8; 64]> {
        self.key.sign(hash, low_r)
    }

    /// Verifies a compact 64-byte signature over a 32-byte digest
    pub fn verify(&self, hash: &[u8; 32], signature: &[u8; 64]) -> bool {
        self.key.verify(hash, signature)
    }
}

impl fmt::Debug for HDWallet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.key)
    }
}
