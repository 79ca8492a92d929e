//! Hierarchical deterministic key derivation and the wallet facade
//!
//! # Examples
//!
//! Derive an address down a BIP-44 path:
//!
//! ```no_run, rust
//! use hdwallet::network::BitcoinProvider;
//! use hdwallet::wallet::HDWallet;
//! use std::sync::Arc;
//!
//! let seed = [1; 32];
//! let wallet = HDWallet::from_seed(&seed, Arc::new(BitcoinProvider::new())).unwrap();
//! let address = wallet.derive_path("m/44'/0'/0'/0/0").unwrap().address().unwrap();
//! ```

mod extended_key;
mod hd_wallet;
mod path;

pub use self::extended_key::{ExtendedKey, ExtendedKeyType, HARDENED_KEY};
pub use self::hd_wallet::HDWallet;
pub use self::path::{parse_derivation_path, PathSegment};
