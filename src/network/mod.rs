//! Network providers that turn public keys into addresses
//!
//! # Examples
//!
//! Derive a Bitcoin address for a compressed public key:
//!
//! ```no_run, rust
//! use hdwallet::network::{BitcoinProvider, NetworkProvider};
//!
//! let public_key = [2; 33];
//! let address = BitcoinProvider::new().address(&public_key).unwrap();
//! ```

mod bitcoin;
mod ethereum;
mod provider;

pub use self::bitcoin::BitcoinProvider;
pub use self::ethereum::{checksum_address, EthereumProvider};
pub use self::provider::{
    NetworkProfile, NetworkProvider, BITCOIN, ETHEREUM, MAINNET_PRIVATE_EXTENDED_KEY,
    MAINNET_PUBLIC_EXTENDED_KEY,
};
