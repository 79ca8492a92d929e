//! A library for deriving hierarchies of keys and multi-network wallet addresses in Rust.

extern crate bs58;
extern crate byteorder;
extern crate hex;
extern crate hmac;
#[macro_use]
extern crate log;
extern crate ripemd;
extern crate secp256k1;
extern crate sha2;
extern crate sha3;

pub mod network;
pub mod util;
pub mod wallet;
