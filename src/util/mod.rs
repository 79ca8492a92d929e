//! Hash helpers and the library error type

mod hash160;
mod hash256;
mod result;

pub use self::hash160::{hash160, Hash160};
pub use self::hash256::{keccak256, sha256d, Hash256};
pub use self::result::{Error, Result};
