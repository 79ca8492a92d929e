use std::fmt;
use std::io;

/// Standard error type used in the library
#[derive(Debug)]
pub enum Error {
    /// An argument provided is invalid
    BadArgument(String),
    /// Hardened derivation requires the parent private key
    CannotDeriveHardenedFromPublicOnly,
    /// The 4-byte double-SHA256 checksum does not match the payload
    ChecksumMismatch,
    /// Base58 string could not be decoded
    FromBase58Error(bs58::decode::Error),
    /// The state is not valid
    IllegalState(String),
    /// The derived child key is invalid for this index
    InvalidChildKey,
    /// A derivation path could not be parsed
    InvalidPath(String),
    /// The seed cannot produce a valid master key
    InvalidSeed(String),
    /// A serialized extended key is structurally invalid
    MalformedExtendedKey(String),
    /// Signing requires the private key
    NoPrivateKeyForSigning,
    /// Standard library IO error
    IOError(io::Error),
    /// Error in the Secp256k1 library
    Secp256k1Error(secp256k1::Error),
    /// The 4-byte version prefix is not part of the network profile
    UnknownVersionBytes(u32),
    /// The operation is not implemented by the network provider
    UnsupportedByNetworkProvider(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::BadArgument(s) => f.write_str(&format!("Bad argument: {}", s)),
            Error::CannotDeriveHardenedFromPublicOnly => {
                f.write_str("Cannot derive a hardened child from a public-only key")
            }
            Error::ChecksumMismatch => f.write_str("Checksum mismatch"),
            Error::FromBase58Error(e) => f.write_str(&format!("Base58 decoding error: {}", e)),
            Error::IllegalState(s) => f.write_str(&format!("Illegal state: {}", s)),
            Error::InvalidChildKey => f.write_str("Invalid child key. Try the next index."),
            Error::InvalidPath(s) => f.write_str(&format!("Invalid derivation path: {}", s)),
            Error::InvalidSeed(s) => f.write_str(&format!("Invalid seed: {}", s)),
            Error::MalformedExtendedKey(s) => {
                f.write_str(&format!("Malformed extended key: {}", s))
            }
            Error::NoPrivateKeyForSigning => f.write_str("No private key for signing"),
            Error::IOError(e) => f.write_str(&format!("IO error: {}", e)),
            Error::Secp256k1Error(e) => f.write_str(&format!("Secp256k1 error: {}", e)),
            Error::UnknownVersionBytes(v) => {
                f.write_str(&format!("Unknown extended key version {:#010x}", v))
            }
            Error::UnsupportedByNetworkProvider(s) => {
                f.write_str(&format!("Unsupported by network provider: {}", s))
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FromBase58Error(e) => Some(e),
            Error::IOError(e) => Some(e),
            Error::Secp256k1Error(e) => Some(e),
            _ => None,
        }
    }
}

impl From<bs58::decode::Error> for Error {
    fn from(e: bs58::decode::Error) -> Self {
        Error::FromBase58Error(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::IOError(e)
    }
}

impl From<secp256k1::Error> for Error {
    fn from(e: secp256k1::Error) -> Self {
        Error::Secp256k1Error(e)
    }
}

/// Standard Result used in the library
pub type Result<T> = std::result::Result<T, Error>;
