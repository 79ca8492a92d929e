use hex;
use sha2::{Digest, Sha256};
use sha3::Keccak256;
use std::fmt;

/// 256-bit hash for checksums and address digests
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash256(pub [u8; 32]);

/// Hashes a data array twice using SHA256
pub fn sha256d(data: &[u8]) -> Hash256 {
    let sha256 = Sha256::digest(data);
    let sha256d = Sha256::digest(sha256);
    let mut hash256 = [0; 32];
    hash256.clone_from_slice(&sha256d);
    Hash256(hash256)
}

/// Hashes a data array with Keccak-256, the pre-standard variant Ethereum uses
pub fn keccak256(data: &[u8]) -> Hash256 {
    let keccak256 = Keccak256::digest(data);
    let mut hash256 = [0; 32];
    hash256.clone_from_slice(&keccak256);
    Hash256(hash256)
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
