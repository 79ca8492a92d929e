use crate::network::NetworkProfile;
use crate::util::{hash160, sha256d, Error, Hash160, Result};
use crate::wallet::path::parse_derivation_path;
use byteorder::{BigEndian, WriteBytesExt};
use hmac::{Hmac, Mac};
use secp256k1::{ecdsa, Message, PublicKey, Scalar, Secp256k1, SecretKey};
use sha2::Sha512;
use std::fmt;
use std::io::{Cursor, Write};

/// Index which begins the derived hardened keys
pub const HARDENED_KEY: u32 = 2147483648;

/// HMAC key that expands a seed into the master key
const MASTER_SEED_KEY: &[u8] = b"Bitcoin seed";

type HmacSha512 = Hmac<Sha512>;

/// Public or private key type
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ExtendedKeyType {
    Public,
    Private,
}

/// A private or public key in an hierarchial deterministic wallet
///
/// The 78 bytes hold `version(4) | depth(1) | parent_fingerprint(4) |
/// index(4) | chain_code(32) | key_data(33)`. Key data starting with a zero
/// byte is a private scalar, otherwise a compressed public key.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ExtendedKey {
    profile: NetworkProfile,
    bytes: [u8; 78],
}

impl ExtendedKey {
    /// Creates a new extended public key
    pub fn new_public_key(
        profile: NetworkProfile,
        depth: u8,
        parent_fingerprint: &[u8],
        index: u32,
        chain_code: &[u8],
        public_key: &[u8],
    ) -> Result<ExtendedKey> {
        if parent_fingerprint.len() != 4 {
            return Err(Error::BadArgument("Fingerprint must be len 4".to_string()));
        }
        if chain_code.len() != 32 {
            return Err(Error::BadArgument("Chain code must be len 32".to_string()));
        }
        if public_key.len() != 33 {
            return Err(Error::BadArgument("Public key must be len 33".to_string()));
        }
        let mut extended_key = ExtendedKey {
            profile,
            bytes: [0; 78],
        };
        {
            let mut c = Cursor::new(&mut extended_key.bytes as &mut [u8]);
            c.write_u32::<BigEndian>(profile.public_prefix).unwrap();
            c.write_u8(depth).unwrap();
            c.write(parent_fingerprint).unwrap();
            c.write_u32::<BigEndian>(index).unwrap();
            c.write(chain_code).unwrap();
            c.write(public_key).unwrap();
        }
        Ok(extended_key)
    }

    /// Creates a new extended private key
    pub fn new_private_key(
        profile: NetworkProfile,
        depth: u8,
        parent_fingerprint: &[u8],
        index: u32,
        chain_code: &[u8],
        private_key: &[u8],
    ) -> Result<ExtendedKey> {
        if parent_fingerprint.len() != 4 {
            return Err(Error::BadArgument("Fingerprint must be len 4".to_string()));
        }
        if chain_code.len() != 32 {
            return Err(Error::BadArgument("Chain code must be len 32".to_string()));
        }
        if private_key.len() != 32 {
            return Err(Error::BadArgument("Private key must be len 32".to_string()));
        }
        let mut extended_key = ExtendedKey {
            profile,
            bytes: [0; 78],
        };
        {
            let mut c = Cursor::new(&mut extended_key.bytes as &mut [u8]);
            c.write_u32::<BigEndian>(profile.private_prefix).unwrap();
            c.write_u8(depth).unwrap();
            c.write(parent_fingerprint).unwrap();
            c.write_u32::<BigEndian>(index).unwrap();
            c.write(chain_code).unwrap();
            c.write_u8(0).unwrap();
            c.write(private_key).unwrap();
        }
        Ok(extended_key)
    }

    /// Expands a 16 to 64 byte seed into the master extended private key
    pub fn from_seed(seed: &[u8], profile: NetworkProfile) -> Result<ExtendedKey> {
        if seed.len() < 16 || seed.len() > 64 {
            let msg = format!("Seed must be 16 to 64 bytes, got {}", seed.len());
            return Err(Error::InvalidSeed(msg));
        }
        let i = hmac_sha512(MASTER_SEED_KEY, seed)?;
        if SecretKey::from_slice(&i[..32]).is_err() {
            let msg = "Seed produces a master key outside the curve order".to_string();
            return Err(Error::InvalidSeed(msg));
        }
        ExtendedKey::new_private_key(profile, 0, &[0; 4], 0, &i[32..], &i[..32])
    }

    /// Creates a master-shaped extended key from a raw private scalar
    pub fn from_private_key(
        private_key: &[u8],
        chain_code: &[u8],
        profile: NetworkProfile,
    ) -> Result<ExtendedKey> {
        if private_key.len() != 32 {
            return Err(Error::BadArgument("Private key must be len 32".to_string()));
        }
        SecretKey::from_slice(private_key)?;
        ExtendedKey::new_private_key(profile, 0, &[0; 4], 0, chain_code, private_key)
    }

    /// Creates a master-shaped extended key from a compressed public key
    pub fn from_public_key(
        public_key: &[u8],
        chain_code: &[u8],
        profile: NetworkProfile,
    ) -> Result<ExtendedKey> {
        if public_key.len() != 33 {
            return Err(Error::BadArgument("Public key must be len 33".to_string()));
        }
        PublicKey::from_slice(public_key)?;
        ExtendedKey::new_public_key(profile, 0, &[0; 4], 0, chain_code, public_key)
    }

    /// Gets the extended key version byte prefix
    pub fn version(&self) -> u32 {
        ((self.bytes[0] as u32) << 24)
            | ((self.bytes[1] as u32) << 16)
            | ((self.bytes[2] as u32) << 8)
            | (self.bytes[3] as u32)
    }

    /// Gets the version byte profile used for serialization
    pub fn network(&self) -> NetworkProfile {
        self.profile
    }

    /// Gets the key type, determined by the first key data byte
    pub fn key_type(&self) -> ExtendedKeyType {
        if self.bytes[45] == 0 {
            ExtendedKeyType::Private
        } else {
            ExtendedKeyType::Public
        }
    }

    /// Returns true if the key carries no private material
    pub fn is_neutered(&self) -> bool {
        self.key_type() == ExtendedKeyType::Public
    }

    /// Gets the depth
    pub fn depth(&self) -> u8 {
        self.bytes[4]
    }

    /// Gets the first 4 bytes of the parent key, or 0 if this is the master key
    pub fn parent_fingerprint(&self) -> [u8; 4] {
        [self.bytes[5], self.bytes[6], self.bytes[7], self.bytes[8]]
    }

    /// Get the index of this key as derived from the parent
    pub fn index(&self) -> u32 {
        ((self.bytes[9] as u32) << 24)
            | ((self.bytes[10] as u32) << 16)
            | ((self.bytes[11] as u32) << 8)
            | (self.bytes[12] as u32)
    }

    /// Gets the chain code
    pub fn chain_code(&self) -> [u8; 32] {
        let mut chain_code = [0; 32];
        chain_code.clone_from_slice(&self.bytes[13..45]);
        chain_code
    }

    /// Gets the compressed public key, deriving it from the private key if needed
    pub fn public_key(&self) -> Result<[u8; 33]> {
        match self.key_type() {
            ExtendedKeyType::Public => {
                let mut public_key = [0; 33];
                public_key.clone_from_slice(&self.bytes[45..]);
                Ok(public_key)
            }
            ExtendedKeyType::Private => {
                let secp = Secp256k1::signing_only();
                let secret_key = SecretKey::from_slice(&self.bytes[46..])?;
                let public_key = PublicKey::from_secret_key(&secp, &secret_key);
                Ok(public_key.serialize())
            }
        }
    }

    /// Gets the private scalar, or None for a neutered key
    pub fn private_key(&self) -> Option<[u8; 32]> {
        match self.key_type() {
            ExtendedKeyType::Private => {
                let mut private_key = [0; 32];
                private_key.clone_from_slice(&self.bytes[46..]);
                Some(private_key)
            }
            ExtendedKeyType::Public => None,
        }
    }

    /// Gets the hash160 of the compressed public key
    pub fn identifier(&self) -> Result<Hash160> {
        Ok(hash160(&self.public_key()?))
    }

    /// Gets the first 4 bytes of the identifier, a child's parent fingerprint
    pub fn fingerprint(&self) -> Result<[u8; 4]> {
        let mut fingerprint = [0; 4];
        let identifier = self.identifier()?;
        fingerprint.clone_from_slice(&identifier.0[..4]);
        Ok(fingerprint)
    }

    /// Returns a sibling key with the private material removed
    pub fn neuter(&self) -> Result<ExtendedKey> {
        match self.key_type() {
            ExtendedKeyType::Public => Ok(*self),
            ExtendedKeyType::Private => ExtendedKey::new_public_key(
                self.profile,
                self.depth(),
                &self.parent_fingerprint(),
                self.index(),
                &self.chain_code(),
                &self.public_key()?,
            ),
        }
    }

    /// Derives the child key at an index, hardened or not
    ///
    /// An invalid child key is surfaced rather than skipped; retrying with
    /// the next index is the caller's policy.
    pub fn derive(&self, index: u32, hardened: bool) -> Result<ExtendedKey> {
        if index >= HARDENED_KEY {
            let msg = format!("Index {} must be below 2^31 before hardening", index);
            return Err(Error::InvalidPath(msg));
        }
        if self.depth() == 255 {
            let msg = "Cannot derive extended key. Depth already at max.";
            return Err(Error::IllegalState(msg.to_string()));
        }
        let child_index = if hardened { index | HARDENED_KEY } else { index };
        let fingerprint = self.fingerprint()?;

        match self.key_type() {
            ExtendedKeyType::Private => {
                let private_key = &self.bytes[46..];
                let mut v = Vec::<u8>::with_capacity(37);
                if hardened {
                    v.push(0);
                    v.extend_from_slice(private_key);
                } else {
                    v.extend_from_slice(&self.public_key()?);
                }
                v.write_u32::<BigEndian>(child_index)?;
                let i = hmac_sha512(&self.chain_code(), &v)?;

                let mut tweak_bytes = [0; 32];
                tweak_bytes.clone_from_slice(&i[..32]);
                let tweak = match Scalar::from_be_bytes(tweak_bytes) {
                    Ok(tweak) => tweak,
                    Err(_) => {
                        warn!("Child tweak at index {} is past the curve order", child_index);
                        return Err(Error::InvalidChildKey);
                    }
                };
                let parent_key = SecretKey::from_slice(private_key)?;
                let child_key = match parent_key.add_tweak(&tweak) {
                    Ok(child_key) => child_key,
                    Err(_) => {
                        warn!("Child private key at index {} is zero", child_index);
                        return Err(Error::InvalidChildKey);
                    }
                };

                ExtendedKey::new_private_key(
                    self.profile,
                    self.depth() + 1,
                    &fingerprint,
                    child_index,
                    &i[32..],
                    &child_key.secret_bytes(),
                )
            }
            ExtendedKeyType::Public => {
                if hardened {
                    return Err(Error::CannotDeriveHardenedFromPublicOnly);
                }
                let public_key = self.public_key()?;
                let mut v = Vec::<u8>::with_capacity(37);
                v.extend_from_slice(&public_key);
                v.write_u32::<BigEndian>(child_index)?;
                let i = hmac_sha512(&self.chain_code(), &v)?;

                let tweak_key = match SecretKey::from_slice(&i[..32]) {
                    Ok(tweak_key) => tweak_key,
                    Err(_) => {
                        warn!("Child tweak at index {} is not a valid scalar", child_index);
                        return Err(Error::InvalidChildKey);
                    }
                };
                let secp = Secp256k1::signing_only();
                let offset = PublicKey::from_secret_key(&secp, &tweak_key);
                let parent_key = PublicKey::from_slice(&public_key)?;
                let child_key = match parent_key.combine(&offset) {
                    Ok(child_key) => child_key,
                    Err(_) => {
                        warn!("Child public key at index {} is infinity", child_index);
                        return Err(Error::InvalidChildKey);
                    }
                };

                ExtendedKey::new_public_key(
                    self.profile,
                    self.depth() + 1,
                    &fingerprint,
                    child_index,
                    &i[32..],
                    &child_key.serialize(),
                )
            }
        }
    }

    /// Derives a key using the BIP-32 and BIP-44 shortened key notation
    pub fn derive_path(&self, path: &str) -> Result<ExtendedKey> {
        let mut key = *self;
        for segment in parse_derivation_path(path)? {
            key = key.derive(segment.index, segment.hardened)?;
        }
        Ok(key)
    }

    /// Encodes an extended key into a base58check string
    pub fn encode(&self) -> String {
        let checksum = sha256d(&self.bytes);
        let mut v = Vec::with_capacity(82);
        v.extend_from_slice(&self.bytes);
        v.extend_from_slice(&checksum.0[..4]);
        bs58::encode(v).into_string()
    }

    /// Decodes an extended key from a base58check string
    pub fn decode(s: &str, profile: NetworkProfile) -> Result<ExtendedKey> {
        let v = bs58::decode(s).into_vec()?;
        if v.len() != 82 {
            let msg = format!("Expected 82 bytes, got {}", v.len());
            return Err(Error::MalformedExtendedKey(msg));
        }
        let checksum = sha256d(&v[..78]);
        if checksum.0[..4] != v[78..] {
            return Err(Error::ChecksumMismatch);
        }
        let version = ((v[0] as u32) << 24)
            | ((v[1] as u32) << 16)
            | ((v[2] as u32) << 8)
            | (v[3] as u32);
        match v[45] {
            0x00 => {
                if version != profile.private_prefix {
                    return Err(Error::UnknownVersionBytes(version));
                }
                SecretKey::from_slice(&v[46..78]).map_err(|_| {
                    Error::MalformedExtendedKey("Private key out of range".to_string())
                })?;
            }
            0x02 | 0x03 => {
                if version != profile.public_prefix {
                    return Err(Error::UnknownVersionBytes(version));
                }
                PublicKey::from_slice(&v[45..78]).map_err(|_| {
                    Error::MalformedExtendedKey("Public key not on the curve".to_string())
                })?;
            }
            b => {
                let msg = format!("Unknown key data prefix {}", b);
                return Err(Error::MalformedExtendedKey(msg));
            }
        }
        let mut extended_key = ExtendedKey {
            profile,
            bytes: [0; 78],
        };
        extended_key.bytes.clone_from_slice(&v[..78]);
        Ok(extended_key)
    }

    /// Signs a 32-byte digest, returning the compact 64-byte signature
    ///
    /// With `low_r` the nonce is ground until the signature's R value fits in
    /// 31 bytes, matching Bitcoin Core's signing behavior.
    pub fn sign(&self, hash: &[u8; 32], low_r: bool) -> Result<[u8; 64]> {
        let private_key = match self.private_key() {
            Some(private_key) => private_key,
            None => return Err(Error::NoPrivateKeyForSigning),
        };
        let secp = Secp256k1::signing_only();
        let secret_key = SecretKey::from_slice(&private_key)?;
        let message = Message::from_digest(*hash);
        let signature = if low_r {
            secp.sign_ecdsa_low_r(&message, &secret_key)
        } else {
            secp.sign_ecdsa(&message, &secret_key)
        };
        Ok(signature.serialize_compact())
    }

    /// Verifies a compact 64-byte signature over a 32-byte digest
    pub fn verify(&self, hash: &[u8; 32], signature: &[u8; 64]) -> bool {
        let public_key = match self.public_key() {
            Ok(public_key) => public_key,
            Err(_) => return false,
        };
        let public_key = match PublicKey::from_slice(&public_key) {
            Ok(public_key) => public_key,
            Err(_) => return false,
        };
        let signature = match ecdsa::Signature::from_compact(signature) {
            Ok(signature) => signature,
            Err(_) => return false,
        };
        let secp = Secp256k1::verification_only();
        let message = Message::from_digest(*hash);
        secp.verify_ecdsa(&message, &signature, &public_key).is_ok()
    }
}

impl fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

/// Computes the 64-byte HMAC-SHA512 used throughout BIP-32
fn hmac_sha512(key: &[u8], data: &[u8]) -> Result<[u8; 64]> {
    let mut hmac = HmacSha512::new_from_slice(key)
        .map_err(|_| Error::IllegalState("HMAC invalid key length".to_string()))?;
    hmac.update(data);
    let mut i = [0; 64];
    i.clone_from_slice(&hmac.finalize().into_bytes());
    Ok(i)
}
