use crate::util::{Error, Result};
use crate::wallet::extended_key::HARDENED_KEY;

/// A single parsed segment of a derivation path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSegment {
    /// Child index before the hardened flag is applied
    pub index: u32,
    /// Whether the segment uses hardened derivation
    pub hardened: bool,
}

/// Parses BIP-32 path notation such as "m/44'/60'/0'/0"
///
/// A trailing apostrophe, h, or H marks a hardened segment. Every index must
/// be below 2^31 before the hardened flag is applied.
pub fn parse_derivation_path(path: &str) -> Result<Vec<PathSegment>> {
    let mut parts = path.split('/');
    if parts.next() != Some("m") {
        return Err(Error::InvalidPath("Path must start with m".to_string()));
    }
    let mut segments = Vec::new();
    for part in parts {
        let (digits, hardened) = match part.strip_suffix(|c| c == '\'' || c == 'h' || c == 'H') {
            Some(digits) => (digits, true),
            None => (part, false),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            let msg = format!("Bad path segment: {}", part);
            return Err(Error::InvalidPath(msg));
        }
        let index: u32 = digits.parse().map_err(|_| {
            let msg = format!("Bad path segment: {}", part);
            Error::InvalidPath(msg)
        })?;
        if index >= HARDENED_KEY {
            let msg = format!("Index {} must be below 2^31", index);
            return Err(Error::InvalidPath(msg));
        }
        segments.push(PathSegment { index, hardened });
    }
    Ok(segments)
}
