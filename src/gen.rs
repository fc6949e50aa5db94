//! Random UUID generation.

#![cfg(feature = "gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "gen")))]

use crate::Uuid25;
use rand::random;

/// Generates a random UUID (UUIDv4) value encoded in the Uuid25 format.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid25::gen_v4();
/// println!("{}", uuid); // e.g., "99m8c8apmkzcfbqxfocxjl0d8"
/// println!("{}", uuid.to_hyphenated()); // e.g., "aa3de3dc-1f36-4a6b-8c09-c7ed3cfe3ad6"
/// ```
pub fn gen_v4() -> Uuid25 {
    let mut bytes: [u8; 16] = random();
    bytes[6] = 0x40 | (bytes[6] >> 4);
    bytes[8] = 0x80 | (bytes[8] >> 2);
    Uuid25::from_bytes(&bytes)
}
