//! Uuid25: 25-digit case-insensitive UUID encoding
//!
//! Uuid25 is an alternative UUID representation that shortens a UUID string to just 25 digits
//! using the case-insensitive Base36 encoding. This library provides functionality to convert
//! from the conventional UUID formats to Uuid25 and vice versa.
//!
//! ```rust
//! use uuid25::Uuid25;
//!
//! // convert from/to string
//! let a = Uuid25::parse("8da942a4-1fbe-4ca6-852c-95c473229c7d")?;
//! assert_eq!(a.as_str(), "8dx554y5rzerz1syhqsvsdw8t");
//! assert_eq!(a.to_hyphenated().as_str(), "8da942a4-1fbe-4ca6-852c-95c473229c7d");
//!
//! // convert from/to 128-bit byte array
//! let b = Uuid25::from_bytes(&[0xff; 16]);
//! assert_eq!(b.as_str(), "f5lxx1zz5pnorynqglhzmsp33");
//! assert!(b.to_bytes().iter().all(|&x| x == 0xff));
//!
//! // convert from/to other popular textual representations
//! let c = [
//!     Uuid25::parse("e7a1d63b711744238988afcf12161878")?,
//!     Uuid25::parse("e7a1d63b-7117-4423-8988-afcf12161878")?,
//!     Uuid25::parse("{e7a1d63b-7117-4423-8988-afcf12161878}")?,
//!     Uuid25::parse("urn:uuid:e7a1d63b-7117-4423-8988-afcf12161878")?,
//! ];
//! assert!(c.iter().all(|x| x.as_str() == "dpoadk8izg9y4tte7vy1xt94o"));
//!
//! let d = Uuid25::parse("dpoadk8izg9y4tte7vy1xt94o")?;
//! assert_eq!(d.to_hex().as_str(), "e7a1d63b711744238988afcf12161878");
//! assert_eq!(d.to_hyphenated().as_str(), "e7a1d63b-7117-4423-8988-afcf12161878");
//! assert_eq!(d.to_braced().as_str(), "{e7a1d63b-7117-4423-8988-afcf12161878}");
//! assert_eq!(d.to_urn().as_str(), "urn:uuid:e7a1d63b-7117-4423-8988-afcf12161878");
//! # Ok::<(), uuid25::ParseError>(())
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `std` enables, among others, the conversion from and to `String` and the
//!   `std::error::Error` implementation of [`ParseError`]. Without `std`, this crate
//!   provides limited functionality available under `no_std` environments.
//!
//! Optional features:
//!
//! - `gen` enables the generation of random UUIDs through [`gen_v4()`].
//! - `serde` enables the serialization and deserialization of [`Uuid25`] values.
//! - `uuid` enables the conversion from and to the UUID type of the `uuid` crate.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod base;

mod id;
pub use id::{ParseError, ParseErrorKind, Uuid25};

mod gen;
#[cfg(feature = "gen")]
pub use gen::gen_v4;

#[cfg(test)]
mod test_cases;
