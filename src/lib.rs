//! SHA-1, SHA-224 and SHA-256 on a shared Merkle–Damgård engine, with hex and
//! Base64 rendering of the digests.
//!
//! ```
//! use cryptic::{Sha1, Sha256};
//!
//! assert_eq!(
//!     Sha1::hexadecimal_of("abc"),
//!     "a9993e364706816aba3e25717850c26c9cd0d89d"
//! );
//!
//! let mut sha256 = Sha256::new();
//! sha256.hash(b"");
//! assert_eq!(sha256.base64(), "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=");
//! ```

#![allow(non_snake_case)]

pub mod Bit_utils;

pub mod Encoding {
    pub mod Base64;
}

pub mod Integrity {
    pub mod Merkle_Damgard;
    pub mod SHA;
}

pub use Encoding::Base64::Base64Error;
pub use Integrity::Merkle_Damgard::{Compression, MerkleDamgard, CHUNK_SIZE};
pub use Integrity::SHA::SHA1::{Sha1, Sha1Compression};
pub use Integrity::SHA::SHA2::{Sha224, Sha224Compression, Sha256, Sha256Compression};
