#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic, clippy::nursery)]

//! VRF Engine
//!
//! A minimal Verifiable Random Function engine: key generation, proof
//! generation, proof verification and proof-to-hash extraction over
//! fixed-size byte buffers. The curve math is not implemented here; it
//! is delegated to the audited `vrf-r255` primitive.

// Fixed cryptographic choices:
// - VRF: ECVRF-RISTRETTO255-SHA512 (RFC 9381 profile, c2sp.org/vrf-r255)
// - Output derivation: SHA-512 over the canonical gamma encoding
// - Randomness: OS CSPRNG only, no fallback
//
// This implementation prioritizes:
// 1. Correctness: buffer sizes and failure modes are part of the contract
// 2. Security: secret keys zeroize on drop and never appear in Debug output
// 3. Misuse resistance: outputs exist only behind a checked Result

// Core modules
pub mod constants;
pub mod ecvrf;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use constants::{
    OUTPUT_BYTES, PROOF_BYTES, PUBLIC_KEY_BYTES, SECRET_KEY_BYTES, SUITE_NAME,
};
pub use ecvrf::{generate_keypair, generate_keypair_from_rng, proof_to_hash, prove, verify};
pub use errors::VrfError;
pub use types::{VrfKeypair, VrfOutput, VrfProof, VrfPublicKey, VrfSecretKey};

// Version constant
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
