//! Scheme constants for ECVRF-RISTRETTO255-SHA512.
//!
//! Buffer-size mismatches are the most common integration failure for a
//! byte-oriented VRF surface, so the four lengths are part of the stable,
//! versioned contract of this crate.

/// Ciphersuite implemented by this engine.
pub const SUITE_NAME: &str = "ECVRF-RISTRETTO255-SHA512";

/// Byte length of a VRF public key (compressed ristretto255 point).
pub const PUBLIC_KEY_BYTES: usize = 32;

/// Byte length of a VRF secret key (canonical ristretto255 scalar).
pub const SECRET_KEY_BYTES: usize = 32;

/// Byte length of a VRF proof: gamma (32) || challenge (16) || response (32).
pub const PROOF_BYTES: usize = 80;

/// Byte length of the pseudorandom VRF output.
pub const OUTPUT_BYTES: usize = 64;

/// RFC 9381 `suite_string` for the vrf-r255 ciphersuite (c2sp.org/vrf-r255).
pub(crate) const SUITE_STRING: &[u8] = b"\xffc2sp.org/vrf-r255";

/// `proof_to_hash` domain separator, RFC 9381 section 5.2.
pub(crate) const THREE: &[u8] = &[3u8];

/// Trailing `zero_string` byte of `proof_to_hash`.
pub(crate) const ZERO: &[u8] = &[0u8];

/// Byte length of the gamma point prefix of a proof.
pub(crate) const GAMMA_BYTES: usize = 32;
