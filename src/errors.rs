use thiserror::Error;

/// Failure taxonomy for the VRF engine.
///
/// The underlying primitive collapses every failure into a single signal;
/// this crate keeps the modes distinct so callers can tell a malformed
/// buffer apart from an honest verification miss. `VerificationFailed` is
/// an expected, non-exceptional outcome of `verify`, not a fault.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VrfError {
    #[error("invalid length: expected {expected} got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("secret key bytes are not a canonical ristretto255 scalar")]
    InvalidSecretKey,

    #[error("public key bytes are not a canonical ristretto255 point")]
    InvalidPublicKey,

    #[error("malformed VRF proof encoding")]
    InvalidProof,

    #[error("VRF proof does not verify under the given key and message")]
    VerificationFailed,

    #[error("secure random source unavailable")]
    RandomSourceUnavailable,
}
