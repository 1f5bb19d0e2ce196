//! ECVRF engine over the vrf-r255 primitive (ECVRF-RISTRETTO255-SHA512).
//!
//! All curve arithmetic, hash-to-curve mapping, deterministic nonce
//! derivation and constant-time scalar handling live inside `vrf-r255`.
//! This module only decodes fixed-size buffers, drives the primitive and
//! re-encodes the results; it never branches on secret bytes itself.

use rand_core::{CryptoRng, OsRng, RngCore};
use sha2::{Digest, Sha512};
use vrf_r255::{Proof, PublicKey, SecretKey};
use zeroize::Zeroize;

use crate::constants::{GAMMA_BYTES, OUTPUT_BYTES, SUITE_STRING, THREE, ZERO};
use crate::errors::VrfError;
use crate::types::{VrfKeypair, VrfOutput, VrfProof, VrfPublicKey, VrfSecretKey};

/// An all-zero gamma is the canonical encoding of the identity point, so
/// the primitive's decoder accepts it even though no honest prover can
/// emit it. Proofs built on it are malformed, not merely non-verifying.
fn has_identity_gamma(proof: &VrfProof) -> bool {
    proof.as_bytes()[..GAMMA_BYTES].iter().all(|&b| b == 0)
}

/// Generate a fresh matched key pair from the OS secure random source.
///
/// # Errors
/// Returns `VrfError::RandomSourceUnavailable` if the OS entropy source
/// cannot be read. There is no fallback to a weaker source.
pub fn generate_keypair() -> Result<VrfKeypair, VrfError> {
    // OsRng panics inside the infallible `fill_bytes` path when the OS
    // entropy source is missing; probe through the fallible path first so
    // the condition surfaces as a status instead.
    let mut probe = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut probe)
        .map_err(|_| VrfError::RandomSourceUnavailable)?;
    probe.zeroize();

    Ok(generate_keypair_from_rng(OsRng))
}

/// Generate a matched key pair from a caller-supplied CSPRNG.
///
/// Seam for deterministic test harnesses and hosts that manage their own
/// entropy. The rng must be cryptographically secure; key quality is
/// exactly the rng's quality.
#[must_use]
pub fn generate_keypair_from_rng(rng: impl RngCore + CryptoRng) -> VrfKeypair {
    let sk = SecretKey::generate(rng);
    let pk = PublicKey::from(sk);
    VrfKeypair::new(
        VrfPublicKey::from_bytes(pk.to_bytes()),
        VrfSecretKey::from_bytes(sk.to_bytes()),
    )
}

/// Produce the unique VRF proof binding `secret` to `message`.
///
/// Proving is deterministic: identical inputs yield bit-identical proofs.
/// The nonce is derived synthetically inside the primitive and must not
/// be re-randomized here.
///
/// # Errors
/// Returns `VrfError::InvalidSecretKey` if the secret key bytes do not
/// decode to a canonical scalar. A malformed key never yields a proof.
pub fn prove(secret: &VrfSecretKey, message: &[u8]) -> Result<VrfProof, VrfError> {
    let sk: Option<SecretKey> = SecretKey::from_bytes(secret.to_bytes()).into();
    let sk = sk.ok_or(VrfError::InvalidSecretKey)?;
    let proof = sk.prove(message);
    Ok(VrfProof::from_bytes(proof.to_bytes()))
}

/// Verify `proof` against `public` and `message`, returning the VRF output.
///
/// Succeeds if and only if the proof was produced by [`prove`] with the
/// secret key matching `public`, over exactly `message`. On success the
/// returned output equals [`proof_to_hash`] of the same proof. There is
/// no output value on failure; the `Result` forces the status check the
/// original byte-buffer contract could only document.
///
/// # Errors
/// - `VrfError::InvalidPublicKey` — key bytes are not a canonical point.
/// - `VrfError::InvalidProof` — proof bytes are structurally malformed.
/// - `VrfError::VerificationFailed` — a well-formed proof that does not
///   match the key and message. Expected and non-exceptional.
pub fn verify(
    public: &VrfPublicKey,
    proof: &VrfProof,
    message: &[u8],
) -> Result<VrfOutput, VrfError> {
    let pk: Option<PublicKey> = PublicKey::from_bytes(public.to_bytes()).into();
    let pk = pk.ok_or(VrfError::InvalidPublicKey)?;

    // Reject identity-gamma proofs immediately
    if has_identity_gamma(proof) {
        return Err(VrfError::InvalidProof);
    }

    let pi: Option<Proof> = Proof::from_bytes(proof.to_bytes()).into();
    let pi = pi.ok_or(VrfError::InvalidProof)?;

    let beta: Option<[u8; OUTPUT_BYTES]> = pk.verify(message, &pi).into();
    let beta = beta.ok_or(VrfError::VerificationFailed)?;
    Ok(VrfOutput::from_bytes(beta))
}

/// Extract the VRF output from a structurally well-formed proof.
///
/// This does NOT verify the proof against any key or message; it only
/// checks that the encoding decodes (canonical gamma point that is not
/// the identity, canonical response scalar) and then derives the output.
/// A forged or mismatched proof that happens to be well-formed still
/// hashes. Callers who need
/// end-to-end assurance must use [`verify`]; for any proof accepted by
/// [`verify`], both return the same output.
///
/// # Errors
/// Returns `VrfError::InvalidProof` if the proof encoding is malformed.
pub fn proof_to_hash(proof: &VrfProof) -> Result<VrfOutput, VrfError> {
    if has_identity_gamma(proof) {
        return Err(VrfError::InvalidProof);
    }

    let decoded: Option<Proof> = Proof::from_bytes(proof.to_bytes()).into();
    if decoded.is_none() {
        return Err(VrfError::InvalidProof);
    }

    // RFC 9381 section 5.2: beta = Hash(suite || 0x03 || gamma || 0x00).
    // ristretto255 is prime order, so the cofactor multiplication is the
    // identity and the canonical gamma bytes are hashed as-is.
    let gamma = &proof.as_bytes()[..GAMMA_BYTES];
    let mut hash = Sha512::new();
    hash.update(SUITE_STRING);
    hash.update(THREE);
    hash.update(gamma);
    hash.update(ZERO);

    let mut output = [0u8; OUTPUT_BYTES];
    output.copy_from_slice(&hash.finalize());
    Ok(VrfOutput::from_bytes(output))
}
