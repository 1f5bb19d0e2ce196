use core::convert::TryFrom;
use core::fmt;

use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{OUTPUT_BYTES, PROOF_BYTES, PUBLIC_KEY_BYTES, SECRET_KEY_BYTES};
use crate::errors::VrfError;

/// VRF public key: a compressed ristretto255 point. Publishable.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct VrfPublicKey(pub [u8; PUBLIC_KEY_BYTES]);

/// VRF secret key: a canonical ristretto255 scalar.
///
/// The bytes are zeroized when the value is dropped, so scoping a
/// `VrfSecretKey` tightly is enough to erase the material
/// deterministically. `Debug` is redacted; the bytes never reach logs
/// through this type.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
#[repr(transparent)]
pub struct VrfSecretKey(pub [u8; SECRET_KEY_BYTES]);

/// VRF proof π: gamma (32) || challenge (16) || response (32).
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct VrfProof(pub [u8; PROOF_BYTES]);

/// Pseudorandom VRF output β, derived from a proof.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct VrfOutput(pub [u8; OUTPUT_BYTES]);

// Exact-sized decode helpers
macro_rules! impl_tryfrom_slice {
    ($t:ty, $len:expr) => {
        impl TryFrom<&[u8]> for $t {
            type Error = VrfError;
            fn try_from(b: &[u8]) -> Result<Self, Self::Error> {
                if b.len() != $len {
                    return Err(VrfError::InvalidLength { expected: $len, got: b.len() });
                }
                let mut arr = [0u8; $len];
                arr.copy_from_slice(b);
                Ok(Self(arr))
            }
        }
    };
}
impl_tryfrom_slice!(VrfPublicKey, PUBLIC_KEY_BYTES);
impl_tryfrom_slice!(VrfSecretKey, SECRET_KEY_BYTES);
impl_tryfrom_slice!(VrfProof, PROOF_BYTES);
impl_tryfrom_slice!(VrfOutput, OUTPUT_BYTES);

macro_rules! impl_bytes_accessors {
    ($t:ty, $len:expr) => {
        impl $t {
            /// Wrap an owned byte array of exactly the scheme length.
            #[must_use]
            pub const fn from_bytes(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// View the value as a byte slice.
            #[must_use]
            pub const fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Copy the value out as an owned byte array.
            #[must_use]
            pub const fn to_bytes(&self) -> [u8; $len] {
                self.0
            }
        }
    };
}
impl_bytes_accessors!(VrfPublicKey, PUBLIC_KEY_BYTES);
impl_bytes_accessors!(VrfSecretKey, SECRET_KEY_BYTES);
impl_bytes_accessors!(VrfProof, PROOF_BYTES);
impl_bytes_accessors!(VrfOutput, OUTPUT_BYTES);

fn fmt_hex(name: &str, bytes: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{name}(")?;
    for b in bytes {
        write!(f, "{b:02x}")?;
    }
    write!(f, ")")
}

impl fmt::Debug for VrfPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_hex("VrfPublicKey", &self.0, f)
    }
}

impl fmt::Debug for VrfProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_hex("VrfProof", &self.0, f)
    }
}

impl fmt::Debug for VrfOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_hex("VrfOutput", &self.0, f)
    }
}

impl fmt::Debug for VrfSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VrfSecretKey(redacted)")
    }
}

// Secret comparison must not short-circuit on the first differing byte.
impl PartialEq for VrfSecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}
impl Eq for VrfSecretKey {}

impl ConstantTimeEq for VrfOutput {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

/// A matched VRF key pair.
///
/// Generation is the only way to obtain one, which keeps the
/// public/secret halves paired by construction.
#[derive(Clone, Debug)]
pub struct VrfKeypair {
    public: VrfPublicKey,
    secret: VrfSecretKey,
}

impl VrfKeypair {
    pub(crate) const fn new(public: VrfPublicKey, secret: VrfSecretKey) -> Self {
        Self { public, secret }
    }

    /// The verification half; safe to publish.
    #[must_use]
    pub const fn public(&self) -> &VrfPublicKey {
        &self.public
    }

    /// The proving half.
    #[must_use]
    pub const fn secret(&self) -> &VrfSecretKey {
        &self.secret
    }

    /// Split the pair into its halves.
    #[must_use]
    pub fn into_parts(self) -> (VrfPublicKey, VrfSecretKey) {
        (self.public, self.secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tryfrom_rejects_wrong_lengths() {
        let short = [0u8; 31];
        let long = [0u8; 81];
        assert_eq!(
            VrfPublicKey::try_from(&short[..]),
            Err(VrfError::InvalidLength { expected: PUBLIC_KEY_BYTES, got: 31 })
        );
        assert_eq!(
            VrfProof::try_from(&long[..]),
            Err(VrfError::InvalidLength { expected: PROOF_BYTES, got: 81 })
        );
        assert!(VrfSecretKey::try_from(&short[..]).is_err());
        assert!(VrfOutput::try_from(&long[..]).is_err());
    }

    #[test]
    fn tryfrom_accepts_exact_lengths() {
        let pk = [7u8; PUBLIC_KEY_BYTES];
        let decoded = VrfPublicKey::try_from(&pk[..]).unwrap();
        assert_eq!(decoded.to_bytes(), pk);

        let out = [9u8; OUTPUT_BYTES];
        let decoded = VrfOutput::try_from(&out[..]).unwrap();
        assert_eq!(decoded.as_bytes(), &out);
    }

    #[test]
    fn secret_key_debug_is_redacted() {
        let sk = VrfSecretKey::from_bytes([0x42; SECRET_KEY_BYTES]);
        let rendered = format!("{sk:?}");
        assert_eq!(rendered, "VrfSecretKey(redacted)");
        assert!(!rendered.contains("42"));
    }

    #[test]
    fn public_key_debug_is_hex() {
        let pk = VrfPublicKey::from_bytes([0xab; PUBLIC_KEY_BYTES]);
        let rendered = format!("{pk:?}");
        assert!(rendered.starts_with("VrfPublicKey(abab"));
    }
}
