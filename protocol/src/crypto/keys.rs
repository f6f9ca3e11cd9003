//! # Key Management
//!
//! Ed25519 keypairs, the way the network sees them.
//!
//! A [`Keypair`] always has a public key and may or may not have the secret
//! half. Watching an account only needs its `G...` address; signing for it
//! needs the `S...` seed. Both are the same type, and asking a public-only
//! keypair to sign is an error rather than a panic.
//!
//! ## Security considerations
//!
//! - Private keys are zeroized on drop (thanks, ed25519-dalek).
//! - Random keys come from `OsRng`. If your OS RNG is broken, you have
//!   bigger problems than this crate.
//! - Key bytes are never logged, and `Debug` prints only the public key.

use ed25519_dalek::{Signature as DalekSignature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use std::fmt;
use thiserror::Error;

use crate::identity::strkey::{self, StrkeyError};
use crate::xdr::{
    AccountId, BytesM, DecoratedSignature, MuxedAccount, PublicKey, SignatureHint, SignerKey,
};

/// Errors that can occur during key operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("invalid secret key bytes")]
    InvalidSecretKey,

    #[error("invalid public key bytes: not a valid Ed25519 point")]
    InvalidPublicKey,

    /// The keypair was built from a public key only.
    #[error("no secret key available")]
    NoSecretKey,

    #[error(transparent)]
    Strkey(#[from] StrkeyError),
}

/// An ed25519 keypair, possibly without its secret half.
///
/// # Examples
///
/// ```
/// use stellar_wire::crypto::Keypair;
///
/// let kp = Keypair::random();
/// let sig = kp.sign(b"pay the rent").unwrap();
/// assert!(kp.verify(b"pay the rent", &sig));
///
/// let watcher = Keypair::from_public_key(&kp.public_key()).unwrap();
/// assert!(!watcher.can_sign());
/// ```
pub struct Keypair {
    verifying_key: VerifyingKey,
    signing_key: Option<SigningKey>,
}

impl Keypair {
    /// Generate a fresh keypair using the OS cryptographic RNG.
    pub fn random() -> Self {
        Self::from_signing_key(SigningKey::generate(&mut OsRng))
    }

    /// Build a signing keypair from a raw 32-byte seed.
    pub fn from_raw_ed25519_seed(seed: &[u8; 32]) -> Self {
        Self::from_signing_key(SigningKey::from_bytes(seed))
    }

    /// Parse an `S...` secret seed.
    pub fn from_secret(secret: &str) -> Result<Self, KeyError> {
        let seed = strkey::decode_seed(secret)?;
        Ok(Self::from_raw_ed25519_seed(&seed))
    }

    /// Parse a `G...` account id into a verify-only keypair.
    pub fn from_public_key(public_key: &str) -> Result<Self, KeyError> {
        let bytes = strkey::decode_account_id(public_key)?;
        Self::from_raw_ed25519_public_key(&bytes)
    }

    /// A verify-only keypair from raw public key bytes.
    ///
    /// Rejects bytes that do not decode to a curve point.
    pub fn from_raw_ed25519_public_key(bytes: &[u8; 32]) -> Result<Self, KeyError> {
        let verifying_key =
            VerifyingKey::from_bytes(bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self {
            verifying_key,
            signing_key: None,
        })
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        Self {
            verifying_key: signing_key.verifying_key(),
            signing_key: Some(signing_key),
        }
    }

    /// Raw 32-byte public key.
    pub fn raw_public_key(&self) -> [u8; 32] {
        self.verifying_key.to_bytes()
    }

    /// The `G...` account id.
    pub fn public_key(&self) -> String {
        strkey::encode_account_id(&self.raw_public_key())
    }

    /// The `S...` seed. Fails on a public-only keypair.
    ///
    /// Handle the result the way you would handle cash.
    pub fn secret(&self) -> Result<String, KeyError> {
        Ok(strkey::encode_seed(&self.raw_secret_key()?))
    }

    /// Raw 32-byte seed. Fails on a public-only keypair.
    pub fn raw_secret_key(&self) -> Result<[u8; 32], KeyError> {
        self.signing_key
            .as_ref()
            .map(SigningKey::to_bytes)
            .ok_or(KeyError::NoSecretKey)
    }

    /// `true` if this keypair holds a secret key.
    pub fn can_sign(&self) -> bool {
        self.signing_key.is_some()
    }

    /// The last four bytes of the public key, used to pick the right key
    /// for a signature without trying them all.
    pub fn signature_hint(&self) -> SignatureHint {
        super::signatures::hint_for(&self.raw_public_key())
    }

    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// The account id as XDR.
    pub fn xdr_account_id(&self) -> AccountId {
        PublicKey::PublicKeyTypeEd25519(self.raw_public_key())
    }

    /// The account as an unmuxed XDR transaction source.
    pub fn xdr_muxed_account(&self) -> MuxedAccount {
        MuxedAccount::Ed25519(self.raw_public_key())
    }

    /// This key as an account signer.
    pub fn signer_key(&self) -> SignerKey {
        SignerKey::Ed25519(self.raw_public_key())
    }

    /// Sign `data`. Ed25519 is deterministic: same key and data, same bytes.
    pub fn sign(&self, data: &[u8]) -> Result<[u8; 64], KeyError> {
        let signing_key = self.signing_key.as_ref().ok_or(KeyError::NoSecretKey)?;
        Ok(signing_key.sign(data).to_bytes())
    }

    /// Check a signature over `data`. Anything that is not exactly 64
    /// bytes of valid signature is simply `false`.
    pub fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        let Ok(sig_bytes) = <[u8; 64]>::try_from(signature) else {
            return false;
        };
        self.verifying_key
            .verify(data, &DalekSignature::from_bytes(&sig_bytes))
            .is_ok()
    }

    /// Sign `data` and attach this key's hint.
    pub fn sign_decorated(&self, data: &[u8]) -> Result<DecoratedSignature, KeyError> {
        let signature = self.sign(data)?;
        Ok(DecoratedSignature {
            hint: self.signature_hint(),
            signature: BytesM::try_from(signature).map_err(|_| KeyError::InvalidSecretKey)?,
        })
    }

    /// Sign `data` for a signed-payload signer.
    ///
    /// The hint is the key hint XORed with the last four bytes of the
    /// payload. Payloads shorter than four bytes are zero-padded on the
    /// right first.
    pub fn sign_payload_decorated(&self, data: &[u8]) -> Result<DecoratedSignature, KeyError> {
        let mut decorated = self.sign_decorated(data)?;
        let mut payload_hint = [0u8; 4];
        if data.len() >= 4 {
            payload_hint.copy_from_slice(&data[data.len() - 4..]);
        } else {
            payload_hint[..data.len()].copy_from_slice(data);
        }
        for (h, p) in decorated.hint.iter_mut().zip(payload_hint) {
            *h ^= p;
        }
        Ok(decorated)
    }
}

impl Clone for Keypair {
    /// Cloning a keypair is allowed but should make you uncomfortable.
    fn clone(&self) -> Self {
        Self {
            verifying_key: self.verifying_key,
            signing_key: self.signing_key.clone(),
        }
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Public key and capability only. Never the seed, not even partially.
        f.debug_struct("Keypair")
            .field("public_key", &self.public_key())
            .field("can_sign", &self.can_sign())
            .finish()
    }
}

impl PartialEq for Keypair {
    /// Two keypairs are equal if their public keys match.
    fn eq(&self, other: &Self) -> bool {
        self.verifying_key == other.verifying_key
    }
}

impl Eq for Keypair {}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "SDJHRQF4GCMIIKAAAQ6IHY42X73FQFLHUULAPSKKD4DFDM7UXWWCRHBE";
    const PUBLIC: &str = "GCZHXL5HXQX5ABDM26LHYRCQZ5OJFHLOPLZX47WEBP3V2PF5AVFK2A5D";
    const HELLO_SIG: &str = "694a7db1f37a1cd0e0ac8b83bb01051fa32ceca6dfd677d6b3ba98bd98b3ba601ebd4d3a0df957f691906f293fa581b13728750ee94dfba3c62d6bd5985f300d";

    #[test]
    fn secret_derives_known_public_key() {
        let kp = Keypair::from_secret(SECRET).unwrap();
        assert_eq!(kp.public_key(), PUBLIC);
        assert_eq!(kp.secret().unwrap(), SECRET);
        assert_eq!(
            hex::encode(kp.raw_public_key()),
            "b27bafa7bc2fd0046cd7967c4450cf5c929d6e7af37e7ec40bf75d3cbd054aad"
        );
    }

    #[test]
    fn signature_is_deterministic_and_known() {
        let kp = Keypair::from_secret(SECRET).unwrap();
        let sig = kp.sign(b"hello world").unwrap();
        assert_eq!(hex::encode(sig), HELLO_SIG);
        assert!(kp.verify(b"hello world", &sig));
        assert!(!kp.verify(b"hello world!", &sig));
        assert!(!kp.verify(b"hello world", &sig[..63]));
    }

    #[test]
    fn public_only_keypair_cannot_sign() {
        let kp = Keypair::from_public_key(PUBLIC).unwrap();
        assert!(!kp.can_sign());
        assert_eq!(kp.sign(b"x"), Err(KeyError::NoSecretKey));
        assert_eq!(kp.secret(), Err(KeyError::NoSecretKey));
        // Still verifies.
        assert!(kp.verify(b"hello world", &hex::decode(HELLO_SIG).unwrap()));
    }

    #[test]
    fn hint_is_last_four_bytes() {
        let kp = Keypair::from_secret(SECRET).unwrap();
        assert_eq!(kp.signature_hint(), [0xbd, 0x05, 0x4a, 0xad]);
        let decorated = kp.sign_decorated(b"hello world").unwrap();
        assert_eq!(decorated.hint, kp.signature_hint());
        assert_eq!(hex::encode(decorated.signature.as_slice()), HELLO_SIG);
    }

    #[test]
    fn payload_hint_xors_payload_tail() {
        let kp = Keypair::from_secret(SECRET).unwrap();
        let long = kp.sign_payload_decorated(&[0, 0, 0, 0, 1, 2, 3, 4]).unwrap();
        assert_eq!(long.hint, [0xbd ^ 1, 0x05 ^ 2, 0x4a ^ 3, 0xad ^ 4]);

        let short = kp.sign_payload_decorated(&[0xff, 0xff]).unwrap();
        assert_eq!(short.hint, [0xbd ^ 0xff, 0x05 ^ 0xff, 0x4a, 0xad]);
    }

    #[test]
    fn wrong_strkey_class_is_rejected() {
        assert!(matches!(
            Keypair::from_secret(PUBLIC),
            Err(KeyError::Strkey(StrkeyError::InvalidVersion { .. }))
        ));
        assert!(Keypair::from_public_key(SECRET).is_err());
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let kp = Keypair::from_secret(SECRET).unwrap();
        let dbg = format!("{kp:?}");
        assert!(dbg.contains(PUBLIC));
        assert!(!dbg.contains(SECRET));
    }

    #[test]
    fn random_keys_differ() {
        let a = Keypair::random();
        let b = Keypair::random();
        assert_ne!(a, b);
        assert!(a.can_sign());
    }
}
