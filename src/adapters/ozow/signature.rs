//! Ozow redirect signature.
//!
//! The `HashCheck` parameter is a SHA-512 digest over the redirect fields
//! concatenated in a fixed order, with the merchant private key appended
//! last. The gateway recomputes it to trust the query string.
//!
//! The field order is owned by the provider. If Ozow revises it, add a new
//! [`SignatureScheme`] variant rather than editing the existing one.

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha512};

/// Country code sent with every redirect.
pub const COUNTRY_CODE: &str = "ZA";

/// Currency code sent with every redirect.
pub const CURRENCY_CODE: &str = "ZAR";

/// Versioned hash construction for the `HashCheck` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureScheme {
    /// Plain concatenation of the signed fields plus private key, SHA-512,
    /// lowercase hex.
    #[default]
    ConcatSha512V1,
}

/// Redirect fields covered by the signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedFields<'a> {
    pub site_code: &'a str,
    pub amount: &'a str,
    pub transaction_reference: &'a str,
    pub bank_reference: &'a str,
    pub cancel_url: &'a str,
    pub error_url: &'a str,
    pub success_url: &'a str,
    pub is_test: bool,
}

impl SignedFields<'_> {
    /// Test flag as transmitted: `"true"` or `"false"`.
    pub fn is_test_flag(&self) -> &'static str {
        if self.is_test {
            "true"
        } else {
            "false"
        }
    }

    /// Fields in signing order, without the private key.
    fn ordered(&self) -> [&str; 10] {
        [
            self.site_code,
            COUNTRY_CODE,
            CURRENCY_CODE,
            self.amount,
            self.transaction_reference,
            self.bank_reference,
            self.cancel_url,
            self.error_url,
            self.success_url,
            self.is_test_flag(),
        ]
    }
}

impl SignatureScheme {
    /// Computes the `HashCheck` value for `fields`.
    pub fn hash_check(&self, fields: &SignedFields<'_>, private_key: &SecretString) -> String {
        match self {
            SignatureScheme::ConcatSha512V1 => {
                let mut hasher = Sha512::new();
                for field in fields.ordered() {
                    hasher.update(field.as_bytes());
                }
                hasher.update(private_key.expose_secret().as_bytes());
                hex::encode(hasher.finalize())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> SignedFields<'static> {
        SignedFields {
            site_code: "SITE-001",
            amount: "799.80",
            transaction_reference: "SM-1700000000000-abcdef01",
            bank_reference: "SM-1700000000000-abcdef01",
            cancel_url: "http://localhost:3000/checkout/cancel",
            error_url: "http://localhost:3000/checkout/error",
            success_url: "http://localhost:3000/checkout/success",
            is_test: false,
        }
    }

    fn key() -> SecretString {
        SecretString::new("private-key".to_string())
    }

    fn reference_digest(input: &str) -> String {
        hex::encode(Sha512::digest(input.as_bytes()))
    }

    #[test]
    fn digest_matches_plain_concatenation() {
        let expected = reference_digest(
            "SITE-001ZAZAR799.80SM-1700000000000-abcdef01SM-1700000000000-abcdef01\
             http://localhost:3000/checkout/cancelhttp://localhost:3000/checkout/error\
             http://localhost:3000/checkout/successfalseprivate-key",
        );

        assert_eq!(SignatureScheme::default().hash_check(&fields(), &key()), expected);
    }

    #[test]
    fn digest_is_lowercase_hex_of_512_bits() {
        let digest = SignatureScheme::ConcatSha512V1.hash_check(&fields(), &key());
        assert_eq!(digest.len(), 128);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn digest_is_deterministic() {
        let scheme = SignatureScheme::ConcatSha512V1;
        assert_eq!(
            scheme.hash_check(&fields(), &key()),
            scheme.hash_check(&fields(), &key())
        );
    }

    #[test]
    fn changing_any_field_changes_digest() {
        let scheme = SignatureScheme::ConcatSha512V1;
        let baseline = scheme.hash_check(&fields(), &key());

        let variants = [
            SignedFields { site_code: "SITE-002", ..fields() },
            SignedFields { amount: "799.81", ..fields() },
            SignedFields { transaction_reference: "SM-other", ..fields() },
            SignedFields { bank_reference: "SM-other", ..fields() },
            SignedFields { cancel_url: "https://example.com/cancel", ..fields() },
            SignedFields { error_url: "https://example.com/error", ..fields() },
            SignedFields { success_url: "https://example.com/success", ..fields() },
            SignedFields { is_test: true, ..fields() },
        ];

        for variant in variants {
            assert_ne!(scheme.hash_check(&variant, &key()), baseline, "{:?}", variant);
        }

        let other_key = SecretString::new("other-key".to_string());
        assert_ne!(scheme.hash_check(&fields(), &other_key), baseline);
    }

    #[test]
    fn test_flag_renders_as_text() {
        assert_eq!(fields().is_test_flag(), "false");
        assert_eq!(SignedFields { is_test: true, ..fields() }.is_test_flag(), "true");
    }
}
