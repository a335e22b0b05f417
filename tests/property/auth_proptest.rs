//! Property-based tests for password hashing and session tokens
//!
//! Uses proptest to generate random inputs and verify properties

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use proptest::prelude::*;
use snippet_organizer::backend::auth::password::PasswordHasher;
use snippet_organizer::backend::auth::sessions::{Claims, InvalidReason};

use crate::common::{test_tokens, TEST_COST, TEST_SECRET};

fn hasher() -> PasswordHasher {
    PasswordHasher::new(TEST_COST).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_hash_then_verify(password in "[ -~]{1,72}") {
        let hasher = hasher();
        let hashed = hasher.hash(&password).unwrap();
        prop_assert!(hasher.verify(&password, &hashed).unwrap());
    }

    #[test]
    fn test_other_password_does_not_verify(
        first in "[a-z0-9]{1,32}",
        second in "[a-z0-9]{1,32}",
    ) {
        prop_assume!(first != second);
        let hasher = hasher();
        let hashed = hasher.hash(&second).unwrap();
        prop_assert!(!hasher.verify(&first, &hashed).unwrap());
    }

    #[test]
    fn test_hashes_are_salted(password in "[ -~]{1,40}") {
        let hasher = hasher();
        let first = hasher.hash(&password).unwrap();
        let second = hasher.hash(&password).unwrap();
        prop_assert_ne!(&first, &second);
        prop_assert!(hasher.verify(&password, &first).unwrap());
        prop_assert!(hasher.verify(&password, &second).unwrap());
    }
}

proptest! {
    #[test]
    fn test_issue_then_validate(user_id in any::<i64>()) {
        let tokens = test_tokens();
        let claims = tokens.validate(&tokens.issue(user_id).unwrap()).unwrap();
        prop_assert_eq!(claims.user_id, user_id);
    }

    #[test]
    fn test_signature_bit_flip_is_rejected(user_id in 1i64..1_000_000, bit in 0usize..256) {
        let tokens = test_tokens();
        let token = tokens.issue(user_id).unwrap();

        let (signed, signature) = token.rsplit_once('.').unwrap();
        let mut bytes = URL_SAFE_NO_PAD.decode(signature).unwrap();
        bytes[bit / 8] ^= 1 << (bit % 8);
        let tampered = format!("{}.{}", signed, URL_SAFE_NO_PAD.encode(&bytes));

        let err = tokens.validate(&tampered).unwrap_err();
        prop_assert_eq!(err.invalid_reason(), Some(InvalidReason::BadSignature));
    }

    #[test]
    fn test_other_hmac_algorithms_rejected(
        user_id in 1i64..1_000_000,
        algorithm in prop_oneof![Just(Algorithm::HS384), Just(Algorithm::HS512)],
    ) {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims { user_id, iat: now, exp: now + 3600 };
        let token = encode(&Header::new(algorithm), &claims, &EncodingKey::from_secret(TEST_SECRET))
            .unwrap();

        let err = test_tokens().validate(&token).unwrap_err();
        prop_assert_eq!(err.invalid_reason(), Some(InvalidReason::WrongAlgorithm));
    }
}
