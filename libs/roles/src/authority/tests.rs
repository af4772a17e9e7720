use super::{rpc::InsertKeyRequest, *};
use assert_matches::assert_matches;
use polkadex_keygen_crypto::{
    mnemonic::{testonly::ZERO_PHRASE, MnemonicError, DEFAULT_WORD_COUNT},
    TextFmt as _,
};
use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, Rng as _, SeedableRng as _};
use std::collections::HashSet;

const ZERO_AURA: &str = "0x66933bd1f37070ef87bd1198af3dacceb095237f803f3d32b173e6b425ed7972";
const ZERO_GRAN: &str = "0x9125f505bdef2cb5825b9931769316d3e2f22150786489a04f39b434ec9fb294";

fn is_public_hex(s: &str) -> bool {
    s.len() == 66
        && s.starts_with("0x")
        && s[2..].bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[test]
fn test_derive_vector() {
    let keys = Keyring::ready().unwrap().derive_from_phrase(ZERO_PHRASE).unwrap();
    assert_eq!(keys.public_hex(KeyType::Aura), ZERO_AURA);
    assert_eq!(keys.public_hex(KeyType::Gran), ZERO_GRAN);
    assert_eq!(keys.aura().encode(), ZERO_AURA);
    assert_eq!(keys.gran().encode(), ZERO_GRAN);
}

#[test]
fn test_generate() {
    let keyring = Keyring::ready().unwrap();
    let mut seen = HashSet::new();
    for _ in 0..4 {
        let keys = keyring.generate(DEFAULT_WORD_COUNT).unwrap();
        assert_eq!(keys.mnemonic().word_count(), DEFAULT_WORD_COUNT);
        for key_type in KeyType::ALL {
            let public = keys.public_hex(key_type);
            assert!(is_public_hex(&public), "{public}");
            assert!(seen.insert(public));
        }
        // Same mnemonic yields the same keys.
        let again = keyring.derive_from_phrase(keys.mnemonic().phrase()).unwrap();
        assert_eq!(keys.aura(), again.aura());
        assert_eq!(keys.gran(), again.gran());
    }
}

#[test]
fn test_generate_bad_word_count() {
    let keyring = Keyring::ready().unwrap();
    assert_matches!(
        keyring.generate(11),
        Err(GenerationError::MnemonicGeneration(MnemonicError::WordCount(11)))
    );
}

#[test]
fn test_derive_invalid_phrase() {
    let keyring = Keyring::ready().unwrap();
    for phrase in ["", "   ", "not a mnemonic at all"] {
        assert_matches!(
            keyring.derive_from_phrase(phrase),
            Err(KeyDerivationError::InvalidMnemonic(_))
        );
    }
}

#[test]
fn test_insert_key_request() {
    let keys = Keyring::ready().unwrap().derive_from_phrase(ZERO_PHRASE).unwrap();
    let req = keys.insert_key_request(KeyType::Gran, KeyType::Gran.default_id());
    assert_eq!(req.method(), "author_insertKey");
    assert_eq!(
        req.to_json().unwrap(),
        format!(
            r#"{{"jsonrpc":"2.0","id":1,"method":"author_insertKey","params":["gran","{ZERO_PHRASE}","{ZERO_GRAN}"]}}"#
        )
    );
    assert_eq!(req, InsertKeyRequest::from_json(&req.to_json().unwrap()).unwrap());
    assert!(!format!("{req:?}").contains(ZERO_PHRASE));
}

#[test]
fn test_same_mnemonic_in_both_requests() {
    let rng = &mut StdRng::seed_from_u64(1001);
    let keys: AuthorityKeySet = rng.gen();
    let aura = keys.insert_key_request(KeyType::Aura, KeyType::Aura.default_id());
    let gran = keys.insert_key_request(KeyType::Gran, KeyType::Gran.default_id());
    assert_eq!(aura.suri(), gran.suri());
    assert_eq!(aura.key_type(), "aura");
    assert_eq!(gran.key_type(), "gran");
    assert_ne!(aura.public(), gran.public());
}

#[test]
fn test_registration_line() {
    let keys = Keyring::ready().unwrap().derive_from_phrase(ZERO_PHRASE).unwrap();
    assert_eq!(
        keys.registration_line(),
        format!("authority_keys_from_seed(\"{ZERO_PHRASE}\"),")
    );
    assert!(!format!("{keys:?}").contains(ZERO_PHRASE));
}

#[test]
fn test_key_type_id() {
    assert_eq!(KeyType::Aura.default_id().as_str(), "aura");
    assert_eq!("imon".parse::<KeyTypeId>().unwrap().to_string(), "imon");
    for bad in ["", "gra", "grand", "gr n", "gr\u{e9}"] {
        assert!(bad.parse::<KeyTypeId>().is_err(), "{bad:?}");
    }
}
