use super::{testonly::*, *};
use assert_matches::assert_matches;
use rand::{rngs::StdRng, Rng as _, SeedableRng as _};

#[test]
fn test_generate() {
    for word_count in WORD_COUNTS {
        let m = Mnemonic::generate(word_count).unwrap();
        assert_eq!(m.word_count(), word_count);
        assert_eq!(m.phrase().split(' ').count(), word_count);
        assert_eq!(m, Mnemonic::from_phrase(m.phrase()).unwrap());
    }
}

#[test]
fn test_generate_is_random() {
    let a = Mnemonic::generate(DEFAULT_WORD_COUNT).unwrap();
    let b = Mnemonic::generate(DEFAULT_WORD_COUNT).unwrap();
    assert_ne!(a, b);
    assert_ne!(a.mini_secret().as_bytes(), b.mini_secret().as_bytes());
}

#[test]
fn test_unsupported_word_count() {
    assert_matches!(Mnemonic::generate(0), Err(MnemonicError::WordCount(0)));
    assert_matches!(Mnemonic::generate(13), Err(MnemonicError::WordCount(13)));
    assert_eq!(entropy_length(12).unwrap(), 16);
    assert_eq!(entropy_length(24).unwrap(), 32);
}

#[test]
fn test_invalid_phrase() {
    assert_matches!(
        Mnemonic::from_phrase(""),
        Err(MnemonicError::InvalidPhrase(_))
    );
    // Bad checksum.
    assert_matches!(
        Mnemonic::from_phrase(&["abandon"; 12].join(" ")),
        Err(MnemonicError::InvalidPhrase(_))
    );
    // Unknown word.
    assert_matches!(
        Mnemonic::from_phrase(&ZERO_PHRASE.replace("about", "polkadex")),
        Err(MnemonicError::InvalidPhrase(_))
    );
}

#[test]
fn test_mini_secret_vector() {
    let m = Mnemonic::from_phrase(&format!("  {ZERO_PHRASE}\n")).unwrap();
    assert_eq!(m.phrase(), ZERO_PHRASE);
    assert_eq!(hex::encode(m.mini_secret().as_bytes()), ZERO_MINI_SECRET);
}

#[test]
fn test_mini_secret_is_deterministic() {
    let rng = &mut StdRng::seed_from_u64(29483920);
    let m: Mnemonic = rng.gen();
    let again = Mnemonic::from_phrase(m.phrase()).unwrap();
    assert_eq!(m.mini_secret().as_bytes(), again.mini_secret().as_bytes());
}

#[test]
fn test_debug_hides_secrets() {
    let m = Mnemonic::from_phrase(ZERO_PHRASE).unwrap();
    assert_eq!(format!("{m:?}"), "<mnemonic of 12 words>");
    assert_eq!(format!("{:?}", m.mini_secret()), "<mini secret>");
}
