use super::*;
use crate::{
    decode_prefixed_hex,
    mnemonic::{testonly::ZERO_PHRASE, MiniSecret, Mnemonic},
};

/// (seed, public key, message, signature) from RFC 8032, section 7.1.
const RFC8032_VECTORS: [(&str, &str, &str, &str); 3] = [
    (
        "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60",
        "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a",
        "",
        "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b",
    ),
    (
        "4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb",
        "3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c",
        "72",
        "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00",
    ),
    (
        "c5aa8df43f9f837bedb7442f31dcb7b166d38535076f094b85ce3a2e0b4458f7",
        "fc51cd8e6218a1a38da47ed00230f0580816ed13ba3303ac5deb911548908025",
        "af82",
        "6291d657deec24024827e69c3abe01a30ce548a284743a445e3680d7db5ac3ac18ff9b538d16f290ae67f760984dc6594a7c15e9716ed28dc027beceea1ec40a",
    ),
];

#[test]
fn test_rfc8032_vectors() {
    for (seed, public, msg, sig) in RFC8032_VECTORS {
        let seed = hex::decode(seed).unwrap();
        let msg = hex::decode(msg).unwrap();

        let key: SecretKey = ByteFmt::decode(&seed).unwrap();
        assert_eq!(hex::encode(ByteFmt::encode(&key.public())), public);

        let got = key.sign(&msg);
        assert_eq!(hex::encode(ByteFmt::encode(&got)), sig);
        key.public().verify(&msg, &got).unwrap();
    }
}

#[test]
fn test_mini_secret_is_used_as_seed() {
    let (seed, public, _, _) = RFC8032_VECTORS[0];
    let seed: [u8; 32] = hex::decode(seed).unwrap().try_into().unwrap();
    let key = SecretKey::from_mini_secret(&MiniSecret::from_bytes(seed));
    assert_eq!(TextFmt::encode(&key.public()), format!("0x{public}"));
}

#[test]
fn test_mnemonic_vector() {
    let m = Mnemonic::from_phrase(ZERO_PHRASE).unwrap();
    let key = SecretKey::from_mini_secret(&m.mini_secret());
    assert_eq!(
        TextFmt::encode(&key.public()),
        "0x9125f505bdef2cb5825b9931769316d3e2f22150786489a04f39b434ec9fb294"
    );
}

#[test]
fn test_text_encoding() {
    let key = SecretKey::generate().public();
    let text = TextFmt::encode(&key);
    assert!(text.starts_with("0x"));
    assert_eq!(text.len(), 2 + 2 * PUBLIC_KEY_LENGTH);
    assert_eq!(hex::encode(key.as_bytes()), &text[2..]);
    assert_eq!(key, decode_prefixed_hex::<PublicKey>(&text).unwrap());
    assert!(Text::new(&text[2..]).decode::<PublicKey>().is_err());
}

#[test]
fn test_public_verify() {
    let msg1 = b"aura";
    let msg2 = b"gran";
    let key1 = SecretKey::generate();
    let key2 = SecretKey::generate();
    let sig1 = key1.sign(msg1);
    // Matching key and message.
    assert!(key1.public().verify(msg1, &sig1).is_ok());
    // Mismatching message.
    assert!(key1.public().verify(msg2, &sig1).is_err());
    // Mismatching key.
    assert!(key2.public().verify(msg1, &sig1).is_err());
}
