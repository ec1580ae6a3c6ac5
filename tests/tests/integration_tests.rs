use rijndael::prelude::*;
use rijndael_symmetric::{generate_iv, generate_key};
use rijndael_tests::vectors::{run_known_answer, PADDED, SP800_38A};
use rijndael_tests::{seeded_rng, unhex};

const KEY: &[u8; 16] = b"0123456789abcdef";
const IV: &[u8; 16] = b"ABCDEFGHIJKLMNOP";

#[test]
fn test_sp800_38a_through_context() {
    for case in SP800_38A {
        run_known_answer(case).unwrap();
    }
}

#[test]
fn test_padded_vectors_through_context() {
    for case in PADDED {
        run_known_answer(case).unwrap();
    }
}

#[test]
fn test_facade_prelude_covers_a_session() {
    let mut ctx = Aes128Context::new(KEY, IV).unwrap();
    let mut ct = [0u8; 64];
    let n = ctx.cbc_encrypt(b"ExactBlock16BytesX", &mut ct, true).unwrap();
    assert_eq!(n, 32);
    assert_eq!(
        &ct[..n],
        &unhex("60da260fade43c59b6ded85a6049d91347c48d9fd150af6f0d0d92d5d0e4ced5")[..]
    );

    // without a reset the vector has moved on and decryption garbles block 0
    let mut pt = [0u8; 64];
    let garbled = ctx.cbc_decrypt(&ct[..n], &mut pt, false).unwrap();
    assert_eq!(garbled, 32);
    assert_ne!(&pt[..16], b"ExactBlock16Byte");

    ctx.reset_iv();
    let m = ctx.cbc_decrypt(&ct[..n], &mut pt, true).unwrap();
    assert_eq!(&pt[..m], b"ExactBlock16BytesX");
}

#[test]
fn test_status_codes_are_stable() {
    let mut ctx = Aes256Context::new(&[1u8; 32], IV).unwrap();
    let mut out = [0u8; 64];

    let empty = ctx.ecb_encrypt(&[], &mut out, true);
    assert_eq!(Status::of(&empty), Status::EmptyInput);
    assert_eq!(Status::of(&empty).code(), 1);

    let large = ctx.cbc_encrypt(&[0u8; 64], &mut out, true);
    assert_eq!(Status::of(&large).code(), 2);

    let unaligned = ctx.cbc_decrypt(&[0u8; 20], &mut out, true);
    assert_eq!(Status::of(&unaligned), Status::UnalignedInput);

    let ok = ctx.ecb_encrypt(b"x", &mut out, true);
    assert_eq!(Status::of(&ok), Status::Ok);
    assert_eq!(Status::Ok.code(), 0);
}

#[test]
fn test_corrupted_padding_is_reported_and_wiped() {
    let mut ctx = Aes192Context::new(&[9u8; 24], IV).unwrap();
    let mut ct = [0u8; 64];
    let n = ctx.ecb_encrypt(b"sixteen byte msg", &mut ct, false).unwrap();

    let mut pt = [0xffu8; 64];
    let err = ctx.ecb_decrypt(&ct[..n], &mut pt, true).unwrap_err();
    assert_eq!(err.status(), Status::InvalidPadding);
    assert!(pt[..n].iter().all(|&b| b == 0));
}

#[test]
fn test_any_context_dispatch_by_key_length() {
    for (len, name) in [(16, "AES-128"), (24, "AES-192"), (32, "AES-256")] {
        let key = vec![0x11u8; len];
        let ctx = AnyAesContext::new(&key, IV).unwrap();
        assert_eq!(ctx.algorithm(), name);
        assert_eq!(ctx.key_len(), len);
    }

    let err = AnyAesContext::new(&[0u8; 20], IV).unwrap_err();
    assert_eq!(err.status(), Status::InvalidKey);
}

#[test]
fn test_trait_object_free_generic_use() {
    fn roundtrip<C: SymmetricCipher>(cipher: &mut C, mode: Mode, reset: impl Fn(&mut C)) -> Vec<u8> {
        let mut ct = [0u8; 64];
        let n = cipher.encrypt(mode, b"generic caller", &mut ct, true).unwrap();
        reset(cipher);
        let mut pt = [0u8; 64];
        let m = cipher.decrypt(mode, &ct[..n], &mut pt, true).unwrap();
        pt[..m].to_vec()
    }

    let mut ctx = Aes128Context::new(KEY, IV).unwrap();
    for mode in [Mode::Ecb, Mode::Cbc] {
        assert_eq!(roundtrip(&mut ctx, mode, |c| c.reset_iv()), b"generic caller");
    }
}

#[test]
fn test_vec_api_and_config() {
    let config = ContextConfig::default().with_capacity(128);
    let mut ctx = AnyAesContext::with_config(KEY, IV, config).unwrap();
    assert_eq!(ctx.capacity(), 128);

    let msg = [0x42u8; 100];
    let ct = ctx.encrypt_vec(Mode::Cbc, &msg, true).unwrap();
    assert_eq!(ct.len(), 112);

    ctx.reset_iv();
    let pt = ctx.decrypt_vec(Mode::Cbc, &ct, true).unwrap();
    assert_eq!(pt, msg);

    let err = ctx.encrypt_vec(Mode::Ecb, &[0u8; 128], true).unwrap_err();
    assert_eq!(err.status(), Status::BufferTooLarge);
}

#[test]
fn test_generated_material_drives_a_context() {
    let mut rng = seeded_rng(7);
    let key = generate_key::<Aes192Algorithm, _>(&mut rng);
    let iv = generate_iv(&mut rng);
    assert_eq!(key.len(), 24);

    let mut ctx = AnyAesContext::new(key.as_ref(), &iv).unwrap();
    assert_eq!(ctx.algorithm(), "AES-192");

    let ct = ctx.encrypt_vec(Mode::Cbc, b"seeded", true).unwrap();
    ctx.reset_iv();
    assert_eq!(ctx.decrypt_vec(Mode::Cbc, &ct, true).unwrap(), b"seeded");
}

#[test]
fn test_engine_is_usable_without_a_context() {
    let cipher = Aes128::with_key(KEY).unwrap();
    let mut iv = *IV;
    let mut buf = [0u8; 64];
    let n = rijndael::algorithms::block::modes::encrypt_into(
        &mut Cbc::new(&cipher, &mut iv),
        b"ExactBlock16BytesX",
        &mut buf,
        true,
        64,
    )
    .unwrap();
    assert_eq!(
        &buf[..n],
        &unhex("60da260fade43c59b6ded85a6049d91347c48d9fd150af6f0d0d92d5d0e4ced5")[..]
    );
}
