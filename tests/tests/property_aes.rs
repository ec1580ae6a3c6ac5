//! Property-based tests for the AES engine and its modes

use proptest::prelude::*;
use rijndael_algorithms::{Aes128, Aes192, Aes256, BlockMode, Cbc, Ecb};
use rijndael_api::{Mode, Status};
use rijndael_symmetric::{AnyAesContext, ContextConfig};

/// Plaintext lengths that fit the default 64-byte capacity once padded
fn short_plaintext() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..=63)
}

/// Whole-block data, 1 to 16 blocks
fn block_aligned_data() -> impl Strategy<Value = Vec<u8>> {
    (1usize..=16).prop_flat_map(|blocks| prop::collection::vec(any::<u8>(), blocks * 16))
}

/// A root key of any supported length
fn any_key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 16),
        prop::collection::vec(any::<u8>(), 24),
        prop::collection::vec(any::<u8>(), 32),
    ]
}

fn any_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Ecb), Just(Mode::Cbc)]
}

fn encrypt(ctx: &mut AnyAesContext, mode: Mode, input: &[u8], out: &mut [u8]) -> usize {
    match mode {
        Mode::Ecb => ctx.ecb_encrypt(input, out, true),
        Mode::Cbc => ctx.cbc_encrypt(input, out, true),
    }
    .unwrap()
}

fn decrypt(ctx: &mut AnyAesContext, mode: Mode, input: &[u8], out: &mut [u8]) -> usize {
    match mode {
        Mode::Ecb => ctx.ecb_decrypt(input, out, true),
        Mode::Cbc => ctx.cbc_decrypt(input, out, true),
    }
    .unwrap()
}

proptest! {
    #[test]
    fn padded_roundtrip_all_variants(
        key in any_key(),
        iv in any::<[u8; 16]>(),
        mode in any_mode(),
        data in short_plaintext()
    ) {
        let mut ctx = AnyAesContext::new(&key, &iv).unwrap();

        let mut ct = [0u8; 64];
        let n = encrypt(&mut ctx, mode, &data, &mut ct);
        prop_assert_eq!(n, (data.len() / 16 + 1) * 16);
        prop_assert_eq!(ctx.encrypted_blocks(), n / 16);

        ctx.reset_iv();
        let mut pt = [0u8; 64];
        let m = decrypt(&mut ctx, mode, &ct[..n], &mut pt);
        prop_assert_eq!(&pt[..m], &data[..]);
        prop_assert_eq!(ctx.decrypted_blocks(), n / 16);
    }

    #[test]
    fn ecb_blocks_are_independent(
        key in any::<[u8; 16]>(),
        data in block_aligned_data()
    ) {
        let cipher = Aes128::with_key(&key).unwrap();

        let mut whole = data.clone();
        Ecb::new(&cipher).encrypt_blocks(&mut whole).unwrap();

        for (i, chunk) in data.chunks(16).enumerate() {
            let mut single = chunk.to_vec();
            Ecb::new(&cipher).encrypt_blocks(&mut single).unwrap();
            prop_assert_eq!(&whole[i * 16..(i + 1) * 16], &single[..]);
        }
    }

    #[test]
    fn cbc_change_propagates_forward_only(
        key in any::<[u8; 24]>(),
        iv in any::<[u8; 16]>(),
        (data, changed_block) in block_aligned_data().prop_flat_map(|d| {
            let blocks = d.len() / 16;
            (Just(d), 0..blocks)
        }),
        offset in 0usize..16,
        flip in any::<u8>().prop_filter("non-zero", |b| *b != 0)
    ) {
        let cipher = Aes192::with_key(&key).unwrap();
        let blocks = data.len() / 16;

        let mut original = data.clone();
        let mut chain = iv;
        Cbc::new(&cipher, &mut chain).encrypt_blocks(&mut original).unwrap();

        let mut changed = data.clone();
        changed[changed_block * 16 + offset] ^= flip;
        let mut chain = iv;
        Cbc::new(&cipher, &mut chain).encrypt_blocks(&mut changed).unwrap();

        for i in 0..changed_block {
            prop_assert_eq!(&original[i * 16..(i + 1) * 16], &changed[i * 16..(i + 1) * 16]);
        }
        for i in changed_block..blocks {
            prop_assert_ne!(&original[i * 16..(i + 1) * 16], &changed[i * 16..(i + 1) * 16]);
        }
    }

    #[test]
    fn cbc_unpadded_roundtrip_aes256(
        key in any::<[u8; 32]>(),
        iv in any::<[u8; 16]>(),
        data in block_aligned_data()
    ) {
        let cipher = Aes256::with_key(&key).unwrap();

        let mut buf = data.clone();
        let mut chain = iv;
        Cbc::new(&cipher, &mut chain).encrypt_blocks(&mut buf).unwrap();
        let last_ct = chain;

        let mut chain = iv;
        Cbc::new(&cipher, &mut chain).decrypt_blocks(&mut buf).unwrap();
        prop_assert_eq!(buf, data);
        prop_assert_eq!(chain, last_ct);
    }

    #[test]
    fn aligned_plaintext_gains_full_padding_block(
        key in any_key(),
        iv in any::<[u8; 16]>(),
        mode in any_mode(),
        blocks in 1usize..=3
    ) {
        let data = vec![0x5au8; blocks * 16];
        let mut ctx = AnyAesContext::new(&key, &iv).unwrap();

        let mut ct = [0u8; 64];
        let n = encrypt(&mut ctx, mode, &data, &mut ct);
        prop_assert_eq!(n, data.len() + 16);

        // decrypting without padding exposes the sixteen 0x10 bytes
        ctx.reset_iv();
        let mut raw = [0u8; 64];
        let m = match mode {
            Mode::Ecb => ctx.ecb_decrypt(&ct[..n], &mut raw, false),
            Mode::Cbc => ctx.cbc_decrypt(&ct[..n], &mut raw, false),
        }
        .unwrap();
        prop_assert_eq!(m, n);
        prop_assert!(raw[data.len()..n].iter().all(|&b| b == 16));
    }

    #[test]
    fn oversized_input_is_rejected_before_any_work(
        key in any_key(),
        iv in any::<[u8; 16]>(),
        mode in any_mode(),
        len in 64usize..=200
    ) {
        let data = vec![0u8; len];
        let mut ctx = AnyAesContext::with_config(&key, &iv, ContextConfig::default()).unwrap();

        let mut out = vec![0u8; 256];
        let result = match mode {
            Mode::Ecb => ctx.ecb_encrypt(&data, &mut out, true),
            Mode::Cbc => ctx.cbc_encrypt(&data, &mut out, true),
        };
        prop_assert_eq!(Status::of(&result), Status::BufferTooLarge);
        prop_assert!(out.iter().all(|&b| b == 0));
        prop_assert_eq!(ctx.iv(), &iv);
        prop_assert_eq!(ctx.encrypted_blocks(), 0);
    }

    #[test]
    fn different_keys_produce_different_ciphertexts(
        key1 in any::<[u8; 16]>(),
        key2 in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        data in short_plaintext()
    ) {
        prop_assume!(key1 != key2);

        let mut a = AnyAesContext::new(&key1, &iv).unwrap();
        let mut b = AnyAesContext::new(&key2, &iv).unwrap();
        let (mut ct1, mut ct2) = ([0u8; 64], [0u8; 64]);
        let n = encrypt(&mut a, Mode::Cbc, &data, &mut ct1);
        encrypt(&mut b, Mode::Cbc, &data, &mut ct2);

        prop_assert_ne!(&ct1[..n], &ct2[..n]);
    }
}
