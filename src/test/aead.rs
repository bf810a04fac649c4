//! Round-trip and tamper-detection tests shared across every unmasked AEAD
//! in this crate (spec.md §8: "for every AEAD... decrypt(encrypt(...)) =
//! (M, success)" and "a single bit flipped anywhere... must cause tag
//! verification to fail"), plus the boundary behaviors §8 calls out by
//! name: empty AD/plaintext, single-byte partial blocks, and exact
//! rate-boundary inputs.

macro_rules! aead_suite {
    ($module:ident, $key:expr, $nonce:expr, $rate:expr) => {
        mod $module {
            use crate::aead::$module::{decrypt, encrypt, TAG_SIZE};
            use rand::RngCore;

            fn random_bytes(n: usize) -> Vec<u8> {
                let mut buf = vec![0u8; n];
                rand::thread_rng().fill_bytes(&mut buf);
                buf
            }

            #[test]
            fn round_trips_with_random_key_nonce_ad_and_message() {
                let key = $key;
                let nonce = $nonce;
                let ad = random_bytes(32);
                let message = random_bytes(1024);

                let sealed = encrypt(&key, &nonce, &ad, &message);
                let opened = decrypt(&key, &nonce, &ad, &sealed).expect("tag must verify");
                assert_eq!(opened, message);
            }

            #[test]
            fn empty_ad_and_empty_plaintext_produce_a_well_defined_tag() {
                let key = $key;
                let nonce = $nonce;
                let sealed = encrypt(&key, &nonce, &[], &[]);
                assert_eq!(sealed.len(), TAG_SIZE);
                let opened = decrypt(&key, &nonce, &[], &sealed).expect("tag must verify");
                assert!(opened.is_empty());
            }

            #[test]
            fn single_byte_ad_and_plaintext_exercise_the_partial_block_path() {
                let key = $key;
                let nonce = $nonce;
                let ad = [0x7a];
                let message = [0x42];
                let sealed = encrypt(&key, &nonce, &ad, &message);
                let opened = decrypt(&key, &nonce, &ad, &sealed).expect("tag must verify");
                assert_eq!(opened, message);
            }

            #[test]
            fn exact_rate_boundary_input_exercises_the_no_partial_block_path() {
                let key = $key;
                let nonce = $nonce;
                let ad = random_bytes($rate);
                let message = random_bytes($rate * 3);
                let sealed = encrypt(&key, &nonce, &ad, &message);
                let opened = decrypt(&key, &nonce, &ad, &sealed).expect("tag must verify");
                assert_eq!(opened, message);
            }

            #[test]
            fn short_ciphertext_is_rejected_instead_of_panicking() {
                let key = $key;
                let nonce = $nonce;
                for len in 0..TAG_SIZE {
                    let too_short = vec![0u8; len];
                    assert_eq!(
                        decrypt(&key, &nonce, &[], &too_short),
                        Err(crate::error::AeadError::ShortCiphertext)
                    );
                }
            }

            #[test]
            fn tampering_any_single_byte_of_the_ciphertext_fails_verification() {
                let key = $key;
                let nonce = $nonce;
                let ad = random_bytes(16);
                let message = random_bytes($rate * 2 + 3);
                let sealed = encrypt(&key, &nonce, &ad, &message);

                for i in 0..sealed.len() {
                    let mut tampered = sealed.clone();
                    tampered[i] ^= 1;
                    assert!(
                        decrypt(&key, &nonce, &ad, &tampered).is_err(),
                        "byte {i} of ciphertext/tag went unauthenticated"
                    );
                }
            }

            #[test]
            fn tampering_the_associated_data_fails_verification() {
                let key = $key;
                let nonce = $nonce;
                let ad = random_bytes(16);
                let message = random_bytes(8);
                let sealed = encrypt(&key, &nonce, &ad, &message);

                let mut tampered_ad = ad.clone();
                tampered_ad[0] ^= 1;
                assert!(decrypt(&key, &nonce, &tampered_ad, &sealed).is_err());
            }

            #[test]
            fn tampering_the_nonce_fails_verification() {
                let key = $key;
                let mut nonce = $nonce;
                let ad = random_bytes(16);
                let message = random_bytes(8);
                let sealed = encrypt(&key, &nonce, &ad, &message);

                nonce[0] ^= 1;
                assert!(decrypt(&key, &nonce, &ad, &sealed).is_err());
            }

            #[test]
            fn tampering_the_key_fails_verification() {
                let mut key = $key;
                let nonce = $nonce;
                let ad = random_bytes(16);
                let message = random_bytes(8);
                let sealed = encrypt(&key, &nonce, &ad, &message);

                key[0] ^= 1;
                assert!(decrypt(&key, &nonce, &ad, &sealed).is_err());
            }
        }
    };
}

aead_suite!(ascon, [0x11u8; 16], [0x22u8; 16], 8);
aead_suite!(xoodoo_duplex, [0x33u8; 16], [0x44u8; 16], 16);
aead_suite!(tinyjambu, [0x55u8; 16], [0x66u8; 12], 4);
aead_suite!(spix, [0x77u8; 16], [0x88u8; 16], 8);
aead_suite!(gimli, [0x99u8; 16], [0xaau8; 16], 16);

mod grain128 {
    use crate::aead::grain128::{decrypt, encrypt, KEY_SIZE, NONCE_SIZE, TAG_SIZE};
    use crate::error::AeadError;
    use rand::RngCore;

    fn random_bytes(n: usize) -> Vec<u8> {
        let mut buf = vec![0u8; n];
        rand::thread_rng().fill_bytes(&mut buf);
        buf
    }

    #[test]
    fn round_trips_with_random_key_nonce_ad_and_message() {
        let key = [0xab; KEY_SIZE];
        let nonce = [0xcd; NONCE_SIZE];
        let ad = random_bytes(32);
        let message = random_bytes(1024);

        let sealed = encrypt(&key, &nonce, &ad, &message).expect("encrypt must succeed");
        let opened = decrypt(&key, &nonce, &ad, &sealed).expect("tag must verify");
        assert_eq!(opened, message);
    }

    #[test]
    fn empty_ad_and_empty_plaintext_produce_a_well_defined_tag() {
        let key = [0u8; KEY_SIZE];
        let nonce = [0u8; NONCE_SIZE];
        let sealed = encrypt(&key, &nonce, &[], &[]).unwrap();
        assert_eq!(sealed.len(), TAG_SIZE);
        let opened = decrypt(&key, &nonce, &[], &sealed).unwrap();
        assert!(opened.is_empty());
    }

    /// Exercises every branch of the DER length encoding (spec.md §8):
    /// the 1/2/3/4-byte forms and the boundaries immediately before and
    /// after each length-of-length switch.
    #[test]
    fn der_length_prefix_boundaries_all_round_trip() {
        let key = [0x01; KEY_SIZE];
        let nonce = [0x02; NONCE_SIZE];
        for &len in &[0usize, 1, 127, 128, 255, 256, 65535, 65536] {
            let ad = vec![0x5a; len];
            let message = b"boundary".to_vec();
            let sealed = encrypt(&key, &nonce, &ad, &message).unwrap();
            let opened = decrypt(&key, &nonce, &ad, &sealed)
                .unwrap_or_else(|_| panic!("ad length {len} failed to verify"));
            assert_eq!(opened, message);
        }
    }

    #[test]
    fn short_ciphertext_is_rejected_before_running_the_cipher() {
        let key = [0u8; KEY_SIZE];
        let nonce = [0u8; NONCE_SIZE];
        let too_short = vec![0u8; TAG_SIZE - 1];
        assert_eq!(
            decrypt(&key, &nonce, &[], &too_short),
            Err(AeadError::ShortCiphertext)
        );
    }

    #[test]
    fn tampering_any_single_byte_of_the_ciphertext_fails_verification() {
        let key = [0x11; KEY_SIZE];
        let nonce = [0x22; NONCE_SIZE];
        let ad = random_bytes(16);
        let message = random_bytes(19);
        let sealed = encrypt(&key, &nonce, &ad, &message).unwrap();

        for i in 0..sealed.len() {
            let mut tampered = sealed.clone();
            tampered[i] ^= 1;
            assert!(decrypt(&key, &nonce, &ad, &tampered).is_err());
        }
    }

    #[test]
    fn tampering_the_nonce_or_key_fails_verification() {
        let key = [0x33; KEY_SIZE];
        let nonce = [0x44; NONCE_SIZE];
        let ad = random_bytes(16);
        let message = random_bytes(8);
        let sealed = encrypt(&key, &nonce, &ad, &message).unwrap();

        let mut tampered_nonce = nonce;
        tampered_nonce[0] ^= 1;
        assert!(decrypt(&key, &tampered_nonce, &ad, &sealed).is_err());

        let mut tampered_key = key;
        tampered_key[0] ^= 1;
        assert!(decrypt(&tampered_key, &nonce, &ad, &sealed).is_err());
    }
}
