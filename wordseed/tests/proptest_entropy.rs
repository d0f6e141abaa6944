use proptest::prelude::*;
use sha2::{Digest, Sha256};

use wordseed::entropy::indices_from_entropy;
use wordseed::mnemonic::map_to_words;
use wordseed::{BitLength, Language};

/// Entropy of one of the five valid lengths.
fn valid_entropy() -> impl Strategy<Value = Vec<u8>> {
    prop::sample::select(vec![16usize, 20, 24, 28, 32])
        .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

/// Reassemble the combined bitstream from 11-bit groups.
fn unpack(indices: &[u16]) -> Vec<bool> {
    indices
        .iter()
        .flat_map(|&index| (0..11).rev().map(move |i| (index >> i) & 1 == 1))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn word_count_matches_class(entropy in valid_entropy()) {
        let class = BitLength::from_entropy_len(entropy.len()).unwrap();
        let indices = indices_from_entropy(&entropy).unwrap();
        prop_assert_eq!(indices.len(), class.word_count());
        prop_assert!(indices.iter().all(|&i| i < 2048));
    }

    #[test]
    fn groups_carry_entropy_then_checksum(entropy in valid_entropy()) {
        let class = BitLength::from_entropy_len(entropy.len()).unwrap();
        let indices = indices_from_entropy(&entropy).unwrap();
        let bits = unpack(&indices);
        prop_assert_eq!(bits.len(), class.total_bits());

        let mut recovered = vec![0u8; entropy.len()];
        for (i, bit) in bits[..class.bits()].iter().enumerate() {
            if *bit {
                recovered[i / 8] |= 1 << (7 - (i % 8));
            }
        }
        prop_assert_eq!(&recovered, &entropy);

        let digest = Sha256::digest(&entropy);
        for (i, bit) in bits[class.bits()..].iter().enumerate() {
            prop_assert_eq!(*bit, (digest[i / 8] >> (7 - (i % 8))) & 1 == 1);
        }
    }

    #[test]
    fn same_entropy_same_phrase(entropy in valid_entropy()) {
        let first = indices_from_entropy(&entropy).unwrap();
        let second = indices_from_entropy(&entropy).unwrap();
        prop_assert_eq!(&first, &second);

        let a = map_to_words(&first, &Language::English).unwrap().to_string();
        let b = map_to_words(&second, &Language::English).unwrap().to_string();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn invalid_lengths_rejected(len in 0usize..64) {
        prop_assume!(![16, 20, 24, 28, 32].contains(&len));
        let entropy = vec![0u8; len];
        prop_assert!(indices_from_entropy(&entropy).is_err());
    }
}
