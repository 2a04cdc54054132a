use proptest::collection::vec;
use proptest::prelude::*;
use undertone::stego::{bytes_to_message, embed_message, extract_message, message_to_bytes};

/// A NUL-free payload and a 16-bit carrier long enough to hold it.
fn payload_and_carrier() -> impl Strategy<Value = (Vec<u8>, Vec<i16>)> {
    vec(1u8..=255, 0..48).prop_flat_map(|payload| {
        let needed = (payload.len() + 1) * 8;
        let samples = vec(any::<i16>(), needed..needed + 64);
        (Just(payload), samples)
    })
}

proptest! {
    #[test]
    fn embedded_messages_round_trip((payload, samples) in payload_and_carrier()) {
        let encoded = embed_message(&samples, &payload).unwrap();
        let extracted = extract_message(&encoded);

        prop_assert!(extracted.terminated);
        prop_assert_eq!(extracted.payload, payload);
    }

    #[test]
    fn touched_samples_move_by_at_most_one((payload, samples) in payload_and_carrier()) {
        let encoded = embed_message(&samples, &payload).unwrap();

        prop_assert_eq!(encoded.len(), samples.len());
        for (&enc, &orig) in encoded.iter().zip(&samples) {
            prop_assert!((i32::from(enc) - i32::from(orig)).abs() <= 1);
        }
    }

    #[test]
    fn suffix_beyond_embedded_region_is_untouched((payload, samples) in payload_and_carrier()) {
        let encoded = embed_message(&samples, &payload).unwrap();

        let embedded = (payload.len() + 1) * 8;
        prop_assert_eq!(&encoded[embedded..], &samples[embedded..]);
    }

    #[test]
    fn higher_bits_never_change((payload, samples) in payload_and_carrier()) {
        let encoded = embed_message(&samples, &payload).unwrap();

        for (&enc, &orig) in encoded.iter().zip(&samples) {
            prop_assert_eq!(enc | 1, orig | 1);
        }
    }

    #[test]
    fn too_short_carriers_are_rejected(
        payload in vec(1u8..=255, 0..48),
        deficit in 1usize..8,
    ) {
        let needed = (payload.len() + 1) * 8;
        let samples = vec![0i16; needed - deficit];

        prop_assert!(embed_message(&samples, &payload).is_err());
    }

    #[test]
    fn message_text_survives_byte_conversion(codes in vec(1u8..=255, 0..64)) {
        let text = bytes_to_message(&codes);
        prop_assert_eq!(message_to_bytes(&text).unwrap(), codes);
    }
}
