use alloc::{vec, vec::Vec};

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use super::{
    arbitrary::{LegalScalars, MixedBytes},
    test_count,
};
use crate::{
    DecodeRequest, DecodeStop, decode_append, decode_to_vec, decoded_length, encode_to_vec,
    encoded_length,
};

/// Property: decoding any bytes as the whole input and re-encoding the
/// scalars reproduces the bytes exactly.
#[test]
fn bytes_round_trip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: MixedBytes) -> bool {
        let bytes = bytes.0;
        let scalars = decode_to_vec(&bytes);
        let sized = decoded_length(&bytes, 0..bytes.len()) == Ok(scalars.len());
        let sized_back = encoded_length(&scalars, 0..scalars.len()) == Ok(bytes.len());
        sized && sized_back && encode_to_vec(&scalars).as_deref() == Ok(bytes.as_slice())
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(MixedBytes) -> bool);
}

/// Property: encodable scalars survive an encode/decode round trip.
#[test]
fn scalars_round_trip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(scalars: LegalScalars) -> bool {
        let scalars = scalars.0;
        let Ok(bytes) = encode_to_vec(&scalars) else {
            return false;
        };
        let mut out = vec![0u32; scalars.len()];
        let Ok(progress) = decode_append(
            &bytes,
            &DecodeRequest::new(0..bytes.len(), true),
            &mut out,
            0..scalars.len(),
        ) else {
            return false;
        };
        progress.consumed == bytes.len()
            && progress.stop == DecodeStop::InputExhausted
            && out == scalars
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(LegalScalars) -> bool);
}

/// Property: a non-final decode never consumes past its input, and whatever
/// it leaves behind is a single incomplete sequence of at most three bytes.
#[test]
fn bounded_consumption_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: MixedBytes) -> bool {
        let bytes = bytes.0;
        let mut out = vec![0u32; bytes.len()];
        let Ok(progress) = decode_append(
            &bytes,
            &DecodeRequest::new(0..bytes.len(), false),
            &mut out,
            0..bytes.len(),
        ) else {
            return false;
        };
        let left = bytes.len() - progress.consumed;
        match progress.stop {
            DecodeStop::InputExhausted => left == 0,
            DecodeStop::IncompleteInput => (1..=3).contains(&left),
            DecodeStop::OutputFull => false,
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(MixedBytes) -> bool);
}

#[quickcheck]
fn ascii_is_identity(bytes: Vec<u8>) -> bool {
    let ascii: Vec<u8> = bytes.into_iter().map(|b| b & 0x7F).collect();
    let scalars = decode_to_vec(&ascii);
    scalars.iter().copied().eq(ascii.iter().map(|&b| u32::from(b)))
        && encode_to_vec(&scalars).as_deref() == Ok(ascii.as_slice())
}
