#![no_main]
use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, SeedableRng};
use utf8b::{
    DecodeRequest, DecodeStop, Utf8bDecoder, decode_append, decode_to_vec, encode_append,
    encode_to_vec,
};

#[derive(Debug, Arbitrary)]
struct CodecInput {
    /// Seeds chunk sizes and output capacities.
    split_seed: u64,
    /// Arbitrary `u32`s to push through the encoder.
    scalars: Vec<u32>,
    bytes: Vec<u8>,
}

fn codec(input: &CodecInput) {
    let bytes = &input.bytes;
    let mut rng = SmallRng::seed_from_u64(input.split_seed);

    // Lossless: whole-input decode re-encodes to the same bytes.
    let whole = decode_to_vec(bytes);
    assert_eq!(&encode_to_vec(&whole).expect("decoded scalars encode"), bytes);

    // Chunk-invariant: random splits through the streaming decoder.
    let mut decoder = Utf8bDecoder::new();
    let mut streamed = Vec::with_capacity(whole.len());
    let mut rest = bytes.as_slice();
    while !rest.is_empty() {
        let size = rng.random_range(1..=rest.len());
        decoder.feed(&rest[..size], &mut streamed);
        assert!(decoder.pending().len() < 4);
        rest = &rest[size..];
    }
    decoder.finish(&mut streamed);
    assert_eq!(streamed, whole);

    // Capacity-safe: an undersized output range is never overrun.
    let capacity = rng.random_range(0..=whole.len());
    let mut out = vec![u32::MAX; capacity + 1];
    let progress = decode_append(
        bytes,
        &DecodeRequest::new(0..bytes.len(), true),
        &mut out,
        0..capacity,
    )
    .expect("ranges fit");
    assert_eq!(out[capacity], u32::MAX);
    assert_eq!(&out[..progress.produced], &whole[..progress.produced]);
    if progress.produced < whole.len() {
        assert_eq!(progress.stop, DecodeStop::OutputFull);
    }

    // The encoder either round-trips plain text or names why it stopped.
    let capacity = rng.random_range(0..=input.scalars.len() * 4);
    let mut encoded = vec![0u8; capacity];
    match encode_append(&input.scalars, 0..input.scalars.len(), &mut encoded, 0) {
        Ok(end) => {
            if input.scalars.iter().all(|&s| utf8b::scalar::to_char(s).is_some()) {
                assert_eq!(decode_to_vec(&encoded[..end]), input.scalars);
            }
        }
        Err(utf8b::Utf8bError::InvalidScalar { value, .. }) => {
            assert!(!utf8b::scalar::is_encodable(value));
        }
        Err(utf8b::Utf8bError::InsufficientCapacity { position, .. }) => {
            assert!(position <= capacity);
        }
        Err(err) => panic!("unexpected error: {err}"),
    }
}

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = CodecInput::arbitrary(&mut Unstructured::new(data)) {
        codec(&input);
    }
});
