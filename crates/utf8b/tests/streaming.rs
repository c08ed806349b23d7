#![allow(missing_docs)]
#![cfg(feature = "streaming")]

use utf8b::{Utf8bDecoder, decode_to_vec, encode_to_vec};

/// Reads `input` in fixed-size blocks, the way a caller draining a pipe would.
fn decode_blocks(input: &[u8], block: usize) -> Vec<u32> {
    let mut decoder = Utf8bDecoder::new();
    let mut scalars = Vec::new();
    for chunk in input.chunks(block) {
        decoder.feed(chunk, &mut scalars);
    }
    decoder.finish(&mut scalars);
    scalars
}

#[test]
fn block_reads_match_whole_decoding() {
    let input = "línea uno\nzweite Zeile ✓\n第三行 🚀\n"
        .as_bytes()
        .iter()
        .copied()
        .chain([0xFF, 0xC3, b'\n', 0xF0, 0x9F])
        .collect::<Vec<u8>>();
    let whole = decode_to_vec(&input);
    for block in 1..=8 {
        let scalars = decode_blocks(&input, block);
        assert_eq!(scalars, whole, "block size {block}");
        assert_eq!(encode_to_vec(&scalars).unwrap(), input);
    }
}

#[test]
fn finish_without_feed() {
    let mut scalars = Vec::new();
    assert_eq!(Utf8bDecoder::new().finish(&mut scalars), 0);
    assert!(scalars.is_empty());
}

#[test]
fn trailing_partial_sequence_is_escaped_on_finish() {
    let mut decoder = Utf8bDecoder::default();
    let mut scalars = Vec::new();
    assert_eq!(decoder.feed(b"ok\xF0\x9F\x98", &mut scalars), 2);
    assert_eq!(decoder.finish(&mut scalars), 3);
    assert_eq!(scalars, [0x6F, 0x6B, 0xDCF0, 0xDC9F, 0xDC98]);
}
