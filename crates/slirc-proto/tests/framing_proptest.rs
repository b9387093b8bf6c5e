//! Property-based tests for CRLF frame reassembly.
//!
//! However an input stream is chunked, [`LineBuffer`] must yield exactly the
//! frames and remainder that [`split_frames`] finds in the whole stream.

use proptest::prelude::*;
use slirc_proto::line::split_frames;
use slirc_proto::LineBuffer;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Frame bodies biased towards the interesting bytes: lone CR, lone LF and
/// colons, mixed with printable ASCII.
fn frame_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            4 => prop::char::range('a', 'z').prop_map(|c| c as u8),
            1 => Just(b' '),
            1 => Just(b':'),
            1 => Just(b'\r'),
            1 => Just(b'\n'),
        ],
        0..40,
    )
}

/// A stream of frames joined by CRLF, with an optional unterminated tail.
fn stream_strategy() -> impl Strategy<Value = Vec<u8>> {
    (prop::collection::vec(frame_strategy(), 0..12), frame_strategy()).prop_map(
        |(frames, tail)| {
            let mut out = Vec::new();
            for frame in frames {
                out.extend_from_slice(&frame);
                out.extend_from_slice(b"\r\n");
            }
            out.extend_from_slice(&tail);
            out
        },
    )
}

/// Split points for a stream of length `len`.
fn chunked(stream: Vec<u8>) -> impl Strategy<Value = (Vec<u8>, Vec<usize>)> {
    let len = stream.len();
    (
        Just(stream),
        prop::collection::vec(0..=len, 0..16).prop_map(|mut cuts| {
            cuts.sort_unstable();
            cuts
        }),
    )
}

fn feed(stream: &[u8], cuts: &[usize]) -> (Vec<Vec<u8>>, Vec<u8>) {
    let mut buffer = LineBuffer::new();
    let mut frames = Vec::new();
    let mut start = 0;
    for cut in cuts.iter().copied().chain(std::iter::once(stream.len())) {
        frames.extend(buffer.push(&stream[start..cut]).into_iter().map(|f| f.to_vec()));
        start = cut;
    }
    (frames, buffer.remainder().to_vec())
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn chunking_does_not_change_frames((stream, cuts) in stream_strategy().prop_flat_map(chunked)) {
        let (expected, rest) = split_frames(&stream);
        let expected: Vec<Vec<u8>> = expected.into_iter().map(<[u8]>::to_vec).collect();

        let (frames, remainder) = feed(&stream, &cuts);

        prop_assert_eq!(frames, expected);
        prop_assert_eq!(remainder, rest.to_vec());
    }

    #[test]
    fn frames_never_contain_delimiter(stream in stream_strategy()) {
        let (frames, rest) = split_frames(&stream);
        for frame in frames {
            prop_assert!(!frame.windows(2).any(|w| w == b"\r\n"));
        }
        prop_assert!(!rest.windows(2).any(|w| w == b"\r\n"));
    }

    #[test]
    fn splitting_is_lossless(stream in stream_strategy()) {
        let (frames, rest) = split_frames(&stream);
        let mut rebuilt = Vec::new();
        for frame in frames {
            rebuilt.extend_from_slice(frame);
            rebuilt.extend_from_slice(b"\r\n");
        }
        rebuilt.extend_from_slice(rest);
        prop_assert_eq!(rebuilt, stream);
    }
}

#[test]
fn crlf_split_across_every_position() {
    let stream = b":srv 001 me :hi\r\n:srv 002 me :there\r\n";
    let (expected, _) = split_frames(stream);
    for cut in 0..=stream.len() {
        let (frames, remainder) = feed(stream, &[cut]);
        assert_eq!(frames, expected.iter().map(|f| f.to_vec()).collect::<Vec<_>>());
        assert!(remainder.is_empty(), "cut at {}", cut);
    }
}
