//! Benchmarks for frame splitting and message parsing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slirc_proto::line::split_frames;
use slirc_proto::{LineBuffer, Message, UnknownCodePolicy};

/// Keep-alive probe
const SIMPLE_MESSAGE: &str = "PING :irc.example.com";

/// Message with user prefix
const PREFIX_MESSAGE: &str = ":nick!user@host PRIVMSG #channel :Hello, world!";

/// Numeric response
const NUMERIC_RESPONSE: &str =
    ":irc.server.net 001 nickname :Welcome to the IRC Network nickname!user@host";

/// Numeric outside the registry
const UNKNOWN_NUMERIC: &str = ":irc.server.net 742 nickname #chan :odd reply";

fn burst(lines: usize) -> Vec<u8> {
    let mut buf = Vec::new();
    for i in 0..lines {
        buf.extend_from_slice(format!(":srv 372 me :- MOTD line {}\r\n", i).as_bytes());
    }
    buf
}

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Message Parsing");

    for (name, raw) in [
        ("simple_ping", SIMPLE_MESSAGE),
        ("with_prefix", PREFIX_MESSAGE),
        ("numeric_response", NUMERIC_RESPONSE),
        ("unknown_numeric", UNKNOWN_NUMERIC),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let msg = Message::parse(black_box(raw), UnknownCodePolicy::Relaxed).unwrap();
                black_box(msg)
            })
        });
    }

    group.finish();
}

fn benchmark_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("Message Serialization");

    let with_prefix: Message = PREFIX_MESSAGE.parse().unwrap();
    let numeric: Message = NUMERIC_RESPONSE.parse().unwrap();

    group.bench_function("with_prefix", |b| {
        b.iter(|| {
            let s = black_box(&with_prefix).to_string();
            black_box(s)
        })
    });

    group.bench_function("numeric_response", |b| {
        b.iter(|| {
            let s = black_box(&numeric).to_string();
            black_box(s)
        })
    });

    group.finish();
}

fn benchmark_framing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Framing");

    for lines in [1usize, 16, 256] {
        let input = burst(lines);

        group.bench_with_input(BenchmarkId::new("split_frames", lines), &input, |b, input| {
            b.iter(|| {
                let (frames, rest) = split_frames(black_box(input));
                black_box((frames.len(), rest.len()))
            })
        });

        group.bench_with_input(
            BenchmarkId::new("line_buffer_512b_reads", lines),
            &input,
            |b, input| {
                b.iter(|| {
                    let mut buffer = LineBuffer::with_capacity(4096);
                    let mut count = 0;
                    for chunk in input.chunks(512) {
                        count += buffer.push(black_box(chunk)).len();
                    }
                    black_box(count)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parsing,
    benchmark_serialization,
    benchmark_framing
);
criterion_main!(benches);
