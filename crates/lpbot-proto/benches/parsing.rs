//! Benchmarks for line tokenizing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lpbot_proto::PreTrigger;

const BOT: &str = "lpbot";

/// Server keepalive
const SIMPLE_MESSAGE: &str = "PING :irc.example.com";

/// Channel message with prefix
const PREFIX_MESSAGE: &str = ":nick!user@host PRIVMSG #channel :Hello, world!";

/// Private message to the bot
const PRIVATE_MESSAGE: &str = ":nick!user@host PRIVMSG lpbot :.help seen";

/// Message with IRCv3 tags
const TAGGED_MESSAGE: &str = "@time=2023-01-01T00:00:00.000Z;msgid=abc123;+example/tag=value :nick!user@host PRIVMSG #channel :Hello with tags!";

/// CTCP action
const ACTION_MESSAGE: &str = ":nick!user@host PRIVMSG #channel :\x01ACTION waves at everyone\x01";

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("PreTrigger Parsing");

    for (name, line) in [
        ("simple_ping", SIMPLE_MESSAGE),
        ("with_prefix", PREFIX_MESSAGE),
        ("private", PRIVATE_MESSAGE),
        ("with_tags", TAGGED_MESSAGE),
        ("ctcp_action", ACTION_MESSAGE),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let msg = PreTrigger::parse(black_box(BOT), black_box(line)).unwrap();
                black_box(msg)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parsing);
criterion_main!(benches);
