//! Bridge hot-path benchmark suite.
//!
//! Benchmarks the work done per navigation request and per command:
//! - Callback URL parsing and decoding
//! - Navigation classification against the default allow-list
//! - Command script rendering
//!
//! Run with: cargo bench --bench bridge_decode
//! Results saved to: target/criterion/

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use url::Url;
use ytplayer_bridge::NavigationClassifier;
use ytplayer_bridge::protocol::{CallbackEvent, PlaybackQuality, PlayerCommand, VideoCue};

// ============================================================================
// Benchmark Inputs
// ============================================================================

const CALLBACK_URLS: &[&str] = &[
    "ytplayer://onReady",
    "ytplayer://onStateChange?data=1",
    "ytplayer://onPlayTime?data=123.456",
    "ytplayer://onError?data=150",
];

const NAVIGATION_URLS: &[&str] = &[
    "https://www.example.com/page",
    "ytplayer://onStateChange?data=2",
    "https://www.youtube.com/embed/M7lc1UVf-VE?enablejsapi=1",
    "https://www.youtube.com/watch?v=M7lc1UVf-VE",
    "about:blank",
];

fn parse_all(urls: &[&str]) -> Vec<Url> {
    urls.iter()
        .map(|s| Url::parse(s).expect("benchmark url"))
        .collect()
}

// ============================================================================
// Benchmark: Callback Decoding
// ============================================================================

fn bench_callback_decode(c: &mut Criterion) {
    let urls = parse_all(CALLBACK_URLS);
    let mut group = c.benchmark_group("callback_decode");

    for url in &urls {
        group.bench_with_input(BenchmarkId::from_parameter(url.as_str()), url, |b, url| {
            b.iter(|| CallbackEvent::parse(black_box(url)).and_then(|event| event.decode()));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Navigation Classification
// ============================================================================

fn bench_classify(c: &mut Criterion) {
    let classifier = NavigationClassifier::with_default_patterns().expect("default patterns");
    let urls = parse_all(NAVIGATION_URLS);
    let mut group = c.benchmark_group("classify");

    for url in &urls {
        group.bench_with_input(BenchmarkId::from_parameter(url.as_str()), url, |b, url| {
            b.iter(|| classifier.classify(black_box(url), Some("www.example.com")));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Command Rendering
// ============================================================================

fn bench_command_render(c: &mut Criterion) {
    let commands = [
        ("play", PlayerCommand::PlayVideo),
        (
            "seek",
            PlayerCommand::SeekTo {
                seconds: 93.25,
                allow_seek_ahead: true,
            },
        ),
        (
            "load_by_id_range",
            PlayerCommand::LoadVideoById(
                VideoCue::new("M7lc1UVf-VE", 10.0, PlaybackQuality::Hd720).with_end(20.0),
            ),
        ),
    ];

    let mut group = c.benchmark_group("command_render");
    for (name, command) in &commands {
        group.bench_with_input(BenchmarkId::from_parameter(name), command, |b, command| {
            b.iter(|| black_box(command).to_script());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_callback_decode,
    bench_classify,
    bench_command_render
);
criterion_main!(benches);
