//! Basic bridge round trip against a simulated web view.
//!
//! Demonstrates:
//! - Wiring a Player to a channel executor and a page loader
//! - Loading the embed document with an origin
//! - Feeding navigation requests through decide_policy
//! - Fire-and-forget commands and concurrent queries
//!
//! Usage:
//!   cargo run --example basic_bridge
//!   cargo run --example basic_bridge -- --debug

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;
use url::Url;
use ytplayer_bridge::transport::{ScriptHost, channel};
use ytplayer_bridge::{ChannelDelegate, Player, PlayerVars};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    let debug = std::env::args().any(|arg| arg == "--debug");
    init_logging(debug);

    if let Err(e) = run().await {
        eprintln!("\n[ERROR] {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    println!("=== Basic Bridge ===\n");

    // ========================================================================
    // Wire the player
    // ========================================================================

    let (executor, host) = channel();
    let (delegate, mut events) = ChannelDelegate::new();

    let player = Player::builder()
        .executor(executor)
        .page_loader(|html: &str, base_url: &Url| -> ytplayer_bridge::Result<()> {
            println!("[Load] {} bytes, base URL {base_url}", html.len());
            Ok(())
        })
        .delegate(Arc::new(delegate))
        .query_timeout(Duration::from_secs(2))
        .build()?;

    let web_view = tokio::spawn(simulate_web_view(host));

    // ========================================================================
    // Load and receive callbacks
    // ========================================================================

    let mut vars = PlayerVars::new();
    vars.insert("origin".into(), json!("https://www.example.com"));
    vars.insert("playsinline".into(), json!(1));
    player.load_video("M7lc1UVf-VE", vars)?;

    for raw in [
        "https://www.youtube.com/embed/M7lc1UVf-VE?enablejsapi=1",
        "ytplayer://onYouTubeIframeAPIReady",
        "ytplayer://onReady",
        "ytplayer://onStateChange?data=1",
        "ytplayer://onPlayTime?data=4.2",
        "https://www.youtube.com/watch?v=M7lc1UVf-VE",
    ] {
        let policy = player.decide_policy(&Url::parse(raw)?);
        println!("[Navigate] {raw} -> {policy:?}");
    }

    while let Ok(event) = events.try_recv() {
        println!("[Event] {event:?}");
    }

    // ========================================================================
    // Commands and queries
    // ========================================================================

    player.set_volume(40);
    player.seek_to(30.0, true);

    let (duration, state, levels) = futures_util::future::join3(
        player.duration(),
        player.player_state(),
        player.available_quality_levels(),
    )
    .await;
    println!("\n[Query] duration = {duration}s, state = {state}, qualities = {levels:?}");

    drop(player);
    web_view.await?;

    println!("\n=== Done ===");
    Ok(())
}

// ============================================================================
// Simulated web view
// ============================================================================

/// Answers queries with canned values until the player goes away.
async fn simulate_web_view(mut host: ScriptHost) {
    while let Some(request) = host.recv().await {
        if !request.expects_result {
            println!("[WebView] command {}", request.script);
            continue;
        }

        let answer = canned_answer(&request.script);
        host.complete(request.id, Ok(answer));
    }
}

fn canned_answer(script: &str) -> Value {
    match script {
        "player.getDuration();" => json!(213.0),
        "player.getPlayerState();" => json!(1),
        "player.getAvailableQualityLevels().toString();" => json!("hd1080,hd720,large,auto"),
        _ => Value::Null,
    }
}

// ============================================================================
// Logging
// ============================================================================

fn init_logging(debug: bool) {
    let filter = if debug {
        "ytplayer_bridge=trace"
    } else {
        "ytplayer_bridge=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();
}
