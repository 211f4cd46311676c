//! Asynchronous player queries.
//!
//! Every accessor evaluates one script, awaits its completion through a
//! `oneshot` channel and decodes the result. Failures of any kind resolve to
//! the accessor's default and are only logged.
//!
//! | Accessor | Default |
//! |----------|---------|
//! | `current_time`, `duration`, `video_loaded_fraction` | `0.0` |
//! | `player_state`, `playback_quality` | `Unknown` |
//! | `is_muted` | `false` |
//! | `volume`, `playlist_index` | `0` |
//! | `video_url`, `video_embed_code`, `playlist` | `None` |
//! | `available_quality_levels` | empty |

use serde_json::Value;
use tokio::sync::oneshot;
use tracing::{debug, trace};
use url::Url;

use crate::error::{Error, Result};
use crate::identifiers::ScriptId;
use crate::protocol::query::{
    decode_bool, decode_f64, decode_i64, decode_playback_quality, decode_player_state,
    decode_playlist, decode_quality_levels, decode_string, decode_url,
};
use crate::protocol::{PlaybackQuality, PlayerQuery, PlayerState};
use crate::transport::ScriptExecutor;

use super::Player;

// ============================================================================
// Player - Queries
// ============================================================================

impl Player {
    /// Current playback offset in seconds.
    pub async fn current_time(&self) -> f64 {
        decode_f64(self.query(PlayerQuery::CurrentTime).await)
    }

    /// Duration of the current video in seconds.
    pub async fn duration(&self) -> f64 {
        decode_f64(self.query(PlayerQuery::Duration).await)
    }

    /// Current playback state.
    pub async fn player_state(&self) -> PlayerState {
        decode_player_state(self.query(PlayerQuery::PlayerState).await)
    }

    /// Current playback quality.
    pub async fn playback_quality(&self) -> PlaybackQuality {
        decode_playback_quality(self.query(PlayerQuery::PlaybackQuality).await)
    }

    /// Whether audio is muted.
    pub async fn is_muted(&self) -> bool {
        decode_bool(self.query(PlayerQuery::IsMuted).await)
    }

    /// Volume, `0..=100`.
    pub async fn volume(&self) -> i64 {
        decode_i64(self.query(PlayerQuery::Volume).await)
    }

    /// Watch URL of the current video.
    pub async fn video_url(&self) -> Option<Url> {
        decode_url(self.query(PlayerQuery::VideoUrl).await)
    }

    /// Embed code of the current video.
    pub async fn video_embed_code(&self) -> Option<String> {
        decode_string(self.query(PlayerQuery::VideoEmbedCode).await)
    }

    /// Video ids of the current playlist.
    pub async fn playlist(&self) -> Option<Vec<String>> {
        decode_playlist(self.query(PlayerQuery::Playlist).await)
    }

    /// Index of the current playlist entry.
    pub async fn playlist_index(&self) -> i64 {
        decode_i64(self.query(PlayerQuery::PlaylistIndex).await)
    }

    /// Fraction of the video buffered, `0.0..=1.0`.
    pub async fn video_loaded_fraction(&self) -> f64 {
        decode_f64(self.query(PlayerQuery::VideoLoadedFraction).await)
    }

    /// Qualities available for the current video, in player order.
    pub async fn available_quality_levels(&self) -> Vec<PlaybackQuality> {
        decode_quality_levels(self.query(PlayerQuery::AvailableQualityLevels).await)
    }
}

// ============================================================================
// Player - Internal
// ============================================================================

impl Player {
    /// Runs a query and logs failures.
    async fn query(&self, query: PlayerQuery) -> Result<Value> {
        let result = self.evaluate_query(&query).await;

        match &result {
            Ok(_) => trace!(method = query.method(), "Query completed"),
            Err(e) => debug!(method = query.method(), error = %e, "Query failed; using default"),
        }

        result
    }

    /// Evaluates a query script and awaits its completion.
    ///
    /// A query that times out or whose future is dropped is cancelled with
    /// the executor so it stops holding a pending slot.
    async fn evaluate_query(&self, query: &PlayerQuery) -> Result<Value> {
        let id = ScriptId::generate();
        let script = query.to_script();
        let (tx, rx) = oneshot::channel();

        let mut pending = PendingQuery {
            executor: &*self.inner.executor,
            id,
            armed: true,
        };

        self.inner.executor.evaluate(
            id,
            script,
            Some(Box::new(move |result: Result<Value>| {
                let _ = tx.send(result);
            })),
        );

        let received = match self.inner.options.query_timeout {
            Some(limit) => tokio::time::timeout(limit, rx)
                .await
                .map_err(|_| Error::timeout(query.method(), limit.as_millis() as u64))?,
            None => rx.await,
        };

        pending.armed = false;
        received?
    }
}

// ============================================================================
// PendingQuery
// ============================================================================

/// Cancels an in-flight query on drop unless its completion arrived.
struct PendingQuery<'a> {
    executor: &'a dyn ScriptExecutor,
    id: ScriptId,
    armed: bool,
}

impl Drop for PendingQuery<'_> {
    fn drop(&mut self) {
        if self.armed {
            trace!(id = %self.id, "Cancelling unfinished query");
            self.executor.cancel(self.id);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use serde_json::json;
    use tokio_test::{assert_pending, assert_ready_eq, task};

    use crate::player::test_support::{test_player, test_player_with};
    use crate::player::PlayerOptions;
    use crate::transport::MAX_PENDING_SCRIPTS;

    #[tokio::test]
    async fn test_query_scripts_and_decoding() {
        let (player, mut host, _pages) = test_player();

        let responder = async {
            let answers = [
                ("player.getCurrentTime();", json!(12.5)),
                ("player.getDuration();", json!(212)),
                ("player.getPlayerState();", json!(1)),
                ("player.getPlaybackQuality();", json!("hd1080")),
                ("player.isMuted();", json!(true)),
                ("player.getVolume();", json!(55)),
                ("player.getVideoUrl();", json!("https://www.youtube.com/watch?v=abc")),
                ("player.getVideoEmbedCode();", json!("<iframe></iframe>")),
                ("player.getPlaylist();", json!(["a", "b"])),
                ("player.getPlaylistIndex();", json!(1)),
                ("player.getVideoLoadedFraction();", json!(0.25)),
                (
                    "player.getAvailableQualityLevels().toString();",
                    json!("hd720,large,auto"),
                ),
            ];
            for (script, answer) in answers {
                let request = host.recv().await.expect("request");
                assert_eq!(request.script, script);
                assert!(request.expects_result);
                assert!(host.complete(request.id, Ok(answer)));
            }
        };

        let queries = async {
            assert_eq!(player.current_time().await, 12.5);
            assert_eq!(player.duration().await, 212.0);
            assert_eq!(player.player_state().await, PlayerState::Playing);
            assert_eq!(player.playback_quality().await, PlaybackQuality::Hd1080);
            assert!(player.is_muted().await);
            assert_eq!(player.volume().await, 55);
            assert_eq!(
                player.video_url().await.map(|u| u.to_string()),
                Some("https://www.youtube.com/watch?v=abc".to_string())
            );
            assert_eq!(
                player.video_embed_code().await.as_deref(),
                Some("<iframe></iframe>")
            );
            assert_eq!(
                player.playlist().await,
                Some(vec!["a".to_string(), "b".to_string()])
            );
            assert_eq!(player.playlist_index().await, 1);
            assert_eq!(player.video_loaded_fraction().await, 0.25);
            assert_eq!(
                player.available_quality_levels().await,
                vec![
                    PlaybackQuality::Hd720,
                    PlaybackQuality::Large,
                    PlaybackQuality::Auto
                ]
            );
        };

        tokio::join!(responder, queries);
    }

    #[tokio::test]
    async fn test_transport_error_yields_default() {
        let (player, mut host, _pages) = test_player();

        let responder = async {
            for _ in 0..3 {
                let request = host.recv().await.expect("request");
                host.complete(request.id, Err(Error::script_error("player is undefined")));
            }
        };
        let queries = async {
            (
                player.duration().await,
                player.player_state().await,
                player.playlist().await,
            )
        };

        let (_, results) = tokio::join!(responder, queries);
        assert_eq!(results, (0.0, PlayerState::Unknown, None));
    }

    #[tokio::test]
    async fn test_shape_mismatch_yields_default() {
        let (player, mut host, _pages) = test_player();

        let responder = async {
            let request = host.recv().await.expect("request");
            host.complete(request.id, Ok(json!("not a number")));
        };

        let (_, time) = tokio::join!(responder, player.current_time());
        assert_eq!(time, 0.0);
    }

    #[tokio::test]
    async fn test_dropped_host_yields_default() {
        let (player, host, _pages) = test_player();
        drop(host);
        assert!(!player.is_muted().await);
    }

    #[tokio::test]
    async fn test_concurrent_queries_complete_in_any_order() {
        let (player, mut host, _pages) = test_player();

        let mut time = task::spawn(player.current_time());
        let mut duration = task::spawn(player.duration());
        assert_pending!(time.poll());
        assert_pending!(duration.poll());

        let first = host.try_recv().expect("time request");
        let second = host.try_recv().expect("duration request");
        assert_eq!(first.script, "player.getCurrentTime();");
        assert_eq!(second.script, "player.getDuration();");

        assert!(host.complete(second.id, Ok(json!(300.0))));
        assert!(duration.is_woken());
        assert_ready_eq!(duration.poll(), 300.0);
        assert_pending!(time.poll());

        assert!(host.complete(first.id, Ok(json!(42.0))));
        assert_ready_eq!(time.poll(), 42.0);
    }

    #[tokio::test]
    async fn test_uncompleted_query_stays_pending() {
        let (player, mut host, _pages) = test_player();

        let mut state = task::spawn(player.player_state());
        assert_pending!(state.poll());
        assert_pending!(state.poll());

        assert!(host.try_recv().is_some());
        assert_eq!(host.pending_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_yields_default() {
        let (player, mut host, _pages) =
            test_player_with(PlayerOptions::new().with_query_timeout(Duration::from_millis(500)));

        let volume = player.volume().await;
        assert_eq!(volume, 0);

        // The timed-out query no longer holds a slot; late results are ignored.
        let request = host.try_recv().expect("request");
        assert_eq!(host.pending_count(), 0);
        assert!(!host.complete(request.id, Ok(json!(80))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_timeouts_keep_bridge_usable() {
        let (player, mut host, _pages) =
            test_player_with(PlayerOptions::new().with_query_timeout(Duration::from_millis(10)));

        for _ in 0..MAX_PENDING_SCRIPTS + 44 {
            assert_eq!(player.volume().await, 0);
        }
        assert_eq!(host.pending_count(), 0);
        while host.try_recv().is_some() {}

        let responder = async {
            let request = host.recv().await.expect("request");
            assert!(host.complete(request.id, Ok(json!(77))));
        };
        let (_, volume) = tokio::join!(responder, player.volume());
        assert_eq!(volume, 77);
    }

    #[tokio::test]
    async fn test_dropped_query_is_cancelled() {
        let (player, mut host, _pages) = test_player();

        let mut volume = task::spawn(player.volume());
        assert_pending!(volume.poll());
        assert_eq!(host.pending_count(), 1);

        drop(volume);
        assert_eq!(host.pending_count(), 0);

        let request = host.try_recv().expect("request");
        assert!(!host.complete(request.id, Ok(json!(10))));
    }

    #[tokio::test]
    async fn test_playlist_from_encoded_string() {
        let (player, mut host, _pages) = test_player();

        let responder = async {
            let request = host.recv().await.expect("request");
            host.complete(request.id, Ok(json!(r#"["x","y"]"#)));
        };

        let (_, playlist) = tokio::join!(responder, player.playlist());
        assert_eq!(playlist, Some(vec!["x".to_string(), "y".to_string()]));
    }
}
