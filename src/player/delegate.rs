//! Host notification delegate.
//!
//! Implement [`PlayerDelegate`] to receive player notifications; every method
//! defaults to a no-op. [`ChannelDelegate`] forwards everything as
//! [`PlayerEvent`]s instead.
//!
//! Delegate methods run synchronously inside
//! [`Player::decide_policy`](super::Player::decide_policy). They may call
//! back into the player.

// ============================================================================
// Imports
// ============================================================================

use tokio::sync::mpsc;
use tracing::trace;
use url::Url;

use crate::protocol::{ErrorCode, PlaybackQuality, PlayerEvent, PlayerState};

use super::Player;

// ============================================================================
// PlayerDelegate
// ============================================================================

/// Receives player notifications.
#[allow(unused_variables)]
pub trait PlayerDelegate: Send + Sync {
    /// The player finished loading and accepts commands.
    fn did_become_ready(&self, player: &Player) {}

    /// Playback state changed.
    fn did_change_state(&self, player: &Player, state: PlayerState) {}

    /// Playback quality changed.
    fn did_change_quality(&self, player: &Player, quality: PlaybackQuality) {}

    /// Periodic play-time report while playing.
    fn did_play_time(&self, player: &Player, seconds: f64) {}

    /// The player reported an error.
    fn did_receive_error(&self, player: &Player, error: ErrorCode) {}

    /// The embedded document tried to open `url` outside the player.
    ///
    /// When a delegate is set, it alone receives external links; the
    /// configured link opener is not called.
    fn open_external_link(&self, player: &Player, url: &Url) {}
}

/// Routes an event to the matching delegate method.
pub(crate) fn dispatch(delegate: &dyn PlayerDelegate, player: &Player, event: PlayerEvent) {
    match event {
        PlayerEvent::Ready => delegate.did_become_ready(player),
        PlayerEvent::StateChanged(state) => delegate.did_change_state(player, state),
        PlayerEvent::QualityChanged(quality) => delegate.did_change_quality(player, quality),
        PlayerEvent::Error(code) => delegate.did_receive_error(player, code),
        PlayerEvent::PlayTime(seconds) => delegate.did_play_time(player, seconds),
        PlayerEvent::OpenExternalLink(url) => delegate.open_external_link(player, &url),
    }
}

// ============================================================================
// ChannelDelegate
// ============================================================================

/// Delegate that forwards notifications into an unbounded channel.
///
/// Events sent after the receiver is dropped are discarded.
#[derive(Debug, Clone)]
pub struct ChannelDelegate {
    tx: mpsc::UnboundedSender<PlayerEvent>,
}

impl ChannelDelegate {
    /// Creates a delegate and the receiver its events arrive on.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<PlayerEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn forward(&self, event: PlayerEvent) {
        let name = event.name();
        if self.tx.send(event).is_err() {
            trace!(event = name, "Event receiver dropped");
        }
    }
}

impl PlayerDelegate for ChannelDelegate {
    fn did_become_ready(&self, _player: &Player) {
        self.forward(PlayerEvent::Ready);
    }

    fn did_change_state(&self, _player: &Player, state: PlayerState) {
        self.forward(PlayerEvent::StateChanged(state));
    }

    fn did_change_quality(&self, _player: &Player, quality: PlaybackQuality) {
        self.forward(PlayerEvent::QualityChanged(quality));
    }

    fn did_play_time(&self, _player: &Player, seconds: f64) {
        self.forward(PlayerEvent::PlayTime(seconds));
    }

    fn did_receive_error(&self, _player: &Player, error: ErrorCode) {
        self.forward(PlayerEvent::Error(error));
    }

    fn open_external_link(&self, _player: &Player, url: &Url) {
        self.forward(PlayerEvent::OpenExternalLink(url.clone()));
    }
}

// ============================================================================
// Tests
// ============================================================================
