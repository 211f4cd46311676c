//! Page loads and fire-and-forget player commands.

use tracing::debug;
use url::Url;

use crate::error::Result;
use crate::identifiers::ScriptId;
use crate::protocol::{
    LoadParameters, PlaybackQuality, PlayerCommand, PlayerVars, PlaylistCue, PlaylistSource,
    VideoCue,
};

use super::Player;
use super::assets::render_embed_html;

// ============================================================================
// Constants
// ============================================================================

/// Base URL for documents loaded without an origin.
const BLANK_BASE_URL: &str = "about:blank";

// ============================================================================
// Player - Page Loads
// ============================================================================

impl Player {
    /// Loads the embed document for a single video.
    ///
    /// # Errors
    ///
    /// Propagates serialization and page loader errors.
    pub fn load_video(&self, video_id: &str, player_vars: PlayerVars) -> Result<()> {
        self.load_parameters(LoadParameters::video(video_id, player_vars))
    }

    /// Loads the embed document for a playlist.
    ///
    /// # Errors
    ///
    /// Propagates serialization and page loader errors.
    pub fn load_playlist(&self, playlist_id: &str, player_vars: PlayerVars) -> Result<()> {
        self.load_parameters(LoadParameters::playlist(playlist_id, player_vars))
    }

    /// Loads the embed document from caller-built parameters.
    ///
    /// The parameters are finalized with the configured default size, the
    /// origin is taken from `playerVars.origin`, and the session is reset
    /// before the page loader runs.
    ///
    /// # Errors
    ///
    /// Propagates serialization and page loader errors.
    pub fn load_parameters(&self, params: LoadParameters) -> Result<()> {
        let options = &self.inner.options;
        let params = params.finalize_with(&options.default_width, &options.default_height);
        let html = render_embed_html(&options.template, &params.to_json_pretty()?);

        let origin = params.origin();
        let base_url = match &origin {
            Some(origin) => origin.clone(),
            None => Url::parse(BLANK_BASE_URL)?,
        };

        let loads = {
            let mut session = self.inner.session.lock();
            session.origin = origin;
            session.ready = false;
            session.loads += 1;
            session.loads
        };

        debug!(
            loads,
            base_url = %base_url,
            html_len = html.len(),
            "Loading embed document"
        );

        self.inner.page_loader.load_html(&html, &base_url)
    }
}

// ============================================================================
// Player - Commands
// ============================================================================

impl Player {
    /// Sends a command without waiting for any result.
    pub fn send_command(&self, command: PlayerCommand) {
        let script = command.to_script();

        if self.is_ready() {
            debug!(method = command.method(), script_len = script.len(), "Sending command");
        } else {
            debug!(
                method = command.method(),
                script_len = script.len(),
                "Sending command before player ready"
            );
        }

        self.inner.executor.evaluate(ScriptId::generate(), script, None);
    }

    /// Starts or resumes playback.
    pub fn play_video(&self) {
        self.send_command(PlayerCommand::PlayVideo);
    }

    /// Pauses playback.
    pub fn pause_video(&self) {
        self.send_command(PlayerCommand::PauseVideo);
    }

    /// Stops playback.
    pub fn stop_video(&self) {
        self.send_command(PlayerCommand::StopVideo);
    }

    /// Mutes audio.
    pub fn mute(&self) {
        self.send_command(PlayerCommand::Mute);
    }

    /// Unmutes audio.
    pub fn unmute(&self) {
        self.send_command(PlayerCommand::UnMute);
    }

    /// Sets the volume; values above 100 are clamped.
    pub fn set_volume(&self, volume: u8) {
        self.send_command(PlayerCommand::SetVolume(volume));
    }

    /// Loops the playlist.
    pub fn set_loop(&self, enabled: bool) {
        self.send_command(PlayerCommand::SetLoop(enabled));
    }

    /// Shuffles the playlist.
    pub fn set_shuffle(&self, enabled: bool) {
        self.send_command(PlayerCommand::SetShuffle(enabled));
    }

    /// Seeks to `seconds`.
    pub fn seek_to(&self, seconds: f64, allow_seek_ahead: bool) {
        self.send_command(PlayerCommand::SeekTo {
            seconds,
            allow_seek_ahead,
        });
    }

    /// Requests a playback quality.
    pub fn set_playback_quality(&self, quality: PlaybackQuality) {
        self.send_command(PlayerCommand::SetPlaybackQuality(quality));
    }

    /// Plays the next playlist entry.
    pub fn next_video(&self) {
        self.send_command(PlayerCommand::NextVideo);
    }

    /// Plays the previous playlist entry.
    pub fn previous_video(&self) {
        self.send_command(PlayerCommand::PreviousVideo);
    }

    /// Plays the playlist entry at `index`.
    pub fn play_video_at(&self, index: u32) {
        self.send_command(PlayerCommand::PlayVideoAt(index));
    }
}

// ============================================================================
// Player - Cue / Load
// ============================================================================

impl Player {
    /// Cues a video by id.
    pub fn cue_video_by_id(&self, cue: VideoCue) {
        self.send_command(PlayerCommand::CueVideoById(cue));
    }

    /// Loads and plays a video by id.
    pub fn load_video_by_id(&self, cue: VideoCue) {
        self.send_command(PlayerCommand::LoadVideoById(cue));
    }

    /// Cues a video by media URL.
    pub fn cue_video_by_url(&self, cue: VideoCue) {
        self.send_command(PlayerCommand::CueVideoByUrl(cue));
    }

    /// Loads and plays a video by media URL.
    pub fn load_video_by_url(&self, cue: VideoCue) {
        self.send_command(PlayerCommand::LoadVideoByUrl(cue));
    }

    /// Cues a playlist by id.
    pub fn cue_playlist(
        &self,
        playlist_id: &str,
        index: u32,
        start_seconds: f64,
        suggested_quality: PlaybackQuality,
    ) {
        self.send_command(PlayerCommand::CuePlaylist(PlaylistCue {
            source: PlaylistSource::Id(playlist_id.to_string()),
            index,
            start_seconds,
            suggested_quality,
        }));
    }

    /// Loads and plays a playlist by id.
    pub fn load_playlist_by_id(
        &self,
        playlist_id: &str,
        index: u32,
        start_seconds: f64,
        suggested_quality: PlaybackQuality,
    ) {
        self.send_command(PlayerCommand::LoadPlaylist(PlaylistCue {
            source: PlaylistSource::Id(playlist_id.to_string()),
            index,
            start_seconds,
            suggested_quality,
        }));
    }

    /// Cues an explicit list of videos as a playlist.
    pub fn cue_video_ids(
        &self,
        video_ids: Vec<String>,
        index: u32,
        start_seconds: f64,
        suggested_quality: PlaybackQuality,
    ) {
        self.send_command(PlayerCommand::CuePlaylist(PlaylistCue {
            source: PlaylistSource::VideoIds(video_ids),
            index,
            start_seconds,
            suggested_quality,
        }));
    }

    /// Loads and plays an explicit list of videos as a playlist.
    pub fn load_video_ids(
        &self,
        video_ids: Vec<String>,
        index: u32,
        start_seconds: f64,
        suggested_quality: PlaybackQuality,
    ) {
        self.send_command(PlayerCommand::LoadPlaylist(PlaylistCue {
            source: PlaylistSource::VideoIds(video_ids),
            index,
            start_seconds,
            suggested_quality,
        }));
    }
}

// ============================================================================
// Tests
// ============================================================================
