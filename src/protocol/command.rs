//! Player command definitions.
//!
//! Commands render to `player.<method>(<args>);` and are delivered without
//! waiting for a result.
//!
//! # Command Groups
//!
//! | Group | Methods |
//! |-------|---------|
//! | Transport | `playVideo`, `pauseVideo`, `stopVideo`, `seekTo` |
//! | Audio | `mute`, `unMute`, `setVolume` |
//! | Playlist | `nextVideo`, `previousVideo`, `playVideoAt`, `setLoop`, `setShuffle` |
//! | Loading | `cueVideoById`, `loadVideoById`, `cueVideoByUrl`, `loadVideoByUrl`, `cuePlaylist`, `loadPlaylist` |
//! | Quality | `setPlaybackQuality` |
//!
//! # Argument Encoding
//!
//! Every argument is rendered as a JSON literal, which is also a valid
//! JavaScript literal once U+2028 and U+2029 are escaped. String arguments
//! therefore can never terminate the literal early, whatever quotes or
//! backslashes they contain.

// ============================================================================
// Imports
// ============================================================================

use serde_json::{Value, json};

use super::types::PlaybackQuality;

// ============================================================================
// Constants
// ============================================================================

/// Script-side name of the player object.
pub const PLAYER_OBJECT: &str = "player";

// ============================================================================
// VideoCue
// ============================================================================

/// Arguments for cueing or loading a single video.
///
/// `target` is a video id for the `*ById` commands and a media URL for the
/// `*ByUrl` commands.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoCue {
    /// Video id or media URL.
    pub target: String,
    /// Start offset in seconds.
    pub start_seconds: f64,
    /// Optional end offset in seconds.
    pub end_seconds: Option<f64>,
    /// Suggested playback quality.
    pub suggested_quality: PlaybackQuality,
}

impl VideoCue {
    /// Creates a cue starting at `start_seconds` with no end.
    #[must_use]
    pub fn new(
        target: impl Into<String>,
        start_seconds: f64,
        suggested_quality: PlaybackQuality,
    ) -> Self {
        Self {
            target: target.into(),
            start_seconds,
            end_seconds: None,
            suggested_quality,
        }
    }

    /// Sets the end offset.
    #[inline]
    #[must_use]
    pub fn with_end(mut self, end_seconds: f64) -> Self {
        self.end_seconds = Some(end_seconds);
        self
    }
}

// ============================================================================
// PlaylistCue
// ============================================================================

/// What a playlist command plays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistSource {
    /// A playlist id.
    Id(String),
    /// An explicit list of video ids.
    VideoIds(Vec<String>),
}

/// Arguments for cueing or loading a playlist.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistCue {
    /// Playlist id or video id list.
    pub source: PlaylistSource,
    /// Zero-based index of the first video.
    pub index: u32,
    /// Start offset in seconds.
    pub start_seconds: f64,
    /// Suggested playback quality.
    pub suggested_quality: PlaybackQuality,
}

// ============================================================================
// PlayerCommand
// ============================================================================

/// A fire-and-forget instruction for the embedded player.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    /// Start or resume playback.
    PlayVideo,
    /// Pause playback.
    PauseVideo,
    /// Stop playback and cancel loading.
    StopVideo,
    /// Mute audio.
    Mute,
    /// Unmute audio.
    UnMute,
    /// Set volume, `0..=100`.
    SetVolume(u8),
    /// Loop the playlist.
    SetLoop(bool),
    /// Shuffle the playlist.
    SetShuffle(bool),
    /// Seek to an offset.
    SeekTo {
        /// Target offset in seconds.
        seconds: f64,
        /// Whether the player may request unbuffered data.
        allow_seek_ahead: bool,
    },
    /// Request a playback quality.
    SetPlaybackQuality(PlaybackQuality),
    /// Play the next playlist entry.
    NextVideo,
    /// Play the previous playlist entry.
    PreviousVideo,
    /// Play the playlist entry at an index.
    PlayVideoAt(u32),
    /// Cue a video by id.
    CueVideoById(VideoCue),
    /// Load and play a video by id.
    LoadVideoById(VideoCue),
    /// Cue a video by media URL.
    CueVideoByUrl(VideoCue),
    /// Load and play a video by media URL.
    LoadVideoByUrl(VideoCue),
    /// Cue a playlist.
    CuePlaylist(PlaylistCue),
    /// Load and play a playlist.
    LoadPlaylist(PlaylistCue),
}

impl PlayerCommand {
    /// Returns the player method name.
    #[must_use]
    pub fn method(&self) -> &'static str {
        match self {
            Self::PlayVideo => "playVideo",
            Self::PauseVideo => "pauseVideo",
            Self::StopVideo => "stopVideo",
            Self::Mute => "mute",
            Self::UnMute => "unMute",
            Self::SetVolume(_) => "setVolume",
            Self::SetLoop(_) => "setLoop",
            Self::SetShuffle(_) => "setShuffle",
            Self::SeekTo { .. } => "seekTo",
            Self::SetPlaybackQuality(_) => "setPlaybackQuality",
            Self::NextVideo => "nextVideo",
            Self::PreviousVideo => "previousVideo",
            Self::PlayVideoAt(_) => "playVideoAt",
            Self::CueVideoById(_) => "cueVideoById",
            Self::LoadVideoById(_) => "loadVideoById",
            Self::CueVideoByUrl(_) => "cueVideoByUrl",
            Self::LoadVideoByUrl(_) => "loadVideoByUrl",
            Self::CuePlaylist(_) => "cuePlaylist",
            Self::LoadPlaylist(_) => "loadPlaylist",
        }
    }

    /// Returns the positional arguments as JSON values.
    #[must_use]
    pub fn args(&self) -> Vec<Value> {
        match self {
            Self::PlayVideo
            | Self::PauseVideo
            | Self::StopVideo
            | Self::Mute
            | Self::UnMute
            | Self::NextVideo
            | Self::PreviousVideo => Vec::new(),

            Self::SetVolume(volume) => vec![json!((*volume).min(100))],
            Self::SetLoop(flag) | Self::SetShuffle(flag) => vec![json!(flag)],
            Self::SeekTo {
                seconds,
                allow_seek_ahead,
            } => vec![json!(seconds), json!(allow_seek_ahead)],
            Self::SetPlaybackQuality(quality) => vec![json!(quality.to_wire_or_default())],
            Self::PlayVideoAt(index) => vec![json!(index)],

            Self::CueVideoById(cue) | Self::LoadVideoById(cue) => video_by_id_args(cue),
            Self::CueVideoByUrl(cue) | Self::LoadVideoByUrl(cue) => video_by_url_args(cue),
            Self::CuePlaylist(cue) | Self::LoadPlaylist(cue) => playlist_args(cue),
        }
    }

    /// Renders the command as a script statement.
    ///
    /// # Example
    ///
    /// ```
    /// use ytplayer_bridge::protocol::PlayerCommand;
    ///
    /// let cmd = PlayerCommand::SeekTo { seconds: 12.5, allow_seek_ahead: true };
    /// assert_eq!(cmd.to_script(), "player.seekTo(12.5, true);");
    /// ```
    #[must_use]
    pub fn to_script(&self) -> String {
        render_call(self.method(), &self.args())
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Renders `player.<method>(<args>);`.
pub(crate) fn render_call(method: &str, args: &[Value]) -> String {
    let args = args.iter().map(js_literal).collect::<Vec<_>>().join(", ");
    format!("{PLAYER_OBJECT}.{method}({args});")
}

/// Renders a JSON value as a JavaScript literal.
///
/// JSON leaves U+2028 and U+2029 unescaped; older script engines treat them
/// as line terminators inside string literals.
pub(crate) fn js_literal(value: &Value) -> String {
    value
        .to_string()
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

/// `cueVideoById` / `loadVideoById` arguments.
///
/// The object form is required to pass an end offset.
fn video_by_id_args(cue: &VideoCue) -> Vec<Value> {
    match cue.end_seconds {
        Some(end_seconds) => vec![json!({
            "videoId": cue.target,
            "startSeconds": cue.start_seconds,
            "endSeconds": end_seconds,
            "suggestedQuality": cue.suggested_quality.to_wire_or_default(),
        })],
        None => vec![
            json!(cue.target),
            json!(cue.start_seconds),
            json!(cue.suggested_quality.to_wire_or_default()),
        ],
    }
}

/// `cueVideoByUrl` / `loadVideoByUrl` arguments.
fn video_by_url_args(cue: &VideoCue) -> Vec<Value> {
    let mut args = vec![json!(cue.target), json!(cue.start_seconds)];
    if let Some(end_seconds) = cue.end_seconds {
        args.push(json!(end_seconds));
    }
    args.push(json!(cue.suggested_quality.to_wire_or_default()));
    args
}

/// `cuePlaylist` / `loadPlaylist` arguments.
fn playlist_args(cue: &PlaylistCue) -> Vec<Value> {
    let playlist = match &cue.source {
        PlaylistSource::Id(id) => json!(id),
        PlaylistSource::VideoIds(ids) => json!(ids),
    };
    vec![
        playlist,
        json!(cue.index),
        json!(cue.start_seconds),
        json!(cue.suggested_quality.to_wire_or_default()),
    ]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arg_commands() {
        assert_eq!(PlayerCommand::PlayVideo.to_script(), "player.playVideo();");
        assert_eq!(PlayerCommand::PauseVideo.to_script(), "player.pauseVideo();");
        assert_eq!(PlayerCommand::StopVideo.to_script(), "player.stopVideo();");
        assert_eq!(PlayerCommand::Mute.to_script(), "player.mute();");
        assert_eq!(PlayerCommand::UnMute.to_script(), "player.unMute();");
        assert_eq!(PlayerCommand::NextVideo.to_script(), "player.nextVideo();");
        assert_eq!(
            PlayerCommand::PreviousVideo.to_script(),
            "player.previousVideo();"
        );
    }

    #[test]
    fn test_flag_commands() {
        assert_eq!(
            PlayerCommand::SetLoop(true).to_script(),
            "player.setLoop(true);"
        );
        assert_eq!(
            PlayerCommand::SetShuffle(false).to_script(),
            "player.setShuffle(false);"
        );
    }

    #[test]
    fn test_seek_and_index() {
        let seek = PlayerCommand::SeekTo {
            seconds: 90.0,
            allow_seek_ahead: false,
        };
        assert_eq!(seek.to_script(), "player.seekTo(90.0, false);");
        assert_eq!(
            PlayerCommand::PlayVideoAt(3).to_script(),
            "player.playVideoAt(3);"
        );
    }

    #[test]
    fn test_volume_is_clamped() {
        assert_eq!(
            PlayerCommand::SetVolume(250).to_script(),
            "player.setVolume(100);"
        );
        assert_eq!(
            PlayerCommand::SetVolume(40).to_script(),
            "player.setVolume(40);"
        );
    }

    #[test]
    fn test_set_quality() {
        let cmd = PlayerCommand::SetPlaybackQuality(PlaybackQuality::Hd720);
        assert_eq!(cmd.to_script(), r#"player.setPlaybackQuality("hd720");"#);
    }

    #[test]
    fn test_cue_video_by_id_positional() {
        let cue = VideoCue::new("M7lc1UVf-VE", 1.5, PlaybackQuality::Large);
        assert_eq!(
            PlayerCommand::CueVideoById(cue).to_script(),
            r#"player.cueVideoById("M7lc1UVf-VE", 1.5, "large");"#
        );
    }

    #[test]
    fn test_load_video_by_id_object_form() {
        let cue = VideoCue::new("abc", 0.0, PlaybackQuality::Auto).with_end(30.0);
        assert_eq!(
            PlayerCommand::LoadVideoById(cue).to_script(),
            r#"player.loadVideoById({"videoId":"abc","startSeconds":0.0,"endSeconds":30.0,"suggestedQuality":"auto"});"#
        );
    }

    #[test]
    fn test_video_by_url_with_end() {
        let cue = VideoCue::new("https://www.youtube.com/v/abc", 5.0, PlaybackQuality::Small)
            .with_end(10.0);
        assert_eq!(
            PlayerCommand::LoadVideoByUrl(cue).to_script(),
            r#"player.loadVideoByUrl("https://www.youtube.com/v/abc", 5.0, 10.0, "small");"#
        );
    }

    #[test]
    fn test_playlist_by_id() {
        let cue = PlaylistCue {
            source: PlaylistSource::Id("PL123".into()),
            index: 2,
            start_seconds: 0.0,
            suggested_quality: PlaybackQuality::Default,
        };
        assert_eq!(
            PlayerCommand::CuePlaylist(cue).to_script(),
            r#"player.cuePlaylist("PL123", 2, 0.0, "default");"#
        );
    }

    #[test]
    fn test_playlist_by_video_ids() {
        let cue = PlaylistCue {
            source: PlaylistSource::VideoIds(vec!["a".into(), "b".into()]),
            index: 0,
            start_seconds: 0.0,
            suggested_quality: PlaybackQuality::Medium,
        };
        assert_eq!(
            PlayerCommand::LoadPlaylist(cue).to_script(),
            r#"player.loadPlaylist(["a","b"], 0, 0.0, "medium");"#
        );
    }

    #[test]
    fn test_string_arguments_are_escaped() {
        let cue = VideoCue::new(r#"x'); alert("pwned"); //\"#, 0.0, PlaybackQuality::Auto);
        let script = PlayerCommand::CueVideoById(cue).to_script();

        assert!(script.starts_with("player.cueVideoById(\"x'); alert(\\\"pwned\\\"); //\\\\\""));
        assert!(script.ends_with(", 0.0, \"auto\");"));

        let literal = script
            .trim_start_matches("player.cueVideoById(")
            .split(", 0.0")
            .next()
            .expect("first argument");
        let decoded: String = serde_json::from_str(literal).expect("valid literal");
        assert_eq!(decoded, r#"x'); alert("pwned"); //\"#);
    }

    #[test]
    fn test_unknown_quality_is_sent_as_default() {
        assert_eq!(
            PlayerCommand::SetPlaybackQuality(PlaybackQuality::Unknown).to_script(),
            r#"player.setPlaybackQuality("default");"#
        );

        let cue = VideoCue::new("abc", 0.0, PlaybackQuality::Unknown);
        assert_eq!(
            PlayerCommand::CueVideoById(cue.clone()).to_script(),
            r#"player.cueVideoById("abc", 0.0, "default");"#
        );
        assert_eq!(
            PlayerCommand::LoadVideoById(cue.with_end(9.0)).to_script(),
            r#"player.loadVideoById({"videoId":"abc","startSeconds":0.0,"endSeconds":9.0,"suggestedQuality":"default"});"#
        );
    }

    #[test]
    fn test_line_separators_are_escaped() {
        let literal = js_literal(&json!("a\u{2028}b\u{2029}c"));
        assert_eq!(literal, r#""a\u2028b\u2029c""#);
    }
}
