//! Embed document template.
//!
//! The embed page loads the IFrame API, creates the player from the load
//! parameters substituted at [`TEMPLATE_PLACEHOLDER`], and reports player
//! events by navigating to `ytplayer://<event>?data=<payload>` URLs.
//!
//! # Callback Flow
//!
//! 1. The IFrame API script loads, or reports `onYouTubeIframeAPIFailedToLoad`
//! 2. `YT.ready` creates `player` and reports `onYouTubeIframeAPIReady`
//! 3. Player events call the handlers named in the `events` parameter
//! 4. Each handler navigates to its callback URL; the host cancels it
//! 5. While playing, `onPlayTime` is reported twice a second

// ============================================================================
// Imports
// ============================================================================

use crate::error::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Marker replaced with the pretty-printed load parameters.
pub const TEMPLATE_PLACEHOLDER: &str = "%@";

/// Built-in embed document.
pub const EMBED_HTML_TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1, maximum-scale=1, user-scalable=no">
    <style>
        html, body { margin: 0; padding: 0; width: 100%; height: 100%; background-color: #000000; overflow: hidden; }
        .embed-container { position: relative; width: 100%; height: 100%; }
        .embed-container iframe { position: absolute; top: 0; left: 0; width: 100% !important; height: 100% !important; }
    </style>
</head>
<body>
    <div class="embed-container"><div id="player"></div></div>
    <script src="https://www.youtube.com/iframe_api"
            onerror="window.location.href='ytplayer://onYouTubeIframeAPIFailedToLoad'"></script>
    <script>
        var player;
        var playTimeTimer;

        function report(name, data) {
            var url = 'ytplayer://' + name;
            if (data !== undefined && data !== null) {
                url += '?data=' + encodeURIComponent(data);
            }
            window.location.href = url;
        }

        YT.ready(function() {
            player = new YT.Player('player', %@);
            report('onYouTubeIframeAPIReady');
            playTimeTimer = window.setInterval(function() {
                if (player && player.getPlayerState && player.getPlayerState() == YT.PlayerState.PLAYING) {
                    report('onPlayTime', player.getCurrentTime());
                }
            }, 500);
        });

        function onReady(event) { report('onReady', event.data); }
        function onStateChange(event) { report('onStateChange', event.data); }
        function onPlaybackQualityChange(event) { report('onPlaybackQualityChange', event.data); }
        function onError(event) { report('onError', event.data); }

        window.onresize = function() {
            if (player && player.setSize) {
                player.setSize(window.innerWidth, window.innerHeight);
            }
        };
    </script>
</body>
</html>"##;

// ============================================================================
// Public Functions
// ============================================================================

/// Checks that `template` contains the placeholder exactly once.
///
/// # Errors
///
/// Returns [`Error::Template`] otherwise.
pub fn validate_template(template: &str) -> Result<()> {
    match template.matches(TEMPLATE_PLACEHOLDER).count() {
        1 => Ok(()),
        0 => Err(Error::template(format!(
            "template has no {TEMPLATE_PLACEHOLDER} placeholder"
        ))),
        n => Err(Error::template(format!(
            "template has {n} {TEMPLATE_PLACEHOLDER} placeholders, expected one"
        ))),
    }
}

/// Substitutes the serialized load parameters into `template`.
///
/// `params_json` lands inside a `<script>` element, so it is passed through
/// [`escape_script_json`] first.
#[must_use]
pub fn render_embed_html(template: &str, params_json: &str) -> String {
    template.replacen(TEMPLATE_PLACEHOLDER, &escape_script_json(params_json), 1)
}

/// Escapes JSON text for inline embedding in a `<script>` element.
///
/// `<` only occurs inside JSON strings, where `\u003c` is equivalent; this
/// keeps `</script>` and `<!--` from ending the element early. U+2028 and
/// U+2029 are escaped as well since older engines treat them as line
/// terminators inside string literals.
#[must_use]
pub fn escape_script_json(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            c => escaped.push(c),
        }
    }
    escaped
}

// ============================================================================
// Tests
// ============================================================================
