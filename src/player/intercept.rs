//! Navigation interception and callback dispatch.
//!
//! The host calls [`Player::decide_policy`] for every navigation the web view
//! is about to perform and honours the returned policy.

use tracing::{debug, trace, warn};
use url::Url;

use crate::navigation::{Classification, NavigationPolicy};
use crate::protocol::{CallbackEvent, CallbackName, PlayerEvent};

use super::Player;
use super::delegate::dispatch;

// ============================================================================
// Player - Navigation
// ============================================================================

impl Player {
    /// Classifies a navigation request and acts on it.
    ///
    /// Bridge callbacks are decoded and delivered to the delegate; external
    /// links are handed to the delegate, or to the link opener when no
    /// delegate is attached. Both are cancelled.
    pub fn decide_policy(&self, url: &Url) -> NavigationPolicy {
        let origin_host = self.origin_host();
        let classification = self.inner.classifier.classify(url, origin_host.as_deref());

        trace!(url = %url, ?classification, "Navigation request");

        match &classification {
            Classification::BridgeCallback => self.handle_callback(url),
            Classification::ExternalLink => self.hand_off_link(url),
            Classification::AllowedExternal { pattern } => {
                trace!(url = %url, pattern = %pattern, "Allow-listed navigation");
            }
            Classification::SameOrigin | Classification::Other => {}
        }

        classification.policy()
    }

    /// Decodes a bridge callback and notifies the delegate.
    fn handle_callback(&self, url: &Url) {
        let Some(callback) = CallbackEvent::parse(url) else {
            debug!(url = %url, "Malformed bridge callback");
            return;
        };

        match callback.callback() {
            Some(CallbackName::OnIframeApiReady) => {
                debug!("IFrame API ready");
                return;
            }
            Some(CallbackName::OnIframeApiFailedToLoad) => {
                warn!("IFrame API failed to load");
                return;
            }
            Some(_) => {}
            None => {
                debug!(event = %callback.name, "Unknown bridge callback");
                return;
            }
        }

        let Some(event) = callback.decode() else {
            debug!(
                event = %callback.name,
                payload = %callback.payload,
                "Undecodable bridge callback payload"
            );
            return;
        };

        if event == PlayerEvent::Ready {
            self.inner.session.lock().ready = true;
        }

        self.notify(event);
    }

    /// Hands an external link to the delegate or the link opener.
    fn hand_off_link(&self, url: &Url) {
        if self.has_delegate() {
            self.notify(PlayerEvent::OpenExternalLink(url.clone()));
        } else {
            debug!(url = %url, "Opening external link");
            self.inner.link_opener.open(url);
        }
    }

    /// Delivers an event to the delegate, if any.
    pub(crate) fn notify(&self, event: PlayerEvent) {
        let Some(delegate) = self.delegate() else {
            trace!(event = event.name(), "No delegate; event dropped");
            return;
        };

        trace!(event = event.name(), "Notifying delegate");
        dispatch(delegate.as_ref(), self, event);
    }
}

// ============================================================================
// Tests
// ============================================================================
