// File: src/toast/store.rs
// Purpose: Rust model of the client-side toast store (add/remove/auto-dismiss)
//
// Mirrors what toastComponent() does in the browser, with time passed in
// explicitly so timer behavior is deterministic.

use uuid::Uuid;

use super::config::{ToastConfig, ToastKind};
use super::render::ToastRequest;

/// Playback failure. Never propagated out of the store.
#[derive(Debug, thiserror::Error)]
pub enum SoundError {
    #[error("playback blocked by autoplay policy: {0}")]
    Blocked(String),

    #[error("failed to load sound {0}")]
    Load(String),
}

/// Plays the optional audio cue attached to a toast.
pub trait SoundPlayer {
    fn play(&self, source: &str, volume: f32) -> Result<(), SoundError>;
}

/// Player that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SoundPlayer for Silent {
    fn play(&self, _source: &str, _volume: f32) -> Result<(), SoundError> {
        Ok(())
    }
}

/// A live notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u64,
    expires_at_ms: u64,
}

impl Toast {
    pub fn expires_at_ms(&self) -> u64 {
        self.expires_at_ms
    }
}

#[derive(Debug)]
pub struct ToastStore<P = Silent> {
    default_duration_ms: u64,
    enable_sound: bool,
    player: P,
    toasts: Vec<Toast>,
}

impl ToastStore<Silent> {
    pub fn new(config: &ToastConfig) -> Self {
        Self::with_player(config, Silent)
    }
}

impl<P: SoundPlayer> ToastStore<P> {
    pub fn with_player(config: &ToastConfig, player: P) -> Self {
        Self {
            default_duration_ms: config.default_duration_ms,
            enable_sound: config.enable_sound,
            player,
            toasts: Vec::new(),
        }
    }

    /// Append a toast at time `now_ms` and return its id. It expires once
    /// `duration_ms` (or the default, when unset or zero) has elapsed.
    pub fn add(&mut self, request: &ToastRequest, now_ms: u64) -> String {
        let id = toast_id(now_ms);
        let duration_ms = request
            .duration_ms
            .filter(|d| *d > 0)
            .unwrap_or(self.default_duration_ms);

        self.toasts.push(Toast {
            id: id.clone(),
            message: request.message.clone(),
            kind: request.kind,
            duration_ms,
            expires_at_ms: now_ms.saturating_add(duration_ms),
        });

        if self.enable_sound {
            if let Some(sound) = &request.sound {
                if let Err(e) = self.player.play(sound, 0.5) {
                    tracing::debug!(error = %e, "toast sound failed");
                }
            }
        }

        id
    }

    /// Add using the wall clock.
    pub fn add_now(&mut self, request: &ToastRequest) -> String {
        self.add(request, now_ms())
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Fire every dismissal timer due at `now_ms`. Returns the removed ids.
    pub fn advance(&mut self, now_ms: u64) -> Vec<String> {
        let (expired, live): (Vec<Toast>, Vec<Toast>) = std::mem::take(&mut self.toasts)
            .into_iter()
            .partition(|t| t.expires_at_ms <= now_ms);
        self.toasts = live;
        expired.into_iter().map(|t| t.id).collect()
    }

    pub fn live(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn player(&self) -> &P {
        &self.player
    }
}

/// Millisecond timestamp plus the first 9 hex digits of a v4 UUID.
/// Collisions need the same millisecond and suffix.
fn toast_id(now_ms: u64) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}{}", now_ms, &suffix[..9])
}

fn now_ms() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default()
}
