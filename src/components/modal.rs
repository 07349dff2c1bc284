//! Player dialog state and the playback element it drives.

use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlMediaElement;

use crate::components::catalog::EpisodeRecord;

/// The single playback element behind the player dialog.
pub trait MediaElement {
    fn load_source(&self, src: &str);
    fn pause(&self);
    fn seek(&self, seconds: f64);
    fn current_position(&self) -> f64;
    /// Starts playback without waiting for it. A refusal is logged and otherwise ignored.
    fn request_play(&self);
}

impl MediaElement for HtmlMediaElement {
    fn load_source(&self, src: &str) {
        self.set_src(src);
        self.load();
    }

    fn pause(&self) {
        if let Err(e) = HtmlMediaElement::pause(self) {
            log::warn!("Failed to pause playback: {:?}", e);
        }
    }

    fn seek(&self, seconds: f64) {
        self.set_current_time(seconds);
    }

    fn current_position(&self) -> f64 {
        self.current_time()
    }

    fn request_play(&self) {
        match HtmlMediaElement::play(self) {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = wait_for_playback(promise).await {
                    log::warn!("Autoplay prevented: {:#}", e);
                }
            }),
            Err(e) => log::warn!("Autoplay prevented: {:?}", e),
        }
    }
}

async fn wait_for_playback(promise: js_sys::Promise) -> Result<(), anyhow::Error> {
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("play() was rejected: {:?}", e))?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        index: usize,
        episode: EpisodeRecord,
        position: f64,
    },
}

impl ModalState {
    /// Binds `episode` to the player. Whatever was playing before is stopped
    /// and rewound first, so two sources never overlap.
    pub fn open<M: MediaElement + ?Sized>(&mut self, index: usize, episode: EpisodeRecord, media: &M) {
        if self.is_open() {
            release(media);
        }

        log::debug!("Opening player for episode {} ({})", index, episode.media_path);
        media.load_source(&episode.media_path);
        *self = ModalState::Open {
            index,
            episode,
            position: 0.0,
        };
        media.request_play();
    }

    /// Returns false when the player was already closed.
    pub fn close<M: MediaElement + ?Sized>(&mut self, media: &M) -> bool {
        if !self.is_open() {
            return false;
        }

        release(media);
        log::debug!("Player closed");
        *self = ModalState::Closed;
        true
    }

    pub fn record_position(&mut self, seconds: f64) {
        if let ModalState::Open { position, .. } = self {
            *position = seconds.max(0.0);
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    pub fn episode(&self) -> Option<&EpisodeRecord> {
        match self {
            ModalState::Open { episode, .. } => Some(episode),
            ModalState::Closed => None,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            ModalState::Open { index, .. } => Some(*index),
            ModalState::Closed => None,
        }
    }

    pub fn position(&self) -> f64 {
        match self {
            ModalState::Open { position, .. } => *position,
            ModalState::Closed => 0.0,
        }
    }
}

fn release<M: MediaElement + ?Sized>(media: &M) {
    media.pause();
    media.seek(0.0);
}
