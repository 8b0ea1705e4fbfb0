//! Transport control for the single audio output.
//!
//! The controller owns the current track and the playing/volume/mute flags.
//! Decoding and output belong to whatever implements [`MediaBackend`]; on the
//! web that is an `HtmlAudioElement`, in tests it is a recorder.

use crate::api::catalog;
use crate::api::models::Track;
use crate::config::PlayerConfig;
use dioxus::logger::tracing::{debug, warn};

/// Commands the host media element understands.
pub trait MediaBackend {
    /// Replace the source. Anything still loading is abandoned.
    fn load(&mut self, src: &str);
    /// Start or resume. An `Err` means the host refused outright.
    fn play(&mut self) -> Result<(), String>;
    fn pause(&mut self);
    fn seek(&mut self, position_secs: f64);
    fn set_volume(&mut self, volume: f64);
    fn set_muted(&mut self, muted: bool);
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub current: Option<Track>,
    pub is_playing: bool,
    /// Fraction of the track already played, in [0, 1].
    pub progress: f64,
    pub position_secs: f64,
    /// Duration reported by the media element; 0 until it knows.
    pub media_duration_secs: f64,
    pub volume: f64,
    pub muted: bool,
    pub last_error: Option<String>,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current: None,
            is_playing: false,
            progress: 0.0,
            position_secs: 0.0,
            media_duration_secs: 0.0,
            volume: crate::config::DEFAULT_VOLUME,
            muted: false,
            last_error: None,
        }
    }
}

pub struct PlaybackController<M> {
    media: M,
    catalog: Vec<Track>,
    resume_on_skip: bool,
    state: PlaybackState,
}

fn clamp_fraction(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

impl<M: MediaBackend> PlaybackController<M> {
    /// Controller over the built-in catalog.
    pub fn new(media: M, config: &PlayerConfig) -> Self {
        Self::with_catalog(media, catalog::tracks().to_vec(), config)
    }

    pub fn with_catalog(mut media: M, catalog: Vec<Track>, config: &PlayerConfig) -> Self {
        let volume = clamp_fraction(config.initial_volume);
        media.set_volume(volume);
        Self {
            media,
            catalog,
            resume_on_skip: config.resume_on_skip,
            state: PlaybackState {
                volume,
                ..PlaybackState::default()
            },
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn current(&self) -> Option<&Track> {
        self.state.current.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn effective_volume(&self) -> f64 {
        if self.state.muted {
            0.0
        } else {
            self.state.volume
        }
    }

    /// Duration used for seeking: the media's own once known, else the track's nominal one.
    pub fn duration_secs(&self) -> f64 {
        if self.state.media_duration_secs.is_finite() && self.state.media_duration_secs > 0.0 {
            return self.state.media_duration_secs;
        }
        self.current()
            .and_then(Track::duration_secs)
            .map(f64::from)
            .unwrap_or(0.0)
    }

    pub fn play(&mut self, track: Track) {
        debug!(track = %track.id, "loading track");
        self.media.load(&track.audio_url);
        self.state.current = Some(track);
        self.state.progress = 0.0;
        self.state.position_secs = 0.0;
        self.state.media_duration_secs = 0.0;
        self.start();
    }

    pub fn toggle_play(&mut self) {
        if self.state.current.is_none() {
            return;
        }
        if self.state.is_playing {
            self.media.pause();
            self.state.is_playing = false;
        } else {
            self.start();
        }
    }

    pub fn next(&mut self) {
        self.skip(1);
    }

    pub fn previous(&mut self) {
        self.skip(-1);
    }

    /// End of track behaves exactly like `next`.
    pub fn ended(&mut self) {
        self.next();
    }

    /// Returns the absolute position sought to, or `None` without a track.
    pub fn seek(&mut self, fraction: f64) -> Option<f64> {
        self.state.current.as_ref()?;
        let fraction = clamp_fraction(fraction);
        let position = fraction * self.duration_secs();
        self.media.seek(position);
        self.state.progress = fraction;
        self.state.position_secs = position;
        Some(position)
    }

    pub fn set_volume(&mut self, fraction: f64) {
        if !fraction.is_finite() {
            return;
        }
        let volume = fraction.clamp(0.0, 1.0);
        self.state.volume = volume;
        self.media.set_volume(volume);
    }

    pub fn toggle_mute(&mut self) {
        self.state.muted = !self.state.muted;
        self.media.set_muted(self.state.muted);
    }

    /// Progress notification from the media pipeline.
    pub fn time_update(&mut self, current_secs: f64, duration_secs: f64) {
        let current_secs = if current_secs.is_finite() {
            current_secs.max(0.0)
        } else {
            0.0
        };
        self.state.position_secs = current_secs;
        if duration_secs.is_finite() && duration_secs > 0.0 {
            self.state.media_duration_secs = duration_secs;
            self.state.progress = clamp_fraction(current_secs / duration_secs);
        } else {
            self.state.media_duration_secs = 0.0;
            self.state.progress = 0.0;
        }
    }

    /// The host refused to play (autoplay policy, missing source, ...).
    pub fn playback_rejected(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!(%reason, "playback rejected");
        self.state.is_playing = false;
        self.state.last_error = Some(reason);
    }

    pub fn dismiss_error(&mut self) {
        self.state.last_error = None;
    }

    fn start(&mut self) {
        match self.media.play() {
            Ok(()) => {
                self.state.is_playing = true;
                self.state.last_error = None;
            }
            Err(reason) => self.playback_rejected(reason),
        }
    }

    fn skip(&mut self, step: isize) {
        let Some(current) = self.state.current.as_ref() else {
            return;
        };
        let len = self.catalog.len();
        if len == 0 {
            return;
        }

        let target = match self.catalog.iter().position(|track| track.id == current.id) {
            Some(index) => (index as isize + step).rem_euclid(len as isize) as usize,
            None if step >= 0 => 0,
            None => len - 1,
        };

        let was_playing = self.state.is_playing;
        let track = self.catalog[target].clone();
        if self.resume_on_skip || was_playing {
            self.play(track);
        } else {
            self.media.load(&track.audio_url);
            self.state.current = Some(track);
            self.state.progress = 0.0;
            self.state.position_secs = 0.0;
            self.state.media_duration_secs = 0.0;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum MediaCall {
        Load(String),
        Play,
        Pause,
        Seek(f64),
        Volume(f64),
        Muted(bool),
    }

    /// Records every command; optionally refuses `play`.
    #[derive(Debug, Default)]
    pub struct RecordingMedia {
        pub calls: Vec<MediaCall>,
        pub refuse_play: Option<String>,
    }

    impl RecordingMedia {
        pub fn last_seek(&self) -> Option<f64> {
            self.calls.iter().rev().find_map(|call| match call {
                MediaCall::Seek(position) => Some(*position),
                _ => None,
            })
        }
    }

    impl MediaBackend for RecordingMedia {
        fn load(&mut self, src: &str) {
            self.calls.push(MediaCall::Load(src.to_string()));
        }

        fn play(&mut self) -> Result<(), String> {
            self.calls.push(MediaCall::Play);
            match &self.refuse_play {
                Some(reason) => Err(reason.clone()),
                None => Ok(()),
            }
        }

        fn pause(&mut self) {
            self.calls.push(MediaCall::Pause);
        }

        fn seek(&mut self, position_secs: f64) {
            self.calls.push(MediaCall::Seek(position_secs));
        }

        fn set_volume(&mut self, volume: f64) {
            self.calls.push(MediaCall::Volume(volume));
        }

        fn set_muted(&mut self, muted: bool) {
            self.calls.push(MediaCall::Muted(muted));
        }
    }

    pub fn track(id: &str, duration: &str) -> Track {
        Track {
            id: id.to_string(),
            title: format!("Track {id}"),
            artist: "Tester".to_string(),
            album: "Fixtures".to_string(),
            cover_url: String::new(),
            duration: duration.to_string(),
            audio_url: format!("mem://{id}.mp3"),
            genre: "Noise".to_string(),
            language: None,
        }
    }
}
