//! Audio Manager - binds the playback controller to the host media element.
//! The web build drives an `HtmlAudioElement` directly; the desktop build talks
//! to an `<audio>` tag inside the webview through a small JavaScript bridge.

use crate::components::AppState;
use crate::state::playback::PlaybackState;
use crate::state::{MediaBackend, PlaybackController};
use crate::utils::sleep_ms;
use dioxus::prelude::*;
use serde::Deserialize;

#[cfg(target_arch = "wasm32")]
use std::cell::{Cell, RefCell};
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

const AUDIO_ELEMENT_ID: &str = "toxicfy-audio";
const POLL_INTERVAL_MS: u64 = 200;

pub type Playback = PlaybackController<AudioElement>;

/// What the media element reports on each poll.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MediaSnapshot {
    #[serde(default)]
    pub current_time: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub ended: bool,
    #[serde(default)]
    pub rejected: Option<String>,
}

/// Handle to the page's single audio output.
#[derive(Default)]
pub struct AudioElement {
    #[cfg(target_arch = "wasm32")]
    rejected: Rc<RefCell<Option<String>>>,
    /// Bumped on every `load`; a `play` promise only reports against its own load.
    #[cfg(target_arch = "wasm32")]
    load_id: Rc<Cell<u64>>,
}

/// A refused `play()` matters only while its source is still loaded. Browsers
/// abort a pending `play()` with `AbortError` when the source changes or playback pauses.
#[cfg(any(target_arch = "wasm32", test))]
fn should_report_rejection(play_load: u64, current_load: u64, error_name: Option<&str>) -> bool {
    play_load == current_load && error_name != Some("AbortError")
}

/// Initialize the global audio element once.
#[cfg(target_arch = "wasm32")]
fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(target_arch = "wasm32")]
fn js_error_text(value: &wasm_bindgen::JsValue) -> String {
    js_sys::Reflect::get(value, &"message".into())
        .ok()
        .and_then(|message| message.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "Playback was blocked by the browser.".to_string())
}

#[cfg(target_arch = "wasm32")]
fn js_error_name(value: &wasm_bindgen::JsValue) -> Option<String> {
    js_sys::Reflect::get(value, &"name".into())
        .ok()
        .and_then(|name| name.as_string())
}

#[cfg(target_arch = "wasm32")]
impl AudioElement {
    fn snapshot(&self) -> Option<MediaSnapshot> {
        let audio = get_or_create_audio_element()?;
        let duration = audio.duration();
        Some(MediaSnapshot {
            current_time: audio.current_time(),
            duration: if duration.is_finite() { duration } else { 0.0 },
            ended: audio.ended(),
            rejected: self.rejected.borrow_mut().take(),
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl MediaBackend for AudioElement {
    fn load(&mut self, src: &str) {
        self.rejected.borrow_mut().take();
        self.load_id.set(self.load_id.get().wrapping_add(1));
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_src(src);
        }
    }

    fn play(&mut self) -> Result<(), String> {
        let audio = get_or_create_audio_element()
            .ok_or_else(|| "Audio output is unavailable.".to_string())?;
        let promise = audio.play().map_err(|err| js_error_text(&err))?;
        let rejected = self.rejected.clone();
        let load_id = self.load_id.clone();
        let play_load = load_id.get();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                let name = js_error_name(&err);
                if should_report_rejection(play_load, load_id.get(), name.as_deref()) {
                    *rejected.borrow_mut() = Some(js_error_text(&err));
                }
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(audio) = get_or_create_audio_element() {
            let _ = audio.pause();
        }
    }

    fn seek(&mut self, position_secs: f64) {
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_current_time(position_secs.max(0.0));
        }
    }

    fn set_volume(&mut self, volume: f64) {
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_volume(volume.clamp(0.0, 1.0));
        }
    }

    fn set_muted(&mut self, muted: bool) {
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_muted(muted);
        }
    }
}

#[cfg(any(not(target_arch = "wasm32"), test))]
const AUDIO_ID_PLACEHOLDER: &str = "__TOXICFY_AUDIO_ID__";

#[cfg(any(not(target_arch = "wasm32"), test))]
const NATIVE_AUDIO_BOOTSTRAP_JS: &str = r#"
(() => {
  if (window.__toxicfyAudio) {
    return true;
  }

  const existing = document.getElementById("__TOXICFY_AUDIO_ID__");
  const audio = existing || document.createElement("audio");
  if (!existing) {
    audio.id = "__TOXICFY_AUDIO_ID__";
    audio.preload = "metadata";
    audio.style.display = "none";
    document.body.appendChild(audio);
  }

  let rejected = null;
  let loadId = 0;

  window.__toxicfyAudio = {
    apply(cmd) {
      switch (cmd.type) {
        case "load":
          loadId += 1;
          rejected = null;
          audio.src = cmd.src;
          break;
        case "play": {
          const playLoad = loadId;
          audio.play().catch((err) => {
            if (playLoad !== loadId || (err && err.name === "AbortError")) {
              return;
            }
            rejected = (err && err.message) ? err.message : String(err);
          });
          break;
        }
        case "pause":
          audio.pause();
          break;
        case "seek":
          audio.currentTime = Math.max(0, cmd.position || 0);
          break;
        case "volume":
          audio.volume = Math.min(1, Math.max(0, cmd.value));
          break;
        case "muted":
          audio.muted = !!cmd.value;
          break;
      }
    },
    snapshot() {
      const out = {
        current_time: Number.isFinite(audio.currentTime) ? audio.currentTime : 0,
        duration: Number.isFinite(audio.duration) ? audio.duration : 0,
        ended: audio.ended,
        rejected,
      };
      rejected = null;
      return out;
    },
  };
  return true;
})();
"#;

#[cfg(any(not(target_arch = "wasm32"), test))]
fn native_audio_bootstrap_script() -> String {
    NATIVE_AUDIO_BOOTSTRAP_JS.replace(AUDIO_ID_PLACEHOLDER, AUDIO_ELEMENT_ID)
}

#[cfg(not(target_arch = "wasm32"))]
fn native_audio_command(value: serde_json::Value) {
    let _ = document::eval(&native_audio_bootstrap_script());
    let payload = serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string());
    let script = format!(
        r#"(function () {{
            const bridge = window.__toxicfyAudio;
            if (!bridge) return false;
            bridge.apply({payload});
            return true;
        }})();"#
    );
    let _ = document::eval(&script);
}

#[cfg(not(target_arch = "wasm32"))]
async fn native_audio_snapshot() -> Option<MediaSnapshot> {
    let _ = document::eval(&native_audio_bootstrap_script());
    let eval = document::eval(
        r#"return (function () {
            const bridge = window.__toxicfyAudio;
            return bridge ? bridge.snapshot() : null;
        })();"#,
    );
    eval.join::<Option<MediaSnapshot>>().await.ok().flatten()
}

#[cfg(not(target_arch = "wasm32"))]
impl MediaBackend for AudioElement {
    fn load(&mut self, src: &str) {
        native_audio_command(serde_json::json!({ "type": "load", "src": src }));
    }

    /// Refusals arrive asynchronously through the snapshot.
    fn play(&mut self) -> Result<(), String> {
        native_audio_command(serde_json::json!({ "type": "play" }));
        Ok(())
    }

    fn pause(&mut self) {
        native_audio_command(serde_json::json!({ "type": "pause" }));
    }

    fn seek(&mut self, position_secs: f64) {
        native_audio_command(serde_json::json!({
            "type": "seek",
            "position": position_secs.max(0.0),
        }));
    }

    fn set_volume(&mut self, volume: f64) {
        native_audio_command(serde_json::json!({ "type": "volume", "value": volume }));
    }

    fn set_muted(&mut self, muted: bool) {
        native_audio_command(serde_json::json!({ "type": "muted", "value": muted }));
    }
}

#[cfg(target_arch = "wasm32")]
async fn poll_media(playback: Signal<Playback>) -> Option<MediaSnapshot> {
    playback.peek().media().snapshot()
}

#[cfg(not(target_arch = "wasm32"))]
async fn poll_media(_playback: Signal<Playback>) -> Option<MediaSnapshot> {
    native_audio_snapshot().await
}

/// Controller updates owed for one poll.
#[derive(Debug, Default, PartialEq)]
struct SnapshotEffects {
    time: Option<(f64, f64)>,
    rejected: Option<String>,
    ended: bool,
}

impl SnapshotEffects {
    fn is_empty(&self) -> bool {
        self.time.is_none() && self.rejected.is_none() && !self.ended
    }

    fn apply<M: MediaBackend>(self, controller: &mut PlaybackController<M>) {
        if let Some((position, duration)) = self.time {
            controller.time_update(position, duration);
        }
        if let Some(reason) = self.rejected {
            controller.playback_rejected(reason);
        }
        if self.ended {
            controller.ended();
        }
    }
}

/// `was_ended` carries edge detection across polls so one end advances once.
fn plan_snapshot(state: &PlaybackState, snapshot: MediaSnapshot, was_ended: &mut bool) -> SnapshotEffects {
    if state.current.is_none() {
        return SnapshotEffects::default();
    }

    let moved = (state.position_secs - snapshot.current_time).abs() >= 0.1
        || (state.media_duration_secs - snapshot.duration).abs() >= 0.5;
    let effects = SnapshotEffects {
        time: moved.then_some((snapshot.current_time, snapshot.duration)),
        rejected: snapshot.rejected,
        ended: snapshot.ended && !*was_ended,
    };
    *was_ended = snapshot.ended;
    effects
}

fn apply_snapshot(playback: &mut Signal<Playback>, snapshot: MediaSnapshot, was_ended: &mut bool) {
    let effects = plan_snapshot(playback.peek().state(), snapshot, was_ended);
    if !effects.is_empty() {
        effects.apply(&mut *playback.write());
    }
}

/// Owns the polling loop that turns media element progress into controller updates.
#[component]
pub fn AudioController() -> Element {
    let state = use_context::<AppState>();

    use_effect(move || {
        let mut playback = state.playback;
        spawn(async move {
            let mut was_ended = false;
            loop {
                sleep_ms(POLL_INTERVAL_MS).await;
                if let Some(snapshot) = poll_media(playback).await {
                    apply_snapshot(&mut playback, snapshot, &mut was_ended);
                }
            }
        });
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerConfig;
    use crate::state::playback::test_support::{track, RecordingMedia};

    fn playing(ids: &[&str]) -> PlaybackController<RecordingMedia> {
        let catalog = ids.iter().map(|id| track(id, "3:20")).collect();
        let mut player =
            PlaybackController::with_catalog(RecordingMedia::default(), catalog, &PlayerConfig::default());
        player.play(track(ids[0], "3:20"));
        player
    }

    fn feed(player: &mut PlaybackController<RecordingMedia>, snapshot: MediaSnapshot, was_ended: &mut bool) {
        plan_snapshot(player.state(), snapshot, was_ended).apply(player);
    }

    fn at(current_time: f64) -> MediaSnapshot {
        MediaSnapshot {
            current_time,
            duration: 200.0,
            ..MediaSnapshot::default()
        }
    }

    fn finished() -> MediaSnapshot {
        MediaSnapshot {
            ended: true,
            ..at(200.0)
        }
    }

    fn current_id(player: &PlaybackController<RecordingMedia>) -> &str {
        player.current().map(|t| t.id.as_str()).unwrap_or("")
    }

    #[test]
    fn ended_advances_once_per_end() {
        let mut player = playing(&["a", "b", "c"]);
        let mut was_ended = false;

        feed(&mut player, finished(), &mut was_ended);
        feed(&mut player, finished(), &mut was_ended);
        assert_eq!(current_id(&player), "b");

        feed(&mut player, at(0.0), &mut was_ended);
        feed(&mut player, finished(), &mut was_ended);
        assert_eq!(current_id(&player), "c");
    }

    #[test]
    fn rejection_stops_playback_and_surfaces_the_reason() {
        let mut player = playing(&["a"]);
        let mut was_ended = false;
        let refused = MediaSnapshot {
            rejected: Some("NotAllowedError".to_string()),
            ..MediaSnapshot::default()
        };

        feed(&mut player, refused, &mut was_ended);

        assert!(!player.is_playing());
        assert_eq!(player.state().last_error.as_deref(), Some("NotAllowedError"));
    }

    #[test]
    fn snapshots_without_a_track_change_nothing() {
        let player = PlaybackController::with_catalog(
            RecordingMedia::default(),
            vec![track("a", "3:20")],
            &PlayerConfig::default(),
        );
        let mut was_ended = false;
        let snapshot = MediaSnapshot {
            rejected: Some("blocked".to_string()),
            ..finished()
        };

        let effects = plan_snapshot(player.state(), snapshot, &mut was_ended);

        assert!(effects.is_empty());
        assert!(!was_ended);
    }

    #[test]
    fn position_jitter_below_the_threshold_is_ignored() {
        let mut player = playing(&["a"]);
        let mut was_ended = false;
        feed(&mut player, at(12.0), &mut was_ended);
        assert_eq!(player.state().position_secs, 12.0);

        let effects = plan_snapshot(player.state(), at(12.05), &mut was_ended);
        assert!(effects.is_empty());

        feed(&mut player, at(12.5), &mut was_ended);
        assert_eq!(player.state().position_secs, 12.5);
        assert_eq!(player.state().progress, 12.5 / 200.0);
    }

    #[test]
    fn stale_or_aborted_play_refusals_are_dropped() {
        assert!(should_report_rejection(3, 3, Some("NotAllowedError")));
        assert!(should_report_rejection(3, 3, None));
        assert!(!should_report_rejection(2, 3, Some("NotAllowedError")));
        assert!(!should_report_rejection(3, 3, Some("AbortError")));
    }

    #[test]
    fn bridge_script_targets_the_shared_audio_element() {
        let script = native_audio_bootstrap_script();
        assert!(script.contains(&format!("getElementById(\"{AUDIO_ELEMENT_ID}\")")));
        assert!(!script.contains(AUDIO_ID_PLACEHOLDER));
        assert!(script.contains("playLoad !== loadId"));
    }
}
