use crate::api::models::format_duration;
use crate::components::{AppState, Icon};
use dioxus::prelude::*;

fn percent_from_event(e: &Event<FormData>) -> Option<f64> {
    e.value()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(0.0, 100.0) / 100.0)
}

#[component]
pub fn Player() -> Element {
    let state = use_context::<AppState>();
    let mut playback = state.playback;
    let mut session = state.session;
    let mut auth_open = state.auth_open;

    let snapshot = playback.read().state().clone();
    let duration = playback.read().duration_secs();
    let silent = playback.read().effective_volume() == 0.0;
    let current_track = snapshot.current.clone();
    let is_liked = current_track
        .as_ref()
        .map(|track| session.read().is_liked(&track.id))
        .unwrap_or(false);

    let on_seek = move |e: Event<FormData>| {
        if let Some(fraction) = percent_from_event(&e) {
            playback.write().seek(fraction);
        }
    };

    let on_volume_change = move |e: Event<FormData>| {
        if let Some(fraction) = percent_from_event(&e) {
            playback.write().set_volume(fraction);
        }
    };

    let on_like = {
        let track_id = current_track.as_ref().map(|track| track.id.clone());
        move |_| {
            let Some(track_id) = track_id.clone() else {
                return;
            };
            if session.write().toggle_like(&track_id).is_none() {
                auth_open.set(true);
            }
        }
    };

    let volume_percent = (snapshot.volume * 100.0).round() as i32;
    let progress_percent = (snapshot.progress * 100.0).round() as i32;

    rsx! {
        if let Some(message) = snapshot.last_error.clone() {
            div { class: "fixed left-0 right-0 bottom-28 md:bottom-24 px-3 md:px-6 z-[60]",
                div { class: "rounded-lg border border-rose-500/35 bg-rose-500/10 px-3 py-2 text-xs text-rose-200 shadow-lg flex items-center justify-center gap-3",
                    span { "{message}" }
                    button {
                        class: "text-rose-300 hover:text-white",
                        aria_label: "Dismiss",
                        onclick: move |_| playback.write().dismiss_error(),
                        Icon { name: "x".to_string(), class: "w-3 h-3".to_string() }
                    }
                }
            }
        }
        div { class: "player-shell fixed bottom-0 left-0 right-0 bg-zinc-950/90 backdrop-blur-xl border-t border-zinc-800/60 z-50 md:h-24",
            div { class: "h-full flex flex-col md:flex-row md:items-center md:justify-between px-4 md:px-6 gap-3 md:gap-8 py-2 md:py-0",
                // Now playing info
                div { class: "flex items-center gap-3 md:gap-4 min-w-0 w-full md:w-1/4",
                    {match &current_track {
                        Some(track) => rsx! {
                            div { class: "w-12 h-12 md:w-14 md:h-14 rounded-lg bg-zinc-800 flex-shrink-0 overflow-hidden shadow-lg",
                                img {
                                    src: "{track.cover_url}",
                                    alt: "{track.title}",
                                    class: "w-full h-full object-cover",
                                    loading: "lazy",
                                }
                            }
                            div { class: "min-w-0 flex-1",
                                p { class: "text-sm font-medium text-white truncate", "{track.title}" }
                                p { class: "text-xs text-zinc-400 truncate", "{track.artist}" }
                            }
                            button {
                                class: if is_liked { "p-2 text-emerald-400 hover:text-emerald-300 transition-colors flex-shrink-0" } else { "p-2 text-zinc-400 hover:text-emerald-400 transition-colors flex-shrink-0" },
                                aria_label: "Like",
                                onclick: on_like,
                                Icon {
                                    name: if is_liked { "heart-filled".to_string() } else { "heart".to_string() },
                                    class: "w-5 h-5".to_string(),
                                }
                            }
                        },
                        None => rsx! {
                            div { class: "w-14 h-14 rounded-lg bg-zinc-800/50 flex items-center justify-center",
                                Icon { name: "music".to_string(), class: "w-6 h-6 text-zinc-600".to_string() }
                            }
                            div { class: "min-w-0 flex-1",
                                p { class: "text-sm text-zinc-500", "No track playing" }
                                p { class: "text-xs text-zinc-600", "Select a song to start" }
                            }
                        },
                    }}
                }

                // Player controls
                div { class: "flex flex-col items-center gap-2 w-full md:flex-1 md:max-w-2xl",
                    div { class: "flex items-center gap-6 justify-center",
                        button {
                            class: "p-2 text-zinc-400 hover:text-white transition-colors",
                            aria_label: "Previous",
                            onclick: move |_| playback.write().previous(),
                            Icon { name: "prev".to_string(), class: "w-5 h-5".to_string() }
                        }
                        button {
                            class: "w-10 h-10 rounded-full bg-white text-black flex items-center justify-center hover:scale-105 transition-transform disabled:opacity-40",
                            aria_label: if snapshot.is_playing { "Pause" } else { "Play" },
                            disabled: current_track.is_none(),
                            onclick: move |_| playback.write().toggle_play(),
                            Icon {
                                name: if snapshot.is_playing { "pause".to_string() } else { "play".to_string() },
                                class: "w-5 h-5".to_string(),
                            }
                        }
                        button {
                            class: "p-2 text-zinc-400 hover:text-white transition-colors",
                            aria_label: "Next",
                            onclick: move |_| playback.write().next(),
                            Icon { name: "next".to_string(), class: "w-5 h-5".to_string() }
                        }
                    }
                    // Progress bar
                    div { class: "flex items-center gap-2 md:gap-3 w-full",
                        span { class: "text-xs text-zinc-500 w-10 text-right",
                            {format_duration(snapshot.position_secs as u32)}
                        }
                        input {
                            r#type: "range",
                            min: "0",
                            max: "100",
                            disabled: current_track.is_none(),
                            value: progress_percent,
                            class: "flex-1 h-1.5 bg-zinc-800 rounded-full appearance-none cursor-pointer accent-emerald-500",
                            onchange: on_seek,
                        }
                        span { class: "text-xs text-zinc-500 w-10",
                            {
                                if duration > 0.0 {
                                    format_duration(duration as u32)
                                } else {
                                    "--:--".to_string()
                                }
                            }
                        }
                    }
                }

                // Volume
                div { class: "hidden md:flex items-center w-1/4 justify-end gap-3",
                    button {
                        class: "p-2 text-zinc-400 hover:text-white transition-colors",
                        aria_label: if snapshot.muted { "Unmute" } else { "Mute" },
                        onclick: move |_| playback.write().toggle_mute(),
                        Icon {
                            name: if silent { "volume-x".to_string() } else { "volume".to_string() },
                            class: "w-5 h-5".to_string(),
                        }
                    }
                    input {
                        r#type: "range",
                        min: "0",
                        max: "100",
                        value: volume_percent,
                        class: "w-24 h-1.5 bg-zinc-800 rounded-full appearance-none cursor-pointer accent-zinc-400",
                        oninput: on_volume_change,
                    }
                }
            }
        }
    }
}
