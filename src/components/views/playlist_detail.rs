use crate::api::catalog;
use crate::components::views::TrackRow;
use crate::components::{AppState, Icon};
use dioxus::prelude::*;

#[component]
pub fn PlaylistDetailView(playlist_id: String) -> Element {
    let state = use_context::<AppState>();
    let mut playback = state.playback;
    let mut session = state.session;

    // The user's own copy wins over the built-in one with the same id.
    let owned = session.read().playlist(&playlist_id).cloned();
    let is_owned = owned.is_some();
    let Some(playlist) = owned.or_else(|| catalog::find_default_playlist(&playlist_id).cloned())
    else {
        return rsx! {
            div { class: "text-center py-24",
                Icon { name: "list".to_string(), class: "mx-auto text-zinc-700 mb-4 w-12 h-12".to_string() }
                h3 { class: "text-xl font-bold text-zinc-400", "Playlist not found." }
                p { class: "text-zinc-600 text-sm mt-2", "It probably dissolved." }
            }
        };
    };

    let tracks = catalog::resolve_tracks(&playlist.songs);
    let first_track = tracks.first().map(|track| (*track).clone());
    let suggestions: Vec<_> = catalog::tracks()
        .iter()
        .filter(|track| !playlist.songs.contains(&track.id))
        .collect();

    let on_play_all = move |_| {
        if let Some(track) = first_track.clone() {
            playback.write().play(track);
        }
    };

    rsx! {
        div { class: "space-y-10",
            div { class: "flex flex-col md:flex-row items-end gap-8",
                img {
                    src: "{playlist.cover_url}",
                    alt: "{playlist.name}",
                    class: "w-52 h-52 rounded-2xl object-cover shadow-2xl",
                }
                div { class: "flex-1 min-w-0",
                    span { class: "text-xs uppercase tracking-[0.3em] text-emerald-500 font-bold", "Playlist" }
                    h1 { class: "text-5xl font-black italic tracking-tighter mt-2 truncate", "{playlist.name}" }
                    p { class: "text-zinc-500 mt-3", "{playlist.description}" }
                    p { class: "text-xs font-mono uppercase text-zinc-400 mt-3", "{tracks.len()} Tracks" }
                }
                button {
                    class: "w-14 h-14 rounded-full bg-emerald-500 text-black flex items-center justify-center hover:scale-105 transition-transform disabled:opacity-40",
                    aria_label: "Play",
                    disabled: tracks.is_empty(),
                    onclick: on_play_all,
                    Icon { name: "play".to_string(), class: "w-6 h-6".to_string() }
                }
            }

            div { class: "space-y-2",
                if tracks.is_empty() {
                    div { class: "text-center py-16 bg-zinc-900/20 rounded-3xl border border-dashed border-zinc-800",
                        Icon { name: "music".to_string(), class: "mx-auto text-zinc-700 mb-4 w-10 h-10".to_string() }
                        p { class: "text-zinc-500", "Empty. Just like your soul." }
                    }
                } else {
                    for (index, track) in tracks.iter().enumerate() {
                        TrackRow { key: "{index}-{track.id}", track: (*track).clone(), index: index }
                    }
                }
            }

            if is_owned && !suggestions.is_empty() {
                section {
                    h2 { class: "text-2xl font-black italic tracking-tighter uppercase mb-4", "Add Something Corrosive" }
                    div { class: "space-y-2",
                        for track in suggestions {
                            div {
                                key: "{track.id}",
                                class: "flex items-center justify-between p-3 rounded-xl hover:bg-zinc-800/40 transition-all",
                                div { class: "flex items-center gap-4 min-w-0",
                                    img { src: "{track.cover_url}", alt: "{track.title}", class: "w-10 h-10 rounded-lg object-cover" }
                                    div { class: "min-w-0",
                                        p { class: "font-bold text-sm truncate", "{track.title}" }
                                        p { class: "text-xs text-zinc-500 truncate", "{track.artist}" }
                                    }
                                }
                                button {
                                    class: "p-2 rounded-full border border-zinc-700 text-zinc-400 hover:text-emerald-500 hover:border-emerald-500 transition-colors",
                                    aria_label: "Add to playlist",
                                    onclick: {
                                        let playlist_id = playlist.id.clone();
                                        let track_id = track.id.clone();
                                        move |_| {
                                            session.write().add_to_playlist(&playlist_id, &track_id);
                                        }
                                    },
                                    Icon { name: "plus".to_string(), class: "w-4 h-4".to_string() }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
