use crate::api::models::{Playlist, Track};
use crate::api::{catalog, Assistant, AssistantReply};
use crate::components::{AppState, AppView, Icon, Navigation};
use dioxus::prelude::*;

#[component]
pub fn HomeView() -> Element {
    let navigation = use_context::<Navigation>();

    rsx! {
        div { class: "space-y-12 pb-24",
            section {
                div { class: "flex items-end justify-between mb-6",
                    div {
                        h2 { class: "text-4xl font-black italic tracking-tighter text-white mb-2 uppercase",
                            "Corrosive Hits"
                        }
                        p { class: "text-zinc-500 font-medium",
                            "Top trending tracks that'll dissolve your speakers."
                        }
                    }
                    button {
                        class: "text-emerald-500 font-bold hover:underline text-sm uppercase tracking-widest",
                        onclick: move |_| navigation.navigate_to(AppView::Search),
                        "See All"
                    }
                }
                div { class: "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-5 xl:grid-cols-6 gap-6",
                    for track in catalog::tracks().iter() {
                        TrackCard { key: "{track.id}", track: track.clone() }
                    }
                }
            }

            section {
                h2 { class: "text-3xl font-black italic tracking-tighter text-white mb-6 uppercase",
                    "For Your Meltdown"
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                    for playlist in catalog::default_playlists().iter() {
                        PlaylistCard { key: "{playlist.id}", playlist: playlist.clone() }
                    }
                }
            }

            MoodPanel {}
        }
    }
}

/// Grid tile; clicking anywhere plays the track.
#[component]
pub fn TrackCard(track: Track) -> Element {
    let state = use_context::<AppState>();
    let mut playback = state.playback;

    let is_current = playback
        .read()
        .current()
        .map(|current| current.id == track.id)
        .unwrap_or(false);

    let on_play = {
        let track = track.clone();
        move |_| playback.write().play(track.clone())
    };

    rsx! {
        div {
            class: if is_current { "group bg-zinc-800/60 p-4 rounded-2xl transition-all cursor-pointer border border-emerald-500/40" } else { "group bg-zinc-900/30 p-4 rounded-2xl hover:bg-zinc-800/50 transition-all cursor-pointer border border-zinc-900 hover:border-zinc-700" },
            onclick: on_play,
            div { class: "relative aspect-square mb-4 shadow-2xl rounded-xl overflow-hidden",
                img {
                    src: "{track.cover_url}",
                    alt: "{track.title}",
                    class: "w-full h-full object-cover group-hover:scale-110 transition-transform duration-700",
                    loading: "lazy",
                }
                div { class: "absolute bottom-2 right-2 translate-y-4 opacity-0 group-hover:translate-y-0 group-hover:opacity-100 transition-all duration-300",
                    div { class: "w-12 h-12 bg-emerald-500 rounded-full flex items-center justify-center shadow-lg shadow-black/50 text-black",
                        Icon { name: "play".to_string(), class: "w-6 h-6".to_string() }
                    }
                }
            }
            h3 { class: "font-bold text-white truncate leading-tight mb-1", "{track.title}" }
            p { class: "text-xs text-zinc-500 truncate font-medium uppercase tracking-tighter",
                "{track.artist}"
            }
        }
    }
}

#[component]
pub fn PlaylistCard(playlist: Playlist) -> Element {
    let navigation = use_context::<Navigation>();
    let track_count = playlist.songs.len();

    let on_open = {
        let id = playlist.id.clone();
        move |_| navigation.navigate_to(AppView::PlaylistDetail(id.clone()))
    };

    rsx! {
        div {
            class: "flex gap-6 p-6 bg-zinc-900/40 rounded-3xl border border-zinc-800 hover:bg-zinc-800/60 transition-all group cursor-pointer",
            onclick: on_open,
            div { class: "w-32 h-32 flex-shrink-0 shadow-2xl rounded-xl overflow-hidden relative",
                img { src: "{playlist.cover_url}", alt: "{playlist.name}", class: "w-full h-full object-cover" }
                div { class: "absolute inset-0 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity text-white",
                    Icon { name: "play".to_string(), class: "w-10 h-10".to_string() }
                }
            }
            div { class: "flex flex-col justify-center min-w-0",
                h3 { class: "text-2xl font-bold mb-2 truncate", "{playlist.name}" }
                p { class: "text-zinc-500 text-sm mb-4 line-clamp-2", "{playlist.description}" }
                span { class: "text-xs font-mono uppercase text-zinc-400", "{track_count} Tracks" }
            }
        }
    }
}

/// List row with like and add-to-playlist actions.
#[component]
pub fn TrackRow(track: Track, index: usize) -> Element {
    let state = use_context::<AppState>();
    let mut playback = state.playback;
    let mut session = state.session;
    let mut auth_open = state.auth_open;
    let mut menu_open = use_signal(|| false);

    let is_liked = session.read().is_liked(&track.id);
    let is_current = playback
        .read()
        .current()
        .map(|current| current.id == track.id)
        .unwrap_or(false);
    let playlists: Vec<(String, String)> = session
        .read()
        .playlists()
        .iter()
        .map(|playlist| (playlist.id.clone(), playlist.name.clone()))
        .collect();

    let on_play = {
        let track = track.clone();
        move |_| playback.write().play(track.clone())
    };

    let on_like = {
        let track_id = track.id.clone();
        move |evt: MouseEvent| {
            evt.stop_propagation();
            if session.write().toggle_like(&track_id).is_none() {
                auth_open.set(true);
            }
        }
    };

    let on_menu = move |evt: MouseEvent| {
        evt.stop_propagation();
        if !session.peek().is_signed_in() {
            auth_open.set(true);
            return;
        }
        menu_open.set(!menu_open());
    };

    rsx! {
        div {
            class: "group relative flex items-center justify-between p-3 rounded-xl hover:bg-zinc-800/40 transition-all cursor-pointer",
            onclick: on_play,
            div { class: "flex items-center gap-4 min-w-0",
                span { class: if is_current { "w-4 text-emerald-500 font-mono text-xs" } else { "w-4 text-zinc-600 font-mono text-xs" },
                    "{index + 1}"
                }
                div { class: "w-12 h-12 rounded-lg overflow-hidden relative flex-shrink-0",
                    img { src: "{track.cover_url}", alt: "{track.title}", class: "w-full h-full object-cover" }
                    div { class: "absolute inset-0 bg-black/40 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity text-white",
                        Icon { name: "play".to_string(), class: "w-4 h-4".to_string() }
                    }
                }
                div { class: "min-w-0",
                    h4 { class: if is_current { "font-bold text-sm text-emerald-400 leading-tight truncate" } else { "font-bold text-sm text-white leading-tight truncate" },
                        "{track.title}"
                    }
                    p { class: "text-xs text-zinc-500 font-medium truncate",
                        "{track.artist}"
                        if let Some(language) = track.language {
                            span { class: "ml-2 px-1.5 py-0.5 rounded bg-zinc-800 text-[10px] uppercase tracking-wider text-zinc-400",
                                "{language.label()}"
                            }
                        }
                    }
                }
            }
            div { class: "flex items-center gap-6",
                div { class: "text-xs text-zinc-600 font-mono", "{track.duration}" }
                button {
                    class: if is_liked { "text-emerald-500 hover:text-red-500 transition-colors" } else { "text-zinc-500 hover:text-emerald-500 transition-colors" },
                    aria_label: if is_liked { "Unlike" } else { "Like" },
                    onclick: on_like,
                    Icon {
                        name: if is_liked { "heart-filled".to_string() } else { "heart".to_string() },
                        class: "w-4 h-4".to_string(),
                    }
                }
                button {
                    class: "text-zinc-500 hover:text-white transition-colors",
                    aria_label: "Add to playlist",
                    onclick: on_menu,
                    Icon { name: "more".to_string(), class: "w-4 h-4".to_string() }
                }
            }
            if menu_open() {
                div {
                    class: "absolute right-3 top-full mt-1 z-30 w-56 rounded-xl border border-zinc-800 bg-zinc-900 shadow-2xl py-2",
                    onclick: move |evt: MouseEvent| evt.stop_propagation(),
                    p { class: "px-4 pb-2 text-[10px] uppercase tracking-widest text-zinc-500", "Add to playlist" }
                    if playlists.is_empty() {
                        p { class: "px-4 py-2 text-xs text-zinc-500", "No playlists yet." }
                    }
                    for (playlist_id, name) in playlists {
                        button {
                            key: "{playlist_id}",
                            class: "w-full text-left px-4 py-2 text-sm text-zinc-300 hover:bg-zinc-800 hover:text-white truncate",
                            onclick: {
                                let playlist_id = playlist_id.clone();
                                let track_id = track.id.clone();
                                move |_| {
                                    session.write().add_to_playlist(&playlist_id, &track_id);
                                    menu_open.set(false);
                                }
                            },
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}

/// The mood to send, or `None` while a verdict is pending or the box is blank.
fn mood_query(raw: &str, busy: bool) -> Option<String> {
    let text = raw.trim();
    (!busy && !text.is_empty()).then(|| text.to_string())
}

/// One-shot judgmental recommendation for a typed mood.
#[component]
fn MoodPanel() -> Element {
    let assistant = use_context::<Assistant>();
    let navigation = use_context::<Navigation>();
    let mut mood = use_signal(String::new);
    let mut verdict = use_signal(|| None::<AssistantReply>);
    let mut loading = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let Some(text) = mood_query(&mood.peek(), *loading.peek()) else {
            return;
        };
        loading.set(true);
        let assistant = assistant.clone();
        spawn(async move {
            let reply = assistant.recommend_for_mood(&text).await;
            verdict.set(Some(reply));
            loading.set(false);
        });
    };

    let busy = loading();

    rsx! {
        section { class: "bg-emerald-500/5 border border-emerald-500/20 p-8 rounded-3xl relative overflow-hidden",
            div { class: "absolute -right-20 -top-20 w-64 h-64 bg-emerald-500/10 blur-[100px] rounded-full" }
            div { class: "relative z-10 flex flex-col md:flex-row items-center justify-between gap-8",
                div { class: "max-w-xl w-full",
                    span { class: "text-emerald-500 text-xs font-bold uppercase tracking-[0.3em] mb-4 block",
                        "Experimental Feature"
                    }
                    h2 { class: "text-4xl font-black italic tracking-tighter mb-4",
                        "WANT AN ACTUAL RECOMMENDATION?"
                    }
                    p { class: "text-zinc-400 font-medium mb-6",
                        "Our AI doesn't care about your feelings, but it knows what's good. Tell it your mood and brace yourself."
                    }
                    form { class: "flex gap-3 mb-4", onsubmit: on_submit,
                        input {
                            r#type: "text",
                            placeholder: "Describe your mood...",
                            value: "{mood}",
                            class: "flex-1 bg-zinc-900 border border-zinc-800 rounded-xl px-4 py-3 text-sm outline-none focus:ring-2 focus:ring-emerald-500",
                            oninput: move |e| mood.set(e.value()),
                        }
                        button {
                            r#type: "submit",
                            disabled: mood_query(&mood(), busy).is_none(),
                            class: "bg-zinc-800 text-emerald-400 px-4 py-3 rounded-xl text-sm font-bold hover:bg-zinc-700 disabled:opacity-50 transition-all",
                            if busy { "JUDGING..." } else { "JUDGE ME" }
                        }
                    }
                    if let Some(reply) = verdict() {
                        p {
                            class: if reply.is_fallback() { "mb-6 p-4 rounded-2xl bg-zinc-900 border border-zinc-800 text-zinc-400 italic text-sm leading-relaxed" } else { "mb-6 p-4 rounded-2xl bg-emerald-500/10 border border-emerald-500/20 text-emerald-100 text-sm leading-relaxed" },
                            "{reply.message.content}"
                        }
                    }
                    button {
                        class: "bg-emerald-500 text-black px-8 py-3 rounded-xl font-bold hover:bg-emerald-400 transition-all flex items-center gap-2 group",
                        onclick: move |_| navigation.navigate_to(AppView::AiChat),
                        "TALK TO TOXIC AI"
                        Icon { name: "play".to_string(), class: "w-3.5 h-3.5 group-hover:translate-x-1 transition-transform".to_string() }
                    }
                }
                div { class: "w-48 h-48 bg-emerald-500 rounded-full flex items-center justify-center shadow-[0_0_50px_rgba(16,185,129,0.3)] animate-pulse text-black flex-shrink-0",
                    Icon { name: "sparkles".to_string(), class: "w-20 h-20".to_string() }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_query_trims_and_waits_for_the_pending_verdict() {
        assert_eq!(mood_query("  sad and loud ", false).as_deref(), Some("sad and loud"));
        assert_eq!(mood_query("sad and loud", true), None);
        assert_eq!(mood_query("   ", false), None);
    }
}
