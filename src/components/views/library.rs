use crate::components::views::TrackRow;
use crate::components::{AppState, AppView, Icon, Navigation};
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum LibraryTab {
    Liked,
    Playlists,
}

#[component]
pub fn LibraryView() -> Element {
    let state = use_context::<AppState>();
    let navigation = use_context::<Navigation>();
    let mut session = state.session;
    let mut auth_open = state.auth_open;
    let mut active_tab = use_signal(|| LibraryTab::Liked);

    if !session.read().is_signed_in() {
        return rsx! {
            div { class: "text-center py-24 bg-zinc-900/20 rounded-3xl border border-dashed border-zinc-800",
                Icon { name: "lock".to_string(), class: "mx-auto text-zinc-700 mb-4 w-12 h-12".to_string() }
                h3 { class: "text-xl font-bold text-zinc-400", "Your library is locked." }
                p { class: "text-zinc-600 text-sm mt-2 mb-6", "Sign in to hoard liked songs and playlists." }
                button {
                    class: "bg-emerald-500 text-black px-6 py-2 rounded-full font-bold text-sm hover:bg-emerald-400 transition-colors",
                    onclick: move |_| auth_open.set(true),
                    "Sign In"
                }
            }
        };
    }

    let tab = active_tab();
    let liked = session.read().liked_tracks();
    let playlists = session.read().playlists().to_vec();

    let on_create_playlist = move |_| {
        if let Some(id) = session.write().create_playlist(None) {
            navigation.navigate_to(AppView::PlaylistDetail(id));
        }
    };

    let tab_class = |selected: bool| {
        if selected {
            "text-xl font-black italic tracking-tighter pb-4 relative transition-colors text-white border-b-2 border-emerald-500"
        } else {
            "text-xl font-black italic tracking-tighter pb-4 relative transition-colors text-zinc-500 hover:text-zinc-300"
        }
    };

    rsx! {
        div { class: "space-y-8",
            div { class: "flex items-center justify-between border-b border-zinc-800",
                div { class: "flex gap-8",
                    button {
                        class: tab_class(tab == LibraryTab::Liked),
                        onclick: move |_| active_tab.set(LibraryTab::Liked),
                        "LIKED SONGS"
                    }
                    button {
                        class: tab_class(tab == LibraryTab::Playlists),
                        onclick: move |_| active_tab.set(LibraryTab::Playlists),
                        "YOUR PLAYLISTS"
                    }
                }
                if tab == LibraryTab::Playlists {
                    button {
                        class: "mb-4 bg-emerald-500/10 text-emerald-500 border border-emerald-500/20 px-4 py-2 rounded-xl text-sm font-bold flex items-center gap-2 hover:bg-emerald-500/20 transition-all",
                        onclick: on_create_playlist,
                        Icon { name: "plus".to_string(), class: "w-4 h-4".to_string() }
                        "NEW PLAYLIST"
                    }
                }
            }

            {match tab {
                LibraryTab::Liked => rsx! {
                    div { class: "space-y-2",
                        if liked.is_empty() {
                            div { class: "text-center py-20 bg-zinc-900/20 rounded-3xl border border-dashed border-zinc-800",
                                Icon { name: "heart".to_string(), class: "mx-auto text-zinc-700 mb-4 w-12 h-12".to_string() }
                                h3 { class: "text-xl font-bold text-zinc-500", "No liked songs yet." }
                                p { class: "text-zinc-600 text-sm mt-2", "Start hearting some toxic tunes." }
                            }
                        } else {
                            for (index, track) in liked.into_iter().enumerate() {
                                TrackRow { key: "{track.id}", track: track.clone(), index: index }
                            }
                        }
                    }
                },
                LibraryTab::Playlists => rsx! {
                    div { class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6",
                        for playlist in playlists {
                            button {
                                key: "{playlist.id}",
                                class: "group text-left bg-zinc-900/30 p-4 rounded-2xl hover:bg-zinc-800/50 transition-all border border-zinc-900 hover:border-zinc-700",
                                onclick: {
                                    let id = playlist.id.clone();
                                    move |_| navigation.navigate_to(AppView::PlaylistDetail(id.clone()))
                                },
                                div { class: "aspect-square rounded-xl overflow-hidden mb-4 shadow-xl",
                                    img {
                                        src: "{playlist.cover_url}",
                                        alt: "{playlist.name}",
                                        class: "w-full h-full object-cover group-hover:scale-110 transition-transform duration-500",
                                    }
                                }
                                h4 { class: "font-bold truncate text-white", "{playlist.name}" }
                                p { class: "text-xs text-zinc-500 truncate mt-1", "{playlist.songs.len()} Tracks" }
                            }
                        }
                        button {
                            class: "aspect-square rounded-2xl border-2 border-dashed border-zinc-800 flex flex-col items-center justify-center gap-4 text-zinc-500 hover:text-emerald-500 hover:border-emerald-500/50 hover:bg-emerald-500/5 transition-all group",
                            onclick: on_create_playlist,
                            div { class: "w-12 h-12 rounded-full bg-zinc-900 flex items-center justify-center group-hover:bg-emerald-500 group-hover:text-black transition-all",
                                Icon { name: "plus".to_string(), class: "w-6 h-6".to_string() }
                            }
                            span { class: "font-bold uppercase tracking-tighter text-sm", "Create New" }
                        }
                    }
                },
            }}
        }
    }
}
