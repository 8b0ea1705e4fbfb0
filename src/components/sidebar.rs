use crate::components::{primary_views, AppState, AppView, Icon, Navigation};
use dioxus::prelude::*;

#[component]
pub fn Sidebar() -> Element {
    let navigation = use_context::<Navigation>();
    let state = use_context::<AppState>();
    let mut session = state.session;
    let mut auth_open = state.auth_open;

    let signed_in = session.read().is_signed_in();

    let on_create_playlist = move |_| {
        if !signed_in {
            auth_open.set(true);
            return;
        }
        if let Some(id) = session.write().create_playlist(None) {
            navigation.navigate_to(AppView::PlaylistDetail(id));
        }
    };

    let on_liked_songs = move |_| {
        if signed_in {
            navigation.navigate_to(AppView::Library);
        } else {
            auth_open.set(true);
        }
    };

    rsx! {
        aside { class: "w-64 bg-zinc-950 border-r border-zinc-800 hidden md:flex flex-col p-4 h-full",
            // Logo
            div { class: "flex items-center gap-2 mb-8 px-2",
                div { class: "w-8 h-8 bg-emerald-500 rounded-full flex items-center justify-center font-bold text-black rotate-12",
                    "T"
                }
                h1 { class: "text-2xl font-black tracking-tighter text-emerald-500 italic",
                    "TOXICFY"
                }
            }

            // Navigation
            nav { class: "flex-1 space-y-1",
                for (target, icon, label) in primary_views() {
                    NavItem {
                        key: "{label}",
                        icon: icon,
                        label: label,
                        active: navigation.is_at(&target),
                        onclick: {
                            let target = target.clone();
                            move |_| navigation.navigate_to(target.clone())
                        },
                    }
                }
            }

            div { class: "pt-8 mt-8 border-t border-zinc-900",
                NavItem {
                    icon: "plus-circle",
                    label: "Create Playlist",
                    active: false,
                    onclick: on_create_playlist,
                }
                NavItem {
                    icon: "heart",
                    label: "Liked Songs",
                    active: false,
                    onclick: on_liked_songs,
                }
            }

            div { class: "mt-auto p-4 bg-emerald-950/20 rounded-xl border border-emerald-900/50",
                p { class: "text-xs text-emerald-500 font-bold uppercase mb-1", "Upgrade Your Vibe" }
                p { class: "text-xs text-zinc-400 leading-relaxed mb-3",
                    "Go Toxic Premium for zero interruptions."
                }
                button { class: "w-full py-2 bg-emerald-500 text-black font-bold text-xs rounded-lg hover:bg-emerald-400 transition-colors",
                    "GET PREMIUM"
                }
            }
        }
    }
}

#[component]
fn NavItem(icon: String, label: String, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let base_class = "w-full flex items-center gap-4 px-3 py-3 rounded-lg transition-colors font-medium";
    let active_class = if active {
        "bg-zinc-900 text-emerald-400"
    } else {
        "text-zinc-400 hover:text-white hover:bg-zinc-900"
    };

    rsx! {
        button {
            class: "{base_class} {active_class}",
            onclick: move |e| onclick.call(e),
            Icon { name: icon.clone(), class: "w-5 h-5".to_string() }
            span { "{label}" }
        }
    }
}
