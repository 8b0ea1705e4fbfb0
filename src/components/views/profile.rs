use crate::components::{AppState, AppView, Icon, Navigation};
use dioxus::prelude::*;

#[component]
pub fn ProfileView() -> Element {
    let state = use_context::<AppState>();
    let navigation = use_context::<Navigation>();
    let mut session = state.session;
    let mut auth_open = state.auth_open;

    let Some(user) = session.read().user().cloned() else {
        return rsx! {
            div { class: "text-center py-24",
                Icon { name: "user".to_string(), class: "mx-auto text-zinc-700 mb-4 w-12 h-12".to_string() }
                h3 { class: "text-xl font-bold text-zinc-400", "Nobody's home." }
                button {
                    class: "mt-6 bg-emerald-500 text-black px-6 py-2 rounded-full font-bold text-sm hover:bg-emerald-400 transition-colors",
                    onclick: move |_| auth_open.set(true),
                    "Sign In"
                }
            }
        };
    };

    let liked_count = user.liked_song_ids.len();
    let playlist_count = user.playlists.len();
    let member_since = user.signed_in_at.format("%b %e, %Y").to_string();

    let on_sign_out = move |_| {
        session.write().sign_out();
        navigation.navigate_to(AppView::Home);
    };

    rsx! {
        div { class: "max-w-3xl mx-auto space-y-10",
            div { class: "flex flex-col md:flex-row items-center gap-8 p-8 bg-gradient-to-br from-emerald-900/30 to-zinc-950 rounded-3xl border border-zinc-800",
                img {
                    src: "{user.avatar_url}",
                    alt: "{user.username}",
                    class: "w-40 h-40 rounded-full object-cover border-4 border-emerald-500 shadow-2xl",
                }
                div { class: "text-center md:text-left",
                    span { class: "text-xs uppercase tracking-[0.3em] text-emerald-500 font-bold", "Profile" }
                    h1 { class: "text-5xl font-black italic tracking-tighter mt-2", "{user.username}" }
                    p { class: "text-zinc-500 mt-2 text-sm", "Suffering since {member_since}" }
                }
            }

            div { class: "grid grid-cols-2 gap-6",
                button {
                    class: "p-6 rounded-2xl bg-zinc-900/50 border border-zinc-800 text-left hover:border-emerald-500/40 transition-colors",
                    onclick: move |_| navigation.navigate_to(AppView::Library),
                    p { class: "text-4xl font-black text-white", "{liked_count}" }
                    p { class: "text-xs uppercase tracking-widest text-zinc-500 mt-1", "Liked Songs" }
                }
                button {
                    class: "p-6 rounded-2xl bg-zinc-900/50 border border-zinc-800 text-left hover:border-emerald-500/40 transition-colors",
                    onclick: move |_| navigation.navigate_to(AppView::Library),
                    p { class: "text-4xl font-black text-white", "{playlist_count}" }
                    p { class: "text-xs uppercase tracking-widest text-zinc-500 mt-1", "Playlists" }
                }
            }

            button {
                class: "flex items-center gap-2 px-6 py-3 rounded-xl border border-zinc-800 text-zinc-400 hover:text-red-400 hover:border-red-400/40 transition-colors",
                onclick: on_sign_out,
                Icon { name: "log-out".to_string(), class: "w-4 h-4".to_string() }
                "Sign Out"
            }
        }
    }
}
