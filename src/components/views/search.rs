use crate::api::catalog;
use crate::components::views::TrackCard;
use crate::components::Icon;
use dioxus::prelude::*;

#[component]
pub fn SearchView() -> Element {
    let mut search_query = use_signal(String::new);

    let query = search_query();
    let results = catalog::search_tracks(&query);
    let has_query = !query.trim().is_empty();

    rsx! {
        div { class: "space-y-8",
            div { class: "relative",
                Icon {
                    name: "search".to_string(),
                    class: "absolute left-5 top-1/2 -translate-y-1/2 text-zinc-500 w-5 h-5".to_string(),
                }
                input {
                    r#type: "text",
                    placeholder: "Search for toxic tunes...",
                    value: "{query}",
                    class: "w-full bg-zinc-900/50 border border-zinc-800 py-4 pl-14 pr-4 rounded-2xl focus:ring-2 focus:ring-emerald-500 outline-none text-lg transition-all",
                    oninput: move |e| search_query.set(e.value()),
                }
            }

            if has_query {
                div { class: "space-y-4",
                    h3 { class: "text-xl font-bold", "Search results" }
                    if results.is_empty() {
                        p { class: "text-zinc-500 text-sm", "Nothing matches. Your taste is too obscure even for us." }
                    } else {
                        div { class: "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-5 xl:grid-cols-6 gap-6",
                            for track in results {
                                TrackCard { key: "{track.id}", track: track.clone() }
                            }
                        }
                    }
                }
            }

            div { class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4",
                for genre in catalog::genres().iter() {
                    div {
                        key: "{genre}",
                        class: "h-32 rounded-xl bg-gradient-to-br from-zinc-800 to-zinc-950 p-4 flex flex-col justify-between hover:scale-[1.02] transition-transform cursor-pointer border border-zinc-800",
                        span { class: "text-lg font-black italic tracking-tight", "{genre}" }
                        div { class: "flex justify-end opacity-20",
                            Icon { name: "search".to_string(), class: "w-10 h-10".to_string() }
                        }
                    }
                }
            }
        }
    }
}
