use crate::api::Assistant;
use crate::components::{submit_chat, AppState, Icon};
use crate::config::AppConfig;
use dioxus::prelude::*;

const CHAT_SCROLL_ID: &str = "toxic-chat-scroll";

#[component]
pub fn ChatView() -> Element {
    let state = use_context::<AppState>();
    let assistant = use_context::<Assistant>();
    let online = use_context::<AppConfig>().gemini.has_api_key();
    let mut chat = state.chat;
    let mut input = use_signal(String::new);

    // Keep the newest message in view.
    use_effect(move || {
        let _ = chat.read().transcript().len();
        let _ = chat.read().is_awaiting();
        let _ = document::eval(&format!(
            r#"const el = document.getElementById("{CHAT_SCROLL_ID}");
            if (el) {{ el.scrollTop = el.scrollHeight; }}"#
        ));
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let text = input.peek().clone();
        if submit_chat(chat, &text, &assistant) {
            input.set(String::new());
        }
    };

    let snapshot = chat.read();
    let messages = snapshot.transcript().to_vec();
    let awaiting = snapshot.is_awaiting();
    let failure = snapshot.last_failure().map(str::to_string);
    drop(snapshot);

    rsx! {
        div { class: "flex flex-col h-[calc(100vh-160px)] max-w-4xl mx-auto bg-zinc-900/50 rounded-2xl border border-zinc-800 overflow-hidden shadow-2xl",
            div { class: "p-4 border-b border-zinc-800 flex justify-between items-center bg-zinc-900/80 backdrop-blur-md",
                div { class: "flex items-center gap-3",
                    div { class: "w-10 h-10 bg-emerald-500 rounded-full flex items-center justify-center shadow-lg shadow-emerald-500/20 text-black",
                        Icon { name: "sparkles".to_string(), class: "w-5 h-5".to_string() }
                    }
                    div {
                        h2 { class: "font-bold text-white leading-none", "Toxic AI Critic" }
                        if online {
                            p { class: "text-xs text-emerald-500 font-medium", "Online (Judging you)" }
                        } else {
                            p { class: "text-xs text-zinc-500 font-medium", "Offline (no API key configured)" }
                        }
                    }
                }
                button {
                    class: "p-2 text-zinc-500 hover:text-red-400 hover:bg-red-400/10 rounded-lg transition-colors",
                    aria_label: "Reset conversation",
                    onclick: move |_| chat.write().reset(),
                    Icon { name: "trash".to_string(), class: "w-5 h-5".to_string() }
                }
            }

            div { id: CHAT_SCROLL_ID, class: "flex-1 overflow-y-auto p-4 space-y-4 scroll-smooth",
                for (i, msg) in messages.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: if msg.is_user() { "flex justify-end" } else { "flex justify-start" },
                        div { class: if msg.is_user() { "flex gap-3 max-w-[80%] flex-row-reverse" } else { "flex gap-3 max-w-[80%] flex-row" },
                            div { class: if msg.is_user() { "w-8 h-8 rounded-full flex-shrink-0 flex items-center justify-center bg-zinc-700" } else { "w-8 h-8 rounded-full flex-shrink-0 flex items-center justify-center bg-emerald-500 text-black" },
                                Icon {
                                    name: if msg.is_user() { "user".to_string() } else { "sparkles".to_string() },
                                    class: "w-4 h-4".to_string(),
                                }
                            }
                            div { class: if msg.is_user() { "p-3 rounded-2xl text-sm leading-relaxed whitespace-pre-wrap bg-zinc-800 text-white rounded-tr-none" } else { "p-3 rounded-2xl text-sm leading-relaxed whitespace-pre-wrap bg-emerald-500/10 text-emerald-100 border border-emerald-500/20 rounded-tl-none" },
                                "{msg.content}"
                            }
                        }
                    }
                }
                if awaiting {
                    div { class: "flex justify-start",
                        div { class: "flex gap-3 max-w-[80%]",
                            div { class: "w-8 h-8 rounded-full bg-emerald-500 flex items-center justify-center animate-pulse text-black",
                                Icon { name: "sparkles".to_string(), class: "w-4 h-4".to_string() }
                            }
                            div { class: "p-3 bg-emerald-500/5 text-zinc-400 rounded-2xl italic text-xs animate-pulse",
                                "Analyzing your questionable taste..."
                            }
                        }
                    }
                }
                if let Some(reason) = failure {
                    p { class: "text-[10px] text-center text-rose-400/70 font-mono", "{reason}" }
                }
            }

            div { class: "p-4 bg-zinc-900 border-t border-zinc-800",
                form { class: "relative flex items-center", onsubmit: on_submit,
                    input {
                        r#type: "text",
                        value: "{input}",
                        placeholder: "Ask me for an edgy recommendation...",
                        class: "w-full bg-zinc-800 border-none text-white rounded-xl py-4 pl-4 pr-14 focus:ring-2 focus:ring-emerald-500 transition-all outline-none text-sm shadow-inner",
                        oninput: move |e| input.set(e.value()),
                    }
                    button {
                        r#type: "submit",
                        aria_label: "Send",
                        disabled: awaiting || input().trim().is_empty(),
                        class: "absolute right-2 p-2 bg-emerald-500 text-black rounded-lg hover:bg-emerald-400 disabled:opacity-50 transition-all shadow-lg",
                        Icon { name: "send".to_string(), class: "w-5 h-5".to_string() }
                    }
                }
                p { class: "text-[10px] text-center text-zinc-600 mt-2 font-medium tracking-wide",
                    "WARNING: THIS AI MAY HURT YOUR FEELINGS. PROCEED WITH CAUTION."
                }
            }
        }
    }
}
