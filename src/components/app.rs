use crate::api::gemini::{AssistantAdapter, TextGenerator};
use crate::api::Assistant;
use crate::components::views::{
    ChatView, HomeView, LibraryView, PlaylistDetailView, ProfileView, SearchView,
};
use crate::components::{
    primary_views, view_label, AppView, AudioController, AudioElement, AuthModal, Icon,
    Navigation, Playback, Player, Sidebar,
};
use crate::config::AppConfig;
use crate::state::{ChatSession, UserSession};
use dioxus::prelude::*;
use dioxus::core::spawn_forever;

/// Everything that outlives a view switch. Handed to components through context.
#[derive(Clone, Copy)]
pub struct AppState {
    pub session: Signal<UserSession>,
    pub chat: Signal<ChatSession>,
    pub playback: Signal<Playback>,
    pub auth_open: Signal<bool>,
}

/// Submit `text` to the chat and wait for the reply on the root scope, so the
/// turn still resolves when the view that sent it is gone. Returns whether a
/// turn was started.
pub fn submit_chat<G>(mut chat: Signal<ChatSession>, text: &str, assistant: &AssistantAdapter<G>) -> bool
where
    G: TextGenerator + Clone + 'static,
{
    let Some(turn) = chat.write().submit(text) else {
        return false;
    };
    let assistant = assistant.clone();
    let _ = spawn_forever(async move {
        let done = turn.dispatch(&assistant).await;
        chat.write().resolve(done);
    });
    true
}

#[component]
pub fn AppShell() -> Element {
    let config = use_hook(AppConfig::from_env);
    let assistant = use_hook({
        let gemini = config.gemini.clone();
        move || Assistant::from_config(&gemini)
    });

    let player_config = config.player.clone();
    let state = AppState {
        session: use_signal(UserSession::default),
        chat: use_signal(ChatSession::new),
        playback: use_signal(move || Playback::new(AudioElement::default(), &player_config)),
        auth_open: use_signal(|| false),
    };
    let current_view = use_signal(AppView::default);
    let history = use_signal(Vec::<AppView>::new);
    let navigation = Navigation::new(current_view, history);

    use_context_provider(|| state);
    use_context_provider(|| navigation);
    use_context_provider(|| config.clone());
    use_context_provider(|| assistant.clone());

    let view = current_view();
    let can_go_back = navigation.can_go_back();
    let session = state.session.read().clone();
    let mut auth_open = state.auth_open;

    rsx! {
        div { class: "app-container flex h-screen overflow-hidden bg-black text-white",
            Sidebar {}

            main { class: "flex-1 overflow-y-auto relative custom-scrollbar",
                header { class: "sticky top-0 z-40 bg-black/80 backdrop-blur-md px-8 py-4 flex items-center justify-between",
                    div { class: "flex items-center gap-4",
                        button {
                            class: "w-8 h-8 rounded-full bg-zinc-900 flex items-center justify-center hover:bg-zinc-800 transition-colors disabled:opacity-40",
                            aria_label: "Go back",
                            disabled: !can_go_back,
                            onclick: move |_| {
                                let _ = navigation.go_back();
                            },
                            Icon { name: "arrow-left".to_string(), class: "w-4 h-4".to_string() }
                        }
                        span { class: "text-sm font-semibold text-zinc-400 md:hidden",
                            "{view_label(&view)}"
                        }
                    }

                    div { class: "flex items-center gap-4",
                        {match session.user() {
                            Some(user) => rsx! {
                                button {
                                    class: "w-10 h-10 bg-zinc-800 rounded-full flex items-center justify-center border border-zinc-700 overflow-hidden cursor-pointer hover:border-emerald-500 transition-all",
                                    aria_label: "Open profile",
                                    onclick: move |_| navigation.navigate_to(AppView::Profile),
                                    img { src: "{user.avatar_url}", alt: "{user.username}" }
                                }
                            },
                            None => rsx! {
                                button {
                                    class: "bg-emerald-500 text-black px-5 py-2 rounded-full font-bold text-sm hover:bg-emerald-400 transition-colors",
                                    onclick: move |_| auth_open.set(true),
                                    "Sign In"
                                }
                            },
                        }}
                    }
                }

                div { class: "px-8 pt-4 pb-32",
                    {match view {
                        AppView::Home => rsx! { HomeView {} },
                        AppView::Search => rsx! { SearchView {} },
                        AppView::Library => rsx! { LibraryView {} },
                        AppView::AiChat => rsx! { ChatView {} },
                        AppView::Profile => rsx! { ProfileView {} },
                        AppView::PlaylistDetail(id) => rsx! { PlaylistDetailView { playlist_id: id } },
                    }}
                }
            }

            Player {}

            // Mobile nav overlay
            div { class: "md:hidden fixed bottom-28 left-4 right-4 bg-zinc-900/90 backdrop-blur-lg rounded-2xl p-2 flex justify-around border border-zinc-800 z-50",
                for (target, icon, label) in primary_views() {
                    button {
                        key: "{label}",
                        class: if navigation.is_at(&target) { "p-3 rounded-xl text-emerald-500" } else { "p-3 rounded-xl text-zinc-500" },
                        aria_label: "{label}",
                        onclick: {
                            let target = target.clone();
                            move |_| navigation.navigate_to(target.clone())
                        },
                        Icon { name: icon.to_string(), class: "w-6 h-6".to_string() }
                    }
                }
            }
        }

        AuthModal {}

        // Audio controller - manages playback separately from UI
        AudioController {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::gemini::test_support::ScriptedGenerator;
    use crate::state::chat::ChatPhase;
    use crate::utils::sleep_ms;
    use std::cell::RefCell;
    use std::time::Duration;

    thread_local! {
        static OBSERVED: RefCell<Option<(ChatPhase, usize)>> = const { RefCell::new(None) };
    }

    fn chat_host() -> Element {
        let chat = use_signal(ChatSession::new);
        let mut show_sender = use_signal(|| true);
        use_context_provider(|| chat);
        use_hook(move || {
            spawn(async move {
                sleep_ms(10).await;
                show_sender.set(false);
            });
        });

        let observed = (chat.read().phase(), chat.read().transcript().len());
        OBSERVED.with(|cell| *cell.borrow_mut() = Some(observed));

        rsx! {
            if show_sender() {
                ChatSender {}
            }
        }
    }

    #[component]
    fn ChatSender() -> Element {
        let chat = use_context::<Signal<ChatSession>>();
        use_hook(move || {
            spawn(async move {
                let assistant = AssistantAdapter::new(ScriptedGenerator::delayed("Still judging.", 50), 1_000);
                submit_chat(chat, "Recommend something", &assistant);
            });
        });
        rsx! { p { "sending" } }
    }

    #[tokio::test]
    async fn reply_lands_after_the_sending_view_unmounts() {
        OBSERVED.with(|cell| *cell.borrow_mut() = None);
        let mut dom = VirtualDom::new(chat_host);
        dom.rebuild_in_place();

        let _ = tokio::time::timeout(Duration::from_millis(300), async {
            loop {
                dom.wait_for_work().await;
                let _ = dom.render_immediate_to_vec();
            }
        })
        .await;

        let observed = OBSERVED.with(|cell| *cell.borrow());
        assert_eq!(observed, Some((ChatPhase::Idle, 3)));
    }
}
