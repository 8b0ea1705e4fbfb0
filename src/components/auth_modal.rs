use crate::components::{AppState, Icon};
use dioxus::prelude::*;

const AUTH_AVATAR_URL: &str = "https://images.unsplash.com/photo-1633332755192-727a05c4013d?q=80&w=200&h=200&auto=format&fit=crop";

/// Username-only sign in. Password and email are cosmetic; nothing is verified.
#[component]
pub fn AuthModal() -> Element {
    let state = use_context::<AppState>();
    let mut session = state.session;
    let mut auth_open = state.auth_open;

    let mut is_login = use_signal(|| true);
    let mut username = use_signal(String::new);

    if !auth_open() {
        return rsx! {};
    }

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let name = username.peek().clone();
        if session.write().sign_in(&name) {
            username.set(String::new());
            auth_open.set(false);
        }
    };

    let login = is_login();

    rsx! {
        div { class: "fixed inset-0 z-[100] flex items-center justify-center bg-black/80 backdrop-blur-sm p-4",
            div { class: "w-full max-w-md bg-zinc-900 border border-zinc-800 rounded-3xl p-8 relative",
                button {
                    class: "absolute top-4 right-4 p-2 text-zinc-500 hover:text-white transition-colors",
                    aria_label: "Close",
                    onclick: move |_| auth_open.set(false),
                    Icon { name: "x".to_string(), class: "w-6 h-6".to_string() }
                }

                div { class: "text-center mb-8",
                    div { class: "w-20 h-20 bg-emerald-500 rounded-2xl flex items-center justify-center mx-auto mb-4 rotate-12 shadow-xl shadow-emerald-500/20 overflow-hidden border-2 border-emerald-400",
                        img {
                            src: AUTH_AVATAR_URL,
                            alt: "Toxicfy",
                            class: "w-full h-full object-cover -rotate-12 scale-110",
                        }
                    }
                    h2 { class: "text-3xl font-black italic tracking-tighter text-white uppercase",
                        if login { "Welcome Back" } else { "Join Toxicfy" }
                    }
                    p { class: "text-zinc-500 mt-2 font-medium",
                        if login { "Your toxic taste awaits." } else { "Start your corrosive music journey." }
                    }
                }

                form { class: "space-y-4", onsubmit: on_submit,
                    if !login {
                        AuthField { icon: "mail", input_type: "email", placeholder: "Email Address" }
                    }
                    div { class: "relative",
                        Icon {
                            name: "user".to_string(),
                            class: "absolute left-4 top-1/2 -translate-y-1/2 text-zinc-500 w-4 h-4".to_string(),
                        }
                        input {
                            r#type: "text",
                            required: true,
                            placeholder: "Username",
                            value: "{username}",
                            class: "w-full bg-zinc-800 border border-zinc-700 py-3 pl-12 pr-4 rounded-xl focus:ring-2 focus:ring-emerald-500 outline-none transition-all",
                            oninput: move |e| username.set(e.value()),
                        }
                    }
                    AuthField { icon: "lock", input_type: "password", placeholder: "Password" }

                    button {
                        r#type: "submit",
                        class: "w-full bg-emerald-500 text-black py-3 rounded-xl font-bold hover:bg-emerald-400 transition-all uppercase tracking-widest mt-4",
                        if login { "Sign In" } else { "Create Account" }
                    }
                }

                div { class: "mt-8 text-center",
                    button {
                        class: "text-zinc-400 hover:text-emerald-500 text-sm font-medium underline-offset-4 hover:underline",
                        onclick: move |_| is_login.set(!login),
                        if login { "Don't have an account? Sign Up" } else { "Already have an account? Sign In" }
                    }
                }
            }
        }
    }
}

#[component]
fn AuthField(icon: String, input_type: String, placeholder: String) -> Element {
    rsx! {
        div { class: "relative",
            Icon {
                name: icon.clone(),
                class: "absolute left-4 top-1/2 -translate-y-1/2 text-zinc-500 w-4 h-4".to_string(),
            }
            input {
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                class: "w-full bg-zinc-800 border border-zinc-700 py-3 pl-12 pr-4 rounded-xl focus:ring-2 focus:ring-emerald-500 outline-none transition-all",
            }
        }
    }
}
