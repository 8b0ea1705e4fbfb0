use dioxus::prelude::*;

/// Outline icons, drawn with `stroke="currentColor"`.
fn outline_paths(name: &str) -> Option<&'static [&'static str]> {
    let paths: &'static [&'static str] = match name {
        "home" => &[
            "M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
            "M9 22V12h6v10",
        ],
        "search" => &[
            "M19 11a8 8 0 1 1-16 0 8 8 0 0 1 16 0z",
            "M21 21l-4.35-4.35",
        ],
        "library" => &["M16 6l4 14", "M12 6v14", "M8 8v12", "M4 4v16"],
        "chat" => &[
            "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z",
            "M13 8H7",
            "M17 12H7",
        ],
        "heart" => &[
            "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z",
        ],
        "plus" => &["M12 5v14", "M5 12h14"],
        "plus-circle" => &[
            "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z",
            "M12 8v8",
            "M8 12h8",
        ],
        "volume" => &[
            "M11 5L6 9H2v6h4l5 4V5z",
            "M15.54 8.46a5 5 0 0 1 0 7.07",
            "M19.07 4.93a10 10 0 0 1 0 14.14",
        ],
        "volume-x" => &["M11 5L6 9H2v6h4l5 4V5z", "M22 9l-6 6", "M16 9l6 6"],
        "trash" => &[
            "M3 6h18",
            "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6",
            "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2",
        ],
        "user" => &[
            "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2",
            "M16 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
        ],
        "x" => &["M18 6L6 18", "M6 6l12 12"],
        "send" => &["M22 2L11 13", "M22 2l-7 20-4-9-9-4 20-7z"],
        "arrow-left" => &["M19 12H5", "M12 19l-7-7 7-7"],
        "music" => &[
            "M9 18V5l12-2v13",
            "M9 18a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
            "M21 16a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
        ],
        "list" => &["M21 15V6", "M12 12H3", "M16 6H3", "M12 18H3"],
        "lock" => &[
            "M19 11H5a2 2 0 0 0-2 2v7a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7a2 2 0 0 0-2-2z",
            "M7 11V7a5 5 0 0 1 10 0v4",
        ],
        "log-out" => &[
            "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4",
            "M16 17l5-5-5-5",
            "M21 12H9",
        ],
        "mail" => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "M22 6l-10 7L2 6",
        ],
        "more" => &["M12 12h.01", "M19 12h.01", "M5 12h.01"],
        "clock" => &[
            "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z",
            "M12 6v6l4 2",
        ],
        _ => return None,
    };
    Some(paths)
}

/// Solid icons, drawn with `fill="currentColor"`.
fn filled_paths(name: &str) -> Option<&'static [&'static str]> {
    let paths: &'static [&'static str] = match name {
        "play" => &["M5 3l14 9-14 9V3z"],
        "pause" => &["M6 4h4v16H6z", "M14 4h4v16h-4z"],
        "prev" => &["M19 20L9 12l10-8v16z", "M5 19V5h2v14H5z"],
        "next" => &["M5 4l10 8-10 8V4z", "M17 5h2v14h-2V5z"],
        "heart-filled" => &[
            "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z",
        ],
        "sparkles" => &[
            "M12 2l2.2 6.3L20.5 10.5l-6.3 2.2L12 19l-2.2-6.3L3.5 10.5l6.3-2.2L12 2z",
            "M19 15l.9 2.1L22 18l-2.1.9L19 21l-.9-2.1L16 18l2.1-.9L19 15z",
        ],
        _ => return None,
    };
    Some(paths)
}

#[component]
pub fn Icon(name: String, class: String) -> Element {
    if let Some(paths) = filled_paths(&name) {
        return rsx! {
            svg { class: "{class}", view_box: "0 0 24 24", fill: "currentColor",
                for d in paths.iter() {
                    path { d: "{d}" }
                }
            }
        };
    }

    match outline_paths(&name) {
        Some(paths) => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                for d in paths.iter() {
                    path { d: "{d}" }
                }
            }
        },
        None => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "12", cy: "12", r: "10" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_named_icon_resolves_to_one_style() {
        for name in [
            "home", "search", "library", "chat", "heart", "plus", "volume", "volume-x", "trash",
            "user", "x", "send", "arrow-left", "music", "log-out", "mail", "lock", "clock",
        ] {
            assert!(outline_paths(name).is_some(), "{name}");
            assert!(filled_paths(name).is_none(), "{name}");
        }
        for name in ["play", "pause", "prev", "next", "heart-filled", "sparkles"] {
            assert!(filled_paths(name).is_some(), "{name}");
        }
    }
}
