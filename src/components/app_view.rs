//! Defines the shared application view state.

#[derive(Debug, Clone, PartialEq)]
pub enum AppView {
    Home,
    Search,
    Library,
    AiChat,
    Profile,
    PlaylistDetail(String),
}

impl Default for AppView {
    fn default() -> Self {
        Self::Home
    }
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::Home => "Home",
        AppView::Search => "Explore",
        AppView::Library => "Library",
        AppView::AiChat => "Toxic AI",
        AppView::Profile => "Profile",
        AppView::PlaylistDetail(_) => "Playlist",
    }
}

/// Primary destinations, in sidebar order: (view, icon, label).
pub fn primary_views() -> [(AppView, &'static str, &'static str); 4] {
    [
        (AppView::Home, "home", view_label(&AppView::Home)),
        (AppView::Search, "search", view_label(&AppView::Search)),
        (AppView::Library, "library", view_label(&AppView::Library)),
        (AppView::AiChat, "chat", view_label(&AppView::AiChat)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_views_start_at_home_and_skip_detail_pages() {
        let views = primary_views();
        assert_eq!(views[0].0, AppView::default());
        assert!(views
            .iter()
            .all(|(view, _, _)| !matches!(view, AppView::PlaylistDetail(_) | AppView::Profile)));
        assert_eq!(view_label(&AppView::AiChat), "Toxic AI");
    }
}
