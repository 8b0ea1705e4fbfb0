use crate::api::catalog;
use crate::api::models::{Playlist, Track, User};
use dioxus::logger::tracing::info;

const NEW_PLAYLIST_COVER_SEED: &str = "newplaylist";

/// The signed-in user, if any. Nothing here outlives the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserSession {
    user: Option<User>,
}

impl UserSession {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Blank names are refused. Signing in again replaces the current user.
    pub fn sign_in(&mut self, username: &str) -> bool {
        if username.trim().is_empty() {
            return false;
        }
        let user = User::new(username, catalog::default_playlists().to_vec());
        info!(username = %user.username, "signed in");
        self.user = Some(user);
        true
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!(username = %user.username, "signed out");
        }
    }

    pub fn is_liked(&self, track_id: &str) -> bool {
        self.user
            .as_ref()
            .map(|user| user.liked_song_ids.contains(track_id))
            .unwrap_or(false)
    }

    /// Returns the new liked state, or `None` when nobody is signed in.
    pub fn toggle_like(&mut self, track_id: &str) -> Option<bool> {
        let user = self.user.as_mut()?;
        if user.liked_song_ids.remove(track_id) {
            Some(false)
        } else {
            user.liked_song_ids.insert(track_id.to_string());
            Some(true)
        }
    }

    /// Liked tracks in catalog order; ids the catalog doesn't know are skipped.
    pub fn liked_tracks(&self) -> Vec<&'static Track> {
        let Some(user) = self.user.as_ref() else {
            return Vec::new();
        };
        catalog::tracks()
            .iter()
            .filter(|track| user.liked_song_ids.contains(&track.id))
            .collect()
    }

    pub fn playlists(&self) -> &[Playlist] {
        self.user
            .as_ref()
            .map(|user| user.playlists.as_slice())
            .unwrap_or(&[])
    }

    pub fn playlist(&self, playlist_id: &str) -> Option<&Playlist> {
        self.playlists()
            .iter()
            .find(|playlist| playlist.id == playlist_id)
    }

    /// Appends an empty playlist and returns its id.
    pub fn create_playlist(&mut self, name: Option<&str>) -> Option<String> {
        let user = self.user.as_mut()?;
        let name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("My Toxic Playlist #{}", user.playlists.len() + 1));
        let id = uuid::Uuid::new_v4().to_string();
        user.playlists.push(Playlist {
            id: id.clone(),
            name,
            description: format!("Curated by {}", user.username),
            cover_url: format!(
                "https://picsum.photos/seed/{NEW_PLAYLIST_COVER_SEED}-{}/400/400",
                user.playlists.len() + 1
            ),
            songs: Vec::new(),
        });
        Some(id)
    }

    /// Appends a track id to one of the user's playlists. Duplicates are allowed.
    pub fn add_to_playlist(&mut self, playlist_id: &str, track_id: &str) -> bool {
        let Some(user) = self.user.as_mut() else {
            return false;
        };
        match user
            .playlists
            .iter_mut()
            .find(|playlist| playlist.id == playlist_id)
        {
            Some(playlist) => {
                playlist.songs.push(track_id.to_string());
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in() -> UserSession {
        let mut session = UserSession::default();
        assert!(session.sign_in("corrosive"));
        session
    }

    #[test]
    fn sign_in_copies_default_playlists_with_no_likes() {
        let session = signed_in();
        let user = session.user().unwrap();
        assert!(user.liked_song_ids.is_empty());
        assert_eq!(user.playlists, catalog::default_playlists());
    }

    #[test]
    fn blank_username_is_refused() {
        let mut session = UserSession::default();
        assert!(!session.sign_in("   "));
        assert!(!session.is_signed_in());
    }

    #[test]
    fn sign_out_discards_everything() {
        let mut session = signed_in();
        session.toggle_like("1");
        session.create_playlist(None);
        session.sign_out();
        assert!(session.user().is_none());
        assert!(session.playlists().is_empty());
        assert!(!session.is_liked("1"));

        session.sign_in("corrosive");
        assert!(!session.is_liked("1"));
        assert_eq!(session.playlists().len(), catalog::default_playlists().len());
    }

    #[test]
    fn liking_twice_restores_the_original_set() {
        let mut session = signed_in();
        session.toggle_like("h1");
        let before = session.user().unwrap().liked_song_ids.clone();

        assert_eq!(session.toggle_like("2"), Some(true));
        assert_eq!(session.toggle_like("2"), Some(false));
        assert_eq!(session.user().unwrap().liked_song_ids, before);
    }

    #[test]
    fn likes_require_a_user() {
        let mut session = UserSession::default();
        assert_eq!(session.toggle_like("1"), None);
        assert!(session.liked_tracks().is_empty());
    }

    #[test]
    fn liked_tracks_follow_catalog_order_and_skip_unknown_ids() {
        let mut session = signed_in();
        session.toggle_like("b1");
        session.toggle_like("ghost");
        session.toggle_like("1");
        let ids = session
            .liked_tracks()
            .iter()
            .map(|track| track.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "b1"]);
    }

    #[test]
    fn created_playlists_are_empty_and_appended() {
        let mut session = signed_in();
        let before = session.playlists().len();
        let id = session.create_playlist(None).unwrap();
        let playlist = session.playlists().last().unwrap();
        assert_eq!(playlist.id, id);
        assert!(playlist.songs.is_empty());
        assert_eq!(playlist.name, format!("My Toxic Playlist #{}", before + 1));

        let named = session.create_playlist(Some("  Gym Rage ")).unwrap();
        assert_eq!(session.playlist(&named).unwrap().name, "Gym Rage");
    }

    #[test]
    fn add_to_playlist_allows_duplicates_and_dangling_ids() {
        let mut session = signed_in();
        let id = session.create_playlist(Some("dupes")).unwrap();
        assert!(session.add_to_playlist(&id, "1"));
        assert!(session.add_to_playlist(&id, "1"));
        assert!(session.add_to_playlist(&id, "missing"));
        assert_eq!(session.playlist(&id).unwrap().songs, vec!["1", "1", "missing"]);
        assert_eq!(catalog::resolve_tracks(&session.playlist(&id).unwrap().songs).len(), 2);
        assert!(!session.add_to_playlist("nope", "1"));
    }

    #[test]
    fn creating_playlists_needs_a_user() {
        let mut session = UserSession::default();
        assert!(session.create_playlist(Some("x")).is_none());
    }
}
