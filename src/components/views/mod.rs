mod chat;
mod home;
mod library;
mod playlist_detail;
mod profile;
mod search;

pub use chat::ChatView;
pub use home::{HomeView, TrackCard, TrackRow};
pub use library::LibraryView;
pub use playlist_detail::PlaylistDetailView;
pub use profile::ProfileView;
pub use search::SearchView;
