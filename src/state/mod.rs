//! Stores and controllers that outlive any single view.

pub mod chat;
pub mod playback;
pub mod session;

pub use chat::ChatSession;
pub use playback::{MediaBackend, PlaybackController};
pub use session::UserSession;
