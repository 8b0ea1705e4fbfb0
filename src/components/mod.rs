//! The components module contains all shared components for our app.

mod app;
mod app_view;
mod audio_manager;
mod auth_modal;
mod icons;
mod navigation;
mod player;
mod sidebar;
pub mod views;

pub use app::*;
pub use app_view::*;
pub use audio_manager::{AudioController, AudioElement, Playback};
pub use auth_modal::*;
pub use icons::*;
pub use navigation::*;
pub use player::*;
pub use sidebar::*;
