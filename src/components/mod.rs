//! UI Components
//!
//! Leptos components for the sidebar, the timeline grid and the audio overlay.

mod sidebar;
mod timeline_list;
mod timeline_card;
mod load_sentinel;
mod audio_player;
mod error_panel;

pub use sidebar::Sidebar;
pub use timeline_list::TimelineList;
pub use timeline_card::TimelineCard;
pub use load_sentinel::LoadSentinel;
pub use audio_player::AudioPlayer;
pub use error_panel::ErrorPanel;
