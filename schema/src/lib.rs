// Battle View Schema - Shared type definitions
// This crate contains the data handed to the battle view by the outcome
// resolver: teams, per-round choices and the turn action script, plus the
// small enums both sides of the handoff agree on.

// Re-export the main types
pub use element::*;
pub use menu::*;
pub use sides::*;
pub use team::*;
pub use turn::*;

pub mod element;
pub mod menu;
pub mod sides;
pub mod team;
pub mod turn;
