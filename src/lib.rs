//! Battle view turn engine
//!
//! Sequences and draws a single turn-based creature battle: menu selection while
//! the player chooses, then frame-by-frame playback of the resolved turn script
//! (sprite animations, health bars, paged message dialogs).

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod errors;
pub mod i18n;
pub mod resolver;
pub mod utils;
pub mod view;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    ActionEntry, ActionScript, Actor, BattleOutcome, CursorMove, ElementType, GameStatus,
    MoveSlot, Phase, RoundScript, Team, Transformation, TurnAction, TurnChoice, TurnData,
    TurnEffect, Unit, MENU_SLOTS,
};

// --- From this crate's modules (`src/`) ---

// Turn state machine and its per-encounter data.
pub use battle::animation::SpriteTransform;
pub use battle::data::BattleData;
pub use battle::engine::BattleEngine;
pub use battle::handshake::TurnHandshake;

// Presentation.
pub use view::{Battle, BattleScene, Dialog, Frame, TextFrame};

// Localization.
pub use i18n::{LangRegistry, Localizer, Registration, Translatable};

pub use config::{BattleViewConfig, MotionSpec};
pub use errors::{ViewError, ViewResult};
pub use resolver::{RandomResolver, Resolver, ScriptedResolver};
pub use utils::CycleCounter;
