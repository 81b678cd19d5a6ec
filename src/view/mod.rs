pub mod battle;
pub mod dialog;
pub mod frame;
pub mod scene;

pub use battle::Battle;
pub use dialog::Dialog;
pub use frame::{Frame, InfoBox, MenuEntry, TextFrame};
pub use scene::BattleScene;
