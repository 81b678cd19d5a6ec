pub mod localizer;
pub mod translatable;

pub use localizer::Localizer;
pub use translatable::{LangRegistry, Registration, Translatable};
