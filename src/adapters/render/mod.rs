pub mod dot;
pub mod json;

pub use dot::{DotSceneRenderer, RolePalette};
pub use json::JsonSceneRenderer;
