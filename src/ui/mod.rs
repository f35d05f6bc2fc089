pub mod assets;
pub mod rect;
pub mod styles;
pub mod text;
