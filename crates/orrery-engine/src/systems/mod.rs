pub mod orbit;
pub mod render;
pub mod text;
