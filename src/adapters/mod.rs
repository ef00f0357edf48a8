pub mod csv;
pub mod render;
