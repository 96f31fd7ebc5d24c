pub mod entry;
pub mod pack;
pub mod shape;
pub mod texture_grid;
