pub mod collision;
pub mod grid;
pub mod rect;
pub mod time;
