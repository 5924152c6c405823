pub mod entries;
pub mod state;
