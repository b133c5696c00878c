pub mod config;
pub mod inline;
pub mod state;
pub mod visuals;
