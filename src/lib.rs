//! Bug Crossing: walk the player across the enemy lanes to the water
//! without running out of hearts.
//!
//! - `entities`: pure data (player, enemies, hearts, world state)
//! - `compute`: game rules as state → state functions
//! - `display`: terminal rendering
//! - `input`: key → direction mapping
//! - `config`: TOML-loadable tuning
//! - `terminal`: full-screen session guard

pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod input;
pub mod logging;
pub mod terminal;

pub use config::GameConfig;
pub use error::GameError;
