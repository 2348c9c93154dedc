//! Config Module
//!
//! Centralized configuration for the drop field and gameplay parameters.

pub mod game_config;

pub use game_config::{
    CadenceConfig, FieldConfig, GameConfig, PlayerConfig, ScoreConfig, ViewConfig, WindowConfig,
};
