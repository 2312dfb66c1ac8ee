//! Install Russian localization archives into Jackbox Party Pack games
//! installed through Steam on macOS.

pub mod commands;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod patch;
pub mod tools;
pub mod utils;

pub use error::LocalizerError;
