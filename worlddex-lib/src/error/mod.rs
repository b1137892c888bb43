//! Error types

mod config;
mod rarity;

pub use config::*;
pub use rarity::*;
