//! Core game logic. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod config;
pub mod events;
pub mod offer;
pub mod pile;
pub mod rng;
pub mod run;
pub mod scoring;
pub mod state;

pub use cards::*;
pub use config::*;
pub use events::*;
pub use offer::*;
pub use pile::*;
pub use rng::*;
pub use run::*;
pub use scoring::*;
pub use state::*;
