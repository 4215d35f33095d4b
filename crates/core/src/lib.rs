//! Draw resolution for the gacha. Keep this crate free of IO and platform concerns.

pub mod catalog;
pub mod config;
pub mod controls;
pub mod engine;
pub mod filter;
pub mod pity;
pub mod results;
pub mod rng;
pub mod state;
pub mod weighted;

pub use catalog::*;
pub use config::*;
pub use controls::*;
pub use engine::*;
pub use filter::*;
pub use pity::*;
pub use results::*;
pub use rng::*;
pub use state::*;
pub use weighted::*;
