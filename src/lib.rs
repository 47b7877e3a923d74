#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod attack;
mod board;
mod common;
mod config;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
mod player;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod session;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use attack::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, log_level_from_env};
pub use placement::{random_placement, validate_placement};
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use session::*;
pub use ship::*;
