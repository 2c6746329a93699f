#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod dice;
mod game;
mod generator;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod ship;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use dice::Dice;
pub use game::*;
pub use generator::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env, LOG_ENV_VAR};
pub use ship::*;
