#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod belief;
mod board;
mod common;
mod config;
pub mod deduction;
mod engine;
pub mod geometry;
mod grid;
mod heuristic;
#[cfg(feature = "std")]
mod logging;
pub mod maps;
mod ship;
#[cfg(feature = "std")]
mod sim;
mod strategy;

pub use belief::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use engine::*;
pub use grid::*;
pub use heuristic::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
#[cfg(feature = "std")]
pub use sim::*;
pub use strategy::*;
