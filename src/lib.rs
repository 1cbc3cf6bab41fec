#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod ai;
mod bitboard;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
#[cfg(feature = "std")]
pub mod frontend;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod sprite;
mod strategy;
mod turn;
pub mod viewport;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{env_level, init_logging_with};
pub use strategy::*;
pub use turn::*;
