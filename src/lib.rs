//! # Drop Four
//!
//! A vertical drop-token game (Connect Four on a 7×6 grid) played in the
//! terminal, with an optional single-player mode against a heuristic
//! computer opponent.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine with move
//!   ledger and streak detection
//! - [`ai`] — Opponent trait and the win/block/score heuristic chooser
//! - [`ui`] — Terminal UI: game view and event loop
//! - [`config`] — TOML configuration (game mode)
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
