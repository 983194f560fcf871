//! Sliding-tile puzzle for the browser.
//!
//! The grid model, the score clock and the record store are plain Rust and
//! test natively; `components` projects them into the DOM with yew.

pub mod components;
pub mod config;
pub mod game;
pub mod model;
pub mod records;
pub mod state;
pub mod util;
