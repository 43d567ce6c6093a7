//! Progress clock watchface
//!
//! Two concentric progress rings around a segment counter: the outer ring
//! sweeps through a short repeating cycle, the inner ring through the whole
//! day. Everything here is hardware independent and draws onto any
//! `embedded-graphics` target; the PineTime firmware lives in `main.rs`.

#![cfg_attr(not(test), no_std)]

// This must go first so the macros are visible to the other modules
#[macro_use]
mod fmt;

pub mod clock;
pub mod config;
pub mod progress;
pub mod ui;
