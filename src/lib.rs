//! # trapezoid_motion
//!
//! A small library for computing trapezoidal motion profiles in Rust.
//!
//! This library provides the following modules:
//! - `motion_state` for position/velocity/acceleration snapshots and constant-acceleration projection.
//! - `motion_constraints` for the velocity/acceleration limits a profile must obey.
//! - `motion_phase` for describing a single constant-acceleration segment in time.
//! - `motion_profile` for building an accelerate/cruise/decelerate profile and evaluating it.
//! - `profile_executor` for playing queued profiles back in discrete ticks.
//! - `config` for loading a move description from TOML.
//! - `buffer_fifo` for a simple FIFO buffer implementation.
//!
//! Author: Anton Khrustalev, creapunk

pub mod config;
pub mod error;
pub mod motion_constraints;
pub mod motion_phase;
pub mod motion_profile;
pub mod motion_state;
mod buffer_fifo;
pub mod profile_executor;

// Re-export main structs for convenience:
pub use config::*;
pub use error::*;
pub use motion_constraints::*;
pub use motion_phase::*;
pub use motion_profile::*;
pub use motion_state::*;
pub use profile_executor::*;
