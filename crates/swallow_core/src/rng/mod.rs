//! # Middle-Square Random Number Generation
//!
//! This module provides the von Neumann middle-square generator that feeds
//! the survey simulation.
//!
//! ## Digit Window
//!
//! Each step squares the state, renders the square as a decimal string
//! zero-padded to at least 8 characters, and keeps the 4 characters at
//! positions `[2, 6)`. When the square has more than 8 digits the window
//! is no longer centred; that offset is part of the sequence definition
//! and is reproduced exactly.
//!
//! ## Degeneration
//!
//! A state of 0 squares to 0 and stays there. The generator keeps emitting
//! `0.0`; rejecting such a sequence is the job of the uniformity gate in
//! [`crate::stats`], not of the generator.
//!
//! ## Usage Example
//!
//! ```rust
//! use swallow_core::rng::{generate, MiddleSquareRng};
//!
//! let values = generate(3, 1234);
//! assert_eq!(values, vec![0.5227, 0.3215, 0.3362]);
//!
//! let mut rng = MiddleSquareRng::from_seed(1234);
//! assert_eq!(rng.gen_uniform(), 0.5227);
//! ```
//!
//! ## Module Structure
//!
//! - `middle_square`: generator state, single-step function and batch helpers

mod middle_square;

pub use middle_square::{generate, next_state, MiddleSquareRng, PAD_WIDTH, SCALE};
