//! # folio
//!
//! The logic behind a single-page personal portfolio: the content records, the
//! canvas animation state that the web front end paints, and the toy teaching
//! demos (sorting/search step recorder, signal generator, wireless channel).
//!
//! Everything here is plain Rust with no browser dependency, so the landing
//! crate only has to paint and the native `folio` binary can print the same
//! frames in a terminal.
//!
//! ## Quick Start
//!
//! ```rust
//! use folio::algorithms::{bubble_sort, BarState};
//!
//! let frames = bubble_sort(&[5, 3, 8, 1]);
//! let last = frames.last().unwrap();
//! assert_eq!(last.values(), vec![1, 3, 5, 8]);
//! assert!(last.bars.iter().all(|bar| bar.state == BarState::Sorted));
//! ```
//!
//! ## Modules
//!
//! - [`content`] - profile, projects, blog posts and contact records
//! - [`particles`] / [`network`] - background canvas state
//! - [`perspective`] / [`nav`] - one-section-at-a-time navigation
//! - [`algorithms`] / [`playback`] - recorded algorithm frames and their player
//! - [`signal`] / [`wireless`] - waveform and channel models
//! - [`theme`], [`resume`], [`schedule`] - browser-facing protocols behind traits
//! - [`config`] - optional `.folio/config.toml`
//!
//! ---
//!
//! Built by Axel Sundqvist (c)2025

pub mod algorithms;
pub mod config;
pub mod content;
pub mod error;
pub mod geometry;
pub mod nav;
pub mod network;
pub mod particles;
pub mod perspective;
pub mod playback;
pub mod resume;
pub mod schedule;
pub mod signal;
pub mod theme;
pub mod wireless;

pub use config::FolioConfig;
pub use error::{Error, Result};
pub use geometry::{Bounds, Point};
