//! Terminal frontend for the skycast weather dashboard.
//!
//! This crate wires the core (fetching, aggregation, carousel) to a
//! ratatui/crossterm terminal UI:
//!
//! - [`config`]: TOML configuration, including last-city persistence
//! - [`summary`]: the one-shot textual weather update
//! - [`tui`]: the interactive dashboard — orchestrator, worker, input
//!   mapping, and rendering

pub mod config;
pub mod summary;
pub mod tui;
