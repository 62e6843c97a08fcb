//! Core logic for the skycast weather dashboard.
//!
//! This crate provides the three pieces every frontend needs:
//!
//! - **Fetching**: [`WeatherClient`] issues the paired current/forecast
//!   requests for one search and normalizes the provider's responses.
//! - **Aggregation**: [`daily_representatives`] collapses the 3-hour
//!   forecast series into one nearest-noon sample per local calendar day.
//! - **Interaction**: [`Carousel`] is the drag/swipe state machine over the
//!   rendered day cards, with rubber-band boundaries, snap paging, and the
//!   boundary bounce.
//!
//! Rendering is deliberately absent: the carousel and aggregator are pure
//! state and transforms, projected onto a UI by the frontend crate.

pub mod aggregate;
pub mod carousel;
pub mod client;
pub mod error;

pub use aggregate::{MAX_FORECAST_DAYS, daily_representatives};
pub use carousel::{CardGeometry, Carousel, Phase, ResizeDebouncer};
pub use client::{WeatherBundle, WeatherClient};
pub use error::{Error, Result};
