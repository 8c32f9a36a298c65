//! Application configuration.
//!
//! Centralized constants for the InstaSave frontend. Everything is
//! compile-time: the page has no backend and reads no environment.

/// Application name, used for the document title and hero heading.
pub const APP_NAME: &str = "InstaSave It";

/// Substring a submitted URL must contain to be accepted.
///
/// Case-sensitive, matched anywhere in the input.
pub const INSTAGRAM_HOST_MARKER: &str = "instagram.com";

/// Period of the progress schedule, in milliseconds.
pub const PROGRESS_TICK_MS: u32 = 200;

/// Percent added to the progress bar on each tick.
pub const PROGRESS_STEP: u8 = 10;

/// Highest value the progress schedule may reach on its own.
///
/// Only a completed fetch moves the bar to 100.
pub const PROGRESS_CAP: u8 = 90;

/// Simulated round trip of [`SimulatedFetcher`](crate::SimulatedFetcher), in milliseconds.
pub const SIMULATED_FETCH_MS: u32 = 2_000;

/// Download link used by every simulated result.
pub const PLACEHOLDER_DOWNLOAD_TARGET: &str = "#";

/// Thumbnail used by every simulated result.
pub const PLACEHOLDER_THUMBNAIL: &str = "/placeholder.svg";

/// Maximum toasts on screen at once. Oldest are evicted first.
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// Delay before a toast dismisses itself, in milliseconds.
pub const TOAST_DURATION_MS: u32 = 5_000;
