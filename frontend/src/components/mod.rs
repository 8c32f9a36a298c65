//! UI Components for the InstaSave application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and tagline
//! - [`Features`] - Static marketing grid
//! - [`Footer`] - Page footer
//! - [`NotFound`] - Fallback route
//!
//! # Feature Components
//! - [`DownloadForm`] - URL submission with simulated download
//! - [`ProgressBar`] - Download progress indicator
//! - [`ResultCard`] - Finished download summary
//! - [`Toaster`] - One-shot notifications

mod hero;
mod download_form;
mod progress;
mod result_card;
mod features;
mod footer;
mod not_found;
mod toaster;

pub use hero::*;
pub use download_form::*;
pub use progress::*;
pub use result_card::*;
pub use features::*;
pub use footer::*;
pub use not_found::*;
pub use toaster::*;
