//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Content Types** - What a download produces
//! - **Notification Types** - One-shot toasts shown to the user
//! - **Icon Types** - Glyphs shared by cards and the feature grid
//! - **Error Types** - Download workflow errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{PLACEHOLDER_DOWNLOAD_TARGET, PLACEHOLDER_THUMBNAIL};

// =============================================================================
// Content Types
// =============================================================================

/// Kind of Instagram content behind a URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Photo or carousel post
    Post,
    /// 24h story
    Story,
    /// Short video
    Reel,
}

impl ContentKind {
    /// Display order of the "Supported Content Types" panel.
    pub const SUPPORTED: [ContentKind; 3] = [ContentKind::Post, ContentKind::Reel, ContentKind::Story];

    /// Capitalized singular label ("Post", "Story", "Reel").
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Post => "Post",
            ContentKind::Story => "Story",
            ContentKind::Reel => "Reel",
        }
    }

    /// Plural heading for the supported types panel.
    pub fn plural(&self) -> &'static str {
        match self {
            ContentKind::Post => "Posts",
            ContentKind::Story => "Stories",
            ContentKind::Reel => "Reels",
        }
    }

    /// Short description for the supported types panel.
    pub fn blurb(&self) -> &'static str {
        match self {
            ContentKind::Post => "Photos & carousels",
            ContentKind::Story => "24h content",
            ContentKind::Reel => "Short videos",
        }
    }

    /// Icon shown next to a result of this kind.
    pub fn icon(&self) -> Icon {
        match self {
            ContentKind::Reel => Icon::PlayCircle,
            ContentKind::Story => Icon::Video,
            ContentKind::Post => Icon::Image,
        }
    }
}

/// A piece of content ready for download.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResult {
    /// URL exactly as the user submitted it
    pub source_url: String,
    /// What the URL points at
    pub content_kind: ContentKind,
    /// Link target of the download button
    pub download_target: String,
    /// Preview image path
    pub thumbnail: String,
}

impl DownloadResult {
    /// Stand-in result used until real retrieval exists: always a post,
    /// linking to placeholder targets.
    pub fn placeholder(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            content_kind: ContentKind::Post,
            download_target: PLACEHOLDER_DOWNLOAD_TARGET.to_string(),
            thumbnail: PLACEHOLDER_THUMBNAIL.to_string(),
        }
    }
}

// =============================================================================
// Notification Types
// =============================================================================

/// Visual weight of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral or success message
    #[default]
    Default,
    /// Error message
    Destructive,
}

impl Severity {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Default => "toast toast-default",
            Severity::Destructive => "toast toast-destructive",
        }
    }
}

/// A one-shot message for the toaster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Destructive,
            ..Self::new(title, description)
        }
    }

    /// Emitted when a run produced a result.
    pub fn download_ready() -> Self {
        Self::new("Download Ready!", "Your Instagram content is ready to download")
    }
}

// =============================================================================
// Icon Types
// =============================================================================

/// Glyphs used across the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Instagram,
    Download,
    Image,
    Video,
    PlayCircle,
    Zap,
    Shield,
    Smartphone,
}

impl Icon {
    /// Get emoji for display.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Instagram => "📸",
            Icon::Download => "⬇️",
            Icon::Image => "🖼️",
            Icon::Video => "🎥",
            Icon::PlayCircle => "▶️",
            Icon::Zap => "⚡",
            Icon::Shield => "🛡️",
            Icon::Smartphone => "📱",
        }
    }

    /// Accessible label for screen readers.
    pub fn label(&self) -> &'static str {
        match self {
            Icon::Instagram => "Instagram",
            Icon::Download => "Download",
            Icon::Image => "Image",
            Icon::Video => "Video",
            Icon::PlayCircle => "Play",
            Icon::Zap => "Fast",
            Icon::Shield => "Secure",
            Icon::Smartphone => "Mobile",
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Errors of the download workflow.
///
/// Both kinds are terminal: the user sees a toast and may submit again.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DownloadError {
    /// Input does not look like an Instagram link.
    #[error("not an Instagram URL: {0:?}")]
    InvalidUrl(String),

    /// The fetch step failed.
    #[error("download failed: {0}")]
    WorkflowFailure(String),
}

impl DownloadError {
    /// User-facing toast for this error.
    pub fn notification(&self) -> Notification {
        match self {
            DownloadError::InvalidUrl(_) => {
                Notification::destructive("Invalid URL", "Please enter a valid Instagram URL")
            }
            DownloadError::WorkflowFailure(_) => Notification::destructive(
                "Download Failed",
                "Unable to download content. Please try again.",
            ),
        }
    }
}

/// Outcome of a fetch.
pub type FetchResult = Result<DownloadResult, DownloadError>;
