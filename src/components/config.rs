//! Compile-time settings for the podcast page.

pub const PAGE_TITLE: &str = "AI Karyashala Podcasts";
pub const PAGE_TAGLINE: &str = "Recorded class sessions, searchable by topic or date";

// Quiet period after the last keystroke before the grid is re-filtered.
pub const SEARCH_DEBOUNCE_MS: u32 = 200;

// Added to <body> while the player is showing so the page behind it stops scrolling.
pub const MODAL_OPEN_BODY_CLASS: &str = "modal-open";

pub const CATALOG_DATE_FORMAT: &str = "%d-%m-%Y";

pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "mkv"];

pub const EMBEDDED_CATALOG: &str = include_str!("../../static/episodes.json");
