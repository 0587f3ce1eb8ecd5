//! Global constants for ReadWalk

pub mod motion {
    /// Maximum number of text nodes a single motion may visit before giving up
    pub const MAX_NODES: usize = 1000;
}

pub mod scroll {
    /// Block tops below this fraction of the viewport height trigger a scroll
    pub const THRESHOLD_RATIO: f64 = 0.30;
    /// Fraction of the viewport height a scrolled block top lands on
    pub const TARGET_RATIO: f64 = 0.10;
}

pub mod dom {
    /// Parent tags whose text is never walked
    pub const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript"];

    /// Tags that receive typed input; commands are ignored while they hold focus
    pub const EDITABLE_TAGS: &[&str] = &["input", "textarea"];
}

pub mod storage {
    /// Persisted flag gating pointer-driven motions
    pub const MOUSE_MODE_KEY: &str = "mouseModeEnabled";
}

pub mod errors {
    // Error Codes
    pub const CLIPBOARD_UNAVAILABLE: &str = "CLIPBOARD_UNAVAILABLE";
    pub const CLIPBOARD_WRITE_FAILED: &str = "CLIPBOARD_WRITE_FAILED";
    pub const FLAG_PARSE_ERROR: &str = "FLAG_PARSE_ERROR";
    pub const FLAG_ENCODE_ERROR: &str = "FLAG_ENCODE_ERROR";
    pub const FLAG_STORE_IO: &str = "FLAG_STORE_IO";
    pub const TERMINAL_ERROR: &str = "TERMINAL_ERROR";
}

pub mod modes {
    pub const NORMAL: &str = "NORMAL";
    pub const VISUAL: &str = "VISUAL";
    pub const VISUAL_INDICATOR: &str = "-- VISUAL --";
    pub const MOUSE_INDICATOR: &str = "-- MOUSE --";
}
