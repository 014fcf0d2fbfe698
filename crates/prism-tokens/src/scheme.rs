//! OS color scheme detection.
//!
//! Used only to pick a starting theme when nothing else decides it. The
//! detector can be replaced for tests with [`set_scheme_detector`]:
//!
//! ```rust
//! use prism_tokens::{detect_color_scheme, set_scheme_detector, ColorScheme};
//!
//! set_scheme_detector(|| ColorScheme::Dark);
//! assert_eq!(detect_color_scheme(), ColorScheme::Dark);
//! ```

use std::sync::Mutex;

use dark_light::Mode as OsMode;
use once_cell::sync::Lazy;

/// The user's preferred color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

type SchemeDetector = fn() -> ColorScheme;

static SCHEME_DETECTOR: Lazy<Mutex<SchemeDetector>> = Lazy::new(|| Mutex::new(os_scheme_detector));

/// Overrides the detector used by [`detect_color_scheme`].
pub fn set_scheme_detector(detector: SchemeDetector) {
    let mut guard = SCHEME_DETECTOR.lock().unwrap_or_else(|e| e.into_inner());
    *guard = detector;
}

/// Detects the preferred color scheme. Unknown or undetectable schemes count
/// as light.
pub fn detect_color_scheme() -> ColorScheme {
    let detector = *SCHEME_DETECTOR.lock().unwrap_or_else(|e| e.into_inner());
    detector()
}

fn os_scheme_detector() -> ColorScheme {
    match dark_light::detect() {
        Ok(OsMode::Dark) => ColorScheme::Dark,
        _ => ColorScheme::Light,
    }
}
