//! Compile-time site configuration.

use log::Level;

/// How long the page loader stays up before the main content is revealed.
pub const LOADER_DELAY_MS: u32 = 1_800;

/// Period of the hero carousel's automatic advance.
pub const CAROUSEL_INTERVAL_MS: u32 = 3_000;

/// Scroll offset past which the nav switches to its solid background.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 60.0;

/// Scroll offset past which the scroll-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 400.0;

/// Hero parallax: offset range and the translation it maps onto.
pub const PARALLAX_SHIFT_RANGE: (f64, f64) = (0.0, 500.0);
pub const PARALLAX_SHIFT_PX: (f64, f64) = (0.0, 150.0);

/// Hero parallax: offset range over which the content fades out.
pub const PARALLAX_FADE_RANGE: (f64, f64) = (0.0, 300.0);

/// Fraction of the viewport trimmed from each edge before an element counts as in view.
pub const IN_VIEW_MARGIN: f64 = 0.1;

pub const DOWNLOAD_PATH: &str = "/notch.exe";
pub const SETUP_DOWNLOAD_PATH: &str = "/Notch-Setup.exe";
pub const ICON_PATH: &str = "/icon.ico";
pub const CONTACT_EMAIL: &str = "support@notch.app";
pub const SUPPORT_EMAIL: &str = "rahimsaroarmishu@gmail.com";
pub const DEMO_VIDEO_ID: &str = "e1QTM-IwH7M";

pub fn log_level() -> Level {
    parse_log_level(option_env!("NOTCH_LOG"))
}

fn parse_log_level(raw: Option<&str>) -> Level {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(default_log_level())
}

fn default_log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

pub fn demo_video_url() -> String {
    format!(
        "https://www.youtube.com/embed/{id}?autoplay=1&mute=1&loop=1&playlist={id}&controls=0&showinfo=0&rel=0&modestbranding=1",
        id = DEMO_VIDEO_ID
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels_case_insensitively() {
        assert_eq!(parse_log_level(Some("warn")), Level::Warn);
        assert_eq!(parse_log_level(Some(" TRACE ")), Level::Trace);
    }

    #[test]
    fn falls_back_to_build_default() {
        assert_eq!(parse_log_level(None), default_log_level());
        assert_eq!(parse_log_level(Some("loud")), default_log_level());
    }

    #[test]
    fn video_url_loops_the_same_clip() {
        let url = demo_video_url();
        assert!(url.starts_with("https://www.youtube.com/embed/e1QTM-IwH7M?"));
        assert!(url.contains("playlist=e1QTM-IwH7M"));
    }
}
