//! Build-time configuration. The web target has no process environment, so
//! values are captured with `option_env!` when the bundle is compiled.

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u32 = 20;
pub const DEFAULT_VOLUME: f64 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub request_timeout_secs: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl GeminiConfig {
    pub fn from_vars(
        api_key: Option<&str>,
        model: Option<&str>,
        base_url: Option<&str>,
        timeout_secs: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_key: non_blank(api_key),
            model: non_blank(model).unwrap_or(defaults.model),
            base_url: non_blank(base_url)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            request_timeout_secs: timeout_secs
                .and_then(|value| value.trim().parse::<u32>().ok())
                .map(normalize_timeout_secs)
                .unwrap_or(defaults.request_timeout_secs),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    /// Skipping (next/previous/end of track) starts playback even when paused.
    pub resume_on_skip: bool,
    pub initial_volume: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            resume_on_skip: true,
            initial_volume: DEFAULT_VOLUME,
        }
    }
}

impl PlayerConfig {
    pub fn from_vars(resume_on_skip: Option<&str>, initial_volume: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            resume_on_skip: resume_on_skip
                .and_then(parse_flag)
                .unwrap_or(defaults.resume_on_skip),
            initial_volume: initial_volume
                .and_then(|value| value.trim().parse::<f64>().ok())
                .map(normalize_volume)
                .unwrap_or(defaults.initial_volume),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    pub gemini: GeminiConfig,
    pub player: PlayerConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            gemini: GeminiConfig::from_vars(
                option_env!("TOXICFY_GEMINI_API_KEY").or(option_env!("GEMINI_API_KEY")),
                option_env!("TOXICFY_GEMINI_MODEL"),
                option_env!("TOXICFY_GEMINI_BASE_URL"),
                option_env!("TOXICFY_GEMINI_TIMEOUT_SECS"),
            ),
            player: PlayerConfig::from_vars(
                option_env!("TOXICFY_RESUME_ON_SKIP"),
                option_env!("TOXICFY_INITIAL_VOLUME"),
            ),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn normalize_timeout_secs(value: u32) -> u32 {
    value.clamp(1, 120)
}

/// Accepts either a fraction or a percentage and lands in [0, 1].
pub fn normalize_volume(mut value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_VOLUME;
    }
    let mut passes = 0;
    while value > 1.0 && passes < 4 {
        value /= 100.0;
        passes += 1;
    }
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = GeminiConfig::from_vars(Some("  "), Some(""), None, Some("abc"));
        assert_eq!(config, GeminiConfig::default());
        assert!(!config.has_api_key());
    }

    #[test]
    fn timeouts_are_clamped() {
        let config = GeminiConfig::from_vars(Some("key"), None, None, Some("900"));
        assert_eq!(config.request_timeout_secs, 120);
        let config = GeminiConfig::from_vars(Some("key"), None, None, Some("0"));
        assert_eq!(config.request_timeout_secs, 1);
    }

    #[test]
    fn base_url_loses_trailing_slash() {
        let config = GeminiConfig::from_vars(None, Some("m"), Some("http://localhost:9/"), None);
        assert_eq!(config.base_url, "http://localhost:9");
        assert_eq!(config.model, "m");
    }

    #[test]
    fn player_flags_and_volume() {
        let config = PlayerConfig::from_vars(Some("off"), Some("40"));
        assert!(!config.resume_on_skip);
        assert!((config.initial_volume - 0.4).abs() < f64::EPSILON);

        let config = PlayerConfig::from_vars(Some("maybe"), Some("NaN"));
        assert!(config.resume_on_skip);
        assert!((config.initial_volume - DEFAULT_VOLUME).abs() < f64::EPSILON);
    }
}
