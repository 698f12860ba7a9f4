pub mod domain;
pub mod parse;

pub mod config {
    use crate::parse::ParseOptions;
    use anyhow::Context;

    /// Environment-driven overrides for the parsing defaults.
    ///
    /// Every field falls back to the documented default when the variable is
    /// unset; a variable that is set but unparseable is an error.
    #[derive(Debug, Clone)]
    pub struct Settings {
        pub horizon: String,
        pub max_key_points: usize,
        pub max_risks: usize,
        pub min_item_chars: usize,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let defaults = ParseOptions::default();
            Ok(Self {
                horizon: std::env::var("REPORT_HORIZON")
                    .ok()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .unwrap_or(defaults.horizon),
                max_key_points: usize_env("REPORT_MAX_KEY_POINTS", defaults.max_key_points)?,
                max_risks: usize_env("REPORT_MAX_RISKS", defaults.max_risks)?,
                min_item_chars: usize_env("REPORT_MIN_ITEM_CHARS", defaults.min_item_chars)?,
            })
        }

        pub fn into_options(self) -> ParseOptions {
            ParseOptions {
                horizon: self.horizon,
                max_key_points: self.max_key_points,
                max_risks: self.max_risks,
                min_item_chars: self.min_item_chars,
            }
        }
    }

    fn usize_env(key: &str, default: usize) -> anyhow::Result<usize> {
        match std::env::var(key) {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("{key} must be an unsigned integer (got {raw:?})")),
            Err(_) => Ok(default),
        }
    }

}
