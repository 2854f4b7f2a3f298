use once_cell::sync::OnceCell;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_PREFS_FILE: &str = "hotel-dash-prefs.json";

/// Environment key for the prediction service base URL.
pub const API_URL_KEY: &str = "HOTEL_API_URL";
/// Environment key for the desktop preferences file.
pub const PREFS_PATH_KEY: &str = "HOTEL_PREFS_PATH";
/// Local-storage key that overrides the base URL in the browser.
pub const API_URL_STORAGE_KEY: &str = "hotel_api_url";

static SETTINGS: OnceCell<AppSettings> = OnceCell::new();

#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub api_base_url: String,
    pub prefs_path: PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            prefs_path: PathBuf::from(DEFAULT_PREFS_FILE),
        }
    }
}

impl AppSettings {
    /// Layers `lookup` over the build-time value over the defaults. Blank
    /// values are skipped.
    pub fn resolve(build_time_url: Option<&str>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        if let Some(url) = non_blank(build_time_url.map(str::to_string)) {
            settings.api_base_url = url;
        }
        if let Some(url) = non_blank(lookup(API_URL_KEY)) {
            settings.api_base_url = url;
        }
        if let Some(path) = non_blank(lookup(PREFS_PATH_KEY)) {
            settings.prefs_path = PathBuf::from(path.trim());
        }
        settings.api_base_url = settings
            .api_base_url
            .trim()
            .trim_end_matches('/')
            .to_string();
        settings
    }

    /// Reads the sources available to the current build.
    pub fn from_environment() -> Self {
        let build_time = option_env!("HOTEL_API_URL");

        #[cfg(feature = "web")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
            Self::resolve(build_time, |key| {
                if key != API_URL_KEY {
                    return None;
                }
                storage
                    .as_ref()
                    .and_then(|s| s.get_item(API_URL_STORAGE_KEY).ok().flatten())
            })
        }
        #[cfg(not(feature = "web"))]
        {
            #[cfg(feature = "desktop")]
            dotenvy::dotenv().ok();
            Self::resolve(build_time, |key| std::env::var(key).ok())
        }
    }
}

/// Installs the process-wide settings. Later calls are ignored.
pub fn init(settings: AppSettings) -> &'static AppSettings {
    SETTINGS.get_or_init(|| settings)
}

pub fn get() -> &'static AppSettings {
    SETTINGS.get_or_init(AppSettings::from_environment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_without_sources() {
        let s = AppSettings::resolve(None, lookup(&[]));
        assert_eq!(s.api_base_url, "http://localhost:8000");
        assert_eq!(s.prefs_path, PathBuf::from(DEFAULT_PREFS_FILE));
    }

    #[test]
    fn runtime_beats_build_time() {
        let s = AppSettings::resolve(
            Some("http://build:1"),
            lookup(&[(API_URL_KEY, "http://runtime:2/")]),
        );
        assert_eq!(s.api_base_url, "http://runtime:2");
    }

    #[test]
    fn blank_values_are_skipped() {
        let s = AppSettings::resolve(Some("http://build:1"), lookup(&[(API_URL_KEY, "  ")]));
        assert_eq!(s.api_base_url, "http://build:1");
    }

    #[test]
    fn prefs_path_override() {
        let s = AppSettings::resolve(None, lookup(&[(PREFS_PATH_KEY, "/tmp/prefs.json")]));
        assert_eq!(s.prefs_path, PathBuf::from("/tmp/prefs.json"));
    }
}
