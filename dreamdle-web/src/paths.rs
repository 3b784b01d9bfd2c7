//! Compile-time deployment settings: router base path, Play Service URL and
//! backend mode-config ids.
use dreamdle_game::ModeConfigIds;
use once_cell::sync::Lazy;

const DEFAULT_API_URL: &str = "http://localhost:3000";

static MODE_IDS: Lazy<ModeConfigIds> =
    Lazy::new(|| mode_ids_from(option_env!("DREAMDLE_MODE_IDS")));

/// Base path for the router from `PUBLIC_URL`, `None` when served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Play Service base URL without a trailing slash.
#[must_use]
pub fn api_base() -> String {
    api_base_from(option_env!("DREAMDLE_API_URL"))
}

/// Backend mode-config ids, from `DREAMDLE_MODE_IDS` (`"1,2,3"`) or the defaults.
#[must_use]
pub fn mode_config_ids() -> ModeConfigIds {
    *MODE_IDS
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

fn api_base_from(configured: Option<&str>) -> String {
    let base = configured
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_API_URL);
    base.trim_end_matches('/').to_string()
}

fn mode_ids_from(configured: Option<&str>) -> ModeConfigIds {
    match configured {
        None => ModeConfigIds::default(),
        Some(raw) => ModeConfigIds::parse(raw).unwrap_or_else(|| {
            log::warn!("ignoring malformed DREAMDLE_MODE_IDS {raw:?}");
            ModeConfigIds::default()
        }),
    }
}
