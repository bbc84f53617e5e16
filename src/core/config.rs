use std::path::PathBuf;

// ---------------------------------------------------------------------------
// MedscoutConfig: file-based config loader (medscout.json) with env-var fallback
// ---------------------------------------------------------------------------

pub const ENV_CONFIG_PATH: &str = "MEDSCOUT_CONFIG";
pub const ENV_HTTP_TIMEOUT: &str = "HTTP_TIMEOUT_SECS";
pub const ENV_HTTP_CONNECT_TIMEOUT: &str = "HTTP_CONNECT_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "MEDSCOUT_USER_AGENT";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/113.0.0.0 Safari/537.36";

/// Fetch sub-config (mirrors the `fetch` key in medscout.json).
#[derive(serde::Deserialize, Default, Clone, Debug)]
pub struct FetchConfig {
    /// Whole-request timeout in seconds. Default: 10.
    pub timeout_secs: Option<u64>,
    /// TCP connect timeout in seconds. Default: 5.
    pub connect_timeout_secs: Option<u64>,
    /// Browser-like User-Agent sent to the pharmacy sites.
    pub user_agent: Option<String>,
}

impl FetchConfig {
    /// Request timeout: JSON field → `HTTP_TIMEOUT_SECS` env var → 10.
    pub fn resolve_timeout_secs(&self) -> u64 {
        if let Some(n) = self.timeout_secs {
            return n;
        }
        std::env::var(ENV_HTTP_TIMEOUT)
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(10)
    }

    /// Connect timeout: JSON field → `HTTP_CONNECT_TIMEOUT_SECS` env var → 5.
    pub fn resolve_connect_timeout_secs(&self) -> u64 {
        if let Some(n) = self.connect_timeout_secs {
            return n;
        }
        std::env::var(ENV_HTTP_CONNECT_TIMEOUT)
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(5)
    }

    /// User-Agent: JSON field → `MEDSCOUT_USER_AGENT` env var → desktop Chrome.
    pub fn resolve_user_agent(&self) -> String {
        if let Some(ua) = &self.user_agent {
            if !ua.trim().is_empty() {
                return ua.clone();
            }
        }
        std::env::var(ENV_USER_AGENT)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string())
    }
}

/// Top-level config loaded from `medscout.json`.
#[derive(serde::Deserialize, Default, Clone, Debug)]
pub struct MedscoutConfig {
    #[serde(default)]
    pub fetch: FetchConfig,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
}

impl MedscoutConfig {
    pub fn resolve_log_filter(&self) -> String {
        self.log_filter
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or("info")
            .to_string()
    }
}

/// Candidate config locations, first found wins:
/// 1. `MEDSCOUT_CONFIG` env var path
/// 2. `./medscout.json`
/// 3. `~/.medscout/medscout.json`
fn config_candidates() -> Vec<PathBuf> {
    let mut v = vec![PathBuf::from("medscout.json")];
    if let Some(home) = dirs::home_dir() {
        v.push(home.join(".medscout").join("medscout.json"));
    }
    if let Ok(env_path) = std::env::var(ENV_CONFIG_PATH) {
        v.insert(0, PathBuf::from(env_path));
    }
    v
}

/// Load `medscout.json` from the standard locations.
///
/// Missing file → `MedscoutConfig::default()` (all env-var fallbacks apply).
/// Parse error → warning, then defaults.
pub fn load_config() -> MedscoutConfig {
    for path in config_candidates() {
        let Ok(contents) = std::fs::read_to_string(&path) else {
            continue;
        };
        return parse_config(&contents).unwrap_or_else(|e| {
            tracing::warn!(
                "medscout.json parse error at {}: {}; using defaults",
                path.display(),
                e
            );
            MedscoutConfig::default()
        });
    }
    MedscoutConfig::default()
}

pub fn parse_config(contents: &str) -> Result<MedscoutConfig, serde_json::Error> {
    let cfg = serde_json::from_str::<MedscoutConfig>(contents)?;
    tracing::debug!("medscout config parsed: {:?}", cfg);
    Ok(cfg)
}
