//! Service configuration.
//!
//! Everything comes from the process environment once, at startup, and is
//! carried in an explicit [`Config`] object from there on, with no ambient
//! globals. Every value has a default so a bare `charla-server` starts (with
//! the relay answering its missing-credential placeholder).

use std::env;
use std::str::FromStr;
use std::time::Duration;

use charla_relay::RelayConfig;

/// Denylist patterns shipped by default; `CHARLA_DENYLIST` appends to these.
const DEFAULT_DENYLIST: &[&str] = &["porno", "nsfw", "gambling", "apuestas"];

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the HTTP server binds.
    pub bind_addr: String,

    /// Provider base URL.
    pub base_url: String,

    /// Provider credential. Optional: the service stays interactive without
    /// one, it just answers with the relay's placeholder text.
    pub api_key: Option<String>,

    /// Model identifier.
    pub model: String,

    /// Sampling temperature, fixed per deployment.
    pub temperature: Option<f32>,

    /// Upstream request deadline.
    pub upstream_timeout: Duration,

    /// Canonical domain to redirect legacy hosts to, if any.
    pub canonical_domain: Option<String>,

    /// Host suffix that identifies legacy addresses worth redirecting.
    pub legacy_host_suffix: String,

    /// Prebuilt `Content-Security-Policy` header value.
    pub csp: String,

    /// Requests allowed per client IP per window.
    pub rate_limit_max: u32,

    /// Rate-limit window length.
    pub rate_limit_window: Duration,

    /// Brand line the model is instructed to end answers with; fallback
    /// answers hardcode it.
    pub signature: String,

    /// Denylist patterns for the policy guard (lowercase).
    pub denylist: Vec<String>,
}

impl Config {
    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        let bind_addr = env_opt("BIND_ADDR").unwrap_or_else(|| {
            let port = env_parse("PORT", 10000u16);
            format!("0.0.0.0:{port}")
        });

        let mut denylist: Vec<String> = DEFAULT_DENYLIST
            .iter()
            .map(|p| p.to_lowercase())
            .collect();
        if let Some(extra) = env_opt("CHARLA_DENYLIST") {
            denylist.extend(
                extra
                    .split(',')
                    .map(|p| p.trim().to_lowercase())
                    .filter(|p| !p.is_empty()),
            );
        }

        Self {
            bind_addr,
            base_url: env_opt("OPENAI_BASE_URL")
                .unwrap_or_else(|| "https://api.openai.com".to_string()),
            api_key: env_opt("OPENAI_API_KEY"),
            model: env_opt("CHARLA_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string()),
            temperature: env_opt("CHARLA_TEMPERATURE").and_then(|v| v.parse().ok()),
            upstream_timeout: Duration::from_secs(env_parse("UPSTREAM_TIMEOUT_SECS", 30u64)),
            canonical_domain: env_opt("CANONICAL_DOMAIN"),
            legacy_host_suffix: env_opt("LEGACY_HOST_SUFFIX")
                .unwrap_or_else(|| ".onrender.com".to_string()),
            csp: build_frame_ancestors(env_opt("CSP_ANCESTORS").as_deref().unwrap_or("")),
            rate_limit_max: env_parse("RATE_LIMIT_MAX", 8u32),
            rate_limit_window: Duration::from_secs(env_parse("RATE_LIMIT_WINDOW_SECS", 60u64)),
            signature: env_opt("CHARLA_SIGNATURE").unwrap_or_else(|| "— Charla".to_string()),
            denylist,
        }
    }

    /// Derive the relay's own configuration.
    pub fn relay_config(&self) -> RelayConfig {
        RelayConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            timeout: self.upstream_timeout,
            signature: self.signature.clone(),
        }
    }
}

/// Build the `frame-ancestors` CSP value from a raw ancestor list.
///
/// The raw value comes straight from deployment config, so quotes and line
/// breaks are stripped and entries may be separated by commas or whitespace.
/// An empty list falls back to `'self'`.
pub fn build_frame_ancestors(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| match c {
            '\r' | '\n' | '\'' | '"' => ' ',
            c => c,
        })
        .collect();
    let list: Vec<&str> = cleaned
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();

    if list.is_empty() {
        "frame-ancestors 'self'".to_string()
    } else {
        format!("frame-ancestors {}", list.join(" "))
    }
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T: FromStr + Copy>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_ancestors_from_space_separated_list() {
        let csp = build_frame_ancestors("https://example.com https://chat.example.com");
        assert_eq!(
            csp,
            "frame-ancestors https://example.com https://chat.example.com"
        );
    }

    #[test]
    fn test_frame_ancestors_tolerates_commas_and_quotes() {
        let csp = build_frame_ancestors("\"https://a.com\",\n'https://b.com'");
        assert_eq!(csp, "frame-ancestors https://a.com https://b.com");
    }

    #[test]
    fn test_frame_ancestors_empty_falls_back_to_self() {
        assert_eq!(build_frame_ancestors(""), "frame-ancestors 'self'");
        assert_eq!(build_frame_ancestors(" \n "), "frame-ancestors 'self'");
    }
}
