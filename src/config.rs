//! Endpoint profile configuration
//!
//! Profiles live in a single YAML file, by default
//! `~/.config/faasctl/config.yaml`, overridable with the
//! `FAASCTL_CONFIG_PATH` environment variable. Each profile names a
//! function engine endpoint and how to authenticate against it;
//! credentials are always sourced from environment variables, never
//! stored in the file.
//!
//! ## Environment Variable Expansion
//!
//! The file supports environment variable expansion with the following
//! syntax:
//! - `${VAR}` - Simple substitution
//! - `${VAR:-default}` - Use default if VAR is unset or empty
//! - `${VAR-default}` - Use default if VAR is unset
//! - `${VAR:+alt}` - Use alt if VAR is set and non-empty
//! - `${VAR+alt}` - Use alt if VAR is set
//!
//! # Example
//!
//! ```yaml
//! defaultProfile: dev
//! profiles:
//!   - name: dev
//!     endpoint: http://localhost:7070
//!     auth:
//!       type: token
//!       tokenEnv: FAAS_TOKEN
//! ```

use anyhow::{anyhow, bail, Context};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// The profile file: named endpoint profiles plus an optional default.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GlobalConfig {
    #[serde(default)]
    pub default_profile: Option<String>,
    #[serde(default)]
    pub profiles: Vec<ProfileConfig>,
}

/// One named endpoint with its authentication settings.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileConfig {
    pub name: String,
    /// Base URL of the function engine API
    pub endpoint: String,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Authentication configuration for endpoint access
///
/// Credentials are always sourced from environment variables for
/// security.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
#[serde(tag = "type")]
#[derive(Default)]
pub enum AuthConfig {
    /// No authentication (anonymous access)
    #[default]
    None,
    /// HTTP Basic authentication
    Basic {
        /// Username for basic auth
        username: String,
        /// Environment variable containing the password
        password_env: String,
    },
    /// Pre-issued service token sent as `X-Auth-Token`
    Token {
        /// Environment variable containing the token
        token_env: String,
    },
    /// Bearer token authentication (Authorization header)
    Bearer {
        /// Environment variable containing the bearer token
        token_env: String,
    },
}

pub fn config_path() -> PathBuf {
    env::var("FAASCTL_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
            p.push("faasctl/config.yaml");
            p
        })
}

pub fn load_global_config() -> anyhow::Result<GlobalConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(GlobalConfig::default());
    }
    let data = fs::read_to_string(&path)
        .with_context(|| format!("reading profiles from {}", path.display()))?;
    let cfg: GlobalConfig = serde_yaml::from_str(&expand_env_placeholders(&data))?;
    Ok(cfg)
}

pub fn save_global_config(cfg: &GlobalConfig) -> anyhow::Result<()> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = serde_yaml::to_string(cfg)?;
    fs::write(&path, data)?;
    println!("Saved profiles to {}", path.display());
    Ok(())
}

/// Resolve the profile for this invocation. An explicit `--endpoint`
/// always wins, then `--profile` by name, then the configured default,
/// then a lone configured profile, and finally the `FAAS_ENDPOINT`
/// environment variable. A `FAAS_TOKEN` variable, when set, supplies
/// token auth for the endpoint/env paths.
pub fn resolve_profile(
    global: &GlobalConfig,
    name: Option<&str>,
    endpoint: Option<&str>,
) -> anyhow::Result<ProfileConfig> {
    if let Some(endpoint) = endpoint {
        return Ok(ad_hoc_profile("command-line", endpoint));
    }

    if let Some(name) = name {
        return global
            .profiles
            .iter()
            .find(|p| p.name == name)
            .cloned()
            .ok_or_else(|| {
                anyhow!(
                    "profile '{}' not found in {}",
                    name,
                    config_path().display()
                )
            });
    }

    if let Some(default) = &global.default_profile {
        if let Some(p) = global.profiles.iter().find(|p| &p.name == default) {
            return Ok(p.clone());
        }
    }

    if global.profiles.len() == 1 {
        return Ok(global.profiles[0].clone());
    }

    if let Ok(endpoint) = env::var("FAAS_ENDPOINT") {
        return Ok(ad_hoc_profile("environment", &endpoint));
    }

    bail!(
        "No endpoint configured. Use --endpoint, set FAAS_ENDPOINT, or add a profile with 'faasctl profile add'."
    )
}

fn ad_hoc_profile(name: &str, endpoint: &str) -> ProfileConfig {
    let auth = if env::var("FAAS_TOKEN").is_ok() {
        AuthConfig::Token {
            token_env: "FAAS_TOKEN".to_string(),
        }
    } else {
        AuthConfig::None
    };
    ProfileConfig {
        name: name.to_string(),
        endpoint: endpoint.to_string(),
        auth,
    }
}

pub fn expand_env_placeholders(input: &str) -> String {
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?:(:?[-+])([^}]*))?\}").unwrap();
    re.replace_all(input, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let op = caps.get(2).map_or("", |m| m.as_str());
        let val = caps.get(3).map_or("", |m| m.as_str());
        let var = env::var(var_name).ok();

        match (var.as_deref(), op) {
            (Some(v), _) if op.is_empty() => v.to_string(), // ${VAR}
            (Some(v), ":-") if !v.is_empty() => v.to_string(), // ${VAR:-default}
            (None, ":-") => val.to_string(),
            (Some(v), "-") => {
                if v.is_empty() {
                    val.to_string()
                } else {
                    v.to_string()
                }
            } // ${VAR-default}
            (None, "-") => val.to_string(),
            (Some(v), ":+") if !v.is_empty() => val.to_string(), // ${VAR:+alt}
            (Some(_), "+") => val.to_string(),                   // ${VAR+alt}
            _ => "".to_string(),
        }
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_endpoint_override() {
        let global = GlobalConfig {
            default_profile: Some("dev".to_string()),
            profiles: vec![ProfileConfig {
                name: "dev".to_string(),
                endpoint: "http://dev:7070".to_string(),
                auth: AuthConfig::None,
            }],
        };
        let p = resolve_profile(&global, None, Some("http://other:7070")).unwrap();
        assert_eq!(p.endpoint, "http://other:7070");
    }

    #[test]
    fn test_resolve_named_profile() {
        let global = GlobalConfig {
            default_profile: None,
            profiles: vec![
                ProfileConfig {
                    name: "dev".to_string(),
                    endpoint: "http://dev:7070".to_string(),
                    auth: AuthConfig::None,
                },
                ProfileConfig {
                    name: "prod".to_string(),
                    endpoint: "http://prod:7070".to_string(),
                    auth: AuthConfig::None,
                },
            ],
        };
        let p = resolve_profile(&global, Some("prod"), None).unwrap();
        assert_eq!(p.endpoint, "http://prod:7070");
        assert!(resolve_profile(&global, Some("staging"), None).is_err());
    }

    #[test]
    fn test_resolve_falls_back_to_lone_profile() {
        let global = GlobalConfig {
            default_profile: None,
            profiles: vec![ProfileConfig {
                name: "only".to_string(),
                endpoint: "http://only:7070".to_string(),
                auth: AuthConfig::None,
            }],
        };
        let p = resolve_profile(&global, None, None).unwrap();
        assert_eq!(p.name, "only");
    }

    #[test]
    fn test_expand_plain_text_untouched() {
        assert_eq!(
            expand_env_placeholders("endpoint: http://localhost:7070"),
            "endpoint: http://localhost:7070"
        );
    }

    #[test]
    fn test_expand_default_for_unset_var() {
        assert_eq!(
            expand_env_placeholders("${FAASCTL_TEST_SURELY_UNSET:-fallback}"),
            "fallback"
        );
    }
}
