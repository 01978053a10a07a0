use std::env::vars;
use std::path::{Path, PathBuf};

use anyhow::bail;
use serde::Deserialize;

/// Schemes the Test action may hand to the platform when none are configured.
pub const DEFAULT_LINK_SCHEMES: &[&str] = &["http", "https", "mailto"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    share_dir: Option<PathBuf>,
    link_schemes: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            share_dir: None,
            link_schemes: DEFAULT_LINK_SCHEMES.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    quickqr_share_dir: Option<String>,
    quickqr_link_schemes: Option<String>,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    pub fn init() -> anyhow::Result<Self> {
        log::info!("Loading configuration from environment variables");
        let raw: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw)
    }

    /// Like [`AppConfig::init`], but falls back to the defaults on error.
    pub fn init_or_default() -> Self {
        Self::init().unwrap_or_else(|err| {
            log::warn!("Invalid configuration, using defaults: {err:#}");
            Self::default()
        })
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            quickqr_share_dir,
            quickqr_link_schemes,
        } = raw;

        let share_dir = quickqr_share_dir
            .map(|dir| dir.trim().to_owned())
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        let link_schemes = match quickqr_link_schemes {
            Some(list) => {
                let schemes = parse_schemes(&list);
                if schemes.is_empty() {
                    bail!("QUICKQR_LINK_SCHEMES must name at least one scheme");
                }
                schemes
            }
            None => Self::default().link_schemes,
        };

        Ok(Self {
            share_dir,
            link_schemes,
        })
    }

    /// Directory the share dialog opens in.
    pub fn share_dir(&self) -> Option<&Path> {
        self.share_dir.as_deref()
    }

    pub fn link_schemes(&self) -> &[String] {
        &self.link_schemes
    }

    /// Whether the Test action may open `uri`, judged by its scheme.
    pub fn allows_link(&self, uri: &str) -> bool {
        uri.split_once(':').is_some_and(|(scheme, _)| {
            self.link_schemes
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(scheme))
        })
    }
}

fn parse_schemes(list: &str) -> Vec<String> {
    list.split(',')
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
