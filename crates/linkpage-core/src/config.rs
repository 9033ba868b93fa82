//! Site configuration seed
//!
//! The static dataset every session starts from: profile copy, image
//! locators, the music source, the home links and the services with
//! their initial price tags and galleries.
//!
//! A default seed ships embedded in the crate ([`SiteConfig::builtin`]);
//! other seeds are JSON files with the same shape.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{SiteError, SiteResult};
use crate::types::{Link, LinkTarget, ProfileInfo, ServiceId};

const BUILTIN_SITE: &str = include_str!("../assets/default_site.json");

/// Initial image locators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagesConfig {
    pub background: String,
    pub profile: String,
}

/// Seed data for one service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    /// Markdown
    #[serde(default)]
    pub description: String,
    pub price_tag: String,
    /// Fixed for the session; may be empty
    #[serde(default)]
    pub gallery: Vec<String>,
}

/// The whole seed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub profile: ProfileInfo,
    pub images: ImagesConfig,
    pub music_url: String,
    #[serde(default)]
    pub links: Vec<Link>,
    pub services: BTreeMap<ServiceId, ServiceConfig>,
}

impl SiteConfig {
    /// The seed embedded in the crate
    pub fn builtin() -> SiteResult<Self> {
        Self::from_json(BUILTIN_SITE)
    }

    /// Parse and validate a JSON seed
    pub fn from_json(json: &str) -> SiteResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON seed file
    pub fn load(path: &Path) -> SiteResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        info!(
            ?path,
            services = config.services.len(),
            links = config.links.len(),
            "Loaded site config"
        );
        Ok(config)
    }

    /// Check cross-references and the music source.
    pub fn validate(&self) -> SiteResult<()> {
        if self.music_url.trim().is_empty() {
            return Err(SiteError::Config("music_url is empty".to_string()));
        }

        for link in &self.links {
            if let LinkTarget::Service(id) = &link.target {
                if !self.services.contains_key(id) {
                    return Err(SiteError::Config(format!(
                        "link '{}' points at unknown service '{}'",
                        link.label, id
                    )));
                }
            }
        }

        Ok(())
    }
}
