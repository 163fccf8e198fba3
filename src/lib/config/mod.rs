use std::{fs, path::Path};

use color_eyre::{Section, eyre::eyre};
use gray_matter::{Matter, engine::YAML};
use serde::Deserialize;

use crate::assembler::{MetadataConfig, WritePolicy};

// Site-wide root used to qualify image paths.
pub const SITE_BASE_URL: &str = "http://localhost/";
pub const SITE_BASE_URL_ENV: &str = "SOCIALMETA_BASE_URL";

/// Convenience container for site metadata used across rendering.
#[derive(Clone, Debug)]
pub struct SiteMeta {
    pub base_url: String,
}

pub fn site_meta() -> SiteMeta {
    let base_url = std::env::var(SITE_BASE_URL_ENV)
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| SITE_BASE_URL.to_string());
    SiteMeta { base_url }
}

/// Administrator-supplied plugin options.
#[derive(Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PluginParams {
    pub title: String,
    pub description: String,
    pub image_site: String,
    pub overwrite: bool,
}

impl TryFrom<&str> for PluginParams {
    type Error = color_eyre::Report;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let matter = Matter::<YAML>::new();
        matter
            .parse::<PluginParams>(value)
            .with_note(|| "While parsing plugin parameters.")
            .map(|res| res.data.unwrap_or_default())
    }
}

impl PluginParams {
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| eyre!("Failed to read {}: {e}", path.display()))?;
        Self::try_from(raw.as_str())
    }

    pub fn metadata_config(&self) -> MetadataConfig {
        MetadataConfig {
            title: self.title.clone(),
            description: self.description.clone(),
            image_site: self.image_site.clone(),
        }
    }

    pub fn write_policy(&self) -> WritePolicy {
        WritePolicy::from_overwrite(self.overwrite)
    }
}
