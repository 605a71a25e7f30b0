use std::env;
use std::path::PathBuf;

use crate::ArchiveError;

/// Runtime configuration, resolved once at startup.
///
/// Credentials are explicit constructor inputs for the provider clients;
/// nothing in this workspace reads the environment after startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub tmdb_api_key: String,
    pub kobis_api_key: String,
    /// Content language for catalog requests.
    pub language: String,
    /// Region for the upcoming-movies listing.
    pub region: String,
    /// Directory holding the favorites blob.
    pub data_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ArchiveError> {
        Ok(Self {
            tmdb_api_key: require("TMDB_API_KEY")?,
            kobis_api_key: require("KOBIS_API_KEY")?,
            language: env_or("ARCHIVE_LANGUAGE", "ko-KR"),
            region: env_or("ARCHIVE_REGION", "KR"),
            data_path: PathBuf::from(env_or("ARCHIVE_DATA_PATH", "./data")),
        })
    }
}

fn require(name: &'static str) -> Result<String, ArchiveError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ArchiveError::ConfigurationMissing(name))
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
