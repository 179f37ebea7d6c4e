use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{debug, info};
use yaml_rust2::{Yaml, YamlLoader};

use crate::error::{Error, Result};
use crate::steam::api::DEFAULT_HOST;

pub const DEFAULT_API_KEY_FILE: &str = "steamapi.key";
pub const DEFAULT_STEAM_ID_FILE: &str = "steam.id";
pub const DEFAULT_JOBS: usize = 4;

/// Account argument that stands for the ID stored in the Steam ID file.
pub const SELF_ACCOUNT: &str = "self";

/// Where to find the secrets and how to talk to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_key_file: PathBuf,
    pub steam_id_file: PathBuf,
    pub api_host: String,
    pub jobs: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key_file: PathBuf::from(DEFAULT_API_KEY_FILE),
            steam_id_file: PathBuf::from(DEFAULT_STEAM_ID_FILE),
            api_host: DEFAULT_HOST.to_string(),
            jobs: DEFAULT_JOBS,
        }
    }
}

impl Settings {
    /// Defaults, then the YAML config file if one was given, then flags.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let mut settings = match matches.get_one::<PathBuf>("config") {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };

        if let Some(path) = matches.get_one::<PathBuf>("api_key") {
            settings.api_key_file.clone_from(path);
        }
        if let Some(path) = matches.get_one::<PathBuf>("steam_id_file") {
            settings.steam_id_file.clone_from(path);
        }
        if let Some(&jobs) = matches.get_one::<usize>("jobs") {
            settings.jobs = jobs;
        }

        debug!("{settings:?}");
        Ok(settings)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let text = read_to_string(path).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
            hint: "Check the path given to --config-file.",
        })?;

        Self::from_yaml(&text).map_err(|message| Error::ConfigFormat {
            path: path.to_path_buf(),
            message,
        })
    }

    fn from_yaml(text: &str) -> std::result::Result<Self, String> {
        let docs = YamlLoader::load_from_str(text).map_err(|e| e.to_string())?;
        let mut settings = Self::default();

        // An empty file holds no documents at all.
        let Some(doc) = docs.first() else {
            return Ok(settings);
        };
        if !doc.is_null() && doc.as_hash().is_none() {
            return Err("expected a mapping at the top level".to_string());
        }

        if let Some(path) = string_key(doc, "api_key_file")? {
            settings.api_key_file = PathBuf::from(path);
        }
        if let Some(path) = string_key(doc, "steam_id_file")? {
            settings.steam_id_file = PathBuf::from(path);
        }
        if let Some(host) = string_key(doc, "api_host")? {
            settings.api_host = host.to_string();
        }
        match &doc["jobs"] {
            Yaml::BadValue | Yaml::Null => {}
            Yaml::Integer(jobs) if *jobs >= 1 => {
                settings.jobs = usize::try_from(*jobs).map_err(|e| e.to_string())?;
            }
            _ => return Err("`jobs` must be a positive integer".to_string()),
        }

        Ok(settings)
    }
}

fn string_key<'a>(doc: &'a Yaml, key: &str) -> std::result::Result<Option<&'a str>, String> {
    match &doc[key] {
        Yaml::BadValue | Yaml::Null => Ok(None),
        Yaml::String(value) => Ok(Some(value.as_str())),
        _ => Err(format!("`{key}` must be a string")),
    }
}

/// Secrets read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub steam_id: String,
}

impl Config {
    /// Reads the API key, and the Steam ID file when `account` is `self`.
    pub fn load(settings: &Settings, account: &str) -> Result<Self> {
        let api_key = read_secret(
            &settings.api_key_file,
            "Did you create the file containing your steam api key?",
        )?;

        let steam_id = if account == SELF_ACCOUNT {
            read_secret(
                &settings.steam_id_file,
                "Did you create the file containing your steam id?",
            )?
        } else {
            account.trim().to_string()
        };

        info!("Primary account: {steam_id}");
        Ok(Self { api_key, steam_id })
    }
}

fn read_secret(path: &Path, hint: &'static str) -> Result<String> {
    read_to_string(path)
        .map(|text| text.trim().to_string())
        .map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
            hint,
        })
}
