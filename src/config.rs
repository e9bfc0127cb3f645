use anyhow::{Context, Result};
use chrono_tz::Tz;
use std::path::PathBuf;

pub(crate) const TIMEZONE_VAR: &str = "SMSLEDGER_TIMEZONE";
pub(crate) const DB_VAR: &str = "SMSLEDGER_DB";

const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Dhaka;
const DB_FILE_NAME: &str = "smsledger.db";

/// Startup settings.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Settings {
    pub(crate) timezone: Tz,
    pub(crate) db_path: PathBuf,
}

impl Settings {
    /// Read settings from the process environment, after loading `.env` if
    /// one exists. Variables already set in the environment win.
    pub(crate) fn from_env() -> Result<Self> {
        // A missing .env is the normal case
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let timezone = match lookup(TIMEZONE_VAR).filter(|v| !v.trim().is_empty()) {
            Some(name) => parse_timezone(&name)?,
            None => DEFAULT_TIMEZONE,
        };

        let db_path = match lookup(DB_VAR).filter(|v| !v.trim().is_empty()) {
            Some(path) => PathBuf::from(expand_home(path.trim())),
            None => default_db_path()?,
        };

        Ok(Self { timezone, db_path })
    }
}

pub(crate) fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Invalid {TIMEZONE_VAR}: '{name}'"))
}

fn default_db_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "smsledger", "SmsLedger")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().join(DB_FILE_NAME))
}

pub(crate) fn expand_home(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests;
