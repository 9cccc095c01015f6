//! Cookie database location per browser, platform, and profile.

use std::env;
use std::path::PathBuf;
use tracing::info;

use crate::error::{Error, Result};

/// Resolves the cookie database path for the given browser and profile
/// directory name (for example `Default` or `Profile 2`).
pub fn cookie_db_path(browser: &str, profile: &str) -> Result<PathBuf> {
    let system = env::consts::OS;
    let home = env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map_err(|_| Error::UnsupportedPlatform {
            browser: browser.to_string(),
            os: system.to_string(),
        })?;

    let path = match (browser.to_lowercase().as_str(), system) {
        ("chrome", "windows") => {
            let local_app_data =
                env::var("LOCALAPPDATA").map_err(|_| Error::UnsupportedPlatform {
                    browser: browser.to_string(),
                    os: system.to_string(),
                })?;
            PathBuf::from(local_app_data)
                .join("Google/Chrome/User Data")
                .join(profile)
                .join("Network/Cookies")
        }
        ("chrome", "macos") => PathBuf::from(home)
            .join("Library/Application Support/Google/Chrome")
            .join(profile)
            .join("Cookies"),
        ("chrome", "linux") => PathBuf::from(home)
            .join(".config/google-chrome")
            .join(profile)
            .join("Cookies"),
        ("vivaldi", "windows") => {
            let local_app_data =
                env::var("LOCALAPPDATA").map_err(|_| Error::UnsupportedPlatform {
                    browser: browser.to_string(),
                    os: system.to_string(),
                })?;
            PathBuf::from(local_app_data)
                .join("Vivaldi/User Data")
                .join(profile)
                .join("Network/Cookies")
        }
        ("vivaldi", "macos") => PathBuf::from(home)
            .join("Library/Application Support/Vivaldi")
            .join(profile)
            .join("Cookies"),
        ("vivaldi", "linux") => PathBuf::from(home)
            .join(".config/vivaldi")
            .join(profile)
            .join("Cookies"),
        _ => {
            return Err(Error::UnsupportedPlatform {
                browser: browser.to_string(),
                os: system.to_string(),
            })
        }
    };

    info!(action = "resolve", component = "cookie_path", browser = browser, profile = profile, path = ?path, "Cookie database path resolved");
    Ok(path)
}
