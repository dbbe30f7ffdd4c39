//! Interactive credential provider: environment, then config file, then a prompt.

use anyhow::{Context, Result, bail};
use inquire::{Confirm, InquireError, Password, PasswordDisplayMode};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use weather_core::{Config, CredentialProvider, StaticCredential};

pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

const MISSING_KEY: &str = "You must enter a valid API key to use this app.";

/// Resolve the API key for this run.
///
/// With `interactive` set, a missing key is prompted for and optionally saved.
/// Giving up on the prompt ends the program.
pub fn resolve(config: &mut Config, interactive: bool) -> Result<StaticCredential> {
    let from_env = StaticCredential::new(std::env::var(API_KEY_ENV).unwrap_or_default());
    if let Some(key) = from_env.api_key() {
        debug!("Using API key from {API_KEY_ENV}");
        return Ok(StaticCredential::new(key));
    }

    if let Some(key) = config.api_key() {
        debug!("Using API key from config file");
        return Ok(StaticCredential::new(key));
    }

    if !interactive {
        // The session reports the missing credential itself.
        return Ok(StaticCredential::none());
    }

    let key = match prompt_api_key()? {
        Some(key) => key,
        None => bail!(MISSING_KEY),
    };

    let answer = Confirm::new("Would you like to save this API key for future use?")
        .with_default(false)
        .prompt();

    if confirmed(answer)? {
        match Config::config_file_path() {
            Ok(path) => {
                if let Some(saved) = save_key(config, &key, &path) {
                    println!("API key saved to {}", saved.display());
                }
            }
            Err(e) => eprintln!("Could not save API key: {e:#}"),
        }
    }

    Ok(StaticCredential::new(key))
}

/// Cancelling the question means "no"; any other prompt failure is an error.
fn confirmed(answer: Result<bool, InquireError>) -> Result<bool> {
    match answer {
        Ok(yes) => Ok(yes),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
        Err(e) => Err(e).context("Failed to read save confirmation"),
    }
}

/// Store `key` in `config` and write it to `path`.
///
/// A failed write is reported and swallowed: the key is still good for this run.
fn save_key(config: &mut Config, key: &str, path: &Path) -> Option<PathBuf> {
    config.set_api_key(key.to_string());
    match config.save_to(path) {
        Ok(()) => Some(path.to_path_buf()),
        Err(e) => {
            warn!(error = format!("{e:#}"), "Saving API key failed");
            eprintln!("Could not save API key: {e:#}");
            None
        }
    }
}

/// Ask for a key. `None` means the user cancelled or entered nothing.
pub fn prompt_api_key() -> Result<Option<String>> {
    let answer = Password::new("Enter your OpenWeatherMap API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt();

    match answer {
        Ok(key) => {
            let key = key.trim();
            Ok((!key.is_empty()).then(|| key.to_string()))
        }
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e).context("Failed to read API key"),
    }
}
