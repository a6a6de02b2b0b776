/// Configuration module for session durations.
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

fn default_task_seconds() -> u64 {
    1500 // 25 minutes
}

fn default_break_seconds() -> u64 {
    300 // 5 minutes
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_task_seconds")]
    pub task_seconds: u64,
    #[serde(default = "default_break_seconds")]
    pub break_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            task_seconds: default_task_seconds(),
            break_seconds: default_break_seconds(),
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults on any problem.
    ///
    /// A missing file gets the defaults written back so users have
    /// something to edit; a broken file is left alone and only warned
    /// about. Config trouble never stops the timer from running.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|err| {
                eprintln!(
                    "warning: invalid config at {}, using defaults: {err}",
                    path.display()
                );
                Config::default()
            }),
            Err(_) if !path.exists() => {
                let config = Config::default();
                config.write(path);
                config
            }
            Err(err) => {
                eprintln!(
                    "warning: could not read config at {}, using defaults: {err}",
                    path.display()
                );
                Config::default()
            }
        }
    }

    fn write(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(text) = serde_json::to_string_pretty(self) {
            let _ = fs::write(path, text);
        }
    }
}

pub fn config_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join("pomobar").join("config.json"),
        None => PathBuf::from("pomobar-config.json"),
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DurationError {
    #[error("invalid duration format, use formats like 25m, 30s or 1m30s")]
    BadFormat,
    #[error("duration must end with 'm' (minutes) or 's' (seconds)")]
    MissingUnit,
    #[error("duration must be greater than 0")]
    Zero,
}

/// Parse a duration spec into seconds.
///
/// A bare number is taken as minutes; otherwise the spec is a sequence of
/// `<number>m` and `<number>s` parts, e.g. `25m`, `30s`, `1m30s`.
pub fn parse_duration(input: &str) -> Result<u64, DurationError> {
    let input = input.trim().to_lowercase();

    if let Ok(minutes) = input.parse::<u64>() {
        return checked_total(minutes.saturating_mul(60));
    }

    let mut total_seconds = 0u64;
    let mut current_number = String::new();

    for ch in input.chars() {
        if ch.is_ascii_digit() {
            current_number.push(ch);
        } else if ch == 'm' || ch == 's' {
            if current_number.is_empty() {
                return Err(DurationError::BadFormat);
            }
            let number: u64 = current_number
                .parse()
                .map_err(|_| DurationError::BadFormat)?;
            match ch {
                'm' => total_seconds = total_seconds.saturating_add(number.saturating_mul(60)),
                's' => total_seconds = total_seconds.saturating_add(number),
                _ => unreachable!(),
            }
            current_number.clear();
        } else if !ch.is_whitespace() {
            return Err(DurationError::BadFormat);
        }
    }

    if !current_number.is_empty() {
        return Err(DurationError::MissingUnit);
    }

    checked_total(total_seconds)
}

fn checked_total(total_seconds: u64) -> Result<u64, DurationError> {
    if total_seconds == 0 {
        Err(DurationError::Zero)
    } else {
        Ok(total_seconds)
    }
}
