use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_DURATION_MINUTES: u64 = 3;

const DURATION_VAR: &str = "EXAM_DURATION_MINUTES";
const RESULTS_DIR_VAR: &str = "EXAM_RESULTS_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamConfig {
    pub duration_minutes: u64,
    pub results_dir: PathBuf,
}

impl Default for ExamConfig {
    fn default() -> Self {
        Self {
            duration_minutes: DEFAULT_DURATION_MINUTES,
            results_dir: PathBuf::from("."),
        }
    }
}

impl ExamConfig {
    /// Reads the configuration from the process environment (after `.env` is loaded).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let duration_minutes = parse_or(&lookup, DURATION_VAR, defaults.duration_minutes);
        let results_dir = lookup(RESULTS_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.results_dir);

        Self {
            duration_minutes,
            results_dir,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("Ignoring {}={:?}, using {}", key, raw, default);
                default
            }
        },
        None => default,
    }
}
