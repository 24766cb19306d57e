use crate::components::event::CalendarEvent;
use crate::components::holidays::DEFAULT_HOLIDAYS_URL;
use crate::error::{env_error, CalResult};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use toml::{Table, Value};
use tracing::debug;
use url::Url;

/// Default location of the events file
pub const DEFAULT_EVENTS_FILE: &str = "config/events.toml";

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info,reqwest=warn";

/// Configuration for the report binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Endpoint serving the holiday map
    pub holidays_url: String,
    /// TOML file listing events to count down to
    pub events_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            holidays_url: DEFAULT_HOLIDAYS_URL.to_string(),
            events_file: PathBuf::from(DEFAULT_EVENTS_FILE),
        }
    }
}

/// Layout of the events file
#[derive(Debug, Default, Deserialize)]
struct EventsFile {
    #[serde(default)]
    events: Vec<CalendarEvent>,
}

impl Config {
    /// Load configuration from the environment and an optional `.env` file
    pub fn load() -> CalResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> CalResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let holidays_url = lookup("AQUACAL_HOLIDAYS_URL")
            .unwrap_or_else(|| DEFAULT_HOLIDAYS_URL.to_string());

        Url::parse(&holidays_url).map_err(|_| env_error("AQUACAL_HOLIDAYS_URL"))?;

        let events_file = lookup("AQUACAL_EVENTS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EVENTS_FILE));

        Ok(Config {
            holidays_url,
            events_file,
        })
    }

    /// Read the configured events; a missing file means no events
    pub fn load_events(&self) -> CalResult<Vec<CalendarEvent>> {
        load_events(&self.events_file)
    }
}

/// Read events from a TOML file.
///
/// Dates are local date-times, either bare (`date = 2021-10-01T13:00:00`) or
/// quoted (`date = "2021-10-01T13:00:00"`).
pub fn load_events(path: &Path) -> CalResult<Vec<CalendarEvent>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut document: Table = toml::from_str(&content)?;
    if let Some(Value::Array(events)) = document.get_mut("events") {
        events.iter_mut().for_each(quote_datetime);
    }

    let file: EventsFile = Value::Table(document).try_into()?;
    debug!("Parsed {} event(s) from {}", file.events.len(), path.display());

    Ok(file.events)
}

/// Turn a bare TOML datetime under `date` into its string form
fn quote_datetime(event: &mut Value) {
    if let Some(date) = event.get_mut("date") {
        if let Value::Datetime(datetime) = date {
            let text = datetime.to_string();
            *date = Value::String(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("aquacal-{}-{}.toml", name, std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.holidays_url, "http://localhost/api/holidays");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("AQUACAL_HOLIDAYS_URL", "http://calendar.internal:8080/holidays"),
            ("AQUACAL_EVENTS_FILE", "/etc/aquacal/events.toml"),
        ]))
        .unwrap();

        assert_eq!(config.holidays_url, "http://calendar.internal:8080/holidays");
        assert_eq!(config.events_file, PathBuf::from("/etc/aquacal/events.toml"));
    }

    #[test]
    fn test_invalid_url() {
        let result = Config::from_lookup(lookup(&[("AQUACAL_HOLIDAYS_URL", "not a url")]));
        assert!(matches!(result, Err(Error::Environment(_))));
    }

    #[test]
    fn test_missing_events_file() {
        let path = env::temp_dir().join("aquacal-does-not-exist.toml");
        assert!(load_events(&path).unwrap().is_empty());
    }

    #[test]
    fn test_events_file() {
        let path = write_temp(
            "valid",
            r#"
[[events]]
name = "Launch"
date = "2021-10-01T13:00:00"

[[events]]
name = "Retro"
date = "2021-12-29T11:00:00"
"#,
        );

        let events = load_events(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name(), "Launch");
        assert_eq!(events[1].name(), "Retro");
        assert_eq!(
            events[1].date().format("%Y-%m-%d %H:%M").to_string(),
            "2021-12-29 11:00"
        );
    }

    #[test]
    fn test_events_file_with_invalid_date() {
        let path = write_temp(
            "invalid",
            r#"
[[events]]
name = "Launch"
date = "next friday"
"#,
        );

        let result = load_events(&path);
        fs::remove_file(&path).ok();

        match result {
            Err(Error::Serialization(message)) => {
                assert!(message.contains("expected a date-time, got string"), "{}", message)
            }
            other => panic!("Expected a serialization error, got {:?}", other),
        }
    }

    #[test]
    fn test_events_file_with_bare_datetime() {
        let path = write_temp(
            "bare",
            r#"
[[events]]
name = "Launch"
date = 2021-10-01T13:00:00
"#,
        );

        let events = load_events(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].date().format("%Y-%m-%d %H:%M").to_string(),
            "2021-10-01 13:00"
        );
    }

    #[test]
    fn test_events_file_malformed() {
        let path = write_temp("malformed", "[[events]\nname = ");

        let result = load_events(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(Error::Serialization(_))));
    }
}
