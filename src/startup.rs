use crate::components::event::CalendarEvent;
use crate::components::holidays::{holiday_on, HolidayFetcher, HttpTransport};
use crate::components::weekend::is_weekend_at;
use crate::config::{Config, DEFAULT_LOG_FILTER};
use crate::error::{config_error, CalResult};
use crate::utils::time::Clock;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| config_error(&format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// What the report binary prints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub weekend: bool,
    /// `None` when the server had no holidays or could not be reached
    pub holiday: Option<String>,
    pub holidays_available: bool,
    pub summaries: Vec<String>,
}

impl Report {
    /// Gather the report for the clock's current moment
    pub fn build<T, C>(fetcher: &HolidayFetcher<T>, events: &[CalendarEvent], clock: &C) -> Self
    where
        T: HttpTransport,
        C: Clock + ?Sized,
    {
        let weekend = is_weekend_at(clock);

        // The report is the caller here, so a failed fetch is logged and skipped
        let holidays = match fetcher.fetch() {
            Ok(holidays) => holidays,
            Err(e) => {
                error!("Failed to fetch holidays from {}: {}", fetcher.url(), e);
                None
            }
        };

        let holiday = holidays
            .as_ref()
            .and_then(|map| holiday_on(map, clock.today()))
            .map(str::to_string);

        let summaries = events
            .iter()
            .map(|event| event.summary_with(clock))
            .collect();

        Self {
            weekend,
            holiday,
            holidays_available: holidays.is_some(),
            summaries,
        }
    }

    /// Render as plain text lines
    pub fn render(&self) -> String {
        let mut lines = Vec::new();

        lines.push(if self.weekend {
            "Today is a weekend day".to_string()
        } else {
            "Today is a weekday".to_string()
        });

        lines.push(match (&self.holiday, self.holidays_available) {
            (Some(name), _) => format!("Today's holiday: {}", name),
            (None, true) => "No holiday today".to_string(),
            (None, false) => "Holidays unavailable".to_string(),
        });

        lines.extend(self.summaries.iter().cloned());
        lines.join("\n")
    }
}

/// Build and print the report
pub fn run<T, C>(config: &Config, transport: T, clock: &C) -> CalResult<()>
where
    T: HttpTransport,
    C: Clock + ?Sized,
{
    let events = config.load_events()?;
    info!(
        "Loaded {} event(s) from {}",
        events.len(),
        config.events_file.display()
    );

    let fetcher = HolidayFetcher::with_url(transport, config.holidays_url.clone());
    let report = Report::build(&fetcher, &events, clock);

    println!("{}", report.render());
    Ok(())
}
