use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, warn};

use super::transport::{HttpTransport, ReqwestTransport};
use crate::error::CalResult;
use crate::utils::time::holiday_key;

/// Endpoint serving the holiday map
pub const DEFAULT_HOLIDAYS_URL: &str = "http://localhost/api/holidays";

/// Fetches the holiday map with a single GET request.
///
/// A response with status 200 is parsed as JSON and returned as-is. Any other
/// status yields `Ok(None)`, so a 404 and a 500 look the same to the caller.
/// Transport failures are not absorbed: they come back as
/// [`Error::Transport`](crate::error::Error::Transport) and retrying is up to
/// the caller.
#[derive(Debug, Clone)]
pub struct HolidayFetcher<T> {
    transport: T,
    url: String,
}

impl<T: HttpTransport> HolidayFetcher<T> {
    /// Create a fetcher pointed at the default endpoint
    pub fn new(transport: T) -> Self {
        Self::with_url(transport, DEFAULT_HOLIDAYS_URL)
    }

    /// Create a fetcher pointed at a custom endpoint
    pub fn with_url(transport: T, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Perform one request and return the holiday map, if the server had one
    pub fn fetch(&self) -> CalResult<Option<Value>> {
        let response = self.transport.get(&self.url)?;

        if response.status != 200 {
            warn!(
                "Holiday request to {} returned status {}",
                self.url, response.status
            );
            return Ok(None);
        }

        let holidays: Value = serde_json::from_str(&response.body)?;
        debug!("Fetched holidays: {}", holidays);
        Ok(Some(holidays))
    }
}

/// Fetch holidays from the default endpoint over HTTP
pub fn get_holidays() -> CalResult<Option<Value>> {
    HolidayFetcher::new(ReqwestTransport::new()).fetch()
}

/// Look up the holiday name for a date in a fetched holiday map
pub fn holiday_on(holidays: &Value, date: NaiveDate) -> Option<&str> {
    holidays.get(holiday_key(date))?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::holidays::{HttpResponse, TransportError};
    use crate::error::Error;
    use serde_json::json;

    /// Transport that always answers with the same result
    struct StaticTransport(Result<HttpResponse, TransportError>);

    impl HttpTransport for StaticTransport {
        fn get(&self, _url: &str) -> Result<HttpResponse, TransportError> {
            self.0.clone()
        }
    }

    #[test]
    fn test_fetch_parses_body_on_200() {
        let fetcher = HolidayFetcher::new(StaticTransport(Ok(HttpResponse::new(
            200,
            r#"{"12/25": "Christmas"}"#,
        ))));

        let holidays = fetcher.fetch().unwrap().unwrap();
        assert_eq!(holidays["12/25"], "Christmas");
    }

    #[test]
    fn test_fetch_returns_none_on_other_status() {
        for status in [201, 204, 301, 404, 500, 503] {
            let fetcher = HolidayFetcher::new(StaticTransport(Ok(HttpResponse::new(
                status,
                r#"{"12/25": "Christmas"}"#,
            ))));
            assert!(fetcher.fetch().unwrap().is_none(), "status {}", status);
        }
    }

    #[test]
    fn test_fetch_rejects_invalid_json_on_200() {
        let fetcher =
            HolidayFetcher::new(StaticTransport(Ok(HttpResponse::new(200, "<html></html>"))));

        assert!(matches!(fetcher.fetch(), Err(Error::InvalidJson(_))));
    }

    #[test]
    fn test_default_url() {
        let fetcher = HolidayFetcher::new(StaticTransport(Ok(HttpResponse::new(404, ""))));
        assert_eq!(fetcher.url(), "http://localhost/api/holidays");
    }

    #[test]
    fn test_holiday_on() {
        let holidays = json!({
            "12/25": "Christmas",
            "7/4": "Independence Day",
            "1/1": 42,
        });

        let july_fourth = NaiveDate::from_ymd_opt(2021, 7, 4).unwrap();
        assert_eq!(holiday_on(&holidays, july_fourth), Some("Independence Day"));

        let christmas = NaiveDate::from_ymd_opt(2021, 12, 25).unwrap();
        assert_eq!(holiday_on(&holidays, christmas), Some("Christmas"));

        // Present but not a name
        let new_year = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        assert_eq!(holiday_on(&holidays, new_year), None);

        let ordinary = NaiveDate::from_ymd_opt(2021, 3, 9).unwrap();
        assert_eq!(holiday_on(&holidays, ordinary), None);

        // Not a map at all
        assert_eq!(holiday_on(&json!(["7/4"]), july_fourth), None);
    }
}
