mod fetcher;
mod transport;

pub use fetcher::{get_holidays, holiday_on, HolidayFetcher, DEFAULT_HOLIDAYS_URL};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, TransportError};
