//! Upstream trips API client.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use tracing::{debug, error};

use crate::config::Thresholds;
use crate::error::{Error, Result};
use crate::model::{TripData, TripResponse};
use crate::trip::map_trip_data;

/// Fetches trips from `{base_url}/trips/{trip_id}`.
#[derive(Debug, Clone)]
pub struct TripClient {
    client: Client,
    base_url: Url,
}

impl TripClient {
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `base_url` is not an absolute
    /// http(s) URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `base_url` is not an absolute
    /// http(s) URL.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { client, base_url })
    }

    fn trip_url(&self, trip_id: &str) -> Url {
        let mut url = self.base_url.clone();
        // checked in `with_client`
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["trips", trip_id]);
        }
        url
    }

    /// Fetches the raw trip payload.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-success status, a body that is empty
    /// or `null`, or one that does not decode as a trip.
    pub async fn fetch_trip(&self, trip_id: &str) -> Result<TripResponse> {
        let url = self.trip_url(trip_id);
        debug!(%url, "fetching trip");

        let response = self.client.get(url).header(CONTENT_TYPE, "application/json").send().await?;
        if !response.status().is_success() {
            return Err(Error::UpstreamStatus(response.status()));
        }

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(Error::NoData(trip_id.to_string()));
        }

        serde_json::from_slice::<Option<TripResponse>>(&body)?
            .ok_or_else(|| Error::NoData(trip_id.to_string()))
    }

    /// Fetches and normalizes a trip.
    ///
    /// Returns `None` when no data is available; the cause is logged.
    pub async fn trip_data(&self, trip_id: &str, thresholds: &Thresholds) -> Option<TripData> {
        match self.fetch_trip(trip_id).await {
            Ok(response) => Some(map_trip_data(response, thresholds)),
            Err(e) => {
                error!(trip_id, code = e.code(), "error fetching bus route data: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_url_appends_segments() {
        let client = TripClient::new("https://api.example.com/v1").unwrap();
        assert_eq!(client.trip_url("abc").as_str(), "https://api.example.com/v1/trips/abc");

        let client = TripClient::new("https://api.example.com/v1/").unwrap();
        assert_eq!(client.trip_url("abc").as_str(), "https://api.example.com/v1/trips/abc");
    }

    #[test]
    fn trip_id_is_escaped() {
        let client = TripClient::new("https://api.example.com/v1").unwrap();
        assert_eq!(client.trip_url("a/b c").as_str(), "https://api.example.com/v1/trips/a%2Fb%20c");
    }

    #[test]
    fn rejects_bad_base_url() {
        let err = TripClient::new("not a url").unwrap_err();
        assert_eq!(err.code(), "invalid_url");

        let err = TripClient::new("mailto:ops@example.com").unwrap_err();
        assert_eq!(err.code(), "invalid_url");
    }
}
