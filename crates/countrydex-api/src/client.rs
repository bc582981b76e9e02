//! HTTP client for the countries API name search.

use countrydex_core::Country;
use gloo_net::http::Request;
use serde::Deserialize;

use crate::error::{ApiError, Result};

/// Client for the countries API.
#[derive(Debug, Clone)]
pub struct CountriesClient {
    /// Base URL without a trailing slash.
    base_url: String,
}

impl CountriesClient {
    /// Create a new client for the given base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the by-name search for `query`.
    pub fn name_url(&self, query: &str) -> String {
        format!("{}/name/{}", self.base_url, query)
    }

    /// Fetch all countries whose name matches `query`.
    ///
    /// The API reports a missing match as a JSON object with `status: 404`
    /// rather than an empty array; that reply decodes to an empty list.
    pub async fn search_name(&self, query: &str) -> Result<Vec<Country>> {
        let url = self.name_url(query);
        log::debug!("GET {url}");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        decode_countries(status, &body)
    }
}

/// Body shapes the name endpoint replies with.
#[derive(Deserialize)]
#[serde(untagged)]
enum NameResponse {
    /// The matching countries.
    Countries(Vec<Country>),
    /// The error envelope used instead of an empty array.
    Status(StatusBody),
}

#[derive(Deserialize)]
struct StatusBody {
    status: u16,
}

/// Decode a name-endpoint reply body.
///
/// `status` is the HTTP status of the response; it only matters when the
/// body itself is not one of the known reply shapes.
pub fn decode_countries(status: u16, body: &str) -> Result<Vec<Country>> {
    match serde_json::from_str::<NameResponse>(body) {
        Ok(NameResponse::Countries(countries)) => Ok(countries),
        Ok(NameResponse::Status(reply)) if reply.status == 404 => Ok(Vec::new()),
        Ok(NameResponse::Status(reply)) => Err(ApiError::Http {
            status: reply.status,
        }),
        Err(_) if !(200..300).contains(&status) => Err(ApiError::Http { status }),
        Err(err) => Err(ApiError::decode(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRANCE_REPLY: &str = r#"[{
        "name": { "common": "France", "official": "French Republic" },
        "cca2": "FR",
        "region": "Europe",
        "population": 67391582,
        "flag": "🇫🇷"
    }]"#;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = CountriesClient::new("https://restcountries.com/v3.1/");
        assert_eq!(client.base_url(), "https://restcountries.com/v3.1");
    }

    #[test]
    fn test_name_url() {
        let client = CountriesClient::new("https://restcountries.com/v3.1");
        assert_eq!(
            client.name_url("fra"),
            "https://restcountries.com/v3.1/name/fra"
        );
    }

    #[test]
    fn test_decode_country_array() {
        let countries = decode_countries(200, FRANCE_REPLY).expect("decode reply");

        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].name.common, "France");
        assert_eq!(countries[0].flag, "🇫🇷");
    }

    #[test]
    fn test_decode_empty_array() {
        let countries = decode_countries(200, "[]").expect("decode reply");
        assert!(countries.is_empty());
    }

    #[test]
    fn test_decode_not_found_envelope() {
        let body = r#"{ "status": 404, "message": "Not Found" }"#;

        let countries = decode_countries(404, body).expect("decode reply");
        assert!(countries.is_empty());
    }

    #[test]
    fn test_decode_not_found_envelope_with_ok_status() {
        // The envelope wins even on an HTTP 200, matching the field check
        // the UI relies on.
        let body = r#"{ "status": 404 }"#;

        let countries = decode_countries(200, body).expect("decode reply");
        assert!(countries.is_empty());
    }

    #[test]
    fn test_decode_server_error_envelope() {
        let body = r#"{ "status": 500, "message": "boom" }"#;

        let err = decode_countries(500, body).expect_err("server error");
        assert_eq!(err, ApiError::Http { status: 500 });
    }

    #[test]
    fn test_decode_garbage_with_http_error_status() {
        let err = decode_countries(502, "<html>Bad Gateway</html>").expect_err("http error");
        assert_eq!(err, ApiError::Http { status: 502 });
    }

    #[test]
    fn test_decode_garbage_with_ok_status() {
        let err = decode_countries(200, "not json").expect_err("decode error");
        assert!(matches!(err, ApiError::Decode { .. }));
    }
}
