//! HTTP [`Backend`] implementation.

mod codec;
mod impls;

use std::time;

use derive_more::{Display, Error as StdError};
use serde::de::DeserializeOwned;
use smart_default::SmartDefault;
use tracerr::Traced;
use tracing as log;

use crate::infra::backend;
#[cfg(doc)]
use crate::infra::Backend;

/// [`Http`] backend configuration.
#[derive(Clone, Debug, SmartDefault)]
pub struct Config {
    /// Base URL of the remote search service.
    #[default("http://127.0.0.1:8080/api".to_owned())]
    pub url: String,

    /// Timeout of a whole request, from connecting until the response body
    /// is read.
    #[default(time::Duration::from_secs(10))]
    pub timeout: time::Duration,

    /// Timeout of establishing a connection.
    #[default(time::Duration::from_secs(3))]
    pub connect_timeout: time::Duration,
}

/// [`Backend`] talking to the remote search service over HTTP with JSON
/// payloads.
#[derive(Clone, Debug)]
pub struct Http {
    /// Underlying HTTP client.
    client: reqwest::Client,

    /// Base URL every request path is appended to.
    base: reqwest::Url,
}

impl Http {
    /// Creates a new [`Http`] backend with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If the configured URL is invalid, or the HTTP client cannot be built.
    pub fn new(conf: &Config) -> Result<Self, Traced<backend::Error>> {
        let base = reqwest::Url::parse(&conf.url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                tracerr::new!(Error::InvalidUrl(conf.url.clone()))
            })
            .map_err(tracerr::map_from)?;

        let client = reqwest::Client::builder()
            .timeout(conf.timeout)
            .connect_timeout(conf.connect_timeout)
            .build()
            .map_err(|e| tracerr::new!(Error::Client(e)))
            .map_err(tracerr::map_from)?;

        Ok(Self { client, base })
    }

    /// Returns the base URL of this [`Http`] backend.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    /// Performs a `GET` request to the provided `path` relative to the base
    /// URL, and decodes its JSON response.
    async fn get<T>(
        &self,
        path: &[&str],
        params: &[(&'static str, String)],
    ) -> Result<T, Traced<backend::Error>>
    where
        T: DeserializeOwned,
    {
        let mut url = self.base.clone();
        // `cannot-be-a-base` URLs are rejected in `Http::new()`.
        if let Ok(mut segments) = url.path_segments_mut() {
            _ = segments.pop_if_empty().extend(path);
        }
        if !params.is_empty() {
            _ = url.query_pairs_mut().extend_pairs(params);
        }

        log::debug!("GET {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| tracerr::new!(Error::Request(e)))
            .map_err(tracerr::map_from)?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("GET {url} responded with `{status}`");
            return Err(tracerr::new!(Error::Status(status.as_u16())))
                .map_err(tracerr::map_from);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| tracerr::new!(Error::Request(e)))
            .map_err(tracerr::map_from)?;
        serde_json::from_slice(&body)
            .map_err(|e| tracerr::new!(Error::Decode(e)))
            .map_err(tracerr::map_from)
    }
}

/// [`Http`] backend error.
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// Configured base URL is not a valid base URL.
    #[display("invalid base URL `{_0}`")]
    InvalidUrl(#[error(not(source))] String),

    /// Failed to build the HTTP client.
    #[display("failed to build HTTP client: {_0}")]
    Client(reqwest::Error),

    /// Request failed to be sent, or its response failed to be received.
    #[display("HTTP request failed: {_0}")]
    Request(reqwest::Error),

    /// Response has a non-successful status code.
    #[display("unexpected HTTP status `{_0}`")]
    Status(#[error(not(source))] u16),

    /// Response body is not a valid JSON of the expected shape.
    #[display("failed to decode response: {_0}")]
    Decode(serde_json::Error),
}

#[cfg(test)]
mod spec {
    use std::time;

    use common::operations::{By, Select};
    use httptest::{matchers::*, responders::*, Expectation, Server};

    use crate::{
        domain::{amenity, location, room, Amenity, City, Contact},
        infra::{backend, Backend},
        read,
        search::SearchQuery,
    };

    use super::{Config, Error, Http};

    fn backend(server: &Server) -> Http {
        Http::new(&Config {
            url: server.url_str("/api"),
            timeout: time::Duration::from_secs(5),
            connect_timeout: time::Duration::from_secs(5),
        })
        .unwrap()
    }

    #[test]
    fn rejects_invalid_url() {
        for url in ["", "not a url", "mailto:rooms@example.com"] {
            let err = Http::new(&Config {
                url: url.into(),
                ..Config::default()
            })
            .unwrap_err();

            assert!(
                matches!(
                    err.as_ref(),
                    backend::Error::Http(Error::InvalidUrl(_)),
                ),
                "url: {url:?}",
            );
        }
    }

    #[tokio::test]
    async fn searches_rooms() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/rooms"),
                request::query(url_decoded(contains(("city", "berlin")))),
                request::query(url_decoded(contains(("capacity", "50")))),
                request::query(url_decoded(contains((
                    "requiresParking",
                    "true",
                )))),
                request::query(url_decoded(contains(("serviceIds", "s1")))),
                request::query(url_decoded(contains(("page", "2")))),
            ])
            .respond_with(json_encoded(serde_json::json!({
                "rooms": [
                    {"id": "r1", "name": "Hall", "capacity": 80},
                    {"id": "r2", "name": "Loft", "capacity": 60},
                ],
                "pagination": {
                    "currentPage": 2,
                    "totalPages": 3,
                    "totalCount": 22,
                    "itemsPerPage": 10,
                },
            }))),
        );

        let selector = read::room::search::Selector::new(
            SearchQuery {
                city: "berlin".into(),
                capacity: 50,
                requires_parking: true,
                service_ids: vec![amenity::Id::new("s1").unwrap()],
                ..SearchQuery::default()
            },
            2,
        );
        let page = backend(&server)
            .execute(Select(By::<read::room::search::Page, _>::new(selector)))
            .await
            .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].name, "Hall");
        assert_eq!(page.info.current_page, 2);
        assert_eq!(page.info.total_pages, 3);
        assert_eq!(page.info.total_count, 22);
    }

    #[tokio::test]
    async fn escapes_room_id_in_path() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/api/rooms/a%2Fb/contacts",
            ))
            .respond_with(json_encoded(serde_json::json!([
                {"name": "Ada", "role": "Manager", "email": "ada@example.com"},
            ]))),
        );

        let contacts = backend(&server)
            .execute(Select(By::<Vec<Contact>, _>::new(
                room::Id::new("a/b").unwrap(),
            )))
            .await
            .unwrap();

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "Ada");
        assert_eq!(contacts[0].phone, None);
    }

    #[tokio::test]
    async fn looks_up_services_by_text() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/services"),
                request::query(url_decoded(contains(("query", "cater")))),
            ])
            .respond_with(json_encoded(serde_json::json!([
                {"id": "s1", "name": "Catering"},
            ]))),
        );

        let services = backend(&server)
            .execute(Select(By::<Vec<Amenity>, _>::new(
                amenity::SearchText::new(" cater ").unwrap(),
            )))
            .await
            .unwrap();

        assert_eq!(services.len(), 1);
        assert_eq!(services[0].id, amenity::Id::new("s1").unwrap());
        assert_eq!(services[0].name, "Catering");
    }

    #[tokio::test]
    async fn fetches_location_by_id() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/api/locations/l%201",
            ))
            .respond_with(json_encoded(serde_json::json!({
                "id": "l 1",
                "name": "Old Mill",
                "parking": true,
                "services": [{"id": "s1", "name": "Catering"}],
            }))),
        );

        let detail = backend(&server)
            .execute(Select(By::<read::location::Detail, _>::new(
                location::Id::new("l 1").unwrap(),
            )))
            .await
            .unwrap();

        assert_eq!(detail.id, location::Id::new("l 1"));
        assert_eq!(detail.name, "Old Mill");
        assert!(detail.parking);
        assert_eq!(detail.amenities.len(), 1);
        assert!(detail.rooms.is_empty());
    }

    #[tokio::test]
    async fn skips_blank_catalog_names() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/cities"))
                .respond_with(json_encoded(serde_json::json!([
                    "Berlin", " ", "Hamburg",
                ]))),
        );

        let cities = backend(&server)
            .execute(Select(By::<Vec<City>, ()>::new(())))
            .await
            .unwrap();

        assert_eq!(
            cities,
            [City::new("Berlin").unwrap(), City::new("Hamburg").unwrap()],
        );
    }

    #[tokio::test]
    async fn fails_on_error_status() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/api/rooms/r1/location",
            ))
            .respond_with(status_code(503)),
        );

        let err = backend(&server)
            .execute(Select(By::<read::location::Detail, _>::new(
                room::Id::new("r1").unwrap(),
            )))
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            backend::Error::Http(Error::Status(503)),
        ));
    }

    #[tokio::test]
    async fn fails_on_malformed_body() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/rooms"))
                .respond_with(status_code(200).body("<html>")),
        );

        let err = backend(&server)
            .execute(Select(By::<read::room::search::Page, _>::new(
                read::room::search::Selector::new(SearchQuery::default(), 1),
            )))
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            backend::Error::Http(Error::Decode(_)),
        ));
    }
}
