// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use bytes::Bytes;
use url::Url;

use crate::episode::RawEpisode;
use crate::error::LoadError;
use crate::http::HttpClient;

use super::query::EpisodeQuery;

/// Base URL used when none is configured
pub const DEFAULT_API_URL: &str = "http://localhost:3333/";

/// REST client bound to a configured API base URL
#[derive(Clone)]
pub struct ApiClient<C> {
    http: C,
    base_url: Url,
}

impl<C: HttpClient> ApiClient<C> {
    /// Create a client for `base_url`; relative paths resolve beneath it
    pub fn new(http: C, base_url: &str) -> Result<Self, LoadError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { http, base_url })
    }

    /// Resolve `path` against the base URL and attach the query parameters
    pub fn endpoint(&self, path: &str, params: &[(&str, String)]) -> Result<Url, LoadError> {
        let mut url = self.base_url.join(path.trim_start_matches('/'))?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// GET `path` and return the raw response body of a 2xx response
    pub async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Bytes, LoadError> {
        let url = self.endpoint(path, params)?;

        let response =
            self.http
                .get_bytes(url.as_str())
                .await
                .map_err(|e| LoadError::FetchFailed {
                    url: url.to_string(),
                    source: e,
                })?;

        if !response.is_success() {
            return Err(LoadError::HttpStatus {
                url: url.to_string(),
                status: response.status,
            });
        }

        Ok(response.body)
    }

    /// Fetch and decode the episodes listing
    pub async fn fetch_episodes(&self, query: &EpisodeQuery) -> Result<Vec<RawEpisode>, LoadError> {
        let body = self.get("episodes", &query.to_params()).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpResponse;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockHttpClient {
        status: u16,
        body: &'static str,
        requested: Mutex<Vec<String>>,
    }

    impl MockHttpClient {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HttpClient for MockHttpClient {
        async fn get_bytes(&self, url: &str) -> Result<HttpResponse, reqwest::Error> {
            self.requested.lock().unwrap().push(url.to_string());
            Ok(HttpResponse {
                status: self.status,
                body: Bytes::from_static(self.body.as_bytes()),
            })
        }
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let api = ApiClient::new(MockHttpClient::new(200, "[]"), "https://example.com/api").unwrap();

        let url = api.endpoint("/episodes", &[]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/episodes");
    }

    #[test]
    fn endpoint_encodes_query() {
        let api = ApiClient::new(MockHttpClient::new(200, "[]"), DEFAULT_API_URL).unwrap();

        let url = api
            .endpoint("episodes", &EpisodeQuery::latest().to_params())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3333/episodes?_limit=12&_sort=published_at&_order=desc"
        );
    }

    #[test]
    fn rejects_invalid_base_url() {
        let result = ApiClient::new(MockHttpClient::new(200, "[]"), "not a url");
        assert!(matches!(result, Err(LoadError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn fetch_episodes_requests_latest_listing() {
        let api = ApiClient::new(MockHttpClient::new(200, "[]"), DEFAULT_API_URL).unwrap();

        let episodes = api.fetch_episodes(&EpisodeQuery::latest()).await.unwrap();

        assert!(episodes.is_empty());
        assert_eq!(
            api.http.requested.lock().unwrap().as_slice(),
            ["http://localhost:3333/episodes?_limit=12&_sort=published_at&_order=desc"]
        );
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let api = ApiClient::new(MockHttpClient::new(503, "down"), DEFAULT_API_URL).unwrap();

        match api.fetch_episodes(&EpisodeQuery::latest()).await.unwrap_err() {
            LoadError::HttpStatus { status, url } => {
                assert_eq!(status, 503);
                assert!(url.ends_with("_order=desc"));
            }
            other => panic!("Expected HttpStatus error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_payload_is_an_error() {
        let api = ApiClient::new(
            MockHttpClient::new(200, r#"{"episodes": []}"#),
            DEFAULT_API_URL,
        )
        .unwrap();

        let result = api.fetch_episodes(&EpisodeQuery::latest()).await;
        assert!(matches!(result, Err(LoadError::MalformedPayload(_))));
    }
}
