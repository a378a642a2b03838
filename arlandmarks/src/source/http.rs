//! HTTP client abstraction for testability

use super::DataSourceError;

/// Trait for HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request with the given headers.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    /// * `headers` - Header name/value pairs to attach
    ///
    /// # Returns
    ///
    /// The response body as bytes or an error.
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Vec<u8>, DataSourceError>;
}

/// Real HTTP client implementation using reqwest.
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with default configuration.
    pub fn new() -> Result<Self, DataSourceError> {
        Self::with_timeout(30)
    }

    /// Creates a new ReqwestClient with custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, DataSourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| DataSourceError::Transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Vec<u8>, DataSourceError> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send()
            .map_err(|e| DataSourceError::Transport(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataSourceError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| DataSourceError::Transport(format!("failed to read response: {}", e)))
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Mock HTTP client for testing.
    ///
    /// Records requested URLs and replays a queue of canned responses in
    /// order (the last response repeats once the queue is exhausted).
    pub struct MockHttpClient {
        responses: parking_lot::Mutex<Vec<Result<Vec<u8>, DataSourceError>>>,
        pub requests: parking_lot::Mutex<Vec<String>>,
    }

    impl MockHttpClient {
        pub fn new(responses: Vec<Result<Vec<u8>, DataSourceError>>) -> Self {
            Self {
                responses: parking_lot::Mutex::new(responses),
                requests: parking_lot::Mutex::new(Vec::new()),
            }
        }

        pub fn single(response: Result<Vec<u8>, DataSourceError>) -> Self {
            Self::new(vec![response])
        }
    }

    impl HttpClient for MockHttpClient {
        fn get(&self, url: &str, _headers: &[(&str, &str)]) -> Result<Vec<u8>, DataSourceError> {
            self.requests.lock().push(url.to_string());

            let mut responses = self.responses.lock();
            if responses.len() > 1 {
                responses.remove(0)
            } else {
                responses[0].clone()
            }
        }
    }

    #[test]
    fn test_mock_client_success() {
        let mock = MockHttpClient::single(Ok(vec![1, 2, 3, 4]));

        let result = mock.get("http://example.com", &[]);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(mock.requests.lock().len(), 1);
    }

    #[test]
    fn test_mock_client_error() {
        let mock = MockHttpClient::single(Err(DataSourceError::Transport(
            "test error".to_string(),
        )));

        let result = mock.get("http://example.com", &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_mock_client_response_queue() {
        let mock = MockHttpClient::new(vec![Ok(vec![1]), Ok(vec![2])]);

        assert_eq!(mock.get("http://a", &[]).unwrap(), vec![1]);
        assert_eq!(mock.get("http://b", &[]).unwrap(), vec![2]);
        // Last response repeats.
        assert_eq!(mock.get("http://c", &[]).unwrap(), vec![2]);
    }
}
