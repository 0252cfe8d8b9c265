//! Authenticated request execution and JSON decoding.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::error::ApiError;
use super::request::{ApiEndpoint, ApiRequest, Param};
use crate::resources::{LinkResource, LinksResource};
use crate::transport::{ReqwestTransport, Transport, TransportResponse};

/// API parameter carrying the application key.
pub const APP_KEY_PARAM: &str = "appkey";

/// API parameter carrying the user key.
pub const USER_KEY_PARAM: &str = "userkey";

/// wykop API client.
///
/// Holds credentials, the target endpoint and the HTTP executor. Cheap to
/// clone and safe to share between tasks; every call works on its own copy of
/// the request.
///
/// # Example
///
/// ```no_run
/// use wykop_api::{Client, PromotedSort};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new("app-key", "user-key")?;
/// let links = client.links().promoted(1, PromotedSort::Day).await?;
/// println!("{} promoted links", links.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    app_key: String,
    user_key: String,
    endpoint: ApiEndpoint,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Creates a client for the public API using the default reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the HTTP client cannot be built.
    pub fn new(app_key: impl Into<String>, user_key: impl Into<String>) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(app_key, user_key, Arc::new(transport)))
    }

    /// Creates a client with a caller-supplied HTTP executor.
    #[must_use]
    pub fn with_transport(
        app_key: impl Into<String>,
        user_key: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            app_key: app_key.into(),
            user_key: user_key.into(),
            endpoint: ApiEndpoint::default(),
            transport,
        }
    }

    /// Replaces the target endpoint (scheme and host).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: ApiEndpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Endpoint this client targets.
    #[must_use]
    pub fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    /// Accessor for the `links` resource.
    #[must_use]
    pub fn links(&self) -> LinksResource<'_> {
        LinksResource::new(self)
    }

    /// Accessor for the `link` resource.
    #[must_use]
    pub fn link(&self) -> LinkResource<'_> {
        LinkResource::new(self)
    }

    /// Returns a copy of `request` with credentials appended to its api params.
    ///
    /// `appkey` is always added; `userkey` only when the request requires
    /// user authentication. The original request is left untouched.
    #[must_use]
    pub fn authenticate(&self, request: &ApiRequest) -> ApiRequest {
        let mut authenticated = request.clone();
        authenticated
            .api_params
            .push(Param::new(APP_KEY_PARAM, &self.app_key));
        if authenticated.requires_user_auth {
            authenticated
                .api_params
                .push(Param::new(USER_KEY_PARAM, &self.user_key));
        }
        authenticated
    }

    /// Executes `request` and decodes the JSON body into `T`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::MalformedRequest`] before any network activity
    /// - [`ApiError::Transport`] when the executor or body stream fails
    /// - [`ApiError::Decode`] when the body does not match `T`
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Executes `request` and discards the response body.
    ///
    /// # Errors
    ///
    /// - [`ApiError::MalformedRequest`] before any network activity
    /// - [`ApiError::Transport`] when the executor or body stream fails
    pub async fn execute(&self, request: &ApiRequest) -> Result<(), ApiError> {
        let response = self.send(request).await?;
        response.drain().await?;
        Ok(())
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(
            resource = %request.resource,
            method = %request.method,
            http_method = %request.http_method,
            user_auth = request.requires_user_auth,
        )
    )]
    async fn send(&self, request: &ApiRequest) -> Result<TransportResponse, ApiError> {
        let authenticated = self.authenticate(request);
        let http_request = authenticated.build(&self.endpoint)?;
        debug!("Sending API request");
        let response = self.transport.execute(http_request).await?;
        debug!(status = response.status().as_u16(), "API request completed");
        Ok(response)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::transport::TransportError;

    struct UnreachableTransport;

    #[async_trait]
    impl Transport for UnreachableTransport {
        async fn execute(
            &self,
            _request: reqwest::Request,
        ) -> Result<TransportResponse, TransportError> {
            Err(std::io::Error::other("transport must not be called").into())
        }
    }

    fn client() -> Client {
        Client::with_transport("app", "user", Arc::new(UnreachableTransport))
    }

    #[test]
    fn test_authenticate_appends_app_key_only_without_user_auth() {
        let request = ApiRequest::get("links", "promoted");
        let authenticated = client().authenticate(&request);
        assert_eq!(authenticated.api_params, vec![Param::new("appkey", "app")]);
    }

    #[test]
    fn test_authenticate_appends_user_key_when_required() {
        let request = ApiRequest::get("link", "index").with_user_auth();
        let authenticated = client().authenticate(&request);
        assert_eq!(
            authenticated.api_params,
            vec![Param::new("appkey", "app"), Param::new("userkey", "user")]
        );
    }

    #[test]
    fn test_authenticate_leaves_original_untouched() {
        let request = ApiRequest::get("links", "upcoming").api_param("page", 1);
        let before = request.clone();
        let _ = client().authenticate(&request);
        assert_eq!(request, before);
    }

    #[test]
    fn test_debug_does_not_expose_credentials() {
        let client = Client::with_transport(
            "secret-app-key",
            "secret-user-key",
            Arc::new(UnreachableTransport),
        );
        let debug = format!("{client:?}");
        assert!(!debug.contains("secret-app-key"), "got: {debug}");
        assert!(!debug.contains("secret-user-key"), "got: {debug}");
    }

    #[tokio::test]
    async fn test_malformed_request_fails_before_transport() {
        let request = ApiRequest::get("", "promoted");
        let err = client().execute(&request).await.unwrap_err();
        assert!(
            matches!(err, ApiError::MalformedRequest { field: "resource" }),
            "got: {err:?}"
        );
    }
}
