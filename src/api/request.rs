//! Request description and path-segment URL rendering.
//!
//! Every wykop API call is addressed by `resource/method` followed by
//! positional method parameters and a single comma-joined blob of named API
//! parameters. No query string or request body is ever used.

use reqwest::Method;
use url::Url;

use super::error::ApiError;

/// Default URL scheme for API requests.
pub const DEFAULT_SCHEME: &str = "https";

/// Fixed API host name.
pub const API_HOST: &str = "a.wykop.pl";

/// Name/value pair used for method, API and post parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name (discarded for positional method params).
    pub name: String,
    /// Parameter value, already rendered as a string.
    pub value: String,
}

impl Param {
    /// Creates a parameter from any displayable value.
    pub fn new(name: impl Into<String>, value: impl ToString) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
        }
    }
}

/// Scheme and host the client targets.
///
/// Production code uses [`ApiEndpoint::default`]; tests point the host at a
/// local mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    scheme: String,
    host: String,
}

impl Default for ApiEndpoint {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            host: API_HOST.to_string(),
        }
    }
}

impl ApiEndpoint {
    /// Creates the wykop endpoint with a custom scheme.
    #[must_use]
    pub fn with_scheme(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: API_HOST.to_string(),
        }
    }

    /// Creates an endpoint with a custom scheme and host (`host[:port]`).
    #[must_use]
    pub fn custom(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
        }
    }

    /// URL scheme, e.g. `https`.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Host, optionally with a port.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }
}

/// One API call: verb, auth requirement, endpoint identifiers and params.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method token, e.g. `GET`.
    pub http_method: String,
    /// Whether the user key must be sent along with the app key.
    pub requires_user_auth: bool,
    /// Endpoint family, e.g. `links`.
    pub resource: String,
    /// Operation within the resource, e.g. `promoted`.
    pub method: String,
    /// Positional path parameters; only values are rendered.
    pub method_params: Vec<Param>,
    /// Named parameters flattened into the trailing path segment.
    pub api_params: Vec<Param>,
    /// Body parameters for write operations. Not rendered by any current call.
    pub post_params: Vec<Param>,
}

impl ApiRequest {
    /// Creates a `GET` request for `resource/method`.
    pub fn get(resource: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            http_method: Method::GET.as_str().to_string(),
            resource: resource.into(),
            method: method.into(),
            ..Self::default()
        }
    }

    /// Marks the request as requiring the user key.
    #[must_use]
    pub fn with_user_auth(mut self) -> Self {
        self.requires_user_auth = true;
        self
    }

    /// Appends a positional method parameter.
    #[must_use]
    pub fn method_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.method_params.push(Param::new(name, value));
        self
    }

    /// Appends a named API parameter.
    #[must_use]
    pub fn api_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.api_params.push(Param::new(name, value));
        self
    }

    /// Renders the URL path (without a leading slash).
    ///
    /// Segment order is resource, method, method-param values, then the
    /// api params flattened as `name,value,name,value` when any exist.
    #[must_use]
    pub fn build_path(&self) -> String {
        let api_params = self
            .api_params
            .iter()
            .flat_map(|param| [param.name.as_str(), param.value.as_str()])
            .collect::<Vec<_>>()
            .join(",");

        let mut segments = vec![self.resource.as_str(), self.method.as_str()];
        segments.extend(self.method_params.iter().map(|param| param.value.as_str()));
        if !api_params.is_empty() {
            segments.push(&api_params);
        }
        segments.join("/")
    }

    /// Renders the absolute URL against `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MalformedRequest`] when the endpoint scheme or host
    /// cannot form a valid URL.
    pub fn build_url(&self, endpoint: &ApiEndpoint) -> Result<Url, ApiError> {
        let base = format!("{}://{}/", endpoint.scheme(), endpoint.host());
        let mut url = Url::parse(&base).map_err(|_| ApiError::malformed("endpoint"))?;
        url.set_path(&self.build_path());
        Ok(url)
    }

    /// Validates the request and turns it into a body-less transport request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MalformedRequest`] when `resource`, `http_method`
    /// or `method` is empty, or the HTTP method is not a valid token.
    pub fn build(&self, endpoint: &ApiEndpoint) -> Result<reqwest::Request, ApiError> {
        if self.resource.is_empty() {
            return Err(ApiError::malformed("resource"));
        }
        if self.http_method.is_empty() {
            return Err(ApiError::malformed("http_method"));
        }
        if self.method.is_empty() {
            return Err(ApiError::malformed("method"));
        }
        let method = Method::from_bytes(self.http_method.as_bytes())
            .map_err(|_| ApiError::malformed("http_method"))?;
        let url = self.build_url(endpoint)?;
        Ok(reqwest::Request::new(method, url))
    }
}
