use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, instrument};
use url::{ParseError, Url};

use crate::ledgerlink::tools::config::ClientConfig;
use crate::ledgerlink::tools::error::{Result, ToolError};
use crate::ledgerlink::tools::io::transport::{ApiRequest, ApiResponse, Method, Transport};

const USER_AGENT: &str = concat!("ledgerlink-tools/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP transport backed by `reqwest`.
pub struct HttpTransport {
    base: Url,
    access_token: Option<String>,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        let base = Url::parse(&config.endpoint)?;
        if base.cannot_be_a_base() {
            return Err(ParseError::RelativeUrlWithCannotBeABaseBase.into());
        }

        Ok(Self {
            base,
            access_token: config.access_token.clone(),
            client,
        })
    }

    /// Absolute URL for `request`, each path segment percent-encoded below
    /// the endpoint's own path.
    pub fn url_for(&self, request: &ApiRequest) -> Result<Url> {
        if let Some(segment) = request
            .segments
            .iter()
            .find(|segment| matches!(segment.as_str(), "." | ".."))
        {
            return Err(ToolError::InvalidPathSegment(segment.clone()));
        }

        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(&request.segments);
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        Ok(url)
    }
}

impl Transport for HttpTransport {
    #[instrument(
        level = "debug",
        skip_all,
        fields(method = %request.method, path = %request.path())
    )]
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let url = self.url_for(request)?;
        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        }
        .header(ACCEPT, "application/json");

        if let Some(token) = &self.access_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();
        debug!(status, bytes = body.len(), "response received");
        Ok(ApiResponse { status, body })
    }
}
