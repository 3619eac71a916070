//! HTTP push client for OpenStage phones.
//!
//! A phone runs a small HTTP server on port 8085. POSTing a form-encoded
//! parameter set to its push script makes the device fetch and display an
//! XML application from the address carried in the parameters. This crate
//! assembles that parameter set and performs the single blocking request;
//! it knows nothing about the XML dialect itself (see the `ippml` crate).
//!
//! There is deliberately no retry, pooling or concurrency here: one push is
//! one request/response round trip, and transport failures surface to the
//! caller untouched.

use indexmap::IndexMap;
use thiserror::Error;
use url::Url;

#[cfg(feature = "tracing")]
use tracing::debug;

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($tt:tt)*) => {};
}

/// Port of the push server on the phone.
pub const PHONE_PORT: u16 = 8085;

/// Path of the push script on the phone.
pub const PUSH_SCRIPT: &str = "/server_push.html/ServerPush";

/// How the phone should treat the pushed application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    /// Display immediately.
    Active,
    /// Queue behind whatever the user is doing.
    Queue,
    /// Light the mail LED and wait for the user.
    Indicate,
    /// Display immediately, interrupting calls.
    Force,
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RequestType::Active => "ACTIVE",
            RequestType::Queue => "QUEUE",
            RequestType::Indicate => "INDICATE",
            RequestType::Force => "FORCE",
        })
    }
}

/// Errors raised while assembling or sending a push request.
#[derive(Debug, Error)]
pub enum PushError {
    /// The application address could not be parsed into a URL.
    #[error("invalid application address: {0}")]
    Address(#[from] url::ParseError),

    /// The request itself failed: connection refused, timeout, or an error
    /// status from the phone.
    #[error("push request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// An insertion-ordered parameter set, encoded as an
/// `application/x-www-form-urlencoded` body. Setting an existing name
/// updates it in place without changing its position.
#[derive(Debug, Clone, Default)]
pub struct RequestParameters {
    entries: IndexMap<String, String>,
}

impl RequestParameters {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, keeping insertion order for new names.
    pub fn set(&mut self, name: impl Into<String>, value: impl ToString) {
        self.entries.insert(name.into(), value.to_string());
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// URL-encode the parameters into a request body.
    pub fn to_body(&self) -> String {
        let mut encoder = url::form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.entries {
            encoder.append_pair(name, value);
        }
        encoder.finish()
    }
}

/// One push notification: the address the phone should fetch the
/// application from, plus the bookkeeping the push script wants.
#[derive(Debug, Clone)]
pub struct Push {
    app_addr: Url,
    midlet_name: String,
    request_type: RequestType,
    context_key: String,
    context_value: String,
}

impl Push {
    /// A push pointing the phone at `app_addr`.
    ///
    /// `context_key`/`context_value` are a free-form pair handed back to
    /// the application server with the phone's first request.
    pub fn new(
        app_addr: Url,
        midlet_name: impl Into<String>,
        request_type: RequestType,
        context_key: impl Into<String>,
        context_value: impl Into<String>,
    ) -> Self {
        Self {
            app_addr,
            midlet_name: midlet_name.into(),
            request_type,
            context_key: context_key.into(),
            context_value: context_value.into(),
        }
    }

    /// Assemble the application address from its parts.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        protocol: &str,
        server_address: &str,
        server_port: u16,
        program_path: &str,
        midlet_name: impl Into<String>,
        request_type: RequestType,
        context_key: impl Into<String>,
        context_value: impl Into<String>,
    ) -> Result<Self, PushError> {
        let app_addr: Url =
            format!("{protocol}://{server_address}:{server_port}{program_path}").parse()?;
        Ok(Self::new(
            app_addr,
            midlet_name,
            request_type,
            context_key,
            context_value,
        ))
    }

    /// The address the phone will fetch the application from.
    pub fn app_addr(&self) -> &Url {
        &self.app_addr
    }

    /// The parameter set the push script expects, in its documented order.
    pub fn parameters(&self) -> RequestParameters {
        let mut params = RequestParameters::new();
        params.set("ServerAddr", self.app_addr.host_str().unwrap_or_default());
        let port = match self.app_addr.port_or_known_default() {
            Some(port) => port.to_string(),
            None => "-1".to_string(),
        };
        params.set("ServerPort", port);
        params.set("ProgramName", self.app_addr.path());
        params.set("RequestType", self.request_type);
        params.set("MidletName", &self.midlet_name);
        params.set("ServerProtocol", self.app_addr.scheme());
        params.set("ServerContextKey", &self.context_key);
        params.set("ServerContextValue", &self.context_value);
        params
    }

    /// Send the push to the phone at `phone_address` (IP or host name) and
    /// return the first line of its reply.
    ///
    /// One blocking POST, no retries; transport and HTTP-status failures
    /// come back as [`PushError::Http`].
    pub fn push_to(&self, phone_address: &str) -> Result<String, PushError> {
        let target = format!("http://{phone_address}:{PHONE_PORT}{PUSH_SCRIPT}");
        debug!(%target, "sending push notification");
        let response = reqwest::blocking::Client::new()
            .post(&target)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(self.parameters().to_body())
            .send()?
            .error_for_status()?
            .text()?;
        Ok(response.lines().next().unwrap_or_default().to_owned())
    }
}

// =============================================================================
// Tests
// =============================================================================
