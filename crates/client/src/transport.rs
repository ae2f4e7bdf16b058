//! HTTP transport seam.
//!
//! [`Transport`] is the one place network I/O happens: everything above it
//! works on markup strings, so the whole client can be exercised against an
//! in-memory transport in tests. All calls are synchronous and blocking; the
//! library imposes no timeouts, retries, or connection pooling of its own.

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use std::fmt::Debug;
use std::sync::Arc;

/// Blocking GET against the console's web interface.
///
/// `path_and_query` is everything after the authority, leading slash
/// included. The response body is decoded as text; there are no binary
/// payloads on this interface.
pub trait Transport: Debug + Send + Sync {
    fn get(&self, path_and_query: &str) -> Result<String>;

    /// Base URL of the target, without a trailing slash. Device paths are
    /// appended to it verbatim.
    fn base_url(&self) -> &str;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, path_and_query: &str) -> Result<String> {
        (**self).get(path_and_query)
    }

    fn base_url(&self) -> &str {
        (**self).base_url()
    }
}

/// Plain-HTTP transport for a real console.
#[derive(Debug)]
pub struct HttpTransport {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Targets `http://host:port`. The firmware speaks plain HTTP only, with
    /// no authentication and no content negotiation.
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            base_url: format!("http://{host}:{port}"),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Transport for HttpTransport {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path_and_query: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path_and_query);
        tracing::debug!(%url, "GET");
        let response =
            self.client.get(&url).send().or_raise(|| ErrorKind::Connection(url.clone()))?;
        let status = response.status();
        if !status.is_success() {
            exn::bail!(ErrorKind::Http { status: status.as_u16() });
        }
        response.text().or_raise(|| ErrorKind::Connection(url))
    }
}
