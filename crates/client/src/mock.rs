//! In-memory transport for testing.

use crate::error::{ErrorKind, Result};
use crate::transport::Transport;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory [`Transport`] for tests.
///
/// Routes are a plain path → body map, and every requested path is recorded
/// in order, so tests can assert on exact request counts. Unknown paths
/// answer 404. Wrap it in an [`Arc`](std::sync::Arc) to keep a handle for
/// assertions after the [`Session`](crate::Session) takes ownership.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use webmanrc_client::{MockTransport, Session};
///
/// let transport = Arc::new(MockTransport::with_routes([
///     ("/cpursx.ps3?/sman.ps3", "<html>...</html>"),
/// ]));
/// let session = Session::with_transport(Arc::clone(&transport));
/// let _ = session.refresh();
/// assert_eq!(transport.hits("/cpursx.ps3?/sman.ps3"), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: HashMap<String, String>,
    log: Mutex<Vec<String>>,
}

impl MockTransport {
    /// Creates a mock pre-loaded with routes.
    pub fn with_routes(
        routes: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        Self {
            routes: routes.into_iter().map(|(path, body)| (path.into(), body.into())).collect(),
            log: Mutex::new(Vec::new()),
        }
    }

    /// Every path requested so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        // The panic on a poisoned lock is DELIBERATE. MockTransport is
        // intended to be used in tests; panics are expected.
        self.log.lock().unwrap().clone()
    }

    /// Number of requests made for one specific path.
    pub fn hits(&self, path_and_query: &str) -> usize {
        self.log.lock().unwrap().iter().filter(|p| *p == path_and_query).count()
    }
}

impl Transport for MockTransport {
    fn base_url(&self) -> &str {
        "http://mock"
    }

    fn get(&self, path_and_query: &str) -> Result<String> {
        self.log.lock().unwrap().push(path_and_query.to_string());
        match self.routes.get(path_and_query) {
            Some(body) => Ok(body.clone()),
            None => exn::bail!(ErrorKind::Http { status: 404 }),
        }
    }
}
