//! In-memory `FundService` used by unit tests.

use crate::core::{FundService, VgError};
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

type Responder = Box<dyn Fn(&str, Option<&str>) -> Result<String, VgError> + Send + Sync>;

/// Answers every request through a closure and records what was asked.
pub(crate) struct FakeService {
    respond: Responder,
    calls: Mutex<Vec<String>>,
}

impl FakeService {
    pub(crate) fn new(
        respond: impl Fn(&str, Option<&str>) -> Result<String, VgError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            respond: Box::new(respond),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always returns the same body.
    pub(crate) fn fixed(body: &str) -> Self {
        let body = body.to_string();
        Self::new(move |_, _| Ok(body.clone()))
    }

    /// Requests seen so far, as `symbol/resource?query`.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl FundService for FakeService {
    fn fetch_resource<'a>(
        &'a self,
        symbol: &'a str,
        resource: &'a str,
        query: Option<&'a str>,
    ) -> Pin<Box<dyn Future<Output = Result<String, VgError>> + Send + 'a>> {
        let key = match query {
            Some(q) => format!("{symbol}/{resource}?{q}"),
            None => format!("{symbol}/{resource}"),
        };
        self.calls.lock().unwrap().push(key);
        let out = (self.respond)(resource, query);
        Box::pin(async move { out })
    }
}
