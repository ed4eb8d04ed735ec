//! Ordered fixture registry and structural request matching.
//!
//! Policy: **ordered queue**. Fixtures are consumed in registration order
//! among those that structurally match, and each fixture answers exactly one
//! request. Registering two fixtures with identical expected requests is how
//! a test gives distinct responses to repeated calls (e.g. a token handshake
//! that runs twice in a re-auth flow). A request that matches nothing fails
//! hard — an unmatched request means the client sent something the test did
//! not declare.

use std::sync::Mutex;

use nimbus_core::transport::{MismatchReport, TransportError};
use nimbus_core::wire::{RequestSnapshot, ResponseSnapshot};

use crate::fixture::{CannedResponse, ExpectedRequest, Fixture};

struct Entry {
    fixture: Fixture,
    consumed: bool,
}

/// Registry of declared exchanges for one test run.
///
/// Built up-front via [`register`](Self::register), then treated as an
/// immutable snapshot: during the run only the per-entry consumption flag
/// changes, behind a mutex, so internally-concurrent clients cannot race on
/// which queued fixture a request consumes.
pub struct FixtureRegistry {
    entries: Mutex<Vec<Entry>>,
}

impl FixtureRegistry {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Append one fixture to the queue (ordered-queue policy: duplicates
    /// append, each consumed once).
    pub fn register(&mut self, expected: ExpectedRequest, response: CannedResponse) {
        self.entries
            .get_mut()
            .expect("fixture registry lock poisoned")
            .push(Entry {
                fixture: Fixture { expected, response },
                consumed: false,
            });
    }

    /// Match `actual` against the first unconsumed fixture that structurally
    /// matches, consume it, and return its canned response.
    ///
    /// Fails with [`TransportError::Exhausted`] when nothing is left to
    /// consume, or [`TransportError::Unmatched`] (carrying the actual request
    /// and the nearest remaining candidate) when fixtures remain but none
    /// match.
    pub fn resolve(&self, actual: &RequestSnapshot) -> Result<ResponseSnapshot, TransportError> {
        let mut entries = self.entries.lock().expect("fixture registry lock poisoned");

        if entries.iter().all(|e| e.consumed) {
            tracing::error!(request = %actual, "fixture registry exhausted");
            return Err(TransportError::Exhausted);
        }

        for entry in entries.iter_mut().filter(|e| !e.consumed) {
            if matches(&entry.fixture.expected, actual) {
                entry.consumed = true;
                tracing::debug!(request = %actual, "fixture matched");
                return Ok(entry.fixture.response.to_snapshot());
            }
        }

        let nearest = entries
            .iter()
            .filter(|e| !e.consumed)
            .max_by_key(|e| proximity(&e.fixture.expected, actual))
            .map(|e| e.fixture.expected.to_snapshot());
        tracing::error!(request = %actual, "no fixture matched");
        Err(TransportError::Unmatched(MismatchReport {
            actual: actual.clone(),
            nearest,
        }))
    }

    /// Number of fixtures never consumed. Tests assert this is zero at the
    /// end of a run to catch declared-but-unsent requests.
    pub fn unconsumed(&self) -> usize {
        self.entries
            .lock()
            .expect("fixture registry lock poisoned")
            .iter()
            .filter(|e| !e.consumed)
            .count()
    }

    /// # Panics
    ///
    /// Panics if any fixture was never consumed, listing the leftovers.
    pub fn assert_fully_consumed(&self) {
        let entries = self.entries.lock().expect("fixture registry lock poisoned");
        let leftover: Vec<String> = entries
            .iter()
            .filter(|e| !e.consumed)
            .map(|e| e.fixture.expected.to_snapshot().describe())
            .collect();
        assert!(
            leftover.is_empty(),
            "fixtures never consumed:\n  {}",
            leftover.join("\n  ")
        );
    }
}

impl Default for FixtureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural match between a declared request and an actual one.
///
/// URLs compare as parsed [`url::Url`] values, so parser normalization
/// (lowercased scheme and host, elided default ports, `/` for an empty path)
/// applies to both sides equally. A trailing slash elsewhere in the path is
/// significant and does not match its slash-less counterpart. Query strings
/// compare verbatim, order included.
fn matches(expected: &ExpectedRequest, actual: &RequestSnapshot) -> bool {
    expected.method == actual.method
        && expected.url == actual.url
        && headers_match(expected, actual)
        && body_matches(expected, actual)
}

fn headers_match(expected: &ExpectedRequest, actual: &RequestSnapshot) -> bool {
    let subset = expected
        .headers
        .iter()
        .all(|(name, value)| actual.headers.get(name) == Some(value));
    if !subset {
        return false;
    }
    if expected.exact_headers {
        // No headers beyond the declared set.
        actual
            .headers
            .keys()
            .all(|name| expected.headers.contains_key(name))
    } else {
        true
    }
}

fn body_matches(expected: &ExpectedRequest, actual: &RequestSnapshot) -> bool {
    match &expected.body {
        Some(body) => actual.body.as_ref() == Some(body),
        None => true,
    }
}

/// Similarity score used to pick the nearest candidate for diagnostics.
/// Higher is closer; weights favor URL agreement, with partial credit for a
/// path that differs only by trailing slash.
fn proximity(expected: &ExpectedRequest, actual: &RequestSnapshot) -> u32 {
    let mut score = 0;
    if expected.method == actual.method {
        score += 3;
    }
    if expected.url == actual.url {
        score += 6;
    } else {
        if expected.url.scheme() == actual.url.scheme()
            && expected.url.host_str() == actual.url.host_str()
            && expected.url.port_or_known_default() == actual.url.port_or_known_default()
        {
            score += 2;
        }
        if expected.url.path() == actual.url.path() {
            score += 2;
        } else if expected.url.path().trim_end_matches('/')
            == actual.url.path().trim_end_matches('/')
        {
            score += 1;
        }
    }
    if headers_match(expected, actual) {
        score += 2;
    }
    if body_matches(expected, actual) {
        score += 1;
    }
    score
}
