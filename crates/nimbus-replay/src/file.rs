//! Golden fixture files.
//!
//! Exchanges can live on disk as JSON documents under
//! `contracts/http/{service}/{id}.json` and be loaded into a registry,
//! keeping long wire literals (auth bodies, catalog payloads) out of test
//! source. Unlike the in-code builders, loading returns errors instead of
//! panicking so tooling can report every bad file.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::fixture::{CannedResponse, ExpectedRequest, Fixture};

/// One exchange as stored on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureFile {
    /// Service name used for filtering (matches the directory name).
    pub service: String,
    /// Unique identifier within the service (matches the filename stem).
    pub id: String,
    /// Human-readable description shown in tooling output.
    pub description: String,
    pub request: RequestSpec,
    pub response: ResponseSpec,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestSpec {
    pub method: String,
    /// Absolute URL the client is expected to hit.
    pub url: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    pub body: Option<serde_json::Value>,
    /// Constrain the full header set instead of the default subset match.
    #[serde(default)]
    pub exact_headers: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseSpec {
    pub status: u16,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum FixtureFileError {
    #[error("cannot read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid fixture JSON in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("fixture {id}: unknown HTTP method {method:?}")]
    InvalidMethod { id: String, method: String },
    #[error("fixture {id}: invalid URL {url:?}")]
    InvalidUrl { id: String, url: String },
    #[error("fixture {id}: invalid status code {status}")]
    InvalidStatus { id: String, status: u16 },
    #[error("fixture {id}: invalid header {name:?}")]
    InvalidHeader { id: String, name: String },
    #[error("no fixture directory for service {service:?} at {path}")]
    UnknownService { service: String, path: PathBuf },
}

impl FixtureFile {
    /// Convert the on-disk record into a registry fixture, validating the
    /// method, URL, status, and headers.
    pub fn to_fixture(&self) -> Result<Fixture, FixtureFileError> {
        let method = Method::from_bytes(self.request.method.to_uppercase().as_bytes()).map_err(
            |_| FixtureFileError::InvalidMethod {
                id: self.id.clone(),
                method: self.request.method.clone(),
            },
        )?;
        let url = Url::parse(&self.request.url).map_err(|_| FixtureFileError::InvalidUrl {
            id: self.id.clone(),
            url: self.request.url.clone(),
        })?;
        if url.host_str().is_none() {
            return Err(FixtureFileError::InvalidUrl {
                id: self.id.clone(),
                url: self.request.url.clone(),
            });
        }
        let status =
            StatusCode::from_u16(self.response.status).map_err(|_| {
                FixtureFileError::InvalidStatus {
                    id: self.id.clone(),
                    status: self.response.status,
                }
            })?;

        let expected = ExpectedRequest {
            method,
            url,
            headers: self.header_map(&self.request.headers)?,
            body: self
                .request
                .body
                .as_ref()
                .map(|v| Bytes::from(v.to_string())),
            exact_headers: self.request.exact_headers,
        };
        let response = CannedResponse {
            status,
            headers: self.header_map(&self.response.headers)?,
            body: self
                .response
                .body
                .as_ref()
                .map(|v| Bytes::from(v.to_string()))
                .unwrap_or_default(),
        };
        Ok(Fixture { expected, response })
    }

    fn header_map(&self, raw: &HashMap<String, String>) -> Result<HeaderMap, FixtureFileError> {
        let mut map = HeaderMap::new();
        for (name, value) in raw {
            let header_name =
                HeaderName::try_from(name.as_str()).map_err(|_| FixtureFileError::InvalidHeader {
                    id: self.id.clone(),
                    name: name.clone(),
                })?;
            let header_value = HeaderValue::try_from(value.as_str()).map_err(|_| {
                FixtureFileError::InvalidHeader {
                    id: self.id.clone(),
                    name: name.clone(),
                }
            })?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}

/// Load all fixture files from `{root}/contracts/http/`, optionally filtered
/// to a single service subdirectory. Results are sorted by service then id.
///
/// Filtering by a service with no directory is an error, not an empty
/// result — a misspelled filter must not look like a passing run.
pub fn load_all(root: &Path, service: Option<&str>) -> Result<Vec<FixtureFile>, FixtureFileError> {
    let http_dir = root.join("contracts/http");

    let service_dirs: Vec<PathBuf> = match service {
        Some(svc) => {
            let dir = http_dir.join(svc);
            if !dir.is_dir() {
                return Err(FixtureFileError::UnknownService {
                    service: svc.to_owned(),
                    path: dir,
                });
            }
            vec![dir]
        }
        None => read_dir(&http_dir)?
            .into_iter()
            .filter(|p| p.is_dir())
            .collect(),
    };

    let mut fixtures = Vec::new();
    for dir in service_dirs {
        for path in read_dir(&dir)? {
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                let content = fs::read_to_string(&path).map_err(|source| FixtureFileError::Io {
                    path: path.clone(),
                    source,
                })?;
                let fixture: FixtureFile =
                    serde_json::from_str(&content).map_err(|source| FixtureFileError::Parse {
                        path: path.clone(),
                        source,
                    })?;
                fixtures.push(fixture);
            }
        }
    }

    fixtures.sort_by(|a, b| a.service.cmp(&b.service).then(a.id.cmp(&b.id)));
    Ok(fixtures)
}

fn read_dir(dir: &Path) -> Result<Vec<PathBuf>, FixtureFileError> {
    fs::read_dir(dir)
        .map_err(|source| FixtureFileError::Io {
            path: dir.to_path_buf(),
            source,
        })
        .map(|entries| entries.filter_map(|e| e.ok()).map(|e| e.path()).collect())
}
