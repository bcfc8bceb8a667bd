//! # Catalog Loading
//!
//! Fetches the `{ "artworks": [...] }` document from a file or over HTTP.
//! Failures never reach the navigation core: [`load_catalog`] logs them and
//! hands back an empty catalog, which every surface treats as valid input.

use std::fmt;
use std::path::PathBuf;

use async_trait::async_trait;
use log::{error, info, warn};
use reqwest::header::CACHE_CONTROL;

use crate::core::catalog::{Catalog, Item};

#[derive(Debug)]
pub enum SourceError {
    Io(std::io::Error),
    /// Connection failures and non-success HTTP responses.
    Network(String),
    /// Not JSON at all.
    Parse(serde_json::Error),
    /// JSON without an `artworks` array.
    Shape,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Io(e) => write!(f, "catalog I/O error: {e}"),
            SourceError::Network(msg) => write!(f, "catalog network error: {msg}"),
            SourceError::Parse(e) => write!(f, "catalog parse error: {e}"),
            SourceError::Shape => write!(f, "catalog document has no artworks array"),
        }
    }
}

impl std::error::Error for SourceError {}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable location, for logs and the status line.
    fn describe(&self) -> String;

    /// Raw bytes of the catalog document.
    async fn fetch(&self) -> Result<Vec<u8>, SourceError>;
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, SourceError> {
        tokio::fs::read(&self.path).await.map_err(SourceError::Io)
    }
}

pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Network(format!("HTTP {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// Picks HTTP for `http://`/`https://` locations, the filesystem otherwise.
pub fn source_for(location: &str) -> Box<dyn CatalogSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

/// Decodes a catalog document. Records that fail to decode are skipped.
pub fn parse_document(bytes: &[u8]) -> Result<Catalog, SourceError> {
    let document: serde_json::Value = serde_json::from_slice(bytes).map_err(SourceError::Parse)?;
    let Some(records) = document.get("artworks").and_then(|v| v.as_array()) else {
        return Err(SourceError::Shape);
    };

    let mut items = Vec::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        match serde_json::from_value::<Item>(record.clone()) {
            Ok(item) => items.push(item),
            Err(e) => warn!("Skipping artwork record {}: {}", position, e),
        }
    }
    Ok(Catalog::new(items))
}

/// Fetches and decodes, degrading any failure to an empty catalog.
pub async fn load_catalog(source: &dyn CatalogSource) -> Catalog {
    let result = match source.fetch().await {
        Ok(bytes) => parse_document(&bytes),
        Err(e) => Err(e),
    };

    match result {
        Ok(catalog) => {
            info!(
                "Loaded {} artworks from {}",
                catalog.len(),
                source.describe()
            );
            catalog
        }
        Err(e) => {
            error!("Error loading catalog from {}: {}", source.describe(), e);
            Catalog::empty()
        }
    }
}
