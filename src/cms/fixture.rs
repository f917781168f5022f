//! Local fixture source: one `{collection}.json` file per collection.

use std::path::PathBuf;

use client::net::types::Collection;

use super::types::{CmsError, ContentSource};

pub struct FixtureContentClient {
    dir: PathBuf,
}

impl FixtureContentClient {
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, collection: Collection) -> PathBuf {
        self.dir.join(format!("{collection}.json"))
    }
}

#[async_trait::async_trait]
impl ContentSource for FixtureContentClient {
    async fn query(&self, collection: Collection) -> Result<Vec<serde_json::Value>, CmsError> {
        let path = self.path_for(collection);
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "fixture missing; empty collection");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(CmsError::FixtureRead { path: path.display().to_string(), message: e.to_string() });
            }
        };
        super::parse_items(&text)
    }
}

#[cfg(test)]
#[path = "fixture_test.rs"]
mod tests;
