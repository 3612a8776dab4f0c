use std::path::{Path, PathBuf};

use crate::error::{Result, SearchAppError};
use crate::models::Article;

/// Static list of papers shown on the corpus page.
///
/// Independent of the search service: it is read once from a local JSON
/// array at startup and never written.
#[derive(Debug, Clone)]
pub struct Catalog {
    path: PathBuf,
    articles: Vec<Article>,
}

impl Catalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(path, &raw)?;
        tracing::info!(
            "Loaded {} articles from {}",
            catalog.articles.len(),
            path.display()
        );
        Ok(catalog)
    }

    fn from_json(path: &Path, raw: &str) -> Result<Self> {
        let articles: Vec<Article> = serde_json::from_str(raw)
            .map_err(|e| SearchAppError::Catalog(format!("{}: {e}", path.display())))?;
        Ok(Self {
            path: path.to_path_buf(),
            articles,
        })
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
