use std::collections::HashSet;

use serde::Deserialize;
use shared::{catalog_slug, Category};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Catalog file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Category at index {0} has an empty name")]
    EmptyName(usize),
    #[error("Two categories share the slug {0:?}")]
    DuplicateSlug(String),
}

/// Accepted layouts of the catalog file.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<Category>),
    Wrapped { categories: Vec<Category> },
}

impl CatalogFile {
    fn into_categories(self) -> Vec<Category> {
        match self {
            CatalogFile::List(categories) => categories,
            CatalogFile::Wrapped { categories } => categories,
        }
    }
}

/// Read-only category list served by the course API.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Builds a catalog, keeping the given order.
    ///
    /// Names must be non-blank and map to distinct slugs, otherwise two
    /// catalog pages would share one URL.
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (index, category) in categories.iter().enumerate() {
            if category.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(index));
            }
            let slug = catalog_slug(&category.name);
            if !seen.insert(slug.clone()) {
                return Err(CatalogError::DuplicateSlug(slug));
            }
        }
        Ok(Self { categories })
    }

    pub fn builtin() -> Self {
        let categories = [
            (
                "Web Development",
                "HTML, CSS, JavaScript and the frameworks built on them",
            ),
            ("Python", "From first scripts to production services"),
            ("Android Development", "Native mobile apps with Kotlin"),
            ("Data Science", "Statistics, notebooks and visualisation"),
            ("AI", "Machine learning and language models"),
            ("Cloud Computing", "Deploying and operating services"),
        ]
        .into_iter()
        .map(|(name, description)| Category {
            name: name.to_string(),
            description: Some(description.to_string()),
        })
        .collect();

        Self { categories }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.into_categories())
    }

    /// Loads the catalog file at `path`, or the built-in catalog when no path is configured.
    pub async fn load(path: Option<&str>) -> Result<Self, CatalogError> {
        let Some(path) = path else {
            return Ok(Self::builtin());
        };

        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_string(),
                source,
            })?;
        Self::from_json(&json)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Category> {
        let slug = slug.to_lowercase();
        self.categories
            .iter()
            .find(|category| catalog_slug(&category.name) == slug)
    }
}
