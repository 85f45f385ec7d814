use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tera::{Context, Tera};
use thiserror::Error;

use crate::config::PageSettings;

const PAGE_TEMPLATE: &str = "page.html";
const DEFAULT_TEMPLATE: &str = include_str!("../../templates/page.html.tera");

#[derive(Debug, Error)]
pub enum PageError {
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Failed to read page template {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Serialize)]
struct Container {
    id: String,
    html: String,
}

/// An HTML document with a fixed set of addressable containers.
///
/// The template sees `title`, `containers` (ordered `{id, html}` entries)
/// and `mounts` (`id -> html`). Container HTML is inserted unescaped.
#[derive(Debug, Clone)]
pub struct Page {
    title: String,
    tera: Tera,
    containers: Vec<Container>,
}

impl Page {
    pub fn new<I, S>(title: impl Into<String>, template: &str, containers: I) -> Result<Self, PageError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE, template)?;

        Ok(Self {
            title: title.into(),
            tera,
            containers: containers
                .into_iter()
                .map(|id| Container {
                    id: id.into(),
                    html: String::new(),
                })
                .collect(),
        })
    }

    pub fn with_default_template<I, S>(title: impl Into<String>, containers: I) -> Result<Self, PageError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(title, DEFAULT_TEMPLATE, containers)
    }

    pub fn from_settings(settings: &PageSettings) -> Result<Self, PageError> {
        match &settings.template {
            Some(path) => {
                let source = std::fs::read_to_string(path).map_err(|source| PageError::Io {
                    path: path.clone(),
                    source,
                })?;
                Self::new(settings.title.clone(), &source, settings.containers.iter().cloned())
            }
            None => Self::with_default_template(settings.title.clone(), settings.containers.iter().cloned()),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current HTML of a container, if the page declares it
    pub fn container(&self, id: &str) -> Option<&str> {
        self.containers
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.html.as_str())
    }

    pub fn container_mut(&mut self, id: &str) -> Option<&mut String> {
        self.containers
            .iter_mut()
            .find(|c| c.id == id)
            .map(|c| &mut c.html)
    }

    pub fn container_ids(&self) -> impl Iterator<Item = &str> {
        self.containers.iter().map(|c| c.id.as_str())
    }

    pub fn render(&self) -> Result<String, PageError> {
        let mounts: BTreeMap<&str, &str> = self
            .containers
            .iter()
            .map(|c| (c.id.as_str(), c.html.as_str()))
            .collect();

        let mut context = Context::new();
        context.insert("title", &self.title);
        context.insert("containers", &self.containers);
        context.insert("mounts", &mounts);

        Ok(self.tera.render(PAGE_TEMPLATE, &context)?)
    }
}
