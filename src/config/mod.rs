use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod validator;
pub mod watcher;

use crate::application::MissingTargetPolicy;
use crate::cli::Cli;
use crate::domain::presets::Preset;
use crate::domain::{FieldDescriptor, FieldSchema};

/// Directory, relative to the config root, holding one field per file
pub const FIELDS_DIR: &str = "config/fields";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Built-in schema used as the base of `fields`
    #[serde(default)]
    pub preset: Option<Preset>,
    pub server: ServerSettings,
    #[serde(default)]
    pub page: PageSettings,
    /// Resolved field list. After loading this holds the preset fields,
    /// inline fields and directory fields merged by name.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PageSettings {
    #[serde(default = "default_title")]
    pub title: String,
    /// Tera template for the page; the built-in layout is used when absent
    #[serde(default)]
    pub template: Option<PathBuf>,
    /// Container ids the page declares, in layout order
    #[serde(default = "default_containers")]
    pub containers: Vec<String>,
    /// Container that receives the rendered table
    #[serde(default = "default_mount_target")]
    pub mount_target: String,
    #[serde(default)]
    pub on_missing_target: MissingTargetPolicy,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            template: None,
            containers: default_containers(),
            mount_target: default_mount_target(),
            on_missing_target: MissingTargetPolicy::default(),
        }
    }
}

fn default_title() -> String {
    "Form".to_string()
}

fn default_containers() -> Vec<String> {
    vec![default_mount_target()]
}

fn default_mount_target() -> String {
    "form".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_root(".")
    }

    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let config_path = &cli.config;
        let root = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let s = Config::builder()
            .add_source(File::from(config_path.clone()).required(false))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.resolve_fields(root)?;
        settings.validate()?;

        Ok(settings)
    }

    pub fn from_root(root: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let root = root.as_ref();
        let s = Config::builder()
            .add_source(File::from(root.join("formtable")).required(false))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;

        settings.resolve_fields(root)?;
        settings.validate()?;

        Ok(settings)
    }

    /// The field schema the renderer consumes
    pub fn schema(&self) -> FieldSchema {
        FieldSchema::new(self.fields.clone())
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }

    /// Build the final field list: preset, then inline fields, then fields
    /// from `config/fields`, later entries replacing earlier ones by name.
    fn resolve_fields(&mut self, root: &Path) -> Result<(), anyhow::Error> {
        let inline = std::mem::take(&mut self.fields);
        let from_dir = load_fields_from_dir(&root.join(FIELDS_DIR))?;

        let mut fields = match self.preset {
            Some(preset) => {
                tracing::info!("Using built-in '{:?}' preset as base schema", preset);
                preset.schema().fields().to_vec()
            }
            None => Vec::new(),
        };
        merge_vec_by_key(&mut fields, inline, |f| f.name.clone());
        merge_vec_by_key(&mut fields, from_dir, |f| f.name.clone());

        self.fields = fields;
        Ok(())
    }
}

/// Merge two vectors by a key function.
/// The first item from `other` with a key already in `base` overrides it in
/// place; every other item is appended, so duplicates within `other` survive
/// for validation to report.
fn merge_vec_by_key<T, K, F>(base: &mut Vec<T>, other: Vec<T>, key_fn: F)
where
    K: Eq + std::hash::Hash,
    F: Fn(&T) -> K,
{
    use std::collections::{HashMap, HashSet};

    let mut replaced = HashSet::new();
    let mut key_to_index: HashMap<K, usize> = HashMap::new();
    for (i, item) in base.iter().enumerate() {
        key_to_index.insert(key_fn(item), i);
    }

    for item in other {
        let key = key_fn(&item);
        match key_to_index.get(&key) {
            Some(&idx) if replaced.insert(idx) => base[idx] = item,
            _ => base.push(item),
        }
    }
}

/// Load one field descriptor per JSON/YAML/TOML file, in file-name order
pub fn load_fields_from_dir(path: &Path) -> Result<Vec<FieldDescriptor>, anyhow::Error> {
    let mut fields = Vec::new();
    let pattern = format!("{}/*", path.display());

    // glob yields entries in alphabetical order
    for entry in glob::glob(&pattern)? {
        match entry {
            Ok(path) => {
                if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                    if matches!(ext, "json" | "yaml" | "yml" | "toml") {
                        let content = std::fs::read_to_string(&path)?;
                        let field: FieldDescriptor = match ext {
                            "json" => serde_json::from_str(&content)?,
                            "toml" => toml::from_str(&content)?,
                            _ => serde_yaml::from_str(&content)?,
                        };
                        tracing::debug!("Loaded field '{}' from {}", field.name, path.display());
                        fields.push(field);
                    }
                }
            }
            Err(e) => tracing::warn!("Failed to read glob entry: {}", e),
        }
    }

    Ok(fields)
}
