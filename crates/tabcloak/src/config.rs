use ::config::ConfigError;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    pub root: String,
}

/// The privacy role a column plays during evaluation.
///
/// Identifier columns are rewritten by the pipeline, quasi-identifier columns
/// define the groups the metrics run over, sensitive columns are what the
/// diversity and closeness metrics protect.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum ColumnConfiguration {
    Identifier { name: String },
    QuasiIdentifier { name: String },
    Sensitive { name: String },
}

#[derive(Debug, Deserialize)]
pub struct ApplicationConfig {
    pub storage: StorageConfig,
    pub source_file: String,
    pub output_file: String,
    pub record_count: usize,
    pub seed: Option<u64>,
    pub k: usize,
    pub l: usize,
    pub t: f64,
    pub columns: Vec<ColumnConfiguration>,
}

impl ApplicationConfig {
    pub fn identifier_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter_map(|column| match column {
                ColumnConfiguration::Identifier { name } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn quasi_identifier_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter_map(|column| match column {
                ColumnConfiguration::QuasiIdentifier { name } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn sensitive_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter_map(|column| match column {
                ColumnConfiguration::Sensitive { name } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }
}

pub fn load_config(path: &Path) -> Result<ApplicationConfig, ConfigError> {
    let mut s = config::Config::default();
    s.merge(config::File::from(path))?;
    s.try_into()
}
