//! Data loading functionality.
//!
//! This module provides the [`DataLoader`] type for loading the play catalog
//! and invoice collection from JSON or YAML files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BillingError, BillingResult};
use crate::models::{Invoice, PlayCatalog};

/// Extensions tried, in order, when looking up a data file in a directory.
const DATA_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Loads and provides access to billing input data.
///
/// # Directory Structure
///
/// The data directory should have the following structure:
/// ```text
/// data/
/// ├── plays.json      # Play catalog keyed by play ID (or plays.yaml)
/// └── invoices.json   # List of invoices (or invoices.yaml)
/// ```
///
/// # Example
///
/// ```no_run
/// use theater_billing::config::DataLoader;
///
/// let loader = DataLoader::load("./data").unwrap();
/// for invoice in loader.invoices() {
///     println!("{}", theater_billing::statement(invoice, loader.plays()).unwrap());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DataLoader {
    plays: PlayCatalog,
    invoices: Vec<Invoice>,
}

impl DataLoader {
    /// Loads the play catalog and invoices from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `DataLoader` on success, or an error if:
    /// - Either file is missing
    /// - Either file contains invalid JSON/YAML
    /// - Any required field is missing or has an invalid value
    pub fn load<P: AsRef<Path>>(path: P) -> BillingResult<Self> {
        let path = path.as_ref();

        let plays = Self::load_plays(Self::find_data_file(path, "plays"))?;
        let invoices = Self::load_invoices(Self::find_data_file(path, "invoices"))?;

        debug!(
            path = %path.display(),
            plays = plays.len(),
            invoices = invoices.len(),
            "Loaded billing data"
        );

        Ok(Self { plays, invoices })
    }

    /// Loads a play catalog from a single file.
    pub fn load_plays<P: AsRef<Path>>(path: P) -> BillingResult<PlayCatalog> {
        Self::load_document(path.as_ref())
    }

    /// Loads an invoice list from a single file.
    pub fn load_invoices<P: AsRef<Path>>(path: P) -> BillingResult<Vec<Invoice>> {
        Self::load_document(path.as_ref())
    }

    /// Returns the loaded play catalog.
    pub fn plays(&self) -> &PlayCatalog {
        &self.plays
    }

    /// Returns the loaded invoices, in file order.
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Picks the first existing `<stem>.<ext>` file, defaulting to JSON.
    fn find_data_file(dir: &Path, stem: &str) -> PathBuf {
        DATA_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{stem}.{ext}")))
            .find(|candidate| candidate.is_file())
            .unwrap_or_else(|| dir.join(format!("{stem}.json")))
    }

    /// Loads and parses a JSON or YAML file, chosen by extension.
    fn load_document<T: serde::de::DeserializeOwned>(path: &Path) -> BillingResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| BillingError::DataNotFound {
            path: path_str.clone(),
        })?;

        let is_yaml = path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml");

        if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| BillingError::DataParseError {
                path: path_str,
                message: e.to_string(),
            })
        } else {
            serde_json::from_str(&content).map_err(|e| BillingError::DataParseError {
                path: path_str,
                message: e.to_string(),
            })
        }
    }
}
