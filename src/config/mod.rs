//! Input data loading for the billing engine.
//!
//! This module loads the play catalog and invoice collection from JSON or
//! YAML files. The statement core itself never touches the filesystem.
//!
//! # Example
//!
//! ```no_run
//! use theater_billing::config::DataLoader;
//!
//! let loader = DataLoader::load("./data").unwrap();
//! println!("Loaded {} invoices", loader.invoices().len());
//! ```

mod loader;

pub use loader::DataLoader;
