//! sitetools - build-time checks for a static personal site
//!
//! Two offline tools, exposed as subcommands of one binary and usable as a
//! library:
//!
//! - `sitetools check`: audit the JSON translation table against the DOM
//!   ids referenced in the site's HTML and JS
//! - `sitetools index`: generate the JSON index of the PDF notes tree
//!
//! ## Module Structure
//!
//! - `audit`: translation table loading, id discovery and reconciliation
//! - `notes`: notes tree building and serialization
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `utils`: Shared utility functions

pub mod audit;
pub mod cli;
pub mod config;
pub mod notes;
pub mod utils;
