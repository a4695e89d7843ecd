//! flatkey - flatten JSON records into localized key tables
//!
//! flatkey walks a nested JSON document, lists every leaf as a dotted key path
//! (`product.category[0].name`), translates each path segment through a
//! lookup table and writes a `key,key_chinese,example_value` CSV.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Flattening, path resolution, translation and report assembly
//! - `csv_writer`: CSV output

pub mod cli;
pub mod config;
pub mod core;
pub mod csv_writer;
