//! File parsers for input documents and translation tables.

pub mod json;
