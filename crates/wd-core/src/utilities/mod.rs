//! Utilities sub-module: data_parsers, data_formatters.

pub mod data_formatters;
pub mod data_parsers;
