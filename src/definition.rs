//! Schema definition types accepted by the input contract's bind step.
//!
//! A consuming framework describes its expected arguments and options with
//! a [`Definition`]. The pass-through facade accepts these during `bind`
//! and deliberately ignores them; the types exist so the contract has a
//! real payload to carry. Definitions are not validated here.

use crate::value::OptionValue;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("failed to parse definition JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Declared shape of a positional, named argument.
#[derive(Debug, Clone, Deserialize)]
pub struct ArgumentSpec {
    /// The name of the argument
    pub name: String,
    /// Whether this argument is required
    #[serde(default)]
    pub required: bool,
    /// Default value if not provided
    pub default: Option<String>,
    /// Help text for this argument
    pub help: Option<String>,
}

/// Declared shape of a named, non-positional option.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionSpec {
    /// The name of the option
    pub name: String,
    /// Short option character (e.g., 'v' for -v)
    pub short: Option<char>,
    /// Whether the option carries a value or is a bare flag
    #[serde(default)]
    pub takes_value: bool,
    /// Default value if not provided
    pub default: Option<OptionValue>,
    /// Help text for this option
    pub help: Option<String>,
}

/// A complete input schema as a framework would declare it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Definition {
    /// Argument declarations, in positional order
    #[serde(default)]
    pub arguments: Vec<ArgumentSpec>,
    /// Option declarations
    #[serde(default)]
    pub options: Vec<OptionSpec>,
}

impl Definition {
    /// Parse a JSON string into a Definition.
    pub fn from_json(json: &str) -> Result<Definition, DefinitionError> {
        let definition: Definition = serde_json::from_str(json)?;
        Ok(definition)
    }
}
