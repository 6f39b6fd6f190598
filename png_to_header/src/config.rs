/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::fmt;
use std::path::PathBuf;

use crate::error::ConvertError;

/// Base name for the emitted `<name>_width`, `<name>_height` and `<name>_data`.
///
/// Always a valid C identifier: an ASCII letter or `_` followed by ASCII
/// letters, digits or `_`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolName(String);

impl SymbolName {
    pub fn new(name: impl Into<String>) -> Result<Self, ConvertError> {
        let name = name.into();
        let mut chars = name.chars();
        let valid = match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        };

        if valid {
            Ok(Self(name))
        } else {
            Err(ConvertError::InvalidSymbol(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Include guard macro, e.g. `ICON_H` for `icon`.
    pub fn guard(&self) -> String {
        format!("{}_H", self.0.to_ascii_uppercase())
    }
}

impl fmt::Display for SymbolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything a single conversion needs.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub symbol: SymbolName,
}

impl ConvertConfig {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        symbol: impl Into<String>,
    ) -> Result<Self, ConvertError> {
        Ok(Self {
            input: input.into(),
            output: output.into(),
            symbol: SymbolName::new(symbol)?,
        })
    }
}
