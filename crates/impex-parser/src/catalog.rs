use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::CatalogError;
use crate::model::{DelimiterChoice, LineItemOptions, LookupOption, OptionLists, ParseOptions};
use crate::tables::TokenTables;

/// Option lists and token tables the host application hands to the parsers.
///
/// ```toml
/// [lookups]
/// suppliers = [{ id = "sup-1", name = "Acme Exports" }]
/// currencies = [{ id = "cur-usd", name = "USD" }]
///
/// [tokens]
/// vessel_joins = [["HMM", "OCE"], ["MSC", "ANNA"]]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub lookups: OptionLists,
    pub tokens: TokenTables,
    pub items: Vec<LookupOption>,
}

impl Catalog {
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads a catalog file; `.json` files are JSON, anything else is TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let catalog = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        debug!(path = %path.display(), "loaded option catalog");
        Ok(catalog)
    }

    pub fn parse_options(&self, delimiter: DelimiterChoice, skip_header: bool) -> ParseOptions {
        ParseOptions {
            delimiter,
            skip_header,
            lookups: self.lookups.clone(),
            tokens: self.tokens.clone(),
        }
    }

    pub fn line_item_options(
        &self,
        delimiter: DelimiterChoice,
        skip_header: bool,
    ) -> LineItemOptions {
        LineItemOptions {
            delimiter,
            skip_header,
            items: self.items.clone(),
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for (list, options) in self.lookups.named_lists() {
            ensure_unique_ids(list, options)?;
        }
        ensure_unique_ids("items", &self.items)
    }
}

fn ensure_unique_ids(list: &'static str, options: &[LookupOption]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for option in options {
        if !seen.insert(option.id.as_str()) {
            return Err(CatalogError::DuplicateOptionId {
                list,
                id: option.id.clone(),
            });
        }
    }
    Ok(())
}
