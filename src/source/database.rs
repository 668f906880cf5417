//! Database metadata from the client's export.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::SourceError;

/// The content database's raw property schema (`database.json`).
///
/// Properties keep the client's wire shape as JSON values; only the select
/// property holding the collection options is interpreted here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Database {
    #[serde(default)]
    pub properties_raw: Map<String, Value>,
}

impl Database {
    /// Collection names from the select options of `property`, in schema
    /// order, minus the reserved page collection.
    ///
    /// A missing property, or one that is not a select, means the export
    /// itself is broken and errors out. Options without a name are skipped.
    pub fn collection_names(
        &self,
        property: &str,
        page_collection: &str,
    ) -> Result<Vec<String>, SourceError> {
        let options = self
            .properties_raw
            .get(property)
            .and_then(|prop| prop.get("select"))
            .and_then(|select| select.get("options"))
            .and_then(Value::as_array)
            .ok_or_else(|| SourceError::MissingProperty(property.to_string()))?;

        Ok(options
            .iter()
            .filter_map(|option| option.get("name").and_then(Value::as_str))
            .filter(|name| *name != page_collection)
            .map(str::to_string)
            .collect())
    }
}
