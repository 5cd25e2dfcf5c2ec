use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::error::ContractError;
use crate::util::aliases::AssetResult;
use crate::util::constants::BANK_ASSET_DOC_TYPE;
use crate::util::traits::ResultExtensions;

/// A document query expressed as equality filters over a stored document's fields.  Only the
/// doc_type and id fields are ever filtered on.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct DocumentSelector {
    pub doc_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}
impl DocumentSelector {
    /// Selects every document carrying the given doc_type tag.
    pub fn for_doc_type<S: Into<String>>(doc_type: S) -> Self {
        DocumentSelector {
            doc_type: doc_type.into(),
            id: None,
        }
    }

    /// Selects every bank asset document.
    pub fn all_bank_assets() -> Self {
        Self::for_doc_type(BANK_ASSET_DOC_TYPE)
    }

    /// Selects the bank asset document with the given id.
    pub fn bank_asset_by_id<S: Into<String>>(id: S) -> Self {
        DocumentSelector {
            id: Some(id.into()),
            ..Self::all_bank_assets()
        }
    }

    /// Renders the selector as a document query string, ex:
    /// `{"selector":{"doc_type":"bank_asset","id":"asset-1"}}`.
    pub fn to_query_string(&self) -> AssetResult<String> {
        serde_json_wasm::to_string(&SelectorQuery { selector: self }).map_err(|e| {
            ContractError::serialization(format!("failed to render document selector: {}", e))
        })
    }

    /// Determines if the raw document bytes satisfy every filter in this selector.  Bytes that
    /// cannot be read as a document never match.
    ///
    /// # Parameters
    ///
    /// * `document` The raw bytes of a stored document.
    pub fn matches(&self, document: &[u8]) -> bool {
        match serde_json_wasm::from_slice::<DocumentHeader>(document) {
            Ok(header) => {
                header.doc_type.as_deref() == Some(self.doc_type.as_str())
                    && match &self.id {
                        Some(id) => header.id.as_deref() == Some(id.as_str()),
                        None => true,
                    }
            }
            Err(_) => false,
        }
    }

    /// Parses a document query string back into a selector.
    ///
    /// # Parameters
    ///
    /// * `query` A query of the form `{"selector":{...}}`.
    pub fn from_query_string(query: &str) -> AssetResult<Self> {
        serde_json_wasm::from_str::<OwnedSelectorQuery>(query)
            .map_err(|e| {
                ContractError::serialization(format!("failed to parse document selector: {}", e))
            })?
            .selector
            .to_ok()
    }
}

#[derive(Serialize)]
struct SelectorQuery<'a> {
    selector: &'a DocumentSelector,
}

#[derive(Deserialize)]
struct OwnedSelectorQuery {
    selector: DocumentSelector,
}

/// The subset of document fields that selectors filter on.
#[derive(Deserialize)]
struct DocumentHeader {
    doc_type: Option<String>,
    id: Option<String>,
}
