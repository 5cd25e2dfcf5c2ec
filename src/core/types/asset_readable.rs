use std::fmt::{Display, Formatter};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::aliases::AssetResult;

use super::asset::Asset;

/// The externally facing view of an [Asset](super::asset::Asset).  Enum fields are rendered as
/// their canonical names and the doc_type tag is omitted.  This value is derived from a stored
/// asset and is never persisted itself.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct AssetReadable {
    pub id: String,
    pub asset_type: String,
    pub currency: String,
    pub value: u64,
    pub owner: String,
}
impl AssetReadable {
    /// Re-parses the rendered enum names back into an [Asset](super::asset::Asset).
    pub fn to_asset(&self) -> AssetResult<Asset> {
        Asset::from_names(
            &self.id,
            &self.asset_type,
            &self.currency,
            self.value,
            &self.owner,
        )
    }
}
impl From<&Asset> for AssetReadable {
    fn from(asset: &Asset) -> Self {
        asset.to_readable()
    }
}
impl Display for AssetReadable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match serde_json_wasm::to_string(self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => write!(f, "{:?}", self),
        }
    }
}
