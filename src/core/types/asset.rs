use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::error::ContractError;
use crate::util::aliases::AssetResult;
use crate::util::constants::BANK_ASSET_DOC_TYPE;
use crate::util::traits::ResultExtensions;

use super::asset_readable::AssetReadable;
use super::asset_type::AssetType;
use super::currency::Currency;
use super::ledger_enum::LedgerEnum;

/// A financial instrument owned by a named party, as held by the contract between reading it
/// from and writing it to the world state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Asset {
    pub id: String,
    pub asset_type: AssetType,
    pub currency: Currency,
    pub value: u64,
    pub owner: String,
}
impl Asset {
    pub fn new<S1: Into<String>, S2: Into<String>>(
        id: S1,
        asset_type: AssetType,
        currency: Currency,
        value: u64,
        owner: S2,
    ) -> Self {
        Asset {
            id: id.into(),
            asset_type,
            currency,
            value,
            owner: owner.into(),
        }
    }

    /// Builds an asset from caller-provided enum names, validating the asset type before the
    /// currency.
    ///
    /// # Parameters
    ///
    /// * `id` The unique world state key of the asset.
    /// * `asset_type` The canonical name of an [AssetType](super::asset_type::AssetType).
    /// * `currency` The canonical name of a [Currency](super::currency::Currency).
    /// * `value` The non-negative value of the asset.
    /// * `owner` The party that owns the asset.
    pub fn from_names<S1: Into<String>, S2: Into<String>>(
        id: S1,
        asset_type: &str,
        currency: &str,
        value: u64,
        owner: S2,
    ) -> AssetResult<Self> {
        Asset::new(
            id,
            AssetType::parse(asset_type)?,
            Currency::parse(currency)?,
            value,
            owner,
        )
        .to_ok()
    }

    /// Produces a copy of this asset that belongs to a different owner.  Every other field is
    /// left untouched.
    pub fn with_owner<S: Into<String>>(&self, owner: S) -> Self {
        Asset {
            owner: owner.into(),
            ..self.clone()
        }
    }

    pub fn to_readable(&self) -> AssetReadable {
        AssetReadable {
            id: self.id.clone(),
            asset_type: self.asset_type.render().to_string(),
            currency: self.currency.render().to_string(),
            value: self.value,
            owner: self.owner.clone(),
        }
    }

    pub fn to_document(&self) -> AssetDocument {
        AssetDocument {
            doc_type: BANK_ASSET_DOC_TYPE.to_string(),
            id: self.id.clone(),
            asset_type: self.asset_type.render().to_string(),
            currency: self.currency.render().to_string(),
            value: self.value,
            owner: self.owner.clone(),
        }
    }
}

/// The persisted shape of an [Asset](self::Asset).  Enum fields are always held as their
/// canonical names, never as integer codes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct AssetDocument {
    /// Distinguishes bank assets from any other entity in the world state.  Always
    /// [BANK_ASSET_DOC_TYPE](crate::util::constants::BANK_ASSET_DOC_TYPE) for documents written
    /// by this contract.
    pub doc_type: String,
    pub id: String,
    pub asset_type: String,
    pub currency: String,
    pub value: u64,
    pub owner: String,
}
impl AssetDocument {
    /// Runs both enum names through their parsers.  An unknown name fails with
    /// [InvalidEnum](crate::core::error::ContractError::InvalidEnum).
    pub fn into_asset(self) -> AssetResult<Asset> {
        Asset::from_names(
            self.id,
            &self.asset_type,
            &self.currency,
            self.value,
            self.owner,
        )
    }
}

/// Serializes an asset into the bytes stored in the world state.
///
/// # Parameters
///
/// * `asset` The asset to encode.
pub fn encode_asset(asset: &Asset) -> AssetResult<Vec<u8>> {
    serde_json_wasm::to_vec(&asset.to_document()).map_err(|e| {
        ContractError::serialization(format!("failed to encode asset [{}]: {}", asset.id, e))
    })
}

/// Deserializes world state bytes into an asset, validating both enum names along the way.
///
/// # Parameters
///
/// * `bytes` The raw document bytes.
pub fn decode_asset(bytes: &[u8]) -> AssetResult<Asset> {
    serde_json_wasm::from_slice::<AssetDocument>(bytes)
        .map_err(|e| ContractError::serialization(format!("failed to decode asset: {}", e)))?
        .into_asset()
}
