use cosmwasm_std::StdError;
use thiserror::Error;

use super::types::asset_readable::AssetReadable;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Semver parsing error: {0}")]
    SemVer(#[from] semver::Error),

    #[error("Invalid {enum_type} provided for field [{field}]: [{value}] is not a valid {enum_type}")]
    InvalidEnum {
        field: String,
        enum_type: String,
        value: String,
    },

    #[error("the asset {id} does not exist")]
    AssetNotFound { id: String },

    #[error("the asset {id} already exists: {existing}")]
    AssetAlreadyExists { id: String, existing: AssetReadable },

    #[error("World state failure: {explanation}")]
    PersistenceError { explanation: String },

    #[error("Serialization failure: {explanation}")]
    SerializationError { explanation: String },

    #[error("Current contract name [{current_contract}] does not match provided migration name [{migration_contract}]")]
    InvalidContractName {
        current_contract: String,
        migration_contract: String,
    },

    #[error("Current contract version [{current_version}] is higher than provided migration version [{migration_version}]")]
    InvalidContractVersion {
        current_version: String,
        migration_version: String,
    },

    #[error("{0}")]
    InvalidFunds(String),

    #[error("Message of type [{message_type}] was invalid. Invalid fields: {invalid_fields:?}")]
    InvalidMessageFields {
        message_type: String,
        invalid_fields: Vec<String>,
    },

    #[error("Invalid message type provided. Expected message type {expected_message_type}")]
    InvalidMessageType { expected_message_type: String },
}
impl ContractError {
    pub fn persistence<S: Into<String>>(explanation: S) -> ContractError {
        ContractError::PersistenceError {
            explanation: explanation.into(),
        }
    }

    pub fn serialization<S: Into<String>>(explanation: S) -> ContractError {
        ContractError::SerializationError {
            explanation: explanation.into(),
        }
    }

    pub fn not_found<S: Into<String>>(id: S) -> ContractError {
        ContractError::AssetNotFound { id: id.into() }
    }

    /// Stored enum names are written by this contract, so a failure to parse one indicates a
    /// corrupted document rather than bad caller input.
    pub fn into_store_corruption(self) -> ContractError {
        match self {
            ContractError::InvalidEnum {
                field,
                enum_type,
                value,
            } => ContractError::persistence(format!(
                "stored field [{}] holds [{}], which is not a valid {}",
                field, value, enum_type,
            )),
            other => other,
        }
    }
}
