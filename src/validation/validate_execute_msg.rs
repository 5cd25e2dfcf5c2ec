use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;

/// Ensures the asset id of an execute message is populated.  Owners are free-form and may be any
/// string.  Enum names are not checked here; they are parsed by the ledger itself so that an
/// unknown name always surfaces as an [InvalidEnum](crate::core::error::ContractError::InvalidEnum)
/// error.
pub fn validate_execute_msg(msg: &ExecuteMsg) -> AssetResult<()> {
    match msg {
        ExecuteMsg::InitLedger {} => Ok(()),
        ExecuteMsg::CreateAsset { id, .. } => validate_asset_id("ExecuteMsg::CreateAsset", id),
        ExecuteMsg::UpdateAsset { id, .. } => validate_asset_id("ExecuteMsg::UpdateAsset", id),
        ExecuteMsg::DeleteAsset { id } => validate_asset_id("ExecuteMsg::DeleteAsset", id),
        ExecuteMsg::TransferAsset { id, .. } => {
            validate_asset_id("ExecuteMsg::TransferAsset", id)
        }
    }
}

fn validate_asset_id(message_type: &str, id: &str) -> AssetResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    if id.trim().is_empty() {
        invalid_fields.push("id: must not be blank".to_string());
    }
    gather_invalid_fields(message_type, invalid_fields)
}

fn gather_invalid_fields(message_type: &str, invalid_fields: Vec<String>) -> AssetResult<()> {
    if !invalid_fields.is_empty() {
        ContractError::InvalidMessageFields {
            message_type: message_type.to_string(),
            invalid_fields,
        }
        .to_err()
    } else {
        Ok(())
    }
}
