use crate::core::error::ContractError;
use crate::core::msg::InitMsg;
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;

pub fn validate_init_msg(msg: &InitMsg) -> AssetResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    if msg.ledger_name.trim().is_empty() {
        invalid_fields.push("ledger_name: must not be blank".to_string());
    }
    if !invalid_fields.is_empty() {
        ContractError::InvalidMessageFields {
            message_type: "InitMsg".to_string(),
            invalid_fields,
        }
        .to_err()
    } else {
        Ok(())
    }
}
