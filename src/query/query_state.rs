use cosmwasm_std::{to_binary, Binary};

use crate::core::state::load_state;
use crate::util::aliases::{AssetResult, DepsC};
use crate::util::traits::ResultExtensions;

/// A query that directly returns the contract's stored [State](crate::core::state::State) value.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
pub fn query_state(deps: &DepsC) -> AssetResult<Binary> {
    to_binary(&load_state(deps.storage)?)?.to_ok()
}
