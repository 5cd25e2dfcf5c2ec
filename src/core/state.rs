use cosmwasm_std::Storage;
use cw_storage_plus::Item;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::msg::InitMsg;
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;

pub const STATE: Item<State> = Item::new("state");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct State {
    pub ledger_name: String,
    /// Flips to true once the seed assets have been written at least once.
    pub ledger_initialized: bool,
}
impl State {
    pub fn new(msg: &InitMsg) -> State {
        State {
            ledger_name: msg.ledger_name.clone(),
            ledger_initialized: false,
        }
    }
}

pub fn load_state(storage: &dyn Storage) -> AssetResult<State> {
    STATE.load(storage)?.to_ok()
}

pub fn save_state(storage: &mut dyn Storage, state: &State) -> AssetResult<()> {
    STATE.save(storage, state)?.to_ok()
}

/// Records that the ledger has been seeded.  A missing state value is left alone so that seeding
/// can run before instantiation finishes storing its state.
pub fn mark_ledger_initialized(storage: &mut dyn Storage) -> AssetResult<()> {
    if let Some(mut state) = STATE.may_load(storage)? {
        state.ledger_initialized = true;
        save_state(storage, &state)?;
    }
    Ok(())
}
