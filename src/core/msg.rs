use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct InitMsg {
    /// A human readable name for the ledger, recorded in the contract state.
    pub ledger_name: String,
    /// When true, the seed assets are written to the world state during instantiation.
    pub init_ledger: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    InitLedger {},
    CreateAsset {
        id: String,
        asset_type: String,
        currency: String,
        value: u64,
        owner: String,
    },
    UpdateAsset {
        id: String,
        asset_type: String,
        currency: String,
        value: u64,
        owner: String,
    },
    DeleteAsset {
        id: String,
    },
    TransferAsset {
        id: String,
        new_owner: String,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    ReadAsset { id: String },
    AssetExists { id: String },
    GetAllAssets {},
    QueryState {},
    QueryVersion {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MigrateMsg {
    ContractUpgrade {},
}
