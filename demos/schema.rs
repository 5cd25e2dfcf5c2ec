use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use bank_asset_ledger_smart_contract::core::msg::{ExecuteMsg, InitMsg, MigrateMsg, QueryMsg};
use bank_asset_ledger_smart_contract::core::state::State;
use bank_asset_ledger_smart_contract::core::types::asset::AssetDocument;
use bank_asset_ledger_smart_contract::core::types::asset_readable::AssetReadable;
use bank_asset_ledger_smart_contract::core::types::document_selector::DocumentSelector;

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(InitMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(MigrateMsg), &out_dir);
    export_schema(&schema_for!(State), &out_dir);
    export_schema(&schema_for!(AssetReadable), &out_dir);
    export_schema(&schema_for!(AssetDocument), &out_dir);
    export_schema(&schema_for!(DocumentSelector), &out_dir);
}
