// Execution output attributes.  All should be prefixed with "asset_" to make them easy to
// discern when observed in the event stream

///////////////////////////////////
// Asset record output attributes //
///////////////////////////////////

/// Value = Asset ID (String)
pub const ASSET_ID_KEY: &str = "asset_id";
/// Value = Asset Type canonical name (String)
pub const ASSET_TYPE_KEY: &str = "asset_type";
/// Value = Currency canonical name (String)
pub const ASSET_CURRENCY_KEY: &str = "asset_currency";
/// Value = The stored numeric value of the asset (String)
pub const ASSET_VALUE_KEY: &str = "asset_value";
/// Value = The owner of the asset after the route completes (String)
pub const ASSET_OWNER_KEY: &str = "asset_owner";
/// Value = The owner of the asset before a transfer (String)
pub const ASSET_PREVIOUS_OWNER_KEY: &str = "asset_previous_owner";
/// Value = The amount of records written by a ledger bootstrap (String)
pub const ASSET_SEEDED_COUNT_KEY: &str = "asset_seeded_count";

//////////////////////////////
// Shared output attributes //
//////////////////////////////

/// Value = Event Type correlating to EvenType enum into String values (String)
pub const ASSET_EVENT_TYPE_KEY: &str = "asset_event_type";
/// Value = Any new value being changed that can be coerced to a string target. Dynamic to be used on various routes (String)
pub const NEW_VALUE_KEY: &str = "asset_new_value";

//////////////////////
// Global Constants //
//////////////////////

/// The doc_type tag attached to every persisted asset record.  Document queries filter on this
/// value to separate assets from any other entity sharing the world state namespace.
pub const BANK_ASSET_DOC_TYPE: &str = "bank_asset";
/// The storage namespace in which all world state documents are held.
pub const WORLD_STATE_NAMESPACE: &[u8] = b"world_state";
