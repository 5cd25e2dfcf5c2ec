//! Contains all structs used to drive core functionality throughout the contract.

/// Defines the persisted asset record and its explicit encode/decode functions.
pub mod asset;
/// Defines the externally facing view of an asset, with enum fields rendered as names.
pub mod asset_readable;
pub mod asset_type;
pub mod currency;
/// Defines the equality filters used to run document queries against the world state.
pub mod document_selector;
/// Defines the shared parse/render contract for enums that are stored by canonical name.
pub mod ledger_enum;
