//! Complex structs used to perform ledger operations in a centralized location.

/// Defines the traits that describe every operation the ledger performs on asset records.
pub mod asset_ledger;
/// Implements the ledger operations against any [WorldState](self::world_state::WorldState).
pub mod asset_ledger_service;
/// Binds the world state traits to the contract's cosmwasm storage.
pub mod storage_world_state;
/// Defines the narrow key-value and document query interface the ledger persists through.
pub mod world_state;
