//! Contains the functionality used in the [contract file](crate::contract) to perform a contract query.

pub mod asset_exists;
pub mod get_all_assets;
pub mod query_state;
pub mod query_version;
pub mod read_asset;
