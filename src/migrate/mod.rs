//! Contains the functionality used in the [contract file](crate::contract) to perform a contract migration.

pub mod migrate_contract;
/// Stores and reads the contract name and version used to validate migrations.
pub mod version_info;
