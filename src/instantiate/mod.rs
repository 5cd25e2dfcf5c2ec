//! Contains the functionality used in the [contract file](crate::contract) to perform a contract instantiation.

pub mod init_contract;
