//! Contains the functionality used to ensure that incoming messages are well formed before any
//! route executes.

pub mod validate_execute_msg;
pub mod validate_init_msg;
