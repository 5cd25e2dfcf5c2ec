/// This address should be used as the sender of every default message
pub const DEFAULT_SENDER_ADDRESS: &str = "tp1dv7562fvlvf74904t222ze362m036ugtmg45ll";
/// This is the default value that test_instantiate uses for the ledger name
pub const DEFAULT_LEDGER_NAME: &str = "bank-ledger";
/// The id of the default asset.  Matches the first seed asset so that tests against a seeded
/// ledger can rely on the same values
pub const DEFAULT_ASSET_ID: &str = "asset-1";
pub const DEFAULT_ASSET_TYPE: &str = "CASH";
pub const DEFAULT_CURRENCY: &str = "NGN";
pub const DEFAULT_ASSET_VALUE: u64 = 1000000;
pub const DEFAULT_OWNER: &str = "Ecobank Nigeria";
