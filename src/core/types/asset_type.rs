use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::core::error::ContractError;

use super::ledger_enum::{build_name_lookup, LedgerEnum};

static ASSET_TYPE_BY_NAME: Lazy<HashMap<&'static str, AssetType>> =
    Lazy::new(|| build_name_lookup(AssetType::ALL));

/// The balance sheet category of an asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AssetType {
    Cash = 1,
    CashEquivalent = 2,
    Deposit = 3,
    Investment = 4,
    Goodwill = 5,
    MarketableSecurity = 6,
    AccountsReceivable = 7,
    Inventory = 8,
    /// Property, plant and equipment.
    Ppe = 9,
    Vehicle = 10,
    Furniture = 11,
    Land = 12,
    Building = 13,
    Patent = 14,
}
impl LedgerEnum for AssetType {
    const ENUM_TYPE: &'static str = "AssetType";
    const FIELD_NAME: &'static str = "asset_type";
    const ALL: &'static [Self] = &[
        Self::Cash,
        Self::CashEquivalent,
        Self::Deposit,
        Self::Investment,
        Self::Goodwill,
        Self::MarketableSecurity,
        Self::AccountsReceivable,
        Self::Inventory,
        Self::Ppe,
        Self::Vehicle,
        Self::Furniture,
        Self::Land,
        Self::Building,
        Self::Patent,
    ];

    fn code(self) -> u8 {
        self as u8
    }

    fn render(self) -> &'static str {
        match self {
            Self::Cash => "CASH",
            Self::CashEquivalent => "CASH_EQUIVALENT",
            Self::Deposit => "DEPOSIT",
            Self::Investment => "INVESTMENT",
            Self::Goodwill => "GOODWILL",
            Self::MarketableSecurity => "MARKETABLE_SECURITY",
            Self::AccountsReceivable => "ACCOUNTS_RECEIVABLE",
            Self::Inventory => "INVENTORY",
            Self::Ppe => "PPE",
            Self::Vehicle => "VEHICLE",
            Self::Furniture => "FURNITURE",
            Self::Land => "LAND",
            Self::Building => "BUILDING",
            Self::Patent => "PATENT",
        }
    }

    fn name_lookup() -> &'static HashMap<&'static str, Self> {
        &ASSET_TYPE_BY_NAME
    }
}
impl Display for AssetType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
impl FromStr for AssetType {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
