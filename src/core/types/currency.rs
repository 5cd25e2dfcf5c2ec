use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::core::error::ContractError;

use super::ledger_enum::{build_name_lookup, LedgerEnum};

static CURRENCY_BY_NAME: Lazy<HashMap<&'static str, Currency>> =
    Lazy::new(|| build_name_lookup(Currency::ALL));

/// The currency in which an asset's value is denominated.  No conversion between currencies is
/// ever performed by the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Currency {
    Ngn = 1,
    Inr = 2,
    Usd = 3,
    Eur = 4,
}
impl LedgerEnum for Currency {
    const ENUM_TYPE: &'static str = "Currency";
    const FIELD_NAME: &'static str = "currency";
    const ALL: &'static [Self] = &[Self::Ngn, Self::Inr, Self::Usd, Self::Eur];

    fn code(self) -> u8 {
        self as u8
    }

    fn render(self) -> &'static str {
        match self {
            Self::Ngn => "NGN",
            Self::Inr => "INR",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }

    fn name_lookup() -> &'static HashMap<&'static str, Self> {
        &CURRENCY_BY_NAME
    }
}
impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
impl FromStr for Currency {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
