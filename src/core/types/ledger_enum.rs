use std::collections::HashMap;
use std::hash::Hash;

use crate::core::error::ContractError;
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;

/// A closed set of values that is stored on the ledger by canonical name and handled internally
/// as a small positive integer code.
///
/// Implementors provide the name of each variant through [render](self::LedgerEnum::render) and
/// a process-wide name table via [name_lookup](self::LedgerEnum::name_lookup), which should be
/// built once with [build_name_lookup](self::build_name_lookup) and never mutated afterward.
pub trait LedgerEnum: Copy + Eq + Hash + Sized + 'static {
    /// The type name used when reporting a failed parse, ex: Currency.
    const ENUM_TYPE: &'static str;
    /// The name of the asset record field this enum populates, ex: currency.
    const FIELD_NAME: &'static str;
    /// Every member of the enum, in ascending code order.
    const ALL: &'static [Self];

    /// The integer code for this member.  Codes begin at 1; zero is never a valid code.
    fn code(self) -> u8;

    /// The canonical, case-sensitive name of this member.
    fn render(self) -> &'static str;

    /// The immutable name-to-member table for this enum.
    fn name_lookup() -> &'static HashMap<&'static str, Self>;

    /// Converts a canonical name into its enum member.  Matching is exact and case-sensitive.
    ///
    /// # Parameters
    ///
    /// * `name` The canonical name to resolve.
    fn parse<S: AsRef<str>>(name: S) -> AssetResult<Self> {
        let name = name.as_ref();
        match Self::name_lookup().get(name) {
            Some(member) => member.to_owned().to_ok(),
            None => ContractError::InvalidEnum {
                field: Self::FIELD_NAME.to_string(),
                enum_type: Self::ENUM_TYPE.to_string(),
                value: name.to_string(),
            }
            .to_err(),
        }
    }

    /// Resolves an integer code into its enum member, if the code belongs to the closed set.
    ///
    /// # Parameters
    ///
    /// * `code` The integer code to resolve.
    fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.code() == code)
    }
}

/// Builds the name table for a [LedgerEnum](self::LedgerEnum) from its full member list.
///
/// # Parameters
///
/// * `members` Every member of the enum.
pub fn build_name_lookup<T: LedgerEnum>(members: &[T]) -> HashMap<&'static str, T> {
    members
        .iter()
        .map(|member| (member.render(), *member))
        .collect()
}
