use crate::core::types::asset_readable::AssetReadable;

use super::constants::{
    ASSET_CURRENCY_KEY, ASSET_EVENT_TYPE_KEY, ASSET_ID_KEY, ASSET_OWNER_KEY,
    ASSET_PREVIOUS_OWNER_KEY, ASSET_SEEDED_COUNT_KEY, ASSET_TYPE_KEY, ASSET_VALUE_KEY,
    NEW_VALUE_KEY,
};

pub enum EventType {
    InstantiateContract,
    MigrateContract,
    InitLedger,
    CreateAsset,
    UpdateAsset,
    DeleteAsset,
    TransferAsset,
}
#[allow(clippy::from_over_into)]
impl Into<String> for EventType {
    fn into(self) -> String {
        match self {
            EventType::InstantiateContract => "instantiate_contract",
            EventType::MigrateContract => "migrate_contract",
            EventType::InitLedger => "init_ledger",
            EventType::CreateAsset => "create_asset",
            EventType::UpdateAsset => "update_asset",
            EventType::DeleteAsset => "delete_asset",
            EventType::TransferAsset => "transfer_asset",
        }
        .into()
    }
}
impl EventType {
    pub fn event_name(self) -> String {
        self.into()
    }
}

pub struct EventAttributes {
    attributes: Vec<(String, String)>,
}
impl EventAttributes {
    pub fn new(event_type: EventType) -> Self {
        EventAttributes {
            attributes: vec![(ASSET_EVENT_TYPE_KEY.into(), event_type.into())],
        }
    }

    /// Emits every field of the readable record alongside the event type.
    pub fn for_asset_event(event_type: EventType, asset: &AssetReadable) -> Self {
        Self::new(event_type)
            .set_id(&asset.id)
            .set_asset_type(&asset.asset_type)
            .set_currency(&asset.currency)
            .set_value(asset.value)
            .set_owner(&asset.owner)
    }

    pub fn set_id<T: Into<String>>(mut self, id: T) -> Self {
        self.attributes.push((ASSET_ID_KEY.into(), id.into()));
        self
    }

    pub fn set_asset_type<T: Into<String>>(mut self, asset_type: T) -> Self {
        self.attributes
            .push((ASSET_TYPE_KEY.into(), asset_type.into()));
        self
    }

    pub fn set_currency<T: Into<String>>(mut self, currency: T) -> Self {
        self.attributes
            .push((ASSET_CURRENCY_KEY.into(), currency.into()));
        self
    }

    pub fn set_value<T: ToString>(mut self, value: T) -> Self {
        self.attributes
            .push((ASSET_VALUE_KEY.into(), value.to_string()));
        self
    }

    pub fn set_owner<T: Into<String>>(mut self, owner: T) -> Self {
        self.attributes.push((ASSET_OWNER_KEY.into(), owner.into()));
        self
    }

    pub fn set_previous_owner<T: Into<String>>(mut self, previous_owner: T) -> Self {
        self.attributes
            .push((ASSET_PREVIOUS_OWNER_KEY.into(), previous_owner.into()));
        self
    }

    pub fn set_seeded_count(mut self, seeded_count: usize) -> Self {
        self.attributes
            .push((ASSET_SEEDED_COUNT_KEY.into(), seeded_count.to_string()));
        self
    }

    pub fn set_new_value<T: ToString>(mut self, new_value: T) -> Self {
        self.attributes
            .push((NEW_VALUE_KEY.into(), new_value.to_string()));
        self
    }
}

impl IntoIterator for EventAttributes {
    type Item = (String, String);

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}
