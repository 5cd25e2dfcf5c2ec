use crate::core::error::ContractError;
use crate::core::types::asset::{decode_asset, encode_asset, Asset};
use crate::core::types::asset_readable::AssetReadable;
use crate::core::types::asset_type::AssetType;
use crate::core::types::currency::Currency;
use crate::core::types::document_selector::DocumentSelector;
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;

use super::asset_ledger::{AssetLedger, AssetLedgerReader};
use super::world_state::{WorldState, WorldStateReader};

/// Runs every ledger operation against a single world state.  Each operation performs its
/// existence checks and its write against the same world state so that the host can observe the
/// full read/write set of the invocation.
pub struct AssetLedgerService<W> {
    world_state: W,
}
impl<W> AssetLedgerService<W> {
    pub fn new(world_state: W) -> Self {
        Self { world_state }
    }

    /// Relinquishes the held world state to the caller.
    pub fn into_world_state(self) -> W {
        self.world_state
    }
}
impl<W: WorldStateReader> AssetLedgerService<W> {
    /// Runs a document query and decodes every matching document.  The query cursor is dropped
    /// on every exit path, including a failure partway through the results.
    fn query_assets(&self, selector: &DocumentSelector) -> AssetResult<Vec<Asset>> {
        self.world_state
            .get_query_result(selector)
            .map_err(persistence_failure("failed to get query result"))?
            .map(|document| {
                document
                    .map_err(persistence_failure("failed to iterate query result"))
                    .and_then(|bytes| decode_asset(&bytes))
            })
            .collect()
    }

    fn read_stored_asset(&self, id: &str) -> AssetResult<Asset> {
        let mut assets = self.query_assets(&DocumentSelector::bank_asset_by_id(id))?;
        match assets.len() {
            0 => ContractError::not_found(id).to_err(),
            1 => assets.remove(0).to_ok(),
            count => ContractError::persistence(format!(
                "expected a single asset for id [{}], but found {}",
                id, count,
            ))
            .to_err(),
        }
    }
}
impl<W: WorldStateReader> AssetLedgerReader for AssetLedgerService<W> {
    fn asset_exists<S: AsRef<str>>(&self, id: S) -> AssetResult<bool> {
        self.world_state
            .get_state(id.as_ref())
            .map_err(persistence_failure("failed to read from world state"))?
            .is_some()
            .to_ok()
    }

    fn read_asset<S: AsRef<str>>(&self, id: S) -> AssetResult<AssetReadable> {
        self.read_stored_asset(id.as_ref())?.to_readable().to_ok()
    }

    fn get_all_assets(&self) -> AssetResult<Vec<AssetReadable>> {
        self.query_assets(&DocumentSelector::all_bank_assets())?
            .iter()
            .map(Asset::to_readable)
            .collect::<Vec<AssetReadable>>()
            .to_ok()
    }
}
impl<W: WorldState> AssetLedgerService<W> {
    /// Encodes the full asset and writes it in a single put, overwriting any existing value.
    fn write_asset(&mut self, asset: &Asset) -> AssetResult<()> {
        let bytes = encode_asset(asset)?;
        self.world_state
            .put_state(&asset.id, &bytes)
            .map_err(persistence_failure("failed to put in world state"))
    }
}
impl<W: WorldState> AssetLedger for AssetLedgerService<W> {
    fn init_ledger(&mut self) -> AssetResult<Vec<AssetReadable>> {
        let seed_assets = ledger_seed_assets();
        for asset in seed_assets.iter() {
            self.write_asset(asset)?;
        }
        seed_assets
            .iter()
            .map(Asset::to_readable)
            .collect::<Vec<AssetReadable>>()
            .to_ok()
    }

    fn create_asset<S1: AsRef<str>, S2: Into<String>>(
        &mut self,
        id: S1,
        asset_type: &str,
        currency: &str,
        value: u64,
        owner: S2,
    ) -> AssetResult<AssetReadable> {
        let id = id.as_ref();
        if self.asset_exists(id)? {
            // A taken key that does not read back as a bank asset means the world state disagrees
            // with itself
            let existing = self.read_asset(id).map_err(|e| match e {
                ContractError::AssetNotFound { .. } => ContractError::persistence(format!(
                    "key [{}] is taken, but holds no readable bank asset",
                    id,
                )),
                other => other,
            })?;
            return ContractError::AssetAlreadyExists {
                id: id.to_string(),
                existing,
            }
            .to_err();
        }
        let asset = Asset::from_names(id, asset_type, currency, value, owner)?;
        self.write_asset(&asset)?;
        asset.to_readable().to_ok()
    }

    fn update_asset<S1: AsRef<str>, S2: Into<String>>(
        &mut self,
        id: S1,
        asset_type: &str,
        currency: &str,
        value: u64,
        owner: S2,
    ) -> AssetResult<AssetReadable> {
        let id = id.as_ref();
        if !self.asset_exists(id)? {
            return ContractError::not_found(id).to_err();
        }
        let asset = Asset::from_names(id, asset_type, currency, value, owner)?;
        self.write_asset(&asset)?;
        asset.to_readable().to_ok()
    }

    fn delete_asset<S: AsRef<str>>(&mut self, id: S) -> AssetResult<AssetReadable> {
        let id = id.as_ref();
        if !self.asset_exists(id)? {
            return ContractError::not_found(id).to_err();
        }
        let asset = self.read_asset(id)?;
        self.world_state
            .delete_state(id)
            .map_err(persistence_failure("failed to delete from world state"))?;
        asset.to_ok()
    }

    fn transfer_asset<S1: AsRef<str>, S2: Into<String>>(
        &mut self,
        id: S1,
        new_owner: S2,
    ) -> AssetResult<AssetReadable> {
        self.transfer_asset_from_previous(id, new_owner)
            .map(|(_, transferred)| transferred)
    }
}
impl<W: WorldState> AssetLedgerService<W> {
    /// Performs a [transfer_asset](super::asset_ledger::AssetLedger::transfer_asset) and also
    /// returns the record as it stood before the owner changed, using a single read.
    ///
    /// # Parameters
    ///
    /// * `id` The unique identifier of the asset to transfer.
    /// * `new_owner` The party that owns the asset after the transfer.
    pub fn transfer_asset_from_previous<S1: AsRef<str>, S2: Into<String>>(
        &mut self,
        id: S1,
        new_owner: S2,
    ) -> AssetResult<(AssetReadable, AssetReadable)> {
        // Enum names read back from the world state were written by this contract, so a name
        // that no longer parses means the stored document is corrupt
        let previous = self
            .read_asset(id.as_ref())
            .map_err(ContractError::into_store_corruption)?;
        let asset = previous
            .to_asset()
            .map_err(ContractError::into_store_corruption)?
            .with_owner(new_owner);
        self.write_asset(&asset)?;
        (previous, asset.to_readable()).to_ok()
    }
}

/// The fixed set of assets written by [init_ledger](super::asset_ledger::AssetLedger::init_ledger).
pub fn ledger_seed_assets() -> Vec<Asset> {
    vec![
        Asset::new("asset-1", AssetType::Cash, Currency::Ngn, 1000000, "Ecobank Nigeria"),
        Asset::new("asset-2", AssetType::CashEquivalent, Currency::Ngn, 2000000, "Access Bank"),
        Asset::new("asset-3", AssetType::Deposit, Currency::Ngn, 3000000, "Zenith Bank"),
        Asset::new("asset-4", AssetType::Inventory, Currency::Ngn, 4000000, "First Bank of Nigeria"),
        Asset::new("asset-5", AssetType::Investment, Currency::Ngn, 5000000, "United Bank for Africa"),
        Asset::new("asset-6", AssetType::Patent, Currency::Ngn, 6000000, "Union Bank of Nigeria"),
        Asset::new("asset-7", AssetType::Land, Currency::Inr, 7000000, "State Bank of India"),
    ]
}

/// Ensures a failure raised by the world state surfaces as a
/// [PersistenceError](crate::core::error::ContractError::PersistenceError) that names the action
/// being attempted.
fn persistence_failure(action: &'static str) -> impl Fn(ContractError) -> ContractError {
    move |err| match err {
        ContractError::PersistenceError { explanation } => {
            ContractError::persistence(format!("{}: {}", action, explanation))
        }
        other => ContractError::persistence(format!("{}: {}", action, other)),
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::MockStorage;

    use crate::core::error::ContractError;
    use crate::core::types::asset_readable::AssetReadable;
    use crate::service::asset_ledger::{AssetLedger, AssetLedgerReader};
    use crate::service::storage_world_state::StorageWorldState;
    use crate::service::world_state::WorldStateReader;
    use crate::testutil::mock_world_state::MockWorldState;
    use crate::testutil::test_constants::{
        DEFAULT_ASSET_ID, DEFAULT_ASSET_TYPE, DEFAULT_ASSET_VALUE, DEFAULT_CURRENCY,
        DEFAULT_OWNER,
    };
    use crate::testutil::test_utilities::get_default_asset_readable;

    use super::{ledger_seed_assets, AssetLedgerService};

    fn create_default_asset<W: crate::service::world_state::WorldState>(
        service: &mut AssetLedgerService<W>,
    ) -> AssetReadable {
        service
            .create_asset(
                DEFAULT_ASSET_ID,
                DEFAULT_ASSET_TYPE,
                DEFAULT_CURRENCY,
                DEFAULT_ASSET_VALUE,
                DEFAULT_OWNER,
            )
            .expect("creating the default asset should succeed")
    }

    #[test]
    fn test_create_then_read_returns_identical_record() {
        let mut storage = MockStorage::new();
        let mut service = AssetLedgerService::new(StorageWorldState::new(&mut storage));
        let created = create_default_asset(&mut service);
        assert_eq!(
            AssetReadable {
                id: "asset-1".to_string(),
                asset_type: "CASH".to_string(),
                currency: "NGN".to_string(),
                value: 1000000,
                owner: "Ecobank Nigeria".to_string(),
            },
            created,
            "the created record should be returned with rendered enum names",
        );
        assert_eq!(
            created,
            service
                .read_asset(DEFAULT_ASSET_ID)
                .expect("the created asset should be readable"),
        );
        assert!(service
            .asset_exists(DEFAULT_ASSET_ID)
            .expect("exists should succeed"));
    }

    #[test]
    fn test_create_duplicate_returns_existing_record() {
        let mut storage = MockStorage::new();
        let mut service = AssetLedgerService::new(StorageWorldState::new(&mut storage));
        let created = create_default_asset(&mut service);
        let err = service
            .create_asset(DEFAULT_ASSET_ID, "LAND", "USD", 5, "Someone Else")
            .expect_err("a duplicate create should fail");
        match err {
            ContractError::AssetAlreadyExists { id, existing } => {
                assert_eq!(DEFAULT_ASSET_ID, id);
                assert_eq!(
                    created, existing,
                    "the pre-existing record should be surfaced unchanged",
                );
            }
            _ => panic!("unexpected error encountered: {:?}", err),
        };
        assert_eq!(
            created,
            service.read_asset(DEFAULT_ASSET_ID).unwrap(),
            "the stored record should not be modified by a duplicate create",
        );
    }

    #[test]
    fn test_create_rejects_invalid_enums_without_writing() {
        let mut service = AssetLedgerService::new(MockWorldState::new());
        let err = service
            .create_asset("asset-x", "CASH", "BTC", 1, "owner")
            .expect_err("an invalid currency should fail");
        assert!(
            matches!(err, ContractError::InvalidEnum { ref field, ref value, .. } if field == "currency" && value == "BTC"),
            "expected an invalid currency error, but got: {:?}",
            err,
        );
        let err = service
            .create_asset("asset-x", "cash", "NGN", 1, "owner")
            .expect_err("an invalid asset type should fail");
        assert!(
            matches!(err, ContractError::InvalidEnum { ref field, .. } if field == "asset_type"),
            "expected an invalid asset type error, but got: {:?}",
            err,
        );
        assert_eq!(
            0,
            service.into_world_state().put_count,
            "no write should occur for invalid input",
        );
    }

    #[test]
    fn test_create_surfaces_put_failure() {
        let mut world_state = MockWorldState::new();
        world_state.fail_put = true;
        let mut service = AssetLedgerService::new(world_state);
        let err = service
            .create_asset("asset-x", "CASH", "NGN", 1, "owner")
            .expect_err("a failed put should fail the create");
        assert!(
            matches!(err, ContractError::PersistenceError { .. }),
            "expected a persistence error, but got: {:?}",
            err,
        );
        assert!(!service.asset_exists("asset-x").unwrap());
    }

    #[test]
    fn test_exists_surfaces_get_failure() {
        let mut world_state = MockWorldState::new();
        world_state.fail_get = true;
        let service = AssetLedgerService::new(world_state);
        let err = service
            .asset_exists("asset-1")
            .expect_err("a failed get should fail the existence check");
        match err {
            ContractError::PersistenceError { explanation } => assert!(
                explanation.starts_with("failed to read from world state"),
                "unexpected explanation: {}",
                explanation,
            ),
            _ => panic!("unexpected error encountered: {:?}", err),
        };
    }

    #[test]
    fn test_read_missing_asset_is_not_found() {
        let service = AssetLedgerService::new(MockWorldState::new());
        let err = service
            .read_asset("missing")
            .expect_err("reading a missing asset should fail");
        assert!(
            matches!(err, ContractError::AssetNotFound { ref id } if id == "missing"),
            "expected a not found error, but got: {:?}",
            err,
        );
    }

    #[test]
    fn test_read_with_duplicate_matches_is_persistence_error() {
        let mut world_state = MockWorldState::new();
        world_state.insert_asset(&get_default_asset_readable());
        world_state.duplicate_query_results = true;
        let service = AssetLedgerService::new(world_state);
        let err = service
            .read_asset(DEFAULT_ASSET_ID)
            .expect_err("multiple matches for one id should fail");
        match err {
            ContractError::PersistenceError { explanation } => assert_eq!(
                "expected a single asset for id [asset-1], but found 2",
                explanation,
            ),
            _ => panic!("unexpected error encountered: {:?}", err),
        };
    }

    #[test]
    fn test_query_cursors_are_released_on_every_path() {
        let mut world_state = MockWorldState::new();
        world_state.insert_asset(&get_default_asset_readable());
        world_state.insert_raw("asset-broken", br#"{"doc_type":"bank_asset","id":"asset-broken"}"#);
        let service = AssetLedgerService::new(world_state);
        service.read_asset(DEFAULT_ASSET_ID).unwrap();
        service
            .get_all_assets()
            .expect_err("an undecodable document should fail the listing");
        let world_state = service.into_world_state();
        assert_eq!(2, world_state.opened_cursors());
        assert_eq!(
            0,
            world_state.open_cursors(),
            "every cursor should be released, including after a decode failure",
        );
    }

    #[test]
    fn test_query_failure_is_persistence_error() {
        let mut world_state = MockWorldState::new();
        world_state.fail_query = true;
        let service = AssetLedgerService::new(world_state);
        assert!(matches!(
            service.get_all_assets(),
            Err(ContractError::PersistenceError { .. })
        ));
        assert!(matches!(
            service.read_asset("asset-1"),
            Err(ContractError::PersistenceError { .. })
        ));
    }

    #[test]
    fn test_failure_while_iterating_is_persistence_error() {
        let mut world_state = MockWorldState::new();
        world_state.insert_asset(&get_default_asset_readable());
        world_state.fail_query_iteration = true;
        let service = AssetLedgerService::new(world_state);
        assert!(matches!(
            service.get_all_assets(),
            Err(ContractError::PersistenceError { .. })
        ));
        assert_eq!(0, service.into_world_state().open_cursors());
    }

    #[test]
    fn test_update_missing_asset_performs_no_write() {
        let mut service = AssetLedgerService::new(MockWorldState::new());
        let err = service
            .update_asset("missing", "CASH", "NGN", 1, "owner")
            .expect_err("updating a missing asset should fail");
        assert!(matches!(err, ContractError::AssetNotFound { .. }));
        assert_eq!(0, service.into_world_state().put_count);
    }

    #[test]
    fn test_update_fully_overwrites_record() {
        let mut storage = MockStorage::new();
        let mut service = AssetLedgerService::new(StorageWorldState::new(&mut storage));
        create_default_asset(&mut service);
        let updated = service
            .update_asset(DEFAULT_ASSET_ID, "BUILDING", "EUR", 25, "Zenith Bank")
            .expect("updating an existing asset should succeed");
        assert_eq!(
            updated,
            service.read_asset(DEFAULT_ASSET_ID).unwrap(),
            "the stored record should match the update",
        );
        assert_eq!("BUILDING", updated.asset_type);
        assert_eq!("EUR", updated.currency);
        assert_eq!(25, updated.value);
        assert_eq!("Zenith Bank", updated.owner);
    }

    #[test]
    fn test_update_rejects_invalid_enum() {
        let mut storage = MockStorage::new();
        let mut service = AssetLedgerService::new(StorageWorldState::new(&mut storage));
        let created = create_default_asset(&mut service);
        let err = service
            .update_asset(DEFAULT_ASSET_ID, "CASTLE", "EUR", 25, "Zenith Bank")
            .expect_err("an invalid asset type should fail the update");
        assert!(matches!(err, ContractError::InvalidEnum { .. }));
        assert_eq!(created, service.read_asset(DEFAULT_ASSET_ID).unwrap());
    }

    #[test]
    fn test_delete_returns_prior_record_and_removes_it() {
        let mut storage = MockStorage::new();
        let mut service = AssetLedgerService::new(StorageWorldState::new(&mut storage));
        let created = create_default_asset(&mut service);
        let deleted = service
            .delete_asset(DEFAULT_ASSET_ID)
            .expect("deleting an existing asset should succeed");
        assert_eq!(created, deleted, "the record before deletion should be returned");
        assert!(!service.asset_exists(DEFAULT_ASSET_ID).unwrap());
        assert!(matches!(
            service.read_asset(DEFAULT_ASSET_ID),
            Err(ContractError::AssetNotFound { .. })
        ));
        assert!(matches!(
            service.delete_asset(DEFAULT_ASSET_ID),
            Err(ContractError::AssetNotFound { .. })
        ));
    }

    #[test]
    fn test_delete_failure_leaves_record_live() {
        let mut world_state = MockWorldState::new();
        world_state.insert_asset(&get_default_asset_readable());
        world_state.fail_delete = true;
        let mut service = AssetLedgerService::new(world_state);
        let err = service
            .delete_asset(DEFAULT_ASSET_ID)
            .expect_err("a failed delete should fail the operation");
        assert!(matches!(err, ContractError::PersistenceError { .. }));
        assert_eq!(
            get_default_asset_readable(),
            service.read_asset(DEFAULT_ASSET_ID).unwrap(),
            "the record should remain live",
        );
    }

    #[test]
    fn test_transfer_changes_only_owner() {
        let mut storage = MockStorage::new();
        let mut service = AssetLedgerService::new(StorageWorldState::new(&mut storage));
        let before = create_default_asset(&mut service);
        let after = service
            .transfer_asset(DEFAULT_ASSET_ID, "Access Bank")
            .expect("transferring an existing asset should succeed");
        assert_eq!("Access Bank", after.owner);
        assert_eq!(
            AssetReadable {
                owner: "Access Bank".to_string(),
                ..before
            },
            after,
            "every field other than owner should be preserved",
        );
        assert_eq!(after, service.read_asset(DEFAULT_ASSET_ID).unwrap());
    }

    #[test]
    fn test_transfer_missing_asset_is_not_found() {
        let mut service = AssetLedgerService::new(MockWorldState::new());
        assert!(matches!(
            service.transfer_asset("missing", "owner"),
            Err(ContractError::AssetNotFound { .. })
        ));
    }

    #[test]
    fn test_transfer_of_corrupt_record_is_persistence_error() {
        let mut world_state = MockWorldState::new();
        world_state.insert_raw(
            "asset-bad",
            br#"{"doc_type":"bank_asset","id":"asset-bad","asset_type":"CASH","currency":"XYZ","value":1,"owner":"o"}"#,
        );
        let mut service = AssetLedgerService::new(world_state);
        let err = service
            .transfer_asset("asset-bad", "new owner")
            .expect_err("a corrupt stored currency should fail the transfer");
        assert!(
            matches!(err, ContractError::PersistenceError { .. }),
            "stored enum failures should be reported as store corruption, but got: {:?}",
            err,
        );
        assert_eq!(0, service.into_world_state().put_count);
    }

    #[test]
    fn test_get_all_assets_after_delete() {
        let mut storage = MockStorage::new();
        let mut service = AssetLedgerService::new(StorageWorldState::new(&mut storage));
        assert!(
            service.get_all_assets().unwrap().is_empty(),
            "an empty ledger should list no assets rather than fail",
        );
        for index in 1..=4 {
            service
                .create_asset(format!("asset-{}", index), "CASH", "USD", index, "owner")
                .unwrap();
        }
        service.delete_asset("asset-3").unwrap();
        let assets = service.get_all_assets().unwrap();
        assert_eq!(3, assets.len());
        assert!(assets.iter().all(|asset| asset.id != "asset-3"));
    }

    #[test]
    fn test_init_ledger_overwrites_existing_records() {
        let mut storage = MockStorage::new();
        let mut service = AssetLedgerService::new(StorageWorldState::new(&mut storage));
        service
            .create_asset("asset-7", "PPE", "EUR", 1, "Someone")
            .unwrap();
        let seeded = service.init_ledger().expect("seeding should succeed");
        assert_eq!(7, seeded.len());
        assert_eq!(
            seeded,
            service.get_all_assets().unwrap(),
            "the seeded records should be exactly what the ledger lists",
        );
        let overwritten = service.read_asset("asset-7").unwrap();
        assert_eq!("LAND", overwritten.asset_type);
        assert_eq!("INR", overwritten.currency);
        assert_eq!("State Bank of India", overwritten.owner);
        service
            .init_ledger()
            .expect("seeding a second time should overwrite without error");
        assert_eq!(7, service.get_all_assets().unwrap().len());
    }

    #[test]
    fn test_seed_assets_have_unique_ids() {
        let seeds = ledger_seed_assets();
        let mut ids = seeds.iter().map(|a| a.id.clone()).collect::<Vec<String>>();
        ids.sort();
        ids.dedup();
        assert_eq!(seeds.len(), ids.len());
    }

    #[test]
    fn test_exists_for_foreign_document() {
        // A key holding some other entity still counts as taken
        let mut world_state = MockWorldState::new();
        world_state.insert_raw("loan-1", br#"{"doc_type":"loan","id":"loan-1"}"#);
        assert!(world_state.get_state("loan-1").unwrap().is_some());
        let service = AssetLedgerService::new(world_state);
        assert!(service.asset_exists("loan-1").unwrap());
        assert!(matches!(
            service.read_asset("loan-1"),
            Err(ContractError::AssetNotFound { .. })
        ));
    }

    #[test]
    fn test_create_over_foreign_document_is_persistence_error() {
        let mut world_state = MockWorldState::new();
        world_state.insert_raw("loan-1", br#"{"doc_type":"loan","id":"loan-1"}"#);
        let mut service = AssetLedgerService::new(world_state);
        let err = service
            .create_asset("loan-1", "CASH", "NGN", 1, "owner")
            .expect_err("creating over a taken key should fail");
        assert!(
            matches!(err, ContractError::PersistenceError { .. }),
            "a taken key that reads back as nothing should be store inconsistency, but got: {:?}",
            err,
        );
        assert_eq!(
            0,
            service.into_world_state().put_count,
            "the foreign document should not be overwritten",
        );
    }

    #[test]
    fn test_transfer_reads_the_record_once() {
        let mut world_state = MockWorldState::new();
        world_state.insert_asset(&get_default_asset_readable());
        let mut service = AssetLedgerService::new(world_state);
        let (previous, transferred) = service
            .transfer_asset_from_previous(DEFAULT_ASSET_ID, "Access Bank")
            .expect("transferring an existing asset should succeed");
        assert_eq!(get_default_asset_readable(), previous);
        assert_eq!(
            AssetReadable {
                owner: "Access Bank".to_string(),
                ..previous
            },
            transferred,
        );
        let world_state = service.into_world_state();
        assert_eq!(
            1,
            world_state.opened_cursors(),
            "a transfer should issue exactly one document query",
        );
        assert_eq!(0, world_state.open_cursors());
        assert_eq!(1, world_state.put_count);
    }
}
