//! Integration tests for the flat-file store and key generation.

use anyhow::Result;
use flatbank_core::Account;
use flatbank_store::{
    generate_account_number, next_id, AccountStore, DigitSource, FileStore, FilteredScan, Scan,
    StoreError, RECORD_SIZE,
};
use rust_decimal_macros::dec;
use std::fs;
use tempfile::TempDir;

fn scratch() -> (TempDir, FileStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileStore::new(dir.path().join("accounts.dat"));
    (dir, store)
}

fn account(id: u32, number: &str) -> Account {
    Account {
        id,
        account_number: number.to_string(),
        first_name: "Jan".to_string(),
        last_name: "Kowalski".to_string(),
        address: "ul. Polna 1, Warszawa".to_string(),
        pesel_number: "90010112345".to_string(),
        balance: dec!(100.00),
        debt: dec!(0.00),
    }
}

#[test]
fn absent_store_is_distinct_from_empty_store() {
    let (_dir, store) = scratch();
    assert!(store.scan().unwrap().is_absent());

    // Touch the file: present but zero records.
    fs::write(store.path(), []).unwrap();
    match store.scan().unwrap() {
        Scan::Absent => panic!("zero-length file must not read as absent"),
        Scan::Records(records) => assert_eq!(records.count(), 0),
    }
}

#[test]
fn append_then_scan_preserves_file_order() -> Result<()> {
    let (_dir, store) = scratch();
    store.append(&account(1, "11111111"))?;
    store.append(&account(2, "22222222"))?;
    store.append(&account(3, "33333333"))?;

    let Scan::Records(records) = store.scan()? else {
        panic!("store exists");
    };
    let ids: Vec<u32> = records.map(|r| r.unwrap().id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let len = fs::metadata(store.path())?.len();
    assert_eq!(len, 3 * RECORD_SIZE as u64);
    Ok(())
}

#[test]
fn scan_where_yields_only_matching_records() -> Result<()> {
    let (_dir, store) = scratch();
    store.append(&account(1, "11111111"))?;
    store.append(&account(2, "22222222"))?;
    store.append(&account(3, "33333333"))?;

    let FilteredScan::Records(records) = store.scan_where(|a| a.id % 2 == 1)? else {
        panic!("store exists");
    };
    let ids: Vec<u32> = records.map(|r| r.unwrap().id).collect();
    assert_eq!(ids, vec![1, 3]);
    Ok(())
}

#[test]
fn scan_where_keeps_absent_distinct_from_no_matches() -> Result<()> {
    let (_dir, store) = scratch();
    assert!(store.scan_where(|_| true)?.is_absent());

    store.append(&account(1, "11111111"))?;
    match store.scan_where(|_| false)? {
        FilteredScan::Absent => panic!("a present store must not read as absent"),
        FilteredScan::Records(records) => assert_eq!(records.count(), 0),
    }
    Ok(())
}

#[test]
fn scan_is_restartable() {
    let (_dir, store) = scratch();
    store.append(&account(1, "11111111")).unwrap();

    for _ in 0..2 {
        let Scan::Records(records) = store.scan().unwrap() else {
            panic!("store exists");
        };
        assert_eq!(records.count(), 1);
    }
}

#[test]
fn find_by_id_returns_the_matching_record() {
    let (_dir, store) = scratch();
    store.append(&account(1, "11111111")).unwrap();
    store.append(&account(2, "22222222")).unwrap();

    let found = store.find_by_id(2).unwrap().expect("record exists");
    assert_eq!(found.account_number, "22222222");
    assert!(store.find_by_id(99).unwrap().is_none());
}

#[test]
fn find_by_id_on_absent_store_is_none() {
    let (_dir, store) = scratch();
    assert!(store.find_by_id(1).unwrap().is_none());
}

#[test]
fn rewrite_replaces_one_record_and_leaves_the_rest() {
    let (_dir, store) = scratch();
    store.append(&account(1, "11111111")).unwrap();
    store.append(&account(2, "22222222")).unwrap();
    store.append(&account(3, "33333333")).unwrap();

    let mut updated = account(2, "22222222");
    updated.balance = dec!(777.77);
    store.rewrite_at(2, &updated).unwrap();

    let Scan::Records(records) = store.scan().unwrap() else {
        panic!("store exists");
    };
    let accounts: Vec<Account> = records.map(|r| r.unwrap()).collect();
    assert_eq!(accounts[0].balance, dec!(100.00));
    assert_eq!(accounts[1].balance, dec!(777.77));
    assert_eq!(accounts[2].balance, dec!(100.00));
}

#[test]
fn rewrite_is_byte_idempotent() {
    let (_dir, store) = scratch();
    store.append(&account(1, "11111111")).unwrap();
    let mut updated = account(1, "11111111");
    updated.balance = dec!(55.55);

    store.rewrite_at(1, &updated).unwrap();
    let once = fs::read(store.path()).unwrap();
    store.rewrite_at(1, &updated).unwrap();
    let twice = fs::read(store.path()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn rewrite_of_unknown_id_is_not_found() {
    let (_dir, store) = scratch();
    store.append(&account(1, "11111111")).unwrap();
    let err = store.rewrite_at(9, &account(9, "99999999")).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(9)));
}

#[test]
fn truncated_tail_surfaces_as_an_error() {
    let (_dir, store) = scratch();
    store.append(&account(1, "11111111")).unwrap();
    let mut bytes = fs::read(store.path()).unwrap();
    bytes.truncate(RECORD_SIZE - 10);
    fs::write(store.path(), &bytes).unwrap();

    let Scan::Records(mut records) = store.scan().unwrap() else {
        panic!("store exists");
    };
    let err = records.next().expect("one item").unwrap_err();
    assert!(matches!(
        err,
        StoreError::TruncatedRecord {
            got,
            ..
        } if got == RECORD_SIZE - 10
    ));
}

#[test]
fn next_id_starts_at_one_and_tracks_the_maximum() {
    let (_dir, store) = scratch();
    assert_eq!(next_id(&store).unwrap(), 1);

    store.append(&account(1, "11111111")).unwrap();
    store.append(&account(5, "55555555")).unwrap();
    store.append(&account(3, "33333333")).unwrap();
    assert_eq!(next_id(&store).unwrap(), 6);
}

#[test]
fn next_id_errors_when_the_id_space_is_exhausted() {
    let (_dir, store) = scratch();
    store.append(&account(u32::MAX, "11111111")).unwrap();
    assert!(matches!(next_id(&store), Err(StoreError::IdsExhausted)));
}

/// Scripted source: yields each candidate in turn.
struct Scripted {
    candidates: Vec<&'static str>,
    at: usize,
}

impl DigitSource for Scripted {
    fn candidate(&mut self) -> String {
        let next = self.candidates[self.at];
        self.at += 1;
        next.to_string()
    }
}

#[test]
fn account_number_generation_retries_on_collision() {
    let (_dir, store) = scratch();
    store.append(&account(1, "11111111")).unwrap();

    let mut source = Scripted {
        candidates: vec!["11111111", "42424242"],
        at: 0,
    };
    let number = generate_account_number(&store, &mut source).unwrap();
    assert_eq!(number, "42424242");
    assert_eq!(source.at, 2, "the colliding candidate must be retried");
}

#[test]
fn account_number_generation_on_absent_store_takes_the_first_candidate() {
    let (_dir, store) = scratch();
    let mut source = Scripted {
        candidates: vec!["00000001"],
        at: 0,
    };
    assert_eq!(generate_account_number(&store, &mut source).unwrap(), "00000001");
}

#[test]
fn random_source_produces_eight_digits() {
    let mut source = flatbank_store::RandomDigits::new();
    for _ in 0..100 {
        let candidate = source.candidate();
        assert_eq!(candidate.len(), 8);
        assert!(candidate.chars().all(|c| c.is_ascii_digit()));
    }
}
