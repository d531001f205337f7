//! Integration tests for the holiday file and the persisting store.

use proptest::prelude::*;
use wd_time::storage::{decode, encode};
use wd_time::{Calendar, Date, FileStorage, HolidaySet, HolidayStorage, HolidayStore};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn missing_file_yields_empty_set() {
    let dir = tempfile::tempdir().unwrap();
    let store = HolidayStore::open(FileStorage::new(dir.path().join("holidays.txt")));
    assert!(store.holidays().is_empty());
}

#[test]
fn unreadable_file_yields_empty_set() {
    // A directory cannot be read as a file.
    let dir = tempfile::tempdir().unwrap();
    let store = HolidayStore::open(FileStorage::new(dir.path()));
    assert!(store.holidays().is_empty());
    assert!(!store.persist());
}

#[test]
fn mutations_are_written_through() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("holidays.txt");

    let mut store = HolidayStore::open(FileStorage::new(&path));
    store.add(date(2024, 10, 1), "National Day").unwrap();
    store.add(date(2024, 5, 1), "Labour Day").unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "2024-05-01,Labour Day\n2024-10-01,National Day\n"
    );

    // A fresh store sees the same holidays.
    let mut reopened = HolidayStore::open(FileStorage::new(&path));
    assert_eq!(reopened.holidays(), store.holidays());
    assert_eq!(reopened.holidays().name(), path.display().to_string());

    reopened.remove(date(2024, 5, 1));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "2024-10-01,National Day\n"
    );
}

#[test]
fn malformed_lines_do_not_abort_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("holidays.txt");
    std::fs::write(
        &path,
        "2024-01-01,New Year\n2024-02-30,bogus\nno comma here\n2024-05-01,Labour Day\n",
    )
    .unwrap();

    let store = HolidayStore::open(FileStorage::new(&path));
    assert_eq!(store.holidays().len(), 2);
    assert!(store.contains(date(2024, 5, 1)));
}

#[test]
fn removing_absent_date_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("holidays.txt");
    std::fs::write(&path, "2024-01-01,New Year\n").unwrap();

    let mut store = HolidayStore::open(FileStorage::new(&path));
    assert_eq!(store.remove(date(2030, 1, 1)), None);
    assert_eq!(store.holidays().len(), 1);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "2024-01-01,New Year\n");
}

#[test]
fn mark_weekends_persists() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("holidays.txt"));
    let mut store = HolidayStore::open(storage.clone());
    let added = store
        .mark_weekends(date(2024, 6, 1), date(2024, 6, 30), "weekend")
        .unwrap();
    // June 2024 has five Saturdays and five Sundays.
    assert_eq!(added, 10);
    let text = storage.load().unwrap().unwrap();
    assert_eq!(text.lines().count(), 10);
    assert!(store.holidays().is_holiday(date(2024, 6, 30)));
}

prop_compose! {
    fn holiday_entries()(
        entries in prop::collection::btree_map(
            0i32..40_000,
            " {0,2}[A-Za-z0-9 ,'-]{0,20} {0,2}",
            1..30,
        )
    ) -> Vec<(Date, String)> {
        entries
            .into_iter()
            .map(|(offset, label)| (Date::from_serial(offset).unwrap(), label))
            .collect()
    }
}

proptest! {
    #[test]
    fn save_then_load_reproduces_mapping(entries in holiday_entries()) {
        let mut set = HolidaySet::new("roundtrip");
        for (d, label) in &entries {
            set.insert(*d, label.clone()).unwrap();
        }
        let mut reloaded = HolidaySet::new("roundtrip");
        let report = decode(&encode(&set), &mut reloaded);
        prop_assert!(report.skipped.is_empty());
        prop_assert_eq!(report.loaded, entries.len());
        prop_assert_eq!(reloaded, set);
    }
}
