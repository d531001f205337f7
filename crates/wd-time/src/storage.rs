//! Holiday persistence.
//!
//! Holidays are stored as plain text, one `YYYY-MM-DD,label` record per
//! line.  The line is split on its first comma, so a label may itself
//! contain commas; a label cannot contain a line break.
//!
//! [`HolidayStore`] couples a [`HolidaySet`] with a [`HolidayStorage`]
//! backend and writes the whole set back after every mutation.  Storage
//! failures never reach the caller: they are logged and the store carries
//! on with its in-memory state.

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::date::Date;
use crate::holiday_set::HolidaySet;
use wd_core::errors::Result;

// ── Storage backends ──────────────────────────────────────────────────────────

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem error on the holiday file.
    #[error("i/o error on {path}: {source}")]
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// The backend refused the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A place where the serialized holiday list lives.
pub trait HolidayStorage {
    /// Short description used in log messages and as the calendar name.
    fn describe(&self) -> String;

    /// Read the stored text.  `Ok(None)` means nothing has been stored yet.
    fn load(&self) -> std::result::Result<Option<String>, StorageError>;

    /// Replace the stored text with `contents`.
    fn save(&self, contents: &str) -> std::result::Result<(), StorageError>;
}

/// Holidays kept in a text file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Default file name, resolved against the current working directory.
    pub const DEFAULT_PATH: &'static str = "holidays.txt";

    /// Store holidays in the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Return the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HolidayStorage for FileStorage {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> std::result::Result<Option<String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save(&self, contents: &str) -> std::result::Result<(), StorageError> {
        std::fs::write(&self.path, contents).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Holidays kept in memory.  Can be switched to fail every write, which is
/// how an unwritable file is simulated.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    contents: RefCell<Option<String>>,
    read_only: bool,
}

impl MemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-filled with `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: RefCell::new(Some(contents.into())),
            read_only: false,
        }
    }

    /// Make every subsequent `save` fail.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Return a copy of the stored text.
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl HolidayStorage for MemoryStorage {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn load(&self) -> std::result::Result<Option<String>, StorageError> {
        Ok(self.contents.borrow().clone())
    }

    fn save(&self, contents: &str) -> std::result::Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Unavailable("storage is read-only".into()));
        }
        *self.contents.borrow_mut() = Some(contents.to_owned());
        Ok(())
    }
}

// ── Text format ───────────────────────────────────────────────────────────────

/// Outcome of decoding a holiday file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DecodeReport {
    /// Records read into the set.
    pub loaded: usize,
    /// 1-based numbers of the lines that were skipped as malformed.
    pub skipped: Vec<usize>,
}

/// Read `YYYY-MM-DD,label` records from `text` into `set`.
///
/// Blank lines are ignored.  A malformed line is skipped and reported; the
/// remaining lines are still read.  Whitespace around the date is tolerated
/// but the label is kept verbatim.  A date appearing twice keeps the label
/// of its last occurrence.
pub fn decode(text: &str, set: &mut HolidaySet) -> DecodeReport {
    let mut report = DecodeReport::default();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let inserted = line
            .split_once(',')
            .and_then(|(date, label)| Date::parse(date.trim()).ok().map(|d| (d, label)))
            .map(|(date, label)| set.insert(date, label));
        match inserted {
            Some(Ok(_)) => report.loaded += 1,
            Some(Err(e)) => {
                warn!(line = idx + 1, error = %e, "skipping holiday record with invalid label");
                report.skipped.push(idx + 1);
            }
            None => {
                warn!(line = idx + 1, record = %line, "skipping malformed holiday record");
                report.skipped.push(idx + 1);
            }
        }
    }
    report
}

/// Write `set` as `YYYY-MM-DD,label` records, in ascending date order.
pub fn encode(set: &HolidaySet) -> String {
    let mut out = String::with_capacity(set.len() * 24);
    for (date, label) in set.iter() {
        out.push_str(&format!("{date},{label}\n"));
    }
    out
}

// ── Store ─────────────────────────────────────────────────────────────────────

/// A holiday set bound to its storage.
///
/// Each mutation is followed by a full rewrite of the storage.  There is no
/// batching and no locking: a store has exactly one caller at a time.
#[derive(Debug)]
pub struct HolidayStore<S: HolidayStorage> {
    storage: S,
    holidays: HolidaySet,
}

impl<S: HolidayStorage> HolidayStore<S> {
    /// Load the holidays held by `storage`.
    ///
    /// Loading never fails: missing or unreadable storage yields an empty
    /// set, and malformed records are skipped.
    pub fn open(storage: S) -> Self {
        let mut holidays = HolidaySet::new(storage.describe());
        match storage.load() {
            Ok(Some(text)) => {
                let report = decode(&text, &mut holidays);
                info!(
                    source = %storage.describe(),
                    loaded = report.loaded,
                    skipped = report.skipped.len(),
                    "holidays loaded"
                );
            }
            Ok(None) => {
                info!(source = %storage.describe(), "no holiday file found, starting empty");
            }
            Err(e) => {
                warn!(error = %e, "cannot read holidays, starting empty");
            }
        }
        Self { storage, holidays }
    }

    /// Return the current holiday set.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Return the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Return `true` if `date` is a holiday.
    pub fn contains(&self, date: Date) -> bool {
        self.holidays.contains(date)
    }

    /// Insert or overwrite the holiday on `date`, then persist.
    ///
    /// Fails only when `label` cannot be stored (it contains a line break);
    /// nothing changes in that case.
    pub fn add(&mut self, date: Date, label: &str) -> Result<Option<String>> {
        let previous = self.holidays.insert(date, label)?;
        info!(%date, label, replaced = previous.is_some(), "holiday added");
        self.persist();
        Ok(previous)
    }

    /// Remove the holiday on `date`, then persist.
    ///
    /// Removing a date that is not a holiday is logged and changes nothing.
    pub fn remove(&mut self, date: Date) -> Option<String> {
        match self.holidays.remove(date) {
            Some(label) => {
                info!(%date, label = %label, "holiday removed");
                self.persist();
                Some(label)
            }
            None => {
                info!(%date, "holiday not found, nothing removed");
                None
            }
        }
    }

    /// Mark every weekend day in `[from, to]` as a holiday, then persist.
    pub fn mark_weekends(&mut self, from: Date, to: Date, label: &str) -> Result<usize> {
        let added = self.holidays.mark_weekends(from, to, label)?;
        info!(%from, %to, added, "weekends marked");
        if added > 0 {
            self.persist();
        }
        Ok(added)
    }

    /// Mark weekends in memory only, without touching the storage.
    ///
    /// The seeded days reach the storage with the next persisted mutation.
    pub fn seed_weekends(&mut self, from: Date, to: Date, label: &str) -> Result<usize> {
        let added = self.holidays.mark_weekends(from, to, label)?;
        debug!(%from, %to, added, "weekends seeded");
        Ok(added)
    }

    /// Write the whole set to the storage.
    ///
    /// Returns `false` (after logging) if the storage rejected the write.
    pub fn persist(&self) -> bool {
        match self.storage.save(&encode(&self.holidays)) {
            Ok(()) => {
                debug!(
                    target_file = %self.storage.describe(),
                    count = self.holidays.len(),
                    "holidays saved"
                );
                true
            }
            Err(e) => {
                warn!(error = %e, "cannot save holidays, keeping in-memory state");
                false
            }
        }
    }
}
