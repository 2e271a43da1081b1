//! The sequential store: a trait and its flat-file implementation.
//!
//! `FileStore` keeps no open handle between calls; every operation opens the
//! backing file, does its work, and closes it. Two separate calls are not
//! wrapped in any shared lock or transaction, so a multi-record caller (the
//! transfer verb) sees no atomicity across its two rewrites.

use crate::codec::{self, RECORD_SIZE};
use crate::error::StoreError;
use flatbank_core::Account;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Record-oriented access to the account file.
///
/// The linear-scan `FileStore` is the only implementation today; the trait
/// exists so an indexed one (say, an in-memory id-to-offset map rebuilt at
/// open) can replace it without touching callers. Implementations must keep
/// the same semantics: `id` is unique, first match resolves.
pub trait AccountStore {
    /// Full-scan traversal from the start of the file, in file order.
    ///
    /// A missing file is a distinct outcome ([`Scan::Absent`]) from a
    /// present-but-empty one (an iterator that yields nothing), so callers
    /// can message "no accounts yet" differently from "zero matches".
    fn scan(&self) -> Result<Scan, StoreError>;

    /// Full-scan traversal filtered by `predicate`, lazily.
    ///
    /// Keeps the same absent/present split as [`scan`](Self::scan): a
    /// missing file is [`FilteredScan::Absent`], a present file with zero
    /// matches is an iterator that yields nothing.
    fn scan_where<P>(&self, predicate: P) -> Result<FilteredScan<P>, StoreError>
    where
        P: FnMut(&Account) -> bool,
        Self: Sized,
    {
        Ok(self.scan()?.matching(predicate))
    }

    /// Append exactly one encoded record after the current end of file.
    fn append(&self, account: &Account) -> Result<(), StoreError>;

    /// Overwrite the whole record whose `id` matches, in place.
    ///
    /// The caller supplies the complete desired record state, not a delta.
    /// A failure mid-write leaves the file in whatever state the last
    /// successful byte write produced; there is no atomic-write or rename
    /// discipline here, and tests probing crash behavior should know that.
    fn rewrite_at(&self, id: u32, account: &Account) -> Result<(), StoreError>;

    /// Linear scan until the record with `id` is found or the file ends.
    fn find_by_id(&self, id: u32) -> Result<Option<Account>, StoreError> {
        match self.scan()? {
            Scan::Absent => Ok(None),
            Scan::Records(records) => {
                for record in records {
                    let account = record?;
                    if account.id == id {
                        return Ok(Some(account));
                    }
                }
                Ok(None)
            }
        }
    }
}

/// Outcome of opening a scan.
pub enum Scan {
    /// The store file does not exist: no accounts yet.
    Absent,
    /// The store file exists; iterate its records lazily.
    Records(Records),
}

impl Scan {
    pub fn is_absent(&self) -> bool {
        matches!(self, Scan::Absent)
    }

    /// Apply a predicate to the traversal, keeping the absent/present split.
    pub fn matching<P>(self, predicate: P) -> FilteredScan<P>
    where
        P: FnMut(&Account) -> bool,
    {
        match self {
            Scan::Absent => FilteredScan::Absent,
            Scan::Records(records) => FilteredScan::Records(Filtered { records, predicate }),
        }
    }
}

/// Outcome of opening a filtered scan.
pub enum FilteredScan<P> {
    /// The store file does not exist: no accounts yet.
    Absent,
    /// The store file exists; iterate its matching records lazily.
    Records(Filtered<P>),
}

impl<P> FilteredScan<P> {
    pub fn is_absent(&self) -> bool {
        matches!(self, FilteredScan::Absent)
    }
}

/// Lazy filtered record iterator; the predicate runs per decoded record.
/// Read errors pass through unfiltered.
pub struct Filtered<P> {
    records: Records,
    predicate: P,
}

impl<P> Iterator for Filtered<P>
where
    P: FnMut(&Account) -> bool,
{
    type Item = Result<Account, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.records.next()? {
                Ok(account) if (self.predicate)(&account) => return Some(Ok(account)),
                Ok(_) => continue,
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

/// Lazy record iterator over the backing file.
///
/// Each `scan` call re-reads from the start; nothing is cached. A short
/// final read surfaces as [`StoreError::TruncatedRecord`].
pub struct Records {
    reader: BufReader<File>,
}

impl Iterator for Records {
    type Item = Result<Account, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        match read_record(&mut self.reader) {
            Ok(None) => None,
            Ok(Some(buf)) => Some(codec::decode(&buf).map_err(StoreError::from)),
            Err(err) => Some(Err(err)),
        }
    }
}

/// The flat-file store. Holds only the path; see the module docs for the
/// open-per-call discipline.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AccountStore for FileStore {
    fn scan(&self) -> Result<Scan, StoreError> {
        match File::open(&self.path) {
            Ok(file) => Ok(Scan::Records(Records {
                reader: BufReader::new(file),
            })),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Scan::Absent),
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    fn append(&self, account: &Account) -> Result<(), StoreError> {
        let encoded = codec::encode(account)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&encoded)?;
        debug!(id = account.id, "record appended");
        Ok(())
    }

    fn rewrite_at(&self, id: u32, account: &Account) -> Result<(), StoreError> {
        let encoded = codec::encode(account)?;
        // One open for the combined scan + seek + write.
        let file = OpenOptions::new().read(true).write(true).open(&self.path)?;
        let mut reader = BufReader::new(file);

        let mut index: u64 = 0;
        let mut found = false;
        while let Some(buf) = read_record(&mut reader)? {
            if codec::decode(&buf)?.id == id {
                found = true;
                break;
            }
            index += 1;
        }
        if !found {
            return Err(StoreError::NotFound(id));
        }

        let mut file = reader.into_inner();
        file.seek(SeekFrom::Start(index * RECORD_SIZE as u64))?;
        file.write_all(&encoded)?;
        debug!(id, index, "record rewritten in place");
        Ok(())
    }
}

/// Read one whole record, `None` at clean end of file.
fn read_record(reader: &mut impl Read) -> Result<Option<[u8; RECORD_SIZE]>, StoreError> {
    let mut buf = [0u8; RECORD_SIZE];
    let mut filled = 0;
    while filled < RECORD_SIZE {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    match filled {
        0 => Ok(None),
        RECORD_SIZE => Ok(Some(buf)),
        got => Err(StoreError::TruncatedRecord {
            expected: RECORD_SIZE,
            got,
        }),
    }
}
