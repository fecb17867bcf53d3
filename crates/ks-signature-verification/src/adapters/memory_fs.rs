//! In-memory file system.
//!
//! Uses a `\`-separated namespace. Every inserted file gets a fresh object
//! id, so replacing the content at a path yields a different file object
//! than handles opened before the replacement. Lock conditions can be
//! injected per path to exercise sharing violations and oplock breaks.

use crate::ports::outbound::{FileSystem, IoError, OpenFlags, OpenOutcome, OpenRequest};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::io::{Cursor, Read, Seek, SeekFrom};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Lock state injected on a path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LockCondition {
    /// Opens succeed
    #[default]
    None,
    /// Another opener holds an incompatible share mode
    SharingViolation,
    /// Opens complete while an oplock break is still in progress
    OplockBreak,
}

#[derive(Clone, Debug)]
enum EntryKind {
    File(Arc<[u8]>),
    Directory,
    Link,
}

#[derive(Clone, Debug)]
struct Entry {
    id: u64,
    kind: EntryKind,
    lock: LockCondition,
}

/// An open in-memory file.
#[derive(Debug)]
pub struct MemoryFile {
    id: u64,
    name: Option<String>,
    content: Cursor<Arc<[u8]>>,
}

impl MemoryFile {
    /// A file object whose name cannot be resolved.
    pub fn anonymous(content: impl Into<Vec<u8>>) -> Self {
        Self {
            id: u64::MAX,
            name: None,
            content: Cursor::new(Arc::from(content.into())),
        }
    }
}

impl Read for MemoryFile {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.content.read(buf)
    }
}

impl Seek for MemoryFile {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.content.seek(pos)
    }
}

/// In-memory [`FileSystem`].
#[derive(Debug, Default)]
pub struct InMemoryFileSystem {
    entries: RwLock<HashMap<String, Entry>>,
    next_id: AtomicU64,
    opens: Mutex<Vec<(String, OpenRequest)>>,
}

impl InMemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&self, path: &str, kind: EntryKind) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.entries.write().insert(
            path.to_string(),
            Entry {
                id,
                kind,
                lock: LockCondition::None,
            },
        );
    }

    /// Create or replace a file. A replaced file becomes a new file object.
    pub fn insert(&self, path: &str, content: impl Into<Vec<u8>>) {
        self.add(path, EntryKind::File(Arc::from(content.into())));
    }

    /// Create a directory entry.
    pub fn add_directory(&self, path: &str) {
        self.add(path, EntryKind::Directory);
    }

    /// Create a symbolic link entry. It is never traversed.
    pub fn add_link(&self, path: &str) {
        self.add(path, EntryKind::Link);
    }

    /// Remove an entry. Returns whether it existed.
    pub fn remove(&self, path: &str) -> bool {
        self.entries.write().remove(path).is_some()
    }

    /// Inject a lock condition on an existing entry. Returns whether it exists.
    pub fn set_lock(&self, path: &str, lock: LockCondition) -> bool {
        match self.entries.write().get_mut(path) {
            Some(entry) => {
                entry.lock = lock;
                true
            }
            None => false,
        }
    }

    /// Every open attempted so far, in call order.
    pub fn opened(&self) -> Vec<(String, OpenRequest)> {
        self.opens.lock().clone()
    }
}

impl FileSystem for InMemoryFileSystem {
    type File = MemoryFile;

    fn separator(&self) -> char {
        '\\'
    }

    fn open(&self, path: &str, request: OpenRequest) -> Result<OpenOutcome<MemoryFile>, IoError> {
        self.opens.lock().push((path.to_string(), request));

        let entry = self
            .entries
            .read()
            .get(path)
            .cloned()
            .ok_or_else(|| IoError::NotFound { path: path.into() })?;

        let content = match entry.kind {
            EntryKind::File(content) => content,
            EntryKind::Directory if request.flags.contains(OpenFlags::NON_DIRECTORY_FILE) => {
                return Err(IoError::NotAFile { path: path.into() })
            }
            EntryKind::Link if request.flags.contains(OpenFlags::DONT_REPARSE) => {
                return Err(IoError::ReparsePoint { path: path.into() })
            }
            EntryKind::Directory | EntryKind::Link => Arc::from(Vec::new()),
        };

        let file = MemoryFile {
            id: entry.id,
            name: Some(path.to_string()),
            content: Cursor::new(content),
        };

        match entry.lock {
            LockCondition::None => Ok(OpenOutcome::Opened(file)),
            LockCondition::SharingViolation => Err(IoError::SharingViolation { path: path.into() }),
            LockCondition::OplockBreak => Ok(OpenOutcome::OplockBreakInProgress(file)),
        }
    }

    fn resolve_name(&self, file: &MemoryFile) -> Result<String, IoError> {
        file.name
            .clone()
            .ok_or_else(|| IoError::NameUnavailable("anonymous file object".into()))
    }

    fn is_same_file(&self, a: &MemoryFile, b: &MemoryFile) -> bool {
        a.name.is_some() && b.name.is_some() && a.id == b.id
    }
}
