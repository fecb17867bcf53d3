//! File-system adapter over `std::fs`.
//!
//! Share modes cannot be requested through `std`, so concurrent writers are
//! not excluded and oplock breaks are never reported. Directories are
//! refused, and under [`OpenFlags::DONT_REPARSE`] a symbolic link in the
//! final path component fails the open itself. File identity is the
//! identity of the open handle.

use crate::ports::outbound::{FileSystem, IoError, OpenFlags, OpenOutcome, OpenRequest};
use same_file::Handle;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use tracing::trace;

#[cfg(windows)]
const FILE_FLAG_OPEN_REPARSE_POINT: u32 = 0x0020_0000;

/// A file opened by [`StdFileSystem`].
#[derive(Debug)]
pub struct StdFile {
    handle: Handle,
    path: PathBuf,
}

impl StdFile {
    /// Absolute path the file was opened under.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Read for StdFile {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.handle.as_file_mut().read(buf)
    }
}

impl Seek for StdFile {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.handle.as_file_mut().seek(pos)
    }
}

/// The host file system.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFileSystem;

impl StdFileSystem {
    pub fn new() -> Self {
        Self
    }

    #[cfg(unix)]
    fn open_file(path: &Path, flags: OpenFlags) -> std::io::Result<File> {
        use std::os::unix::fs::OpenOptionsExt;

        let mut options = OpenOptions::new();
        options.read(true);
        if flags.contains(OpenFlags::DONT_REPARSE) {
            options.custom_flags(libc::O_NOFOLLOW);
        }
        options.open(path)
    }

    #[cfg(windows)]
    fn open_file(path: &Path, flags: OpenFlags) -> std::io::Result<File> {
        use std::os::windows::fs::OpenOptionsExt;

        let mut options = OpenOptions::new();
        options.read(true);
        if flags.contains(OpenFlags::DONT_REPARSE) {
            options.custom_flags(FILE_FLAG_OPEN_REPARSE_POINT);
        }
        options.open(path)
    }

    #[cfg(not(any(unix, windows)))]
    fn open_file(path: &Path, _flags: OpenFlags) -> std::io::Result<File> {
        OpenOptions::new().read(true).open(path)
    }
}

/// Whether `err` is the no-follow open refusing a symbolic link.
fn is_link_refusal(err: &std::io::Error) -> bool {
    #[cfg(unix)]
    {
        err.raw_os_error() == Some(libc::ELOOP)
    }
    #[cfg(not(unix))]
    {
        let _ = err;
        false
    }
}

impl FileSystem for StdFileSystem {
    type File = StdFile;

    fn separator(&self) -> char {
        std::path::MAIN_SEPARATOR
    }

    fn open(&self, path: &str, request: OpenRequest) -> Result<OpenOutcome<StdFile>, IoError> {
        let absolute = std::path::absolute(path).map_err(|e| IoError::from_io(path, e))?;

        let file = Self::open_file(&absolute, request.flags).map_err(|e| {
            if request.flags.contains(OpenFlags::DONT_REPARSE) && is_link_refusal(&e) {
                trace!(path, "Refusing to follow symbolic link");
                IoError::ReparsePoint { path: path.into() }
            } else {
                IoError::from_io(path, e)
            }
        })?;

        let meta = file.metadata().map_err(|e| IoError::from_io(path, e))?;
        // Opened on the link itself where the platform opens reparse points
        if request.flags.contains(OpenFlags::DONT_REPARSE) && meta.file_type().is_symlink() {
            trace!(path, "Refusing to follow symbolic link");
            return Err(IoError::ReparsePoint { path: path.into() });
        }
        if request.flags.contains(OpenFlags::NON_DIRECTORY_FILE) && meta.is_dir() {
            return Err(IoError::NotAFile { path: path.into() });
        }

        let handle = Handle::from_file(file).map_err(|e| IoError::from_io(path, e))?;
        Ok(OpenOutcome::Opened(StdFile {
            handle,
            path: absolute,
        }))
    }

    fn resolve_name(&self, file: &StdFile) -> Result<String, IoError> {
        file.path
            .to_str()
            .map(str::to_string)
            .ok_or_else(|| IoError::NameUnavailable(file.path.to_string_lossy().into_owned()))
    }

    fn is_same_file(&self, a: &StdFile, b: &StdFile) -> bool {
        a.handle == b.handle
    }
}
