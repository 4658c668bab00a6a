//! Entry records produced by the walker

use std::fs::Metadata;
use std::path::PathBuf;

/// One filesystem node discovered below the walk root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Nesting level; direct children of the root are depth 1.
    pub depth: usize,
    /// Base name, without any directory component.
    pub name: String,
    /// Path from the walk root to this node (root included).
    pub path: PathBuf,
    pub is_dir: bool,
    /// Raw size in bytes as reported by the filesystem.
    pub size_bytes: u64,
    /// `ls -l` style mode string, e.g. `drwxr-xr-x`.
    pub permissions: String,
}

impl Entry {
    /// Build an entry from the (non-following) metadata of `path`.
    pub fn from_metadata(depth: usize, path: PathBuf, metadata: &Metadata) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        Self {
            depth,
            name,
            is_dir: metadata.is_dir(),
            size_bytes: metadata.len(),
            permissions: permission_string(metadata),
            path,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Render the file type and permission bits the way `ls -l` does.
#[cfg(unix)]
pub fn permission_string(metadata: &Metadata) -> String {
    use std::os::unix::fs::{FileTypeExt, PermissionsExt};

    let file_type = metadata.file_type();
    let kind = if file_type.is_symlink() {
        'l'
    } else if file_type.is_dir() {
        'd'
    } else if file_type.is_fifo() {
        'p'
    } else if file_type.is_socket() {
        's'
    } else if file_type.is_block_device() {
        'b'
    } else if file_type.is_char_device() {
        'c'
    } else {
        '-'
    };

    let mut out = String::with_capacity(10);
    out.push(kind);
    out.push_str(&mode_bits(metadata.permissions().mode()));
    out
}

/// Platforms without POSIX mode bits only expose the read-only flag.
#[cfg(not(unix))]
pub fn permission_string(metadata: &Metadata) -> String {
    let kind = if metadata.file_type().is_symlink() {
        'l'
    } else if metadata.is_dir() {
        'd'
    } else {
        '-'
    };
    let bits = if metadata.permissions().readonly() {
        "r-xr-xr-x"
    } else {
        "rwxrwxrwx"
    };
    format!("{}{}", kind, bits)
}

/// Format the low twelve mode bits as nine `rwx` characters,
/// folding setuid, setgid and sticky into the execute columns.
pub fn mode_bits(mode: u32) -> String {
    const SPECIAL: [(u32, char, char); 3] = [
        (0o4000, 's', 'S'),
        (0o2000, 's', 'S'),
        (0o1000, 't', 'T'),
    ];

    let mut out = String::with_capacity(9);
    for (class, (special_bit, set_exec, set_no_exec)) in SPECIAL.iter().enumerate() {
        let shift = 6 - class * 3;
        let bits = (mode >> shift) & 0o7;

        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });

        let exec = bits & 0o1 != 0;
        let special = mode & special_bit != 0;
        out.push(match (special, exec) {
            (true, true) => *set_exec,
            (true, false) => *set_no_exec,
            (false, true) => 'x',
            (false, false) => '-',
        });
    }
    out
}
