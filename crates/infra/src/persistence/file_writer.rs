use std::{fs, fs::File, io::{BufWriter, Write}, path::Path};

use fs2::FileExt;

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    ///
    /// Missing parent directories are created.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let path = path.as_ref();
        let parent = path.parent().ok_or_else(|| std::io::Error::other("path has no parent"))?;
        fs::create_dir_all(parent)?;

        // PID + nanos keeps concurrent writers in the same directory apart.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let file = File::create(&tmp)?;
        let mut w = BufWriter::new(file);
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();

        if let Err(err) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }

        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }

    /// Runs `write` while holding an exclusive advisory lock on `lock_path`.
    ///
    /// The lock file stays in place so every writer locks the same inode.
    pub fn with_exclusive_lock<T>(
        lock_path: &Path,
        write: impl FnOnce() -> std::io::Result<T>,
    ) -> std::io::Result<T> {
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let lock_file = fs::OpenOptions::new().create(true).write(true).truncate(false).open(lock_path)?;
        lock_file.lock_exclusive()?;

        let result = write();

        let _ = lock_file.unlock();
        result
    }
}
