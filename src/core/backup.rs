use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::utils::path::ensure_parent_dir;
use rusqlite::Connection;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Snapshot the database into `dest` (optionally zipped next to it).
    /// Returns the path of the final artifact.
    pub fn backup(db_path: &Path, dest: &Path, compress: bool, force: bool) -> AppResult<PathBuf> {
        if !db_path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", db_path.display()),
            )
            .into());
        }

        let final_path = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        for target in [dest, final_path.as_path()] {
            if target.exists() {
                if !force {
                    return Err(io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!("'{}' already exists (use --force to overwrite)", target.display()),
                    )
                    .into());
                }
                fs::remove_file(target)?;
            }
        }

        ensure_parent_dir(dest)?;

        // VACUUM INTO yields a consistent copy even while the file is in use.
        let conn = Connection::open(db_path)?;
        conn.execute("VACUUM INTO ?1", [dest.to_string_lossy()])?;

        if compress {
            compress_backup(dest, &final_path)?;
            fs::remove_file(dest)?;
        }

        ttlog(
            &conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        )?;

        Ok(final_path)
    }
}

/// Compress a backup using .zip
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "rschedule.sqlite".to_string());

    zip.start_file(entry, options)
        .map_err(|e| AppError::Io(io::Error::other(e)))?;

    let mut f = fs::File::open(src)?;
    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(|e| AppError::Io(io::Error::other(e)))?;

    Ok(())
}
