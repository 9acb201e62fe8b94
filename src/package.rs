//! Local code packaging for function create and update.
//!
//! Mirrors the engine's upload constraints: the payload must be a real
//! zip archive of at most 50 MiB. A bare source file is zipped into the
//! system temp directory first (no compression, the engine unpacks it
//! once and throws it away) and removed again after a successful create.

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

pub const MAX_ZIP_SIZE: u64 = 50 * 1024 * 1024;

/// A zip ready for upload. `temporary` marks archives this client built
/// itself; only those are removed by [`PackageFile::cleanup`].
#[derive(Debug)]
pub struct PackageFile {
    pub path: PathBuf,
    pub temporary: bool,
}

impl PackageFile {
    pub fn read(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))
    }

    /// Remove the archive if this client created it; user-supplied
    /// packages are left alone.
    pub fn cleanup(&self) -> std::io::Result<()> {
        if self.temporary {
            fs::remove_file(&self.path)
        } else {
            Ok(())
        }
    }
}

/// Resolve `--package` / `--file` into an uploadable archive.
pub fn resolve_package(package: Option<&Path>, file: Option<&Path>) -> Result<PackageFile> {
    if let Some(package) = package {
        let meta = fs::metadata(package)
            .with_context(|| format!("reading {}", package.display()))?;
        let opened = fs::File::open(package)?;
        if ZipArchive::new(opened).is_err() {
            bail!("Package {} is not a valid ZIP file.", package.display());
        }
        check_size(meta.len())?;
        return Ok(PackageFile {
            path: package.to_path_buf(),
            temporary: false,
        });
    }

    let Some(file) = file else {
        bail!("Package or file needs to be specified.");
    };
    if !file.is_file() {
        bail!("File {} not exist.", file.display());
    }

    let stem = file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("function");
    let entry_name = file
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("function")
        .to_string();
    let zip_path = std::env::temp_dir().join(format!("{stem}.zip"));

    let data = fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let out = fs::File::create(&zip_path)
        .with_context(|| format!("creating {}", zip_path.display()))?;
    let mut writer = ZipWriter::new(out);
    let options = FileOptions::default().compression_method(CompressionMethod::Stored);
    writer.start_file(entry_name, options)?;
    writer.write_all(&data)?;
    writer.finish()?;

    check_size(fs::metadata(&zip_path)?.len())?;
    Ok(PackageFile {
        path: zip_path,
        temporary: true,
    })
}

/// Hex MD5 of the package content; the engine stores it alongside the
/// code to detect modified uploads.
pub fn md5_hex(data: &[u8]) -> String {
    format!("{:x}", md5::compute(data))
}

fn check_size(len: u64) -> Result<()> {
    if len > MAX_ZIP_SIZE {
        bail!(
            "Package file size must be no more than {}M.",
            MAX_ZIP_SIZE / 1024 / 1024
        );
    }
    Ok(())
}
