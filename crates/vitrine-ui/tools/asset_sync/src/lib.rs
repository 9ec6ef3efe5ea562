#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Stage the versioned brand drop into the Vitrine UI static directory.
//!
//! # Design
//! - Resolves the UI root relative to `CARGO_MANIFEST_DIR` so it can be run from any cwd.
//! - Rebuilds `static/brand` from the design drop on every run; nothing from a
//!   previous run survives.
//! - Validates staged SVGs before writing the lock file. The wordmark must
//!   carry the 180x40 view box the header layout depends on.
//! - Emits a deterministic `ASSET_LOCK.txt`: one summary line, then one line
//!   per staged file with its size and hash, sorted by name.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use fs_extra::dir::CopyOptions;
use sha2::{Digest, Sha256};
use walkdir::WalkDir;

const DESIGN_ROOT: &str = "design/brand@1.0.0";
const OUTPUT_ROOT: &str = "static/brand";
const LOGO_FILE: &str = "logo.svg";
const FAVICON_FILE: &str = "favicon.svg";
const LOCK_FILE: &str = "ASSET_LOCK.txt";
const LOGO_VIEWBOX: &str = "viewBox=\"0 0 180 40\"";

/// Errors returned by the brand sync tool.
#[derive(Debug)]
pub enum AssetSyncError {
    /// A design input required by the sync is absent.
    MissingInput {
        /// Path that could not be found.
        path: PathBuf,
    },
    /// A path that must be a file is something else.
    NotAFile {
        /// Offending path.
        path: PathBuf,
    },
    /// A path that must be a directory is something else.
    NotADir {
        /// Offending path.
        path: PathBuf,
    },
    /// A filesystem operation failed.
    Io {
        /// Path the operation touched.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// Rebuilding the output directory failed.
    CopyFailed {
        /// Copy source.
        from: PathBuf,
        /// Copy destination.
        to: PathBuf,
        /// Message from the copy implementation.
        message: String,
    },
    /// A staged SVG failed its sanity check.
    BadSvg {
        /// Rejected file.
        path: PathBuf,
        /// Why it was rejected.
        reason: String,
    },
    /// Walking the staged output directory failed.
    WalkFailed {
        /// Directory being walked.
        path: PathBuf,
        /// Message from the walker.
        message: String,
    },
}

impl Display for AssetSyncError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput { path } => {
                write!(formatter, "missing design input: {}", path.display())
            }
            Self::NotAFile { path } => write!(formatter, "not a file: {}", path.display()),
            Self::NotADir { path } => write!(formatter, "not a directory: {}", path.display()),
            Self::Io { path, source } => {
                write!(formatter, "io failure at {}: {source}", path.display())
            }
            Self::CopyFailed { from, to, message } => write!(
                formatter,
                "copy from {} to {} failed: {message}",
                from.display(),
                to.display()
            ),
            Self::BadSvg { path, reason } => {
                write!(formatter, "rejected svg {}: {reason}", path.display())
            }
            Self::WalkFailed { path, message } => {
                write!(formatter, "walk of {} failed: {message}", path.display())
            }
        }
    }
}

impl Error for AssetSyncError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

struct StagedFile {
    name: String,
    bytes: u64,
    sha256: String,
}

/// Stage the current brand drop into the static directory and return the
/// staged output path.
///
/// # Errors
/// Returns an error when design inputs are missing, the copy fails, a staged
/// SVG is rejected, or outputs cannot be written.
pub fn run() -> Result<PathBuf, AssetSyncError> {
    sync_brand(&ui_root_dir()?)
}

// tools/asset_sync sits two levels below the UI crate root.
fn ui_root_dir() -> Result<PathBuf, AssetSyncError> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .ok_or_else(|| AssetSyncError::MissingInput {
            path: PathBuf::from(env!("CARGO_MANIFEST_DIR")),
        })
}

fn sync_brand(ui_root: &Path) -> Result<PathBuf, AssetSyncError> {
    let design_root = ui_root.join(DESIGN_ROOT);
    expect_dir(&design_root)?;
    expect_file(&design_root.join(LOGO_FILE))?;

    let output_root = ui_root.join(OUTPUT_ROOT);
    replace_dir(&design_root, &output_root)?;

    validate_svg(&output_root.join(LOGO_FILE), Some(LOGO_VIEWBOX))?;
    let favicon = output_root.join(FAVICON_FILE);
    if favicon.is_file() {
        validate_svg(&favicon, None)?;
    }

    let manifest = brand_manifest(&output_root)?;
    write_lock(&output_root, &manifest)?;
    Ok(output_root)
}

fn expect_file(path: &Path) -> Result<(), AssetSyncError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(AssetSyncError::NotAFile {
            path: path.to_path_buf(),
        }),
        Err(_) => Err(AssetSyncError::MissingInput {
            path: path.to_path_buf(),
        }),
    }
}

fn expect_dir(path: &Path) -> Result<(), AssetSyncError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(AssetSyncError::NotADir {
            path: path.to_path_buf(),
        }),
        Err(_) => Err(AssetSyncError::MissingInput {
            path: path.to_path_buf(),
        }),
    }
}

// The destination is rebuilt from scratch so a previous run's outputs (the
// lock file included) cannot leak into the new manifest.
fn replace_dir(from: &Path, to: &Path) -> Result<(), AssetSyncError> {
    if let Ok(meta) = fs::symlink_metadata(to) {
        let removed = if meta.is_dir() {
            fs::remove_dir_all(to)
        } else {
            fs::remove_file(to)
        };
        removed.map_err(|source| AssetSyncError::Io {
            path: to.to_path_buf(),
            source,
        })?;
    }
    fs::create_dir_all(to).map_err(|source| AssetSyncError::Io {
        path: to.to_path_buf(),
        source,
    })?;
    let mut options = CopyOptions::new();
    options.overwrite = true;
    options.content_only = true;
    fs_extra::dir::copy(from, to, &options).map_err(|err| AssetSyncError::CopyFailed {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        message: err.to_string(),
    })?;
    Ok(())
}

fn validate_svg(path: &Path, required_viewbox: Option<&str>) -> Result<(), AssetSyncError> {
    let contents = fs::read_to_string(path).map_err(|source| AssetSyncError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if !contents.contains("<svg") {
        return Err(AssetSyncError::BadSvg {
            path: path.to_path_buf(),
            reason: "no <svg root element".to_string(),
        });
    }
    if let Some(viewbox) = required_viewbox
        && !contents.contains(viewbox)
    {
        return Err(AssetSyncError::BadSvg {
            path: path.to_path_buf(),
            reason: format!("expected {viewbox}"),
        });
    }
    Ok(())
}

fn sha256_hex(path: &Path) -> Result<String, AssetSyncError> {
    let bytes = fs::read(path).map_err(|source| AssetSyncError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}

fn brand_manifest(output_root: &Path) -> Result<Vec<StagedFile>, AssetSyncError> {
    let walk_error = |path: &Path, err: &dyn Display| AssetSyncError::WalkFailed {
        path: path.to_path_buf(),
        message: err.to_string(),
    };
    let mut staged = Vec::new();
    for entry in WalkDir::new(output_root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|err| walk_error(output_root, &err))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry
            .path()
            .strip_prefix(output_root)
            .map_err(|err| walk_error(entry.path(), &err))?
            .display()
            .to_string();
        let bytes = entry
            .metadata()
            .map_err(|err| walk_error(entry.path(), &err))?
            .len();
        staged.push(StagedFile {
            name,
            bytes,
            sha256: sha256_hex(entry.path())?,
        });
    }
    Ok(staged)
}

// One summary line, then one line per staged file in walk order, so reruns
// over identical inputs produce identical bytes.
fn write_lock(output_root: &Path, manifest: &[StagedFile]) -> Result<(), AssetSyncError> {
    let total: u64 = manifest.iter().map(|file| file.bytes).sum();
    let mut contents = format!("brand {} files {total} bytes\n", manifest.len());
    for file in manifest {
        contents.push_str(&format!(
            "{} {} sha256 {}\n",
            file.name, file.bytes, file.sha256
        ));
    }
    let lock_path = output_root.join(LOCK_FILE);
    fs::write(&lock_path, contents).map_err(|source| AssetSyncError::Io {
        path: lock_path,
        source,
    })
}
