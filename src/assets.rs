//! The asset publisher: copies the active theme's assets and the top-level
//! `images` directory into the output tree (replacing prior copies), and
//! merges the top-level `static` directory's contents into the output root
//! (additively, preserving relative subpaths). Every source directory is
//! optional; absence just skips the step with a notice.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Publishes all three asset sources into `output`.
pub fn publish(
    theme_assets: &Path,
    images: &Path,
    static_files: &Path,
    output: &Path,
) -> Result<()> {
    replace_dir(theme_assets, &output.join("assets"), "theme assets")?;
    replace_dir(images, &output.join("images"), "images")?;
    merge_static(static_files, output)?;
    Ok(())
}

/// Copies `src` to `dst`, destructively replacing any prior copy of `dst`.
fn replace_dir(src: &Path, dst: &Path, what: &str) -> Result<()> {
    if !src.is_dir() {
        println!("Skipping {}: {} does not exist", what, src.display());
        return Ok(());
    }
    rmdir(dst)?;
    copy_dir(src, dst)?;
    println!("✓ Copied {} to {}", what, dst.display());
    Ok(())
}

/// Copies every file under `src` to the same relative path under `output`
/// without clearing anything first, so prior output files survive unless a
/// static file shadows them.
fn merge_static(src: &Path, output: &Path) -> Result<()> {
    if !src.is_dir() {
        println!("Skipping static files: {} does not exist", src.display());
        return Ok(());
    }
    for result in WalkDir::new(src) {
        let entry = result?;
        if entry.file_type().is_file() {
            // strip_prefix can't fail: `src` is always an ancestor
            let dst = output.join(entry.path().strip_prefix(src).unwrap());
            if let Some(parent) = dst.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &dst)?;
        }
    }
    println!("✓ Copied static files to {}", output.display());
    Ok(())
}

fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;
    for result in std::fs::read_dir(src)? {
        let entry = result?;
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &dst.join(entry.file_name()))?;
        } else {
            std::fs::copy(entry.path(), dst.join(entry.file_name()))?;
        }
    }
    Ok(())
}

fn rmdir(dir: &Path) -> Result<()> {
    match std::fs::remove_dir_all(dir) {
        Ok(x) => Ok(x),
        Err(e) => match e.kind() {
            io::ErrorKind::NotFound => Ok(()),
            _ => Err(Error::Clean {
                path: dir.to_owned(),
                err: e,
            }),
        },
    }
}

/// The result of a fallible asset-publishing operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error publishing assets into the output tree.
#[derive(Debug)]
pub enum Error {
    /// Returned for I/O problems while clearing a prior asset copy.
    Clean { path: PathBuf, err: io::Error },

    /// Returned for WalkDir I/O errors.
    WalkDir(walkdir::Error),

    /// Returned for other I/O errors.
    Io(io::Error),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Clean { path, err } => {
                write!(f, "Cleaning directory '{}': {}", path.display(), err)
            }
            Error::WalkDir(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Clean { path: _, err } => Some(err),
            Error::WalkDir(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    /// Converts an [`io::Error`] into an [`Error`]. This allows us to use
    /// the `?` operator for fallible I/O operations.
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<walkdir::Error> for Error {
    /// Converts a [`walkdir::Error`] into an [`Error`]. This allows us to
    /// use the `?` operator while walking the static directory.
    fn from(err: walkdir::Error) -> Error {
        Error::WalkDir(err)
    }
}
