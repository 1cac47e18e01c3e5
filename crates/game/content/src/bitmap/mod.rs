//! File-backed sprite bitmaps.
//!
//! Bitmaps are looked up by filename in the target's own directory first and
//! then in the shared `master/` directory:
//!
//! ```text
//! bmp/
//! ├── master/
//! │   ├── wolf1
//! │   └── elder.bmp
//! └── ql/
//!     └── wolf1        (overrides master/wolf1 for the QL)
//! ```
mod bmp;
mod pack;

pub use bmp::IndexedBitmap;
pub use pack::pack;

use std::path::{Path, PathBuf};

use adventure_core::{
    BitmapError, BitmapOracle, BitmapInfo, Target, registry::Dimensions,
};

/// Shared bitmap directory searched after the target's own.
pub const MASTER_DIR: &str = "master";

/// [`BitmapOracle`] over a `bmp/` directory tree for one target.
#[derive(Clone, Debug)]
pub struct FileBitmapOracle {
    target: Target,
    search: Vec<PathBuf>,
}

impl FileBitmapOracle {
    pub fn new(root: impl AsRef<Path>, target: Target) -> Self {
        let root = root.as_ref();
        Self {
            target,
            search: vec![root.join(target.suffix()), root.join(MASTER_DIR)],
        }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Directories searched, in priority order.
    pub fn search_path(&self) -> &[PathBuf] {
        &self.search
    }

    /// First existing file for `filename`; a bare name also matches `<name>.bmp`.
    pub fn locate(&self, filename: &str) -> Result<PathBuf, BitmapError> {
        let bare = Path::new(filename).extension().is_none();
        for dir in &self.search {
            let exact = dir.join(filename);
            if exact.is_file() {
                return Ok(exact);
            }
            if bare {
                let with_extension = dir.join(format!("{filename}.bmp"));
                if with_extension.is_file() {
                    return Ok(with_extension);
                }
            }
        }
        Err(BitmapError::NotFound {
            filename: filename.to_owned(),
            searched: self
                .search
                .iter()
                .map(|dir| dir.display().to_string())
                .collect(),
        })
    }

    fn read(&self, filename: &str) -> Result<(PathBuf, Vec<u8>), BitmapError> {
        let path = self.locate(filename)?;
        let bytes = std::fs::read(&path).map_err(|err| BitmapError::Unreadable {
            filename: filename.to_owned(),
            reason: err.to_string(),
        })?;
        Ok((path, bytes))
    }
}

impl BitmapOracle for FileBitmapOracle {
    fn inspect(&self, filename: &str) -> Result<BitmapInfo, BitmapError> {
        let path = self.locate(filename)?;
        let reader = image::ImageReader::open(&path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|err| BitmapError::Unreadable {
                filename: filename.to_owned(),
                reason: err.to_string(),
            })?;
        let (width, height) = reader.into_dimensions().map_err(|err| match err {
            image::ImageError::Unsupported(_) => BitmapError::Unsupported {
                filename: filename.to_owned(),
                reason: err.to_string(),
            },
            _ => BitmapError::Unreadable {
                filename: filename.to_owned(),
                reason: err.to_string(),
            },
        })?;
        Ok(BitmapInfo {
            origin: path.display().to_string(),
            dimensions: Dimensions::new(width, height),
        })
    }

    fn convert(&self, filename: &str) -> Result<Vec<u8>, BitmapError> {
        let (path, bytes) = self.read(filename)?;
        let bitmap = IndexedBitmap::decode(filename, &bytes)?;
        let packed = pack(self.target, filename, &bitmap)?;
        tracing::trace!(
            path = %path.display(),
            width = bitmap.width,
            height = bitmap.height,
            bytes = packed.len(),
            "converted bitmap"
        );
        Ok(packed)
    }
}
