//! ROM set loading.
//!
//! The game program ships as four 2 KiB images loaded back-to-back into
//! the lower 8 KiB of the address space:
//!
//! | File         | Load address |
//! |--------------|--------------|
//! | `invaders.h` | $0000        |
//! | `invaders.g` | $0800        |
//! | `invaders.f` | $1000        |
//! | `invaders.e` | $1800        |
//!
//! A missing file or a size mismatch is a fatal setup error; no machine is
//! constructed from a partial ROM set.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Size of one ROM image in bytes.
pub const ROM_IMAGE_SIZE: usize = 0x0800;

/// Total size of the assembled ROM region.
pub const ROM_SIZE: usize = 0x2000;

/// The four image files in load order.
const ROM_FILES: [&str; 4] = ["invaders.h", "invaders.g", "invaders.f", "invaders.e"];

/// Failure to assemble a ROM set. Always fatal at setup time.
#[derive(Debug, Error)]
pub enum RomError {
    #[error("failed to read ROM image {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ROM image {} is {actual} bytes, expected {expected}", path.display())]
    WrongSize {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
}

/// The assembled 8 KiB ROM region.
#[derive(Debug)]
pub struct RomSet {
    bytes: Box<[u8; ROM_SIZE]>,
}

impl RomSet {
    /// Load the four image files from the given directory.
    pub fn load(dir: &Path) -> Result<Self, RomError> {
        let mut bytes = Box::new([0u8; ROM_SIZE]);
        for (index, file) in ROM_FILES.iter().enumerate() {
            let path = dir.join(file);
            let image = fs::read(&path).map_err(|source| RomError::Io {
                path: path.clone(),
                source,
            })?;
            if image.len() != ROM_IMAGE_SIZE {
                return Err(RomError::WrongSize {
                    path,
                    expected: ROM_IMAGE_SIZE,
                    actual: image.len(),
                });
            }
            let offset = index * ROM_IMAGE_SIZE;
            bytes[offset..offset + ROM_IMAGE_SIZE].copy_from_slice(&image);
        }
        Ok(Self { bytes })
    }

    /// Build a ROM set from already-assembled bytes (snapshots, tests).
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is not exactly 8192 bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        assert!(
            bytes.len() == ROM_SIZE,
            "ROM region must be exactly {ROM_SIZE} bytes, got {}",
            bytes.len()
        );
        let mut rom = Box::new([0u8; ROM_SIZE]);
        rom.copy_from_slice(bytes);
        Self { bytes: rom }
    }

    /// The assembled ROM region.
    #[must_use]
    pub fn bytes(&self) -> &[u8; ROM_SIZE] {
        &self.bytes
    }
}
