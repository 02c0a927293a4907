use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use catalog_core::{Listing, ListingSlot, SlotError};
use catalog_logging::{catalog_debug, catalog_error, catalog_info};
use tempfile::NamedTempFile;

/// Slot name used by the browser build of the catalog.
pub const DEFAULT_SLOT_NAME: &str = "video-listings-storage";

/// Where the slot file lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotConfig {
    pub dir: PathBuf,
    pub name: String,
}

impl SlotConfig {
    pub fn default_in(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            name: DEFAULT_SLOT_NAME.to_string(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.name)
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(self.file_name())
    }
}

/// Collection stored as one pretty-printed JSON array, replaced on every save.
#[derive(Debug)]
pub struct JsonFileSlot {
    config: SlotConfig,
}

impl JsonFileSlot {
    pub fn new(config: SlotConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SlotConfig {
        &self.config
    }

    /// Stages `content` in the slot directory and renames it over the slot
    /// file, so a reader sees either the previous collection or the new one.
    fn replace_contents(&self, content: &str) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.config.dir)?;

        let mut staged = NamedTempFile::new_in(&self.config.dir)?;
        staged.write_all(content.as_bytes())?;
        staged.as_file().sync_all()?;

        let target = self.config.path();
        staged.persist(&target).map_err(|err| err.error)?;
        Ok(target)
    }
}

fn read_slot(path: &Path) -> Result<Option<String>, SlotError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(SlotError::Read(format!("{}: {}", path.display(), err))),
    }
}

impl ListingSlot for JsonFileSlot {
    fn load(&mut self) -> Result<Vec<Listing>, SlotError> {
        let path = self.config.path();
        let Some(content) = read_slot(&path)? else {
            catalog_info!("No slot at {:?}; starting with an empty catalog", path);
            return Ok(Vec::new());
        };

        let listings: Vec<Listing> = serde_json::from_str(&content)
            .map_err(|err| SlotError::Malformed(format!("{}: {}", path.display(), err)))?;
        catalog_info!("Loaded {} listings from {:?}", listings.len(), path);
        Ok(listings)
    }

    fn save(&mut self, listings: &[Listing]) -> Result<(), SlotError> {
        let content = serde_json::to_string_pretty(listings)
            .map_err(|err| SlotError::Write(format!("serialize: {err}")))?;

        match self.replace_contents(&content) {
            Ok(path) => {
                catalog_debug!("Saved {} listings to {:?}", listings.len(), path);
                Ok(())
            }
            Err(err) => {
                catalog_error!("Failed to write slot {:?}: {}", self.config.path(), err);
                Err(SlotError::Write(err.to_string()))
            }
        }
    }
}
