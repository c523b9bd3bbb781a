//! Lazily loaded, per-slot table cache.
//!
//! `TableStore` owns one initialize-once cell per `TableSlot`. A slot is filled
//! on first access from its `TableSource` and never changes afterwards. A failed
//! load leaves the slot empty so the next access tries the source again.

use std::cell::OnceCell;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::io::{LoadError, load_table_file};
use crate::table::{Table, TableSlot};

/// Where tables come from.
pub trait TableSource {
    fn load(&self, slot: TableSlot) -> Result<Table, LoadError>;
}

/// Reads each slot from its fixed file name inside a directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, slot: TableSlot) -> PathBuf {
        self.dir.join(slot.file_name())
    }
}

impl TableSource for DirSource {
    fn load(&self, slot: TableSlot) -> Result<Table, LoadError> {
        let path = self.path_for(slot);
        load_table_file(&path).inspect_err(|e| warn!(slot = %slot, "{e}"))
    }
}

pub struct TableStore {
    source: Box<dyn TableSource>,
    slots: [OnceCell<Table>; 3],
}

impl TableStore {
    pub fn new(source: impl TableSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            slots: [OnceCell::new(), OnceCell::new(), OnceCell::new()],
        }
    }

    /// Convenience for the common case of a table directory.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(DirSource::new(dir))
    }

    /// The slot's table, loading it on first use.
    pub fn table(&self, slot: TableSlot) -> Result<&Table, LoadError> {
        let cell = &self.slots[slot.index()];
        if let Some(table) = cell.get() {
            return Ok(table);
        }

        let table = self.source.load(slot)?;
        if !table.is_ordered() {
            warn!(slot = %slot, "table samples are not ordered by x; interpolation follows stored order");
        }
        info!(slot = %slot, samples = table.len(), "loaded lookup table");
        Ok(cell.get_or_init(|| table))
    }

    /// True once the slot has been loaded successfully.
    pub fn is_loaded(&self, slot: TableSlot) -> bool {
        self.slots[slot.index()].get().is_some()
    }
}

impl std::fmt::Debug for TableStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableStore")
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}
