//! In-memory scaffold catalog with built-in scaffolds.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use pcreate_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, Scaffold, ScaffoldCatalog},
    },
    error::PcreateResult,
};
use tracing::debug;

use crate::{builtin_scaffolds, filesystem::LocalFilesystem};

const RESOURCE: &str = "scaffold catalog";

/// Thread-safe in-memory scaffold catalog, ordered by name.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<BTreeMap<String, Arc<dyn Scaffold>>>>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with the built-in scaffolds writing to the local disk.
    pub fn with_builtin() -> PcreateResult<Self> {
        Self::with_builtin_on(Arc::new(LocalFilesystem::new()))
    }

    /// Create a catalog with the built-in scaffolds writing through `filesystem`.
    pub fn with_builtin_on(filesystem: Arc<dyn Filesystem>) -> PcreateResult<Self> {
        let catalog = Self::new();
        for scaffold in builtin_scaffolds::all_scaffolds(filesystem) {
            catalog.register(scaffold)?;
        }
        Ok(catalog)
    }

    /// Register a scaffold, replacing any scaffold with the same name.
    pub fn register(&self, scaffold: impl Scaffold + 'static) -> PcreateResult<()> {
        self.register_shared(Arc::new(scaffold))
    }

    /// Register an already shared scaffold.
    pub fn register_shared(&self, scaffold: Arc<dyn Scaffold>) -> PcreateResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned { resource: RESOURCE })?;

        let name = scaffold.name().to_owned();
        if inner.insert(name.clone(), scaffold).is_some() {
            debug!(scaffold = %name, "Replaced registered scaffold");
        }
        Ok(())
    }

    /// Get the number of scaffolds.
    pub fn len(&self) -> PcreateResult<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned { resource: RESOURCE })?;
        Ok(inner.len())
    }

    /// Check if catalog is empty.
    pub fn is_empty(&self) -> PcreateResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl ScaffoldCatalog for InMemoryCatalog {
    fn list(&self) -> PcreateResult<Vec<Arc<dyn Scaffold>>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned { resource: RESOURCE })?;

        Ok(inner.values().cloned().collect())
    }

    fn get(&self, name: &str) -> PcreateResult<Option<Arc<dyn Scaffold>>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned { resource: RESOURCE })?;

        Ok(inner.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{filesystem::MemoryFilesystem, scaffold::TemplateScaffold};

    fn fs() -> Arc<dyn Filesystem> {
        Arc::new(MemoryFilesystem::new())
    }

    #[test]
    fn lists_by_name() {
        let catalog = InMemoryCatalog::new();
        catalog.register(TemplateScaffold::new("zeta", "z", fs())).unwrap();
        catalog.register(TemplateScaffold::new("alpha", "a", fs())).unwrap();

        let names: Vec<String> = catalog
            .list()
            .unwrap()
            .iter()
            .map(|s| s.name().to_owned())
            .collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn register_replaces_same_name() {
        let catalog = InMemoryCatalog::new();
        catalog.register(TemplateScaffold::new("one", "old", fs())).unwrap();
        catalog.register(TemplateScaffold::new("one", "new", fs())).unwrap();

        assert_eq!(catalog.len().unwrap(), 1);
        let found = catalog.get("one").unwrap().unwrap();
        assert_eq!(found.summary(), "new");
    }

    #[test]
    fn get_missing_is_none() {
        assert!(InMemoryCatalog::new().get("nope").unwrap().is_none());
        assert!(InMemoryCatalog::new().is_empty().unwrap());
    }

    #[test]
    fn builtin_catalog_has_starter_and_alchemy() {
        let catalog = InMemoryCatalog::with_builtin_on(fs()).unwrap();
        assert!(catalog.get("starter").unwrap().is_some());
        assert!(catalog.get("alchemy").unwrap().is_some());
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let catalog = InMemoryCatalog::new();
        let shared = catalog.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shared.inner.write().unwrap();
            panic!("poison the catalog lock");
        })
        .join();

        assert!(catalog.len().is_err());
        assert!(catalog.list().is_err());
        assert!(catalog.register(TemplateScaffold::new("x", "x", fs())).is_err());
    }
}
