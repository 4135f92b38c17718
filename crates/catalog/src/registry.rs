use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::debug;

use crate::CategoryCatalog;

/// Shared handle to the current catalog snapshot.
pub struct CatalogRegistry {
	snap: ArcSwap<CategoryCatalog>,
}

impl CatalogRegistry {
	pub fn new(catalog: CategoryCatalog) -> Self {
		Self {
			snap: ArcSwap::from_pointee(catalog),
		}
	}

	pub fn snapshot(&self) -> Arc<CategoryCatalog> {
		self.snap.load_full()
	}

	/// Replaces the catalog wholesale.
	pub fn reload(&self, catalog: CategoryCatalog) {
		debug!(categories = catalog.categories().len(), "Swapping category catalog");
		self.snap.store(Arc::new(catalog));
	}
}

impl Default for CatalogRegistry {
	fn default() -> Self {
		Self::new(CategoryCatalog::default())
	}
}
