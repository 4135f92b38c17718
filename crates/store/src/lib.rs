//! User-owned mutable state and its persistence.
//!
//! * [`KvStore`]: durable string store with [`MemoryStore`] and [`FileStore`]
//! * [`FavoritesStore`]: bounded, user-curated favorites
//! * [`UsageLedger`]: usage counts feeding the recent/frequent ranking

pub mod clock;
pub mod favorites;
pub mod kv;
pub mod ledger;

pub use clock::{Clock, ManualClock, SystemClock};
pub use favorites::{FAVORITES_CAPACITY, FAVORITES_KEY, FavoriteRejection, FavoriteSet, FavoritesStore};
pub use kv::{FileStore, KvStore, MemoryStore, StoreError, load_json, save_json};
pub use ledger::{USAGE_KEY, UsageLedger, UsageRecord};
