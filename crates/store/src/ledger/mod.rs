//! Usage counts and the frequency-first "recent" ranking.

use std::cmp::Ordering;
use std::sync::Arc;

use glyphgrid_primitives::SymbolItem;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::clock::Clock;
use crate::kv::{KvStore, load_or_default, persist};

/// Store key of the usage record list.
pub const USAGE_KEY: &str = "usage";

/// How often and how recently an item was committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
	pub item: SymbolItem,
	pub count: u32,
	/// Logical timestamp in milliseconds.
	pub last_used_at: u64,
}

impl UsageRecord {
	/// Ranking order: count descending, then most recent first.
	fn rank_cmp(&self, other: &Self) -> Ordering {
		other
			.count
			.cmp(&self.count)
			.then_with(|| other.last_used_at.cmp(&self.last_used_at))
			.then_with(|| self.item.cmp(&other.item))
	}
}

/// Persistent multiset of used items.
///
/// Unbounded unless a capacity is given; with a capacity the lowest-ranked
/// records are evicted after each [`record`](Self::record), except the one just used.
pub struct UsageLedger {
	records: FxHashMap<SymbolItem, UsageRecord>,
	latest: u64,
	capacity: Option<usize>,
	clock: Arc<dyn Clock>,
	store: Arc<dyn KvStore>,
}

impl UsageLedger {
	pub fn open(store: Arc<dyn KvStore>, clock: Arc<dyn Clock>, capacity: Option<usize>) -> Self {
		let stored: Vec<UsageRecord> = load_or_default(store.as_ref(), USAGE_KEY);
		let mut records = FxHashMap::default();
		for record in stored.into_iter().filter(|r| r.count > 0) {
			records.insert(record.item.clone(), record);
		}
		let latest = records.values().map(|r| r.last_used_at).max().unwrap_or(0);
		debug!(records = records.len(), "Loaded usage ledger");

		let mut ledger = Self {
			records,
			latest,
			capacity,
			clock,
			store,
		};
		if ledger.evict(None) > 0 {
			ledger.save();
		}
		ledger
	}

	/// Counts one use of `item` at the current logical time.
	pub fn record(&mut self, item: &SymbolItem) {
		let stamp = self.clock.now_millis().max(self.latest.saturating_add(1));
		self.latest = stamp;

		let record = self.records.entry(item.clone()).or_insert_with(|| UsageRecord {
			item: item.clone(),
			count: 0,
			last_used_at: stamp,
		});
		record.count = record.count.saturating_add(1);
		record.last_used_at = stamp;
		trace!(%item, count = record.count, stamp, "Recorded usage");

		self.evict(Some(item));
		self.save();
	}

	/// Up to `limit` items, most used first, ties broken by recency.
	pub fn ranked_recent(&self, limit: usize) -> Vec<SymbolItem> {
		self.ranked().into_iter().take(limit).map(|r| r.item.clone()).collect()
	}

	pub fn get(&self, item: &str) -> Option<&UsageRecord> {
		self.records.get(item)
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	fn ranked(&self) -> Vec<&UsageRecord> {
		let mut ranked: Vec<&UsageRecord> = self.records.values().collect();
		ranked.sort_by(|a, b| a.rank_cmp(b));
		ranked
	}

	/// Drops the lowest-ranked records beyond capacity, sparing `keep`.
	fn evict(&mut self, keep: Option<&SymbolItem>) -> usize {
		let Some(capacity) = self.capacity else {
			return 0;
		};
		let excess = self.records.len().saturating_sub(capacity);
		if excess == 0 {
			return 0;
		}

		let victims: Vec<SymbolItem> = self
			.ranked()
			.into_iter()
			.rev()
			.filter(|r| Some(&r.item) != keep)
			.take(excess)
			.map(|r| r.item.clone())
			.collect();
		for item in &victims {
			self.records.remove(item);
		}
		debug!(evicted = victims.len(), capacity, "Evicted usage records");
		victims.len()
	}

	fn save(&self) {
		let ranked: Vec<&UsageRecord> = self.ranked();
		persist(self.store.as_ref(), USAGE_KEY, &ranked);
	}
}
