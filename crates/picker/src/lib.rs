//! Symbol and emoji picker navigation.
//!
//! * [`PickerState`]: tab × category × page state with a search overlay
//! * [`PickerOutcome`]: what a key press asks the caller to do

pub mod keys;
pub mod state;
#[cfg(test)]
mod test_support;

pub use keys::PickerOutcome;
pub use state::{PickerContext, PickerState, QUICK_RECALL_SLOTS, SessionEnd};
