pub mod index;
pub mod keys;
pub mod scanner;

pub use index::{BindingIndex, BindingRecord, two_level_label};
pub use keys::{ControllerButton, KeyboardKey, MODIFIER_KEYS, SymbolicKey};
pub use scanner::{ScanEvent, ScanOptions, ScanSummary, SkipReason, scan_tree};
