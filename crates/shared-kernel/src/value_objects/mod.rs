// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod threshold;

pub use counts::LineCount;
pub use threshold::MinLineLength;
