//! Dynamic attribute container: fields acquired at runtime, addressed by
//! interned name, one value slot shared by each read/write name pair.

pub mod dispatch;
pub mod object;
pub mod slot;
pub mod symbol;

pub use dispatch::Dispatch;
pub use object::OpenStruct;
pub use slot::{SlotLimitError, MAX_SLOTS};
pub use symbol::{Interner, Symbol, WRITE_MARKER};
