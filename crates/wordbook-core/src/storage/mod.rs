//! Entry storage: the data model, the persisted-document backends, and the
//! in-memory `EntryStore` that ties them together.

pub mod document;
pub mod json_file;
pub mod memory;
pub mod store;
pub mod traits;
pub mod types;
mod validation;

pub use json_file::JsonFileBackend;
pub use memory::MemoryBackend;
pub use store::{ChangeListener, EntryStore, StoreState};
pub use traits::DocumentBackend;
pub use types::Entry;
pub use validation::validate_entry_fields;
