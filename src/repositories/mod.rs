mod json_file_store;
mod traits;

pub use json_file_store::JsonFileStore;
pub use traits::{RecordMap, RecordStore};
