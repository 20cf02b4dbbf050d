//! Store module
//!
//! The persistence boundary of the engine:
//! - `traits` - the `KeyValueStore` contract the core consumes
//! - `memory` - HashMap-backed store for tests and embedding
//! - `csv_file` - CSV-file-backed persistent store for the CLI

pub mod csv_file;
pub mod memory;
pub mod traits;

pub use csv_file::CsvStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
