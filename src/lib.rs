pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod progress;
pub mod summary;
pub mod table;
pub mod viz;

pub use error::{IndexError, Result};
pub use index::{build_index, IndexOptions, Record};
pub use table::{read_table, write_table};
