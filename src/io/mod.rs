//! Input helpers.
//!
//! - request parsing from argv tokens or a reader (`request`)
//! - table source parsing and file loading (`table_file`)

pub mod request;
pub mod table_file;

pub use request::*;
pub use table_file::*;
