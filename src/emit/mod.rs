pub mod escape;
pub mod header;
pub mod schema;

pub use escape::{escape_c_string, include_guard};
pub use header::{render_header, write_header, TableNames};
pub use schema::write_schema;
