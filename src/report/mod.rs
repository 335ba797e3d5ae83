pub mod status;
pub mod table;

pub use status::StatusLine;
pub use table::render_table;
