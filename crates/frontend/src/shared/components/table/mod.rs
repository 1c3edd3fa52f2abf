pub mod sortable_header_cell;

pub use sortable_header_cell::{SortDirection, SortableHeaderCell};
