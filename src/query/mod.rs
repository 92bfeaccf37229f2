pub mod filters;
pub mod handlers;
pub mod queries;

pub use filters::{FilterState, FilterTag, SortOption, StatusFilter, TypeFilter};
pub use handlers::{apply_filters, available_categories};
