pub mod criteria;
pub mod filter;

pub use criteria::{SearchCriteria, SearchForm};
pub use filter::{filter, matches};
