pub mod book;
pub mod draft;
pub mod filters;
pub mod pagination;
pub mod raw;
pub mod stats;

pub use book::*;
pub use draft::*;
pub use filters::*;
pub use pagination::*;
pub use raw::*;
pub use stats::*;
