//! Room search: filter state, query building and the paginated search
//! controller.

pub mod catalog;
pub mod controller;
pub mod filter;
pub mod query;

pub use self::{
    catalog::Catalog,
    controller::{Controller, Fetch, Status},
    filter::FilterState,
    query::{build, SearchQuery},
};

pub use crate::sequence::Settlement;
