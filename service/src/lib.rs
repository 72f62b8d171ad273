//! Service contains the room search logic: filter state, search
//! pagination and overlay loading on top of a remote search backend.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod domain;
pub mod infra;
pub mod overlay;
pub mod query;
pub mod read;
pub mod search;
pub mod sequence;

use derive_more::{Display, Error};

#[cfg(doc)]
use infra::Backend;

pub use self::{
    overlay::Loader as OverlayLoader,
    query::Query,
    search::{Controller as SearchController, FilterState, SearchQuery},
    sequence::{ResponseOrder, Settlement, Ticket},
};

/// Domain service querying the remote room search [`Backend`].
#[derive(Clone, Debug)]
pub struct Service<B> {
    /// [`Backend`] of this [`Service`].
    backend: B,
}

impl<B> Service<B> {
    /// Creates a new [`Service`] on top of the provided [`Backend`].
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns [`Backend`] of this [`Service`].
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Error of a malformed or missing argument, raised before any request is
/// issued.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
#[display("invalid `{argument}`: {reason}")]
pub struct InvalidArgument {
    /// Name of the rejected argument.
    pub argument: &'static str,

    /// Reason of the rejection.
    pub reason: &'static str,
}

impl InvalidArgument {
    /// Creates a new [`InvalidArgument`] for an empty or blank `argument`.
    #[must_use]
    pub const fn blank(argument: &'static str) -> Self {
        Self {
            argument,
            reason: "must not be empty or whitespace-only",
        }
    }
}
