//! [`Room`]-related read definitions.

#[cfg(doc)]
use crate::domain::Room;

pub mod search {
    //! [`Room`] search definitions.

    use common::define_pagination;

    use crate::{domain::Room, search::SearchQuery};

    define_pagination!(Room);

    /// Selector of a single [`Page`] of [`Room`]s matching a [`SearchQuery`].
    #[derive(Clone, Debug, Eq, Hash, PartialEq)]
    pub struct Selector {
        /// [`SearchQuery`] to match [`Room`]s against.
        pub query: SearchQuery,

        /// Number of the requested [`Page`], starting from `1`.
        pub page: u32,
    }

    impl Selector {
        /// Creates a new [`Selector`] of the given `page`.
        ///
        /// Page numbers below `1` select the first [`Page`].
        #[must_use]
        pub fn new(query: SearchQuery, page: u32) -> Self {
            Self {
                query,
                page: page.max(1),
            }
        }
    }
}
