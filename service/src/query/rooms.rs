//! [`Query`] collection related to the multiple [`Room`]s.

use common::operations::By;

use crate::read;
#[cfg(doc)]
use crate::{domain::Room, Query};

use super::BackendQuery;

/// Queries a [`read::room::search::Page`] of [`Room`]s.
pub type SearchRooms = BackendQuery<
    By<read::room::search::Page, read::room::search::Selector>,
>;
