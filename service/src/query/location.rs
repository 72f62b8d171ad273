//! [`Query`] collection related to a single location.

use common::operations::By;

use crate::{
    domain::{location, room},
    read,
};
#[cfg(doc)]
use crate::{domain::Room, Query};

use super::BackendQuery;

/// Queries a [`read::location::Detail`] of the location owning a [`Room`] by
/// its [`room::Id`].
pub type LocationByRoomId =
    BackendQuery<By<read::location::Detail, room::Id>>;

/// Queries a [`read::location::Detail`] by its [`location::Id`].
pub type LocationById = BackendQuery<By<read::location::Detail, location::Id>>;
