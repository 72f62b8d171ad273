//! [`Query`] collection related to [`Contact`]s.

use common::operations::By;

use crate::domain::{room, Contact};
#[cfg(doc)]
use crate::{domain::Room, Query};

use super::BackendQuery;

/// Queries [`Contact`]s of the location owning a [`Room`] by its
/// [`room::Id`].
pub type ContactsByRoomId = BackendQuery<By<Vec<Contact>, room::Id>>;
