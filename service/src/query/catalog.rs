//! [`Query`] collection of the filter option catalogs.

use common::operations::By;

use crate::domain::{amenity, Amenity, City, EventType, VenueType};
#[cfg(doc)]
use crate::Query;

use super::BackendQuery;

/// Queries [`Amenity`]s matching an [`amenity::SearchText`].
pub type ListServices = BackendQuery<By<Vec<Amenity>, amenity::SearchText>>;

/// Queries all the known [`City`]s.
pub type ListCities = BackendQuery<By<Vec<City>, ()>>;

/// Queries all the known [`EventType`]s.
pub type ListEventTypes = BackendQuery<By<Vec<EventType>, ()>>;

/// Queries all the known [`VenueType`]s.
pub type ListVenueTypes = BackendQuery<By<Vec<VenueType>, ()>>;
