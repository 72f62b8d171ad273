//! [`Catalog`] of filter options.

use futures::try_join;
use tracing as log;

use crate::{
    domain::{City, EventType, VenueType},
    query::{ListCities, ListEventTypes, ListVenueTypes, Query},
};

/// Options to pick filter values from.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Catalog {
    /// Known [`City`]s.
    pub cities: Vec<City>,

    /// Known [`EventType`]s.
    pub event_types: Vec<EventType>,

    /// Known [`VenueType`]s.
    pub venue_types: Vec<VenueType>,
}

impl Catalog {
    /// Loads the whole [`Catalog`] concurrently.
    ///
    /// # Errors
    ///
    /// If any of the option lists fails to load.
    pub async fn load<S, E>(service: &S) -> Result<Self, E>
    where
        S: Query<ListCities, Ok = Vec<City>, Err = E>
            + Query<ListEventTypes, Ok = Vec<EventType>, Err = E>
            + Query<ListVenueTypes, Ok = Vec<VenueType>, Err = E>,
    {
        let (cities, event_types, venue_types) = try_join!(
            service.execute(ListCities::by(())),
            service.execute(ListEventTypes::by(())),
            service.execute(ListVenueTypes::by(())),
        )?;
        log::debug!(
            "loaded catalog of {} cities, {} event types and {} venue types",
            cities.len(),
            event_types.len(),
            venue_types.len(),
        );
        Ok(Self {
            cities,
            event_types,
            venue_types,
        })
    }
}
