//! Location-related read definitions.

use serde::{Deserialize, Serialize};

use crate::domain::{
    location, Amenity, City, Contact, EventType, Room, VenueType,
};

/// Full record of a location, as shown in a location overlay.
///
/// Absent lists are read as empty ones.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Detail {
    /// ID of the location.
    pub id: Option<location::Id>,

    /// Human-readable name of the location.
    pub name: String,

    /// [`City`] the location resides in.
    pub city: Option<City>,

    /// Postal address of the location.
    pub address: Option<String>,

    /// Indicator whether the location offers parking.
    pub parking: bool,

    /// [`Amenity`]s offered by the location.
    #[serde(alias = "services")]
    pub amenities: Vec<Amenity>,

    /// [`EventType`]s the location hosts.
    pub event_types: Vec<EventType>,

    /// [`VenueType`] of the location.
    pub venue_type: Option<VenueType>,

    /// [`Room`]s of the location.
    pub rooms: Vec<Room>,

    /// [`Contact`]s of the location.
    pub contacts: Vec<Contact>,
}

impl Detail {
    /// Indicates whether this [`Detail`] carries no data at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
