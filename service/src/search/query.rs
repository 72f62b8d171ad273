//! [`SearchQuery`] building.

use crate::{domain::amenity, search::FilterState};

/// Canonical room search request, derived from a [`FilterState`] at the
/// moment of a submission.
///
/// [`Default`] value is the unconstrained search.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct SearchQuery {
    /// City to search in. Empty means any city.
    pub city: String,

    /// Minimal capacity of a room. `0` means any capacity.
    pub capacity: u32,

    /// Indicator whether a location must offer parking.
    pub requires_parking: bool,

    /// IDs of the required amenities, in the order of their selection.
    pub service_ids: Vec<amenity::Id>,

    /// ID of the required event type. Empty means any event type.
    pub event_type_id: String,

    /// ID of the required venue type. Empty means any venue type.
    pub venue_type_id: String,
}

impl SearchQuery {
    /// Indicates whether this [`SearchQuery`] matches any room.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self == &Self::default()
    }
}

impl From<&FilterState> for SearchQuery {
    fn from(filter: &FilterState) -> Self {
        build(filter)
    }
}

/// Builds a [`SearchQuery`] out of the provided [`FilterState`].
///
/// Never fails: an unset capacity becomes the unconstrained `0`, and the
/// amenity lookup text is left out.
#[must_use]
pub fn build(filter: &FilterState) -> SearchQuery {
    SearchQuery {
        city: filter.city().trim().to_owned(),
        capacity: filter.capacity().unwrap_or_default(),
        requires_parking: filter.requires_parking(),
        service_ids: filter
            .selected_services()
            .iter()
            .map(|a| a.id.clone())
            .collect(),
        event_type_id: filter
            .event_type()
            .map(|t| t.id().to_owned())
            .unwrap_or_default(),
        venue_type_id: filter
            .venue_type()
            .map(|t| t.id().to_owned())
            .unwrap_or_default(),
    }
}
