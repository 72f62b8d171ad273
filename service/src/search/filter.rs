//! [`FilterState`] definitions.

use crate::domain::{amenity, Amenity, EventType, VenueType};

/// Uncommitted search criteria as edited by a user.
///
/// Mutating a [`FilterState`] never touches the network: it is committed only
/// once submitted to a [`search::Controller`].
///
/// [`search::Controller`]: crate::search::Controller
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FilterState {
    /// Name of the city to search in. Empty means any city.
    city: String,

    /// Minimal capacity of a room. [`None`] means any capacity.
    capacity: Option<u32>,

    /// Indicator whether a location must offer parking.
    requires_parking: bool,

    /// Selected [`Amenity`]s, unique by ID, in the order of selection.
    selected_services: Vec<Amenity>,

    /// Selected [`EventType`], if any.
    event_type: Option<EventType>,

    /// Selected [`VenueType`], if any.
    venue_type: Option<VenueType>,

    /// Text to look [`Amenity`]s up by. Never part of a committed search.
    service_search_text: String,
}

impl FilterState {
    /// Returns the city to search in.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Sets the city to search in.
    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    /// Returns the minimal capacity of a room, if set.
    #[must_use]
    pub fn capacity(&self) -> Option<u32> {
        self.capacity
    }

    /// Sets the minimal capacity of a room.
    pub fn set_capacity(&mut self, capacity: Option<u32>) {
        self.capacity = capacity;
    }

    /// Sets the minimal capacity of a room out of raw user `input`.
    ///
    /// Blank, negative or non-numeric input unsets the capacity instead of
    /// being rejected.
    pub fn set_capacity_input(&mut self, input: &str) {
        self.capacity = input.trim().parse().ok();
    }

    /// Indicates whether a location must offer parking.
    #[must_use]
    pub fn requires_parking(&self) -> bool {
        self.requires_parking
    }

    /// Sets whether a location must offer parking.
    pub fn set_requires_parking(&mut self, required: bool) {
        self.requires_parking = required;
    }

    /// Flips whether a location must offer parking.
    pub fn toggle_requires_parking(&mut self) {
        self.requires_parking = !self.requires_parking;
    }

    /// Returns the selected [`Amenity`]s in the order of selection.
    #[must_use]
    pub fn selected_services(&self) -> &[Amenity] {
        &self.selected_services
    }

    /// Selects the provided [`Amenity`].
    ///
    /// Returns `false` if an [`Amenity`] with the same ID is selected already,
    /// leaving the selection intact.
    pub fn add_service(&mut self, amenity: Amenity) -> bool {
        if self.selected_services.iter().any(|a| a.id == amenity.id) {
            return false;
        }
        self.selected_services.push(amenity);
        true
    }

    /// Deselects the [`Amenity`] with the provided ID.
    ///
    /// Returns `false` if no such [`Amenity`] was selected.
    pub fn remove_service(&mut self, id: &amenity::Id) -> bool {
        let before = self.selected_services.len();
        self.selected_services.retain(|a| &a.id != id);
        self.selected_services.len() != before
    }

    /// Returns the selected [`EventType`], if any.
    #[must_use]
    pub fn event_type(&self) -> Option<&EventType> {
        self.event_type.as_ref()
    }

    /// Selects the provided [`EventType`], or clears the selection.
    pub fn select_event_type(&mut self, event_type: Option<EventType>) {
        self.event_type = event_type;
    }

    /// Returns the selected [`VenueType`], if any.
    #[must_use]
    pub fn venue_type(&self) -> Option<&VenueType> {
        self.venue_type.as_ref()
    }

    /// Selects the provided [`VenueType`], or clears the selection.
    pub fn select_venue_type(&mut self, venue_type: Option<VenueType>) {
        self.venue_type = venue_type;
    }

    /// Returns the text to look [`Amenity`]s up by.
    #[must_use]
    pub fn service_search_text(&self) -> &str {
        &self.service_search_text
    }

    /// Sets the text to look [`Amenity`]s up by.
    pub fn set_service_search_text(&mut self, text: impl Into<String>) {
        self.service_search_text = text.into();
    }

    /// Returns the [`amenity::SearchText`] to look [`Amenity`]s up by, unless
    /// the entered text is blank.
    #[must_use]
    pub fn service_lookup(&self) -> Option<amenity::SearchText> {
        amenity::SearchText::new(&self.service_search_text)
    }

    /// Resets all the criteria to their unconstrained defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
