//! Categorical tags used both as search filters and as descriptive
//! attributes of a location.

define_name! {
    /// City a location resides in.
    ///
    /// The name of a [`City`] is its identifier.
    struct City("city");
}

define_name! {
    /// Type of an event a location hosts, e.g. "conference" or "wedding".
    ///
    /// The name of an [`EventType`] is its identifier.
    struct EventType("event_type");
}

define_name! {
    /// Type of a venue, e.g. "hotel" or "loft".
    ///
    /// The name of a [`VenueType`] is its identifier.
    struct VenueType("venue_type");
}

impl City {
    /// Returns the identifier of this [`City`], which is its name.
    #[must_use]
    pub fn id(&self) -> &str {
        self.as_str()
    }
}

impl EventType {
    /// Returns the identifier of this [`EventType`], which is its name.
    #[must_use]
    pub fn id(&self) -> &str {
        self.as_str()
    }
}

impl VenueType {
    /// Returns the identifier of this [`VenueType`], which is its name.
    #[must_use]
    pub fn id(&self) -> &str {
        self.as_str()
    }
}
