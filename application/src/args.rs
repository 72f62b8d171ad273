//! [`Args`] definitions.

use clap::Parser;
use service::{
    domain::{amenity, Amenity, EventType, VenueType},
    FilterState,
};

/// Command line client of the room search service.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// [`Command`] to perform.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Single action performed per invocation.
#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Searches rooms matching the provided filters.
    Search(Search),

    /// Shows details of the location owning a room.
    Location {
        /// ID of the room.
        room_id: String,
    },

    /// Shows contacts of the location owning a room.
    Contacts {
        /// ID of the room.
        room_id: String,
    },

    /// Looks up services (amenities) by their name.
    Services {
        /// Text to look up.
        text: String,
    },

    /// Lists known cities.
    Cities,

    /// Lists known event types.
    EventTypes,

    /// Lists known venue types.
    VenueTypes,

    /// Lists known cities, event types and venue types at once.
    Catalog,
}

/// Filters of the [`Command::Search`].
#[derive(Clone, Debug, Default, clap::Args)]
pub struct Search {
    /// City to search in.
    #[arg(long)]
    pub city: Option<String>,

    /// Minimal number of people a room must fit.
    ///
    /// Anything but a non-negative integer means any capacity.
    #[arg(long)]
    pub capacity: Option<String>,

    /// Requires a location to offer parking.
    #[arg(long)]
    pub parking: bool,

    /// IDs of the required services, comma-separated or repeated.
    #[arg(long = "service", value_delimiter = ',')]
    pub services: Vec<String>,

    /// Required event type.
    #[arg(long)]
    pub event_type: Option<String>,

    /// Required venue type.
    #[arg(long)]
    pub venue_type: Option<String>,

    /// Page of the results to show.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

impl Search {
    /// Composes a [`FilterState`] out of these [`Search`] filters.
    ///
    /// Blank values are ignored.
    #[must_use]
    pub fn filter(&self) -> FilterState {
        let mut filter = FilterState::default();
        if let Some(city) = &self.city {
            filter.set_city(city.as_str());
        }
        if let Some(capacity) = &self.capacity {
            filter.set_capacity_input(capacity);
        }
        filter.set_requires_parking(self.parking);
        for id in self.services.iter().filter_map(amenity::Id::new) {
            _ = filter.add_service(Amenity {
                name: id.to_string(),
                id,
            });
        }
        filter.select_event_type(
            self.event_type.as_deref().and_then(EventType::new),
        );
        filter.select_venue_type(
            self.venue_type.as_deref().and_then(VenueType::new),
        );
        filter
    }
}
