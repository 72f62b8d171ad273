//! [`Room`] definitions.

use serde::{Deserialize, Serialize};

use crate::domain::{location, City};

/// Bookable unit of a [`location`], as listed in search results.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// ID of this [`Room`].
    pub id: Id,

    /// Human-readable name of this [`Room`].
    #[serde(default)]
    pub name: String,

    /// Maximum number of people this [`Room`] fits.
    #[serde(default)]
    pub capacity: u32,

    /// Area of this [`Room`] in square meters, if known.
    #[serde(default)]
    pub area: Option<u32>,

    /// ID of the [`location`] owning this [`Room`], if known.
    #[serde(default)]
    pub location_id: Option<location::Id>,

    /// Name of the [`location`] owning this [`Room`], if known.
    #[serde(default)]
    pub location_name: Option<String>,

    /// [`City`] this [`Room`] is located in, if known.
    #[serde(default)]
    pub city: Option<City>,
}

define_name! {
    /// ID of a [`Room`].
    struct Id("room_id");
}

#[cfg(test)]
mod spec {
    use super::{Id, Room};

    #[test]
    fn rejects_blank_id() {
        assert!(Id::new("").is_none());
        assert!(Id::new("  \t").is_none());
        assert_eq!(" r-1 ".parse::<Id>().unwrap().to_string(), "r-1");
        assert_eq!(
            "".parse::<Id>().unwrap_err().to_string(),
            "invalid `room_id`: must not be empty or whitespace-only",
        );
    }

    #[test]
    fn decodes_sparse_room() {
        let room: Room =
            serde_json::from_str(r#"{"id": "r-7", "name": "Loft"}"#).unwrap();

        assert_eq!(room.id, Id::new("r-7").unwrap());
        assert_eq!(room.capacity, 0);
        assert!(room.location_id.is_none());
        assert!(room.city.is_none());

        assert!(serde_json::from_str::<Room>(r#"{"id": " "}"#).is_err());
    }
}
