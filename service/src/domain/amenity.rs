//! [`Amenity`] definitions.

use serde::{Deserialize, Serialize};

/// Amenity (also called a *service*) attachable to rooms or locations,
/// e.g. catering or a projector.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Amenity {
    /// ID of this [`Amenity`].
    pub id: Id,

    /// Human-readable name of this [`Amenity`].
    #[serde(default)]
    pub name: String,
}

define_name! {
    /// ID of an [`Amenity`].
    struct Id("service_id");
}

define_name! {
    /// Text to look [`Amenity`]s up by.
    struct SearchText("query_text");
}
