//! [`Contact`] definitions.

use serde::{Deserialize, Serialize};

/// Person to reach about a location.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Contact {
    /// Full name of this [`Contact`].
    pub name: String,

    /// Role of this [`Contact`] at the location, e.g. "event manager".
    pub role: Option<String>,

    /// Phone number of this [`Contact`].
    pub phone: Option<String>,

    /// Email address of this [`Contact`].
    pub email: Option<String>,
}
