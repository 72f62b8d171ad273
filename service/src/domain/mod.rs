//! Domain definitions.

/// Defines a non-blank [`String`] newtype with surrounding whitespace
/// trimmed off.
///
/// The `$argument` literal names the value in [`InvalidArgument`] errors.
///
/// [`InvalidArgument`]: crate::InvalidArgument
macro_rules! define_name {
    (
        $(#[$attr:meta])*
        struct $name:ident($argument:literal);
    ) => {
        $(#[$attr])*
        #[derive(
            ::derive_more::AsRef,
            Clone,
            Debug,
            ::serde::Deserialize,
            ::derive_more::Display,
            Eq,
            Hash,
            ::derive_more::Into,
            Ord,
            PartialEq,
            PartialOrd,
            ::serde::Serialize,
        )]
        #[as_ref(forward)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            #[doc = concat!(
                "Creates a new [`", stringify!($name), "`] if the given ",
                "`value` is not blank.",
            )]
            ///
            /// Surrounding whitespace is trimmed off.
            #[must_use]
            pub fn new(value: impl AsRef<str>) -> Option<Self> {
                let value = value.as_ref().trim();
                (!value.is_empty()).then(|| Self(value.to_owned()))
            }

            #[doc = concat!(
                "Returns this [`", stringify!($name), "`] as a string slice.",
            )]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::InvalidArgument;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s).ok_or($crate::InvalidArgument::blank($argument))
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::InvalidArgument;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

pub mod amenity;
pub mod category;
pub mod contact;
pub mod location;
pub mod room;

pub use self::{
    amenity::Amenity,
    category::{City, EventType, VenueType},
    contact::Contact,
    room::Room,
};
