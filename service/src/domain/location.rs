//! Location definitions.
//!
//! A location is a venue owning one or more [`Room`]s. Its full record is
//! read as a [`location::Detail`].
//!
//! [`location::Detail`]: crate::read::location::Detail
//! [`Room`]: crate::domain::Room

define_name! {
    /// ID of a location.
    struct Id("location_id");
}

#[cfg(test)]
mod spec {
    use super::Id;

    #[test]
    fn rejects_blank_id() {
        assert!(Id::new("").is_none());
        assert!(Id::new(" \n ").is_none());
        assert_eq!(Id::new(" l-1 ").unwrap().as_str(), "l-1");
        assert_eq!(
            " ".parse::<Id>().unwrap_err().to_string(),
            "invalid `location_id`: must not be empty or whitespace-only",
        );
        assert!(serde_json::from_str::<Id>(r#""  ""#).is_err());
    }
}
