//! Wire encoding of the remote search service.

use common::PageInfo;
use itertools::Itertools as _;
use serde::Deserialize;

use crate::{
    domain::Room,
    read::room::search::{Page, Selector},
    search::SearchQuery,
};

/// Encodes the provided [`Selector`] into query string parameters.
///
/// Every [`SearchQuery`] field maps to at most one parameter, in a fixed
/// order. Unconstrained fields are omitted, except `requiresParking` and
/// `page`, which are always present.
pub(super) fn search_params(
    selector: &Selector,
) -> Vec<(&'static str, String)> {
    let Selector {
        query:
            SearchQuery {
                city,
                capacity,
                requires_parking,
                service_ids,
                event_type_id,
                venue_type_id,
            },
        page,
    } = selector;

    let mut params = Vec::with_capacity(7);
    if !city.is_empty() {
        params.push(("city", city.clone()));
    }
    if *capacity > 0 {
        params.push(("capacity", capacity.to_string()));
    }
    params.push(("requiresParking", requires_parking.to_string()));
    if !service_ids.is_empty() {
        params.push(("serviceIds", service_ids.iter().join(",")));
    }
    if !event_type_id.is_empty() {
        params.push(("eventType", event_type_id.clone()));
    }
    if !venue_type_id.is_empty() {
        params.push(("venueType", venue_type_id.clone()));
    }
    params.push(("page", page.to_string()));
    params
}

/// Decodes a list of bare names, skipping the blank ones.
pub(super) fn names<T>(
    names: Vec<String>,
    parse: impl Fn(String) -> Option<T>,
) -> Vec<T> {
    names.into_iter().filter_map(parse).collect()
}

/// Payload of a [`Room`]s search response.
#[derive(Debug, Deserialize)]
pub(super) struct RoomsPayload {
    /// [`Room`]s on the requested page.
    #[serde(default)]
    rooms: Vec<Room>,

    /// [`PageInfo`] of the requested page.
    pagination: PageInfo,
}

impl From<RoomsPayload> for Page {
    fn from(payload: RoomsPayload) -> Self {
        let RoomsPayload { rooms, pagination } = payload;
        let len = u32::try_from(rooms.len()).unwrap_or(u32::MAX);
        Page::new(
            rooms,
            PageInfo {
                items_per_page: pagination.items_per_page.max(len),
                ..pagination
            },
        )
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::amenity,
        read::room::search::{Page, Selector},
        search::SearchQuery,
    };

    use super::{search_params, RoomsPayload};

    #[test]
    fn encodes_full_query() {
        let selector = Selector::new(
            SearchQuery {
                city: "berlin".into(),
                capacity: 50,
                requires_parking: true,
                service_ids: vec![
                    amenity::Id::new("s1").unwrap(),
                    amenity::Id::new("s2").unwrap(),
                ],
                event_type_id: "Wedding".into(),
                venue_type_id: "Loft".into(),
            },
            3,
        );

        assert_eq!(
            search_params(&selector),
            [
                ("city", "berlin".to_owned()),
                ("capacity", "50".to_owned()),
                ("requiresParking", "true".to_owned()),
                ("serviceIds", "s1,s2".to_owned()),
                ("eventType", "Wedding".to_owned()),
                ("venueType", "Loft".to_owned()),
                ("page", "3".to_owned()),
            ],
        );
    }

    #[test]
    fn omits_unconstrained_fields() {
        assert_eq!(
            search_params(&Selector::new(SearchQuery::default(), 0)),
            [
                ("requiresParking", "false".to_owned()),
                ("page", "1".to_owned()),
            ],
        );
    }

    #[test]
    fn restores_page_invariants() {
        let payload: RoomsPayload = serde_json::from_str(
            r#"{
                "rooms": [{"id": "r1"}, {"id": "r2"}, {"id": "r3"}],
                "pagination": {
                    "currentPage": 7,
                    "totalPages": 4,
                    "totalCount": 3,
                    "itemsPerPage": 2
                }
            }"#,
        )
        .unwrap();

        let page = Page::from(payload);

        assert_eq!(page.items.len(), 3);
        assert_eq!(page.info.current_page, 4);
        assert_eq!(page.info.items_per_page, 3);
    }
}
