//! [`Backend`] implementations of the [`Http`] client.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{
        amenity, location, room, Amenity, City, Contact, EventType, VenueType,
    },
    infra::{backend, Backend},
    read,
};

use super::{codec, Http};

impl Backend<Select<By<Vec<Amenity>, amenity::SearchText>>> for Http {
    type Ok = Vec<Amenity>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Amenity>, amenity::SearchText>>,
    ) -> Result<Self::Ok, Self::Err> {
        let text = by.into_inner();
        self.get(&["services"], &[("query", text.to_string())])
            .await
            .map_err(tracerr::wrap!())
    }
}

impl Backend<Select<By<Vec<City>, ()>>> for Http {
    type Ok = Vec<City>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<City>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.get(&["cities"], &[])
            .await
            .map(|names| codec::names(names, City::new))
            .map_err(tracerr::wrap!())
    }
}

impl Backend<Select<By<Vec<EventType>, ()>>> for Http {
    type Ok = Vec<EventType>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<EventType>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.get(&["event-types"], &[])
            .await
            .map(|names| codec::names(names, EventType::new))
            .map_err(tracerr::wrap!())
    }
}

impl Backend<Select<By<Vec<VenueType>, ()>>> for Http {
    type Ok = Vec<VenueType>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<VenueType>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.get(&["venue-types"], &[])
            .await
            .map(|names| codec::names(names, VenueType::new))
            .map_err(tracerr::wrap!())
    }
}

impl Backend<Select<By<read::location::Detail, room::Id>>> for Http {
    type Ok = read::location::Detail;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<read::location::Detail, room::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id: &str = by.as_inner().as_ref();
        self.get(&["rooms", id, "location"], &[])
            .await
            .map_err(tracerr::wrap!())
    }
}

impl Backend<Select<By<read::location::Detail, location::Id>>> for Http {
    type Ok = read::location::Detail;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<read::location::Detail, location::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id: &str = by.as_inner().as_ref();
        self.get(&["locations", id], &[])
            .await
            .map_err(tracerr::wrap!())
    }
}

impl Backend<Select<By<Vec<Contact>, room::Id>>> for Http {
    type Ok = Vec<Contact>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Contact>, room::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id: &str = by.as_inner().as_ref();
        self.get(&["rooms", id, "contacts"], &[])
            .await
            .map_err(tracerr::wrap!())
    }
}

impl
    Backend<
        Select<By<read::room::search::Page, read::room::search::Selector>>,
    > for Http
{
    type Ok = read::room::search::Page;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::room::search::Page, read::room::search::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let params = codec::search_params(by.as_inner());
        self.get::<codec::RoomsPayload>(&["rooms"], &params)
            .await
            .map(Into::into)
            .map_err(tracerr::wrap!())
    }
}
