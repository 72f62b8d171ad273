//! Performing of a single [`Command`].

use service::{
    overlay::{self, Data},
    query::{ListCities, ListEventTypes, ListServices, ListVenueTypes},
    search::Catalog,
    FilterState, InvalidArgument, OverlayLoader, Query as _,
    SearchController,
};
use tracing as log;

use crate::{args, config, render, Command, Error, Service};

/// Performs the provided [`Command`] via the [`Service`] and renders its
/// outcome.
///
/// # Errors
///
/// If the [`Command`] arguments are malformed, or the remote search backend
/// fails.
pub async fn perform(
    command: Command,
    service: &Service,
    conf: config::Search,
) -> Result<String, Error> {
    match command {
        Command::Search(filters) => search(&filters, service, conf).await,
        Command::Location { room_id } => {
            open_overlay(overlay::Kind::Location, &room_id, service).await
        }
        Command::Contacts { room_id } => {
            open_overlay(overlay::Kind::Contacts, &room_id, service).await
        }
        Command::Services { text } => services(&text, service).await,
        Command::Cities => {
            let cities = service.execute(ListCities::by(())).await?;
            Ok(render::names(&cities))
        }
        Command::EventTypes => {
            let types = service.execute(ListEventTypes::by(())).await?;
            Ok(render::names(&types))
        }
        Command::VenueTypes => {
            let types = service.execute(ListVenueTypes::by(())).await?;
            Ok(render::names(&types))
        }
        Command::Catalog => {
            let catalog = Catalog::load(service).await?;
            Ok(render::catalog(&catalog))
        }
    }
}

/// Submits the [`args::Search`] filters and moves to the requested page.
async fn search(
    args: &args::Search,
    service: &Service,
    conf: config::Search,
) -> Result<String, Error> {
    let mut ctrl = SearchController::new(conf.ordering);

    let fetch = ctrl.submit(&args.filter());
    _ = ctrl.run(service, fetch).await;
    if args.page > 1 && ctrl.error().is_none() {
        let fetch = ctrl.change_page(args.page);
        _ = ctrl.run(service, fetch).await;
    }
    if let Some(e) = ctrl.error() {
        return Err(Error::Failed(e.to_owned()));
    }

    log::info!(
        "found {} rooms on page {}",
        ctrl.rooms().len(),
        ctrl.current_page(),
    );
    Ok(render::rooms(&ctrl, conf.window_size))
}

/// Opens an overlay of the provided [`overlay::Kind`] for a room.
async fn open_overlay(
    kind: overlay::Kind,
    room_id: &str,
    service: &Service,
) -> Result<String, Error> {
    let mut loader = OverlayLoader::new();

    let load = loader.open(kind, room_id)?;
    _ = loader.run(service, load).await;
    if let Some(e) = loader.error() {
        return Err(Error::Failed(e.to_owned()));
    }

    Ok(match loader.data() {
        Some(Data::Location(detail)) => render::location(detail),
        Some(Data::Contacts(contacts)) => render::contacts(contacts),
        None => String::new(),
    })
}

/// Looks up services by the provided `text`.
async fn services(text: &str, service: &Service) -> Result<String, Error> {
    let mut filter = FilterState::default();
    filter.set_service_search_text(text);
    let text = filter
        .service_lookup()
        .ok_or(InvalidArgument::blank("query_text"))?;

    let amenities = service.execute(ListServices::by(text)).await?;
    Ok(render::amenities(&amenities))
}
