//! Plain text rendering of the search and overlay state.

use std::fmt::{self, Write as _};

use common::DisplayItem;
use itertools::Itertools as _;
use service::{
    domain::{Amenity, City, Contact, Room},
    read::location::Detail,
    search::Catalog,
    SearchController,
};

/// Renders the current page of the [`SearchController`] along with its
/// pagination controls.
#[must_use]
pub fn rooms(ctrl: &SearchController, window_size: u32) -> String {
    let Some(info) = ctrl.page_info() else {
        return "No results.".to_owned();
    };
    if ctrl.rooms().is_empty() {
        return "No rooms found.".to_owned();
    }

    let mut out = format!(
        "Page {} of {} ({} rooms total)\n",
        info.current_page, info.total_pages, info.total_count,
    );
    for room in ctrl.rooms() {
        _ = writeln!(out, "  {}", self::room(room));
    }
    let controls = ctrl.window(window_size);
    if !controls.is_empty() {
        _ = write!(out, "\n{}", window(&controls, info.current_page));
    }
    out.trim_end().to_owned()
}

/// Renders a single [`Room`] line.
fn room(room: &Room) -> String {
    let mut line =
        format!("{} [{}], up to {}", room.name, room.id, room.capacity);
    if let Some(area) = room.area {
        _ = write!(line, ", {area} m2");
    }
    let place = room
        .location_name
        .iter()
        .map(String::as_str)
        .chain(room.city.as_ref().map(City::id))
        .join(", ");
    if !place.is_empty() {
        _ = write!(line, " ({place})");
    }
    line
}

/// Renders pagination controls, marking the `current` page.
#[must_use]
pub fn window(items: &[DisplayItem], current: u32) -> String {
    items
        .iter()
        .map(|item| match *item {
            DisplayItem::Prev { target: Some(_) } => "<".to_owned(),
            DisplayItem::Prev { target: None } => "(<)".to_owned(),
            DisplayItem::Next { target: Some(_) } => ">".to_owned(),
            DisplayItem::Next { target: None } => "(>)".to_owned(),
            DisplayItem::Page(n) if n == current => format!("[{n}]"),
            DisplayItem::Page(n) => n.to_string(),
            DisplayItem::Ellipsis => "...".to_owned(),
        })
        .join(" ")
}

/// Renders location [`Detail`]s.
#[must_use]
pub fn location(detail: &Detail) -> String {
    if detail.is_empty() {
        return "No location details.".to_owned();
    }

    let mut out = detail.name.clone();
    if let Some(id) = &detail.id {
        _ = write!(out, " [{id}]");
    }
    out.push('\n');
    let address = detail
        .address
        .iter()
        .map(String::as_str)
        .chain(detail.city.as_ref().map(City::id))
        .join(", ");
    if !address.is_empty() {
        _ = writeln!(out, "  Address: {address}");
    }
    _ = writeln!(
        out,
        "  Parking: {}",
        if detail.parking { "yes" } else { "no" },
    );
    if let Some(venue_type) = &detail.venue_type {
        _ = writeln!(out, "  Venue type: {venue_type}");
    }
    _ = writeln!(out, "  Event types: {}", list(&detail.event_types));
    _ = writeln!(
        out,
        "  Services: {}",
        list(detail.amenities.iter().map(|a| &a.name)),
    );
    _ = writeln!(
        out,
        "  Rooms: {}",
        list(detail.rooms.iter().map(|r| &r.name)),
    );
    out.trim_end().to_owned()
}

/// Renders a list of [`Contact`]s.
#[must_use]
pub fn contacts(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts.".to_owned();
    }
    contacts
        .iter()
        .map(|c| {
            let details = c
                .role
                .iter()
                .chain(&c.phone)
                .chain(&c.email)
                .join(", ");
            if details.is_empty() {
                c.name.clone()
            } else {
                format!("{} ({details})", c.name)
            }
        })
        .join("\n")
}

/// Renders a list of [`Amenity`]s.
#[must_use]
pub fn amenities(amenities: &[Amenity]) -> String {
    if amenities.is_empty() {
        return "No services found.".to_owned();
    }
    amenities
        .iter()
        .map(|a| format!("{} [{}]", a.name, a.id))
        .join("\n")
}

/// Renders one name per line.
#[must_use]
pub fn names<T: fmt::Display>(names: &[T]) -> String {
    names.iter().join("\n")
}

/// Renders a [`Catalog`].
#[must_use]
pub fn catalog(catalog: &Catalog) -> String {
    format!(
        "Cities: {}\nEvent types: {}\nVenue types: {}",
        list(&catalog.cities),
        list(&catalog.event_types),
        list(&catalog.venue_types),
    )
}

/// Renders a comma-separated list, or `-` if it's empty.
fn list<T: fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    let out = items.into_iter().join(", ");
    if out.is_empty() {
        "-".to_owned()
    } else {
        out
    }
}
