//! Overlay data loading.

use std::fmt;

use common::define_kind;
use tracing as log;

use crate::{
    domain::{room, Contact},
    query::{ContactsByRoomId, LocationByRoomId, Query},
    read,
    sequence::{Sequencer, Settlement},
    InvalidArgument, ResponseOrder, Ticket,
};

define_kind! {
    #[doc = "Kind of an overlay."]
    enum Kind {
        #[doc = "Details of the location owning a room."]
        Location = 1,

        #[doc = "Contacts of the location owning a room."]
        Contacts = 2,
    }
}

/// Request of an overlay for a single room.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Request {
    /// [`Kind`] of the requested overlay.
    pub kind: Kind,

    /// ID of the room the overlay is opened for.
    pub room_id: room::Id,
}

/// Single outbound lookup issued by a [`Loader`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Load {
    /// [`Ticket`] to [`Loader::settle()`] the outcome with.
    pub ticket: Ticket,

    /// [`Request`] to look up the data for.
    pub request: Request,
}

/// Data shown in an overlay.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Data {
    /// [`Kind::Location`] data.
    Location(read::location::Detail),

    /// [`Kind::Contacts`] data.
    Contacts(Vec<Contact>),
}

impl Data {
    /// Returns the [`Kind`] of this [`Data`].
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Location(_) => Kind::Location,
            Self::Contacts(_) => Kind::Contacts,
        }
    }
}

/// Status of a [`Loader`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Status {
    /// No overlay is open.
    #[default]
    Idle,

    /// Overlay is open and its [`Data`] is being loaded.
    Pending,

    /// Overlay is open with its [`Data`] loaded.
    Ready,

    /// Overlay is open, but its [`Data`] failed to load.
    Failed,
}

/// Loader of the [`Data`] for a single overlay.
///
/// Opening an overlay supersedes the previous one, so only the [`Load`]
/// issued last is ever applied. The [`Loader`] is independent from any
/// search state.
#[derive(Clone, Debug)]
pub struct Loader {
    /// [`Sequencer`] of the issued [`Load`]s.
    sequencer: Sequencer,

    /// Currently open [`Request`], if any.
    request: Option<Request>,

    /// Current [`Status`].
    status: Status,

    /// Loaded [`Data`], if any.
    data: Option<Data>,

    /// User-facing message of the failure, if any.
    error: Option<String>,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    /// Creates a new [`Loader`] with no overlay open.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sequencer: Sequencer::new(ResponseOrder::LatestIssued),
            request: None,
            status: Status::Idle,
            data: None,
            error: None,
        }
    }

    /// Opens an overlay of the provided [`Kind`] for the room with the
    /// provided `room_id`, discarding any previous one.
    ///
    /// # Errors
    ///
    /// If the `room_id` is empty or whitespace-only. Nothing is changed in
    /// such case.
    pub fn open(
        &mut self,
        kind: Kind,
        room_id: &str,
    ) -> Result<Load, InvalidArgument> {
        let room_id = room_id.parse::<room::Id>()?;
        let request = Request { kind, room_id };

        let ticket = self.sequencer.issue();
        log::debug!(
            "issuing {kind} overlay load {ticket} for room `{}`",
            request.room_id,
        );
        self.request = Some(request.clone());
        self.status = Status::Pending;
        self.data = None;
        self.error = None;

        Ok(Load { ticket, request })
    }

    /// Closes the open overlay, discarding any in-flight [`Load`].
    pub fn close(&mut self) {
        self.sequencer.invalidate();
        self.request = None;
        self.status = Status::Idle;
        self.data = None;
        self.error = None;
    }

    /// Applies the outcome of the [`Load`] identified by the `ticket`.
    ///
    /// [`Data`] of a [`Kind`] other than the open one is discarded.
    ///
    /// A failed [`Kind::Contacts`] lookup results in an empty contact list,
    /// while a failed [`Kind::Location`] lookup results in
    /// [`Status::Failed`].
    pub fn settle<E>(
        &mut self,
        ticket: Ticket,
        result: Result<Data, E>,
    ) -> Settlement
    where
        E: fmt::Display,
    {
        let kind = match &self.request {
            Some(req) if self.sequencer.accepts(ticket) => req.kind,
            _ => {
                log::warn!("discarding stale overlay response {ticket}");
                return Settlement::Stale;
            }
        };
        if let Ok(data) = &result {
            if data.kind() != kind {
                log::warn!(
                    "discarding {} overlay response {ticket} for the open \
                     {kind} overlay",
                    data.kind(),
                );
                return Settlement::Stale;
            }
        }
        self.sequencer.complete(ticket);

        match result {
            Ok(data) => {
                log::debug!("{} overlay load {ticket} succeeded", data.kind());
                self.data = Some(data);
                self.error = None;
                self.status = Status::Ready;
            }
            Err(e) => match kind {
                Kind::Contacts => {
                    log::warn!(
                        "contacts overlay load {ticket} failed, \
                         showing no contacts: {e}",
                    );
                    self.data = Some(Data::Contacts(Vec::new()));
                    self.error = None;
                    self.status = Status::Ready;
                }
                Kind::Location => {
                    log::error!("location overlay load {ticket} failed: {e}");
                    self.data = None;
                    self.error =
                        Some(format!("Failed to load location: {e}"));
                    self.status = Status::Failed;
                }
            },
        }
        Settlement::Applied
    }

    /// Performs the provided [`Load`] via the [`LocationByRoomId`] or
    /// [`ContactsByRoomId`] [`Query`] and [settles](Loader::settle) its
    /// outcome.
    pub async fn run<S, E>(&mut self, service: &S, load: Load) -> Settlement
    where
        S: Query<LocationByRoomId, Ok = read::location::Detail, Err = E>
            + Query<ContactsByRoomId, Ok = Vec<Contact>, Err = E>,
        E: fmt::Display,
    {
        let Load {
            ticket,
            request: Request { kind, room_id },
        } = load;
        let result = match kind {
            Kind::Location => service
                .execute(LocationByRoomId::by(room_id))
                .await
                .map(Data::Location),
            Kind::Contacts => service
                .execute(ContactsByRoomId::by(room_id))
                .await
                .map(Data::Contacts),
        };
        self.settle(ticket, result)
    }

    /// Returns the current [`Status`].
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Indicates whether an overlay is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.request.is_some()
    }

    /// Returns the currently open [`Request`], if any.
    #[must_use]
    pub fn request(&self) -> Option<&Request> {
        self.request.as_ref()
    }

    /// Returns the loaded [`Data`], if any.
    #[must_use]
    pub fn data(&self) -> Option<&Data> {
        self.data.as_ref()
    }

    /// Returns the loaded location details, if any.
    #[must_use]
    pub fn location(&self) -> Option<&read::location::Detail> {
        match self.data.as_ref()? {
            Data::Location(detail) => Some(detail),
            Data::Contacts(_) => None,
        }
    }

    /// Returns the loaded [`Contact`]s, if any.
    #[must_use]
    pub fn contacts(&self) -> Option<&[Contact]> {
        match self.data.as_ref()? {
            Data::Contacts(contacts) => Some(contacts),
            Data::Location(_) => None,
        }
    }

    /// Returns the user-facing message of the failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
