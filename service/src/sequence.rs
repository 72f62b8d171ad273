//! Sequencing of asynchronous responses.

use derive_more::Display;
use serde::Deserialize;

/// Ticket identifying a single issued request.
///
/// Tickets are issued in a strictly increasing order by their owner.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[display("#{_0}")]
pub struct Ticket(u64);

/// Policy of applying responses which settle out of their issue order.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseOrder {
    /// Only the response to the most recently issued request is applied,
    /// any other response is discarded as stale.
    #[default]
    LatestIssued,

    /// Every response is applied once it settles, so the most recently
    /// settled one wins.
    LatestSettled,
}

/// Outcome of settling a response identified by a [`Ticket`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Settlement {
    /// The response was applied.
    Applied,

    /// The response was discarded, as a newer request supersedes it.
    Stale,
}

/// Issuer of [`Ticket`]s deciding which of them are still accepted.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Sequencer {
    /// [`ResponseOrder`] of this [`Sequencer`].
    order: ResponseOrder,

    /// Last issued [`Ticket`] number.
    last: u64,

    /// [`Ticket`] numbers up to this one (inclusive) are never accepted.
    floor: u64,
}

impl Sequencer {
    /// Creates a new [`Sequencer`] following the provided [`ResponseOrder`].
    pub(crate) fn new(order: ResponseOrder) -> Self {
        Self {
            order,
            last: 0,
            floor: 0,
        }
    }

    /// Issues a new [`Ticket`].
    pub(crate) fn issue(&mut self) -> Ticket {
        self.last += 1;
        Ticket(self.last)
    }

    /// Stops accepting all the [`Ticket`]s issued so far.
    pub(crate) fn invalidate(&mut self) {
        self.floor = self.last;
    }

    /// Indicates whether a response for the provided [`Ticket`] may be
    /// applied.
    pub(crate) fn accepts(&self, ticket: Ticket) -> bool {
        let Ticket(n) = ticket;
        if n <= self.floor || n > self.last {
            return false;
        }
        match self.order {
            ResponseOrder::LatestIssued => n == self.last,
            ResponseOrder::LatestSettled => true,
        }
    }

    /// Records the response for the provided [`Ticket`] as applied.
    ///
    /// Under [`ResponseOrder::LatestIssued`] the [`Ticket`] is never
    /// accepted again.
    pub(crate) fn complete(&mut self, ticket: Ticket) {
        if self.order == ResponseOrder::LatestIssued {
            self.floor = self.floor.max(ticket.0);
        }
    }
}
