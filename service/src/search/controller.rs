//! [`Controller`] of a paginated room search.

use std::fmt;

use common::{DisplayItem, PageInfo};
use tracing as log;

use crate::{
    domain::Room,
    query::{Query, SearchRooms},
    read::room::search::{Page, Selector},
    search::{query, FilterState, SearchQuery},
    sequence::{Sequencer, Settlement},
    ResponseOrder, Ticket,
};

/// Status of a [`Controller`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Status {
    /// Nothing was requested yet.
    #[default]
    Idle,

    /// A [`Fetch`] is in flight.
    Loading,

    /// The last applied [`Fetch`] succeeded.
    Success,

    /// The last applied [`Fetch`] failed.
    Failed,
}

/// Single outbound request issued by a [`Controller`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fetch {
    /// [`Ticket`] to [`Controller::settle()`] the outcome with.
    pub ticket: Ticket,

    /// [`Selector`] of the requested [`Page`].
    pub selector: Selector,
}

/// Controller of a paginated room search.
///
/// Owns the committed [`SearchQuery`], the current [`Page`] and the loading
/// status. Every transition is a plain method call, while performing the
/// issued [`Fetch`]es is up to the caller (see [`Controller::run()`]).
#[derive(Clone, Debug)]
pub struct Controller {
    /// [`Sequencer`] of the issued [`Fetch`]es.
    sequencer: Sequencer,

    /// Last committed [`SearchQuery`].
    committed: SearchQuery,

    /// Number of the targeted page.
    page: u32,

    /// Current [`Status`].
    status: Status,

    /// Last successfully fetched [`Page`].
    result: Option<Page>,

    /// User-facing message of the last failure.
    error: Option<String>,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(ResponseOrder::default())
    }
}

impl Controller {
    /// Creates a new [`Controller`] applying responses in the provided
    /// [`ResponseOrder`].
    #[must_use]
    pub fn new(order: ResponseOrder) -> Self {
        Self {
            sequencer: Sequencer::new(order),
            committed: SearchQuery::default(),
            page: 1,
            status: Status::Idle,
            result: None,
            error: None,
        }
    }

    /// Commits the provided [`FilterState`] and requests the first page of
    /// its results.
    pub fn submit(&mut self, filter: &FilterState) -> Fetch {
        self.committed = query::build(filter);
        self.page = 1;
        self.begin()
    }

    /// Requests the given `page` of the last committed [`SearchQuery`].
    ///
    /// The `page` is expected to be a valid one (as produced by
    /// [`Controller::window()`]): no upper bound check is performed.
    pub fn change_page(&mut self, page: u32) -> Fetch {
        self.page = page.max(1);
        self.begin()
    }

    /// Applies the outcome of the [`Fetch`] identified by the `ticket`.
    ///
    /// On success, the page reported by the backend becomes the current one.
    /// On failure, the rooms are cleared and an error message is kept until
    /// the next successful [`Fetch`].
    pub fn settle<E>(
        &mut self,
        ticket: Ticket,
        result: Result<Page, E>,
    ) -> Settlement
    where
        E: fmt::Display,
    {
        if !self.sequencer.accepts(ticket) {
            log::warn!("discarding stale room search response {ticket}");
            return Settlement::Stale;
        }
        self.sequencer.complete(ticket);

        match result {
            Ok(page) => {
                log::debug!(
                    "room search {ticket} succeeded: {} rooms on page {}/{}",
                    page.items.len(),
                    page.info.current_page,
                    page.info.total_pages,
                );
                self.page = page.info.current_page;
                self.result = Some(page);
                self.error = None;
                self.status = Status::Success;
            }
            Err(e) => {
                log::error!("room search {ticket} failed: {e}");
                self.result = None;
                self.error = Some(format!("Failed to load rooms: {e}"));
                self.status = Status::Failed;
            }
        }
        Settlement::Applied
    }

    /// Performs the provided [`Fetch`] via the [`SearchRooms`] [`Query`] and
    /// [settles](Controller::settle) its outcome.
    pub async fn run<S>(&mut self, service: &S, fetch: Fetch) -> Settlement
    where
        S: Query<SearchRooms, Ok = Page, Err: fmt::Display>,
    {
        let Fetch { ticket, selector } = fetch;
        let result = service.execute(SearchRooms::by(selector)).await;
        self.settle(ticket, result)
    }

    /// Returns the current [`Status`].
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Indicates whether a [`Fetch`] is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    /// Returns the last committed [`SearchQuery`].
    #[must_use]
    pub fn committed_query(&self) -> &SearchQuery {
        &self.committed
    }

    /// Returns the number of the current page.
    ///
    /// While [`Status::Loading`], it's the requested page number.
    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.page
    }

    /// Returns the [`Room`]s of the current page.
    ///
    /// Empty until a [`Fetch`] succeeds, and after a failed one.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        self.result.as_ref().map_or(&[], |p| p.items.as_slice())
    }

    /// Returns the [`PageInfo`] of the current page, if any.
    #[must_use]
    pub fn page_info(&self) -> Option<&PageInfo> {
        self.result.as_ref().map(|p| &p.info)
    }

    /// Returns the user-facing message of the last failure, if the last
    /// applied [`Fetch`] failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the pagination controls for the current page, showing at most
    /// `size` page buttons.
    ///
    /// Empty when there are no results or a single page only.
    #[must_use]
    pub fn window(&self, size: u32) -> Vec<DisplayItem> {
        self.result.as_ref().map_or_else(Vec::new, |p| p.window(size))
    }

    /// Issues a new [`Fetch`] of the committed [`SearchQuery`] and the
    /// targeted page.
    fn begin(&mut self) -> Fetch {
        let ticket = self.sequencer.issue();
        self.status = Status::Loading;
        log::debug!(
            "issuing room search {ticket} for page {}: {:?}",
            self.page,
            self.committed,
        );
        Fetch {
            ticket,
            selector: Selector::new(self.committed.clone(), self.page),
        }
    }
}

#[cfg(test)]
mod spec {
    use std::{
        cell::{Cell, RefCell},
        collections::VecDeque,
    };

    use common::{
        operations::{By, Select},
        DisplayItem, PageInfo,
    };

    use crate::{
        domain::{amenity, room, Amenity, Room},
        infra::{backend, Backend},
        read::room::search::{Page, Selector},
        search::{FilterState, SearchQuery},
        ResponseOrder, Service,
    };

    use super::{Controller, Settlement, Status};

    fn page(current: u32, total: u32, ids: &[&str]) -> Page {
        Page::new(
            ids.iter().map(|id| Room {
                id: room::Id::new(id).unwrap(),
                name: format!("Room {id}"),
                capacity: 10,
                area: None,
                location_id: None,
                location_name: None,
                city: None,
            }),
            PageInfo {
                current_page: current,
                total_pages: total,
                total_count: u64::from(total) * 10,
                items_per_page: 10,
            },
        )
    }

    fn berlin() -> FilterState {
        let mut filter = FilterState::default();
        filter.set_city("berlin");
        filter.set_capacity(Some(50));
        filter.set_requires_parking(true);
        _ = filter.add_service(Amenity {
            id: amenity::Id::new("s1").unwrap(),
            name: "Catering".into(),
        });
        filter
    }

    /// [`Backend`] replaying scripted responses and recording requests.
    #[derive(Debug, Default)]
    struct Scripted {
        responses: RefCell<VecDeque<Result<Page, String>>>,
        requests: RefCell<Vec<Selector>>,
        calls: Cell<usize>,
    }

    impl Scripted {
        fn new(
            responses: impl IntoIterator<Item = Result<Page, String>>,
        ) -> Self {
            Self {
                responses: RefCell::new(responses.into_iter().collect()),
                ..Self::default()
            }
        }
    }

    impl Backend<Select<By<Page, Selector>>> for Scripted {
        type Ok = Page;
        type Err = tracerr::Traced<backend::Error>;

        async fn execute(
            &self,
            Select(by): Select<By<Page, Selector>>,
        ) -> Result<Self::Ok, Self::Err> {
            self.calls.set(self.calls.get() + 1);
            self.requests.borrow_mut().push(by.into_inner());
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("unexpected request")
                .map_err(|e| tracerr::new!(backend::Error::Rejected(e)))
        }
    }

    #[test]
    fn submit_resets_to_first_page() {
        let mut ctrl = Controller::default();
        let fetch = ctrl.submit(&berlin());
        assert_eq!(
            ctrl.settle::<String>(fetch.ticket, Ok(page(1, 20, &["r1"]))),
            Settlement::Applied,
        );

        let fetch = ctrl.change_page(7);
        assert_eq!(fetch.selector.page, 7);
        _ = ctrl.settle::<String>(fetch.ticket, Ok(page(7, 20, &["r7"])));
        assert_eq!(ctrl.current_page(), 7);

        let fetch = ctrl.submit(&berlin());
        assert_eq!(fetch.selector.page, 1);
        assert_eq!(ctrl.current_page(), 1);
        assert_eq!(ctrl.status(), Status::Loading);
    }

    #[test]
    fn change_page_keeps_committed_query() {
        let mut ctrl = Controller::default();
        let submitted = ctrl.submit(&berlin());
        let committed = ctrl.committed_query().clone();

        let fetch = ctrl.change_page(3);

        assert_eq!(ctrl.committed_query(), &committed);
        assert_eq!(fetch.selector.query, submitted.selector.query);
        assert_eq!(fetch.selector.page, 3);
    }

    #[test]
    fn change_page_before_submit_is_unconstrained() {
        let mut ctrl = Controller::default();

        let fetch = ctrl.change_page(2);

        assert_eq!(fetch.selector.query, SearchQuery::default());
        assert_eq!(fetch.selector.page, 2);
    }

    #[test]
    fn adopts_page_reported_by_backend() {
        let mut ctrl = Controller::default();
        _ = ctrl.submit(&berlin());

        let fetch = ctrl.change_page(9);
        _ = ctrl.settle::<String>(fetch.ticket, Ok(page(4, 4, &["r1"])));

        assert_eq!(ctrl.current_page(), 4);
        assert_eq!(ctrl.page_info().unwrap().total_pages, 4);
    }

    #[test]
    fn failure_clears_rooms_until_next_success() {
        let mut ctrl = Controller::default();
        let fetch = ctrl.submit(&berlin());
        _ = ctrl.settle::<String>(fetch.ticket, Ok(page(1, 2, &["r1", "r2"])));
        assert_eq!(ctrl.rooms().len(), 2);

        let fetch = ctrl.submit(&berlin());
        _ = ctrl.settle(fetch.ticket, Err("connection reset"));

        assert_eq!(ctrl.status(), Status::Failed);
        assert!(ctrl.rooms().is_empty());
        assert!(ctrl.page_info().is_none());
        assert_eq!(
            ctrl.error(),
            Some("Failed to load rooms: connection reset"),
        );

        let fetch = ctrl.submit(&berlin());
        _ = ctrl.settle::<String>(fetch.ticket, Ok(page(1, 1, &["r3"])));

        assert_eq!(ctrl.status(), Status::Success);
        assert!(ctrl.error().is_none());
        assert_eq!(ctrl.rooms()[0].id, room::Id::new("r3").unwrap());
    }

    #[test]
    fn discards_stale_responses_by_default() {
        let mut ctrl = Controller::default();
        let first = ctrl.submit(&berlin());
        let second = ctrl.change_page(2);

        assert_eq!(
            ctrl.settle::<String>(second.ticket, Ok(page(2, 3, &["r2"]))),
            Settlement::Applied,
        );
        assert_eq!(
            ctrl.settle::<String>(first.ticket, Ok(page(1, 3, &["r1"]))),
            Settlement::Stale,
        );

        assert_eq!(ctrl.current_page(), 2);
        assert_eq!(ctrl.rooms()[0].id, room::Id::new("r2").unwrap());
    }

    #[test]
    fn applies_each_response_once() {
        let mut ctrl = Controller::default();
        let fetch = ctrl.submit(&berlin());

        assert_eq!(
            ctrl.settle::<String>(fetch.ticket, Ok(page(1, 2, &["r1"]))),
            Settlement::Applied,
        );
        assert_eq!(
            ctrl.settle(fetch.ticket, Err("duplicate response")),
            Settlement::Stale,
        );

        assert_eq!(ctrl.status(), Status::Success);
        assert!(ctrl.error().is_none());
        assert_eq!(ctrl.rooms().len(), 1);
    }

    #[test]
    fn latest_settled_order_lets_last_response_win() {
        let mut ctrl = Controller::new(ResponseOrder::LatestSettled);
        let first = ctrl.submit(&berlin());
        let second = ctrl.change_page(2);

        _ = ctrl.settle::<String>(second.ticket, Ok(page(2, 3, &["r2"])));
        assert_eq!(
            ctrl.settle::<String>(first.ticket, Ok(page(1, 3, &["r1"]))),
            Settlement::Applied,
        );

        assert_eq!(ctrl.current_page(), 1);
        assert_eq!(ctrl.rooms()[0].id, room::Id::new("r1").unwrap());
    }

    #[test]
    fn exposes_pagination_window() {
        let mut ctrl = Controller::default();
        assert!(ctrl.window(5).is_empty());

        let fetch = ctrl.change_page(5);
        _ = ctrl.settle::<String>(fetch.ticket, Ok(page(5, 20, &["r1"])));

        let window = ctrl.window(5);
        assert_eq!(window.first(), Some(&DisplayItem::Prev { target: Some(4) }));
        assert_eq!(window.last(), Some(&DisplayItem::Next { target: Some(6) }));
        assert!(window.contains(&DisplayItem::Page(20)));
    }

    #[tokio::test]
    async fn runs_exactly_one_fetch_per_action() {
        let backend = Scripted::new([
            Ok(page(1, 3, &["r1", "r2"])),
            Err("backend is down".to_owned()),
            Ok(page(3, 3, &["r5"])),
        ]);
        let service = Service::new(&backend);
        let mut ctrl = Controller::default();

        let fetch = ctrl.submit(&berlin());
        assert_eq!(ctrl.run(&service, fetch).await, Settlement::Applied);
        assert_eq!(ctrl.status(), Status::Success);
        assert_eq!(ctrl.rooms().len(), 2);

        let fetch = ctrl.change_page(2);
        _ = ctrl.run(&service, fetch).await;
        assert_eq!(ctrl.status(), Status::Failed);
        assert!(ctrl.error().unwrap().contains("backend is down"));

        let fetch = ctrl.change_page(3);
        _ = ctrl.run(&service, fetch).await;
        assert_eq!(ctrl.current_page(), 3);

        assert_eq!(backend.calls.get(), 3);
        let requests = backend.requests.borrow();
        assert_eq!(
            requests.iter().map(|s| s.page).collect::<Vec<_>>(),
            [1, 2, 3],
        );
        assert!(requests.iter().all(|s| s.query.city == "berlin"
            && s.query.capacity == 50
            && s.query.requires_parking));
    }
}
