//! The view controller tying the catalog, the remote services and the view models together.

use log::{debug, error, info, trace};

use crate::{
    api::{self, Client},
    catalog::Catalog,
    config::Sources,
    format::Page,
    view::{DetailsPage, DetailsRequest, DetailsView, GridView, ViewState, Visibility},
};

/// Identifies one details lookup.
///
/// Only the most recently issued ticket may update the details region, so a slow response to
/// an older selection never replaces a newer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct DetailsTicket(u64);

/// Owns the catalog and the state of both regions.
///
/// Every grid update goes through the same path, which also switches the view back to the
/// grid. The catalog itself is only replaced by [`Shelf::load`].
#[derive(Debug)]
pub struct Shelf<C: Client = reqwest::blocking::Client> {
    client: C,
    sources: Sources,
    catalog: Catalog,
    query: String,
    state: ViewState,
    grid: GridView,
    details: Option<DetailsView>,
    latest: u64,
}

impl<C: Client> Shelf<C> {
    /// Create a shelf that will fetch from `sources` using a default client.
    #[must_use]
    pub fn new(sources: Sources) -> Self {
        Self::with_client(C::default(), sources)
    }

    /// Create a shelf with an existing client.
    #[must_use]
    pub fn with_client(client: C, sources: Sources) -> Self {
        Self {
            client,
            sources,
            catalog: Catalog::default(),
            query: String::new(),
            state: ViewState::Grid,
            grid: GridView::Loading,
            details: None,
            latest: 0,
        }
    }

    /// Fetch the catalog once and show every book in the grid.
    ///
    /// A failure is logged and shown in the grid instead of being returned. Returns whether the
    /// catalog was loaded.
    pub fn load(&mut self) -> bool {
        match api::sheet::load_catalog(&self.client, &self.sources.catalog) {
            Ok(catalog) => {
                info!("Loaded {} books", catalog.len());
                self.catalog = catalog;
                self.show_grid();
                true
            }
            Err(err) => {
                error!("Error fetching sheet '{}': {err}", self.sources.catalog);
                self.show(GridView::LoadFailed);
                false
            }
        }
    }

    /// Filter the whole catalog by `query` and show the matches.
    pub fn search(&mut self, query: &str) -> &GridView {
        trace!("Searching catalog for '{query}'");
        query.clone_into(&mut self.query);
        let grid = GridView::new(self.catalog.search(query), &self.sources);
        self.show(grid)
    }

    /// Go back to the grid showing the whole catalog.
    ///
    /// The last search text is kept as it was.
    pub fn show_grid(&mut self) -> &GridView {
        let grid = GridView::new(self.catalog.books(), &self.sources);
        self.show(grid)
    }

    fn show(&mut self, grid: GridView) -> &GridView {
        self.state = ViewState::Grid;
        // anything still in flight is no longer wanted
        self.latest += 1;
        self.grid = grid;
        &self.grid
    }

    /// Switch to the details region for the selected card.
    ///
    /// Shows the loading message, or the no ISBN message when there is nothing to look up.
    pub fn begin_details(&mut self, request: &DetailsRequest) -> DetailsTicket {
        let title = request.title().into_owned();
        let isbn = request.isbn().to_owned();

        self.latest += 1;
        self.details = Some(if isbn.is_empty() {
            DetailsView::NoIsbn {
                title: title.clone(),
            }
        } else {
            DetailsView::Loading {
                title: title.clone(),
            }
        });
        self.state = ViewState::Details { isbn, title };

        DetailsTicket(self.latest)
    }

    /// Request the details for `isbn` and lay out the outcome.
    ///
    /// Does not touch the shelf, so the result must be handed to [`Shelf::finish_details`].
    /// Failures are logged and turned into [`DetailsView::Failed`].
    #[must_use]
    pub fn fetch_details(&self, isbn: &str, title: &str) -> DetailsView {
        let title = title.to_owned();
        if isbn.is_empty() {
            return DetailsView::NoIsbn { title };
        }

        match api::open_library::get_book_details(&self.client, &self.sources, isbn) {
            Ok(Some(details)) => DetailsView::Found(DetailsPage::new(
                title,
                isbn.to_owned(),
                details,
                &self.sources,
            )),
            Ok(None) => DetailsView::NotFound {
                title,
                isbn: isbn.to_owned(),
            },
            Err(err) => {
                error!("API Error for ISBN '{isbn}': {err}");
                DetailsView::Failed { title }
            }
        }
    }

    /// Show `view` if `ticket` is still the latest lookup.
    ///
    /// Returns `false` when the result was discarded.
    pub fn finish_details(&mut self, ticket: DetailsTicket, view: DetailsView) -> bool {
        if ticket.0 != self.latest {
            debug!("Discarding stale details for '{}'", view.title());
            return false;
        }

        self.details = Some(view);
        true
    }

    /// Look up the selected card and show the outcome.
    pub fn show_details(&mut self, request: &DetailsRequest) -> &DetailsView {
        let ticket = self.begin_details(request);
        let view = self.fetch_details(request.isbn(), &request.title());
        self.finish_details(ticket, view);

        self.details
            .get_or_insert_with(|| DetailsView::Failed {
                title: request.title().into_owned(),
            })
    }

    /// Probe the covers of the cards in the grid and replace those that fail to load.
    ///
    /// Returns how many covers were replaced.
    pub fn check_covers(&mut self) -> usize {
        api::covers::check_covers(&self.client, self.grid.cards_mut())
    }

    /// The loaded catalog, empty until [`Shelf::load`] succeeds.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The last search text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Which region is showing.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Visibility of each region, derived from [`Shelf::state`].
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.state.visibility()
    }

    /// Content of the grid region.
    #[must_use]
    pub const fn grid(&self) -> &GridView {
        &self.grid
    }

    /// Content of the details region, `None` until a book has been selected.
    #[must_use]
    pub const fn details(&self) -> Option<&DetailsView> {
        self.details.as_ref()
    }

    /// Everything a [`crate::format::Render`] needs to draw the current screen.
    #[must_use]
    pub fn page(&self) -> Page<'_> {
        Page {
            visibility: self.visibility(),
            query: &self.query,
            grid: &self.grid,
            details: self.details.as_ref(),
        }
    }
}
