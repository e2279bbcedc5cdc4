//! View models for the grid and details regions.
//!
//! These are plain data describing what is visible. Turning them into text or markup is the job
//! of a [`crate::format::Render`].

mod details;
mod grid;

pub use details::{DetailsPage, DetailsView, LOOKUP_FAILED_MESSAGE, NO_ISBN_MESSAGE};
pub use grid::{
    Card, Cover, DetailsRequest, GridView, Placeholder, LOADING_MESSAGE, LOAD_FAILED_MESSAGE,
    NO_COVER_LABEL, NO_RESULTS_MESSAGE,
};

/// Which region of the interface is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    /// The grid of cards and the search box.
    #[default]
    Grid,
    /// The details of a single book.
    Details {
        /// The sanitized ISBN being shown.
        isbn: String,
        /// Title of the book being shown.
        title: String,
    },
}

impl ViewState {
    /// Visibility of each region for this state.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        let grid = matches!(self, Self::Grid);
        Visibility {
            grid,
            search: grid,
            details: !grid,
        }
    }
}

/// Whether each region is visible.
///
/// The grid and search box are shown together and never at the same time as the details.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visibility {
    /// The card grid.
    pub grid: bool,
    /// The search box.
    pub search: bool,
    /// The details region.
    pub details: bool,
}
