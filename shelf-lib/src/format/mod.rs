//! Contains the [`Render`] trait and its implementations, [`Text`] and [`Html`].

mod html;
mod text;

use crate::view::{DetailsView, GridView, Visibility};
pub use html::Html;
pub use text::Text;

/// The state of both regions at one point in time, see [`crate::Shelf::page`].
#[derive(Clone, Copy, Debug)]
pub struct Page<'a> {
    /// Which regions are showing.
    pub visibility: Visibility,
    /// Current text of the search box.
    pub query: &'a str,
    /// Content of the grid region.
    pub grid: &'a GridView,
    /// Content of the details region, if a book was ever selected.
    pub details: Option<&'a DetailsView>,
}

/// An output medium for the view models.
///
/// Renders only read the view models; all decisions about what is shown have already been made
/// when the [`GridView`] or [`DetailsView`] was built.
pub trait Render {
    /// Render the grid region.
    fn grid(grid: &GridView) -> String;

    /// Render the details region.
    fn details(details: &DetailsView) -> String;

    /// Render a whole page.
    ///
    /// The default shows only the visible region.
    fn page(page: &Page<'_>) -> String {
        match page.details {
            Some(details) if page.visibility.details => Self::details(details),
            _ => Self::grid(page.grid),
        }
    }

    /// The display name of the format.
    fn name() -> &'static str;

    /// The file extension associated with this format.
    fn ext() -> &'static str;
}
