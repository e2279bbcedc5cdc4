use crate::{api::BookDetails, config::Sources};

use super::Cover;

/// Shown when the selected book has no ISBN to look up.
pub const NO_ISBN_MESSAGE: &str = "No ISBN provided to fetch additional details.";
/// Shown when the details request fails.
pub const LOOKUP_FAILED_MESSAGE: &str = "Error retrieving data from Open Library.";

/// The two column page for a book the API knows about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailsPage {
    /// Large cover, falling back to a placeholder image.
    pub cover: Cover,
    /// Small cover shown next to the title.
    pub thumbnail_url: Option<String>,
    /// Title from the catalog.
    pub title: String,
    /// The sanitized ISBN that was looked up.
    pub isbn: String,
    /// Publication date, when known.
    pub publish_date: Option<String>,
    /// First publisher, when known.
    pub publisher: Option<String>,
    /// Description text.
    pub description: String,
}

impl DetailsPage {
    /// Lay out the details returned for `isbn`.
    #[must_use]
    pub fn new(title: String, isbn: String, details: BookDetails, sources: &Sources) -> Self {
        let BookDetails {
            thumbnail_url,
            publish_date,
            publisher,
            description,
        } = details;

        Self {
            cover: Cover::for_details(&isbn, sources),
            thumbnail_url,
            title,
            isbn,
            publish_date,
            publisher,
            description,
        }
    }
}

/// Content of the details region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailsView {
    /// The request has been sent and not yet answered.
    Loading {
        /// Title of the selected book.
        title: String,
    },
    /// The book has no ISBN so nothing was requested.
    NoIsbn {
        /// Title of the selected book.
        title: String,
    },
    /// The API returned a record.
    Found(DetailsPage),
    /// The API had no record for the ISBN.
    NotFound {
        /// Title of the selected book.
        title: String,
        /// The ISBN that was looked up.
        isbn: String,
    },
    /// The request or its response failed.
    Failed {
        /// Title of the selected book.
        title: String,
    },
}

impl DetailsView {
    /// Title of the book the view is about.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Loading { title }
            | Self::NoIsbn { title }
            | Self::NotFound { title, .. }
            | Self::Failed { title } => title,
            Self::Found(page) => &page.title,
        }
    }

    /// The message shown under the title, `None` for a found page.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Loading { title } => Some(format!("Connecting to Open Library for \"{title}\"...")),
            Self::NoIsbn { .. } => Some(NO_ISBN_MESSAGE.to_owned()),
            Self::Found(_) => None,
            Self::NotFound { isbn, .. } => {
                Some(format!("Could not find extended details for ISBN: {isbn}."))
            }
            Self::Failed { .. } => Some(LOOKUP_FAILED_MESSAGE.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_for_each_outcome() {
        let title = || "Dune".to_owned();

        assert_eq!(
            Some("Connecting to Open Library for \"Dune\"...".to_owned()),
            DetailsView::Loading { title: title() }.message()
        );
        assert_eq!(
            Some("No ISBN provided to fetch additional details.".to_owned()),
            DetailsView::NoIsbn { title: title() }.message()
        );
        assert_eq!(
            Some("Could not find extended details for ISBN: 123.".to_owned()),
            DetailsView::NotFound {
                title: title(),
                isbn: "123".to_owned()
            }
            .message()
        );
        assert_eq!(
            Some("Error retrieving data from Open Library.".to_owned()),
            DetailsView::Failed { title: title() }.message()
        );
    }

    #[test]
    fn found_page_uses_large_cover() {
        let details = BookDetails {
            thumbnail_url: None,
            publish_date: Some("1965".to_owned()),
            publisher: None,
            description: "A desert planet...".to_owned(),
        };
        let page = DetailsPage::new(
            "Dune".to_owned(),
            "9780441013593".to_owned(),
            details,
            &Sources::default(),
        );

        assert_eq!(
            Some("https://covers.openlibrary.org/b/isbn/9780441013593-L.jpg"),
            page.cover.url()
        );

        let view = DetailsView::Found(page);
        assert_eq!("Dune", view.title());
        assert_eq!(None, view.message());
    }
}
