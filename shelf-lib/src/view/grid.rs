use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::{catalog::Book, config::Sources};

/// Shown in place of a grid cover that is missing or fails to load.
pub const NO_COVER_LABEL: &str = "No Cover";
/// Shown instead of cards when nothing matches.
pub const NO_RESULTS_MESSAGE: &str = "No books match your search.";
/// Shown in the grid until the catalog has been loaded.
pub const LOADING_MESSAGE: &str = "Loading catalog...";
/// Shown in the grid when the catalog could not be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load database.";

// Characters left alone by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// What to show when an image cannot be displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Placeholder {
    /// A short text label.
    Label(&'static str),
    /// Another image, expected to always load.
    Image(String),
}

/// A cover image together with what replaces it if loading fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cover {
    /// An image that should be loaded from `url`.
    Image {
        /// Where the image is served from.
        url: String,
        /// Substituted when the image fails to load.
        fallback: Placeholder,
    },
    /// No image is available, show the placeholder directly.
    Missing(Placeholder),
}

impl Cover {
    /// The cover for a grid card, a `No Cover` label when the book has no ISBN.
    #[must_use]
    pub fn for_grid(isbn: &str, sources: &Sources) -> Self {
        let fallback = Placeholder::Label(NO_COVER_LABEL);
        if isbn.is_empty() {
            Self::Missing(fallback)
        } else {
            Self::Image {
                url: sources.grid_cover_url(isbn),
                fallback,
            }
        }
    }

    /// The large cover for the details page, which falls back to a placeholder image.
    #[must_use]
    pub fn for_details(isbn: &str, sources: &Sources) -> Self {
        Self::Image {
            url: sources.details_cover_url(isbn),
            fallback: Placeholder::Image(sources.cover_placeholder_url.clone()),
        }
    }

    /// The cover to show once the image failed to load.
    #[must_use]
    pub fn on_load_failure(self) -> Self {
        match self {
            Self::Image { fallback, .. } => Self::Missing(fallback),
            missing @ Self::Missing(_) => missing,
        }
    }

    /// The image URL, if there is one to load.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Image { url, .. } => Some(url),
            Self::Missing(_) => None,
        }
    }
}

/// The payload a card hands to the details lookup when it is selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailsRequest {
    isbn: String,
    encoded_title: String,
}

impl DetailsRequest {
    /// Create a request from an already sanitized ISBN and a plain title.
    #[must_use]
    pub fn new(isbn: String, title: &str) -> Self {
        Self {
            isbn,
            encoded_title: utf8_percent_encode(title, COMPONENT).to_string(),
        }
    }

    /// The sanitized ISBN, empty when the book has none.
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// The title as carried by the payload, percent encoded.
    #[must_use]
    pub fn encoded_title(&self) -> &str {
        &self.encoded_title
    }

    /// The decoded title.
    #[must_use]
    pub fn title(&self) -> Cow<'_, str> {
        percent_decode_str(&self.encoded_title).decode_utf8_lossy()
    }
}

/// One book in the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    /// Cover image or placeholder.
    pub cover: Cover,
    /// Title as it appears in the catalog.
    pub title: String,
    /// Author or `Unknown`.
    pub author: String,
    /// Payload for the details lookup.
    pub request: DetailsRequest,
}

impl Card {
    /// Build the card for a single book.
    #[must_use]
    pub fn new(book: &Book, sources: &Sources) -> Self {
        let isbn = book.clean_isbn();
        Self {
            cover: Cover::for_grid(&isbn, sources),
            title: book.title().to_owned(),
            author: book.author_or_unknown().to_owned(),
            request: DetailsRequest::new(isbn, book.title()),
        }
    }
}

/// Content of the grid region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GridView {
    /// The catalog has not been loaded yet.
    #[default]
    Loading,
    /// One card per book, in catalog order. Never empty.
    Cards(Vec<Card>),
    /// Nothing to show for the current search.
    NoResults,
    /// The catalog could not be loaded.
    LoadFailed,
}

impl GridView {
    /// Lay out `books` as cards, or the empty state when there are none.
    #[must_use]
    pub fn new<'a, I>(books: I, sources: &Sources) -> Self
    where
        I: IntoIterator<Item = &'a Book>,
    {
        let cards: Vec<_> = books
            .into_iter()
            .map(|book| Card::new(book, sources))
            .collect();

        if cards.is_empty() {
            Self::NoResults
        } else {
            Self::Cards(cards)
        }
    }

    /// The cards in the grid, empty when a message is shown instead.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match self {
            Self::Cards(cards) => cards,
            Self::Loading | Self::NoResults | Self::LoadFailed => &[],
        }
    }

    /// Mutable access to the cards, used to swap covers that failed to load.
    pub fn cards_mut(&mut self) -> &mut [Card] {
        match self {
            Self::Cards(cards) => cards,
            Self::Loading | Self::NoResults | Self::LoadFailed => &mut [],
        }
    }

    /// The message shown instead of cards, if any.
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Cards(_) => None,
            Self::Loading => Some(LOADING_MESSAGE),
            Self::NoResults => Some(NO_RESULTS_MESSAGE),
            Self::LoadFailed => Some(LOAD_FAILED_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books() -> Vec<Book> {
        vec![
            Book::new("Dune", Some("Herbert"), Some("978-0441013593")),
            Book::new("Anathem", None, None),
            Book::new("Solaris", Some(""), Some("n/a")),
        ]
    }

    #[test]
    fn empty_input_renders_only_no_results() {
        let none: [Book; 0] = [];
        let grid = GridView::new(&none, &Sources::default());

        assert_eq!(GridView::NoResults, grid);
        assert!(grid.cards().is_empty());
        assert_eq!(Some("No books match your search."), grid.message());
    }

    #[test]
    fn one_card_per_book_in_order() {
        let books = books();
        let grid = GridView::new(&books, &Sources::default());
        let titles: Vec<_> = grid.cards().iter().map(|c| c.title.as_str()).collect();

        assert_eq!(vec!["Dune", "Anathem", "Solaris"], titles);
        assert_eq!(None, grid.message());
    }

    #[test]
    fn card_with_isbn_has_grid_cover_and_label_fallback() {
        let card = Card::new(&books()[0], &Sources::default());

        assert_eq!(
            Cover::Image {
                url: "https://covers.openlibrary.org/b/isbn/9780441013593-M.jpg?default=false"
                    .to_owned(),
                fallback: Placeholder::Label("No Cover"),
            },
            card.cover
        );
        assert_eq!("Herbert", card.author);
        assert_eq!("9780441013593", card.request.isbn());
    }

    #[test]
    fn card_without_usable_isbn_shows_placeholder_and_unknown_author() {
        let books = books();
        for book in &books[1..] {
            let card = Card::new(book, &Sources::default());

            assert_eq!(Cover::Missing(Placeholder::Label("No Cover")), card.cover);
            assert_eq!("Unknown", card.author);
            assert_eq!("", card.request.isbn());
        }
    }

    #[test]
    fn failed_image_is_replaced_by_its_fallback() {
        let cover = Cover::for_details("1", &Sources::default()).on_load_failure();

        assert_eq!(
            Cover::Missing(Placeholder::Image(
                "https://via.placeholder.com/300x450?text=No+Cover".to_owned()
            )),
            cover
        );
        assert_eq!(None, cover.url());
    }

    #[test]
    fn request_title_is_encoded_like_a_uri_component() {
        let request = DetailsRequest::new(String::new(), "Harry Potter & the Philosopher's Stone");

        assert_eq!(
            "Harry%20Potter%20%26%20the%20Philosopher's%20Stone",
            request.encoded_title()
        );
        assert_eq!("Harry Potter & the Philosopher's Stone", request.title());
    }

    #[test]
    fn non_ascii_title_survives_the_payload() {
        let request = DetailsRequest::new("1".to_owned(), "Cien años de soledad");

        assert_eq!("Cien%20a%C3%B1os%20de%20soledad", request.encoded_title());
        assert_eq!("Cien años de soledad", request.title());
    }
}
