//! The in-memory catalog of books read from the published spreadsheet.

use std::io::Read;

use log::{debug, trace};

use crate::{Error, ErrorKind};

/// The author shown for a book when the spreadsheet leaves the column blank.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// A single row of the spreadsheet.
///
/// Only the `Title`, `Author` and `ISBN` columns are read, any other column is ignored. Empty
/// cells are treated the same as missing cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Book {
    title: Option<String>,
    author: Option<String>,
    isbn: Option<String>,
}

impl Book {
    /// Create a new [`Book`] from its column values.
    #[must_use]
    pub fn new<S: Into<String>>(title: S, author: Option<S>, isbn: Option<S>) -> Self {
        Self {
            title: Some(title.into()),
            author: author.map(Into::into),
            isbn: isbn.map(Into::into),
        }
    }

    /// The title as it appears in the spreadsheet.
    ///
    /// Books held by a [`Catalog`] always have a title that is not blank.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// The author, if the cell was not empty.
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref().filter(|a| !a.is_empty())
    }

    /// The author for display, falling back to [`UNKNOWN_AUTHOR`].
    #[must_use]
    pub fn author_or_unknown(&self) -> &str {
        self.author().unwrap_or(UNKNOWN_AUTHOR)
    }

    /// The raw ISBN cell, if the cell was not empty.
    #[must_use]
    pub fn isbn(&self) -> Option<&str> {
        self.isbn.as_deref().filter(|i| !i.is_empty())
    }

    /// The ISBN reduced to digits and `X`, see [`crate::sanitize_isbn`].
    ///
    /// Returns an empty string when the book has no usable ISBN.
    #[must_use]
    pub fn clean_isbn(&self) -> String {
        self.isbn().map(crate::isbn::sanitize).unwrap_or_default()
    }

    fn has_title(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    /// Case-insensitive substring match over the title, author and raw ISBN.
    ///
    /// `query` must already be lower case. Missing fields never match.
    fn matches(&self, query: &str) -> bool {
        [self.title.as_deref(), self.author.as_deref(), self.isbn.as_deref()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(query))
    }
}

/// Positions of the known columns in the header row.
struct Columns {
    title: Option<usize>,
    author: Option<usize>,
    isbn: Option<usize>,
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> Self {
        let position = |name: &str| headers.iter().position(|h| h == name);
        Self {
            title: position("Title"),
            author: position("Author"),
            isbn: position("ISBN"),
        }
    }

    // Cells past the end of a short row and empty cells both read as `None`.
    fn book(&self, record: &csv::StringRecord) -> Book {
        let cell = |column: Option<usize>| {
            column
                .and_then(|i| record.get(i))
                .filter(|c| !c.is_empty())
                .map(ToOwned::to_owned)
        };

        Book {
            title: cell(self.title),
            author: cell(self.author),
            isbn: cell(self.isbn),
        }
    }
}

/// An ordered list of [`Book`]s that all have a title.
///
/// A catalog is not changed once built; searching produces a filtered view instead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Create a [`Catalog`] from rows, dropping those with a missing or blank title while
    /// keeping the order of the rest.
    #[must_use]
    pub fn new(rows: Vec<Book>) -> Self {
        let total = rows.len();
        let books: Vec<_> = rows.into_iter().filter(Book::has_title).collect();
        debug!(
            "Dropped {} of {} rows without a title",
            total - books.len(),
            total
        );
        Self { books }
    }

    /// Parse CSV text where the first row names the columns.
    ///
    /// # Errors
    ///
    /// An [`Err`] is returned when the text is not valid CSV.
    pub fn from_csv(csv: &str) -> Result<Self, Error> {
        Self::from_reader(csv.as_bytes())
    }

    /// Parse CSV from a reader where the first row names the columns.
    ///
    /// Rows may be shorter than the header row; the missing cells are treated as empty.
    ///
    /// # Errors
    ///
    /// An [`Err`] is returned when the reader fails or the content is not valid CSV.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let columns = Columns::locate(
            reader
                .headers()
                .map_err(|e| Error::wrap(ErrorKind::Deserialize, e))?,
        );

        let rows = reader
            .records()
            .map(|record| record.map(|r| columns.book(&r)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| Error::wrap(ErrorKind::Deserialize, e))?;

        trace!("Parsed {} rows from CSV", rows.len());
        Ok(Self::new(rows))
    }

    /// Read a catalog from a CSV file on disk.
    ///
    /// # Errors
    ///
    /// An [`Err`] is returned when the file cannot be opened or does not contain valid CSV.
    #[cfg(feature = "file")]
    pub fn from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        trace!("Reading catalog from '{}'", path.display());
        let file = std::fs::File::open(path).map_err(|e| {
            Error::wrap(ErrorKind::IO, e)
                .with_message(format!("Cannot open the '{}' file", path.display()))
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// The books in spreadsheet order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of books in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns `true` when the catalog holds no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Books whose title, author or ISBN contain `query`, ignoring case.
    ///
    /// The filter always runs over the whole catalog and keeps catalog order. An empty query
    /// returns every book.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Book> {
        let query = query.to_lowercase();
        self.books.iter().filter(|b| b.matches(&query)).collect()
    }
}
