//! Where the catalog, covers and book details are fetched from.

/// The published spreadsheet used when no other catalog is given.
pub const DEFAULT_CATALOG_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRdMNWKRk_G0Y4z8vGSKOimSXx1bIwvF1CC23QAdf-yD-IbVRUEAx3LAG6wcKJTqBizaiLjFa_NYOjR/pub?output=csv";
/// Base URL of the cover image service, covers are found at `{base}/{isbn}-{size}.jpg`.
pub const DEFAULT_COVERS_URL: &str = "https://covers.openlibrary.org/b/isbn";
/// The Open Library books API.
pub const DEFAULT_METADATA_URL: &str = "https://openlibrary.org/api/books";
/// Image shown on the details page when the large cover cannot be loaded.
pub const DEFAULT_COVER_PLACEHOLDER_URL: &str = "https://via.placeholder.com/300x450?text=No+Cover";

/// Where the catalog is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    /// A CSV document published over HTTP.
    Url(String),
    /// A CSV file on the local file system.
    #[cfg(feature = "file")]
    File(std::path::PathBuf),
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            #[cfg(feature = "file")]
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Endpoints used by a [`crate::Shelf`].
///
/// The [`Default`] points at the public spreadsheet and the Open Library services.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sources {
    /// The catalog spreadsheet.
    pub catalog: CatalogSource,
    /// Base URL for cover images.
    pub covers_url: String,
    /// The book details API.
    pub metadata_url: String,
    /// Image substituted for a large cover that fails to load.
    pub cover_placeholder_url: String,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            catalog: CatalogSource::Url(DEFAULT_CATALOG_URL.to_owned()),
            covers_url: DEFAULT_COVERS_URL.to_owned(),
            metadata_url: DEFAULT_METADATA_URL.to_owned(),
            cover_placeholder_url: DEFAULT_COVER_PLACEHOLDER_URL.to_owned(),
        }
    }
}

impl Sources {
    /// The medium cover used on a grid card.
    ///
    /// `default=false` asks the service for a 404 instead of a blank image when it has no
    /// cover, so a failed load can be detected.
    #[must_use]
    pub fn grid_cover_url(&self, isbn: &str) -> String {
        format!("{}/{isbn}-M.jpg?default=false", self.trimmed_covers_url())
    }

    /// The large cover used on the details page.
    #[must_use]
    pub fn details_cover_url(&self, isbn: &str) -> String {
        format!("{}/{isbn}-L.jpg", self.trimmed_covers_url())
    }

    /// The details request for a single ISBN.
    #[must_use]
    pub fn details_url(&self, isbn: &str) -> String {
        format!(
            "{}?bibkeys=ISBN:{isbn}&format=json&jscmd=details",
            self.metadata_url
        )
    }

    fn trimmed_covers_url(&self) -> &str {
        self.covers_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::Sources;

    #[test]
    fn default_cover_urls() {
        let sources = Sources::default();

        assert_eq!(
            "https://covers.openlibrary.org/b/isbn/9780441013593-M.jpg?default=false",
            sources.grid_cover_url("9780441013593")
        );
        assert_eq!(
            "https://covers.openlibrary.org/b/isbn/9780441013593-L.jpg",
            sources.details_cover_url("9780441013593")
        );
    }

    #[test]
    fn trailing_slash_on_covers_url_is_ignored() {
        let sources = Sources {
            covers_url: "http://localhost:8080/covers/".to_owned(),
            ..Sources::default()
        };

        assert_eq!(
            "http://localhost:8080/covers/1-L.jpg",
            sources.details_cover_url("1")
        );
    }

    #[test]
    fn default_details_url() {
        assert_eq!(
            "https://openlibrary.org/api/books?bibkeys=ISBN:0441013597&format=json&jscmd=details",
            Sources::default().details_url("0441013597")
        );
    }
}
