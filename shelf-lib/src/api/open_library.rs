use std::collections::HashMap;

use log::{info, trace};
use serde::Deserialize;

use crate::{config::Sources, Error};

use super::Client;

/// Used when the record carries neither a description nor notes.
pub const NO_DESCRIPTION: &str = "No description available in the Open Library database.";

/// Look up the details of a single sanitized ISBN.
///
/// `Ok(None)` means the API answered but knows nothing about the ISBN.
pub(crate) fn get_book_details<C: Client>(
    client: &C,
    sources: &Sources,
    isbn: &str,
) -> Result<Option<BookDetails>, Error> {
    info!("Searching for ISBN '{isbn}' using Open Library API");
    let url = sources.details_url(isbn);

    let mut response: HashMap<String, Record> = client.get_json(&url)?;
    trace!("Request was successful");

    Ok(response
        .remove(&format!("ISBN:{isbn}"))
        .map(Record::into_details))
}

/// The parts of an Open Library record shown on the details page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookDetails {
    /// Small cover image provided by the API.
    pub thumbnail_url: Option<String>,
    /// Publication date as free text, e.g. `"2005"` or `"August 2, 2005"`.
    pub publish_date: Option<String>,
    /// The first listed publisher.
    pub publisher: Option<String>,
    /// The description, the notes or [`NO_DESCRIPTION`].
    pub description: String,
}

/// A single value of the response, keyed by `ISBN:{isbn}`.
///
/// `jscmd=details` nests the book fields under `details` while `jscmd=data` puts them at the
/// top level; both are read, preferring `details`.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct Record {
    thumbnail_url: Option<String>,
    details: Option<Fields>,
    #[serde(flatten)]
    inline: Fields,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct Fields {
    description: Option<Text>,
    notes: Option<Text>,
    publish_date: Option<String>,
    publisher: Option<Publishers>,
    publishers: Option<Publishers>,
}

/// Open Library text fields are either a plain string or `{ "type": ..., "value": ... }`.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
#[serde(untagged)]
enum Text {
    Plain(String),
    Typed { value: Option<String> },
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
#[serde(untagged)]
enum Publishers {
    Many(Vec<Name>),
    One(Name),
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
#[serde(untagged)]
enum Name {
    Plain(String),
    Named { name: String },
}

impl Text {
    /// An empty plain string counts as absent while a typed value is kept even when empty.
    fn into_value(self) -> Option<String> {
        match self {
            Self::Plain(s) => Some(s).filter(|s| !s.is_empty()),
            Self::Typed { value } => value,
        }
    }
}

impl Publishers {
    fn into_first(self) -> Option<String> {
        let name = match self {
            Self::Many(names) => names.into_iter().next()?,
            Self::One(name) => name,
        };

        Some(match name {
            Name::Plain(s) | Name::Named { name: s } => s,
        })
    }
}

impl Fields {
    fn description(&mut self) -> Option<String> {
        self.description
            .take()
            .and_then(Text::into_value)
            .or_else(|| self.notes.take().and_then(Text::into_value))
    }

    fn publisher(&mut self) -> Option<String> {
        self.publisher
            .take()
            .and_then(Publishers::into_first)
            .or_else(|| self.publishers.take().and_then(Publishers::into_first))
            .filter(|p| !p.is_empty())
    }
}

impl Record {
    fn into_details(self) -> BookDetails {
        let Self {
            thumbnail_url,
            details,
            inline,
        } = self;

        let mut fields = details.unwrap_or(inline);

        BookDetails {
            thumbnail_url: thumbnail_url.filter(|u| !u.is_empty()),
            publish_date: fields.publish_date.take().filter(|d| !d.is_empty()),
            publisher: fields.publisher(),
            description: fields
                .description()
                .unwrap_or_else(|| NO_DESCRIPTION.to_owned()),
        }
    }
}
