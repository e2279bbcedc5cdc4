#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]

//! # shelf
//!
//! shelf loads a catalog of books from a spreadsheet published as CSV, lets it be searched by
//! title, author or ISBN and looks up extra details and covers for a book from Open Library.
//!
//! The [`Shelf`] controller owns the catalog and the state of the two regions of the interface,
//! the grid of cards and the details of a single book. What those regions contain is described
//! by the plain data types in [`view`], which a [`format::Render`] turns into text or HTML.
//!
//! ```no_run
//! use shelf::{format::{Render, Text}, Shelf, Sources};
//!
//! let mut shelf: Shelf = Shelf::new(Sources::default());
//! shelf.load();
//! shelf.search("herbert");
//! print!("{}", Text::page(&shelf.page()));
//! ```

mod api;
pub mod catalog;
pub mod config;
mod error;
pub mod format;
mod isbn;
mod shelf;
pub mod view;

pub use api::{BookDetails, Client, NO_DESCRIPTION};
pub use catalog::{Book, Catalog};
pub use config::{CatalogSource, Sources};
pub use error::{Error, ErrorKind};
pub use isbn::sanitize as sanitize_isbn;
pub use shelf::{DetailsTicket, Shelf};

