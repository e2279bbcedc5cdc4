use std::path::PathBuf;

use crate::{file, interact};

use shelf::{
    format::{Html, Render, Text},
    sanitize_isbn,
    view::{DetailsRequest, LOAD_FAILED_MESSAGE},
    Shelf,
};

use clap::Subcommand;
use eyre::eyre;
use log::{info, trace};

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// List every book in the catalog
    List,

    /// List the books whose title, author or ISBN contain the query
    ///
    /// Matching ignores case.
    #[clap(arg_required_else_help = true)]
    Search {
        /// Text to look for
        query: String,
    },

    /// Show the Open Library details of a book
    #[clap(arg_required_else_help = true)]
    Details {
        /// The ISBN to look up, hyphens and spaces are ignored
        isbn: String,
        /// Title to show with the details, defaults to the title found in the catalog
        #[clap(short, long)]
        title: Option<String>,
    },

    /// Write the catalog page to a file or stdout
    Export {
        /// File to write to, stdout when not given
        #[clap(short, long, parse(from_os_str))]
        output: Option<PathBuf>,
        /// Only include books matching this query
        #[clap(long)]
        query: Option<String>,
        /// Write an HTML page instead of plain text
        #[clap(long)]
        html: bool,
    },

    /// Search and browse the catalog interactively
    Browse,
}

impl Commands {
    pub fn execute(
        self,
        shelf: &mut Shelf,
        check_covers: bool,
    ) -> Result<String, Box<dyn std::error::Error>> {
        match self {
            Commands::List => {
                load(shelf, check_covers)?;
                Ok(Text::grid(shelf.grid()))
            }
            Commands::Search { query } => {
                load(shelf, false)?;
                shelf.search(&query);
                covers(shelf, check_covers);
                Ok(Text::grid(shelf.grid()))
            }
            Commands::Details { isbn, title } => {
                let isbn = sanitize_isbn(&isbn);
                let title = match title {
                    Some(title) => title,
                    None => catalog_title(shelf, &isbn),
                };
                let request = DetailsRequest::new(isbn, &title);
                Ok(Text::details(shelf.show_details(&request)))
            }
            Commands::Export {
                output,
                query,
                html,
            } => {
                load(shelf, false)?;
                if let Some(query) = query {
                    shelf.search(&query);
                }
                covers(shelf, check_covers);

                if html {
                    export::<Html>(shelf, output)
                } else {
                    export::<Text>(shelf, output)
                }
            }
            Commands::Browse => {
                load(shelf, check_covers)?;
                interact::browse(shelf, check_covers)?;
                Ok(String::new())
            }
        }
    }
}

fn load(shelf: &mut Shelf, check_covers: bool) -> eyre::Result<()> {
    if shelf.load() {
        covers(shelf, check_covers);
        Ok(())
    } else {
        Err(eyre!(LOAD_FAILED_MESSAGE))
    }
}

pub fn covers(shelf: &mut Shelf, check_covers: bool) {
    if check_covers {
        let replaced = shelf.check_covers();
        info!("{replaced} covers could not be loaded");
    }
}

/// The catalog title for `isbn`, or the ISBN itself when the catalog cannot be loaded or has no
/// such book.
fn catalog_title(shelf: &mut Shelf, isbn: &str) -> String {
    trace!("No title given - looking for ISBN '{isbn}' in the catalog");
    if !isbn.is_empty() && shelf.load() {
        if let Some(book) = shelf
            .catalog()
            .books()
            .iter()
            .find(|b| b.clean_isbn() == isbn)
        {
            return book.title().to_owned();
        }
    }
    format!("ISBN {isbn}")
}

fn export<R: Render>(
    shelf: &Shelf,
    output: Option<PathBuf>,
) -> Result<String, Box<dyn std::error::Error>> {
    let page = R::page(&shelf.page());

    match output {
        Some(path) => {
            let path = file::write_page::<R>(&path, &page)?;
            Ok(format!("{} page written to '{}'\n", R::name(), path.display()))
        }
        None => Ok(page),
    }
}
