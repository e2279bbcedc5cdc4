#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::{error, path::PathBuf, process};

mod commands;
mod file;
mod interact;

use commands::Commands;

use shelf::{CatalogSource, Shelf, Sources};

use clap::{Args, Parser};
use log::{trace, warn};

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", err);
        process::exit(2);
    }
}

fn try_main() -> Result<(), Box<dyn error::Error>> {
    let Cli {
        command,
        global_opts,
    } = Cli::parse();

    setup_errlog(global_opts.verbosity as usize, global_opts.quiet)?;

    let check_covers = global_opts.check_covers;
    let sources = global_opts.into_sources();
    trace!("Using catalog at '{}'", sources.catalog);

    let mut shelf: Shelf = Shelf::new(sources);
    let message = command.execute(&mut shelf, check_covers)?;

    print!("{message}");
    Ok(())
}

fn setup_errlog(verbosity: usize, quiet: bool) -> Result<(), Box<dyn error::Error>> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 1 } else { verbosity + 2 };

    stderrlog::new().verbosity(verbosity).init()?;
    Ok(())
}

#[derive(Parser)]
#[clap(name = "shelf")]
#[clap(about = "Search a spreadsheet of books and look up their details on Open Library")]
#[clap(version, author)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(flatten)]
    global_opts: GlobalOpts,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// URL of the spreadsheet published as CSV
    #[clap(long, global = true)]
    catalog_url: Option<String>,

    /// Read the catalog from a local CSV file instead of a URL
    #[clap(long, parse(from_os_str), global = true)]
    catalog_file: Option<PathBuf>,

    /// Base URL of the cover image service
    #[clap(long, global = true)]
    covers_url: Option<String>,

    /// URL of the book details API
    #[clap(long, global = true)]
    metadata_url: Option<String>,

    /// Check that each cover in the grid can be loaded and show a placeholder for those that
    /// cannot.
    #[clap(long, global = true)]
    check_covers: bool,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbosity: u8,

    /// Only errors are logged to stderr.
    #[clap(short, long, global = true)]
    quiet: bool,
}

impl GlobalOpts {
    fn into_sources(self) -> Sources {
        let mut sources = Sources::default();

        match (self.catalog_file, self.catalog_url) {
            (Some(path), url) => {
                if url.is_some() {
                    warn!("Both --catalog-file and --catalog-url given - using the file");
                }
                sources.catalog = CatalogSource::File(path);
            }
            (None, Some(url)) => sources.catalog = CatalogSource::Url(url),
            (None, None) => {}
        }

        if let Some(url) = self.covers_url {
            sources.covers_url = url;
        }
        if let Some(url) = self.metadata_url {
            sources.metadata_url = url;
        }
        sources
    }
}
