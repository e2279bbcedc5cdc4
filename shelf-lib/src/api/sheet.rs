use log::{info, trace};

use crate::{catalog::Catalog, config::CatalogSource, Error};

use super::Client;

/// Fetch the published spreadsheet once and parse it into a [`Catalog`].
pub(crate) fn load_catalog<C: Client>(client: &C, source: &CatalogSource) -> Result<Catalog, Error> {
    match source {
        CatalogSource::Url(url) => {
            info!("Fetching catalog from '{url}'");
            let csv = client.get_text(url)?;
            trace!("Request was successful");
            Catalog::from_csv(&csv)
        }
        #[cfg(feature = "file")]
        CatalogSource::File(path) => Catalog::from_path(path),
    }
}
