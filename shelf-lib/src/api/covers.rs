use log::{debug, trace};

use crate::view::Card;

use super::Client;

/// Probe each card's cover and swap the ones that cannot be loaded for their placeholder.
///
/// Returns how many covers were replaced.
pub(crate) fn check_covers<C: Client>(client: &C, cards: &mut [Card]) -> usize {
    let mut replaced = 0;

    for card in cards {
        let Some(url) = card.cover.url() else {
            continue;
        };

        trace!("Probing cover '{url}'");
        if let Err(err) = client.probe(url) {
            debug!("Cover for '{}' is not available: {err}", card.title);
            card.cover = card.cover.clone().on_load_failure();
            replaced += 1;
        }
    }

    replaced
}

#[cfg(test)]
mod tests {
    use crate::{
        api::{impl_text_producer, MockClient, NetworkErrorProducer, URL_SINK},
        catalog::Book,
        config::Sources,
        view::{Cover, GridView, Placeholder},
    };

    impl_text_producer! {
        FoundProducer => Ok(String::new()),
    }

    fn grid() -> GridView {
        let books = [
            Book::new("Dune", None, Some("9780441013593")),
            Book::new("Anathem", None, None),
        ];
        GridView::new(&books, &Sources::default())
    }

    #[test]
    fn unreachable_covers_fall_back_to_label() {
        let mut grid = grid();
        let replaced = super::check_covers(
            &MockClient::<NetworkErrorProducer>::default(),
            grid.cards_mut(),
        );

        assert_eq!(1, replaced);
        for card in grid.cards() {
            assert_eq!(Cover::Missing(Placeholder::Label("No Cover")), card.cover);
        }
    }

    #[test]
    fn reachable_covers_are_kept_and_missing_ones_not_probed() {
        URL_SINK.with(|urls| urls.borrow_mut().clear());
        let mut grid = grid();
        let before = grid.clone();
        let replaced =
            super::check_covers(&MockClient::<FoundProducer>::default(), grid.cards_mut());

        assert_eq!(0, replaced);
        assert_eq!(before, grid);

        let probed = URL_SINK.with(|urls| urls.borrow().clone());
        assert_eq!(
            vec!["https://covers.openlibrary.org/b/isbn/9780441013593-M.jpg?default=false"],
            probed
        );
    }
}
