use dialoguer::Input;
use eyre::{eyre, Context, Result};
use log::trace;
use shelf::{
    format::{Render, Text},
    view::Card,
    Shelf,
};

use crate::commands::covers;

const SEARCH: &str = "[Search]";
const QUIT: &str = "[Quit]";
const BACK: &str = "Back to catalog";

pub fn user_select<S: ToString>(prompt: &str, items: &[S]) -> Result<usize> {
    let selection = dialoguer::Select::with_theme(&dialoguer::theme::ColorfulTheme::default())
        .with_prompt(prompt)
        .default(0)
        .items(items)
        .interact_opt()
        .wrap_err_with(|| eyre!("User selection cancelled"))?;

    if let Some(index) = selection {
        Ok(index)
    } else {
        Err(eyre!("No selection made - cancelling operation"))
    }
}

pub fn user_input(prompt: &str, initial: &str) -> Result<String> {
    Input::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .wrap_err_with(|| eyre!("User input cancelled"))
}

fn card_items(cards: &[Card]) -> Vec<String> {
    cards
        .iter()
        .map(|c| format!("{} - {}", c.title, c.author))
        .chain([SEARCH.to_owned(), QUIT.to_owned()])
        .collect()
}

/// Show the grid as a list to pick from until the user quits.
///
/// Picking a book shows its details; going back shows the whole catalog again but keeps the
/// last search text as the starting point of the next search.
pub fn browse(shelf: &mut Shelf, check_covers: bool) -> Result<()> {
    loop {
        if let Some(message) = shelf.grid().message() {
            println!("{message}");
        }

        let cards = shelf.grid().cards().to_vec();
        let selection = user_select("Choose a book", &card_items(&cards))?;

        if let Some(card) = cards.get(selection) {
            trace!("Showing details for '{}'", card.title);
            print!("{}", Text::details(shelf.show_details(&card.request)));

            if user_select("", &[BACK, QUIT])? == 1 {
                return Ok(());
            }
            shelf.show_grid();
        } else if selection == cards.len() {
            let query = user_input("Search", shelf.query())?;
            shelf.search(&query);
        } else {
            return Ok(());
        }

        covers(shelf, check_covers);
    }
}
