use std::fmt::Write;

use crate::view::{Card, Cover, DetailsPage, DetailsView, GridView, Placeholder};

use super::Render;

/// Plain text for a terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct Text;

fn cover_line(cover: &Cover) -> String {
    match cover {
        Cover::Image { url, .. } => url.clone(),
        Cover::Missing(Placeholder::Label(label)) => (*label).to_owned(),
        Cover::Missing(Placeholder::Image(url)) => url.clone(),
    }
}

fn card(out: &mut String, card: &Card) {
    // writing to a String cannot fail
    let _ = writeln!(out, "{}", card.title);
    let _ = writeln!(out, "  by {}", card.author);
    let _ = writeln!(out, "  cover: {}", cover_line(&card.cover));
    if !card.request.isbn().is_empty() {
        let _ = writeln!(out, "  isbn: {}", card.request.isbn());
    }
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
}

fn page(out: &mut String, page: &DetailsPage) {
    heading(out, &page.title);
    let _ = writeln!(out, "Cover:     {}", cover_line(&page.cover));
    if let Some(thumbnail) = &page.thumbnail_url {
        let _ = writeln!(out, "Thumbnail: {thumbnail}");
    }
    let _ = writeln!(out, "ISBN:      {}", page.isbn);
    if let Some(date) = &page.publish_date {
        let _ = writeln!(out, "Published: {date}");
    }
    if let Some(publisher) = &page.publisher {
        let _ = writeln!(out, "Publisher: {publisher}");
    }
    out.push_str("----\n");
    let _ = writeln!(out, "{}", page.description);
}

impl Render for Text {
    fn grid(grid: &GridView) -> String {
        if let Some(message) = grid.message() {
            return format!("{message}\n");
        }

        let mut out = String::new();
        for (i, c) in grid.cards().iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            card(&mut out, c);
        }
        out
    }

    fn details(details: &DetailsView) -> String {
        let mut out = String::new();
        match details {
            DetailsView::Found(p) => page(&mut out, p),
            other => {
                heading(&mut out, other.title());
                if let Some(message) = other.message() {
                    let _ = writeln!(out, "{message}");
                }
            }
        }
        out
    }

    fn name() -> &'static str {
        "text"
    }

    fn ext() -> &'static str {
        "txt"
    }
}
