use std::fmt::Write;

use crate::view::{Card, Cover, DetailsPage, DetailsView, GridView, Placeholder};

use super::{Page, Render};

/// A static HTML page with the grid, the search box and the details region.
///
/// Image fallbacks are expressed with `onerror` handlers so a browser swaps in the placeholder
/// when a cover fails to load.
#[derive(Clone, Copy, Debug, Default)]
pub struct Html;

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

const fn display(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        " style=\"display:none;\""
    }
}

fn grid_cover(out: &mut String, cover: &Cover) {
    out.push_str("<div class=\"cover-wrapper\">");
    match cover {
        Cover::Image { url, fallback } => {
            let _ = write!(
                out,
                "<img src=\"{}\" class=\"cover-img\" onerror=\"this.style.display='none'; this.nextElementSibling.style.display='block'\">",
                escape(url)
            );
            placeholder(out, fallback, false);
        }
        Cover::Missing(fallback) => placeholder(out, fallback, true),
    }
    out.push_str("</div>");
}

fn placeholder(out: &mut String, placeholder: &Placeholder, visible: bool) {
    match placeholder {
        Placeholder::Label(label) => {
            let _ = write!(
                out,
                "<div class=\"no-cover\"{}>{}</div>",
                display(visible),
                escape(label)
            );
        }
        Placeholder::Image(url) => {
            let _ = write!(
                out,
                "<img src=\"{}\" class=\"no-cover\"{}>",
                escape(url),
                display(visible)
            );
        }
    }
}

fn card(out: &mut String, card: &Card) {
    let _ = write!(
        out,
        "<div class=\"book-card\" data-isbn=\"{}\" data-title=\"{}\">",
        escape(card.request.isbn()),
        escape(card.request.encoded_title())
    );
    grid_cover(out, &card.cover);
    let _ = write!(
        out,
        "<div class=\"title\">{}</div><div class=\"author\">{}</div></div>",
        escape(&card.title),
        escape(&card.author)
    );
}

fn large_cover(out: &mut String, cover: &Cover) {
    match cover {
        Cover::Image {
            url,
            fallback: Placeholder::Image(fallback),
        } => {
            let _ = write!(
                out,
                "<img src=\"{}\" class=\"large-cover\" onerror=\"this.src='{}'\">",
                escape(url),
                escape(fallback)
            );
        }
        Cover::Image {
            url,
            fallback: Placeholder::Label(_),
        } => {
            let _ = write!(out, "<img src=\"{}\" class=\"large-cover\">", escape(url));
        }
        Cover::Missing(fallback) => placeholder(out, fallback, true),
    }
}

fn details_page(out: &mut String, page: &DetailsPage) {
    out.push_str("<div class=\"details-layout\"><div class=\"details-cover-column\">");
    large_cover(out, &page.cover);
    out.push_str("</div><div class=\"details-text-column\"><h1>");
    if let Some(thumbnail) = &page.thumbnail_url {
        let _ = write!(
            out,
            "<img src=\"{}\" style=\"height:30px; vertical-align:middle;\"> ",
            escape(thumbnail)
        );
    }
    let _ = write!(out, "{}</h1>", escape(&page.title));
    let _ = write!(
        out,
        "<p class=\"details-meta\"><strong>ISBN:</strong> {}</p>",
        escape(&page.isbn)
    );
    if let Some(date) = &page.publish_date {
        let _ = write!(
            out,
            "<p class=\"details-meta\"><strong>Published:</strong> {}</p>",
            escape(date)
        );
    }
    if let Some(publisher) = &page.publisher {
        let _ = write!(
            out,
            "<p class=\"details-meta\"><strong>Publisher:</strong> {}</p>",
            escape(publisher)
        );
    }
    let _ = write!(
        out,
        "<hr><div class=\"description-text\">{}</div></div></div>",
        escape(&page.description)
    );
}

impl Render for Html {
    fn grid(grid: &GridView) -> String {
        if let Some(message) = grid.message() {
            return format!("<p class=\"loading\">{}</p>", escape(message));
        }

        let mut out = String::new();
        for c in grid.cards() {
            card(&mut out, c);
        }
        out
    }

    fn details(details: &DetailsView) -> String {
        let mut out = String::new();
        match details {
            DetailsView::Found(page) => details_page(&mut out, page),
            DetailsView::Loading { .. } => {
                let _ = write!(
                    out,
                    "<div class=\"loading\">{}</div>",
                    escape(&details.message().unwrap_or_default())
                );
            }
            other => {
                let _ = write!(
                    out,
                    "<h2>{}</h2><p>{}</p>",
                    escape(other.title()),
                    escape(&other.message().unwrap_or_default())
                );
            }
        }
        out
    }

    /// The whole document with both regions, the hidden one marked `display:none`.
    fn page(page: &Page<'_>) -> String {
        let mut out = String::from(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Library Catalog</title></head>\n<body>\n",
        );
        let _ = writeln!(
            out,
            "<div class=\"search-container\"{}><input type=\"text\" id=\"search-bar\" value=\"{}\"></div>",
            display(page.visibility.search),
            escape(page.query)
        );
        let _ = writeln!(
            out,
            "<div id=\"catalog-grid\"{}>{}</div>",
            display(page.visibility.grid),
            Self::grid(page.grid)
        );
        let _ = writeln!(
            out,
            "<div id=\"details-view\"{}><div id=\"details-content\">{}</div></div>",
            display(page.visibility.details),
            page.details.map(Self::details).unwrap_or_default()
        );
        out.push_str("</body>\n</html>\n");
        out
    }

    fn name() -> &'static str {
        "HTML"
    }

    fn ext() -> &'static str {
        "html"
    }
}
