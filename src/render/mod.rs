//! Presentation layer for search results.
//!
//! Consumes the record sequence produced by the store and renders it for
//! display. An empty sequence renders an explicit "no results" affordance
//! here; rows are never invented below this layer.

#[cfg(test)]
mod tests;

use console::style;
use std::fmt::Write;

use crate::config::LinkConfig;
use crate::config::settings::NUMBER_PLACEHOLDER;
use crate::store::RfcRecord;

/// Interpolates a record number into the configured document URL template.
#[inline]
pub fn record_url(links: &LinkConfig, number: i64) -> String {
    links
        .url_template
        .replace(NUMBER_PLACEHOLDER, &number.to_string())
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the search results page: one anchor per record linking to the
/// external document, with the summary as a heading beneath it.
#[inline]
pub fn html_document(records: &[RfcRecord], term: &str, links: &LinkConfig) -> String {
    let mut html = String::from("<html><body><h1>Search results</h1>\n");

    if records.is_empty() {
        let _ = writeln!(
            html,
            "<p>No results for &quot;{}&quot;.</p>",
            escape_html(term)
        );
    } else {
        for record in records {
            let _ = writeln!(
                html,
                "<a style=\"font-size: 16px;\" href=\"{}\">{}</a>\n<h3>{}</h3>",
                escape_html(&record_url(links, record.number)),
                record.number,
                escape_html(&record.summary)
            );
        }
    }

    html.push_str("</body></html>\n");
    html
}

/// Prints the terminal form of the results.
#[inline]
pub fn print_terminal(records: &[RfcRecord], term: &str, links: &LinkConfig) {
    if records.is_empty() {
        println!("{}", style(format!("No RFCs matched \"{term}\"")).yellow());
        return;
    }

    println!(
        "{}",
        style(format!("{} result(s) for \"{term}\":", records.len())).bold()
    );
    for record in records {
        println!(
            "  {}  {}",
            style(format!("RFC {}", record.number)).cyan(),
            record.summary
        );
        println!("           {}", style(record_url(links, record.number)).dim());
    }
}
