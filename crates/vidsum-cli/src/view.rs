use std::io::Write;

use vidsum_core::render::escape_html;

use crate::controller::ResultsView;

/// A [`ResultsView`] that reports progress on a status stream and keeps the
/// rendered header and results for writing out as a standalone page.
pub struct DocumentView<W> {
    status: W,
    header: String,
    results: String,
    alerts: Vec<String>,
    loading: bool,
}

impl<W: Write> DocumentView<W> {
    pub fn new(status: W) -> Self {
        Self {
            status,
            header: String::new(),
            results: String::new(),
            alerts: Vec::new(),
            loading: false,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn results(&self) -> &str {
        &self.results
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The header and results wrapped in a complete HTML document.
    #[must_use]
    pub fn to_document(&self, title: &str) -> String {
        format!(
            "<!doctype html>\n<html lang=\"zh-Hant-TW\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n<h2 id=\"summary-header\">{}</h2>\n<section id=\"results-container\">\n{}</section>\n</body>\n</html>\n",
            escape_html(title),
            self.header,
            self.results
        )
    }

    fn status_line(&mut self, line: &str) {
        // Status output is best effort; a closed stderr must not fail the fetch.
        let _ = writeln!(self.status, "{line}");
    }
}

impl<W: Write> ResultsView for DocumentView<W> {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
        self.status_line(message);
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        if loading {
            self.status_line("載入中…");
        }
    }

    fn clear(&mut self) {
        self.header.clear();
        self.results.clear();
    }

    fn show_header(&mut self, html: &str) {
        html.clone_into(&mut self.header);
    }

    fn show_results(&mut self, html: &str) {
        html.clone_into(&mut self.results);
    }
}
