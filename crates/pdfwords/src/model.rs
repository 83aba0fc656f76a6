//! Word, page, and document records produced by extraction.

use crate::error::{Error, Result};

/// Font name recorded when the PDF reports none for a word.
pub const DEFAULT_FONT: &str = "default";

/// A single word positioned on a page.
///
/// Coordinates are passed through from the PDF library untouched: `x0` is the
/// left edge and `top` the distance from the top of the page, both in points.
/// Either may be absent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordRecord {
    text: String,
    font: String,
    x0: Option<f64>,
    top: Option<f64>,
}

impl WordRecord {
    /// Create a word record. A missing or blank `font` becomes [`DEFAULT_FONT`].
    pub fn new(
        text: impl Into<String>,
        font: Option<&str>,
        x0: Option<f64>,
        top: Option<f64>,
    ) -> Self {
        let font = match font.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => DEFAULT_FONT.to_string(),
        };
        Self {
            text: text.into(),
            font,
            x0,
            top,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &str {
        &self.font
    }

    pub fn x0(&self) -> Option<f64> {
        self.x0
    }

    pub fn top(&self) -> Option<f64> {
        self.top
    }
}

/// The words of one physical page, in the order the PDF library reported them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRecord {
    page: usize,
    content: Vec<WordRecord>,
}

impl PageRecord {
    /// Create a page record. `page` is 1-based.
    pub fn new(page: usize, content: Vec<WordRecord>) -> Self {
        Self { page, content }
    }

    /// 1-based page number.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn words(&self) -> &[WordRecord] {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Word texts joined with single spaces, in extraction order.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .map(WordRecord::text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// All pages extracted from one PDF, in physical page order.
///
/// Page numbers always run 1..=N without gaps.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Document {
    pages: Vec<PageRecord>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from pre-numbered pages.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PageOrder`] if the pages are not numbered 1, 2, 3, ...
    pub fn from_pages(pages: Vec<PageRecord>) -> Result<Self> {
        for (i, page) in pages.iter().enumerate() {
            if page.page != i + 1 {
                return Err(Error::PageOrder {
                    expected: i + 1,
                    found: page.page,
                });
            }
        }
        Ok(Self { pages })
    }

    /// Append the next page, numbering it after the last one.
    pub fn push_page(&mut self, content: Vec<WordRecord>) -> &PageRecord {
        let page = PageRecord::new(self.pages.len() + 1, content);
        self.pages.push(page);
        &self.pages[self.pages.len() - 1]
    }

    pub fn pages(&self) -> &[PageRecord] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total number of words across all pages.
    pub fn word_count(&self) -> usize {
        self.pages.iter().map(|p| p.content.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
