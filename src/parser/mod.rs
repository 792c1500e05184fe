pub mod pagination;
pub mod table;

use scraper::Html;

/// Cells per company row, in fixed positional order.
pub const COLUMN_COUNT: usize = 6;

/// One table row exactly as it appeared on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub company_id: String,
    pub company_name: String,
    pub category: String,
    pub email: String,
    pub phone: String,
    pub country: String,
}

impl RawRecord {
    /// Build from positional cells; `None` unless there are exactly six.
    pub fn from_cells(cells: Vec<String>) -> Option<Self> {
        let [company_id, company_name, category, email, phone, country]: [String; COLUMN_COUNT] =
            cells.try_into().ok()?;
        Some(RawRecord {
            company_id,
            company_name,
            category,
            email,
            phone,
            country,
        })
    }
}

#[derive(Debug, Default)]
pub struct ParsedPage {
    pub records: Vec<RawRecord>,
    /// `href` of the next page, unresolved.
    pub next: Option<String>,
}

/// Extract company rows and the pagination link from one document.
///
/// A page without the company table (or its body) yields nothing, including
/// no next link.
pub fn parse_page(html: &str) -> ParsedPage {
    let doc = Html::parse_document(html);
    let Some(body) = table::find_table(&doc).and_then(table::find_body) else {
        return ParsedPage::default();
    };

    ParsedPage {
        records: table::extract_rows(body),
        next: pagination::next_href(&doc),
    }
}
