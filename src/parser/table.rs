use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::RawRecord;

static TABLE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table#company-table").unwrap());
static TBODY_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tbody").unwrap());
static ROW_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static CELL_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

pub fn find_table(doc: &Html) -> Option<ElementRef<'_>> {
    doc.select(&TABLE_SEL).next()
}

pub fn find_body(table: ElementRef<'_>) -> Option<ElementRef<'_>> {
    table.select(&TBODY_SEL).next()
}

/// Body rows in document order. Rows without exactly six cells are dropped.
pub fn extract_rows(body: ElementRef<'_>) -> Vec<RawRecord> {
    body.select(&ROW_SEL)
        .filter_map(|tr| RawRecord::from_cells(row_cells(tr)))
        .collect()
}

fn row_cells(tr: ElementRef<'_>) -> Vec<String> {
    tr.select(&CELL_SEL).map(cell_text).collect()
}

fn cell_text(td: ElementRef<'_>) -> String {
    td.text().collect::<String>().trim().to_string()
}
