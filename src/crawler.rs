use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::parser::{self, RawRecord};

/// Per-crawl bookkeeping; never shared between crawls.
#[derive(Default)]
struct CrawlState {
    visited: HashSet<PathBuf>,
    records: Vec<RawRecord>,
}

impl CrawlState {
    /// Returns false if the page was already seen.
    fn visit(&mut self, page: PathBuf) -> bool {
        self.visited.insert(page)
    }
}

/// Why the walk ended. Logged only; every variant is a normal finish.
enum Stop {
    EndOfChain,
    Missing(PathBuf),
    Revisited(PathBuf),
    Unreadable(PathBuf, std::io::Error),
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stop::EndOfChain => write!(f, "no next link"),
            Stop::Missing(p) => write!(f, "missing page {}", p.display()),
            Stop::Revisited(p) => write!(f, "already visited {}", p.display()),
            Stop::Unreadable(p, e) => write!(f, "unreadable page {}: {}", p.display(), e),
        }
    }
}

/// Follow the `next` chain from `entry`, collecting rows in page-then-row order.
///
/// Missing, unreadable or repeated pages end the walk quietly; whatever was
/// gathered up to that point is returned.
pub fn crawl(entry: &Path) -> Vec<RawRecord> {
    let mut state = CrawlState::default();
    let mut current = Some(entry.to_path_buf());

    let stop = loop {
        let Some(path) = current.take() else {
            break Stop::EndOfChain;
        };
        let page = match fs::canonicalize(&path) {
            Ok(p) if p.is_file() => p,
            _ => break Stop::Missing(path),
        };
        if !state.visit(page.clone()) {
            break Stop::Revisited(page);
        }
        let html = match fs::read_to_string(&page) {
            Ok(html) => html,
            Err(e) => break Stop::Unreadable(page, e),
        };

        let parsed = parser::parse_page(&html);
        debug!(
            "Parsed {} ({} rows, next: {:?})",
            page.display(),
            parsed.records.len(),
            parsed.next
        );
        state.records.extend(parsed.records);
        current = parsed.next.map(|href| resolve(&page, &href));
    };

    debug!("Crawl stopped: {}", stop);
    info!(
        "Crawled {} pages, {} raw rows",
        state.visited.len(),
        state.records.len()
    );
    state.records
}

/// Resolve `href` against the directory holding `page`.
fn resolve(page: &Path, href: &str) -> PathBuf {
    page.parent().unwrap_or_else(|| Path::new("")).join(href)
}
