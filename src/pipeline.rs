use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Settings;
use crate::error::SinkError;
use crate::normalize::{self, CleanRecord};
use crate::summary::Summary;
use crate::{crawler, db, export};

pub struct RunOutput {
    pub records: Vec<CleanRecord>,
    pub csv_path: PathBuf,
    pub db_path: PathBuf,
}

impl RunOutput {
    pub fn summary(&self) -> Summary {
        Summary::from_records(&self.records)
    }
}

/// Extract → clean → persist. Only sink failures are errors.
pub fn run(settings: &Settings) -> Result<RunOutput> {
    let entry = settings.entry_path();
    info!("Crawling from {}", entry.display());
    let raw = crawler::crawl(&entry);

    let records = normalize::normalize(&raw);
    info!("{} raw rows -> {} clean records", raw.len(), records.len());

    fs::create_dir_all(&settings.output_dir).map_err(|source| SinkError::CreateDir {
        path: settings.output_dir.clone(),
        source,
    })?;

    let csv_path = settings.csv_path();
    export::write_csv(&csv_path, &records).context("CSV export failed")?;

    let db_path = settings.db_path();
    db::write_companies(&db_path, &records).context("SQLite export failed")?;

    Ok(RunOutput {
        records,
        csv_path,
        db_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn settings(site: &std::path::Path, out: PathBuf) -> Settings {
        Settings {
            site_dir: site.to_path_buf(),
            entry_page: "page1.html".to_string(),
            output_dir: out,
        }
    }

    fn row(id: &str, name: &str, email: &str, country: &str) -> String {
        format!(
            "<tr><td>{}</td><td>{}</td><td>services</td><td>{}</td><td>555-123-4567</td><td>{}</td></tr>",
            id, name, email, country
        )
    }

    fn page(rows: &[String], next: Option<&str>) -> String {
        let link = next
            .map(|n| format!(r#"<a id="next" href="{}">Next</a>"#, n))
            .unwrap_or_default();
        format!(
            r#"<html><body><table id="company-table"><tbody>{}</tbody></table>{}</body></html>"#,
            rows.concat(),
            link
        )
    }

    #[test]
    fn three_page_chain_end_to_end() {
        let site = tempdir().unwrap();
        let out = tempdir().unwrap();
        let write = |name: &str, html: String| fs::write(site.path().join(name), html).unwrap();

        write(
            "page1.html",
            page(
                &[row("1", "alpha", "A@alpha.io", "usa"), row("2", "beta", "b@beta.io", "uk")],
                Some("page2.html"),
            ),
        );
        write(
            "page2.html",
            page(
                &[row("3", "gamma", "c@gamma.io", "canada"), row("4", "delta", "", "mexico")],
                Some("page3.html"),
            ),
        );
        // id 1 + same email (different case/spacing) duplicates page 1
        write(
            "page3.html",
            page(
                &[row("1", "alpha again", " a@ALPHA.io", "usa"), row("5", "epsilon", "e@eps.io", "peru")],
                None,
            ),
        );

        let output = run(&settings(site.path(), out.path().join("nested"))).unwrap();
        let names: Vec<&str> = output.records.iter().map(|r| r.company_name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma", "Delta", "Epsilon"]);
        assert!(output.records.iter().all(|r| r.phone.as_deref() == Some("+15551234567")));
        assert_eq!(output.records[3].email, None);
        assert_eq!(output.records[4].country, "Peru");

        let csv = fs::read_to_string(&output.csv_path).unwrap();
        assert_eq!(csv.lines().count(), 6);
        assert!(csv.starts_with("company_id,company_name,category,email,phone,country"));

        let conn = db::connect(&output.db_path).unwrap();
        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM companies", [], |r| r.get(0))
            .unwrap();
        assert_eq!(rows, 5);

        let summary = output.summary();
        assert_eq!(summary.total, 5);
        assert_eq!(summary.by_country[0], ("Canada".to_string(), 1));
    }

    #[test]
    fn bundled_demo_site() {
        let out = tempdir().unwrap();
        let output = run(&settings(std::path::Path::new("site"), out.path().to_path_buf())).unwrap();

        // 14 rows across three pages, two malformed, one repeat of 1001
        assert_eq!(output.records.len(), 11);
        assert_eq!(output.records[0].company_name, "Acme Corp");
        assert!(output.records.iter().all(|r| r.company_name != "Acme Corporation"));

        let wayne = output
            .records
            .iter()
            .find(|r| r.company_name == "Wayne Enterprises")
            .unwrap();
        assert_eq!(wayne.company_id, None);
        assert_eq!(wayne.phone, None);

        let summary = output.summary();
        assert_eq!(summary.by_country[0], ("United States".to_string(), 6));
    }

    #[test]
    fn missing_entry_writes_empty_outputs() {
        let site = tempdir().unwrap();
        let out = tempdir().unwrap();
        let output = run(&settings(site.path(), out.path().to_path_buf())).unwrap();
        assert!(output.records.is_empty());
        assert!(output.csv_path.exists());
        assert!(output.db_path.exists());
    }

    #[test]
    fn unwritable_output_is_fatal() {
        let site = tempdir().unwrap();
        let out = tempdir().unwrap();
        // a regular file where the output directory should be
        let blocker = out.path().join("output");
        fs::write(&blocker, "not a directory").unwrap();

        let err = run(&settings(site.path(), blocker)).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<SinkError>(),
            Some(SinkError::CreateDir { .. })
        ));
    }
}
