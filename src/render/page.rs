//! Dashboard page
//!
//! Server-rendered HTML for the single dashboard page: headline total,
//! cumulative chart and the savings table.
//!
//! When served live the table is virtualized: only the rows around the
//! current scroll offset are in the document, and a small script swaps in
//! the window for a new offset from the rows fragment endpoint. The static
//! export renders every row and carries no script.

use crate::savings::{SavingsEntry, SavingsSummary};

use super::chart::render_chart;
use super::format::{currency, escape_html, table_date};
use super::list::FixedSizeList;

/// Grid columns shared by the header and every row
const GRID_COLUMNS: &str = "150px 200px 1fr 100px";

/// How the table body is produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableMode {
    /// Render the window for a scroll offset; fetch further windows from `rows_url`
    Virtualized { offset: u64, rows_url: String },
    /// Render every row, no script
    Static,
}

/// Render the complete dashboard document
pub fn render_page(summary: &SavingsSummary, list: &FixedSizeList, mode: &TableMode) -> String {
    let rows = match mode {
        TableMode::Virtualized { offset, .. } => render_rows(&summary.entries, list, *offset),
        TableMode::Static => render_all_rows(&summary.entries, list),
    };

    let script = match mode {
        TableMode::Virtualized { offset, rows_url } => scroll_script(rows_url, *offset),
        TableMode::Static => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Savings Dashboard</title>
<style>{style}</style>
</head>
<body>
<header class="headline">
  <div class="headline-label">Total Savings</div>
  <div class="headline-total">{total}</div>
</header>
<main>
  <section class="panel chart-panel">
{chart}
  </section>
  <section class="panel table-panel">
    <div class="table-header" style="grid-template-columns: {columns}">
      <div>Date</div>
      <div>Amount</div>
      <div>Description</div>
      <div>Source</div>
    </div>
    <div id="rows-viewport" class="rows-viewport" style="height: {viewport}px">
      <div id="rows-spacer" class="rows-spacer" style="height: {inner}px">
{rows}      </div>
    </div>
  </section>
</main>
{script}</body>
</html>
"#,
        style = STYLE,
        total = escape_html(&currency(summary.total)),
        chart = render_chart(&summary.series),
        columns = GRID_COLUMNS,
        viewport = list.height,
        inner = list.inner_height(summary.entries.len()),
        rows = rows,
        script = script,
    )
}

/// Rows in the window for `offset`, positioned absolutely
pub fn render_rows(entries: &[SavingsEntry], list: &FixedSizeList, offset: u64) -> String {
    let range = list.visible_range(offset, entries.len());
    let start = range.start;

    entries[range]
        .iter()
        .enumerate()
        .map(|(i, entry)| render_row(entry, start + i, list))
        .collect()
}

fn render_all_rows(entries: &[SavingsEntry], list: &FixedSizeList) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| render_row(entry, i, list))
        .collect()
}

fn render_row(entry: &SavingsEntry, index: usize, list: &FixedSizeList) -> String {
    format!(
        r#"        <div class="row" data-index="{index}" style="top: {top}px; height: {height}px; grid-template-columns: {columns}">
          <div class="cell">{date}</div>
          <div class="cell amount">{amount}</div>
          <div class="cell description">{description}</div>
          <div class="cell"><a href="{source}" target="_blank" rel="noopener noreferrer">Source</a></div>
        </div>
"#,
        index = index,
        top = list.row_top(index),
        height = list.item_size,
        columns = GRID_COLUMNS,
        date = table_date(entry.date),
        amount = escape_html(&currency(entry.amount)),
        description = escape_html(&entry.description),
        source = escape_html(&entry.source),
    )
}

fn scroll_script(rows_url: &str, offset: u64) -> String {
    // script content is not entity-decoded, so escape for a JS string literal
    let url = rows_url
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('<', "\\x3c");

    format!(
        r#"<script>
(function () {{
  var viewport = document.getElementById('rows-viewport');
  var spacer = document.getElementById('rows-spacer');
  var pending = false;
  var requested = {offset};
  viewport.scrollTop = {offset};
  function load() {{
    requested = Math.floor(viewport.scrollTop);
    fetch('{url}?offset=' + requested)
      .then(function (res) {{ return res.text(); }})
      .then(function (html) {{ spacer.innerHTML = html; }})
      .finally(function () {{
        // scroll events were dropped while the fetch was in flight
        if (Math.floor(viewport.scrollTop) !== requested) {{
          load();
        }} else {{
          pending = false;
        }}
      }});
  }}
  viewport.addEventListener('scroll', function () {{
    if (pending) return;
    pending = true;
    window.requestAnimationFrame(load);
  }});
}})();
</script>
"#,
        offset = offset,
        url = url,
    )
}

const STYLE: &str = r#"
body { margin: 0; min-height: 100vh; background: #f9fafb; font-family: system-ui, -apple-system, sans-serif; color: #111827; }
.headline { width: 100%; padding: 48px 0; background: #fff; border-bottom: 1px solid #e5e7eb; margin-bottom: 32px; text-align: center; }
.headline-label { font-size: 1.875rem; font-weight: 500; color: #4b5563; margin-bottom: 16px; }
.headline-total { font-size: 6rem; font-weight: 900; letter-spacing: -0.025em; }
main { max-width: 80rem; margin: 0 auto; padding: 0 24px; }
.panel { background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; margin-bottom: 32px; overflow: hidden; }
.chart-panel { padding: 16px; }
.table-header { display: grid; padding: 20px; background: #f9fafb; border-bottom: 1px solid #e5e7eb; font-weight: 600; color: #374151; }
.rows-viewport { overflow-y: auto; position: relative; }
.rows-spacer { position: relative; width: 100%; }
.row { position: absolute; left: 0; width: 100%; display: grid; box-sizing: border-box; border-bottom: 1px solid #e5e7eb; }
.row:hover { background: #f9fafb; }
.cell { padding: 20px; overflow: hidden; }
.amount { font-weight: 500; }
.description { color: #4b5563; white-space: pre-wrap; line-height: 1.625; }
a { color: #2563eb; text-decoration: none; }
a:hover { color: #1e40af; text-decoration: underline; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::savings::builtin_entries;

    fn entry(date: &str, amount: u64, description: &str) -> SavingsEntry {
        SavingsEntry::new(date, amount, description, "https://example.com/report").unwrap()
    }

    fn virtualized(offset: u64) -> TableMode {
        TableMode::Virtualized {
            offset,
            rows_url: "/rows".to_string(),
        }
    }

    #[test]
    fn test_page_headline_and_header() {
        let summary = SavingsSummary::from_entries(&[
            entry("2025-01-24", 420_000_000, "first"),
            entry("2025-01-25", 145_000_000, "second"),
        ]);
        let html = render_page(&summary, &FixedSizeList::default(), &virtualized(0));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Total Savings"));
        assert!(html.contains("$565,000,000"));
        for header in ["<div>Date</div>", "<div>Amount</div>", "<div>Description</div>", "<div>Source</div>"] {
            assert!(html.contains(header));
        }
        assert!(html.contains("<svg"));
        assert!(html.contains("01/25/2025"));
    }

    #[test]
    fn test_rows_most_recent_first() {
        let summary = SavingsSummary::from_entries(&[
            entry("2025-01-24", 1, "older"),
            entry("2025-01-25", 2, "newer"),
        ]);
        let html = render_page(&summary, &FixedSizeList::default(), &TableMode::Static);

        let newer = html.find("newer").unwrap();
        let older = html.find("older").unwrap();
        assert!(newer < older);
    }

    #[test]
    fn test_description_is_escaped() {
        let summary =
            SavingsSummary::from_entries(&[entry("2025-01-24", 1, "<script>alert(\"x\")</script>")]);
        let html = render_page(&summary, &FixedSizeList::default(), &TableMode::Static);

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"));
    }

    #[test]
    fn test_source_link_opens_new_tab() {
        let rows = render_rows(
            &[entry("2025-01-24", 1, "x")],
            &FixedSizeList::default(),
            0,
        );
        assert!(rows.contains(
            r#"<a href="https://example.com/report" target="_blank" rel="noopener noreferrer">Source</a>"#
        ));
    }

    #[test]
    fn test_rows_window() {
        let summary = SavingsSummary::from_entries(&builtin_entries());
        let list = FixedSizeList::default();

        let top = render_rows(&summary.entries, &list, 0);
        assert_eq!(top.matches(r#"class="row""#).count(), 10);
        assert!(top.contains(r#"data-index="0""#));

        let bottom = render_rows(&summary.entries, &list, u64::MAX);
        assert!(bottom.contains(r#"data-index="12""#));
        assert!(!bottom.contains(r#"data-index="0""#));
        assert!(bottom.contains("top: 1680px"));
    }

    #[test]
    fn test_static_mode_renders_all_rows_without_script() {
        let summary = SavingsSummary::from_entries(&builtin_entries());
        let html = render_page(&summary, &FixedSizeList::default(), &TableMode::Static);

        assert_eq!(html.matches(r#"class="row""#).count(), 13);
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_virtualized_mode_has_script() {
        let summary = SavingsSummary::from_entries(&builtin_entries());
        let mode = TableMode::Virtualized {
            offset: 280,
            rows_url: "/doge-dashboard/rows".to_string(),
        };
        let html = render_page(&summary, &FixedSizeList::default(), &mode);

        assert!(html.contains("fetch('/doge-dashboard/rows?offset=' + requested)"));
        assert!(html.contains("viewport.scrollTop = 280;"));
        assert!(html.contains("var requested = 280;"));
        assert!(html.contains("height: 1820px"));
    }

    #[test]
    fn test_scroll_script_refetches_after_dropped_events() {
        let script = scroll_script("/rows", 0);

        assert!(script.contains("if (pending) return;"));
        assert!(script.contains("if (Math.floor(viewport.scrollTop) !== requested) {"));
        // the re-check runs once the in-flight fetch settles
        let finally_at = script.find(".finally(").unwrap();
        let recheck_at = script.find("!== requested").unwrap();
        assert!(finally_at < recheck_at);
    }

    #[test]
    fn test_empty_page() {
        let summary = SavingsSummary::from_entries(&[]);
        let html = render_page(&summary, &FixedSizeList::default(), &virtualized(0));

        assert!(html.contains(">$0</div>"));
        assert!(!html.contains(r#"class="row""#));
    }
}
