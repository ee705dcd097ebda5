//! Dashboard presentation
//!
//! - **format**: currency, date and axis label formatting
//! - **chart**: SVG line chart of the cumulative series
//! - **list**: fixed-size row window math for the table
//! - **page**: the full HTML document and the rows fragment

pub mod chart;
pub mod format;
pub mod list;
pub mod page;

pub use chart::render_chart;
pub use format::{billions, currency, escape_html, table_date, tick_date};
pub use list::FixedSizeList;
pub use page::{render_page, render_rows, TableMode};
