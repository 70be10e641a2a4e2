//! xls2csv CLI - Command-line interface library
//!
//! Converts every `.xls` file in a directory to CSV. Each file is tried as a
//! workbook first, then as delimited text under a fixed list of encodings.
//!
//! # Library Usage
//!
//! ```ignore
//! use xls2csv_cli::{convert_command, run_cli};
//!
//! // Run the full CLI
//! run_cli()?;
//!
//! // Or convert a directory programmatically
//! let report = convert_command(Path::new("data"), false)?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Convert the current directory
//! xls2csv
//!
//! # Convert another directory, failing the run if any file fails
//! xls2csv exports/ --strict
//!
//! # Show every fallback attempt
//! xls2csv -vv
//! ```

pub mod app;

// Re-export main entry point and commands
pub use app::{convert_command, init_logging, outcome_line, run_cli, summary_line};
