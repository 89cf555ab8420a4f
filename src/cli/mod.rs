//! CLI module for askdata.
//!
//! The dispatcher runs early in `main()`, before logging and the terminal UI:
//!
//! ```ignore
//! use askdata::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args())? {
//!     CliCommand::Version => println!("askdata {}", VERSION),
//!     CliCommand::Help => println!("{}", USAGE),
//!     CliCommand::Run(overrides) => { /* start the client */ }
//! }
//! ```

pub mod args;

pub use args::{parse_args, ArgsError, CliCommand, CliOverrides};

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text for `--help` and argument errors.
pub const USAGE: &str = "\
Usage: askdata [OPTIONS]

Ask natural-language questions about your business data.

Options:
  -e, --endpoint <URL>   Ask endpoint (env: ASKDATA_ENDPOINT, default: http://localhost:8000/ask)
      --log-file <PATH>  Log file (env: ASKDATA_LOG_FILE)
  -h, --help             Print help
  -V, --version          Print version

Logging verbosity is controlled by ASKDATA_LOG (e.g. ASKDATA_LOG=askdata=debug).";
