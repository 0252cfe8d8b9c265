//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand};

use wykop_api::{PromotedSort, UpcomingSort};

/// Query the wykop.pl API from the command line.
///
/// Results are printed as pretty JSON on stdout.
#[derive(Parser, Debug)]
#[command(name = "wykop")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Application key (overrides `app_key` from the config file)
    #[arg(long, global = true)]
    pub app_key: Option<String>,

    /// User key (overrides `user_key` from the config file)
    #[arg(long, global = true)]
    pub user_key: Option<String>,

    /// URL scheme for API requests (overrides `scheme` from the config file)
    #[arg(long, global = true, value_parser = ["https", "http"])]
    pub scheme: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// API operations exposed by the CLI.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List links promoted to the main page
    Promoted {
        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Ordering: day, week or month
        #[arg(short, long, default_value = "day", value_parser = parse_promoted_sort)]
        sort: PromotedSort,
    },
    /// List links in the upcoming queue
    Upcoming {
        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Ordering: date, votes or comments
        #[arg(short, long, default_value = "date", value_parser = parse_upcoming_sort)]
        sort: UpcomingSort,
    },
    /// Show a single link (sends the user key)
    Link {
        /// Link identifier
        id: i64,
    },
    /// List users who dug a link
    Digs {
        /// Link identifier
        id: i64,
    },
}

fn parse_promoted_sort(value: &str) -> Result<PromotedSort, String> {
    value.parse().map_err(|err: wykop_api::resources::ParseSortError| err.to_string())
}

fn parse_upcoming_sort(value: &str) -> Result<UpcomingSort, String> {
    value.parse().map_err(|err: wykop_api::resources::ParseSortError| err.to_string())
}
