use clap::{Parser, Subcommand};
use std::path::PathBuf;

use content_preview::application::dto::OutputFormat;
use content_preview::rule_preview::domain::{SortDirection, SortKey};

/// Preview rule content: the filterable rule table, a rule's detail page and
/// the free-style JSON check
#[derive(Parser, Debug)]
#[command(name = "content-preview")]
#[command(version)]
#[command(about = "Preview recommendation rule content from exported JSON data", long_about = None)]
pub struct Args {
    /// Directory holding rules.json, hits.json, details/ and hits/
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to content-preview.config.yml in the current directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable coloured text output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the rule table, sorted and filtered
    Table {
        /// Case-insensitive filter on name, plugin and error key
        #[arg(short, long)]
        search: Option<String>,

        /// Sort column: status, plugin, error_key, product_code, role or category
        #[arg(long)]
        sort: Option<SortKey>,

        /// Sort direction: asc or desc
        #[arg(long)]
        direction: Option<SortDirection>,
    },

    /// Show one rule's detail page
    Detail {
        /// Rule id, e.g. "ceph_plugin|CEPH_WARN"
        rule_id: String,

        /// 1-based index of the hit whose payload fills the details
        #[arg(long, value_name = "N")]
        select: Option<usize>,

        /// JSON that replaces the selected hit's payload when valid
        #[arg(long, value_name = "JSON")]
        free_style: Option<String>,

        /// Skip the knowledge-base article lookup
        #[arg(long)]
        no_kba: bool,

        /// Collapse the rule description sections
        #[arg(long)]
        collapsed: bool,
    },

    /// Check free-style JSON input the way the detail page does
    Validate {
        /// Text to check
        text: String,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table_with_options() {
        let args = Args::try_parse_from([
            "content-preview",
            "--data-dir",
            "/data",
            "table",
            "--search",
            "ceph",
            "--sort",
            "error-key",
            "--direction",
            "desc",
        ])
        .unwrap();

        assert_eq!(args.data_dir, Some(PathBuf::from("/data")));
        match args.command {
            Command::Table {
                search,
                sort,
                direction,
            } => {
                assert_eq!(search.as_deref(), Some("ceph"));
                assert_eq!(sort, Some(SortKey::ErrorKey));
                assert_eq!(direction, Some(SortDirection::Desc));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_detail_with_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "content-preview",
            "detail",
            "ceph|CEPH_WARN",
            "--select",
            "2",
            "--no-kba",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(args.format, Some(OutputFormat::Json));
        match args.command {
            Command::Detail {
                rule_id,
                select,
                free_style,
                no_kba,
                collapsed,
            } => {
                assert_eq!(rule_id, "ceph|CEPH_WARN");
                assert!(!collapsed);
                assert_eq!(select, Some(2));
                assert!(free_style.is_none());
                assert!(no_kba);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_validate() {
        let args = Args::try_parse_from(["content-preview", "validate", "{\"a\": 1}"]).unwrap();
        assert!(matches!(args.command, Command::Validate { text } if text == "{\"a\": 1}"));
    }

    #[test]
    fn test_invalid_sort_column_rejected() {
        let result = Args::try_parse_from(["content-preview", "table", "--sort", "hits"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result = Args::try_parse_from(["content-preview", "--format", "markdown", "table"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["content-preview"]).is_err());
    }
}
