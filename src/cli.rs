use clap::{Parser, Subcommand};
use solar_verify::application::dto::OutputFormat;
use solar_verify::brand_catalog::domain::Category;
use solar_verify::brand_catalog::policies::MatchPolicy;
use solar_verify::shared::error::ExitCode;
use std::path::PathBuf;
use std::process;

/// Category filter accepted on the command line; `all` means no filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryArg(pub Option<Category>);

impl std::str::FromStr for CategoryArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryArg(None));
        }
        s.parse::<Category>()
            .map(|category| CategoryArg(Some(category)))
            .map_err(|_| {
                format!(
                    "Invalid category: {}. Please specify 'all', 'premium', 'standard' or 'budget'",
                    s
                )
            })
    }
}

/// Identify solar panel brands from serial numbers and find their
/// verification portals
#[derive(Parser, Debug)]
#[command(name = "solar-verify")]
#[command(version)]
#[command(about = "Identify solar panel brands from serial numbers and find their verification portals", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format: text, json or markdown [default: text]
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Brand catalog file (.yml, .yaml, .json or .toml) replacing the built-in catalog
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Config file path (defaults to ./solar-verify.config.yml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Serial matching policy: first-match or longest-prefix [default: first-match]
    #[arg(long, global = true)]
    pub policy: Option<MatchPolicy>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress status messages on stderr (warnings are still shown)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Detect the brand from a serial number
    Detect {
        /// Serial number as printed on the panel label
        #[arg(allow_hyphen_values = true)]
        serial: String,
    },

    /// List brands, optionally filtered by category
    List {
        /// all, premium, standard or budget
        #[arg(short, long, default_value = "all")]
        category: CategoryArg,
    },

    /// Search brand names, descriptions and features
    Search {
        query: String,

        /// all, premium, standard or budget
        #[arg(short, long, default_value = "all")]
        category: CategoryArg,
    },

    /// Show one brand and its verification URL
    Show {
        /// Brand id, e.g. "canadian-solar"
        id: String,
    },

    /// Print the serial number prefix guide
    Prefixes,

    /// Report serial prefixes shared across brands
    Audit,
}

impl Args {
    /// Parses the process arguments. Usage errors exit with
    /// `ExitCode::InvalidArguments`; `--help` and `--version` exit successfully.
    pub fn parse_args() -> Self {
        Self::try_parse().unwrap_or_else(|err| {
            let code = exit_code_for(&err);
            let _ = err.print();
            process::exit(code.as_i32())
        })
    }
}

fn exit_code_for(err: &clap::Error) -> ExitCode {
    if err.use_stderr() {
        ExitCode::InvalidArguments
    } else {
        ExitCode::Success
    }
}
