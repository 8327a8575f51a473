// File: ./src/cli.rs
//! Command-line parsing and help text for the `tickler` binary.
use chrono::NaiveDate;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Promote the recurring items due on the run date.
    Run,
    /// Write a template config file.
    Init,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: Command,
    pub root: Option<PathBuf>,
    pub date: Option<NaiveDate>,
    pub dry_run: bool,
    pub allow_duplicates: bool,
    /// Overrides the configured log level.
    pub log_level: Option<LevelFilter>,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            command: Command::Run,
            root: None,
            date: None,
            dry_run: false,
            allow_duplicates: false,
            log_level: None,
        }
    }
}

impl CliArgs {
    /// Parses arguments, excluding the binary name.
    pub fn parse<I, S>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Self::default();
        let mut iter = args.into_iter();

        while let Some(arg) = iter.next() {
            match arg.as_ref() {
                "-h" | "--help" | "help" => out.command = Command::Help,
                "init" => out.command = Command::Init,
                "-r" | "--root" => {
                    let path = iter.next().ok_or("--root requires a path")?;
                    out.root = Some(PathBuf::from(path.as_ref()));
                }
                "-d" | "--date" => {
                    let raw = iter.next().ok_or("--date requires YYYY-MM-DD")?;
                    let date = NaiveDate::parse_from_str(raw.as_ref(), "%Y-%m-%d")
                        .map_err(|e| format!("invalid --date '{}': {}", raw.as_ref(), e))?;
                    out.date = Some(date);
                }
                "-n" | "--dry-run" => out.dry_run = true,
                "--allow-duplicates" => out.allow_duplicates = true,
                "-v" | "--verbose" => out.log_level = Some(LevelFilter::Debug),
                "-q" | "--quiet" => out.log_level = Some(LevelFilter::Warn),
                other => return Err(format!("unknown argument '{}'", other)),
            }
        }
        Ok(out)
    }
}

pub fn print_help(binary_name: &str) {
    println!(
        "Tickler v{} - Promote recurring Trello cards into an active queue",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!(
        "    {} [--root <path>] [--date YYYY-MM-DD] [--dry-run] [--allow-duplicates] [-v|-q]",
        binary_name
    );
    println!("    {} init [--root <path>]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for the config file.");
    println!("    -d, --date <date>     Run as if today were <date> (default: local today).");
    println!("    -n, --dry-run         Read both boards but create nothing.");
    println!("    --allow-duplicates    Create items even if the target list has them.");
    println!("    -v, --verbose         Debug logging.");
    println!("    -q, --quiet           Warnings and errors only.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("SCHEDULE (anchor weekday, Sunday by default):");
    println!("    Weekly                every anchor weekday");
    println!("    Monthly               last anchor weekday of the month");
    println!("    Quarterly             last anchor weekday of Mar, Jun, Sep, Dec");
    println!();
    println!("ENVIRONMENT:");
    println!("    TICKLER_API_KEY       Trello API key (overrides config)");
    println!("    TICKLER_API_TOKEN     Trello API token (overrides config)");
}
