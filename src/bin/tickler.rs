use anyhow::{Context, Result};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::env;
use tickler::cli::{CliArgs, Command, print_help};
use tickler::client::TrelloClient;
use tickler::config::Config;
use tickler::context::StandardContext;
use tickler::scheduler::{Schedule, add_recurring_items};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let binary_name = args.first().map(String::as_str).unwrap_or("tickler");

    let cli = match CliArgs::parse(args.iter().skip(1)) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Try '{} --help'.", binary_name);
            std::process::exit(2);
        }
    };

    let ctx = StandardContext::new(cli.root.clone());

    match cli.command {
        Command::Help => {
            print_help(binary_name);
            Ok(())
        }
        Command::Init => {
            let path = Config::get_path_string(&ctx)?;
            if Config::init(&ctx)? {
                println!("Wrote template config to {}", path);
            } else {
                println!("Config already exists at {}", path);
            }
            Ok(())
        }
        Command::Run => run(&ctx, &cli).await,
    }
}

async fn run(ctx: &StandardContext, cli: &CliArgs) -> Result<()> {
    let config = Config::load(ctx).context("Could not load configuration")?;

    let level = match cli.log_level {
        Some(level) => level,
        None => config.log_level_filter()?,
    };
    let log_config = ConfigBuilder::new().set_time_level(log::LevelFilter::Off).build();
    if let Err(e) = TermLogger::init(level, log_config, TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("Logging disabled: {}", e);
    }

    let mut schedule = Schedule::from_config(&config);
    schedule.options.dry_run = cli.dry_run;
    if cli.allow_duplicates {
        schedule.options.allow_duplicates = true;
    }

    let today = cli
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let gateway = TrelloClient::from_config(&config).context("Could not create Trello client")?;
    let report = add_recurring_items(&gateway, &schedule, today)
        .await
        .with_context(|| format!("Run for {} failed", today))?;

    log::info!(
        "{}: {} candidate(s), {} {}",
        report.date,
        report.candidates.len(),
        report.created.len(),
        if schedule.options.dry_run {
            "to create"
        } else {
            "created"
        }
    );
    Ok(())
}
