use clap::{Parser, Subcommand};
use std::path::PathBuf;

use zagweb_core::app::{build_report, print_terms};
use zagweb_core::config::ClientConfig;
use zagweb_core::error::Result;
use zagweb_core::{Mode, SearchParams, ZagwebRegistration};

/// Query the Zagweb course-registration portal.
///
/// Cookies come from `zagweb.toml` or `ZAGWEB_JSESSIONID` /
/// `ZAGWEB_LB_ROUTE` / `ZAGWEB_COOKIES`, copied from a logged-in browser.
#[derive(Debug, Parser)]
#[command(name = "zagweb", version)]
struct Cli {
    /// Config file (TOML); defaults to ./zagweb.toml when present
    #[arg(long, global = true)]
    config: Option<String>,

    /// Override the portal base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List available terms
    Terms,
    /// Search the course catalogue
    Courses {
        #[arg(long)]
        term: String,
        #[arg(long)]
        subject: String,
        #[arg(long, default_value_t = 10)]
        max: u32,
        #[arg(long, default_value = "search", value_parser = parse_mode)]
        mode: Mode,
    },
    /// Search scheduled classes (sections)
    Classes {
        #[arg(long)]
        term: String,
        #[arg(long)]
        subject: String,
        #[arg(long, default_value_t = 10)]
        max: u32,
        #[arg(long, default_value = "search", value_parser = parse_mode)]
        mode: Mode,
    },
    /// Sections of one course, e.g. --combo CPSC121
    Sections {
        #[arg(long)]
        term: String,
        #[arg(long)]
        combo: String,
        #[arg(long, default_value = "search", value_parser = parse_mode)]
        mode: Mode,
    },
    /// Catalogue courses of a subject and which of them are offered this term
    Report {
        #[arg(long)]
        term: String,
        #[arg(long)]
        subject: String,
        #[arg(long, default_value_t = 100)]
        max: u32,
        /// Write the report here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn parse_mode(s: &str) -> std::result::Result<Mode, String> {
    s.parse::<Mode>().map_err(|e| e.to_string())
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = ClientConfig::load(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let mut zag = ZagwebRegistration::with_base_url(config.base_url.as_str(), config.auth_cookies())?;
    log::debug!("session id {}", zag.unique_session_id());

    match cli.command {
        Command::Terms => {
            let terms = zag.get_terms().await?;
            print_terms(&terms);
        }
        Command::Courses {
            term,
            subject,
            max,
            mode,
        } => {
            zag.change_mode(&term, mode).await?;
            let params = SearchParams::new()
                .term(term.as_str())
                .subject(subject)
                .page_max_size(max.to_string());
            print_json(&zag.get_courses(&params).await?)?;
        }
        Command::Classes {
            term,
            subject,
            max,
            mode,
        } => {
            zag.change_mode(&term, mode).await?;
            let params = SearchParams::new()
                .term(term.as_str())
                .subject(subject)
                .page_offset("0")
                .page_max_size(max.to_string());
            print_json(&zag.get_classes(&params).await?)?;
        }
        Command::Sections { term, combo, mode } => {
            zag.change_mode(&term, mode).await?;
            print_json(&zag.get_course_classes(&combo, &term).await?)?;
        }
        Command::Report {
            term,
            subject,
            max,
            output,
        } => {
            let report = build_report(&mut zag, &term, &subject, max).await?;
            match output {
                Some(path) => {
                    std::fs::write(&path, serde_json::to_string(&report)?)?;
                    log::info!("report written to {}", path.display());
                }
                None => print_json(&report)?,
            }
        }
    }

    Ok(())
}
