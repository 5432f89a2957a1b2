// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::options::{AppOptions, CastSelector, ExportOptions, Language};
use crate::progress::Progress;
use crate::runner;

/// Generates a Letterboxd-compatible CSV from a FilmAffinity user's ratings.
#[derive(Parser, Debug)]
#[command(name = "fa_scrape", version, about)]
pub struct Cli {
    /// FilmAffinity user id
    pub id: String,

    /// Name of the export file (default: filmAffinity_<id>.csv)
    #[arg(long = "csv", value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Directory to write the export into
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Site language; also selects how watched dates are parsed
    #[arg(long, value_enum, default_value_t = Language::En)]
    pub lang: Language,

    /// Skip the date headers and drop the WatchedDate column
    #[arg(long)]
    pub no_watched_date: bool,

    /// Which block holds the cast list
    #[arg(long, value_enum, default_value_t = CastSelector::Credits)]
    pub cast: CastSelector,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::for_user(self.id.trim());
        opts.scrape.extract.language = self.lang;
        opts.scrape.extract.extract_watched_date = !self.no_watched_date;
        opts.scrape.extract.cast_selector = self.cast;
        opts.export = ExportOptions {
            out: self.csv.clone(),
            out_dir: self.out_dir.clone(),
        };
        opts
    }
}

/// Prints one line per page to stdout.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, user_id: &str) {
        println!("Downloading ratings for user {user_id}");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn page_done(&mut self, page: u32, rows: usize) {
        println!("Page {page}: {rows} ratings");
    }
    fn finish(&mut self, pages: u32, records: usize) {
        println!("Download complete: {records} ratings over {pages} pages");
    }
}

pub fn run() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    crate::log::init(cli.verbose);

    let opts = cli.to_options();
    let mut progress = ConsoleProgress;
    runner::run_http(&opts, Some(&mut progress))?;
    Ok(())
}
