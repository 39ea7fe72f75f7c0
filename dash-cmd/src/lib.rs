//! Command implementations for the dashboard CLI.
//!
//! Provides subcommands for inspecting the date-range presets and for
//! fetching dashboard stats from the backend.

use chrono::NaiveDateTime;
use clap::{Args, Subcommand, ValueEnum};
use dash_core::dates::{parse_date, start_of_day};
use dash_core::locale::parse_weekday;
use dash_core::{local_now, Locale, PresetCatalog};

pub mod presets;
pub mod stats;

#[derive(Subcommand)]
pub enum Command {
    /// Print the range every preset covers
    Presets {
        #[command(flatten)]
        calendar: CalendarArgs,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Report which preset produced a range, or "custom"
    Match {
        /// First day of the range (YYYY-MM-DD)
        #[arg(short = 's', long)]
        start: String,

        /// Last day of the range (YYYY-MM-DD)
        #[arg(short = 'e', long)]
        end: String,

        #[command(flatten)]
        calendar: CalendarArgs,
    },

    /// Fetch dashboard stats for a preset or an explicit range
    Stats {
        /// Backend origin
        #[arg(long, default_value = "http://localhost:8000")]
        base_url: String,

        /// Business id
        #[arg(short = 'b', long)]
        business: String,

        /// Preset key, e.g. this_month
        #[arg(short = 'p', long, conflicts_with_all = ["start", "end"])]
        preset: Option<String>,

        /// First day of the range (YYYY-MM-DD)
        #[arg(short = 's', long, requires = "end")]
        start: Option<String>,

        /// Last day of the range (YYYY-MM-DD)
        #[arg(short = 'e', long, requires = "start")]
        end: Option<String>,

        #[command(flatten)]
        calendar: CalendarArgs,
    },
}

/// Clock and week settings shared by the commands.
#[derive(Args, Clone, Debug)]
pub struct CalendarArgs {
    /// Evaluate presets as if today were this date (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<String>,

    /// First day of the week
    #[arg(long, default_value = "sun")]
    pub week_start: String,
}

impl CalendarArgs {
    pub fn now(&self) -> anyhow::Result<NaiveDateTime> {
        match &self.today {
            Some(day) => Ok(start_of_day(parse_date(day)?)),
            None => Ok(local_now()),
        }
    }

    pub fn catalog(&self) -> anyhow::Result<PresetCatalog> {
        let locale = Locale::default().with_week_start(parse_weekday(&self.week_start)?);
        Ok(PresetCatalog::standard(locale))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Presets { calendar, format } => {
            presets::run_presets(&calendar.catalog()?, calendar.now()?, format)
        }
        Command::Match {
            start,
            end,
            calendar,
        } => presets::run_match(&calendar.catalog()?, calendar.now()?, &start, &end),
        Command::Stats {
            base_url,
            business,
            preset,
            start,
            end,
            calendar,
        } => {
            let catalog = calendar.catalog()?;
            let range = stats::resolve_range(
                &catalog,
                calendar.now()?,
                preset.as_deref(),
                start.as_deref().zip(end.as_deref()),
            )?;
            stats::run_stats(&base_url, &business, range, catalog.locale()).await
        }
    }
}
