mod client;
mod commands;
mod render;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use dayplan_core::config::DayplanConfig;
use dayplan_core::date_grid::CalendarView;

use crate::client::Client;
use crate::commands::EventArgs;

#[derive(Parser)]
#[command(name = "dayplan")]
#[command(about = "View, search and schedule events on a dayplan server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month containing a date
    Month {
        /// Any date in the month (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Show the Sunday-Saturday week containing a date
    Week {
        /// Any date in the week (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// List events in a week or month, optionally filtered by a search term
    List {
        /// Match against title, description and location
        #[arg(short, long, default_value = "")]
        search: String,

        #[arg(short, long, value_enum, default_value_t = ViewArg::Month)]
        view: ViewArg,

        /// Reference date for the view (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Create an event
    Add {
        #[command(flatten)]
        event: EventArgs,

        /// Save even if the event overlaps existing ones
        #[arg(short, long)]
        yes: bool,
    },
    /// Edit an existing event
    Edit {
        id: String,

        #[command(flatten)]
        event: EventArgs,

        /// Save even if the event overlaps existing ones
        #[arg(short, long)]
        yes: bool,
    },
    /// Delete an event
    Delete { id: String },
    /// Print reminders for events that are about to start
    Remind {
        /// Keep checking every second
        #[arg(short, long)]
        watch: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ViewArg {
    Week,
    Month,
}

impl From<ViewArg> for CalendarView {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Week => CalendarView::Week,
            ViewArg::Month => CalendarView::Month,
        }
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = DayplanConfig::load()?;
    let client = Client::connect(&config).await?;

    match cli.command {
        Commands::Month { date } => commands::month::run(&client, date.unwrap_or_else(today)).await,
        Commands::Week { date } => commands::week::run(&client, date.unwrap_or_else(today)).await,
        Commands::List { search, view, date } => {
            commands::list::run(&client, &search, date.unwrap_or_else(today), view.into()).await
        }
        Commands::Add { event, yes } => commands::add::run(&client, event, yes).await,
        Commands::Edit { id, event, yes } => commands::edit::run(&client, &id, event, yes).await,
        Commands::Delete { id } => commands::delete::run(&client, &id).await,
        Commands::Remind { watch } => commands::remind::run(&client, watch).await,
    }
}
