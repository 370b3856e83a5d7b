pub mod commands;

use clap::{Parser, Subcommand};

use crate::domain::{Service, UpdateDay};

#[derive(Parser)]
#[command(name = "toondex")]
#[command(about = "Webtoon catalog ingester", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ingest one listing page and reconcile it with the store
    Ingest {
        /// Service to list
        #[arg(short, long, value_enum, default_value_t = Service::Kakao)]
        service: Service,

        /// Update-day category to list
        #[arg(short, long, value_enum, default_value_t = UpdateDay::Finished)]
        update_day: UpdateDay,

        /// Listing page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Run the browser with a visible window
        #[arg(long)]
        headed: bool,
    },
    /// List stored webtoon documents
    List,
}
