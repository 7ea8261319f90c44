use clap::{Parser, Subcommand};
use contacts::model::Status;

#[derive(Parser, Debug)]
#[command(name = "contacts", version)]
#[command(about = "Keep a small list of contacts on this machine", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List contacts
    #[command(alias = "ls")]
    List {
        /// Only show contacts with this status (active, inactive)
        #[arg(short, long)]
        status: Option<Status>,
    },

    /// Add a contact
    #[command(alias = "n")]
    Add {
        name: String,

        email: String,

        #[arg(short, long)]
        company: Option<String>,

        /// active or inactive (default: active)
        #[arg(short, long)]
        status: Option<Status>,
    },

    /// Edit a contact; omitted fields keep their value
    #[command(alias = "e")]
    Edit {
        /// Id of the contact
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        /// Use "" to clear
        #[arg(short, long)]
        company: Option<String>,

        #[arg(short, long)]
        status: Option<Status>,
    },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete {
        /// Id of the contact
        id: String,
    },

    /// Show contact counts
    Stats,

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, persist, log-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
