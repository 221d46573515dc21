use clap::{Args, Parser, Subcommand};
use clientreg::model::Field;

#[derive(Parser, Debug)]
#[command(name = "clientreg")]
#[command(about = "Register clients with their phone, CPF and car plate", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List clients in name order
    #[command(alias = "ls")]
    List {
        /// Only show clients matching this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search clients by name, phone, CPF or plate
    Search { query: String },

    /// Show one or more clients in full
    #[command(alias = "v")]
    View {
        /// Indexes, ranges or id prefixes (e.g. 1 2-3 3f2a)
        #[arg(required = true, num_args = 1..)]
        targets: Vec<String>,
    },

    /// Register a new client
    #[command(alias = "n")]
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Change fields of one client
    #[command(alias = "e")]
    Edit {
        /// Index or id prefix of the client
        target: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete one or more clients
    #[command(alias = "rm")]
    Delete {
        /// Indexes, ranges or id prefixes (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        targets: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, seed-demo, simulate-latency)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Field values as typed on the command line; masks are applied later.
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Phone, with or without mask (e.g. 11987654321)
    #[arg(long)]
    pub phone: Option<String>,

    /// CPF, with or without mask (e.g. 52998224725)
    #[arg(long)]
    pub cpf: Option<String>,

    /// Car plate (e.g. abc1234)
    #[arg(long)]
    pub plate: Option<String>,
}

impl FieldArgs {
    /// The fields that were given, in form order.
    pub fn values(&self) -> Vec<(Field, String)> {
        [
            (Field::Name, &self.name),
            (Field::Phone, &self.phone),
            (Field::NationalId, &self.cpf),
            (Field::Plate, &self.plate),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.clone().map(|v| (field, v)))
        .collect()
    }
}
