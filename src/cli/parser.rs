use clap::{Parser, Subcommand};

/// Command-line interface definition for flowlogger
#[derive(Parser)]
#[command(
    name = "flowlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small activity logger: record start/note/stop events into a local CSV file",
    long_about = None
)]
pub struct Cli {
    /// Override the CSV log path (useful for tests or a custom log)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the log file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log a single event without opening the dialog
    Log {
        /// start | note | stop (anything else is logged as an unpromoted note)
        #[arg(long = "event", short = 'e', default_value = "note")]
        event: String,

        #[arg(long = "note", short = 'n', default_value = "")]
        note: String,

        #[arg(long = "tags", short = 't', default_value = "")]
        tags: String,

        #[arg(long = "promote", help = "Make a standalone note a new session start")]
        promote: bool,
    },

    /// Listen for the trigger and log events interactively
    Run {
        #[arg(long = "open", help = "Open the dialog immediately")]
        open: bool,
    },
}
