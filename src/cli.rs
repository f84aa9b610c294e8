#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// File that stores past calculations
    #[arg(long, global = true, default_value = crate::history::DEFAULT_HISTORY_FILE)]
    pub history_file: std::path::PathBuf,

    /// Do not record calculations
    #[arg(long, global = true)]
    pub no_history: bool,

    /// Write the log to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<std::path::PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Value,
    Tree,
    Tokens,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Evaluate a single expression
    Eval {
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Ignore anything after the first complete expression
        #[arg(long)]
        lenient: bool,

        /// Specifies what to print
        #[arg(short, long)]
        #[clap(value_enum, default_value_t = OutputFormat::Value)]
        format: OutputFormat,
    },

    /// Read expressions from stdin, one per line
    Repl {
        /// Ignore anything after the first complete expression
        #[arg(long)]
        lenient: bool,
    },

    /// Show past calculations
    History {
        /// Only show the most recent entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Delete the history file
        #[arg(long)]
        clear: bool,
    },
}
