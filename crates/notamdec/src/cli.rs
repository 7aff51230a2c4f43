use std::fmt::Display;

use clap::{error::ErrorKind, CommandFactory, Parser};

/// Standard input filename
const STDIN_FILE: &str = "-";

const USAGE_SHORT: &str = r#"
This program reads a feed of FAA-style NOTAMs, each beginning with "!", and prints each decoded NOTAM.

See --help for more details.
"#;

const USAGE_LONG: &str = r#"
This program reads a feed of FAA-style NOTAMs, each beginning with "!", and prints each decoded NOTAM.

    echo '!ABC 07/003 XYZ NAV VOR OTS WEF 0407141200-0407162000' \
        | notamdec

NOTAMs may be separated by line breaks or simply run together. Text before the first "!" is ignored.

Keyword contractions like RWY and CLSD are expanded using a built-in table. You can add to or override the table with --keywords. The file contains one entry per line:

    # comments and blank lines are ignored
    PPR = Prior Permission Required
    FICON = Field Condition

Messages which cannot be decoded are reported on the log and skipped. With --strict, the exit status is 2 if any message was skipped this way.
"#;

/// Top-level program arguments
#[derive(Parser, Clone, Debug)]
#[command(version)]
#[command(about, long_about = None)]
#[command(after_help = USAGE_SHORT, after_long_help = USAGE_LONG)]
#[command(max_term_width = 100)]
pub struct Args {
    /// Verbosity level (-vvv for more)
    #[arg(short, long, default_value_t = 0, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print NOTHING, not even decoded NOTAMs
    #[arg(short, long)]
    pub quiet: bool,

    /// Input file (or "-" for stdin)
    #[arg(long, default_value_t = STDIN_FILE.to_string())]
    pub file: String,

    /// Extra keyword table
    ///
    /// Lines of "KEYWORD = Expansion". Entries take precedence
    /// over the built-in table.
    #[arg(long, value_name = "FILE")]
    pub keywords: Option<String>,

    /// Do not use the built-in keyword table
    #[arg(long)]
    pub no_builtin_keywords: bool,

    /// Only print NOTAMs which are in effect now
    ///
    /// NOTAMs without a decodable effective time are
    /// always printed.
    #[arg(long)]
    pub active_only: bool,

    /// Exit with status 2 if any message fails to decode
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    /// Return true if the user requests input from stdin
    pub fn input_is_stdin(&self) -> bool {
        self.file == STDIN_FILE
    }
}

/// A program-level error with exit code
#[derive(Debug)]
pub struct CliError {
    error: anyhow::Error,
    exit_code: i32,
}

impl CliError {
    /// Create new error with a custom exit code
    pub fn new(error: anyhow::Error, code: i32) -> CliError {
        CliError {
            error,
            exit_code: code,
        }
    }

    /// Print this error to the terminal
    ///
    /// Errors from clap are printed verbatim. Other types of errors
    /// are printed indirectly via clap's fancy formatter.
    pub fn print(&self) -> std::io::Result<()> {
        if let Some(e) = self.error.downcast_ref::<clap::Error>() {
            e.print()
        } else {
            Args::command()
                .error(ErrorKind::Format, self.to_string())
                .print()
        }
    }

    /// Print this error to the terminal and exit
    pub fn exit(&self) -> ! {
        drop(self.print());
        std::process::exit(self.exit_code);
    }

    /// Exit code
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.error)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> CliError {
        CliError::new(err, 1)
    }
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> CliError {
        let code = if err.use_stderr() { 1 } else { 0 };
        CliError::new(err.into(), code)
    }
}
