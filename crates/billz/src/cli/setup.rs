use clap::{Parser, Subcommand, ValueEnum};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "billz", bin_name = "billz", version = get_version())]
#[command(about = "An interactive terminal board for invoices", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive session (default)
    Shell,

    /// Generate sample invoices in a fresh session and print the board
    Demo {
        /// Number of invoices to generate (defaults to sample-count)
        #[arg(short, long)]
        count: Option<usize>,
    },

    /// Print the invoice schema
    Fields,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective value of a key
    Get { key: String },

    /// Persist a value for a key
    Set { key: String, value: String },

    /// Revert a key to its default
    Unset { key: String },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DemoSwitch {
    On,
    Off,
}

/// One line typed into a session.
#[derive(Parser, Debug)]
#[command(
    name = "billz",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum SessionCommand {
    /// Create an invoice
    New {
        /// Pre-fill the form with sample data (demo mode)
        #[arg(long)]
        sample: bool,

        /// Field values, e.g. --set value=120 --set status=due
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },

    /// List the visible invoices
    #[command(alias = "ls")]
    List,

    /// Show one invoice
    Show { id: String },

    /// Filter by status; no status clears the filter
    Filter { status: Option<String> },

    /// Summary cards per status
    Summary,

    /// Remove invoices by id
    #[command(alias = "rm")]
    Remove {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Change fields of an invoice
    Modify {
        id: String,
        #[arg(value_name = "KEY=VALUE")]
        changes: Vec<String>,
    },

    /// Generate a burst of sample invoices (demo mode)
    Sample {
        #[arg(short, long)]
        count: Option<usize>,
    },

    /// Switch demo mode on or off; no argument toggles it
    Demo { switch: Option<DemoSwitch> },

    /// Print the visible invoices as JSON
    Export,

    /// Print the invoice schema
    Fields,

    /// Print applied store transitions
    Log {
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print this help
    Help,

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

/// Session commands as shown by `help`, in display order.
pub const SESSION_HELP: &[(&str, &str)] = &[
    ("new [--sample] [--set key=value]...", "Create an invoice"),
    ("list", "List the visible invoices"),
    ("show <id>", "Show one invoice"),
    ("filter [status]", "Filter by status; no status clears the filter"),
    ("summary", "Summary cards per status"),
    ("remove <id>...", "Remove invoices by id"),
    ("modify <id> [key=value]...", "Change fields of an invoice"),
    ("sample [--count N]", "Generate sample invoices (demo mode)"),
    ("demo [on|off]", "Switch demo mode"),
    ("export", "Print the visible invoices as JSON"),
    ("fields", "Print the invoice schema"),
    ("log [--limit N]", "Print applied store transitions"),
    ("help", "Print this help"),
    ("quit", "Leave the session"),
];

/// Parses one session line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_session_line(line: &str) -> Result<Option<SessionCommand>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let words = split_words(trimmed)?;
    SessionLine::try_parse_from(words)
        .map(|parsed| Some(parsed.command))
        .map_err(|e| e.to_string().trim_end().to_string())
}

/// Splits a line into words, honoring single quotes, double quotes and backslash escapes.
pub fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => current.push(c),
            (_, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => return Err("Trailing backslash".to_string()),
            },
            (Some(_), c) => current.push(c),
            (None, '"') | (None, '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("Unclosed quote: {}", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
