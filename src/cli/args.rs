use clap::{Parser, Subcommand, builder::Styles};

/// Styles for clap output
const STYLES: Styles = Styles::styled()
    .header(clap::builder::styling::AnsiColor::Green.on_default().bold())
    .usage(clap::builder::styling::AnsiColor::Green.on_default().bold())
    .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(clap::builder::styling::AnsiColor::Yellow.on_default());

/// Command line arguments
#[derive(Parser, Debug, Default)]
#[command(name = "keybind-finder")]
#[command(author, version, about)]
#[command(styles = STYLES)]
#[command(
    long_about = "Find which configuration entries bind a given keyboard key or controller button.\n\n\
    Scans PATH (default: current directory) for configuration files, then starts an\n\
    interactive prompt. Use the list subcommand for non-interactive output."
)]
#[command(after_long_help = "Examples:\n  \
    keybind-finder                         # Scan current directory, start prompt\n  \
    keybind-finder ~/Games/MyGame          # Scan another directory\n  \
    keybind-finder --pattern '*.cfg'       # Scan other file types\n  \
    keybind-finder list --json             # Dump the whole index as JSON")]
pub struct CliArgs {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<CliSubCommands>,

    /// Directory to scan (default: current directory)
    #[arg(global = true, value_name = "PATH")]
    pub path: Option<String>,

    /// File name pattern to scan for
    #[arg(global = true, long, value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Maximum scan depth (0 = unlimited)
    #[arg(global = true, long, value_name = "DEPTH")]
    pub max_depth: Option<usize>,

    /// Configuration file to load
    #[arg(
        global = true,
        short,
        long,
        value_name = "FILE",
        help_heading = "Configuration"
    )]
    pub config: Option<String>,

    /// Color theme for console output
    #[arg(
        global = true,
        long,
        value_name = "THEME",
        help_heading = "Configuration"
    )]
    pub theme: Option<String>,

    /// Disable colored output
    #[arg(global = true, long, help_heading = "Configuration")]
    pub no_color: bool,

    /// Print current configuration and exit
    #[arg(global = true, long, help_heading = "Configuration")]
    pub print_config: bool,
}

/// Subcommands and their arguments
#[derive(Subcommand, Debug)]
pub enum CliSubCommands {
    /// List every indexed key and its bindings (non-interactive output)
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON format
        #[arg(long)]
        json: bool,
    },
}
