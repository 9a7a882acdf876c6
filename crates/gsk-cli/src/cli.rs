//! Command-line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use gsk_core::{DEFAULT_LIST_LIMIT, DEFAULT_READ_LENGTH};

#[derive(Parser, Debug)]
#[command(name = "gsk")]
#[command(version, about = "Command-line client for a remote program analysis server")]
pub struct Cli {
    /// Analysis server base URL
    #[arg(long, env = "GSK_SERVER", global = true)]
    pub server: Option<String>,

    /// Config file (default: <config dir>/gsk/config.toml)
    #[arg(long, env = "GSK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, env = "GSK_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Class operations
    #[command(subcommand)]
    Class(ClassCommand),

    /// Export operations (entry points)
    #[command(subcommand)]
    Export(ExportCommand),

    /// Import operations (external/library symbols)
    #[command(subcommand)]
    Import(ImportCommand),

    /// Label operations (add/remove symbols at addresses)
    #[command(subcommand)]
    Label(LabelCommand),

    /// Namespace operations
    #[command(subcommand)]
    Namespace(NamespaceCommand),

    /// Read and display memory bytes in hexadecimal
    #[command(long_about = READ_LONG_ABOUT)]
    Read(ReadArgs),
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct LimitArgs {
    /// Maximum number of results
    #[arg(short, long, default_value_t = DEFAULT_LIST_LIMIT)]
    pub limit: usize,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct FilterArgs {
    /// Filter by name
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Maximum number of results
    #[arg(short, long, default_value_t = DEFAULT_LIST_LIMIT)]
    pub limit: usize,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ClassCommand {
    /// List all classes
    #[command(after_help = "Examples:\n  gsk class list\n  gsk class list --limit 100")]
    List(LimitArgs),
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ExportCommand {
    /// List exported entry points
    #[command(
        after_help = "Examples:\n  gsk export list\n  gsk export list --filter main\n  gsk export list --limit 100"
    )]
    List(FilterArgs),
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ImportCommand {
    /// List imported (external) symbols
    #[command(
        after_help = "Examples:\n  gsk import list\n  gsk import list --filter printf\n  gsk import list --limit 100"
    )]
    List(FilterArgs),
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum NamespaceCommand {
    /// List all namespaces
    #[command(after_help = "Examples:\n  gsk namespace list\n  gsk namespace list --limit 100")]
    List(LimitArgs),
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum LabelCommand {
    /// List all labels or labels at a specific address
    #[command(
        after_help = "Examples:\n  gsk label list\n  gsk label list --address 0x401234\n  gsk label list --limit 100"
    )]
    List {
        /// Only list labels at this address
        #[arg(short, long)]
        address: Option<String>,

        /// Maximum number of results
        #[arg(short, long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: usize,
    },

    /// Add a label at an address
    ///
    /// Labels are created in the global namespace unless --local is given,
    /// which scopes the label to the containing function.
    #[command(
        after_help = "Examples:\n  gsk label add 0x401234 loop_start\n  gsk label add 0x401234 inner_loop --local\n  gsk label add 0x401234 global_marker --global"
    )]
    Add {
        /// Address to label
        address: String,

        /// Label name
        name: String,

        /// Create label in function-local scope
        #[arg(short = 'L', long, conflicts_with = "global")]
        local: bool,

        /// Create label in global scope (default)
        #[arg(short, long)]
        global: bool,
    },

    /// Delete a label at an address
    #[command(after_help = "Examples:\n  gsk label delete 0x401234 loop_start")]
    Delete {
        /// Address of the label
        address: String,

        /// Label name
        name: String,
    },
}

const READ_LONG_ABOUT: &str = "\
Read bytes from memory at the specified address and display them
as a hex dump with ASCII representation.

The output format shows:
- Address column
- 16 hex bytes per line (with a gap after 8 bytes)
- ASCII representation (printable characters, '.' for non-printable)

The address must be a numeric hex value (e.g. 0x401234 or 401234).
Symbol names and space-qualified addresses such as ram:00401234 are
not accepted, since the dump needs a numeric start address.

Examples:
  # Read 256 bytes (default) starting at address
  gsk read 0x401234

  # Read specific number of bytes
  gsk read 0x401234 64

  # Read using flag for length
  gsk read 0x401234 --length 512";

#[derive(Args, Debug, PartialEq, Eq)]
pub struct ReadArgs {
    /// Start address (numeric hex, with or without 0x prefix; no symbol names)
    pub address: String,

    /// Number of bytes to read; overrides --length when a positive integer
    #[arg(value_name = "LENGTH")]
    pub length_arg: Option<String>,

    /// Number of bytes to read (max 65536)
    #[arg(short, long, default_value_t = DEFAULT_READ_LENGTH)]
    pub length: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gsk").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_defaults() {
        let cli = parse(&["class", "list"]);
        assert_eq!(
            cli.command,
            Command::Class(ClassCommand::List(LimitArgs { limit: 1000 }))
        );

        let cli = parse(&["export", "list", "-f", "main", "-l", "5"]);
        assert_eq!(
            cli.command,
            Command::Export(ExportCommand::List(FilterArgs {
                filter: Some("main".to_string()),
                limit: 5,
            }))
        );
    }

    #[test]
    fn test_label_add_scope_flags() {
        let cli = parse(&["label", "add", "0x401234", "inner_loop", "--local"]);
        assert_eq!(
            cli.command,
            Command::Label(LabelCommand::Add {
                address: "0x401234".to_string(),
                name: "inner_loop".to_string(),
                local: true,
                global: false,
            })
        );

        let result = Cli::try_parse_from(["gsk", "label", "add", "0x1", "x", "-L", "-g"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_label_add_requires_two_args() {
        assert!(Cli::try_parse_from(["gsk", "label", "add", "0x401234"]).is_err());
        assert!(Cli::try_parse_from(["gsk", "label", "delete", "0x401234"]).is_err());
    }

    #[test]
    fn test_read_args() {
        let cli = parse(&["read", "0x401234", "64"]);
        assert_eq!(
            cli.command,
            Command::Read(ReadArgs {
                address: "0x401234".to_string(),
                length_arg: Some("64".to_string()),
                length: 256,
            })
        );

        let cli = parse(&["read", "0x401234", "--length", "512"]);
        assert_eq!(
            cli.command,
            Command::Read(ReadArgs {
                address: "0x401234".to_string(),
                length_arg: None,
                length: 512,
            })
        );

        assert!(Cli::try_parse_from(["gsk", "read"]).is_err());
        assert!(Cli::try_parse_from(["gsk", "read", "0x1", "2", "3"]).is_err());
    }

    #[test]
    fn test_read_help_states_address_format() {
        let mut command = Cli::command();
        let read = command.find_subcommand_mut("read").unwrap();
        let help = read.render_long_help().to_string();
        assert!(help.contains("must be a numeric hex value"));
        assert!(help.contains("ram:00401234"));
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = parse(&["read", "0x10", "--server", "http://ghidra:8080", "-v"]);
        assert_eq!(cli.server.as_deref(), Some("http://ghidra:8080"));
        assert!(cli.verbose);
    }
}
