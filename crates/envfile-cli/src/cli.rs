//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Remove a named environment block from a configuration file
///
/// Examples:
///   remove-env IDEEnvs Gast              # Remove the 'Gast' environment
///   remove-env IDEEnvs Gast --dry-run    # Show the diff without writing
#[derive(Parser, Debug)]
#[command(name = "remove-env")]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the configuration file to edit in place
    #[arg(allow_hyphen_values = true)]
    pub file_path: PathBuf,

    /// Name of the environment to remove
    #[arg(allow_hyphen_values = true)]
    pub environment_name: String,

    /// Print the change as a unified diff without writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_positionals() {
        let cli = Cli::try_parse_from(["remove-env", "IDEEnvs", "Gast"]).unwrap();
        assert_eq!(cli.file_path, PathBuf::from("IDEEnvs"));
        assert_eq!(cli.environment_name, "Gast");
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_parse_dry_run() {
        let cli = Cli::try_parse_from(["remove-env", "--dry-run", "IDEEnvs", "Gast"]).unwrap();
        assert!(cli.dry_run);
    }

    #[test]
    fn test_name_starting_with_hyphen() {
        let cli = Cli::try_parse_from(["remove-env", "IDEEnvs", "-Gast"]).unwrap();
        assert_eq!(cli.environment_name, "-Gast");

        let cli = Cli::try_parse_from(["remove-env", "IDEEnvs", "-1"]).unwrap();
        assert_eq!(cli.environment_name, "-1");
    }

    #[test]
    fn test_hyphen_name_with_trailing_flag() {
        let cli = Cli::try_parse_from(["remove-env", "IDEEnvs", "-old", "--dry-run"]).unwrap();
        assert_eq!(cli.environment_name, "-old");
        assert!(cli.dry_run);
    }

    #[test]
    fn test_missing_name_is_rejected() {
        assert!(Cli::try_parse_from(["remove-env", "IDEEnvs"]).is_err());
    }

    #[test]
    fn test_extra_positional_is_rejected() {
        assert!(Cli::try_parse_from(["remove-env", "IDEEnvs", "Gast", "extra"]).is_err());
    }
}
