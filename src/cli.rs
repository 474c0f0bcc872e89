//! Command line surface.

use std::path::PathBuf;

use clap::{
    Args,
    Parser,
    Subcommand,
};
use thiserror::Error;

use crate::config::{
    ConfigError,
    ConfigManager,
};
use crate::jobs::{
    self,
    JobError,
};

/// Shown below the option list of `--help`.
const AFTER_HELP: &str = "\
Each job is one entry point and needs a subcommand. The jobs take no further arguments:
  privacy-i18n update-en        writes the English section into public/assets/i18n/en.json
  privacy-i18n seed-fallback    seeds es.json and ua.json from the Spanish content and de.json";

#[derive(Parser, Debug)]
#[command(
    name = "privacy-i18n",
    about = "Populates the privacy policy section of the app's locale files",
    version,
    arg_required_else_help = true,
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Config file (default: `.privacy-i18n.json` in the working directory, if present)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the `<lang>.json` locale files
    #[arg(long, value_name = "DIR", global = true)]
    pub i18n_dir: Option<PathBuf>,

    /// Log at debug level unless `RUST_LOG` is set
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Write the complete English section into en.json
    UpdateEn(WriteArgs),
    /// Seed target locales from the Spanish content, copying gaps from the base locale
    SeedFallback(WriteArgs),
    /// Report the section's completeness in every locale file
    Status,
}

#[derive(Args, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteArgs {
    /// Load and merge without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Job(#[from] JobError),
}

/// Runs a parsed command from `workspace_root` and returns the confirmation to print.
///
/// # Errors
/// Configuration or job failure.
pub fn run(cli: Cli, workspace_root: PathBuf) -> Result<String, CliError> {
    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(workspace_root, cli.config.as_deref())?;
    if let Some(dir) = cli.i18n_dir {
        config_manager.override_i18n_dir(dir);
    }
    let settings = config_manager.get_settings();

    let output = match cli.command {
        Commands::UpdateEn(args) => jobs::update_english(settings, args.dry_run)?.to_string(),
        Commands::SeedFallback(args) => jobs::seed_fallback(settings, args.dry_run)?.to_string(),
        Commands::Status => jobs::status(settings)?.to_string(),
    };

    Ok(output)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use clap::CommandFactory;
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::test_utils::{
        create_i18n_dir,
        read_locale,
    };

    #[rstest]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[rstest]
    #[case(&["privacy-i18n", "update-en"], Commands::UpdateEn(WriteArgs { dry_run: false }))]
    #[case(&["privacy-i18n", "seed-fallback", "--dry-run"], Commands::SeedFallback(WriteArgs { dry_run: true }))]
    #[case(&["privacy-i18n", "status"], Commands::Status)]
    fn parse_subcommands(#[case] argv: &[&str], #[case] expected: Commands) {
        let cli = Cli::try_parse_from(argv).unwrap();

        assert_eq!(cli.command, expected);
    }

    #[googletest::test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["privacy-i18n", "status", "--i18n-dir", "locales", "-v"])
            .unwrap();

        expect_that!(cli.verbose, eq(true));
        assert_eq!(cli.i18n_dir, Some(PathBuf::from("locales")));
    }

    #[rstest]
    fn parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["privacy-i18n"]).is_err());
    }

    #[googletest::test]
    fn help_explains_argument_free_jobs() {
        let help = Cli::command().render_long_help().to_string();

        expect_that!(help, contains_substring("take no further arguments"));
        expect_that!(help, contains_substring("privacy-i18n update-en"));
        expect_that!(help, contains_substring("privacy-i18n seed-fallback"));
    }

    #[rstest]
    fn run_with_relative_i18n_dir() {
        let root = create_i18n_dir(&[]);
        fs::create_dir(root.path().join("i18n")).unwrap();
        fs::write(root.path().join("i18n").join("en.json"), "{}").unwrap();
        let cli = Cli::try_parse_from(["privacy-i18n", "update-en", "--i18n-dir", "i18n"]).unwrap();

        let output = run(cli, root.path().to_path_buf()).unwrap();

        assert_eq!(output, "Wrote PRIVACY to en.json (243 keys)");
        let written: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(root.path().join("i18n").join("en.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(written["PRIVACY"]["FOOTER"], json!("This is a passion project. Use at your own risk."));
    }

    #[rstest]
    fn run_reads_config_file_from_workspace() {
        let root = create_i18n_dir(&[("de", json!({})), ("es", json!({}))]);
        fs::write(
            root.path().join(".privacy-i18n.json"),
            r#"{"i18nDir": ".", "fallback": {"targetLanguages": ["es"]}}"#,
        )
        .unwrap();
        let cli = Cli::try_parse_from(["privacy-i18n", "seed-fallback"]).unwrap();

        let output = run(cli, root.path().to_path_buf()).unwrap();

        assert!(output.starts_with("Wrote PRIVACY to es.json (14 keys"));
        assert_eq!(read_locale(&root, "es")["PRIVACY"]["TITLE"], json!("Política de Privacidad"));
    }

    #[rstest]
    fn run_reports_invalid_config() {
        let root = create_i18n_dir(&[]);
        fs::write(root.path().join(".privacy-i18n.json"), r#"{"section": ""}"#).unwrap();
        let cli = Cli::try_parse_from(["privacy-i18n", "status"]).unwrap();

        let result = run(cli, root.path().to_path_buf());

        assert!(matches!(result, Err(CliError::Config(ConfigError::ValidationErrors(_)))));
    }
}
