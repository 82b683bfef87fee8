//! Tests for CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

use super::cli::{Cli, Command};
use super::defaults;
use super::input::InputFormat;

mod parsing {
    use super::*;

    #[test]
    fn no_args_renders_from_stdin() {
        let cli = Cli::parse_from_iter(["kea-render"]);

        assert!(cli.command.is_none());
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
        assert!(cli.format.is_none());
        assert_eq!(cli.filter, defaults::FILTER);
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_input_and_output() {
        let cli = Cli::parse_from_iter([
            "kea-render",
            "-i",
            "site.yaml",
            "--output",
            "/etc/kea/kea-dhcp4.conf",
        ]);

        assert_eq!(cli.input, Some(PathBuf::from("site.yaml")));
        assert_eq!(cli.output, Some(PathBuf::from("/etc/kea/kea-dhcp4.conf")));
    }

    #[test]
    fn parse_all_formats() {
        let json = Cli::parse_from_iter(["kea-render", "--format", "json"]);
        assert_eq!(json.format, Some(InputFormat::Json));

        let yaml = Cli::parse_from_iter(["kea-render", "-f", "yaml"]);
        assert_eq!(yaml.format, Some(InputFormat::Yaml));

        let toml = Cli::parse_from_iter(["kea-render", "-f", "toml"]);
        assert_eq!(toml.format, Some(InputFormat::Toml));
    }

    #[test]
    fn parse_filter_and_verbose() {
        let cli = Cli::parse_from_iter(["kea-render", "--filter", "render_kea4_file", "-v"]);

        assert_eq!(cli.filter, "render_kea4_file");
        assert!(cli.verbose);
    }

    #[test]
    fn invalid_format_is_rejected() {
        let result = Cli::try_parse_from(["kea-render", "--format", "xml"]);
        assert!(result.is_err());
    }
}

mod subcommands {
    use super::*;

    #[test]
    fn render_accepts_global_args_after_subcommand() {
        let cli = Cli::parse_from_iter(["kea-render", "render", "-i", "in.json", "-o", "out.conf"]);

        assert!(matches!(cli.command, Some(Command::Render)));
        assert_eq!(cli.input, Some(PathBuf::from("in.json")));
        assert_eq!(cli.output, Some(PathBuf::from("out.conf")));
    }

    #[test]
    fn init_default_path() {
        let cli = Cli::parse_from_iter(["kea-render", "init"]);

        match cli.command {
            Some(Command::Init { to }) => assert_eq!(to, PathBuf::from(defaults::INIT_OUTPUT)),
            other => panic!("expected init, got {other:?}"),
        }
    }

    #[test]
    fn init_custom_path() {
        let cli = Cli::parse_from_iter(["kea-render", "init", "--to", "custom.yaml"]);

        match cli.command {
            Some(Command::Init { to }) => assert_eq!(to, PathBuf::from("custom.yaml")),
            other => panic!("expected init, got {other:?}"),
        }
    }

    #[test]
    fn filters_subcommand() {
        let cli = Cli::parse_from_iter(["kea-render", "filters"]);
        assert!(matches!(cli.command, Some(Command::Filters)));
    }

    #[test]
    fn options_with_and_without_query() {
        let all = Cli::parse_from_iter(["kea-render", "options"]);
        assert!(matches!(all.command, Some(Command::Options { query: None })));

        let one = Cli::parse_from_iter(["kea-render", "options", "routers"]);
        match one.command {
            Some(Command::Options { query }) => assert_eq!(query.as_deref(), Some("routers")),
            other => panic!("expected options, got {other:?}"),
        }
    }
}
