//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_list_and_status() {
    match parse(&["rcsel", "list"]).command {
        CliCommand::List => {}
        _ => panic!("expected List"),
    }
    match parse(&["rcsel", "status"]).command {
        CliCommand::Status => {}
        _ => panic!("expected Status"),
    }
}

#[test]
fn cli_parse_preview_takes_a_variant() {
    match parse(&["rcsel", "preview", "vu_zero"]).command {
        CliCommand::Preview { variant } => assert_eq!(variant, "vu_zero"),
        _ => panic!("expected Preview"),
    }
}

#[test]
fn cli_parse_apply_takes_a_variant() {
    match parse(&["rcsel", "apply", "dm920"]).command {
        CliCommand::Apply { variant } => assert_eq!(variant, "dm920"),
        _ => panic!("expected Apply"),
    }
}

#[test]
fn cli_parse_reset() {
    match parse(&["rcsel", "reset"]).command {
        CliCommand::Reset => {}
        _ => panic!("expected Reset"),
    }
}

#[test]
fn cli_parse_model_is_global() {
    let cli = parse(&["rcsel", "apply", "vu_zero", "--model", "dm920"]);
    assert_eq!(cli.model.as_deref(), Some("dm920"));
    let cli = parse(&["rcsel", "status"]);
    assert!(cli.model.is_none());
}

#[test]
fn cli_rejects_missing_variant() {
    assert!(Cli::try_parse_from(["rcsel", "apply"]).is_err());
    assert!(Cli::try_parse_from(["rcsel", "preview"]).is_err());
}
