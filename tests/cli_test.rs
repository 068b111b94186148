use clap::Parser;
use nin::cli::{Action, Cli};

// Helper function to parse a command line the way the binary does
fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("nin").chain(args.iter().copied()))
}

#[test]
fn test_no_arguments_prints_usage() {
    assert_eq!(parse(&[]).unwrap().action(), Action::Usage);
}

#[test]
fn test_note_without_task_prints_usage() {
    assert_eq!(parse(&["//", "just a note"]).unwrap().action(), Action::Usage);
}

#[test]
fn test_unknown_flag_is_rejected() {
    // Parsing fails before any command runs, so nothing is submitted
    let err = parse(&["--bogus"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
}

#[test]
fn test_item_with_note() {
    let action = parse(&["Buy", "milk", "//", "two", "liters"])
        .unwrap()
        .action();
    assert_eq!(
        action,
        Action::Submit {
            task: "Buy milk".to_string(),
            note: "two liters".to_string()
        }
    );
}

#[test]
fn test_quoted_item_is_kept_whole() {
    let action = parse(&["Buy milk"]).unwrap().action();
    assert_eq!(
        action,
        Action::Submit {
            task: "Buy milk".to_string(),
            note: String::new()
        }
    );
}

#[test]
fn test_dashes_after_first_word_are_text() {
    let action = parse(&["Prepare", "talk", "--draft", "-v2"]).unwrap().action();
    assert_eq!(
        action,
        Action::Submit {
            task: "Prepare talk --draft -v2".to_string(),
            note: String::new()
        }
    );
}

#[test]
fn test_command_flags() {
    assert_eq!(parse(&["--refresh"]).unwrap().action(), Action::Refresh);
    assert_eq!(parse(&["--reset"]).unwrap().action(), Action::Reset);
    assert_eq!(parse(&["--install"]).unwrap().action(), Action::Install);
    assert_eq!(parse(&["--uninstall"]).unwrap().action(), Action::Uninstall);
    assert_eq!(parse(&["--login"]).unwrap().action(), Action::Login);
    assert_eq!(parse(&["--status"]).unwrap().action(), Action::Status);
}

#[test]
fn test_command_flags_do_not_mix() {
    assert!(parse(&["--refresh", "--reset"]).is_err());
    assert!(parse(&["--refresh", "Buy", "milk"]).is_err());
}

#[test]
fn test_help_is_available() {
    let err = parse(&["--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
