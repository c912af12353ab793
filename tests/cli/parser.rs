// Integration tests for cli/parser.rs — the flag/value state machine
//
// Verifies:
//   - the help shortcut in argument position 1 only
//   - UnknownOption / MissingValue / InvalidChoice abort immediately
//   - MissingRequiredOption is reported only after the full traversal
//   - pairs consumed before a failure stay applied

use cmdline::{CmdLine, CmdLineError, ParseOutcome, Requirement};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn demo() -> CmdLine {
    let mut cl = CmdLine::new("demo");
    cl.register("m", "mesh", "mesh file name.", "", Requirement::Required, &[])
        .unwrap();
    cl.register("np", "npart", "number to be cutting.", "", Requirement::Required, &[])
        .unwrap();
    cl.register("o", "order", "element order.", "1", Requirement::Optional, &["1", "2"])
        .unwrap();
    cl
}

/// Parse expecting success.
fn parse(cl: &mut CmdLine, argv: &[&str]) -> ParseOutcome {
    cl.parse_from(argv).expect("parse should succeed")
}

/// Parse expecting an error.
fn parse_err(cl: &mut CmdLine, argv: &[&str]) -> CmdLineError {
    cl.parse_from(argv).expect_err("expected parse error")
}

// ─────────────────────────────────────────────────────────────────────────────
// Successful parses
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn full_pair_sequence_is_parsed() {
    let mut cl = demo();
    let out = parse(&mut cl, &["prog", "-m", "cube.msh", "--npart", "4", "-o", "2"]);
    assert_eq!(out, ParseOutcome::Parsed);
    assert_eq!(cl.value("mesh").unwrap(), "cube.msh");
    assert_eq!(cl.value("np").unwrap(), "4");
    assert_eq!(cl.value("order").unwrap(), "2");
}

#[test]
fn later_pair_overwrites_earlier_one() {
    let mut cl = demo();
    parse(&mut cl, &["prog", "-m", "a", "-np", "1", "--mesh", "b"]);
    assert_eq!(cl.value("m").unwrap(), "b");
}

#[test]
fn empty_argv_only_checks_required() {
    let mut cl = CmdLine::new("demo");
    cl.register("v", "verbosity", "level.", "1", Requirement::Optional, &[])
        .unwrap();
    let empty: [&str; 0] = [];
    assert_eq!(parse(&mut cl, &empty), ParseOutcome::Parsed);
    assert_eq!(cl.program_name(), "");
}

#[test]
fn required_option_with_default_is_satisfied() {
    let mut cl = CmdLine::new("demo");
    cl.register("np", "npart", "parts.", "0", Requirement::Required, &[])
        .unwrap();
    assert_eq!(parse(&mut cl, &["prog"]), ParseOutcome::Parsed);
}

#[test]
fn owned_strings_are_accepted() {
    let mut cl = demo();
    let argv: Vec<String> = ["prog", "-m", "x", "-np", "2"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(cl.parse_from(&argv), Ok(ParseOutcome::Parsed));
}

// ─────────────────────────────────────────────────────────────────────────────
// Help shortcut
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn short_help_in_first_position() {
    let mut cl = demo();
    assert_eq!(parse(&mut cl, &["prog", "-h"]), ParseOutcome::HelpRequested);
}

#[test]
fn long_help_in_first_position_ignores_the_rest() {
    let mut cl = demo();
    assert_eq!(
        parse(&mut cl, &["prog", "--help", "-m", "x", "bogus"]),
        ParseOutcome::HelpRequested
    );
    // required options were not enforced and nothing was stored
    assert_eq!(cl.value("m").unwrap(), "");
}

#[test]
fn help_in_value_position_is_missing_value() {
    let mut cl = demo();
    let err = parse_err(&mut cl, &["prog", "-m", "--help"]);
    assert!(matches!(err, CmdLineError::MissingValue { ref option, .. } if option == "-m"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Failures
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn unknown_option_fails_with_usage() {
    let mut cl = demo();
    let err = parse_err(&mut cl, &["prog", "--nope", "1"]);
    match &err {
        CmdLineError::UnknownOption { option, usage } => {
            assert_eq!(option, "--nope");
            assert!(usage.contains("Usage: prog [option=value]"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("Wrong Option name: --nope. \n\nUsage: prog"));
}

#[test]
fn bare_name_is_not_an_option() {
    let mut cl = demo();
    let err = parse_err(&mut cl, &["prog", "mesh", "x"]);
    assert!(matches!(err, CmdLineError::UnknownOption { .. }));
}

#[test]
fn flag_at_end_of_input_is_missing_value() {
    let mut cl = demo();
    let err = parse_err(&mut cl, &["prog", "-m"]);
    assert!(matches!(err, CmdLineError::MissingValue { ref option, .. } if option == "-m"));
}

#[test]
fn flag_followed_by_known_flag_is_missing_value() {
    let mut cl = demo();
    let err = parse_err(&mut cl, &["prog", "--mesh", "-np", "3"]);
    assert!(matches!(err, CmdLineError::MissingValue { ref option, .. } if option == "--mesh"));
    assert!(err.to_string().starts_with("Missing value of option: --mesh. "));
}

#[test]
fn value_spelled_like_unregistered_flag_is_accepted() {
    let mut cl = demo();
    parse(&mut cl, &["prog", "-m", "-x", "-np", "-3"]);
    assert_eq!(cl.value("m").unwrap(), "-x");
    assert_eq!(cl.get::<i32>("np").unwrap(), -3);
}

#[test]
fn value_outside_choice_set_is_rejected() {
    let mut cl = demo();
    let err = parse_err(&mut cl, &["prog", "-m", "x", "-np", "1", "--order", "3"]);
    match err {
        CmdLineError::InvalidChoice { option, value, .. } => {
            assert_eq!(option, "--order");
            assert_eq!(value, "3");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(cl.value("o").unwrap(), "1");
}

#[test]
fn value_inside_choice_set_is_stored_verbatim() {
    let mut cl = demo();
    parse(&mut cl, &["prog", "-m", "x", "-np", "1", "-o", "2"]);
    assert_eq!(cl.value("o").unwrap(), "2");
}

#[test]
fn choice_match_is_exact() {
    let mut cl = demo();
    let err = parse_err(&mut cl, &["prog", "-o", "2.0"]);
    assert!(matches!(err, CmdLineError::InvalidChoice { .. }));
}

#[test]
fn failure_keeps_earlier_pairs_and_skips_later_ones() {
    let mut cl = demo();
    let err = parse_err(&mut cl, &["prog", "-np", "5", "-q", "z", "-m", "late"]);
    assert!(matches!(err, CmdLineError::UnknownOption { .. }));
    assert_eq!(cl.value("np").unwrap(), "5");
    assert_eq!(cl.value("m").unwrap(), "");
}

// ─────────────────────────────────────────────────────────────────────────────
// Required options
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn missing_required_is_reported_after_full_traversal() {
    let mut cl = demo();
    // -np is consumed completely before the -m check fires
    let err = parse_err(&mut cl, &["prog", "-np", "8", "-o", "2"]);
    assert!(
        matches!(err, CmdLineError::MissingRequiredOption { ref option, .. } if option == "-m")
    );
    assert_eq!(cl.value("o").unwrap(), "2");
    assert!(err.to_string().starts_with("Missing Option: -m\n\nUsage: prog"));
}

#[test]
fn first_missing_required_follows_flag_order() {
    let mut cl = demo();
    let err = parse_err(&mut cl, &["prog"]);
    // "-m" sorts before "-np"
    assert_eq!(err.option(), Some("-m"));
}

#[test]
fn required_option_set_to_empty_string_is_missing() {
    let mut cl = demo();
    let err = parse_err(&mut cl, &["prog", "-m", "", "-np", "1"]);
    assert!(matches!(err, CmdLineError::MissingRequiredOption { .. }));
}
