use clap::CommandFactory;

use super::*;

#[test]
fn test_cli_definition() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_show_with_negative_threshold() {
    let cli = Cli::try_parse_from(["riskthreshold", "show", "--threshold", "-5", "--reset"]).unwrap();
    match cli.command {
        Command::Show {
            threshold,
            reset,
            format,
        } => {
            assert_eq!(threshold, Some(-5.0));
            assert!(reset);
            assert_eq!(format, Format::Text);
        }
        other => panic!("unexpected command: {other:?}"),
    }
    assert_eq!(cli.log_level, "warn");
}

#[test]
fn test_parse_global_options_and_sweep() {
    let cli = Cli::try_parse_from([
        "riskthreshold",
        "--seed",
        "7",
        "sweep",
        "--step",
        "10",
        "--format",
        "json",
        "--log-level",
        "debug",
    ])
    .unwrap();
    assert_eq!(cli.seed, Some(7));
    assert_eq!(cli.log_level, "debug");
    match cli.command {
        Command::Sweep {
            from,
            to,
            step,
            reset,
            format,
        } => {
            assert_eq!(from, None);
            assert_eq!(to, None);
            assert_eq!(step, 10.0);
            assert!(!reset);
            assert_eq!(format, Format::Json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_rejects_unknown_log_level() {
    assert!(Cli::try_parse_from(["riskthreshold", "--log-level", "loud", "interactive"]).is_err());
}

#[test]
fn test_requires_subcommand() {
    assert!(Cli::try_parse_from(["riskthreshold"]).is_err());
}

#[test]
fn test_rejects_non_finite_thresholds() {
    for value in ["NaN", "nan", "inf", "-inf", "abc"] {
        assert!(
            Cli::try_parse_from(["riskthreshold", "show", "--threshold", value]).is_err(),
            "{value}"
        );
        assert!(Cli::try_parse_from(["riskthreshold", "sweep", "--from", value]).is_err());
        assert!(Cli::try_parse_from(["riskthreshold", "sweep", "--step", value]).is_err());
    }
    assert_eq!(parse_finite("-2.5"), Ok(-2.5));
}
