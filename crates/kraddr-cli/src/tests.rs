use clap::Parser;

use super::*;
use crate::geocode::AddressTypeArg;
use kraddr_vworld::AddressType;

#[test]
fn parses_juso_search_with_defaults() {
    let cli = Cli::try_parse_from(["kraddr", "juso", "search", "도산대로"])
        .expect("expected valid cli args");
    let Commands::Juso {
        command: JusoCommands::Search(args),
    } = cli.command
    else {
        panic!("expected juso search");
    };
    let options = args.options();
    assert_eq!(args.keyword, "도산대로");
    assert_eq!(options.count_per_page, 10);
    assert_eq!(options.current_page, 1);
    assert_eq!(options.result_type, "json");
    assert!(options.confirm_key.is_none());
}

#[test]
fn parses_juso_find_with_overrides() {
    let cli = Cli::try_parse_from([
        "kraddr",
        "juso",
        "find",
        "강남구",
        "--count-per-page",
        "20",
        "--result-type",
        "xml",
        "--confirm-key",
        "k",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Juso {
            command: JusoCommands::Find(ref args)
        } if args.count_per_page == 20 && args.result_type == "xml" && args.confirm_key.as_deref() == Some("k")
    ));
}

#[test]
fn juso_search_accepts_empty_keyword() {
    let cli = Cli::try_parse_from(["kraddr", "juso", "search", ""]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Juso {
            command: JusoCommands::Search(ref args)
        } if args.keyword.is_empty()
    ));
}

#[test]
fn parses_geocode_options() {
    let cli = Cli::try_parse_from([
        "kraddr",
        "geocode",
        "서울특별시 중구 세종대로 110",
        "--key",
        "test-key",
        "--type",
        "road",
        "--refine",
        "true",
        "--crs",
        "epsg:4326",
    ])
    .expect("expected valid cli args");
    let Commands::Geocode(args) = cli.command else {
        panic!("expected geocode");
    };
    assert_eq!(args.address_type, Some(AddressTypeArg::Road));
    let options = args.options();
    assert_eq!(options.key, "test-key");
    assert_eq!(options.address_type, Some(AddressType::Road));
    assert_eq!(options.refine, Some(true));
    assert_eq!(options.simple, None);
    assert_eq!(options.crs.as_deref(), Some("epsg:4326"));
}

#[test]
fn help_is_answered_by_argument_parsing_alone() {
    let err = Cli::try_parse_from(["kraddr", "--help"]).expect_err("help exits early");
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);

    let err = Cli::try_parse_from(["kraddr", "geocode", "--help"]).expect_err("help exits early");
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
