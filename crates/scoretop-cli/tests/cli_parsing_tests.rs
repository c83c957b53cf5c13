//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without executing a run (which would require a scoreboard file).

use std::path::PathBuf;

use clap::Parser;

// Re-create the Args structure for testing since the binary does not
// export it.
#[derive(Parser)]
#[command(name = "scoretop")]
struct Args {
    #[arg(short, long)]
    number: Option<usize>,

    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    #[arg(short = 't', long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[arg(short, long, value_name = "DIR")]
    playerdata: Option<PathBuf>,

    #[arg(short, long, conflicts_with = "descending")]
    ascending: bool,

    #[arg(short, long)]
    descending: bool,

    #[arg(short, long, value_name = "OBJECTIVE")]
    reverse: Vec<String>,

    #[arg(long, value_name = "RULE")]
    combine: Vec<String>,

    #[arg(long, value_name = "RULE")]
    convert: Vec<String>,

    #[arg(short, long, value_name = "OBJECTIVE")]
    whitelist: Vec<String>,

    #[arg(short, long, value_name = "OBJECTIVE")]
    blacklist: Vec<String>,

    #[arg(long)]
    delete_combined: bool,

    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[test]
fn test_parse_no_args() {
    let args = Args::try_parse_from(["scoretop"]).unwrap();
    assert!(args.number.is_none());
    assert!(args.input.is_none());
    assert!(!args.ascending);
    assert!(!args.descending);
    assert!(args.reverse.is_empty());
}

#[test]
fn test_parse_paths_and_limit() {
    let args = Args::try_parse_from([
        "scoretop",
        "-i",
        "world/data/scoreboard.dat",
        "-t",
        "out.json",
        "-n",
        "10",
    ])
    .unwrap();

    assert_eq!(args.input, Some(PathBuf::from("world/data/scoreboard.dat")));
    assert_eq!(args.output, Some(PathBuf::from("out.json")));
    assert_eq!(args.number, Some(10));
}

#[test]
fn test_parse_repeatable_lists() {
    let args = Args::try_parse_from([
        "scoretop", "-r", "obj1", "-r", "obj2", "-b", "hidden", "-w", "deaths",
    ])
    .unwrap();

    assert_eq!(args.reverse, vec!["obj1", "obj2"]);
    assert_eq!(args.blacklist, vec!["hidden"]);
    assert_eq!(args.whitelist, vec!["deaths"]);
}

#[test]
fn test_parse_combine_and_convert_rules() {
    let args = Args::try_parse_from([
        "scoretop",
        "--combine",
        "distance total_traveled",
        "--convert",
        "hms play_time",
        "--delete-combined",
    ])
    .unwrap();

    assert_eq!(args.combine, vec!["distance total_traveled"]);
    assert_eq!(args.convert, vec!["hms play_time"]);
    assert!(args.delete_combined);
}

#[test]
fn test_parse_rejects_ascending_with_descending() {
    assert!(Args::try_parse_from(["scoretop", "-a", "-d"]).is_err());
}

#[test]
fn test_parse_sort_direction_flags() {
    assert!(Args::try_parse_from(["scoretop", "-a"]).unwrap().ascending);
    assert!(Args::try_parse_from(["scoretop", "-d"]).unwrap().descending);
}
