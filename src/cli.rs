use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{command, value_parser, Arg, ArgAction, Command, ValueHint};

pub fn build_command() -> Command {
    command!().args([
        Arg::new("api_key")
            .short('k')
            .long("api-key")
            .alias("key")
            .required(false)
            .value_hint(ValueHint::FilePath)
            .value_name("PATH")
            .value_parser(value_parser!(PathBuf))
            .help("Path to a file containing a Steam API key. [default: steamapi.key]"),
        Arg::new("steam_id_file")
            .short('i')
            .long("steam-id-file")
            .required(false)
            .value_hint(ValueHint::FilePath)
            .value_name("PATH")
            .value_parser(value_parser!(PathBuf))
            .help("Path to a file containing your Steam ID, used for \"self\". [default: steam.id]"),
        Arg::new("config")
            .short('c')
            .long("config-file")
            .alias("config")
            .required(false)
            .value_hint(ValueHint::FilePath)
            .value_name("PATH")
            .value_parser(value_parser!(PathBuf))
            .help("Path to the YAML config file."),
        Arg::new("jobs")
            .short('j')
            .long("jobs")
            .required(false)
            .value_name("N")
            .value_parser(RangedU64ValueParser::<usize>::new().range(1..))
            .help("Game libraries fetched in parallel. [default: 4]"),
        Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
            .help("Log more detail to stderr. Repeat for debug output."),
        Arg::new("steam_id")
            .required(true)
            .value_name("STEAM_ID")
            .help("Your Steam ID, or \"self\" to read it from the Steam ID file."),
        Arg::new("friends")
            .required(true)
            .num_args(1..)
            .action(ArgAction::Append)
            .value_name("FRIEND")
            .help("Friend display names; partial and stylised names are matched."),
    ])
}
