// !! Critical knowledge !!
//
// Steam only lists the games of accounts whose game details are public.
// Everybody else answers GetOwnedGames with an empty `response` object,
// which is why an empty library is a warning and not an error.

use std::io::{self, Write};
use std::process::ExitCode;

use commongames::config::{Config, Settings, SELF_ACCOUNT};
use commongames::error::Result;
use commongames::steam::SteamApi;
use commongames::{app, cli};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

fn main() -> ExitCode {
    ExitCode::from(report(run(), &mut io::stdout()))
}

/// Prints a fatal error to `out` and turns the outcome into an exit status.
fn report(result: Result<()>, out: &mut impl Write) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            // Nothing left to tell the user if stdout itself is gone.
            let _ = writeln!(out, "{}", e.to_string().trim_end());
            1
        }
    }
}

fn run() -> Result<()> {
    let matches = match cli::build_command().try_get_matches() {
        Ok(matches) => matches,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => return Err(e.into()),
    };

    init_logging(matches.get_count("verbose"));

    let settings = Settings::from_matches(&matches)?;
    let account = matches
        .get_one::<String>("steam_id")
        .map_or(SELF_ACCOUNT, String::as_str);
    let friends: Vec<String> = matches
        .get_many::<String>("friends")
        .into_iter()
        .flatten()
        .cloned()
        .collect();

    let config = Config::load(&settings, account)?;
    let api = SteamApi::new(&config.api_key, &settings.api_host);

    app::run(
        &api,
        &config.steam_id,
        &friends,
        settings.jobs,
        &mut io::stdout().lock(),
    )
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    let config = ConfigBuilder::new()
        .add_filter_allow_str(env!("CARGO_PKG_NAME"))
        .build();

    if let Err(e) = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("WARNING: logging disabled: {e}");
    }
}
