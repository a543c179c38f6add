mod overpass;
use overpass::commands::convert::{self, Summary, DEFAULT_INPUT, DEFAULT_OUTPUT};
use overpass::error::Error;
use overpass::text;

use clap::{App, Arg, ArgMatches};
use std::path::Path;
use std::process;

const VERSION: &'static str = env!("CARGO_PKG_VERSION");

fn run(matches: &ArgMatches) -> Result<Summary, Error> {
    let input = matches.value_of("input").unwrap_or(DEFAULT_INPUT);
    let output = matches.value_of("output").unwrap_or(DEFAULT_OUTPUT);
    convert::run(Path::new(input), Path::new(output))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = App::new("overpass2geojson")
        .version(VERSION)
        .about(text::MAIN_ABOUT)
        .after_help(text::MAIN_AFTER_HELP)
        .arg(
            Arg::with_name("input")
                .help(text::INPUT_HELP)
                .default_value(DEFAULT_INPUT)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help(text::OUTPUT_HELP)
                .default_value(DEFAULT_OUTPUT)
                .index(2),
        )
        .get_matches();

    match run(&matches) {
        Ok(summary) => {
            let output = matches.value_of("output").unwrap_or(DEFAULT_OUTPUT);
            if summary.skipped > 0 {
                log::info!("Skipped {} elements without coordinates", summary.skipped);
            }
            println!("Wrote {} features to {}", summary.features, output);
        }
        Err(e) => {
            eprintln!("Application error: {}", e);
            process::exit(1);
        }
    }
}
