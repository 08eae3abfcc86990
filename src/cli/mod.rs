pub mod actions;

use anyhow::Result;
use clap::{value_parser, Arg, ArgMatches, Command};
use std::path::PathBuf;

/// Build the command line definition.
pub fn build_command() -> Command {
    Command::new("iot2050-conf")
        .about("Configure IOT2050 extension modules")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("compact")
                .long("compact")
                .short('c')
                .global(true)
                .help("Print JSON on a single line")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("default")
                .about("Print the default configuration of a freshly inserted SM SENS DI module"),
        )
        .subcommand(
            Command::new("to-ui")
                .about("Convert a device-format configuration into UI format")
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("to-device")
                .about("Convert a UI-format configuration into device format")
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Show the module configuration panel in the terminal")
                .arg(
                    Arg::new("slot")
                        .long("slot")
                        .short('s')
                        .value_name("N")
                        .help("Extension slot index")
                        .value_parser(value_parser!(u32))
                        .default_value("1"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_name("FILE")
                        .help("Device-format configuration to load (default: module default)")
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
}

fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("FILE")
        .help("JSON document to read, or '-' for stdin")
        .value_parser(value_parser!(PathBuf))
        .default_value("-")
}

/// Parse command line arguments and return ArgMatches.
pub fn parse_args() -> ArgMatches {
    build_command().get_matches()
}

/// Dispatch the parsed command line to its handler.
pub fn run(matches: &ArgMatches) -> Result<()> {
    let compact = matches.get_flag("compact");
    match matches.subcommand() {
        Some(("default", _)) => actions::print_default(compact),
        Some(("to-ui", sub)) => actions::convert_to_ui(input_path(sub), compact),
        Some(("to-device", sub)) => actions::convert_to_device(input_path(sub), compact),
        Some(("show", sub)) => {
            let slot = sub.get_one::<u32>("slot").copied().unwrap_or(1);
            let config = sub.get_one::<PathBuf>("config").map(PathBuf::as_path);
            actions::show_panel(slot, config)
        }
        _ => Ok(()),
    }
}

fn input_path(matches: &ArgMatches) -> &std::path::Path {
    matches
        .get_one::<PathBuf>("input")
        .map(PathBuf::as_path)
        .unwrap_or_else(|| std::path::Path::new("-"))
}
