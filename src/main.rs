use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::{error, info};

use spritekit::utils::logger::Logger;
use spritekit::commands::{CommandFactory, SpritekitCommandFactory};

fn main() {
    let matches = ClapCommand::new("SpriteKit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Unpack sprites from ZPVR texture atlases")
        .arg(
            Arg::new("input")
                .help("Descriptor file, source directory, or ZPVR file with --inspect")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output directory")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("inspect")
                .short('i')
                .long("inspect")
                .help("Print the texture header of a ZPVR file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("frame")
                .long("frame")
                .help("Index of the descriptor frame to extract")
                .value_name("INDEX")
                .required(false),
        )
        .arg(
            Arg::new("ext")
                .long("ext")
                .help("Descriptor file extension to search for")
                .value_name("EXT")
                .required(false),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .help("Number of worker threads (default: one per core)")
                .value_name("N")
                .required(false),
        )
        .arg(
            Arg::new("fail-fast")
                .long("fail-fast")
                .help("Stop starting new sprites after the first failure")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file instead of the console")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .help("Do not draw a progress bar")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let logger = match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file, verbose) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
            match Logger::new(&format!("{}.jobs", log_file)) {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error initializing logger: {}", e);
                    process::exit(1);
                }
            }
        },
        None => {
            Logger::init_console_logger(verbose);
            Logger::disabled()
        }
    };

    let factory = SpritekitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            info!("Running {} command", command.name());
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
