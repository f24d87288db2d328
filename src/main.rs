mod cli;
mod commands;
mod constants;
mod libs;
mod logger;
mod schema;

use clap::Parser;
use cli::cmd_enums::{Cli, Commands};
use commands::{create, update, version};

fn main() {
    let cli = Cli::parse();

    logger::init(cli.debug);

    match cli.command {
        Commands::Version => version::run(),
        Commands::Create {
            name,
            template,
            proxy,
        } => create::run(name, template, proxy),
        Commands::Update { latest, proxy } => update::run(latest, proxy),
    }
}
