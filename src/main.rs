use clap::Parser;
use std::process;
use table2kml::cli::{args::Args, commands};

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_summary) => {
            // The summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("table2kml - Point-of-interest tables to KML layers");
    println!("==================================================");
    println!();
    println!("Validate spreadsheet exports, wiki page sources or cave inventory text and");
    println!("write the accepted points as a styled KML layer.");
    println!();
    println!("USAGE:");
    println!("    table2kml <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert a table or text source to a KML layer");
    println!("    extract     Extract the point table of a text source to CSV");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert a dolmen inventory export:");
    println!("    table2kml convert dolmens.csv --profile dolmen --icon dolmen.png --embed-icon");
    println!();
    println!("    # Convert the map section of a saved wiki page:");
    println!("    table2kml convert page.txt --source wiki-map --title \"Dolmens du Lot\"");
    println!();
    println!("    # Review an inventory extraction before converting it:");
    println!("    table2kml extract taisne.txt --source inventory -v");
    println!();
    println!("For detailed help on any command, use:");
    println!("    table2kml <COMMAND> --help");
}
