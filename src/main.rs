use admission_lookup::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    // The serve command handles Ctrl+C itself for graceful shutdown
    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Admission Lookup - Incoming Student Verification Service");
    println!("========================================================");
    println!();
    println!("Loads admission workbooks (*.xlsx) and verifies student ID and name");
    println!("pairs, answering with the admitted major.");
    println!();
    println!("USAGE:");
    println!("    admission-lookup <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    serve       Load the catalog and serve the lookup API (main command)");
    println!("    inspect     Load the catalog and print a report about it");
    println!("    query       Load the catalog and answer a single lookup");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Serve ./data on 0.0.0.0:8080:");
    println!("    admission-lookup serve");
    println!();
    println!("    # Serve another directory on a custom address:");
    println!("    admission-lookup serve --data-dir /srv/intake --bind 127.0.0.1:9000");
    println!();
    println!("    # Check what was loaded:");
    println!("    admission-lookup inspect --detailed --format json");
    println!();
    println!("    # Verify one student:");
    println!("    admission-lookup query --student-id 202501010001 --name 张三");
    println!();
    println!("For detailed help on any command, use:");
    println!("    admission-lookup <COMMAND> --help");
}
