//! bigi CLI
//!
//! Arbitrary-precision integer calculator.

use bigi_cli::{commands, init_tracing, CliConfig, CliError, Command};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("bigi {}", env!("CARGO_PKG_VERSION"));
        }
        word => {
            if let Err(e) = run(word, &args[2..]) {
                eprintln!("error: {e}");
                if matches!(e, CliError::UnknownCommand(_)) {
                    eprintln!();
                    print_usage();
                }
                std::process::exit(1);
            }
        }
    }
}

fn run(word: &str, args: &[String]) -> Result<(), CliError> {
    let command = Command::parse(word).ok_or_else(|| CliError::UnknownCommand(word.to_owned()))?;
    let (config, operands) = CliConfig::from_args(args)?;
    let output = command.execute(&operands, &config)?;
    println!("{output}");
    Ok(())
}

fn print_usage() {
    println!("bigi - arbitrary-precision integer calculator");
    println!();
    println!("Usage: bigi <command> <operands...> [options]");
    println!();
    println!("Commands:");
    for command in commands::all() {
        println!("  {}", command.usage());
    }
    println!("  help");
    println!("  version");
    println!();
    println!("Options:");
    println!("  --radix=<n>         Radix for printed values, 2-36 (default: 10)");
    println!("  --input-radix=<n>   Radix for operands (default: inferred from 0x/0b/0 prefix)");
    println!();
    println!("Operands may be signed and may use exponential notation (1.5e3).");
    println!("Set BIGI_LOG or RUST_LOG (e.g. BIGI_LOG=bigi=trace) for tracing output.");
}
