//! MIPS-Lite simulator CLI.
//!
//! This binary provides the entry point for running program images. It performs:
//! 1. **Image loading:** Reads a textual hex image (one word per line) into memory.
//! 2. **Execution:** Runs the fetch-decode-execute loop until HALT or a fault.
//! 3. **Reporting:** Prints registers, nonzero memory, and instruction counts after the run.

use clap::{Parser, Subcommand};
use std::{fs, process};

use mlsim_core::Simulator;
use mlsim_core::config::Config;
use mlsim_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "mlsim",
    author,
    version,
    about = "MIPS-Lite instruction-set simulator",
    long_about = "Run a hex program image (one 32-bit word per line) on the simulated machine.\n\nConfiguration is JSON (see mlsim_core::config::Config); the CLI uses built-in defaults otherwise.\n\nExamples:\n  mlsim run -f software/demos/sum.hex\n  mlsim run -f program.hex --config sim.json --trace"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program image until it halts.
    Run {
        /// Hex program image to execute.
        #[arg(short, long)]
        file: String,

        /// JSON configuration file (defaults apply if omitted).
        #[arg(long)]
        config: Option<String>,

        /// Emit a diagnostic line for every executed instruction.
        #[arg(long)]
        trace: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            file,
            config,
            trace,
        }) => cmd_run(&file, config, trace),
        None => {
            eprintln!("MIPS-Lite Simulator: pass a subcommand");
            eprintln!();
            eprintln!("  mlsim run -f <image.hex>   Run a program image");
            eprintln!();
            eprintln!("  mlsim --help  for full options");
            process::exit(1);
        }
    }
}

/// Runs the simulator: loads the image, loops until HALT, then reports state.
///
/// On a fault the state is dumped and the process exits with code 1; a
/// malformed or oversized image is rejected at load time.
fn cmd_run(file: &str, config_path: Option<String>, trace: bool) {
    let mut config = config_path.map_or_else(Config::default, |path| {
        let text = fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("\n[!] FATAL: Could not read config '{path}': {e}");
            process::exit(1);
        });
        serde_json::from_str(&text).unwrap_or_else(|e| {
            eprintln!("\n[!] FATAL: Invalid config '{path}': {e}");
            process::exit(1);
        })
    });
    if trace {
        config.general.trace_instructions = true;
    }

    println!("[*] Direct execution: {file}");
    println!(
        "  Trace: {}  Memory: {} words",
        config.general.trace_instructions, config.memory.size_words
    );
    println!();

    let memory = loader::load_hex(file, config.memory.size_words).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    });

    let mut sim = Simulator::new(memory, &config);

    if let Err(fault) = sim.run() {
        eprintln!("\n[!] FATAL FAULT: {fault}");
        sim.cpu.dump_state();
        sim.cpu.stats.print();
        process::exit(1);
    }

    println!("[*] Halted");
    sim.cpu.dump_state();
    sim.cpu.dump_memory();
    sim.cpu.stats.print();
}
