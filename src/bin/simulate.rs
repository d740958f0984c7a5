//! Headless tube simulator CLI.
//!
//! Plays many seeded rounds with an autopilot and prints score statistics.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                        # 200 rounds, gap-seeker pilot
//!   cargo run --bin simulate -- -n 50 --pilot drifter
//!   cargo run --bin simulate -- --seed 42 --json   # reproducible, JSON report saved

use std::env;
use std::path::PathBuf;
use std::process;
use tubes::config::GameConfig;
use tubes::simulator::{create_pilot, run_simulation, SimConfig, PILOT_IDS};
use tubes::utils::logging;

fn main() {
    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'simulate --help' for usage.");
            process::exit(1);
        }
    };
    if options.show_help {
        print_help();
        return;
    }

    logging::init_stderr("warn");

    let game = match GameConfig::load(options.config_path.as_deref()) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Config error: {}", e);
            process::exit(1);
        }
    };

    let Some(mut pilot) = create_pilot(&options.sim.pilot) else {
        eprintln!(
            "Unknown pilot '{}'. Available: {}",
            options.sim.pilot,
            PILOT_IDS.join(", ")
        );
        process::exit(1);
    };

    let config = options.sim;
    if config.verbosity >= 1 {
        println!("╔═══════════════════════════════════════╗");
        println!("║           TUBES SIMULATOR             ║");
        println!("╚═══════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Runs:       {}", config.num_runs);
        println!("  Pilot:      {} ({})", pilot.id(), pilot.description());
        println!("  Max ticks:  {}", config.max_ticks_per_run);
        if let Some(seed) = config.seed {
            println!("  Seed:       {}", seed);
        }
        println!();
    }

    let report = run_simulation(&config, &game, pilot.as_mut());
    println!("{}", report.to_text());

    if options.write_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write {}: {}", filename, e);
                process::exit(1);
            }
        }
    }
}

struct Options {
    sim: SimConfig,
    config_path: Option<PathBuf>,
    write_json: bool,
    show_help: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        sim: SimConfig::default(),
        config_path: None,
        write_json: false,
        show_help: false,
    };

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || {
            i += 1;
            args.get(i)
                .cloned()
                .ok_or_else(|| format!("{} needs a value", flag))
        };
        match flag {
            "-n" | "--runs" => {
                let raw = value()?;
                options.sim.num_runs = raw
                    .parse()
                    .map_err(|_| format!("invalid run count: {}", raw))?;
            }
            "-s" | "--seed" => {
                let raw = value()?;
                options.sim.seed = Some(raw.parse().map_err(|_| format!("invalid seed: {}", raw))?);
            }
            "-t" | "--max-ticks" => {
                let raw = value()?;
                options.sim.max_ticks_per_run = raw
                    .parse()
                    .map_err(|_| format!("invalid tick limit: {}", raw))?;
            }
            "-p" | "--pilot" => options.sim.pilot = value()?,
            "-c" | "--config" => options.config_path = Some(PathBuf::from(value()?)),
            "-v" | "--verbose" => options.sim.verbosity = 2,
            "-q" | "--quiet" => options.sim.verbosity = 0,
            "--json" => options.write_json = true,
            "-h" | "--help" => options.show_help = true,
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }
    Ok(options)
}

fn print_help() {
    println!("Tubes simulator\n");
    println!("Usage: simulate [OPTIONS]\n");
    println!("Options:");
    println!("  -n, --runs N         Rounds to play (default 200)");
    println!("  -s, --seed N         Base seed; round i uses N + i");
    println!("  -t, --max-ticks N    Cut rounds off after N ticks (default 20000)");
    println!("  -p, --pilot ID       Autopilot: {}", PILOT_IDS.join(", "));
    println!("  -c, --config PATH    Game config JSON");
    println!("  -v, --verbose        Print every round");
    println!("  -q, --quiet          Only print the report");
    println!("      --json           Also write the report as JSON");
    println!("  -h, --help           Show this help message");
}
