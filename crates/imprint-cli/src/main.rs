//! imprint CLI: evaluate scenes, validate inputs, inspect snapshots, benchmark.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "imprint")]
#[command(version, about = "imprint: collision, bulge and smoothing deformers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a scene file and write the deformed mesh.
    Deform {
        /// Path to the scene (JSON).
        scene: String,

        /// Deformer settings override (TOML).
        #[arg(short, long)]
        config: Option<String>,

        /// Output path for the deformed scene (JSON). Printed summary only if omitted.
        #[arg(short, long)]
        output: Option<String>,

        /// Also write a binary evaluation snapshot.
        #[arg(long)]
        snapshot: Option<String>,

        /// Print per-pass telemetry events.
        #[arg(short, long)]
        verbose: bool,
    },

    /// Validate a scene (.json) or deformer settings (.toml).
    Validate {
        /// Path to scene or config file.
        path: String,
    },

    /// Inspect an evaluation snapshot file.
    Inspect {
        /// Path to snapshot file.
        path: String,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (plane_into_sphere, cube_enclosure, two_spheres, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Evaluations per scenario.
        #[arg(short, long)]
        evaluations: Option<u32>,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    // Library `tracing` output reaches stderr through the `log` bridge; RUST_LOG overrides
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Deform {
            scene,
            config,
            output,
            snapshot,
            verbose,
        } => commands::deform(
            &scene,
            config.as_deref(),
            output.as_deref(),
            snapshot.as_deref(),
            verbose,
        ),
        Commands::Validate { path } => commands::validate(&path),
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Benchmark {
            scenario,
            evaluations,
            output,
        } => commands::benchmark(&scenario, evaluations, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
