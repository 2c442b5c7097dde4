use solsim::{Scenario, ScenarioConfig};
use solsim::{run_headless, run_viewer};
use solsim::{bench_gravity, bench_step};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under scenarios/; the standard solar system if omitted
    #[arg(short)]
    file_name: Option<String>,

    /// Integrate without a window
    #[arg(long)]
    headless: bool,

    /// Print the timing tables instead of running a simulation
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_config(file_name: Option<&str>) -> Result<ScenarioConfig> {
    let Some(file_name) = file_name else {
        // No file: standard solar system, no overrides, no extra body
        return Ok(ScenarioConfig::default());
    };

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_config(args.file_name.as_deref())?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    if args.headless {
        run_headless(scenario);
    }

    run_viewer(scenario);

    Ok(())
}
