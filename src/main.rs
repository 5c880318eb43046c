use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use cutplan::{
    Catalog, CuttingPlan, CuttingStockPlanner, PlanError, PlannerConfig, SolveStatus,
    SolverBackend, SolverFactory,
};

#[derive(Parser)]
#[command(name = "cutplan", about = "2D cutting stock planner")]
struct Cli {
    /// Problem file: JSON catalogue with "pieces" and "plate_types"
    input: PathBuf,

    /// Solver backend: auto, cbc, or highs
    #[arg(long, default_value = "auto", value_parser = parse_backend)]
    solver: SolverBackend,

    /// Wall-clock solve limit in seconds
    #[arg(long, default_value_t = 300)]
    time_limit: u64,

    /// Disable piece rotation
    #[arg(long)]
    no_rotate: bool,

    /// Cap on generated patterns per plate type
    #[arg(long, default_value_t = 1000)]
    max_patterns: usize,
}

fn parse_backend(s: &str) -> Result<SolverBackend, String> {
    match s {
        "auto" => Ok(SolverBackend::Auto),
        "cbc" => Ok(SolverBackend::CoinCbc),
        "highs" => Ok(SolverBackend::Highs),
        _ => Err(format!(
            "invalid solver '{}', expected: auto, cbc, or highs",
            s
        )),
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let raw = std::fs::read_to_string(&cli.input).unwrap_or_else(|e| {
        eprintln!("Error: cannot read {}: {}", cli.input.display(), e);
        std::process::exit(1);
    });
    let catalog: Catalog = serde_json::from_str(&raw).unwrap_or_else(|e| {
        eprintln!("Error: invalid catalogue in {}: {}", cli.input.display(), e);
        std::process::exit(1);
    });

    let config = PlannerConfig {
        allow_rotation: !cli.no_rotate,
        max_patterns_per_plate: cli.max_patterns,
        time_limit: Duration::from_secs(cli.time_limit),
    };
    let planner = CuttingStockPlanner::with_config(&catalog, config);
    let solver = SolverFactory::create(cli.solver);

    match planner.plan(solver.as_ref()) {
        Ok(plan) => print_plan(&catalog, &plan),
        Err(e @ (PlanError::Infeasible | PlanError::Timeout)) => {
            eprintln!("No plan: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_plan(catalog: &Catalog, plan: &CuttingPlan) {
    match plan.status {
        SolveStatus::Optimal => println!("Optimal plan"),
        _ => println!("Feasible plan (time limit reached, not proven optimal)"),
    }

    println!();
    println!("Total cost:   {:.2}", plan.total_cost);
    println!("Total waste:  {:.2}", plan.total_waste);
    println!("Plates used:  {}", plan.total_plates);
    println!("Solve time:   {:.2}s", plan.solve_time.as_secs_f64());

    println!("\nPlates by type:");
    for plate in &catalog.plate_types {
        let count = plan.plates_by_type.get(&plate.id).copied().unwrap_or(0);
        if count > 0 {
            println!("  {}: {} plate(s)", plate.name, count);
        }
    }

    println!("\nProduction by piece:");
    for piece in &catalog.pieces {
        let produced = plan.pieces_produced.get(&piece.id).copied().unwrap_or(0);
        println!("  {}: {}/{} (demand)", piece.name, produced, piece.demand);
    }

    println!("\nPatterns applied:");
    for usage in &plan.used_patterns {
        println!(
            "  Pattern #{} - {} x{}",
            usage.pattern_index, usage.plate_type, usage.count
        );
        let pieces: Vec<String> = usage
            .pieces
            .iter()
            .map(|(&id, &qty)| {
                let name = catalog
                    .piece(id)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| format!("piece {}", id));
                format!("{}x{}", name, qty)
            })
            .collect();
        println!("    Pieces: {}", pieces.join(", "));
        println!("    Waste:  {:.2} per plate", usage.waste_per_plate);
    }

    if !plan.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &plan.warnings {
            println!("  pattern enumeration truncated: {}", warning);
        }
    }
}
