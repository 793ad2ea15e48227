//! A 20-tick run of the reference profile, printing per-tick growth.

use sprawl_bench::reference_profile;
use sprawl_core::Category;
use sprawl_engine::Simulation;

fn main() {
    println!("=== Sprawl reference run ===\n");

    let (config, grid) = reference_profile(42);
    let steps = config.steps;
    let mut sim = Simulation::new(config, grid).unwrap();
    println!(
        "tick  0: urban {:>5}  semi-urban {:>5}",
        sim.grid().count_category(Category::Urban),
        sim.grid().count_category(Category::SemiUrban)
    );

    for _ in 0..steps {
        let report = sim.step();
        println!(
            "tick {:>2}: urban {:>5}  semi-urban {:>5}  (+{} / +{}, contested {}, {} us)",
            report.tick.0,
            sim.grid().count_category(Category::Urban),
            sim.grid().count_category(Category::SemiUrban),
            report.metrics.to_urban,
            report.metrics.to_semi_urban,
            report.metrics.contested,
            report.metrics.total_us
        );
    }

    let grid = sim.reset(43).clone();
    println!("\nreset to tick {} with seed {}; {} cells", sim.current_tick().0, sim.seed(), grid.len());
}
