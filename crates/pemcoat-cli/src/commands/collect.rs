use crate::cli::CollectArgs;
use crate::error::Result;
use crate::utils::progress::CollectProgressHandler;
use pemcoat::collector::{
    ApiKey, CandidateCollector, CollectOptions, MpClient, ProgressReporter,
};
use tracing::{info, warn};

pub fn run(args: CollectArgs) -> Result<()> {
    let api_key = ApiKey::resolve(args.api_key.as_deref())?;
    let client = MpClient::new(api_key)?;
    let mut collector = CandidateCollector::new(client);

    let options = CollectOptions {
        stability_threshold: args.threshold,
        include_oxides: !args.no_oxides,
        include_nitrides: !args.no_nitrides,
        include_carbides: !args.no_carbides,
    };

    let progress_handler = CollectProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Collecting coating candidates (stability threshold: {} eV/atom)...",
        options.stability_threshold
    );
    info!("Invoking the candidate collection pipeline...");

    let run = collector.collect(&options, &reporter);

    if !run.failures.is_empty() {
        warn!(
            failed_systems = run.failures.len(),
            "Some chemical systems could not be searched."
        );
        println!("\n{} chemical system(s) failed:", run.failures.len());
        for failure in &run.failures {
            println!(
                "  {} ({}): {}",
                failure.chemical_system, failure.material_class, failure.message
            );
        }
    }

    match collector.summary_statistics() {
        Some(stats) => {
            println!("\nCollection summary:");
            println!("  Total candidates:       {}", stats.total_materials);
            println!(
                "  Stable candidates:      {} (≤ {} eV/atom above hull)",
                stats.stable_materials, options.stability_threshold
            );
            for (class, count) in &stats.by_class {
                println!("  {:<22} {}", format!("{} candidates:", class), count);
            }
            println!(
                "  Energy above hull:      min {:.4}, mean {:.4}, max {:.4} eV/atom",
                stats.hull_energy_min, stats.hull_energy_mean, stats.hull_energy_max
            );
            println!(
                "  Avg formation energy:   {:.4} eV/atom",
                stats.avg_formation_energy
            );
            println!("  Avg band gap:           {:.4} eV", stats.avg_band_gap);
            println!("  Avg density:            {:.4} g/cm³", stats.avg_density);
        }
        None => {
            warn!("Collection finished with no candidates.");
            println!("\nWarning: collection finished with no candidates.");
        }
    }

    collector.save_to_csv(&args.output, false)?;
    println!(
        "\n✓ All candidates written to: {}",
        args.output.display()
    );

    if let Some(stable_path) = &args.stable_output {
        collector.save_to_csv(stable_path, true)?;
        println!("✓ Stable candidates written to: {}", stable_path.display());
    }

    Ok(())
}
