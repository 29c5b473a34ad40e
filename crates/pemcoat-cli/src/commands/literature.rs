use crate::cli::LiteratureArgs;
use crate::error::Result;
use pemcoat::core::io::csv as table_io;
use pemcoat::literature::{LiteratureDatabase, QueryFilters, seed};
use tracing::info;

pub fn run(args: LiteratureArgs) -> Result<()> {
    let mut db = LiteratureDatabase::new();

    if let Some(path) = &args.input {
        info!("Loading literature entries from {:?}", path);
        let count = db.load_from_csv(path)?;
        println!("Loaded {} entries from: {}", count, path.display());
    }

    if args.seed {
        info!("Appending the curated key reference papers.");
        for paper in seed::key_papers() {
            db.add(paper);
        }
    }

    if db.is_empty() {
        println!("The literature database is empty. Use --input or --seed to populate it.");
        return Ok(());
    }

    let filters = build_filters(&args);
    let hits = db.query(&filters);

    println!(
        "\n{} of {} entries match the query:",
        hits.len(),
        db.len()
    );
    for record in &hits {
        println!(
            "  {:<4} {:<28} on {:<12} ({})",
            record.year, record.material, record.substrate, record.doi
        );
    }

    if let Some(stats) = db.summary_statistics() {
        println!("\nSummary statistics ({} entries):", stats.total_entries);
        println!("  Years covered:          {}-{}", stats.year_min, stats.year_max);
        println!("  Distinct materials:     {}", stats.materials_tested);
        print_metric(
            "Contact resistance",
            "mΩ·cm²",
            stats.avg_contact_resistance,
            stats.best_contact_resistance,
        );
        print_metric(
            "Corrosion current",
            "μA/cm²",
            stats.avg_corrosion_current,
            stats.best_corrosion_current,
        );
        if let Some(avg) = stats.avg_test_duration_hours {
            println!(
                "  Test duration:          avg {:.0} h, max {:.0} h",
                avg,
                stats.max_test_duration_hours.unwrap_or(avg)
            );
        }
        if let Some(avg) = stats.avg_cost_estimate {
            println!("  Cost estimate:          avg ${:.2}/m²", avg);
        }
        if !stats.success_rating_distribution.is_empty() {
            let histogram: Vec<String> = stats
                .success_rating_distribution
                .iter()
                .map(|(rating, count)| format!("{}★×{}", rating, count))
                .collect();
            println!("  Success ratings:        {}", histogram.join(", "));
        }
    }

    if args.benchmark {
        println!("\nBenchmark against industry targets:");
        println!(
            "  {:<28} {:<6} {:^5} {:^5} {:^5} {:^5} {:^5}",
            "Material", "Year", "ICR", "Corr", "Dur", "Cost", "All"
        );
        for row in db.benchmark_against_targets() {
            println!(
                "  {:<28} {:<6} {:^5} {:^5} {:^5} {:^5} {:^5}",
                row.material,
                row.year,
                mark(row.meets_resistance_target),
                mark(row.meets_corrosion_target),
                mark(row.meets_duration_target),
                mark(row.meets_cost_target),
                mark(row.meets_all_targets),
            );
        }
    }

    if args.gaps {
        let gaps = db.identify_research_gaps();
        println!("\nResearch gaps:");
        println!(
            "  Entries below the 10,000 h bar:  {}",
            gaps.missing_long_term_data
        );
        println!("  Entries missing cost data:       {}", gaps.missing_cost_data);
        println!(
            "  Entries missing ion leaching:    {}",
            gaps.missing_ion_leaching_data
        );
        println!(
            "  Entries missing degradation:     {}",
            gaps.missing_degradation_rates
        );
        println!("  Long-term validation:            {}", gaps.limited_long_term_validation);
        if !gaps.untested_material_classes.is_empty() {
            println!("  Promising but untested classes:");
            for class in &gaps.untested_material_classes {
                println!("    - {}", class);
            }
        }
        println!("  Recommendations:");
        for recommendation in &gaps.recommendations {
            println!("    - {}", recommendation);
        }
    }

    if let Some(path) = &args.output {
        table_io::write_table(&hits, path)?;
        println!("\n✓ Wrote {} entries to: {}", hits.len(), path.display());
    }

    Ok(())
}

fn build_filters(args: &LiteratureArgs) -> QueryFilters {
    let mut filters = QueryFilters::new();
    if let Some(material) = &args.material {
        filters = filters.material(material);
    }
    if let Some(substrate) = &args.substrate {
        filters = filters.substrate(substrate);
    }
    if let Some(hours) = args.min_test_duration {
        filters = filters.min_test_duration(hours);
    }
    if let Some(current) = args.max_corrosion_current {
        filters = filters.max_corrosion_current(current);
    }
    if let Some(resistance) = args.max_contact_resistance {
        filters = filters.max_contact_resistance(resistance);
    }
    if let Some(rating) = args.min_success_rating {
        filters = filters.min_success_rating(rating);
    }
    filters
}

fn print_metric(label: &str, unit: &str, avg: Option<f64>, best: Option<f64>) {
    if let (Some(avg), Some(best)) = (avg, best) {
        println!("  {:<23} avg {:.2} {}, best {:.2} {}", format!("{}:", label), avg, unit, best, unit);
    }
}

fn mark(passed: bool) -> &'static str {
    if passed { "✓" } else { "✗" }
}
