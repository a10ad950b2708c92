use crate::cli::EvaluateArgs;
use crate::error::{CliError, Result};
use lantern_assembly::core::models::placement::Placement;
use lantern_assembly::core::models::verdict::AssemblyVerdict;
use lantern_assembly::engine::config::EvaluationConfig;
use lantern_assembly::workflows;
use nalgebra::Point3;
use tracing::info;

pub fn run(args: EvaluateArgs) -> Result<()> {
    let catalog = super::load_catalog(args.catalog.as_deref())?;
    let part_a = catalog
        .get(args.part_a)
        .ok_or(CliError::PartNotFound(args.part_a))?;
    let part_b = catalog
        .get(args.part_b)
        .ok_or(CliError::PartNotFound(args.part_b))?;

    let placement_a = Placement::new(Point3::from(args.position_a), args.rotation_a);
    let placement_b = Placement::new(Point3::from(args.position_b), args.rotation_b);
    let config = if args.clamp {
        EvaluationConfig::clamped()
    } else {
        EvaluationConfig::default()
    };

    info!(
        "Evaluating joint attempt: '{}' + '{}'",
        part_a.name, part_b.name
    );
    let verdict =
        workflows::evaluate_with_config(part_a, part_b, &placement_a, &placement_b, &config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        print_verdict(&verdict);
    }

    Ok(())
}

fn print_verdict(verdict: &AssemblyVerdict) {
    if !verdict.ok {
        println!(
            "evaluation failed: {}",
            verdict.debug.as_deref().unwrap_or("unknown fault")
        );
        return;
    }

    println!("{}", verdict.message);
    if let Some(details) = &verdict.details {
        println!("  accuracy:   {}% ({} points)", verdict.accuracy, verdict.score);
        println!("  position:   {}%", details.position_score);
        println!("  rotation:   {}%", details.rotation_score);
        println!("  joint:      {}", details.connection_type);
        println!("  difficulty: {}", details.difficulty);
    }
    for suggestion in &verdict.suggestions {
        println!("  hint: {suggestion}");
    }
}
