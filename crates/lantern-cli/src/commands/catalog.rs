use crate::cli::{CatalogArgs, CatalogCommands};
use crate::error::{CliError, Result};
use lantern_assembly::core::models::part::PartDescriptor;

pub fn run(args: CatalogArgs) -> Result<()> {
    match args.command {
        CatalogCommands::List { catalog } => {
            let catalog = super::load_catalog(catalog.as_deref())?;
            for part in catalog.parts() {
                println!(
                    "{:>3}  {:<20} {:<11} difficulty {}",
                    part.id, part.name, part.part_type, part.difficulty
                );
            }
            Ok(())
        }
        CatalogCommands::Show { id, catalog } => {
            let catalog = super::load_catalog(catalog.as_deref())?;
            let part = catalog.get(id).ok_or(CliError::PartNotFound(id))?;
            print_part(part);
            Ok(())
        }
    }
}

fn print_part(part: &PartDescriptor) {
    println!("{} (id {})", part.name, part.id);
    println!("  type:       {}", part.part_type);
    println!("  difficulty: {}", part.difficulty);

    let compatible: Vec<&str> = part
        .compatible_types
        .iter()
        .map(|t| t.as_str())
        .collect();
    println!(
        "  joins to:   {}",
        if compatible.is_empty() {
            "nothing".to_string()
        } else {
            compatible.join(", ")
        }
    );

    if part.connection_points.is_empty() {
        println!("  connection points: none");
    } else {
        println!("  connection points:");
        for point in &part.connection_points {
            println!(
                "    {:?} at ({:.2}, {:.2}, {:.2})",
                point.kind, point.offset.x, point.offset.y, point.offset.z
            );
        }
    }
}
