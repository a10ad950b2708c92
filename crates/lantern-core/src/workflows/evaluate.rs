use crate::core::models::part::PartDescriptor;
use crate::core::models::placement::Placement;
use crate::core::models::verdict::{AssemblyVerdict, ScoreComponents};
use crate::engine::compatibility::{self, Legality};
use crate::engine::config::EvaluationConfig;
use crate::engine::error::EngineError;
use crate::engine::{position, rotation, synthesis};
use tracing::{debug, instrument, warn};

/// Evaluates one joint attempt under the default configuration.
///
/// This never panics and never returns an error value: internal faults are
/// reported through the verdict's `ok` flag.
pub fn evaluate(
    part_a: &PartDescriptor,
    part_b: &PartDescriptor,
    placement_a: &Placement,
    placement_b: &Placement,
) -> AssemblyVerdict {
    evaluate_with_config(
        part_a,
        part_b,
        placement_a,
        placement_b,
        &EvaluationConfig::default(),
    )
}

#[instrument(
    skip_all,
    name = "assembly_evaluation",
    fields(part_a = %part_a.name, part_b = %part_b.name)
)]
pub fn evaluate_with_config(
    part_a: &PartDescriptor,
    part_b: &PartDescriptor,
    placement_a: &Placement,
    placement_b: &Placement,
    config: &EvaluationConfig,
) -> AssemblyVerdict {
    match run_pipeline(part_a, part_b, placement_a, placement_b, config) {
        Ok(verdict) => verdict,
        Err(err) => {
            warn!(error = %err, "evaluation aborted");
            AssemblyVerdict::evaluation_error(err.to_string())
        }
    }
}

fn run_pipeline(
    part_a: &PartDescriptor,
    part_b: &PartDescriptor,
    placement_a: &Placement,
    placement_b: &Placement,
    config: &EvaluationConfig,
) -> Result<AssemblyVerdict, EngineError> {
    // === Stage 0: input validation ===
    // Required fields that cannot be defaulted; everything past this point
    // is infallible.
    for (part, placement) in [(part_a, placement_a), (part_b, placement_b)] {
        if !placement.is_finite() {
            return Err(EngineError::NonFinitePlacement {
                name: part.name.clone(),
            });
        }
    }
    // Only the anchoring part's rating feeds the difficulty factor.
    if part_a.difficulty < 1 {
        return Err(EngineError::InvalidDifficulty {
            name: part_a.name.clone(),
            found: part_a.difficulty,
        });
    }

    // === Stage 1: compatibility gate ===
    if let Legality::Illegal { message } = compatibility::check(part_a, part_b) {
        debug!(%message, "joint rejected by the compatibility gate");
        return Ok(AssemblyVerdict::rejected(message));
    }

    // === Stage 2 & 3: geometric scoring ===
    let scores = ScoreComponents::new(
        position::score(
            &part_a.connection_points,
            &part_b.connection_points,
            &placement_a.position,
            &placement_b.position,
        ),
        rotation::score(&placement_a.rotation, &placement_b.rotation),
    );

    // === Stage 4: verdict synthesis ===
    Ok(synthesis::synthesize(
        scores,
        part_a.difficulty,
        part_a.part_type,
        part_b.part_type,
        config,
    ))
}
