/// Tunable behavior of the verdict synthesizer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationConfig {
    /// Floor the final combined score at zero before converting it to a
    /// percentage. The historical scoring left the lower bound open, so a
    /// difficulty rating of 11 or more can drive the combined score -- and
    /// with it the reported accuracy -- negative. The open bound remains the
    /// default; the clamp is an explicit opt-in.
    pub clamp_final_score: bool,
}

impl EvaluationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with the final score floored at zero.
    pub fn clamped() -> Self {
        Self {
            clamp_final_score: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_preserves_the_open_lower_bound() {
        assert!(!EvaluationConfig::new().clamp_final_score);
    }

    #[test]
    fn clamped_config_floors_the_final_score() {
        assert!(EvaluationConfig::clamped().clamp_final_score);
    }
}
