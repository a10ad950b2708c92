use serde::Serialize;

/// The two geometric sub-scores produced by the scoring stages, each in
/// `[0, 1]` with `1.0` meaning ideal.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScoreComponents {
    pub position: f64,
    pub rotation: f64,
}

impl ScoreComponents {
    pub fn new(position: f64, rotation: f64) -> Self {
        Self { position, rotation }
    }

    pub fn position_percent(&self) -> i32 {
        (self.position * 100.0).round() as i32
    }

    pub fn rotation_percent(&self) -> i32 {
        (self.rotation * 100.0).round() as i32
    }
}

/// Per-component breakdown attached to a scored verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerdictDetails {
    /// Position sub-score as a rounded percentage.
    pub position_score: i32,
    /// Rotation sub-score as a rounded percentage.
    pub rotation_score: i32,
    /// Difficulty rating of the anchoring part.
    pub difficulty: u32,
    /// Display label for this pairing of part types.
    pub connection_type: &'static str,
}

/// The structured outcome of one evaluation call.
///
/// Three shapes share this type:
/// - a scored verdict (`ok`, with `details` and, on failure, `suggestions`),
/// - a structural rejection (`ok`, accuracy 0, no details),
/// - an evaluation error (`ok = false`, with `error` and `debug` populated).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssemblyVerdict {
    /// Whether evaluation completed without an internal fault.
    pub ok: bool,
    /// The pass/fail decision for the joint attempt.
    pub assembled: bool,
    /// Rounded accuracy percentage. Not floored at zero under the default
    /// configuration, so extreme difficulty ratings can drive it negative.
    pub accuracy: i32,
    /// Game points awarded, always `accuracy * 10`.
    pub score: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<VerdictDetails>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

impl AssemblyVerdict {
    /// A verdict graded by the synthesizer.
    pub fn scored(
        assembled: bool,
        accuracy: i32,
        message: String,
        details: VerdictDetails,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            ok: true,
            assembled,
            accuracy,
            score: accuracy * 10,
            message,
            details: Some(details),
            suggestions,
            error: None,
            debug: None,
        }
    }

    /// A structurally illegal joint: a normal outcome, not a fault.
    pub fn rejected(message: String) -> Self {
        Self {
            ok: true,
            assembled: false,
            accuracy: 0,
            score: 0,
            message,
            details: None,
            suggestions: Vec::new(),
            error: None,
            debug: None,
        }
    }

    /// An internal fault caught at the pipeline boundary.
    pub fn evaluation_error(debug: String) -> Self {
        Self {
            ok: false,
            assembled: false,
            accuracy: 0,
            score: 0,
            message: String::new(),
            details: None,
            suggestions: Vec::new(),
            error: Some("evaluation failed".to_string()),
            debug: Some(debug),
        }
    }
}
