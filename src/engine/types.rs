/// Which scoring strategy an engine instance runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Sentence embedding + nearest-neighbor search.
    Dense,
    /// Joint prompt-and-reference classification.
    Classifier,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Dense => "dense",
            StrategyKind::Classifier => "classifier",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single scoring request. Ephemeral, never persisted.
///
/// For the classifier strategy the score is a probability in `[0, 1]`; for
/// the dense strategy it is a cosine similarity (in `[0, 1]` in practice,
/// since the embeddings are unit-normalized and near-opposite sentence
/// vectors do not occur with real models).
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// The prompt that produced this score.
    pub prompt: String,
    /// The similarity between the prompt and the ground truth.
    pub similarity_score: f32,
}

impl ScoreResult {
    pub fn new<S: Into<String>>(prompt: S, similarity_score: f32) -> Self {
        Self {
            prompt: prompt.into(),
            similarity_score,
        }
    }
}
