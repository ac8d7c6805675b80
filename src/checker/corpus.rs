//! Reference/query corpus driving the equivalence check.

/// Words used by the default corpus, both as references and as queries.
pub const DEFAULT_WORDS: &[&str] = &[
    "banana",
    "bananas",
    "cabana",
    "foobarbazfoobarbaz",
    "a",
    "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
    "",
];

/// Highest edit bound checked by the default corpus.
pub const DEFAULT_MAX_DISTANCE: usize = 4;

/// Test configuration for the equivalence checker.
///
/// Every `(reference, max_distance)` combination is checked against every
/// query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct Corpus {
    /// Reference strings
    pub references: Vec<String>,
    /// Query strings
    pub queries: Vec<String>,
    /// Edit bounds
    pub max_distances: Vec<usize>,
}

impl Corpus {
    /// Use the same words as references and queries.
    pub fn symmetric<I, S>(words: I, max_distances: impl IntoIterator<Item = usize>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        Self {
            references: words.clone(),
            queries: words,
            max_distances: max_distances.into_iter().collect(),
        }
    }

    /// Number of `(reference, max_distance, query)` cases.
    pub fn case_count(&self) -> usize {
        self.references.len() * self.max_distances.len() * self.queries.len()
    }

    /// Load a corpus from JSON.
    ///
    /// Missing fields fall back to the default corpus.
    #[cfg(feature = "serialization")]
    pub fn from_json<R: std::io::Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::symmetric(DEFAULT_WORDS.iter().copied(), 0..=DEFAULT_MAX_DISTANCE)
    }
}
