// Keyword generator trait — swap-ready abstraction.
//
// The HTTP layer and the CLI only see this trait. The shipped implementation
// is the local rule-based generator, but a model-backed one could slot in
// without touching the handlers.

/// Trait for turning a title or description into a list of keywords.
pub trait KeywordGenerator: Send + Sync {
    /// Generate keywords for `text`, optionally biased towards `category`.
    ///
    /// Never fails: empty input degrades to a fallback list and unknown
    /// categories are ignored.
    fn generate(&self, text: Option<&str>, category: Option<&str>) -> Vec<String>;

    /// The static list returned when there is nothing to work with.
    fn fallback(&self) -> Vec<String>;

    /// Identifier reported to API clients in the `model` field.
    fn model_name(&self) -> &'static str;
}
