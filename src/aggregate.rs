use crate::models::{LanguageFrequency, Repository};

/// Count repositories per language. Repositories without a language are
/// skipped; names are compared exactly, so `Rust` and `rust` are distinct.
///
/// An empty result means there is nothing to chart.
pub fn aggregate(repos: &[Repository]) -> LanguageFrequency {
    let mut languages = LanguageFrequency::new();
    for lang in repos.iter().filter_map(|repo| repo.language.as_deref()) {
        *languages.entry(lang.to_string()).or_insert(0) += 1;
    }
    languages
}
