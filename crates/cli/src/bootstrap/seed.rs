use anyhow::Context;
use emudns_application::ports::DnsCachePort;
use emudns_application::use_cases::CacheAnswersUseCase;
use emudns_domain::DnsAnswer;
use std::fs;
use tracing::info;

/// Read a JSON array of resolver answers.
pub fn load_answers(path: &str) -> anyhow::Result<Vec<DnsAnswer>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read seed file '{path}'"))?;
    let answers = serde_json::from_str(&content)
        .with_context(|| format!("seed file '{path}' is not a JSON array of answers"))?;
    Ok(answers)
}

pub fn seed_cache(cache: &mut dyn DnsCachePort, answers: &[DnsAnswer]) -> usize {
    let cached = CacheAnswersUseCase::new().execute(cache, answers);
    info!(
        answers = answers.len(),
        cached,
        skipped = answers.len() - cached,
        "Cache seeded"
    );
    cached
}
