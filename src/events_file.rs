use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use almanac_events::{EventRule, RuleKind, parse_rules};

/// Reads and parses the whole events file.
pub fn load(path: &Path) -> Result<Vec<EventRule>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read events file: {}", path.display()))?;
    let rules = parse_rules(&text)
        .with_context(|| format!("invalid events file: {}", path.display()))?;
    let count = |kind| rules.iter().filter(|rule| rule.kind() == kind).count();
    info!(
        path = %path.display(),
        anniversaries = count(RuleKind::Anniversary),
        milestones = count(RuleKind::Milestone),
        generic = count(RuleKind::Generic),
        "events loaded"
    );
    Ok(rules)
}
