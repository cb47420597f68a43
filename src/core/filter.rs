use crate::domain::model::{MatchRecord, ProductDetail, Report, VersionCycle};

/// First cycle whose EOL text contains `target_year`, as a report row.
///
/// Matching is plain substring containment, so `"2026-03-01"` matches `"2026"`
/// while `"false"` or `""` never match a 4-digit year. Later cycles are not
/// looked at once one matches.
pub fn collect_matches(
    product: &str,
    cycles: &[VersionCycle],
    target_year: &str,
) -> Option<MatchRecord> {
    cycles
        .iter()
        .find(|c| c.eol.contains(target_year))
        .map(|c| MatchRecord {
            product: product.to_string(),
            eol_date: c.eol.clone(),
            cycle: c.cycle.clone(),
        })
}

/// Run `collect_matches` over every product, keeping product order.
pub fn build_report(details: &[ProductDetail], target_year: &str) -> Report {
    let mut report = Report::new(target_year);
    for detail in details {
        if let Some(record) = collect_matches(&detail.product, &detail.cycles, target_year) {
            report.records.push(record);
        }
    }
    report
}
