//! Knowledge merge - additive, with ADRs keyed by number and sorted

use crate::layer::KnowledgeLayer;

use super::{concat_text, dedup_concat, merge_keyed, merge_maps};

/// Merge knowledge fragments, lowest precedence first.
///
/// Free-text fields concatenate in input order; ADRs merge by number
/// (later definitions win) and the merged list is sorted ascending by
/// number.
pub fn merge_knowledge(fragments: &[&KnowledgeLayer]) -> KnowledgeLayer {
    let mut adrs = merge_keyed(fragments.iter().map(|f| f.adrs.as_slice()), |a| a.number);
    adrs.sort_by_key(|a| a.number);

    KnowledgeLayer {
        overview: concat_text(fragments.iter().map(|f| f.overview.as_deref())),
        architecture: concat_text(fragments.iter().map(|f| f.architecture.as_deref())),
        history: concat_text(fragments.iter().map(|f| f.history.as_deref())),
        business_rules: dedup_concat(fragments.iter().map(|f| f.business_rules.as_slice())),
        adrs,
        glossary: merge_maps(fragments.iter().map(|f| &f.glossary)),
        specs: merge_maps(fragments.iter().map(|f| &f.specs)),
        raw_content: concat_text(fragments.iter().map(|f| f.raw_content.as_deref())),
    }
}
