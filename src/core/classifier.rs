//! Keyword-weighted medical tag classifier.
//!
//! A `TagClassifier` is built once from a validated taxonomy, policy and
//! blacklist, then shared across callers. `classify` is pure: the same
//! request always yields the same suggestions, and no input makes it fail.

use crate::core::policy::ClassifierPolicy;
use crate::core::taxonomy::{Blacklist, Taxonomy};
use crate::domain::model::{ClassifyRequest, TagSuggestion};
use crate::utils::error::{Result, TagError};
use crate::utils::validation::Validate;

pub const DISCUSSION: &str = "Discussion";
pub const CLINICAL: &str = "Clinical";
pub const RESEARCH: &str = "Research";

/// Tags the classifier can emit without a taxonomy match.
pub const FALLBACK_TAGS: [&str; 3] = [DISCUSSION, CLINICAL, RESEARCH];

const SHORT_INPUT_CLINICAL_WORDS: [&str; 6] =
    ["patient", "doctor", "medical", "treatment", "hospital", "clinic"];

/// Suggestions keyed by name, kept in insertion order.
#[derive(Debug, Default)]
struct SuggestionSet {
    items: Vec<TagSuggestion>,
}

impl SuggestionSet {
    /// Adds `name`, keeping the higher confidence if it is already present.
    fn upsert(&mut self, name: &str, confidence: f64) {
        match self.items.iter_mut().find(|s| s.name == name) {
            Some(existing) => {
                if confidence > existing.confidence {
                    existing.confidence = confidence;
                }
            }
            None => self.items.push(TagSuggestion::new(name, confidence)),
        }
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn into_vec(self) -> Vec<TagSuggestion> {
        self.items
    }
}

#[derive(Debug, Clone)]
pub struct TagClassifier {
    taxonomy: Taxonomy,
    policy: ClassifierPolicy,
    blacklist: Blacklist,
}

impl TagClassifier {
    pub fn new(taxonomy: Taxonomy, policy: ClassifierPolicy, blacklist: Blacklist) -> Result<Self> {
        policy.validate()?;

        for name in FALLBACK_TAGS {
            if blacklist.contains(name) {
                return Err(TagError::InvalidConfigValueError {
                    field: "blacklist".to_string(),
                    value: name.to_string(),
                    reason: "Fallback tags cannot be blacklisted".to_string(),
                });
            }
        }

        tracing::info!(
            "✅ Tag classifier ready ({} keyword rules, {} blacklisted names)",
            taxonomy.len(),
            blacklist.names().len()
        );

        Ok(Self {
            taxonomy,
            policy,
            blacklist,
        })
    }

    /// Built-in taxonomy, default policy and default blacklist.
    pub fn builtin() -> Result<Self> {
        Self::new(Taxonomy::builtin()?, ClassifierPolicy::default(), Blacklist::default())
    }

    pub fn policy(&self) -> &ClassifierPolicy {
        &self.policy
    }

    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn classify(&self, request: &ClassifyRequest) -> Vec<TagSuggestion> {
        let title = request.title.as_str();
        let content = request.content.as_str();

        if title.trim().is_empty() && content.trim().is_empty() {
            tracing::debug!("Empty input, returning generic tag");
            return vec![TagSuggestion::new(DISCUSSION, 0.7)];
        }

        let combined = format!("{} {}", title, content).to_lowercase();
        let input_chars = title.chars().count() + content.chars().count();

        if input_chars < self.policy.short_input_chars {
            tracing::debug!("Short input ({} chars), skipping keyword matching", input_chars);
            return self.short_input_tags(&combined);
        }

        tracing::debug!(
            "Classifying {} chars against {} rules ({} known tags)",
            input_chars,
            self.taxonomy.len(),
            request.existing_tags.len()
        );

        let mut suggestions = SuggestionSet::default();

        for name in &request.selected_tags {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            if self.blacklist.contains(name) {
                tracing::info!("🚫 Dropping blacklisted selected tag: {}", name);
                continue;
            }
            suggestions.upsert(name, 1.0);
        }

        self.score_taxonomy(&combined, &mut suggestions);

        if suggestions.is_empty() {
            let (name, confidence) = fallback_tag(&combined);
            tracing::debug!("No confident tags, falling back to {} ({})", name, confidence);
            suggestions.upsert(name, confidence);
        }

        self.finalize(suggestions.into_vec())
    }

    /// Convenience for callers without selected or known tags.
    pub fn classify_text(&self, content: &str, title: &str) -> Vec<TagSuggestion> {
        self.classify(&ClassifyRequest::new(content, title))
    }

    fn short_input_tags(&self, text: &str) -> Vec<TagSuggestion> {
        let mut tags = vec![TagSuggestion::new(DISCUSSION, 0.8)];
        if SHORT_INPUT_CLINICAL_WORDS.iter().any(|w| text.contains(w)) {
            tags.push(TagSuggestion::new(CLINICAL, 0.7));
        }
        self.finalize(tags)
    }

    fn score_taxonomy(&self, text: &str, suggestions: &mut SuggestionSet) {
        let policy = &self.policy;

        for compiled in self.taxonomy.rules() {
            let rule = &compiled.rule;
            if self.blacklist.contains(&rule.term) {
                continue;
            }

            let direct_hits = compiled.term.count(text);
            if direct_hits > 0 {
                let confidence = policy.direct.score(direct_hits, rule.weight);
                if policy.direct.accepts(confidence) {
                    tracing::debug!(
                        "Matched '{}' directly ({} hits, confidence {:.2})",
                        rule.term,
                        direct_hits,
                        confidence
                    );
                    suggestions.upsert(&rule.term, confidence);
                    continue;
                }
                tracing::debug!(
                    "Discarded direct match '{}' ({} hits, confidence {:.2})",
                    rule.term,
                    direct_hits,
                    confidence
                );
            }

            let related_hits = compiled.related_hits(text);
            if related_hits < policy.related_min_hits {
                continue;
            }

            let confidence = policy.related.score(related_hits, rule.weight);
            if policy.related.accepts(confidence) {
                tracing::debug!(
                    "Matched '{}' via related terms ({} hits, confidence {:.2})",
                    rule.term,
                    related_hits,
                    confidence
                );
                suggestions.upsert(&rule.term, confidence);
            } else {
                tracing::debug!(
                    "Discarded related match '{}' ({} hits, confidence {:.2})",
                    rule.term,
                    related_hits,
                    confidence
                );
            }
        }
    }

    /// Sorts by descending confidence, drops blacklisted names and truncates.
    pub fn finalize(&self, mut tags: Vec<TagSuggestion>) -> Vec<TagSuggestion> {
        tags.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        tags.retain(|t| !self.blacklist.contains(&t.name));
        tags.truncate(self.policy.max_suggestions);
        tags
    }
}

/// Last-resort tag when nothing in the taxonomy matched.
fn fallback_tag(text: &str) -> (&'static str, f64) {
    if text.contains("question") || text.contains('?') {
        (DISCUSSION, 0.8)
    } else if text.contains("research") || text.contains("study") {
        (RESEARCH, 0.8)
    } else if text.contains("patient") || text.contains("treatment") {
        (CLINICAL, 0.7)
    } else {
        (DISCUSSION, 0.6)
    }
}
