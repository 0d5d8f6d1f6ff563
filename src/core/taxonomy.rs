//! The keyword taxonomy and the blacklist.
//!
//! Both are loaded once at startup, validated, and then only read. Every
//! term and related string is compiled into a case-insensitive whole-word
//! matcher so classification never builds a regex per call.

use crate::domain::model::KeywordRule;
use crate::utils::error::{Result, TagError};
use crate::utils::validation::{validate_non_empty_string, validate_unique_names, validate_weight};
use regex::Regex;
use std::collections::HashSet;

pub const DEFAULT_BLACKLIST: [&str; 3] = ["Asthma", "Cancer", "Oncology"];

/// Counts whole-word, case-insensitive occurrences of one phrase.
#[derive(Debug, Clone)]
pub struct WordMatcher {
    pattern: Regex,
}

impl WordMatcher {
    pub fn new(phrase: &str) -> Result<Self> {
        let phrase = phrase.trim();
        let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase))).map_err(|e| {
            TagError::InvalidConfigValueError {
                field: "keywords".to_string(),
                value: phrase.to_string(),
                reason: format!("Cannot build matcher: {}", e),
            }
        })?;

        Ok(Self { pattern })
    }

    pub fn count(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }
}

#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub rule: KeywordRule,
    pub term: WordMatcher,
    pub related: Vec<WordMatcher>,
}

impl CompiledRule {
    /// Total whole-word hits across all related strings.
    pub fn related_hits(&self, text: &str) -> usize {
        self.related.iter().map(|m| m.count(text)).sum()
    }
}

#[derive(Debug, Clone)]
pub struct Taxonomy {
    rules: Vec<CompiledRule>,
}

impl Taxonomy {
    pub fn new(rules: Vec<KeywordRule>) -> Result<Self> {
        if rules.is_empty() {
            return Err(TagError::MissingConfigError {
                field: "keywords".to_string(),
            });
        }

        let mut seen = HashSet::new();
        let mut compiled = Vec::with_capacity(rules.len());

        for rule in rules {
            validate_non_empty_string("keywords.term", &rule.term)?;
            validate_weight(&format!("keywords.{}.weight", rule.term), rule.weight)?;
            if !seen.insert(rule.term.trim().to_lowercase()) {
                return Err(TagError::DuplicateTermError { term: rule.term });
            }

            let related = rule
                .related
                .iter()
                .map(|phrase| {
                    validate_non_empty_string(&format!("keywords.{}.related", rule.term), phrase)?;
                    WordMatcher::new(phrase)
                })
                .collect::<Result<Vec<_>>>()?;

            compiled.push(CompiledRule {
                term: WordMatcher::new(&rule.term)?,
                related,
                rule,
            });
        }

        tracing::debug!("Compiled taxonomy with {} keyword rules", compiled.len());
        Ok(Self { rules: compiled })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(builtin_rules())
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Tag names that must never be suggested. Lookups ignore case.
#[derive(Debug, Clone)]
pub struct Blacklist {
    names: Vec<String>,
    lowered: HashSet<String>,
}

impl Blacklist {
    pub fn new(names: Vec<String>) -> Result<Self> {
        for name in &names {
            validate_non_empty_string("blacklist", name)?;
        }
        validate_unique_names("blacklist", &names)?;

        let lowered = names.iter().map(|n| n.trim().to_lowercase()).collect();
        Ok(Self { names, lowered })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lowered.contains(&name.trim().to_lowercase())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for Blacklist {
    fn default() -> Self {
        let names: Vec<String> = DEFAULT_BLACKLIST.iter().map(|n| n.to_string()).collect();
        let lowered = names.iter().map(|n| n.to_lowercase()).collect();
        Self { names, lowered }
    }
}

pub fn builtin_rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new(
            "Cardiology",
            10.0,
            &[
                "heart", "cardiac", "cardiovascular", "arrhythmia", "atrial fibrillation", "afib",
                "myocardial", "coronary", "hypertension", "ecg", "ekg", "echocardiogram",
            ],
        ),
        KeywordRule::new(
            "Neurology",
            10.0,
            &[
                "brain", "neurological", "stroke", "seizure", "epilepsy", "migraine",
                "parkinson", "multiple sclerosis", "neuropathy", "dementia",
            ],
        ),
        KeywordRule::new(
            "Oncology",
            10.0,
            &["tumor", "tumour", "chemotherapy", "radiotherapy", "metastasis", "malignant", "carcinoma"],
        ),
        KeywordRule::new(
            "Cancer",
            10.0,
            &["tumor", "malignancy", "metastatic", "lymphoma", "leukemia", "melanoma"],
        ),
        KeywordRule::new(
            "Asthma",
            9.0,
            &["inhaler", "bronchospasm", "wheezing", "bronchodilator"],
        ),
        KeywordRule::new(
            "Pediatrics",
            9.0,
            &["child", "children", "infant", "newborn", "neonatal", "adolescent", "pediatric", "vaccination"],
        ),
        KeywordRule::new(
            "Psychiatry",
            9.0,
            &[
                "mental health", "depression", "anxiety", "schizophrenia", "bipolar",
                "antidepressant", "psychosis", "suicide", "ptsd",
            ],
        ),
        KeywordRule::new(
            "Dermatology",
            8.0,
            &["skin", "rash", "eczema", "psoriasis", "acne", "dermatitis", "lesion"],
        ),
        KeywordRule::new(
            "Orthopedics",
            8.0,
            &["fracture", "bone", "joint", "spine", "knee", "hip replacement", "osteoporosis", "ligament"],
        ),
        KeywordRule::new(
            "Radiology",
            8.0,
            &["x-ray", "mri", "ct scan", "ultrasound", "imaging", "radiograph", "mammogram"],
        ),
        KeywordRule::new(
            "Emergency Medicine",
            9.0,
            &["trauma", "resuscitation", "triage", "emergency department", "cpr", "sepsis", "shock"],
        ),
        KeywordRule::new(
            "Surgery",
            9.0,
            &["surgical", "operation", "laparoscopic", "incision", "anesthesia", "postoperative", "suture"],
        ),
        KeywordRule::new(
            "Endocrinology",
            9.0,
            &["diabetes", "insulin", "thyroid", "hormone", "glucose", "hba1c", "metformin"],
        ),
        KeywordRule::new(
            "Gastroenterology",
            8.0,
            &["liver", "bowel", "colonoscopy", "endoscopy", "hepatitis", "crohn", "cirrhosis", "reflux"],
        ),
        KeywordRule::new(
            "Pulmonology",
            8.0,
            &["lung", "respiratory", "copd", "pneumonia", "ventilation", "pulmonary", "spirometry"],
        ),
        KeywordRule::new(
            "Infectious Disease",
            9.0,
            &["infection", "antibiotic", "antibiotics", "virus", "viral", "bacterial", "covid", "vaccine"],
        ),
        KeywordRule::new(
            "Nephrology",
            8.0,
            &["kidney", "renal", "dialysis", "creatinine", "nephropathy"],
        ),
        KeywordRule::new(
            "Obstetrics",
            8.0,
            &["pregnancy", "pregnant", "prenatal", "labor", "delivery", "postpartum", "gestational"],
        ),
        KeywordRule::new(
            "Geriatrics",
            8.0,
            &["elderly", "older adults", "aging", "frailty", "falls", "nursing home"],
        ),
        KeywordRule::new(
            "Pharmacology",
            8.0,
            &["drug", "dosage", "dose", "medication", "prescription", "side effects", "interaction"],
        ),
        KeywordRule::new(
            "Research",
            8.0,
            &["study", "trial", "clinical trial", "meta-analysis", "cohort", "randomized", "evidence"],
        ),
        KeywordRule::new(
            "Medical Education",
            8.0,
            &["residency", "medical student", "exam", "curriculum", "training", "fellowship"],
        ),
    ]
}
