//! Keyword lexicon and the text risk classifier built on it.
//!
//! - [`tables`] — the built-in keyword lists per [`Category`].
//! - [`classifier`] — scores a text corpus against a [`Lexicon`] and explains the score.
//!
//! A [`Lexicon`] is assembled once at startup (built-in tables plus any
//! configured extensions) and only ever read afterwards, so one instance can be
//! shared by reference across threads.

pub mod classifier;
pub mod tables;

use std::collections::HashMap;

use crate::config::LexiconConfig;

/// Keyword categories, in the order the classifier evaluates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    HighRisk,
    MediumRisk,
    LowRisk,
    Privacy,
    ProfessionalNegative,
    ProfessionalPositive,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::HighRisk,
        Category::MediumRisk,
        Category::LowRisk,
        Category::Privacy,
        Category::ProfessionalNegative,
        Category::ProfessionalPositive,
    ];

    /// Points per matched term. Positive professional terms reduce the score by this amount.
    pub fn weight(self) -> f64 {
        match self {
            Category::HighRisk => 25.0,
            Category::MediumRisk => 15.0,
            Category::LowRisk => 3.0,
            Category::Privacy => 20.0,
            Category::ProfessionalNegative => 30.0,
            Category::ProfessionalPositive => 3.0,
        }
    }

    fn builtin_terms(self) -> &'static [&'static str] {
        match self {
            Category::HighRisk => tables::HIGH_RISK,
            Category::MediumRisk => tables::MEDIUM_RISK,
            Category::LowRisk => tables::LOW_RISK,
            Category::Privacy => tables::PRIVACY,
            Category::ProfessionalNegative => tables::PROFESSIONAL_NEGATIVE,
            Category::ProfessionalPositive => tables::PROFESSIONAL_POSITIVE,
        }
    }
}

/// Immutable category → keyword mapping.
#[derive(Debug, Clone)]
pub struct Lexicon {
    terms: HashMap<Category, Vec<String>>,
    personal_life: Vec<String>,
}

impl Lexicon {
    /// The built-in tables, with no extensions.
    pub fn builtin() -> Self {
        Self::with_extensions(&LexiconConfig::default())
    }

    /// Built-in tables with configured terms appended per category.
    ///
    /// Extra terms are trimmed and lowercased; blanks and duplicates are dropped.
    pub fn with_extensions(config: &LexiconConfig) -> Self {
        let terms = Category::ALL
            .into_iter()
            .map(|category| {
                let mut list: Vec<String> = category
                    .builtin_terms()
                    .iter()
                    .map(|t| t.to_string())
                    .collect();
                for extra in config.extra_terms(category) {
                    let term = extra.trim().to_lowercase();
                    if !term.is_empty() && !list.contains(&term) {
                        list.push(term);
                    }
                }
                (category, list)
            })
            .collect();

        Lexicon {
            terms,
            personal_life: tables::PERSONAL_LIFE.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn terms(&self, category: Category) -> &[String] {
        self.terms.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Terms of `category` occurring anywhere in `lowered`, in table order.
    ///
    /// `lowered` must already be lowercase.
    pub fn matches(&self, category: Category, lowered: &str) -> Vec<String> {
        find_terms(self.terms(category), lowered)
    }

    /// Personal-life terms occurring in `lowered`, in table order.
    pub fn personal_life_matches(&self, lowered: &str) -> Vec<String> {
        find_terms(&self.personal_life, lowered)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

fn find_terms(terms: &[String], lowered: &str) -> Vec<String> {
    terms
        .iter()
        .filter(|term| lowered.contains(term.as_str()))
        .cloned()
        .collect()
}
