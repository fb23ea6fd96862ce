//! Ordered index mapping for one loaded analysis.
//!
//! Built once when a result is loaded. Every later index lookup (row
//! markers, summary text, request payload) goes through it, so the order on
//! screen and the indices sent to `/generate` cannot diverge.

use crate::types::AnalysisResult;

/// Where a keyword row comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordSource {
    /// Entry of `high_revenue_keywords`
    HighRevenue {
        kind: String,
        competition: String,
        cpc_potential: String,
    },
    /// Entry of `longtail_keywords`
    ///
    /// Longtail rows carry fixed badges: kind "longtail", competition "low", cpc "medium".
    Longtail,
}

/// One selectable keyword row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    pub index: usize,
    pub text: String,
    pub source: KeywordSource,
}

/// One selectable title row
#[derive(Debug, Clone, PartialEq)]
pub struct TitleEntry {
    pub index: usize,
    pub title: String,
    pub hook: String,
    pub ctr_score: f64,
}

/// Keyword and title rows in display order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    keywords: Vec<KeywordEntry>,
    titles: Vec<TitleEntry>,
}

impl Catalog {
    /// High-revenue keywords first, then longtail keywords, each in given order;
    /// titles in given order. Indices are zero-based positions in those sequences.
    pub fn build(result: &AnalysisResult) -> Self {
        let high_revenue = result.high_revenue_keywords.iter().map(|kw| {
            (
                kw.keyword.clone(),
                KeywordSource::HighRevenue {
                    kind: kw.kind.clone(),
                    competition: kw.competition.clone(),
                    cpc_potential: kw.cpc_potential.clone(),
                },
            )
        });
        let longtail = result
            .longtail_keywords
            .iter()
            .map(|kw| (kw.clone(), KeywordSource::Longtail));

        let keywords = high_revenue
            .chain(longtail)
            .enumerate()
            .map(|(index, (text, source))| KeywordEntry {
                index,
                text,
                source,
            })
            .collect();

        let titles = result
            .recommended_titles
            .iter()
            .enumerate()
            .map(|(index, t)| TitleEntry {
                index,
                title: t.title.clone(),
                hook: t.hook.clone(),
                ctr_score: t.ctr_score,
            })
            .collect();

        Self { keywords, titles }
    }

    pub fn keywords(&self) -> &[KeywordEntry] {
        &self.keywords
    }

    pub fn titles(&self) -> &[TitleEntry] {
        &self.titles
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    pub fn title_count(&self) -> usize {
        self.titles.len()
    }

    /// Keyword text at `index`
    pub fn keyword_text(&self, index: usize) -> Option<&str> {
        self.keywords.get(index).map(|k| k.text.as_str())
    }

    /// Title text at `index`
    pub fn title_text(&self, index: usize) -> Option<&str> {
        self.titles.get(index).map(|t| t.title.as_str())
    }
}
