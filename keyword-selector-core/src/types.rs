//! Wire types exchanged with the analysis backend.
//!
//! Field names follow the backend's JSON. The backend's shopping prompt uses a
//! few alternative names (`purchase_needs`, `shopping_strategy`,
//! `affiliate_potential`); they are accepted as aliases so either prompt
//! variant decodes into the same shape.

use serde::{Deserialize, Serialize};

/// `POST /analyze` request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub topic: String,
}

/// `POST /generate` request body
///
/// `keywords` are catalog indices in ascending order; `title` is a title index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub keywords: Vec<usize>,
    pub title: usize,
}

/// Topic analysis returned by `/analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub main_keyword: String,
    #[serde(default, alias = "purchase_needs")]
    pub core_needs: Vec<String>,
    #[serde(default)]
    pub high_revenue_keywords: Vec<HighRevenueKeyword>,
    #[serde(default)]
    pub longtail_keywords: Vec<String>,
    /// Questions people actually type into a search box
    #[serde(default, alias = "purchase_queries")]
    pub search_queries: Vec<String>,
    #[serde(default)]
    pub recommended_titles: Vec<RecommendedTitle>,
    #[serde(default, alias = "shopping_strategy")]
    pub content_strategy: ContentStrategy,
}

/// A monetizable keyword with its market metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighRevenueKeyword {
    pub keyword: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub competition: String,
    #[serde(default, alias = "affiliate_potential")]
    pub cpc_potential: String,
}

/// A suggested video title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedTitle {
    pub title: String,
    #[serde(default)]
    pub hook: String,
    #[serde(default)]
    pub ctr_score: f64,
}

/// Intro / body / conclusion plan for the content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStrategy {
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub conclusion: String,
}

impl ContentStrategy {
    pub fn is_empty(&self) -> bool {
        self.intro.is_empty() && self.body.is_empty() && self.conclusion.is_empty()
    }
}

/// Response of `/generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub script_path: String,
    pub script_data: ScriptData,
}

fn default_success() -> bool {
    true
}

/// Generated short-form script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptData {
    pub title: String,
    pub script_text: String,
    /// Estimated length in seconds
    pub duration: f64,
    #[serde(default)]
    pub hashtags: Vec<String>,

    // Optional production metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_text: Option<ThumbnailText>,
}

/// Thumbnail caption pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailText {
    pub main: String,
    #[serde(default)]
    pub sub: String,
}
