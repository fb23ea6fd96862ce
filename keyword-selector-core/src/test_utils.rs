//! 测试辅助模块
//!
//! 提供单元测试共用的样例数据。

use crate::types::{
    AnalysisResult, ContentStrategy, GenerateResponse, HighRevenueKeyword, RecommendedTitle,
    ScriptData,
};

/// 1 个高收益关键词 + 1 个长尾关键词 + 1 个标题
pub fn sample_analysis() -> AnalysisResult {
    AnalysisResult {
        main_keyword: "에어프라이어".to_string(),
        core_needs: vec!["가격 비교".to_string(), "리뷰".to_string()],
        high_revenue_keywords: vec![HighRevenueKeyword {
            keyword: "에어프라이어 추천".to_string(),
            kind: "비교검증형".to_string(),
            competition: "high".to_string(),
            cpc_potential: "높음".to_string(),
        }],
        longtail_keywords: vec!["에어프라이어 청소법".to_string()],
        search_queries: vec![],
        recommended_titles: vec![RecommendedTitle {
            title: "이것만 알면 끝".to_string(),
            hook: "반전".to_string(),
            ctr_score: 88.0,
        }],
        content_strategy: ContentStrategy {
            intro: "가격 충격으로 시작".to_string(),
            body: "핵심 정보와 비교".to_string(),
            conclusion: "설명란 링크 유도".to_string(),
        },
    }
}

pub fn sample_generate_response() -> GenerateResponse {
    GenerateResponse {
        success: true,
        script_path: "input/scripts/keyword_selected_20250101_120000.json".to_string(),
        script_data: ScriptData {
            title: "이것만 알면 끝".to_string(),
            script_text: "여러분, 에어프라이어 정보 알아보시죠!".to_string(),
            duration: 20.0,
            hashtags: vec!["#에어프라이어청소법".to_string()],
            voice_id: None,
            category: None,
            description: None,
            thumbnail_text: None,
        },
    }
}
