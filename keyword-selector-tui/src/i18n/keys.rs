//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按页面分类**：文本归属于它出现的页面，如 `input.*`, `results.*`, `complete.*`
//! 2. **弹窗内容归 `modal.*`**：错误弹窗与帮助弹窗
//! 3. **校验/请求错误归 `errors.*`**：由 Update 层转换为弹窗消息
//! 4. **跨页面复用归 `common.*`**
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本
    pub common: CommonTexts,
    /// 键盘提示
    pub hints: HintTexts,
    /// 主题输入页
    pub input: InputTexts,
    /// 加载中
    pub loading: LoadingTexts,
    /// 分析结果页
    pub results: ResultsTexts,
    /// 完成页
    pub complete: CompleteTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 错误消息
    pub errors: ErrorTexts,
    /// 状态栏消息
    pub status: StatusTexts,
    /// 帮助弹窗
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub error: &'static str,
    pub quit: &'static str,
    pub help: &'static str,
    pub restart: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub space: &'static str,
    pub arrows_ud: &'static str,
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub analyze: &'static str,
    pub switch_pane: &'static str,
    pub move_up_down: &'static str,
    pub select: &'static str,
    pub generate: &'static str,
    pub scroll: &'static str,
    pub language: &'static str,
    pub theme: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 主题输入页
pub struct InputTexts {
    pub title: &'static str,
    pub prompt: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
    pub server: &'static str,
}

/// 加载中
pub struct LoadingTexts {
    pub analyzing: &'static str,
    pub generating: &'static str,
}

/// 分析结果页
pub struct ResultsTexts {
    pub title: &'static str,
    pub main_keyword: &'static str,
    pub core_needs: &'static str,
    pub search_queries: &'static str,
    pub keywords: &'static str,
    pub titles: &'static str,
    pub strategy: &'static str,
    pub intro: &'static str,
    pub body: &'static str,
    pub conclusion: &'static str,
    pub no_keywords: &'static str,
    pub no_titles: &'static str,
    /// 长尾关键词的固定徽章
    pub longtail_kind: &'static str,
    pub longtail_competition: &'static str,
    pub longtail_cpc: &'static str,
    pub competition: &'static str,
    pub cpc: &'static str,
    pub hook: &'static str,
    /// 选择摘要
    pub summary: &'static str,
    pub selected_keywords: &'static str,
    pub keyword_count_suffix: &'static str,
    pub selected_title: &'static str,
    /// 生成按钮
    pub generate_button: &'static str,
    pub generating_button: &'static str,
}

/// 完成页
pub struct CompleteTexts {
    pub title: &'static str,
    pub heading: &'static str,
    pub saved_to: &'static str,
    pub generated_title: &'static str,
    pub script: &'static str,
    pub duration: &'static str,
    pub seconds: &'static str,
    pub hashtags: &'static str,
    pub voice: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub thumbnail: &'static str,
    pub next_steps: &'static str,
    pub next_step_lines: [&'static str; 3],
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    pub validation_title: &'static str,
    pub close_hint: &'static str,
    pub help_title: &'static str,
    pub help_close_hint: &'static str,
}

/// 错误消息
pub struct ErrorTexts {
    pub empty_topic: &'static str,
    pub no_keyword: &'static str,
    pub no_title: &'static str,
    pub invalid_keyword: &'static str,
    pub invalid_title: &'static str,
    /// 请求失败前缀，后接具体原因
    pub request_failed: &'static str,
    pub analyze_failed: &'static str,
    pub generate_failed: &'static str,
}

/// 状态栏消息
pub struct StatusTexts {
    pub analyzed: &'static str,
    pub generated: &'static str,
    pub language_changed: &'static str,
    pub theme_changed: &'static str,
    pub config_save_failed: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

pub struct HelpTexts {
    pub global: &'static str,
    pub input_page: &'static str,
    pub results_page: &'static str,
    pub complete_page: &'static str,
    pub actions: HelpActionTexts,
}

pub struct HelpActionTexts {
    pub quit: &'static str,
    pub help: &'static str,
    pub language: &'static str,
    pub theme: &'static str,
    pub submit_topic: &'static str,
    pub switch_pane: &'static str,
    pub move_cursor: &'static str,
    pub toggle: &'static str,
    pub generate: &'static str,
    pub reset: &'static str,
    pub scroll: &'static str,
}
