//!
//! src/i18n/mod.rs
//! 国际化：英语 / 韩语
//!
//! 所有界面文本都通过 `t()` 获取，返回当前语言的静态翻译表。
//! 语言在启动时由配置文件决定，运行中可用 Alt+L 切换（并写回配置）。
//!
//!     let texts = t();
//!     texts.results.keywords      // "Keywords" / "돈 되는 키워드"
//!

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
pub mod keys;
mod ko_kr;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    EnUs,
    /// 韩语
    #[default]
    KoKr,
}

impl Language {
    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::KoKr => "ko-KR",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "ko-KR" | "ko" => Some(Language::KoKr),
            _ => None,
        }
    }

    /// 获取下一个语言（用于循环切换）
    #[must_use]
    pub fn next(self) -> Language {
        match self {
            Language::EnUs => Language::KoKr,
            Language::KoKr => Language::EnUs,
        }
    }
}

/// 当前语言索引（0 = KoKr, 1 = EnUs）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0);

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &en_us::TRANSLATIONS,
        _ => &ko_kr::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::KoKr => 0,
        Language::EnUs => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

/// 获取当前语言
pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::EnUs,
        _ => Language::KoKr,
    }
}
