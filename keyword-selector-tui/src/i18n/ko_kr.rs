//! 韩文翻译 (ko-KR)

use super::keys::{
    ActionTexts, CommonTexts, CompleteTexts, ErrorTexts, HelpActionTexts, HelpTexts, HintTexts,
    InputTexts, KeyNames, LoadingTexts, ModalTexts, ResultsTexts, StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "키워드 선택기",
        error: "오류",
        quit: "종료",
        help: "도움말",
        restart: "처음부터",
    },

    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            space: "Space",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            analyze: "분석",
            switch_pane: "영역 전환",
            move_up_down: "이동",
            select: "선택",
            generate: "생성",
            scroll: "스크롤",
            language: "언어",
            theme: "테마",
        },
    },

    input: InputTexts {
        title: "주제",
        prompt: "어떤 영상을 만들까요?",
        description: "제품, 뉴스, 정책 등 주제를 입력하면 고수익 키워드와 클릭을 부르는 제목을 추천합니다.",
        placeholder: "예: 에어프라이어",
        server: "서버",
    },

    loading: LoadingTexts {
        analyzing: "⏳ 주제 분석 중...",
        generating: "⏳ 스크립트 생성 중...",
    },

    results: ResultsTexts {
        title: "분석 결과",
        main_keyword: "핵심 키워드",
        core_needs: "핵심 니즈",
        search_queries: "실제 검색 질문",
        keywords: "돈 되는 키워드",
        titles: "클릭을 부르는 제목",
        strategy: "수익형 본문 구성 전략",
        intro: "서론",
        body: "본론",
        conclusion: "결론",
        no_keywords: "추천 키워드가 없습니다",
        no_titles: "추천 제목이 없습니다",
        longtail_kind: "롱테일",
        longtail_competition: "low",
        longtail_cpc: "중간",
        competition: "경쟁도",
        cpc: "CPC",
        hook: "훅킹 요소",
        summary: "선택 요약",
        selected_keywords: "선택된 키워드",
        keyword_count_suffix: "개",
        selected_title: "선택된 제목",
        generate_button: "🎬 YouTube 숏폼 스크립트 자동 생성",
        generating_button: "⏳ 스크립트 생성 중...",
    },

    complete: CompleteTexts {
        title: "스크립트",
        heading: "✅ 스크립트 생성 완료",
        saved_to: "📁 저장 위치",
        generated_title: "📝 생성된 제목",
        script: "🎬 대본",
        duration: "⏱️ 예상 시간",
        seconds: "초",
        hashtags: "#️⃣ 해시태그",
        voice: "음성",
        category: "카테고리",
        description: "설명",
        thumbnail: "썸네일",
        next_steps: "📌 다음 단계",
        next_step_lines: [
            "1. 이미지를 준비하세요 (제품 사진 또는 관련 이미지)",
            "2. input/images/ 폴더에 이미지를 저장하세요",
            "3. 비디오 파이프라인을 실행하여 자동으로 영상을 만드세요",
        ],
    },

    modal: ModalTexts {
        validation_title: "선택을 확인하세요",
        close_hint: "아무 키나 눌러 닫기",
        help_title: "도움말",
        help_close_hint: "Esc 로 도움말 닫기",
    },

    errors: ErrorTexts {
        empty_topic: "주제를 입력하세요",
        no_keyword: "최소 1개 이상의 키워드를 선택하세요",
        no_title: "제목을 선택하세요",
        invalid_keyword: "존재하지 않는 키워드입니다",
        invalid_title: "존재하지 않는 제목입니다",
        request_failed: "오류가 발생했습니다",
        analyze_failed: "분석 실패",
        generate_failed: "스크립트 생성 실패",
    },

    status: StatusTexts {
        analyzed: "분석 완료",
        generated: "스크립트 생성 완료",
        language_changed: "언어: 한국어",
        theme_changed: "테마 변경됨",
        config_save_failed: "설정을 저장하지 못했습니다",
    },

    help: HelpTexts {
        global: "전역 단축키",
        input_page: "주제 입력",
        results_page: "분석 결과",
        complete_page: "생성 완료",
        actions: HelpActionTexts {
            quit: "종료",
            help: "도움말 보기",
            language: "언어 전환",
            theme: "테마 전환",
            submit_topic: "주제 분석",
            switch_pane: "키워드 ↔ 제목",
            move_cursor: "커서 이동",
            toggle: "키워드 토글 / 제목 선택",
            generate: "스크립트 생성",
            reset: "처음부터",
            scroll: "스크립트 스크롤",
        },
    },
};
