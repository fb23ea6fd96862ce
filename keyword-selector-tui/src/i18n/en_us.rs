//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, CompleteTexts, ErrorTexts, HelpActionTexts, HelpTexts, HintTexts,
    InputTexts, KeyNames, LoadingTexts, ModalTexts, ResultsTexts, StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Keyword Selector",
        error: "Error",
        quit: "Quit",
        help: "Help",
        restart: "Start over",
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
            analyze: "Analyze",
            switch_pane: "Switch pane",
            move_up_down: "Move",
            select: "Select",
            generate: "Generate",
            scroll: "Scroll",
            language: "Language",
            theme: "Theme",
        },
    },

    input: InputTexts {
        title: "Topic",
        prompt: "What is the video about?",
        description: "Enter a product, news item or policy. The server suggests high-revenue keywords and click-worthy titles.",
        placeholder: "e.g. air fryer",
        server: "Server",
    },

    loading: LoadingTexts {
        analyzing: "⏳ Analyzing topic...",
        generating: "⏳ Generating script...",
    },

    results: ResultsTexts {
        title: "Analysis",
        main_keyword: "Main keyword",
        core_needs: "Core needs",
        search_queries: "Real search queries",
        keywords: "Keywords",
        titles: "Recommended titles",
        strategy: "Content strategy",
        intro: "Intro",
        body: "Body",
        conclusion: "Conclusion",
        no_keywords: "No keywords returned",
        no_titles: "No titles returned",
        longtail_kind: "Longtail",
        longtail_competition: "low",
        longtail_cpc: "medium",
        competition: "Competition",
        cpc: "CPC",
        hook: "Hook",
        summary: "Selection",
        selected_keywords: "Selected keywords",
        keyword_count_suffix: "",
        selected_title: "Selected title",
        generate_button: "🎬 Generate YouTube Shorts script",
        generating_button: "⏳ Generating script...",
    },

    complete: CompleteTexts {
        title: "Script",
        heading: "✅ Script generated",
        saved_to: "📁 Saved to",
        generated_title: "📝 Title",
        script: "🎬 Script",
        duration: "⏱️ Estimated length",
        seconds: "s",
        hashtags: "#️⃣ Hashtags",
        voice: "Voice",
        category: "Category",
        description: "Description",
        thumbnail: "Thumbnail",
        next_steps: "📌 Next steps",
        next_step_lines: [
            "1. Prepare images (product photos or related pictures)",
            "2. Put them in the input/images/ folder",
            "3. Run the video pipeline to render the video automatically",
        ],
    },

    modal: ModalTexts {
        validation_title: "Check your selection",
        close_hint: "Press any key to close",
        help_title: "Help",
        help_close_hint: "Press Esc to close the help",
    },

    errors: ErrorTexts {
        empty_topic: "Please enter a topic",
        no_keyword: "Select at least one keyword",
        no_title: "Select a title",
        invalid_keyword: "That keyword no longer exists",
        invalid_title: "That title no longer exists",
        request_failed: "An error occurred",
        analyze_failed: "Analysis failed",
        generate_failed: "Script generation failed",
    },

    status: StatusTexts {
        analyzed: "Analysis loaded",
        generated: "Script generated",
        language_changed: "Language: English",
        theme_changed: "Theme changed",
        config_save_failed: "Could not save settings",
    },

    help: HelpTexts {
        global: "Global shortcuts",
        input_page: "Topic input",
        results_page: "Analysis results",
        complete_page: "Script ready",
        actions: HelpActionTexts {
            quit: "Quit",
            help: "Show this help",
            language: "Switch language",
            theme: "Switch theme",
            submit_topic: "Analyze topic",
            switch_pane: "Keywords ↔ titles",
            move_cursor: "Move cursor",
            toggle: "Toggle keyword / pick title",
            generate: "Generate script",
            reset: "Start over",
            scroll: "Scroll script",
        },
    },
};
