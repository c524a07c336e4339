//! Demo-mode callbacks
//!
//! No model is ever loaded. Both functions return fixed text so the UI flow
//! can be shown without weights or an inference backend.

use crate::types::{ClassificationResult, ModelStatus};

pub const LOADED_STATUS: &str =
    "模型状态：GovernanceBERT-governance 已就绪（演示模式，未加载真实权重）";

pub const EMPTY_LABEL: &str = "—";
pub const EMPTY_PROMPT: &str = "请输入待分类的治理相关文本（如公司治理、ESG 披露等）。";

pub const DEMO_LABEL: &str = "治理相关（演示）";
const DEMO_DETAIL_LINES: [&str; 6] = [
    "[演示] 已对输入文本进行治理分类（未加载真实模型）。",
    "分类结果示例（占位）：",
    "  类别：治理相关 (governance) — 置信度: 0.xx",
    "  类别：非治理 — 置信度: 0.xx",
    "",
    "加载真实 GovernanceBERT-governance 后，将在此显示实际分类标签与置信度。",
];

/// Pretend to load the model. Always returns the same ready message.
pub fn load_model() -> ModelStatus {
    ModelStatus(LOADED_STATUS.to_string())
}

/// Unicode whitespace plus the information separators U+001C..=U+001F
fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn is_blank(text: &str) -> bool {
    text.trim_matches(is_blank_char).is_empty()
}

/// Placeholder classification.
///
/// Only whether `text` is blank after trimming matters; the content itself
/// never changes the output.
pub fn classify(text: &str) -> ClassificationResult {
    if is_blank(text) {
        return ClassificationResult {
            label: EMPTY_LABEL.to_string(),
            detail: EMPTY_PROMPT.to_string(),
        };
    }
    ClassificationResult {
        label: DEMO_LABEL.to_string(),
        detail: DEMO_DETAIL_LINES.join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_prompts_for_text() {
        let result = classify("");
        assert_eq!(result.label, "—");
        assert_eq!(result.detail, EMPTY_PROMPT);
    }

    #[test]
    fn whitespace_only_input_is_treated_as_empty() {
        for text in [
            "   ",
            "\t",
            "\n\n",
            " \u{3000} ",
            "\u{1c}",
            "\u{1d}",
            "\u{1e}",
            "\u{1f}",
            "\u{1c}\u{1d}\u{1e}\u{1f}",
        ] {
            let result = classify(text);
            assert_eq!(result.label, EMPTY_LABEL, "input {:?}", text);
            assert!(result.detail.contains("请输入待分类"));
        }
    }

    #[test]
    fn separators_around_text_do_not_hide_it() {
        assert_eq!(classify("\u{1f}board\u{1c}").label, DEMO_LABEL);
        // other C0 controls are content, not blank
        assert_eq!(classify("\u{1}").label, DEMO_LABEL);
    }

    #[test]
    fn any_text_gets_the_demo_label() {
        for text in [
            "The board of directors approved...",
            "x",
            "  公司治理  ",
            "completely unrelated recipe for soup",
        ] {
            assert_eq!(classify(text).label, "治理相关（演示）", "input {:?}", text);
        }
    }

    #[test]
    fn demo_detail_is_the_six_line_placeholder_block() {
        let result = classify("The board of directors approved...");
        let lines: Vec<&str> = result.detail.split('\n').collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("[演示]"));
        assert_eq!(lines[2], "  类别：治理相关 (governance) — 置信度: 0.xx");
        assert_eq!(lines[3], "  类别：非治理 — 置信度: 0.xx");
        assert!(lines[4].is_empty());
        assert!(lines[5].contains("GovernanceBERT-governance"));
    }

    #[test]
    fn output_ignores_content_beyond_blankness() {
        assert_eq!(classify("a"), classify("something much longer\nwith lines"));
        assert_eq!(classify(""), classify("    "));
    }

    #[test]
    fn classify_is_idempotent() {
        let text = "ESG disclosure for fiscal year";
        assert_eq!(classify(text), classify(text));
    }

    #[test]
    fn load_model_is_constant_around_classify() {
        let before = load_model();
        let _ = classify("The board of directors approved...");
        let after = load_model();
        assert_eq!(before, after);
        assert_eq!(before.0, LOADED_STATUS);
    }
}
