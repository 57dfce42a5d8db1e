//! Dialog text shown by the terminal host.

use std::fmt::Write as _;

use roster_draw::domain::config::DrawConfig;

/// Shown while the draw is sampling and in pre-roll.
pub const DRAWING: &str = "🎲 신중하게 선택하는 중...";
/// Title of the success dialog.
pub const SUCCESS_TITLE: &str = "🎉 청소당번 선정 완료! 🎉";
/// Label in front of the chosen numbers.
pub const SELECTED_LABEL: &str = "선택된 번호:";
/// Closing line of the success dialog.
pub const SUCCESS_FOOTER: &str = "선택된 분들은 청소 화이팅! 💪";
/// Title of the warning dialog.
pub const WARNING_TITLE: &str = "잠깐!";
/// Title of the reset confirmation dialog.
pub const CONFIRM_TITLE: &str = "다시 뽑기";
/// Question asked before resetting.
pub const CONFIRM_RESET: &str = "정말로 다시 뽑으시겠습니까?";
/// Answer hint appended to the confirmation question.
pub const CONFIRM_HINT: &str = "[y: 네, 다시 뽑겠습니다 / n: 취소]";
/// Shown when the user declines the reset.
pub const RESET_CANCELLED: &str = "취소했습니다.";
/// Title of the reset notice.
pub const RESET_DONE: &str = "초기화 완료!";
/// Body of the reset notice.
pub const RESET_DONE_BODY: &str = "새로운 당번을 뽑아보세요!";
/// Shown when `r` is pressed with no finished draw on display.
pub const NOTHING_TO_RESET: &str = "아직 뽑은 당번이 없어요. 먼저 당번을 뽑아보세요!";
/// Idle prompt.
pub const IDLE_PROMPT: &str = "Enter를 눌러 당번을 뽑아보세요!";
/// Explains why numbers cannot be chosen directly.
pub const PICK_NOTICE: &str =
    "번호를 직접 선택할 수는 없어요! 공정한 뽑기를 위해 랜덤 선택만 가능합니다.";

/// Welcome dialog with usage help.
#[must_use]
pub fn welcome(config: &DrawConfig) -> String {
    let mut text = String::from("🧹 청소당번 뽑기에 오신 것을 환영합니다!\n");
    text.push_str(&help(config));
    text
}

/// Usage help.
#[must_use]
pub fn help(config: &DrawConfig) -> String {
    let mut text = String::from("📋 사용법:\n");
    let _ = writeln!(text, "  • Enter(또는 스페이스 후 Enter)로 당번 뽑기");
    let _ = writeln!(
        text,
        "  • {}-{}번 중 {}명이 랜덤 선택됩니다",
        config.pool_min, config.pool_max, config.draw_count
    );
    let _ = writeln!(text, "  • R 키로 다시 뽑기");
    let _ = writeln!(text, "  • H 키로 도움말, Q 키로 종료");
    text
}

/// Title line for a number the user tried to pick.
#[must_use]
pub fn pick_title(number: u32) -> String {
    format!("{number}번")
}

/// Comma-separated list of chosen numbers, e.g. `3번, 7번`.
#[must_use]
pub fn number_list(values: &[u32]) -> String {
    values
        .iter()
        .map(|value| format!("{value}번"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Shown for input that matches no key binding.
#[must_use]
pub fn unknown_input(input: &str) -> String {
    format!("알 수 없는 입력이에요: `{input}` (H 키로 도움말)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_mentions_pool_and_count() {
        let text = help(&DrawConfig::default());
        assert!(text.contains("1-25번 중 5명이 랜덤 선택됩니다"));
    }

    #[test]
    fn test_welcome_starts_with_greeting() {
        let text = welcome(&DrawConfig::default());
        assert!(text.starts_with("🧹 청소당번 뽑기에 오신 것을 환영합니다!"));
        assert!(text.contains("사용법"));
    }

    #[test]
    fn test_number_list_formats_each_value() {
        assert_eq!(number_list(&[3, 7, 12]), "3번, 7번, 12번");
        assert_eq!(number_list(&[]), "");
    }
}
