//! Style token resolvers.
//!
//! Each resolver maps a block's style tokens to one semantic value. Lists are
//! checked in their declared order, so a list's order is its priority.

use ejs_core::{AlertType, Alignment};

/// Alignment tokens by priority
pub const ALIGNMENTS: &[(&str, Alignment)] = &[
    ("center", Alignment::Center),
    ("right", Alignment::Right),
    ("justify", Alignment::Justify),
    ("left", Alignment::Left),
];

/// Alert color tokens by priority
pub const ALERT_TYPES: &[(&str, AlertType)] = &[
    ("primary", AlertType::Primary),
    ("secondary", AlertType::Secondary),
    ("info", AlertType::Info),
    ("success", AlertType::Success),
    ("warning", AlertType::Warning),
    ("danger", AlertType::Danger),
    ("light", AlertType::Light),
    ("dark", AlertType::Dark),
];

/// Known embed providers by priority
pub const EMBED_SERVICES: &[&str] = &[
    "facebook",
    "instagram",
    "youtube",
    "twitter",
    "twitch-video",
    "miro",
    "vimeo",
    "gfycat",
    "imgur",
    "vine",
    "aparat",
    "yandex-music-track",
    "yandex-music-album",
    "yandex-music-playlist",
    "coub",
    "codepen",
    "pinterest",
    "github",
];

/// Flag tokens
pub const ORDERED: &str = "ordered";
pub const WITH_HEADINGS: &str = "withheadings";
pub const WITH_BORDER: &str = "withborder";
pub const WITH_BACKGROUND: &str = "withbackground";
pub const STRETCHED: &str = "stretched";

fn first_match<T: Copy>(styles: &[String], table: &[(&str, T)]) -> Option<T> {
    table
        .iter()
        .find(|(name, _)| has_flag(styles, name))
        .map(|(_, value)| *value)
}

/// Resolve text alignment, defaulting to left
pub fn resolve_alignment(styles: &[String]) -> Alignment {
    first_match(styles, ALIGNMENTS).unwrap_or_default()
}

/// Resolve alert color, defaulting to primary
pub fn resolve_alert_type(styles: &[String]) -> AlertType {
    first_match(styles, ALERT_TYPES).unwrap_or_default()
}

/// Resolve the embed provider, empty when none is known
pub fn resolve_embed_service(styles: &[String]) -> String {
    EMBED_SERVICES
        .iter()
        .find(|service| has_flag(styles, service))
        .map(|service| service.to_string())
        .unwrap_or_default()
}

/// Check if a flag token is present
pub fn has_flag(styles: &[String], flag: &str) -> bool {
    styles.iter().any(|s| s == flag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn styles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case(&[], Alignment::Left)]
    #[case(&["right", "left"], Alignment::Right)]
    #[case(&["left", "center"], Alignment::Center)]
    #[case(&["justify", "right"], Alignment::Right)]
    #[case(&["justify"], Alignment::Justify)]
    #[case(&["bold", "middle"], Alignment::Left)]
    fn test_resolve_alignment(#[case] input: &[&str], #[case] expected: Alignment) {
        assert_eq!(resolve_alignment(&styles(input)), expected);
    }

    #[rstest]
    #[case(&[], AlertType::Primary)]
    #[case(&["dark", "info"], AlertType::Info)]
    #[case(&["danger", "center"], AlertType::Danger)]
    #[case(&["purple"], AlertType::Primary)]
    fn test_resolve_alert_type(#[case] input: &[&str], #[case] expected: AlertType) {
        assert_eq!(resolve_alert_type(&styles(input)), expected);
    }

    #[test]
    fn test_resolve_embed_service() {
        assert_eq!(resolve_embed_service(&styles(&[])), "");
        assert_eq!(resolve_embed_service(&styles(&["vimeo"])), "vimeo");
        assert_eq!(resolve_embed_service(&styles(&["github", "youtube"])), "youtube");
        assert_eq!(
            resolve_embed_service(&styles(&["yandex-music-album"])),
            "yandex-music-album"
        );
        assert_eq!(resolve_embed_service(&styles(&["myspace"])), "");
    }

    #[test]
    fn test_has_flag() {
        let tokens = styles(&["withborder", "stretched"]);
        assert!(has_flag(&tokens, WITH_BORDER));
        assert!(has_flag(&tokens, STRETCHED));
        assert!(!has_flag(&tokens, WITH_BACKGROUND));
        assert!(!has_flag(&tokens, "withBorder"));
    }
}
