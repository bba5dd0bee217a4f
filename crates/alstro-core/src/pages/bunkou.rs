use super::{Block, Section};

pub const TITLE: &str = "文抗時代";
pub const SUBTITLE: &str = "主宰による同人文学活動";
pub const NOTE: &str = "外部リンクは準備中です。";

pub const LINES: [&str; 10] = [
    "文抗時代は、",
    "劇團 或素翔鷺の主宰による",
    "同人文学作品の集まりである。",
    "",
    "劇団本体の活動とは別に、",
    "言葉とテキストの可能性を",
    "探求する場として",
    "継続的に活動している。",
    "",
    "詳細は後日公開予定です。",
];

pub(crate) fn sections() -> Vec<Section<'static>> {
    vec![Section::new(
        "bunkou-page",
        vec![
            Block::Heading {
                level: 1,
                class: "bunkou-title",
                text: TITLE,
            },
            Block::Heading {
                level: 2,
                class: "bunkou-subtitle",
                text: SUBTITLE,
            },
            Block::Lines {
                class: "bunkou-text",
                lines: &LINES,
            },
            Block::Note {
                class: "bunkou-note",
                text: NOTE,
            },
        ],
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bunkou_ends_with_note() {
        let sections = sections();
        assert!(matches!(
            sections[0].blocks.last(),
            Some(Block::Note { text: NOTE, .. })
        ));
    }
}
