use super::{Block, Section};

pub const TITLE: &str = "劇団について";

pub const LINES: [&str; 11] = [
    "劇團 或素翔鷺は、",
    "言葉と身体、沈黙と緊張のあわいに",
    "刹那の像を立ち上げるために集った劇団である。",
    "",
    "私たちは、日常の隙間から生まれる",
    "言葉にならない想いを、",
    "身体と声の表現によって",
    "舞台の上に立ち上げることを目指している。",
    "",
    "花鳥風月、刹那の夢を描く。",
    "それが私たちの活動の根幹である。",
];

pub(crate) fn sections() -> Vec<Section<'static>> {
    vec![Section::new(
        "about-page",
        vec![
            Block::Heading {
                level: 1,
                class: "about-title",
                text: TITLE,
            },
            Block::Lines {
                class: "about-text",
                lines: &LINES,
            },
        ],
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_keeps_spacer_lines() {
        assert_eq!(LINES.iter().filter(|l| l.is_empty()).count(), 2);
        let sections = sections();
        assert_eq!(sections.len(), 1);
        assert!(matches!(
            sections[0].blocks[1],
            Block::Lines { lines, .. } if lines.len() == 11
        ));
    }
}
