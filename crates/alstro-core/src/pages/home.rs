//! Top page: hero, news board, activity slider and the 文抗時代 promotion.

use super::{shell, Block, Image, Link, Section, Site};
use crate::slider::SlideRotation;

pub const CATCHPHRASE: &str = "花鳥風月、刹那の夢を描く。";
pub const HERO_BACKGROUND: &str = "https://raw.githubusercontent.com/yanagi-sy/arusutoro-site/main/src/assets/images/ChatGPT%20Image%202025%E5%B9%B412%E6%9C%8813%E6%97%A5%2020_31_20.png";

pub const NEWS_LABEL: &str = "NEWS";
pub const NEWS_TITLE: &str = "お知らせ";

pub const BUNKOU_TITLE: &str = "「文抗時代」";
pub const BUNKOU_LINES: [&str; 2] = [
    "文抗時代は劇團 或素翔鷺の演出陣が中心となって編纂した文芸誌です。",
    "時代の流れに囚われぬ詩的表現を是非ともご拝読ください。",
];

pub const BUNKOU_IMAGES: [Image; 2] = [
    Image {
        src: "https://raw.githubusercontent.com/yanagi-sy/arusutoro-site/main/src/assets/images/bunkoujidai-1.png",
        alt: "文抗時代 画像1",
        class: "bunkou-polaroid",
    },
    Image {
        src: "https://raw.githubusercontent.com/yanagi-sy/arusutoro-site/main/src/assets/images/bunkoujidai-2.png",
        alt: "文抗時代 画像2",
        class: "bunkou-polaroid",
    },
];

pub const BUNKOU_LINKS: [Link; 1] = [Link {
    label: "文抗時代　X公式アカウントはこちらへ",
    href: "https://x.com/bunkoujidai",
    class: "bunkou-link",
    aria_label: None,
}];

pub(crate) fn sections<'a>(site: &'a Site, rotation: Option<&SlideRotation>) -> Vec<Section<'a>> {
    vec![
        Section::new(
            "hero",
            vec![Block::Hero {
                title: shell::COMPANY_NAME,
                roman: shell::ROMAN_NAME,
                catchphrase: CATCHPHRASE,
                background: HERO_BACKGROUND,
            }],
        ),
        Section::new(
            "news-board",
            vec![
                Block::Heading {
                    level: 3,
                    class: "news-label",
                    text: NEWS_LABEL,
                },
                Block::Heading {
                    level: 2,
                    class: "news-title",
                    text: NEWS_TITLE,
                },
                Block::News(site.news()),
            ],
        ),
        Section::new("slider", vec![Block::Slider(site.slider_view(rotation))]),
        Section::new(
            "bunkou-section",
            vec![
                Block::Images(&BUNKOU_IMAGES),
                Block::Heading {
                    level: 2,
                    class: "bunkou-section-title",
                    text: BUNKOU_TITLE,
                },
                Block::Lines {
                    class: "bunkou-section-text",
                    lines: &BUNKOU_LINES,
                },
                Block::Links(&BUNKOU_LINKS),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use alstro_content::InlineCatalog;

    #[test]
    fn test_home_section_order() {
        let site = Site::from_bundle(InlineCatalog::new().bundle().unwrap());
        let classes: Vec<_> = sections(&site, None).iter().map(|s| s.class).collect();
        assert_eq!(classes, ["hero", "news-board", "slider", "bunkou-section"]);
    }

    #[test]
    fn test_home_without_slides_still_builds() {
        let site = Site::default();
        let sections = sections(&site, None);
        assert!(matches!(
            &sections[2].blocks[0],
            Block::Slider(view) if view.slides.is_empty() && view.active.is_none()
        ));
    }
}
