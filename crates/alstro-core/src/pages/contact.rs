use super::{Block, Section};
use crate::contact::FORM_FIELDS;

pub const TITLE: &str = "お問い合わせ";
pub const SUBTITLE: &str = "ご質問・お問い合わせはこちらから";
pub const SUBMIT_LABEL: &str = "送信する";

pub(crate) fn sections() -> Vec<Section<'static>> {
    vec![Section::new(
        "contact-page",
        vec![
            Block::Heading {
                level: 1,
                class: "contact-title",
                text: TITLE,
            },
            Block::Heading {
                level: 2,
                class: "contact-subtitle",
                text: SUBTITLE,
            },
            Block::ContactForm(&FORM_FIELDS),
        ],
    )]
}
