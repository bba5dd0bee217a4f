use super::{Block, Section, Site};
use crate::domain::{Activity, SiteError};
use crate::filter::TagFilter;

pub const TITLE: &str = "活動一覧";
pub const SUBTITLE: &str = "公演・イベント・ワークショップ";
pub const CURRENT_HEADING: &str = "現在／予定の活動";
pub const PAST_HEADING: &str = "過去の活動";
pub const EMPTY_TEXT: &str = "該当する活動がありません。";
pub const DETAIL_LINK_TEXT: &str = "詳細を見る →";

pub(crate) fn sections<'a>(site: &'a Site, filter: &TagFilter) -> Vec<Section<'a>> {
    let catalog: &[Activity] = match site.activities() {
        Some(catalog) => catalog,
        None => {
            tracing::warn!(error = %SiteError::InvalidCatalog("activity"), "activities unavailable");
            &[]
        }
    };
    vec![Section::new(
        "activities-page",
        vec![
            Block::Heading {
                level: 1,
                class: "activities-title",
                text: TITLE,
            },
            Block::Heading {
                level: 2,
                class: "activities-subtitle",
                text: SUBTITLE,
            },
            Block::Activities(filter.view(catalog)),
        ],
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ActivityTag;
    use crate::filter::TagSelection;
    use alstro_content::InlineCatalog;

    #[test]
    fn test_sample_catalog_partition() {
        let site = Site::from_bundle(InlineCatalog::new().bundle().unwrap());
        let filter = TagFilter::with_selection(TagSelection::Tag(ActivityTag::Performance));
        let sections = sections(&site, &filter);
        let Block::Activities(view) = &sections[0].blocks[2] else {
            panic!("activities block missing");
        };
        assert_eq!(view.selected, TagSelection::Tag(ActivityTag::Performance));
        assert!(view
            .partition
            .current
            .iter()
            .chain(&view.partition.past)
            .all(|a| a.tag == ActivityTag::Performance));
    }

    #[test]
    fn test_absent_catalog_shows_placeholder_state() {
        let site = Site::default();
        let sections = sections(&site, &TagFilter::new());
        let Block::Activities(view) = &sections[0].blocks[2] else {
            panic!("activities block missing");
        };
        assert!(view.partition.is_empty());
        assert_eq!(view.tags, vec![TagSelection::All]);
    }
}
