//! Tag filter over the shipped sample catalog.

use alstro_content::{Activity, ActivityTag, InlineCatalog};
use alstro_core::{available_tags, partition, TagFilter, TagSelection};

fn catalog() -> Vec<Activity> {
    InlineCatalog::new()
        .bundle()
        .unwrap()
        .activities
        .unwrap()
}

fn ids(list: &[&Activity]) -> Vec<u32> {
    list.iter().map(|a| a.id).collect()
}

#[test]
fn sample_catalog_tags_in_first_seen_order() {
    let tags = available_tags(&catalog());
    let labels: Vec<_> = tags.iter().map(TagSelection::label).collect();
    assert_eq!(labels, ["すべて", "公演", "イベント", "募集", "外部"]);
}

#[test]
fn all_selection_partitions_whole_catalog() {
    let catalog = catalog();
    let filter = TagFilter::new();
    let filtered = filter.filtered(&catalog);
    assert_eq!(filtered.len(), catalog.len());

    let split = partition(&filtered);
    assert_eq!(ids(&split.current), vec![1, 2, 3]);
    assert_eq!(ids(&split.past), vec![4, 5, 6, 7]);
}

#[test]
fn each_tag_filters_and_partitions() {
    let catalog = catalog();
    let mut filter = TagFilter::new();

    filter.select(ActivityTag::Performance.into());
    let view = filter.view(&catalog);
    assert_eq!(ids(&view.partition.current), vec![1]);
    assert_eq!(ids(&view.partition.past), vec![4, 5]);

    filter.select(ActivityTag::Event.into());
    let view = filter.view(&catalog);
    assert_eq!(ids(&view.partition.current), vec![2]);
    assert_eq!(ids(&view.partition.past), vec![7]);

    filter.select(ActivityTag::External.into());
    let view = filter.view(&catalog);
    assert!(view.partition.current.is_empty());
    assert_eq!(ids(&view.partition.past), vec![6]);
}

#[test]
fn reselecting_all_restores_everything() {
    let catalog = catalog();
    let mut filter = TagFilter::new();
    filter.select(ActivityTag::Recruitment.into());
    assert_eq!(filter.filtered(&catalog).len(), 1);
    filter.select(TagSelection::All);
    assert_eq!(filter.filtered(&catalog).len(), 7);
}

#[test]
fn tags_do_not_depend_on_selection() {
    let catalog = catalog();
    let mut filter = TagFilter::new();
    let before = filter.view(&catalog).tags;
    filter.select(ActivityTag::External.into());
    assert_eq!(filter.view(&catalog).tags, before);
}

#[test]
fn empty_catalog_has_only_all() {
    let filter = TagFilter::new();
    let view = filter.view(&[]);
    assert_eq!(view.tags, vec![TagSelection::All]);
    assert!(view.partition.is_empty());
}
