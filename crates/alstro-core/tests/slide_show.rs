//! Timer behavior of the mounted slide show, on a paused clock.

use std::sync::Arc;
use std::time::Duration;

use alstro_content::Slide;
use alstro_core::{SiteError, SlideShow, SLIDE_INTERVAL};
use tokio::time::{sleep_until, Instant};

fn catalog(n: u32) -> Arc<[Slide]> {
    (1..=n)
        .map(|id| Slide {
            id,
            image_url: format!("https://img.example/{id}.png"),
            title: format!("slide {id}"),
            schedule: format!("2025年{id}月"),
            link: "/activities".to_string(),
        })
        .collect()
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[tokio::test(start_paused = true)]
async fn ticks_advance_and_wrap() {
    let start = Instant::now();
    let show = SlideShow::mount(Some(catalog(3)), SLIDE_INTERVAL).unwrap();
    assert_eq!(show.current_index(), Some(0));

    let mut seen = Vec::new();
    for k in 1..=3u64 {
        sleep_until(start + ms(3000 * k + 1)).await;
        seen.push(show.current_index().unwrap());
    }
    assert_eq!(seen, vec![1, 2, 0]);
    show.teardown();
}

#[tokio::test(start_paused = true)]
async fn no_tick_before_the_first_period() {
    let start = Instant::now();
    let show = SlideShow::mount(Some(catalog(3)), SLIDE_INTERVAL).unwrap();
    sleep_until(start + ms(2999)).await;
    assert_eq!(show.current_index(), Some(0));
}

#[tokio::test(start_paused = true)]
async fn manual_navigation_keeps_the_schedule() {
    let start = Instant::now();
    let show = SlideShow::mount(Some(catalog(3)), SLIDE_INTERVAL).unwrap();

    sleep_until(start + ms(1000)).await;
    assert_eq!(show.next(), Some(1));

    sleep_until(start + ms(3001)).await;
    assert_eq!(show.current_index(), Some(2));

    sleep_until(start + ms(4000)).await;
    assert_eq!(show.previous(), Some(1));
    assert_eq!(show.previous(), Some(0));

    sleep_until(start + ms(6001)).await;
    assert_eq!(show.current_index(), Some(1));
}

#[tokio::test(start_paused = true)]
async fn teardown_stops_ticks() {
    let start = Instant::now();
    let show = SlideShow::mount(Some(catalog(3)), SLIDE_INTERVAL).unwrap();
    let rx = show.subscribe();

    sleep_until(start + ms(3001)).await;
    assert_eq!(show.current_index(), Some(1));
    show.teardown();

    sleep_until(start + ms(30_000)).await;
    assert_eq!(rx.borrow().current_index(), Some(1));
}

#[tokio::test(start_paused = true)]
async fn dropping_the_show_stops_ticks() {
    let start = Instant::now();
    let show = SlideShow::mount(Some(catalog(3)), SLIDE_INTERVAL).unwrap();
    let rx = show.subscribe();
    drop(show);

    sleep_until(start + ms(30_000)).await;
    assert_eq!(rx.borrow().current_index(), Some(0));
}

#[tokio::test(start_paused = true)]
async fn reload_replaces_the_ticker() {
    let start = Instant::now();
    let mut show = SlideShow::mount(Some(catalog(3)), SLIDE_INTERVAL).unwrap();
    show.next();

    sleep_until(start + ms(1000)).await;
    show.reload(Some(catalog(2))).unwrap();
    assert_eq!(show.current_index(), Some(0));
    assert!(show.is_armed());

    // The old ticker would have fired at 3000.
    sleep_until(start + ms(3500)).await;
    assert_eq!(show.current_index(), Some(0));

    sleep_until(start + ms(4001)).await;
    assert_eq!(show.current_index(), Some(1));
    sleep_until(start + ms(7001)).await;
    assert_eq!(show.current_index(), Some(0));
}

#[tokio::test(start_paused = true)]
async fn reload_rejects_absent_catalog() {
    let mut show = SlideShow::mount(Some(catalog(3)), SLIDE_INTERVAL).unwrap();
    show.next();
    let err = show.reload(None).unwrap_err();
    assert!(matches!(err, SiteError::InvalidCatalog("slide")));
    assert_eq!(show.current_index(), Some(1));
    assert!(show.is_armed());
}

#[tokio::test(start_paused = true)]
async fn single_slide_ticks_change_nothing() {
    let start = Instant::now();
    let show = SlideShow::mount(Some(catalog(1)), SLIDE_INTERVAL).unwrap();
    let mut rx = show.subscribe();
    rx.borrow_and_update();

    sleep_until(start + ms(9001)).await;
    assert_eq!(show.current_index(), Some(0));
    assert_eq!(show.next(), Some(0));
    assert!(!rx.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_each_tick() {
    let start = Instant::now();
    let show = SlideShow::mount(Some(catalog(2)), ms(500)).unwrap();
    let mut rx = show.subscribe();

    rx.changed().await.unwrap();
    assert!(start.elapsed() >= ms(500));
    assert_eq!(rx.borrow_and_update().current_index(), Some(1));

    rx.changed().await.unwrap();
    assert!(start.elapsed() >= ms(1000));
    assert_eq!(rx.borrow_and_update().current_slide().map(|s| s.id), Some(1));
}

#[tokio::test(start_paused = true)]
async fn absent_catalog_arms_nothing() {
    let err = SlideShow::mount(None, SLIDE_INTERVAL).unwrap_err();
    assert!(matches!(err, SiteError::InvalidCatalog(_)));
}
