use std::time::Duration;

use super::*;
use crate::loader::LoadState;
use crate::snapshot::{playlist_item, SnapshotDriver};

const URL: &str = "https://www.youtube.com/playlist?list=PL123";

fn fixture() -> SnapshotDriver {
    SnapshotDriver::new(vec![
        vec![
            playlist_item("Intro video", "10,000 views", "https://i.ytimg.com/vi/1/hq.jpg"),
            playlist_item("Part 2", "1.5M views", "https://i.ytimg.com/vi/2/hq.jpg"),
        ],
        vec![playlist_item(
            "Live recap",
            "Streamed 2 days ago",
            "https://i.ytimg.com/vi/3/hq.jpg",
        )],
    ])
}

#[tokio::test(start_paused = true)]
async fn test_scrape_reveals_and_extracts_all_items() {
    let mut driver = fixture();
    let report = scrape_playlist(&mut driver, URL, &ScrapeOptions::default(), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(driver.navigated_url(), Some(URL));
    assert_eq!(report.load.state, LoadState::Settled);
    assert!(!report.is_partial());

    let views: Vec<u64> = report.videos.iter().map(|v| v.view_count).collect();
    assert_eq!(views, vec![10_000, 1_500_000, 0]);
    assert_eq!(report.videos[2].title, "Live recap");
}

#[tokio::test]
async fn test_blank_url_rejected_before_navigation() {
    let mut driver = fixture();
    let result =
        scrape_playlist(&mut driver, "   ", &ScrapeOptions::default(), &CancellationToken::new())
            .await;

    assert!(matches!(result, Err(ScrapeError::InvalidInput(_))));
    assert_eq!(driver.navigated_url(), None);
}

#[tokio::test]
async fn test_invalid_list_selector_rejected_before_navigation() {
    let mut driver = fixture();
    let options = ScrapeOptions {
        list_item_selector: "#contents >".to_string(),
        ..ScrapeOptions::default()
    };

    let result = scrape_playlist(&mut driver, URL, &options, &CancellationToken::new()).await;

    match result {
        Err(ScrapeError::Selector(err)) => assert_eq!(err.selector, "#contents >"),
        other => panic!("expected selector error, got {:?}", other),
    }
    assert_eq!(driver.navigated_url(), None);
}

#[tokio::test(start_paused = true)]
async fn test_child_combinator_list_selector() {
    let mut driver = fixture();
    let options = ScrapeOptions {
        list_item_selector: "div#contents > ytd-playlist-video-renderer".to_string(),
        ..ScrapeOptions::default()
    };

    let report = scrape_playlist(&mut driver, URL, &options, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(report.videos.len(), 3);
    assert_eq!(report.videos[1].title, "Part 2");
}

#[tokio::test(start_paused = true)]
async fn test_missing_container_is_initial_load_error() {
    let mut driver = SnapshotDriver::new(vec![]);
    let options = ScrapeOptions {
        initial_selector_timeout_ms: 1000,
        ..ScrapeOptions::default()
    };

    let result = scrape_playlist(&mut driver, URL, &options, &CancellationToken::new()).await;

    assert!(matches!(result, Err(ScrapeError::InitialLoad(_))));
    assert_eq!(driver.scroll_calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_ceiling_returns_partial_report() {
    let mut driver = SnapshotDriver::from_items(vec![playlist_item("Loop", "5 views", "")])
        .growing_forever();
    let options = ScrapeOptions {
        limits: LoadLimits {
            settle: Duration::from_millis(100),
            max_iterations: 3,
            max_duration: Duration::from_secs(60),
        },
        ..ScrapeOptions::default()
    };

    let report = scrape_playlist(&mut driver, URL, &options, &CancellationToken::new())
        .await
        .unwrap();

    assert!(report.is_partial());
    assert_eq!(report.load.state, LoadState::TimedOut);
    assert_eq!(report.videos.len(), 4);
    assert!(report.videos.iter().all(|v| v.view_count == 5));
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_scrape_keeps_rendered_items() {
    let mut driver = fixture();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let report = scrape_playlist(&mut driver, URL, &ScrapeOptions::default(), &cancel)
        .await
        .unwrap();

    assert_eq!(report.load.state, LoadState::Cancelled);
    assert_eq!(report.videos.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_driver_failure_propagates() {
    let mut driver = fixture().fail_scroll_after(0);

    let result =
        scrape_playlist(&mut driver, URL, &ScrapeOptions::default(), &CancellationToken::new())
            .await;

    match result {
        Err(err) => assert!(err.is_retryable()),
        Ok(_) => panic!("expected driver failure"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_report_serializes() {
    let mut driver = SnapshotDriver::from_items(vec![playlist_item("A", "1 view", "a.jpg")]);
    let report = scrape_playlist(&mut driver, URL, &ScrapeOptions::default(), &CancellationToken::new())
        .await
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["videos"][0]["title"], "A");
    assert_eq!(json["videos"][0]["views"], 1);
    assert_eq!(json["videos"][0]["thumbnail"], "a.jpg");
    assert_eq!(json["load"]["state"], "settled");
}
