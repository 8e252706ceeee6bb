//! Demo: filter a generated test-case catalogue and render one window of it
//!
//! Run with `RUST_LOG=caseview=debug` to see cache hits and misses.

use caseview::prelude::*;
use caseview::storage::InMemoryCaseStore;
use chrono::Duration as ChronoDuration;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const PROJECTS: [&str; 3] = ["Portal", "Shop", "Admin"];
const SUITES: [&str; 4] = ["Auth", "Checkout", "Reports", "Settings"];
const TOPICS: [&str; 5] = ["login", "payment", "export", "permissions", "search"];

fn catalogue(count: i64) -> Vec<TestCase> {
    let start = Utc::now() - ChronoDuration::days(count);

    (1..=count)
        .map(|id| {
            let topic = TOPICS[(id % 5) as usize];
            let created_at = start + ChronoDuration::days(id);
            let mut case = TestCase::new(id, format!("Verify {} flow #{}", topic, id), created_at)
                .with_description(format!("Regression coverage for {}", topic))
                .with_tags([topic, if id % 7 == 0 { "smoke" } else { "regression" }])
                .with_project(PROJECTS[(id % 3) as usize])
                .with_suite(SUITES[(id % 4) as usize])
                .with_status(id % 3 + 1)
                .with_priority(id % 4 + 1);
            if id % 2 == 0 {
                case = case.with_executed_at(start + ChronoDuration::days(id + 1));
            }
            case
        })
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("🚀 caseview filter demo\n");

    let config = match std::env::args().nth(1) {
        Some(path) => CaseViewConfig::from_yaml_file(&path)?,
        None => CaseViewConfig::default(),
    };

    let store = InMemoryCaseStore::with_cases(catalogue(5_000));
    let mut pipeline = config.build_pipeline::<TestCase>();
    let mut list = config.build_list();

    // Debounced search input: only the last keystroke of the burst reaches the view
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<String>();
    let search = Debouncer::new(config.debounce_wait(), move |query: String| {
        let _ = tx.send(query);
    });
    for typed in ["p", "pa", "pay", "paym", "payment"] {
        search.call(typed.to_string());
        tokio::time::sleep(Duration::from_millis(40)).await;
    }
    let query = rx.recv().await.unwrap_or_default();

    let state = ViewState::default().reduce_all([
        ViewAction::SetSearchQuery(query.clone()),
        ViewAction::SetProject("Shop".to_string()),
        ViewAction::SetPriority("1".to_string()),
        ViewAction::SetSort(Some("executed_at:desc".parse()?)),
    ]);

    let cases = store.list().await?;
    let visible = pipeline.view(&cases, &state);
    list.sync_items(&visible);

    println!(
        "📋 {} of {} cases match \"{}\" in Shop with priority 1",
        visible.len(),
        cases.len(),
        query
    );

    // Scroll events arrive much faster than the list needs them
    let on_scroll = Throttler::new(config.throttle_limit(), |_top: f64| {});
    let mut handled = 0;
    for step in 0..50 {
        let top = step as f64 * 12.0;
        if on_scroll.call(top) {
            list.on_scroll(top);
            handled += 1;
        }
        tokio::time::sleep(Duration::from_millis(8)).await;
    }
    println!("🖱️  {} of 50 scroll events handled\n", handled);

    for row in list.render(&visible, |case, _| {
        format!("#{:<5} {}", case.id, case.title.as_deref().unwrap_or("(untitled)"))
    }) {
        println!("{:>8.0}px  {}", row.top, row.content);
    }

    // Same criteria again: served from the cache
    pipeline.view(&cases, &state);
    let stats = pipeline.stats();
    println!(
        "\n📊 cache: {}/{} entries, {} hits, {} misses, hit rate {:.0}%",
        stats.size,
        stats.max_size,
        stats.hits,
        stats.misses,
        stats.hit_rate * 100.0
    );

    Ok(())
}
