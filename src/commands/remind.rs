use std::time::Duration;

use anyhow::Result;
use owo_colors::OwoColorize;

use dayplan_core::notification::NotificationTracker;

use crate::client::Client;

/// Seconds between event list refreshes while watching
const REFRESH_SECS: u64 = 30;

pub async fn run(client: &Client, watch: bool) -> Result<()> {
    let mut tracker = NotificationTracker::new();
    let mut events = client.list_events().await?;

    if !watch {
        let now = chrono::Local::now().naive_local();
        let fired = tracker.poll(&events, now);
        if fired.is_empty() {
            println!("{}", "다가오는 일정이 없습니다.".dimmed());
        }
        for notification in fired {
            println!("🔔 {}", notification.message);
        }
        return Ok(());
    }

    println!("{}", "다가오는 일정을 확인하는 중입니다. (Ctrl-C로 종료)".dimmed());

    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    let mut ticks: u64 = 0;
    loop {
        ticker.tick().await;
        ticks += 1;

        if ticks % REFRESH_SECS == 0 {
            match client.list_events().await {
                Ok(latest) => events = latest,
                Err(e) => eprintln!("  {}", e.to_string().red()),
            }
        }

        let now = chrono::Local::now().naive_local();
        for notification in tracker.poll(&events, now) {
            println!(
                "{} 🔔 {}",
                now.format("%H:%M:%S").to_string().dimmed(),
                notification.message.yellow()
            );
        }
    }
}
