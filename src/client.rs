//! HTTP client for communicating with dayplan-server

use std::collections::BTreeMap;
use std::process::Command;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::Response;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use dayplan_core::config::DayplanConfig;
use dayplan_core::repository::EventList;
use dayplan_core::{Event, EventForm};

const MAX_RETRIES: u32 = 10;
const RETRY_DELAY_MS: u64 = 200;

/// HTTP client for dayplan-server
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct HolidayResponse {
    holidays: BTreeMap<NaiveDate, String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

impl Client {
    /// Connect to a running server, starting a local one if nothing answers
    pub async fn connect(config: &DayplanConfig) -> Result<Self> {
        let client = Self {
            http: reqwest::Client::new(),
            base_url: config.server_url.trim_end_matches('/').to_string(),
        };

        if client.health_check().await.is_ok() {
            return Ok(client);
        }

        start_server()?;

        for _ in 0..MAX_RETRIES {
            tokio::time::sleep(Duration::from_millis(RETRY_DELAY_MS)).await;
            if client.health_check().await.is_ok() {
                return Ok(client);
            }
        }

        anyhow::bail!(
            "Failed to connect to dayplan-server at {} after starting it",
            client.base_url
        )
    }

    async fn health_check(&self) -> Result<()> {
        self.http
            .get(format!("{}/api/events", self.base_url))
            .timeout(Duration::from_secs(2))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// GET /api/events
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let resp = self
            .http
            .get(format!("{}/api/events", self.base_url))
            .send()
            .await
            .context("이벤트 로딩 실패")?;

        let list: EventList = parse(resp).await?;
        Ok(list.events)
    }

    /// POST /api/events
    pub async fn create_event(&self, form: &EventForm) -> Result<Event> {
        let resp = self
            .http
            .post(format!("{}/api/events", self.base_url))
            .json(form)
            .send()
            .await
            .context("일정 저장 실패")?;

        parse(resp).await
    }

    /// PUT /api/events/:id
    pub async fn update_event(&self, id: &str, form: &EventForm) -> Result<Event> {
        let resp = self
            .http
            .put(format!("{}/api/events/{}", self.base_url, id))
            .json(form)
            .send()
            .await
            .context("일정 저장 실패")?;

        parse(resp).await
    }

    /// DELETE /api/events/:id
    pub async fn delete_event(&self, id: &str) -> Result<()> {
        let resp = self
            .http
            .delete(format!("{}/api/events/{}", self.base_url, id))
            .send()
            .await
            .context("일정 삭제 실패")?;

        check(resp).await?;
        Ok(())
    }

    /// GET /api/holidays?date=
    pub async fn holidays(&self, date: NaiveDate) -> Result<BTreeMap<NaiveDate, String>> {
        let resp = self
            .http
            .get(format!("{}/api/holidays", self.base_url))
            .query(&[("date", date.to_string())])
            .send()
            .await
            .context("Failed to connect to server")?;

        let body: HolidayResponse = parse(resp).await?;
        Ok(body.holidays)
    }
}

/// Turn a non-2xx response into the server's error message
async fn check(resp: Response) -> Result<Response> {
    if resp.status().is_success() {
        return Ok(resp);
    }

    let status = resp.status();
    match resp.json::<ErrorResponse>().await {
        Ok(err) => anyhow::bail!("{}", err.error),
        Err(_) => anyhow::bail!("Server responded with {}", status),
    }
}

async fn parse<T: DeserializeOwned>(resp: Response) -> Result<T> {
    Ok(check(resp).await?.json().await?)
}

/// Start the dayplan-server process
fn start_server() -> Result<()> {
    Command::new("dayplan-server")
        .spawn()
        .context("Failed to start dayplan-server. Is it installed?")?;
    Ok(())
}
