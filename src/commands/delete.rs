use anyhow::Result;
use owo_colors::OwoColorize;

use crate::client::Client;

pub async fn run(client: &Client, id: &str) -> Result<()> {
    client.delete_event(id).await?;
    println!("{}", "일정이 삭제되었습니다.".green());
    Ok(())
}
