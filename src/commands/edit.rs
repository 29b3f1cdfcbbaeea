use anyhow::Result;
use owo_colors::OwoColorize;

use dayplan_core::form::{EventFormState, Submission};

use crate::client::Client;
use crate::commands::{EventArgs, confirm_overlaps};

pub async fn run(client: &Client, id: &str, args: EventArgs, assume_yes: bool) -> Result<()> {
    let existing = client.list_events().await?;
    let current = existing
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| anyhow::anyhow!("일정을 찾을 수 없습니다: {}", id))?;

    let mut state = EventFormState::editing(current);
    args.apply(&mut state)?;

    let Submission::Update(event) = state.submit()? else {
        anyhow::bail!("Unexpected create submission");
    };

    if !confirm_overlaps(&event, &existing, assume_yes)? {
        println!("{}", "취소되었습니다.".dimmed());
        return Ok(());
    }

    client.update_event(&event.id, &event.to_form()).await?;
    println!("{}", "일정이 수정되었습니다.".green());

    Ok(())
}
