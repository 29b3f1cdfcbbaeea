use anyhow::Result;
use owo_colors::OwoColorize;

use dayplan_core::form::{EventFormState, Submission};

use crate::client::Client;
use crate::commands::{EventArgs, confirm_overlaps};

pub async fn run(client: &Client, args: EventArgs, assume_yes: bool) -> Result<()> {
    let mut state = EventFormState::new();
    args.apply(&mut state)?;

    let Submission::Create(form) = state.submit()? else {
        anyhow::bail!("Unexpected update submission");
    };

    let existing = client.list_events().await?;
    if !confirm_overlaps(&form, &existing, assume_yes)? {
        println!("{}", "취소되었습니다.".dimmed());
        return Ok(());
    }

    let event = client.create_event(&form).await?;
    println!("{}", "일정이 추가되었습니다.".green());
    println!("  {} {}", event.title, format!("#{}", event.id).dimmed());

    Ok(())
}
