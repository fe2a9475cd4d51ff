//! Player deletion.

use super::common::CommandContext;
use crate::{
    models::PlayerId,
    view::{Confirm, DeleteOutcome},
    Result,
};
use std::io::{self, BufRead, Write};

/// Asks on stdin; anything but y/yes (or o/oui) declines.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{} [y/N] ", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "o" | "oui"
    )
}

/// Delete player `id`, asking first unless `assume_yes`.
pub async fn handle_delete(ctx: &mut CommandContext, id: PlayerId, assume_yes: bool) -> Result<()> {
    ctx.require(ctx.view.controls().can_delete)?;

    let outcome = if assume_yes {
        ctx.view
            .delete(&ctx.directory, id, &mut |_: &str| true)
            .await
    } else {
        ctx.view.delete(&ctx.directory, id, &mut StdinConfirm).await
    };

    match outcome {
        DeleteOutcome::Deleted { message } => {
            println!("✓ {}", message);
            println!("{} players remain in the roster.", ctx.view.roster().len());
            Ok(())
        }
        DeleteOutcome::Declined => {
            println!("Cancelled.");
            Ok(())
        }
        DeleteOutcome::Failed => Err(ctx.failure("Deleting the player")),
    }
}
