//! Cache command - manage the result cache

use crate::app::Aoc;
use crate::cli::args::{CacheAction, CacheArgs};
use crate::error::AocResult;
use crate::ui::{self, UiContext};

/// Execute the cache command
pub async fn execute(args: CacheArgs, aoc: &Aoc) -> AocResult<()> {
    match args.action {
        CacheAction::Clear { yes } => clear(aoc, yes).await,
        CacheAction::Path => {
            println!("{}", aoc.config().cache_root.display());
            Ok(())
        }
    }
}

async fn clear(aoc: &Aoc, yes: bool) -> AocResult<()> {
    let ctx = UiContext::detect().with_auto_yes(yes);
    let root = aoc.config().cache_root.display().to_string();

    if !ui::confirm(
        &ctx,
        &format!("Delete every result, lock and the session under {}?", root),
        false,
    )
    .await?
    {
        ui::step_info(&ctx, "Cache kept");
        if !ctx.is_interactive() && !yes {
            ui::remark(&ctx, "Pass --yes to clear without a terminal");
        }
        return Ok(());
    }

    aoc.clear_cache()?;
    ui::step_ok(&ctx, &format!("Cleared {}", root));
    Ok(())
}
