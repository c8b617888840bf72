//! Init command - scaffold input files and a solution stub for a day

use crate::app::Aoc;
use crate::cli::args::InitArgs;
use crate::error::AocResult;
use crate::scaffold::{scaffold_day, Scaffolded};
use crate::ui::{self, UiContext};

/// Execute the init command
pub async fn execute(args: InitArgs, aoc: &Aoc) -> AocResult<()> {
    let ctx = UiContext::detect();
    let year = args.year();
    ui::intro(&ctx, &format!("aoc init {}/day{}", year, args.day));

    let files = scaffold_day(&aoc.config().workspace, &args.source, year, args.day)?;
    for file in &files {
        match file {
            Scaffolded::Created(path) => ui::step_ok(&ctx, &format!("Created {}", path.display())),
            Scaffolded::Kept(path) => {
                ui::step_info(&ctx, &format!("Skipping {}, already exists", path.display()))
            }
        }
    }

    ui::remark(
        &ctx,
        &format!(
            "Register year{}::day{:02} in src/solutions/year{}/mod.rs",
            year, args.day, year
        ),
    );
    let created = files.iter().filter(|file| file.is_created()).count();
    ui::outro_success(
        &ctx,
        &format!("Initiated day{} {} ({} files created)", args.day, year, created),
    );
    Ok(())
}
