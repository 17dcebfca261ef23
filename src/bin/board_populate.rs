//! One-shot populator for the SenShop concept board on Miro.
//! Resolves a team, creates (or reuses) the board, then fills it with the
//! section and detail sticky notes. Exits non-zero on any fatal step; note
//! failures are reported in the summary instead.
//! Requires MIRO_ACCESS_TOKEN (a .env file is honored).

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use senshop_concept::content;
use senshop_concept::miro::MiroClient;
use senshop_concept::populate::{self, PopulateOptions};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let matches = Command::new("board-populate")
        .version("0.1.0")
        .about("Creates the SenShop concept board on Miro and fills it with sticky notes")
        .arg(
            Arg::new("name")
                .long("name")
                .value_name("NAME")
                .help("Board name to create (or reuse)")
                .default_value(content::BOARD_NAME),
        )
        .arg(
            Arg::new("reuse-existing")
                .long("reuse-existing")
                .action(ArgAction::SetTrue)
                .help("Reuse a board with the same name instead of creating a duplicate"),
        )
        .get_matches();

    let options = PopulateOptions {
        board_name: matches.get_one::<String>("name").unwrap().clone(), // Safe due to default
        reuse_existing: matches.get_flag("reuse-existing"),
    };

    let client = MiroClient::from_env()?;
    let report = populate::run(&client, &options).await?;

    println!();
    println!(
        "Done: {} notes created, {} failed.",
        report.created,
        report.failures.len()
    );
    if !report.failures.is_empty() {
        eprintln!("Notes that could not be created:");
        for failure in &report.failures {
            eprintln!("  {}: {}", failure.label, failure.error);
        }
    }
    println!("Open your board at: {}", report.board.view_link);

    Ok(())
}
