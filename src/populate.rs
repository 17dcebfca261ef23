//! Board-population workflow.
//! Strict linear sequence: resolve team -> resolve board -> create notes.
//! Team lookup and board creation are fatal on failure; individual note
//! failures are collected and reported so one bad call cannot silently drop
//! the rest of the batch.

use anyhow::{Context, Result, anyhow};

use crate::content::{self, NotePlan};
use crate::miro::{Board, MiroClient, Team};

pub struct PopulateOptions {
    pub board_name: String,
    /// Reuse an existing board with the same name instead of creating a
    /// duplicate on every run.
    pub reuse_existing: bool,
}

impl Default for PopulateOptions {
    fn default() -> Self {
        Self {
            board_name: content::BOARD_NAME.to_string(),
            reuse_existing: false,
        }
    }
}

pub struct NoteFailure {
    pub label: String,
    pub error: String,
}

/// Outcome of a populate run. `failures` is non-empty only for partial runs;
/// the run itself still counts as successful.
pub struct PopulateReport {
    pub board: Board,
    pub created: usize,
    pub failures: Vec<NoteFailure>,
}

/// Picks the target team: the first entry of the listing. Arbitrary but
/// deterministic given a stable remote ordering.
pub fn select_team(teams: &[Team]) -> Result<&Team> {
    teams.first().ok_or_else(|| {
        anyhow!("No teams found for this token; a team is required to create a board")
    })
}

/// Runs the whole workflow against `client` and returns the aggregate
/// outcome. Aborts on team-lookup or board-resolution failure; note-creation
/// failures are collected into the report instead.
pub async fn run(client: &MiroClient, options: &PopulateOptions) -> Result<PopulateReport> {
    println!("Fetching teams...");
    let teams = client.list_teams().await?;
    for team in &teams {
        println!("Team name: {}, ID: {}", team.name, team.id);
    }

    let team = select_team(&teams)?;
    println!("Using team ID: {}", team.id);

    let board = resolve_board(client, team, options).await?;
    println!("Board ready: {}", board.view_link);

    let notes = content::planned_notes();
    let mut created = 0;
    let mut failures = Vec::new();

    for note in &notes {
        match create_note(client, &board, note).await {
            Ok(()) => {
                created += 1;
                println!("Added note: {}", note.label);
            }
            Err(e) => {
                eprintln!("Failed to add note '{}': {:#}", note.label, e);
                failures.push(NoteFailure {
                    label: note.label.clone(),
                    error: format!("{e:#}"),
                });
            }
        }
    }

    Ok(PopulateReport {
        board,
        created,
        failures,
    })
}

async fn resolve_board(
    client: &MiroClient,
    team: &Team,
    options: &PopulateOptions,
) -> Result<Board> {
    if options.reuse_existing {
        if let Some(existing) = client
            .find_board_by_name(&team.id, &options.board_name)
            .await
            .context("Failed to look up existing boards")?
        {
            println!("Reusing existing board: {}", existing.id);
            return Ok(existing);
        }
    }

    client
        .create_board(&options.board_name, content::BOARD_DESCRIPTION, &team.id)
        .await
        .context("Failed to create board")
}

async fn create_note(client: &MiroClient, board: &Board, note: &NotePlan) -> Result<()> {
    client
        .create_sticky_note(&board.id, &note.content, note.position, note.color)
        .await?;
    Ok(())
}

// *************** Tests ***************

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: &str, name: &str) -> Team {
        Team {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn selects_first_team() {
        let teams = vec![team("t-1", "First"), team("t-2", "Second")];
        assert_eq!(select_team(&teams).unwrap().id, "t-1");
    }

    #[test]
    fn empty_team_list_is_an_error() {
        let err = select_team(&[]).unwrap_err();
        assert!(err.to_string().contains("No teams found"));
    }

    #[test]
    fn default_options_use_fixed_board_name() {
        let options = PopulateOptions::default();
        assert_eq!(options.board_name, content::BOARD_NAME);
        assert!(!options.reuse_existing);
    }
}
