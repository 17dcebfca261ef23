//! Miro REST client.
//! Thin typed wrapper over the v2 endpoints the board workflow needs:
//! list teams, list/create boards, create sticky notes.
//! Requires MIRO_ACCESS_TOKEN environment variable.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const API_BASE: &str = "https://api.miro.com/v2";
const TIMEOUT_SECS: u64 = 30; // Bounds every call; an expired timer surfaces as a failed call

// *************** Request/Response Types ***************

/// A team (workspace) the token has access to.
#[derive(Deserialize, Debug, Clone)]
pub struct Team {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize)]
struct TeamList {
    #[serde(default)]
    data: Vec<Team>,
}

#[derive(Serialize)]
struct CreateBoardRequest<'a> {
    name: &'a str,
    description: &'a str,
    #[serde(rename = "teamId")]
    team_id: &'a str,
}

/// A board as returned by the API. `view_link` is the shareable URL.
#[derive(Deserialize, Debug, Clone)]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(rename = "viewLink")]
    pub view_link: String,
}

#[derive(Deserialize)]
struct BoardList {
    #[serde(default)]
    data: Vec<Board>,
}

#[derive(Serialize)]
struct CreateStickyNoteRequest<'a> {
    data: StickyNoteData<'a>,
    position: Position,
    style: StickyNoteStyle,
}

#[derive(Serialize)]
struct StickyNoteData<'a> {
    content: &'a str,
}

#[derive(Serialize)]
struct StickyNoteStyle {
    #[serde(rename = "fillColor")]
    fill_color: StickyColor,
}

/// Board coordinates in Miro's canvas units.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

/// The fill colors the concept board uses, named as the API expects them.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StickyColor {
    LightYellow,
    LightBlue,
    LightGreen,
    LightPink,
}

#[derive(Deserialize)]
struct CreatedItem {
    id: String,
}

// *************** Client ***************

pub struct MiroClient {
    client: Client,
    token: String,
}

impl MiroClient {
    /// Builds a client from the MIRO_ACCESS_TOKEN environment variable.
    /// The token value is never printed; diagnostics report presence and
    /// length only.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("MIRO_ACCESS_TOKEN")
            .context("MIRO_ACCESS_TOKEN environment variable not set")?;
        eprintln!("Access token present (length {})", token.len());
        Self::new(token)
    }

    pub fn new(token: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client, token })
    }

    /// Lists the teams the token can see. An empty list is not an error at
    /// this level; callers decide whether that is fatal.
    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        let response = self
            .client
            .get(format!("{API_BASE}/teams"))
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await
            .context("Failed to fetch teams from Miro")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Miro team listing failed with {}: {} (the token may be invalid or missing the teams:read scope)",
                status,
                body
            );
        }

        let teams: TeamList = response
            .json()
            .await
            .context("Failed to parse teams response")?;
        Ok(teams.data)
    }

    pub async fn create_board(&self, name: &str, description: &str, team_id: &str) -> Result<Board> {
        let request = CreateBoardRequest {
            name,
            description,
            team_id,
        };

        let response = self
            .client
            .post(format!("{API_BASE}/boards"))
            .header("Authorization", format!("Bearer {}", self.token))
            .json(&request)
            .send()
            .await
            .context("Failed to send board creation request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Board creation failed with {}: {}", status, body);
        }

        response
            .json()
            .await
            .context("Failed to parse board creation response")
    }

    /// Looks for an existing board with exactly `name` in the given team.
    /// Used for check-then-create; the `query` parameter narrows the listing
    /// server-side but matches fuzzily, so the exact comparison happens here.
    pub async fn find_board_by_name(&self, team_id: &str, name: &str) -> Result<Option<Board>> {
        let response = self
            .client
            .get(format!("{API_BASE}/boards"))
            .query(&[("team_id", team_id), ("query", name)])
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await
            .context("Failed to fetch board listing")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Board listing failed with {}: {}", status, body);
        }

        let boards: BoardList = response
            .json()
            .await
            .context("Failed to parse board listing response")?;
        Ok(boards.data.into_iter().find(|b| b.name == name))
    }

    /// Creates one sticky note on `board_id` and returns the new item's id.
    /// `content` may carry the limited HTML Miro accepts (`<b>`, `<br>`).
    pub async fn create_sticky_note(
        &self,
        board_id: &str,
        content: &str,
        position: Position,
        color: StickyColor,
    ) -> Result<String> {
        let request = CreateStickyNoteRequest {
            data: StickyNoteData { content },
            position,
            style: StickyNoteStyle { fill_color: color },
        };

        let response = self
            .client
            .post(format!("{API_BASE}/boards/{board_id}/sticky_notes"))
            .header("Authorization", format!("Bearer {}", self.token))
            .json(&request)
            .send()
            .await
            .context("Failed to send sticky note request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Sticky note creation failed with {}: {}", status, body);
        }

        let created: CreatedItem = response
            .json()
            .await
            .context("Failed to parse sticky note response")?;
        Ok(created.id)
    }
}

// *************** Tests ***************
