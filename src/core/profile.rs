use crate::domain::model::{FieldValue, PlayerRecord};

const UNKNOWN: &str = "Unknown";
const NOT_AVAILABLE: &str = "N/A";

fn or_placeholder(value: &Option<FieldValue>, placeholder: &str) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| placeholder.to_string())
}

/// Renders one player as a fixed nine-line block, each line `\n`-terminated.
///
/// Missing fields fall back to `Unknown` (name, position, team) or `N/A`
/// (everything else), so this never fails.
pub fn format_player_profile(player: &PlayerRecord) -> String {
    let name = or_placeholder(&player.name, UNKNOWN);
    let position = or_placeholder(&player.position, UNKNOWN);
    let team = or_placeholder(&player.team, UNKNOWN);
    let jersey = or_placeholder(&player.number, NOT_AVAILABLE);
    let height = or_placeholder(&player.height, NOT_AVAILABLE);
    let weight = or_placeholder(&player.weight, NOT_AVAILABLE);
    let college = or_placeholder(&player.college, NOT_AVAILABLE);
    let experience = or_placeholder(&player.experience, NOT_AVAILABLE);
    let status = or_placeholder(&player.status, NOT_AVAILABLE);

    format!(
        "Name: {name}\n\
         Position: {position}\n\
         Team: {team}\n\
         Jersey Number: {jersey}\n\
         Height: {height}\n\
         Weight: {weight}\n\
         College: {college}\n\
         Experience: {experience} years\n\
         Status: {status}\n"
    )
}
