/// Format a win-loss record, appending ties only when there are any.
pub fn format_record(wins: u32, losses: u32, ties: u32) -> String {
    if ties > 0 {
        format!("{}-{}-{}", wins, losses, ties)
    } else {
        format!("{}-{}", wins, losses)
    }
}

/// Combine a whole-points field with its hundredths field.
pub fn decode_points(whole: u32, hundredths: u32) -> f64 {
    f64::from(whole) + f64::from(hundredths) / 100.0
}

/// Team name shown when the owner has no usable name
pub fn team_name_fallback(roster_id: u32) -> String {
    format!("Team {}", roster_id)
}
