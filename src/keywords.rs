use serde::{Deserialize, Serialize};

/// Answers collected by the intake dialog. Fields stay `None` until the
/// matching question has been answered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub industry: Option<String>,
    pub objective: Option<String>,
    pub website: Option<String>,
    pub social_media: Option<String>,
    pub ppc: Option<String>,
    pub audience: Option<String>,
    pub location: Option<String>,
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn suggest_keywords(record: &IntakeRecord) -> Vec<String> {
    let industry = capitalize(record.industry.as_deref().unwrap_or("General"));
    let objective = capitalize(record.objective.as_deref().unwrap_or("Marketing"));
    let audience = capitalize(record.audience.as_deref().unwrap_or("Audience"));

    vec![
        format!("{} marketing", industry),
        format!("{} strategy", objective),
        format!("{} engagement", audience),
        format!("{} trends", industry),
        format!("{} outreach", audience),
    ]
}
