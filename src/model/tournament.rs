use chrono::NaiveDate;

use crate::model::court::SportType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TournamentStatus {
    Open,
    Closed,
    Ongoing,
}

impl TournamentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TournamentStatus::Open => "Open",
            TournamentStatus::Closed => "Closed",
            TournamentStatus::Ongoing => "Ongoing",
        }
    }
}

/// A featured local event on the community page.
#[derive(Debug, Clone, PartialEq)]
pub struct Tournament {
    pub id: String,
    pub title: String,
    pub sport: SportType,
    pub date: NaiveDate,
    pub status: TournamentStatus,
    pub joined: u32,
}

impl Tournament {
    /// "JUN 11, 2024"
    pub fn date_label(&self) -> String {
        self.date.format("%b %-d, %Y").to_string().to_uppercase()
    }

    /// Avatar URLs for the first few participants.
    pub fn avatar_urls(&self, index: usize) -> Vec<String> {
        (1..=4)
            .map(|p| format!("https://i.pravatar.cc/150?u={}", (index + 1) * 10 + p))
            .collect()
    }
}

pub fn featured_events() -> Vec<Tournament> {
    let titles = [
        ("City Smash", SportType::Badminton),
        ("Open Masters", SportType::Pickleball),
        ("Elite 3v3", SportType::Basketball),
        ("Legacy Cup", SportType::Badminton),
    ];

    titles
        .iter()
        .enumerate()
        .filter_map(|(i, (title, sport))| {
            let n = i as u32 + 1;
            let date = NaiveDate::from_ymd_opt(2024, 6, 10 + n)?;
            Some(Tournament {
                id: format!("t{n}"),
                title: title.to_string(),
                sport: *sport,
                date,
                status: TournamentStatus::Open,
                joined: 10 + n * 5,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_events_match_listing() {
        let events = featured_events();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0].title, "City Smash");
        assert_eq!(events[0].date_label(), "JUN 11, 2024");
        assert_eq!(events[3].date_label(), "JUN 14, 2024");
        let joined: Vec<u32> = events.iter().map(|e| e.joined).collect();
        assert_eq!(joined, vec![15, 20, 25, 30]);
    }

    #[test]
    fn avatars_are_distinct_per_event() {
        let events = featured_events();
        assert_eq!(
            events[0].avatar_urls(0)[0],
            "https://i.pravatar.cc/150?u=11"
        );
        assert_eq!(
            events[1].avatar_urls(1)[3],
            "https://i.pravatar.cc/150?u=24"
        );
    }
}
