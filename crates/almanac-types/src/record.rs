//! The id-lookup and free-text-search capability shared by all entities.
//!
//! Free-text search treats every field of a record as text and looks for
//! a case-insensitive substring match. Rather than reflecting over JSON
//! at request time, each entity declares its searchable fields through
//! [`Record::search_fields`], stringifying numeric and date fields so a
//! query like `"3"` matches season 3 and `"2019"` matches 2019 air dates.

use crate::entities::{Character, Episode, Quote};

/// A record that can be looked up by numeric id and searched as text.
pub trait Record {
    /// The record's unique identifier within its table.
    fn id(&self) -> u32;

    /// Every field rendered to a string, in declaration order.
    fn search_fields(&self) -> Vec<String>;
}

impl Record for Character {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.occupation.clone(),
            self.portrayed_by.clone(),
            self.status.clone(),
        ]
    }
}

impl Record for Episode {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.season.to_string(),
            self.episode_in_season.to_string(),
            self.air_date.to_string(),
            self.synopsis.clone(),
        ]
    }
}

impl Record for Quote {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<String> {
        vec![self.id.to_string(), self.text.clone(), self.character.clone()]
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn character_search_fields_cover_every_field() {
        let character = Character {
            id: 2,
            name: String::from("Felix Okafor"),
            occupation: String::from("Chief Engineer"),
            portrayed_by: String::from("Marcus Bell"),
            status: String::from("Active"),
        };

        let fields = character.search_fields();
        assert_eq!(
            fields,
            vec![
                String::from("2"),
                String::from("Felix Okafor"),
                String::from("Chief Engineer"),
                String::from("Marcus Bell"),
                String::from("Active"),
            ]
        );
    }

    #[test]
    fn episode_search_fields_stringify_numbers_and_dates() {
        let episode = Episode {
            id: 9,
            title: String::from("Dust Season"),
            season: 2,
            episode_in_season: 1,
            air_date: NaiveDate::from_ymd_opt(2020, 3, 2).unwrap_or_default(),
            synopsis: String::from("A storm cuts the supply line."),
        };

        let fields = episode.search_fields();
        assert!(fields.contains(&String::from("9")));
        assert!(fields.contains(&String::from("2")));
        assert!(fields.contains(&String::from("2020-03-02")));
    }

    #[test]
    fn quote_id_accessor_matches_field() {
        let quote = Quote {
            id: 14,
            text: String::from("I classify that noise as ambience."),
            character: String::from("PAL"),
        };

        assert_eq!(quote.id(), 14);
        assert_eq!(quote.search_fields().len(), 3);
    }
}
