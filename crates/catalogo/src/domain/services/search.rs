use crate::domain::entities::character::Character;

/// Local search by name, no request involved.
///
/// The query is trimmed and compared case-insensitively as a substring of the
/// name. An empty query keeps every character in its original order.
pub fn filter_by_name<'a>(characters: &'a [Character], query: &str) -> Vec<&'a Character> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return characters.iter().collect();
    }

    characters
        .iter()
        .filter(|character| character.name.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn character(id: i64, name: &str) -> Character {
        Character {
            id,
            name: name.to_string(),
            species: "Human".to_string(),
            status: "Alive".to_string(),
            image_url: String::new(),
            origin_name: String::new(),
        }
    }

    fn characters() -> Vec<Character> {
        vec![
            character(1, "Rick Sanchez"),
            character(2, "Morty Smith"),
            character(3, "Summer Smith"),
            character(4, "Beth Smith"),
            character(5, "Jerry Smith"),
            character(8, "Adjudicator Rick"),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let characters = characters();

        for query in ["", "   ", "\t"] {
            let filtered: Vec<Character> = filter_by_name(&characters, query)
                .into_iter()
                .cloned()
                .collect();
            assert_eq!(filtered, characters);
        }
    }

    #[test]
    fn test_filter_is_case_insensitive_and_ordered() {
        let characters = characters();

        let ids: Vec<i64> = filter_by_name(&characters, "  RICK ")
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![1, 8]);

        let ids: Vec<i64> = filter_by_name(&characters, "smith")
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_filter_partitions_by_match() {
        let characters = characters();

        for query in ["r", "mi", "sum", "zzz", "h s"] {
            let filtered = filter_by_name(&characters, query);
            let needle = query.trim().to_lowercase();

            for c in characters.iter() {
                let matches = c.name.to_lowercase().contains(&needle);
                let kept = filtered.iter().any(|f| f.id == c.id);
                assert_eq!(matches, kept, "query {query:?} character {}", c.name);
            }
        }
    }

    #[test]
    fn test_no_match() {
        assert!(filter_by_name(&characters(), "birdperson").is_empty());
    }
}
