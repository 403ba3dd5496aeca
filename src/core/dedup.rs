use crate::core::{Classification, ClassifiedMatch, MatchRecord};

/// Mark each match as a repeat only when the match immediately before it
/// carries the same identifier.
///
/// Only adjacent repeats collapse: A, B, A yields three embeds.
pub fn classify(matches: Vec<MatchRecord>) -> Vec<ClassifiedMatch> {
    let mut previous: Option<String> = None;

    matches
        .into_iter()
        .map(|record| {
            let classification = if previous.as_deref() == Some(record.identifier.as_str()) {
                Classification::Repeat
            } else {
                Classification::First
            };
            previous = Some(record.identifier.clone());
            ClassifiedMatch {
                record,
                classification,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Classification::{First, Repeat};

    fn records(ids: &[&str]) -> Vec<MatchRecord> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| MatchRecord {
                raw: format!("vimeo.com/{}", id),
                identifier: id.to_string(),
                position: i * 100,
            })
            .collect()
    }

    fn kinds(ids: &[&str]) -> Vec<Classification> {
        classify(records(ids))
            .into_iter()
            .map(|m| m.classification)
            .collect()
    }

    #[test]
    fn test_consecutive_repeats_collapse() {
        assert_eq!(kinds(&["1", "1", "1"]), vec![First, Repeat, Repeat]);
    }

    #[test]
    fn test_non_adjacent_repeat_is_first() {
        assert_eq!(kinds(&["1", "2", "1"]), vec![First, First, First]);
    }

    #[test]
    fn test_mixed_sequence() {
        assert_eq!(
            kinds(&["1", "2", "2", "1", "1"]),
            vec![First, First, Repeat, First, Repeat]
        );
    }

    #[test]
    fn test_order_preserved() {
        let classified = classify(records(&["9", "8"]));
        assert_eq!(classified[0].record.identifier, "9");
        assert_eq!(classified[1].record.position, 100);
    }

    #[test]
    fn test_empty() {
        assert!(classify(Vec::new()).is_empty());
    }
}
