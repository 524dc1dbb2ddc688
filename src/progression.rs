//! "Moves learned by level" view.
//!
//! A species' raw move list repeats the same move once per version group and
//! sometimes lists a move at several levels. The builder collapses that into
//! one entry per level holding only the moves that first become available at
//! that level.

use schema::MoveLearnRecord;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionEntry {
    pub level: u32,
    /// Moves newly learnable at `level`, in first-seen order.
    pub moves: Vec<String>,
}

/// Builds level-ordered progressions from move-learn records
pub struct MoveProgressionBuilder;

impl MoveProgressionBuilder {
    /// Only level-up records with a level above zero take part. Each move is
    /// attributed to the lowest level that lists it; levels left with no new
    /// moves are dropped. Output levels are strictly increasing.
    pub fn build(&self, records: &[MoveLearnRecord]) -> Vec<ProgressionEntry> {
        let mut by_level: BTreeMap<u32, Vec<&str>> = BTreeMap::new();
        let mut seen: HashSet<(u32, &str)> = HashSet::new();

        for record in records {
            if !record.learn_method.is_level_up() || record.level == 0 {
                continue;
            }
            let move_name = record.move_name.as_str();
            if seen.insert((record.level, move_name)) {
                by_level.entry(record.level).or_default().push(move_name);
            }
        }

        let mut already_known: HashSet<&str> = HashSet::new();
        let mut progression = Vec::with_capacity(by_level.len());

        for (level, moves_at_level) in by_level {
            let new_moves: Vec<String> = moves_at_level
                .iter()
                .filter(|move_name| !already_known.contains(*move_name))
                .map(|move_name| move_name.to_string())
                .collect();

            already_known.extend(moves_at_level);

            if !new_moves.is_empty() {
                progression.push(ProgressionEntry {
                    level,
                    moves: new_moves,
                });
            }
        }

        progression
    }
}

/// Every move learnable at or below `level`, in progression order.
pub fn moves_known_by(progression: &[ProgressionEntry], level: u32) -> Vec<&str> {
    progression
        .iter()
        .take_while(|entry| entry.level <= level)
        .flat_map(|entry| entry.moves.iter().map(String::as_str))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schema::LearnMethod;

    fn entry(level: u32, moves: &[&str]) -> ProgressionEntry {
        ProgressionEntry {
            level,
            moves: moves.iter().map(|m| m.to_string()).collect(),
        }
    }

    fn with_method(move_name: &str, level: u32, learn_method: LearnMethod) -> MoveLearnRecord {
        MoveLearnRecord {
            move_name: move_name.to_string(),
            level,
            learn_method,
            version_group: "red-blue".to_string(),
        }
    }

    #[test]
    fn test_repeated_move_is_attributed_to_lowest_level() {
        let records = vec![
            MoveLearnRecord::level_up("tackle", 1),
            MoveLearnRecord::level_up("tackle", 7),
            MoveLearnRecord::level_up("ember", 7),
        ];

        assert_eq!(
            MoveProgressionBuilder.build(&records),
            vec![entry(1, &["tackle"]), entry(7, &["ember"])]
        );
    }

    #[test]
    fn test_non_level_up_methods_are_excluded() {
        let records = vec![with_method("growl", 3, LearnMethod::Other("tutor".into()))];
        assert_eq!(MoveProgressionBuilder.build(&records), vec![]);

        let records = vec![
            with_method("flamethrower", 0, LearnMethod::Machine),
            with_method("dragon-rage", 0, LearnMethod::Egg),
            with_method("fire-punch", 0, LearnMethod::Tutor),
        ];
        assert_eq!(MoveProgressionBuilder.build(&records), vec![]);
    }

    #[test]
    fn test_level_zero_level_up_is_excluded() {
        let records = vec![
            MoveLearnRecord::level_up("evo-move", 0),
            MoveLearnRecord::level_up("scratch", 1),
        ];
        assert_eq!(
            MoveProgressionBuilder.build(&records),
            vec![entry(1, &["scratch"])]
        );
    }

    #[test]
    fn test_version_group_duplicates_collapse() {
        let mut yellow = MoveLearnRecord::level_up("growl", 1);
        yellow.version_group = "yellow".to_string();
        let records = vec![
            MoveLearnRecord::level_up("growl", 1),
            MoveLearnRecord::level_up("scratch", 1),
            yellow,
        ];

        assert_eq!(
            MoveProgressionBuilder.build(&records),
            vec![entry(1, &["growl", "scratch"])]
        );
    }

    #[test]
    fn test_fully_subsumed_level_is_omitted() {
        let records = vec![
            MoveLearnRecord::level_up("leer", 15),
            MoveLearnRecord::level_up("growl", 1),
            MoveLearnRecord::level_up("leer", 9),
            MoveLearnRecord::level_up("growl", 22),
        ];

        assert_eq!(
            MoveProgressionBuilder.build(&records),
            vec![entry(1, &["growl"]), entry(9, &["leer"])]
        );
    }

    #[test]
    fn test_moves_known_by_level() {
        let progression = vec![
            entry(1, &["scratch", "growl"]),
            entry(9, &["ember"]),
            entry(15, &["leer"]),
        ];
        assert_eq!(moves_known_by(&progression, 10), vec!["scratch", "growl", "ember"]);
        assert!(moves_known_by(&progression, 0).is_empty());
    }
}
