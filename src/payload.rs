//! Projection of loosely-typed API payloads into the crate's strong types.
//!
//! Envelope fields the caller cannot do without are required and fail the
//! whole projection. Per-entry data (catalog entries, type slots, move-learn
//! rows) is validated entry by entry, and anything malformed is skipped with
//! a warning so that one bad row never discards the valid ones.

use crate::detail::{AbilityRef, SpeciesDetail};
use crate::errors::{DetailError, DetailResult, RecordError, SourceError, SourceResult};
use schema::{BaseStats, LearnMethod, MoveLearnRecord, ResourceRef, Species};
use serde_json::Value;
use tracing::{debug, warn};

/// `GET pokemon?limit=N` -> catalog entries, in payload order.
pub fn project_species_list(payload: &Value) -> SourceResult<Vec<Species>> {
    let results = payload
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| SourceError::Malformed("species list has no 'results' array".into()))?;

    let mut species = Vec::with_capacity(results.len());
    for (position, entry) in results.iter().enumerate() {
        let name = entry.get("name").and_then(Value::as_str);
        let url = entry.get("url").and_then(Value::as_str);
        match (name, url) {
            (Some(name), Some(url)) => species.push(Species::new(name, ResourceRef::new(url))),
            _ => warn!(position, "skipping catalog entry without name or url"),
        }
    }
    Ok(species)
}

/// `GET type/{name}` -> names of the species holding that type.
pub fn project_type_members(payload: &Value) -> SourceResult<Vec<String>> {
    let slots = payload
        .get("pokemon")
        .and_then(Value::as_array)
        .ok_or_else(|| SourceError::Malformed("type payload has no 'pokemon' array".into()))?;

    Ok(slots
        .iter()
        .filter_map(|slot| {
            let name = slot.pointer("/pokemon/name").and_then(Value::as_str);
            if name.is_none() {
                warn!("skipping type slot without a pokemon name");
            }
            name.map(str::to_string)
        })
        .collect())
}

/// `GET ability/{name}` -> the ability's name in `language`, if translated.
pub fn localized_name(payload: &Value, language: &str) -> Option<String> {
    payload
        .get("names")?
        .as_array()?
        .iter()
        .find(|entry| entry.pointer("/language/name").and_then(Value::as_str) == Some(language))
        .and_then(|entry| entry.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// `GET pokemon/{name}` -> the detail view.
pub fn project_species_detail(payload: &Value) -> DetailResult<SpeciesDetail> {
    let id = required_u32(payload, "id")?;
    let name = payload
        .get("name")
        .and_then(Value::as_str)
        .ok_or(DetailError::MissingField("name"))?
        .to_string();
    let height = required_u32(payload, "height")?;
    let weight = required_u32(payload, "weight")?;
    let stats = project_base_stats(payload)?;

    let image = payload
        .pointer("/sprites/other/dream_world/front_default")
        .and_then(Value::as_str)
        .map(str::to_string);

    let types = array_field(payload, "types")
        .iter()
        .filter_map(|slot| slot.pointer("/type/name").and_then(Value::as_str))
        .map(str::to_string)
        .collect();

    let abilities = array_field(payload, "abilities")
        .iter()
        .filter_map(|slot| {
            let ability_name = slot.pointer("/ability/name").and_then(Value::as_str)?;
            let url = slot.pointer("/ability/url").and_then(Value::as_str)?;
            Some(AbilityRef {
                name: ability_name.to_string(),
                resource_ref: ResourceRef::new(url),
            })
        })
        .collect();

    let move_records = project_move_records(array_field(payload, "moves"));

    Ok(SpeciesDetail {
        id,
        name,
        image,
        height,
        weight,
        types,
        abilities,
        stats,
        move_records,
    })
}

/// Flattens `moves[].version_group_details[]` into one record per row.
pub fn project_move_records(moves: &[Value]) -> Vec<MoveLearnRecord> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for entry in moves {
        let Some(move_name) = entry.pointer("/move/name").and_then(Value::as_str) else {
            warn!("skipping move entry without a move name");
            skipped += 1;
            continue;
        };
        let Some(details) = entry.get("version_group_details").and_then(Value::as_array) else {
            warn!(move_name, "skipping move entry without version group details");
            skipped += 1;
            continue;
        };

        for detail in details {
            match project_move_record(move_name, detail) {
                Ok(record) => records.push(record),
                Err(error) => {
                    warn!(move_name, %error, "skipping malformed move-learn record");
                    skipped += 1;
                }
            }
        }
    }

    if skipped > 0 {
        debug!(kept = records.len(), skipped, "projected move-learn records");
    }
    records
}

pub fn project_move_record(move_name: &str, detail: &Value) -> Result<MoveLearnRecord, RecordError> {
    let raw_level = detail
        .get("level_learned_at")
        .ok_or(RecordError::MissingField("level_learned_at"))?;
    let level = raw_level
        .as_u64()
        .and_then(|level| u32::try_from(level).ok())
        .ok_or_else(|| RecordError::InvalidField {
            field: "level_learned_at",
            details: raw_level.to_string(),
        })?;

    let method = detail
        .pointer("/move_learn_method/name")
        .and_then(Value::as_str)
        .ok_or(RecordError::MissingField("move_learn_method"))?;

    let version_group = detail
        .pointer("/version_group/name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(MoveLearnRecord {
        move_name: move_name.to_string(),
        level,
        learn_method: LearnMethod::from_api_name(method),
        version_group,
    })
}

fn project_base_stats(payload: &Value) -> DetailResult<BaseStats> {
    let entries = payload
        .get("stats")
        .and_then(Value::as_array)
        .ok_or(DetailError::MissingField("stats"))?;

    let mut named = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(stat_name) = entry.pointer("/stat/name").and_then(Value::as_str) else {
            continue;
        };
        let value = entry
            .get("base_stat")
            .and_then(Value::as_u64)
            .and_then(|value| u8::try_from(value).ok())
            .ok_or_else(|| DetailError::InvalidField {
                field: "stats",
                details: format!("base_stat for '{}' is not a value in 0..=255", stat_name),
            })?;
        named.push((stat_name, value));
    }

    BaseStats::from_named(named).map_err(DetailError::MissingStat)
}

fn required_u32(payload: &Value, field: &'static str) -> DetailResult<u32> {
    let raw = payload.get(field).ok_or(DetailError::MissingField(field))?;
    raw.as_u64()
        .and_then(|value| u32::try_from(value).ok())
        .ok_or_else(|| DetailError::InvalidField {
            field,
            details: raw.to_string(),
        })
}

fn array_field<'a>(payload: &'a Value, field: &str) -> &'a [Value] {
    payload
        .get(field)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schema::StatName;
    use serde_json::json;

    fn stat(name: &str, value: u64) -> Value {
        json!({ "base_stat": value, "effort": 0, "stat": { "name": name, "url": "" } })
    }

    fn charmander_payload() -> Value {
        json!({
            "id": 4,
            "name": "charmander",
            "height": 6,
            "weight": 85,
            "sprites": { "other": { "dream_world": { "front_default": "https://img/4.svg" } } },
            "types": [ { "slot": 1, "type": { "name": "fire", "url": "" } } ],
            "abilities": [
                { "ability": { "name": "blaze", "url": "https://pokeapi.co/api/v2/ability/66/" }, "is_hidden": false, "slot": 1 }
            ],
            "stats": [
                stat("hp", 39), stat("attack", 52), stat("defense", 43),
                stat("special-attack", 60), stat("special-defense", 50), stat("speed", 65)
            ],
            "moves": [
                {
                    "move": { "name": "scratch", "url": "" },
                    "version_group_details": [
                        { "level_learned_at": 1, "move_learn_method": { "name": "level-up" }, "version_group": { "name": "red-blue" } },
                        { "level_learned_at": 1, "move_learn_method": { "name": "level-up" }, "version_group": { "name": "yellow" } }
                    ]
                },
                {
                    "move": { "name": "ember", "url": "" },
                    "version_group_details": [
                        { "level_learned_at": 9, "move_learn_method": { "name": "level-up" }, "version_group": { "name": "red-blue" } },
                        { "move_learn_method": { "name": "level-up" }, "version_group": { "name": "yellow" } }
                    ]
                }
            ]
        })
    }

    #[test]
    fn test_species_list_skips_incomplete_entries() {
        let payload = json!({
            "count": 3,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur" },
                { "name": "venusaur", "url": "https://pokeapi.co/api/v2/pokemon/3/" }
            ]
        });

        let species = project_species_list(&payload).expect("envelope is valid");
        let names: Vec<&str> = species.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["bulbasaur", "venusaur"]);
        assert_eq!(
            species[1].resource_ref.as_str(),
            "https://pokeapi.co/api/v2/pokemon/3/"
        );
    }

    #[test]
    fn test_species_list_without_results_is_malformed() {
        let result = project_species_list(&json!({ "detail": "Not found." }));
        assert!(matches!(result, Err(SourceError::Malformed(_))));
    }

    #[test]
    fn test_type_members() {
        let payload = json!({
            "name": "fire",
            "pokemon": [
                { "pokemon": { "name": "charmander", "url": "" }, "slot": 1 },
                { "slot": 2 },
                { "pokemon": { "name": "vulpix", "url": "" }, "slot": 1 }
            ]
        });
        assert_eq!(
            project_type_members(&payload).expect("valid"),
            vec!["charmander".to_string(), "vulpix".to_string()]
        );
    }

    #[test]
    fn test_localized_name_picks_language() {
        let payload = json!({
            "name": "blaze",
            "names": [
                { "language": { "name": "en" }, "name": "Blaze" },
                { "language": { "name": "es" }, "name": "Mar Llamas" }
            ]
        });
        assert_eq!(localized_name(&payload, "es"), Some("Mar Llamas".to_string()));
        assert_eq!(localized_name(&payload, "ja"), None);
    }

    #[test]
    fn test_detail_projection() {
        let detail = project_species_detail(&charmander_payload()).expect("valid payload");

        assert_eq!(detail.id, 4);
        assert_eq!(detail.name, "charmander");
        assert_eq!(detail.types, vec!["fire".to_string()]);
        assert_eq!(detail.abilities[0].name, "blaze");
        assert_eq!(detail.image.as_deref(), Some("https://img/4.svg"));
        assert_eq!(detail.stats.get(StatName::Speed), 65);
    }

    #[test]
    fn test_malformed_move_row_is_skipped_not_fatal() {
        let detail = project_species_detail(&charmander_payload()).expect("valid payload");

        // Two scratch rows plus the one well-formed ember row.
        assert_eq!(detail.move_records.len(), 3);
        assert!(detail
            .move_records
            .iter()
            .any(|record| record.move_name == "ember" && record.level == 9));
    }

    #[test]
    fn test_missing_stat_fails_loudly() {
        let mut payload = charmander_payload();
        payload["stats"] = json!([stat("hp", 39), stat("attack", 52)]);
        assert_eq!(
            project_species_detail(&payload),
            Err(DetailError::MissingStat(StatName::Defense))
        );
    }

    #[test]
    fn test_missing_id_is_reported() {
        let mut payload = charmander_payload();
        payload.as_object_mut().expect("object").remove("id");
        assert_eq!(
            project_species_detail(&payload),
            Err(DetailError::MissingField("id"))
        );
    }

    #[test]
    fn test_move_record_errors() {
        let missing_method = json!({ "level_learned_at": 5 });
        assert_eq!(
            project_move_record("growl", &missing_method),
            Err(RecordError::MissingField("move_learn_method"))
        );

        let negative_level = json!({ "level_learned_at": -1, "move_learn_method": { "name": "level-up" } });
        assert!(matches!(
            project_move_record("growl", &negative_level),
            Err(RecordError::InvalidField { field: "level_learned_at", .. })
        ));
    }
}
