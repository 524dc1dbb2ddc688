use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Opaque handle to a species' detail resource (the API gives out URLs).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceRef(String);

impl ResourceRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub name: String,
    pub resource_ref: ResourceRef,
}

impl Species {
    pub fn new(name: impl Into<String>, resource_ref: ResourceRef) -> Self {
        Self {
            name: name.into(),
            resource_ref,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LearnMethod {
    LevelUp,
    Machine,
    Tutor,
    Egg,
    Other(String),
}

impl LearnMethod {
    /// Maps the API's `move_learn_method.name`.
    pub fn from_api_name(name: &str) -> Self {
        match name {
            "level-up" => LearnMethod::LevelUp,
            "machine" => LearnMethod::Machine,
            "tutor" => LearnMethod::Tutor,
            "egg" => LearnMethod::Egg,
            other => LearnMethod::Other(other.to_string()),
        }
    }

    pub fn is_level_up(&self) -> bool {
        matches!(self, LearnMethod::LevelUp)
    }
}

/// A single (move, level, method, version group) row from a species' move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLearnRecord {
    pub move_name: String,
    pub level: u32,
    pub learn_method: LearnMethod,
    pub version_group: String,
}

impl MoveLearnRecord {
    pub fn level_up(move_name: impl Into<String>, level: u32) -> Self {
        Self {
            move_name: move_name.into(),
            level,
            learn_method: LearnMethod::LevelUp,
            version_group: String::new(),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StatName {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub sp_attack: u8,
    pub sp_defense: u8,
    pub speed: u8,
}

impl BaseStats {
    /// Builds the stat block from `(stat name, value)` pairs in any order.
    ///
    /// Unrecognised names are ignored. Returns the first expected stat that
    /// has no entry.
    pub fn from_named<'a, I>(stats: I) -> Result<Self, StatName>
    where
        I: IntoIterator<Item = (&'a str, u8)>,
    {
        let by_name: HashMap<&str, u8> = stats.into_iter().collect();
        let mut resolved = [0u8; 6];
        for (slot, stat) in resolved.iter_mut().zip(StatName::iter()) {
            let key: &str = stat.as_ref();
            *slot = *by_name.get(key).ok_or(stat)?;
        }

        let [hp, attack, defense, sp_attack, sp_defense, speed] = resolved;
        Ok(Self {
            hp,
            attack,
            defense,
            sp_attack,
            sp_defense,
            speed,
        })
    }

    pub fn get(&self, stat: StatName) -> u8 {
        match stat {
            StatName::Hp => self.hp,
            StatName::Attack => self.attack,
            StatName::Defense => self.defense,
            StatName::SpecialAttack => self.sp_attack,
            StatName::SpecialDefense => self.sp_defense,
            StatName::Speed => self.speed,
        }
    }

    pub fn total(&self) -> u16 {
        StatName::iter().map(|stat| self.get(stat) as u16).sum()
    }
}
