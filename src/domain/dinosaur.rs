use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dinosaur {
    pub id: i64,
    #[serde(rename = "dino_name")]
    pub name: String,
    #[serde(rename = "dino_species")]
    pub species: Species,
    pub cage_id: i64,
}

/// A validated dinosaur write, before the store has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DinosaurDraft {
    pub name: String,
    pub species: Species,
    pub cage_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Tyrannosaurus,
    Velociraptor,
    Spinosaurus,
    Megalosaurus,
    Brachiosaurus,
    Stegosaurus,
    Ankylosaurus,
    Triceratops,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diet {
    Carnivore,
    NonCarnivore,
}

impl Species {
    pub const ALL: [Species; 8] = [
        Species::Tyrannosaurus,
        Species::Velociraptor,
        Species::Spinosaurus,
        Species::Megalosaurus,
        Species::Brachiosaurus,
        Species::Stegosaurus,
        Species::Ankylosaurus,
        Species::Triceratops,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tyrannosaurus => "Tyrannosaurus",
            Self::Velociraptor => "Velociraptor",
            Self::Spinosaurus => "Spinosaurus",
            Self::Megalosaurus => "Megalosaurus",
            Self::Brachiosaurus => "Brachiosaurus",
            Self::Stegosaurus => "Stegosaurus",
            Self::Ankylosaurus => "Ankylosaurus",
            Self::Triceratops => "Triceratops",
        }
    }

    pub const fn diet(self) -> Diet {
        match self {
            Self::Tyrannosaurus | Self::Velociraptor | Self::Spinosaurus | Self::Megalosaurus => {
                Diet::Carnivore
            }
            Self::Brachiosaurus | Self::Stegosaurus | Self::Ankylosaurus | Self::Triceratops => {
                Diet::NonCarnivore
            }
        }
    }

    #[cfg(test)]
    pub(crate) const fn is_carnivore(self) -> bool {
        matches!(self.diet(), Diet::Carnivore)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown species '{0}'")]
pub struct UnknownSpecies(pub String);

// Matching is exact: the stored and wire forms are the capitalized names.
impl FromStr for Species {
    type Err = UnknownSpecies;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Species::ALL
            .into_iter()
            .find(|species| species.as_str() == value)
            .ok_or_else(|| UnknownSpecies(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_species_from_its_name() {
        for species in Species::ALL {
            assert_eq!(species.as_str().parse::<Species>(), Ok(species));
        }
    }

    #[test]
    fn rejects_unknown_and_miscased_names() {
        assert!("Dodo".parse::<Species>().is_err());
        assert!("tyrannosaurus".parse::<Species>().is_err());
        assert!("".parse::<Species>().is_err());
    }

    #[test]
    fn partitions_species_into_four_carnivores_and_four_others() {
        let carnivores = Species::ALL
            .into_iter()
            .filter(|species| species.is_carnivore())
            .collect::<Vec<_>>();

        assert_eq!(
            carnivores,
            vec![
                Species::Tyrannosaurus,
                Species::Velociraptor,
                Species::Spinosaurus,
                Species::Megalosaurus,
            ]
        );
        assert_eq!(Species::Triceratops.diet(), Diet::NonCarnivore);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let dino = Dinosaur {
            id: 7,
            name: "Rexy".to_string(),
            species: Species::Tyrannosaurus,
            cage_id: 3,
        };

        let value = serde_json::to_value(&dino).expect("dinosaur should serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "dino_name": "Rexy",
                "dino_species": "Tyrannosaurus",
                "cage_id": 3
            })
        );
    }
}
