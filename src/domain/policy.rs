//! Cage compatibility rules.
//!
//! Carnivores only share a cage with their own species, and never with
//! non-carnivores. Non-carnivores share freely among themselves.

use crate::domain::dinosaur::{Diet, Dinosaur, Species};

/// Decides whether a dinosaur of `candidate` species may join `occupants`.
///
/// Only the first occupant is consulted. A cage population is assumed to be
/// homogeneous in diet already, so one representative stands in for all of
/// them. Callers pass occupants in ascending id order.
pub fn is_placement_allowed(candidate: Species, occupants: &[Dinosaur]) -> bool {
    let Some(representative) = occupants.first() else {
        return true;
    };

    match (candidate.diet(), representative.species.diet()) {
        (Diet::Carnivore, Diet::Carnivore) => candidate == representative.species,
        (Diet::NonCarnivore, Diet::NonCarnivore) => true,
        (Diet::Carnivore, Diet::NonCarnivore) | (Diet::NonCarnivore, Diet::Carnivore) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupant(id: i64, species: Species) -> Dinosaur {
        Dinosaur {
            id,
            name: format!("{species}-{id}"),
            species,
            cage_id: 1,
        }
    }

    fn carnivores() -> impl Iterator<Item = Species> {
        Species::ALL.into_iter().filter(|s| s.is_carnivore())
    }

    fn herbivores() -> impl Iterator<Item = Species> {
        Species::ALL.into_iter().filter(|s| !s.is_carnivore())
    }

    #[test]
    fn empty_cage_accepts_every_species() {
        for candidate in Species::ALL {
            assert!(is_placement_allowed(candidate, &[]), "{candidate}");
        }
    }

    #[test]
    fn carnivores_only_join_their_own_species() {
        for candidate in carnivores() {
            for resident in carnivores() {
                let allowed = is_placement_allowed(candidate, &[occupant(1, resident)]);
                assert_eq!(allowed, candidate == resident, "{candidate} into {resident}");
            }
        }
    }

    #[test]
    fn carnivores_and_herbivores_never_mix() {
        for carnivore in carnivores() {
            for herbivore in herbivores() {
                assert!(!is_placement_allowed(carnivore, &[occupant(1, herbivore)]));
                assert!(!is_placement_allowed(herbivore, &[occupant(1, carnivore)]));
            }
        }
    }

    #[test]
    fn herbivores_share_regardless_of_species() {
        for candidate in herbivores() {
            for resident in herbivores() {
                assert!(is_placement_allowed(candidate, &[occupant(1, resident)]));
            }
        }
    }

    #[test]
    fn only_the_first_occupant_is_consulted() {
        // A mixed cage can only arise from racing writes; the first entry decides.
        let mixed = [
            occupant(1, Species::Stegosaurus),
            occupant(2, Species::Velociraptor),
        ];

        assert!(is_placement_allowed(Species::Triceratops, &mixed));
        assert!(!is_placement_allowed(Species::Velociraptor, &mixed));
    }
}
