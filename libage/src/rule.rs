use strum::EnumIter;

use crate::age::Age;

/// What happens to a single cell between two generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Transition {
    Reproduction,
    NoChange,
    Overcrowding,
    Isolation,
    GrowingUp,
    Aging,
    NaturalCauses,
}

impl Transition {
    pub fn resulting_age(self) -> Age {
        match self {
            Transition::Reproduction => Age::Newborn,
            Transition::GrowingUp => Age::Adult,
            Transition::Aging => Age::Senior,
            Transition::NoChange
            | Transition::Overcrowding
            | Transition::Isolation
            | Transition::NaturalCauses => Age::Empty,
        }
    }
}

/// Decides the transition of a cell from its own age and the current ages of its neighbors.
pub fn transition<I>(age: Age, neighbor_ages: I) -> Transition
where
    I: IntoIterator<Item = Age>,
{
    match age {
        Age::Empty => {
            let adult_neighbor_count = neighbor_ages
                .into_iter()
                .filter(|neighbor| *neighbor == Age::Adult)
                .count();

            if adult_neighbor_count == 2 {
                Transition::Reproduction
            } else {
                Transition::NoChange
            }
        }

        Age::Newborn => match occupied_count(neighbor_ages) {
            5.. => Transition::Overcrowding,
            ..=1 => Transition::Isolation,
            _ => Transition::GrowingUp,
        },

        Age::Adult => match occupied_count(neighbor_ages) {
            3.. => Transition::Overcrowding,
            0 => Transition::Isolation,
            _ => Transition::Aging,
        },

        Age::Senior => Transition::NaturalCauses,
    }
}

pub fn next_age<I>(age: Age, neighbor_ages: I) -> Age
where
    I: IntoIterator<Item = Age>,
{
    transition(age, neighbor_ages).resulting_age()
}

fn occupied_count<I>(neighbor_ages: I) -> usize
where
    I: IntoIterator<Item = Age>,
{
    neighbor_ages
        .into_iter()
        .filter(|neighbor| neighbor.is_occupied())
        .count()
}
