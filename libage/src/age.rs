use anyhow::Context;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, FromRepr};

/// The lifecycle stage of a cell. The discriminant is the age as it appears in seeds and dumps.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    FromRepr,
)]
#[serde(try_from = "u8", into = "u8")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Age {
    #[default]
    Empty = 0,
    Newborn = 1,
    Adult = 2,
    Senior = 3,
}

impl Age {
    pub fn is_occupied(self) -> bool {
        self != Age::Empty
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Age {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Age::from_repr(value).with_context(|| format!("{value} is not an age (expected 0..=3)"))
    }
}

impl From<Age> for u8 {
    fn from(value: Age) -> Self {
        value.value()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn ages_map_to_their_numbers() {
        assert_eq!(Age::try_from(0u8).unwrap(), Age::Empty);
        assert_eq!(Age::try_from(3u8).unwrap(), Age::Senior);
        assert!(Age::try_from(4u8).is_err());
        assert_eq!(u8::from(Age::Adult), 2);
    }

    #[test]
    fn ages_parse_from_names() {
        assert_eq!(Age::from_str("newborn").unwrap(), Age::Newborn);
        assert!(Age::from_str("ancient").is_err());
    }

    #[test]
    fn ages_serialize_as_numbers() {
        assert_eq!(serde_json::to_string(&Age::Senior).unwrap(), "3");
        assert_eq!(serde_json::from_str::<Age>("1").unwrap(), Age::Newborn);
        assert!(serde_json::from_str::<Age>("7").is_err());
    }
}
