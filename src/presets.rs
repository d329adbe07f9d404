//! Demo datasets that replace the whole content of a [`Model`](crate::Model)
//! in one step.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// A named, fixed list of items.
///
/// # Examples
///
/// ```
/// use deque_emulator::Preset;
///
/// let preset: Preset = "Tea".parse().unwrap();
/// assert_eq!(preset, Preset::Tea);
/// assert_eq!(preset.items().len(), 10);
/// assert!("pies".parse::<Preset>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Tea,
    Cakes,
}

const TEA: [&str; 10] = [
    "Чай Лунцзин",
    "Эрл Грей",
    "Сенча",
    "Пуэр",
    "Дарджилинг",
    "Ассам",
    "Матча",
    "Ганпаудер",
    "Оолонг",
    "Лапсанг Сушонг",
];

const CAKES: [&str; 10] = [
    "Красный бархат",
    "Наполеон",
    "Медовик",
    "Тирамису",
    "Прага",
    "Чизкейк",
    "Захер",
    "Эстерхази",
    "Морковный торт",
    "Чёрный лес",
];

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Tea, Preset::Cakes];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Tea => "tea",
            Preset::Cakes => "cakes",
        }
    }

    /// The items of the dataset, in load order.
    pub fn items(self) -> &'static [&'static str] {
        match self {
            Preset::Tea => &TEA,
            Preset::Cakes => &CAKES,
        }
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownPreset(s.to_owned()))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
