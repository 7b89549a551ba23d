use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    #[serde(rename = "EMEA")]
    Emea,
    #[serde(rename = "NAMER")]
    Namer,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::Emea, Region::Namer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Emea => "EMEA",
            Region::Namer => "NAMER",
        }
    }

    pub fn parse(code: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|region| region.as_str() == code)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
