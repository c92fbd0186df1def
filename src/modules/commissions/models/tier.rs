use serde::{Deserialize, Serialize};
use std::fmt;

/// Performance tier of a direct sales representative, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Kuruta,
    Chuma,
    Shaba,
    Fedha,
    Dhahabu,
    Tanzanite,
}

impl Tier {
    pub const ALL: [Tier; 6] = [
        Tier::Kuruta,
        Tier::Chuma,
        Tier::Shaba,
        Tier::Fedha,
        Tier::Dhahabu,
        Tier::Tanzanite,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tier::Kuruta => "KURUTA",
            Tier::Chuma => "CHUMA",
            Tier::Shaba => "SHABA",
            Tier::Fedha => "FEDHA",
            Tier::Dhahabu => "DHAHABU",
            Tier::Tanzanite => "TANZANITE",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.name() == s)
            .ok_or_else(|| format!("Invalid tier: {}", s))
    }
}
