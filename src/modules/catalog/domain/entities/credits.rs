use serde::{Deserialize, Serialize};

use super::media_item::MediaItem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub order: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// TV series creator, from the `created_by` detail field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

/// A person row from the people search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonMatch {
    pub id: u32,
    pub name: String,
    pub popularity: f64,
    pub profile_path: Option<String>,
}

/// One title from a person's filmography, with the capacity they served in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditEntry {
    pub item: MediaItem,
    pub character: Option<String>,
    pub job: Option<String>,
}

/// A person's combined filmography for one content category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersonCredits {
    pub cast: Vec<CreditEntry>,
    pub crew: Vec<CreditEntry>,
}
