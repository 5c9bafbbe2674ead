//! Catalog reference data
//!
//! Immutable tables the assistant answers from: elevator models, accessories,
//! FAQs, company contact details and quick-reply groups.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Building-height category, by number of landings served
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    /// Two landings
    #[serde(rename = "G+1")]
    G1,
    /// Three landings
    #[serde(rename = "G+2")]
    G2,
    /// Four landings
    #[serde(rename = "G+3")]
    G3,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::G1, Tier::G2, Tier::G3];

    pub fn label(&self) -> &'static str {
        match self {
            Tier::G1 => "G+1",
            Tier::G2 => "G+2",
            Tier::G3 => "G+3",
        }
    }

    /// Number of landings served
    pub fn landings(&self) -> u8 {
        match self {
            Tier::G1 => 2,
            Tier::G2 => 3,
            Tier::G3 => 4,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Tier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "G+1" | "G1" => Ok(Tier::G1),
            "G+2" | "G2" => Ok(Tier::G2),
            "G+3" | "G3" => Ok(Tier::G3),
            _ => Err(Error::UnknownTier(s.to_string())),
        }
    }
}

/// Cabin-material grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Series {
    /// Mild steel cabin
    Classic,
    /// SS304 stainless steel cabin
    Ultra,
}

impl Series {
    pub const ALL: [Series; 2] = [Series::Classic, Series::Ultra];

    pub fn label(&self) -> &'static str {
        match self {
            Series::Classic => "Classic",
            Series::Ultra => "Ultra",
        }
    }

    /// Short cabin material name used in listings
    pub fn cabin_material(&self) -> &'static str {
        match self {
            Series::Classic => "MS Cabin",
            Series::Ultra => "SS304 Cabin",
        }
    }
}

impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Series {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Series::Classic),
            "ultra" => Ok(Series::Ultra),
            _ => Err(Error::UnknownSeries(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DoorType {
    Manual,
    Auto,
}

impl DoorType {
    pub const ALL: [DoorType; 2] = [DoorType::Manual, DoorType::Auto];

    pub fn label(&self) -> &'static str {
        match self {
            DoorType::Manual => "Manual",
            DoorType::Auto => "Auto",
        }
    }
}

impl std::fmt::Display for DoorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for DoorType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manual" => Ok(DoorType::Manual),
            "auto" | "automatic" => Ok(DoorType::Auto),
            _ => Err(Error::UnknownDoorType(s.to_string())),
        }
    }
}

/// Shaft enclosure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EnclosureType {
    #[serde(rename = "ACP")]
    Acp,
    #[serde(rename = "Glass-1Side")]
    GlassOneSide,
    #[serde(rename = "Glass-2Sides")]
    GlassTwoSides,
}

impl EnclosureType {
    pub const ALL: [EnclosureType; 3] = [
        EnclosureType::Acp,
        EnclosureType::GlassOneSide,
        EnclosureType::GlassTwoSides,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EnclosureType::Acp => "ACP",
            EnclosureType::GlassOneSide => "Glass-1Side",
            EnclosureType::GlassTwoSides => "Glass-2Sides",
        }
    }

    /// Human-readable name for chat responses
    pub fn display_name(&self) -> &'static str {
        match self {
            EnclosureType::Acp => "ACP",
            EnclosureType::GlassOneSide => "Glass (1 Side)",
            EnclosureType::GlassTwoSides => "Glass (2 Sides)",
        }
    }
}

impl std::fmt::Display for EnclosureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for EnclosureType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "acp" => Ok(EnclosureType::Acp),
            "glass-1side" | "glass_1side" | "glass1" => Ok(EnclosureType::GlassOneSide),
            "glass-2sides" | "glass_2sides" | "glass2" => Ok(EnclosureType::GlassTwoSides),
            _ => Err(Error::UnknownEnclosure(s.to_string())),
        }
    }
}

/// Elevator model, identified by `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElevatorModel {
    pub id: String,
    /// Display name
    pub name: String,
    pub tier: Tier,
    pub series: Series,
    /// Available cabin sizes, e.g. "3x3"
    #[serde(default)]
    pub sizes: Vec<String>,
    pub door_type: DoorType,
    pub enclosure: EnclosureType,
    /// Base price in rupees
    pub base_price: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Optional add-on priced on top of a model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessoryOption {
    pub id: String,
    pub name: String,
    /// Price in rupees
    pub price: u64,
    #[serde(default)]
    pub description: String,
}

/// Frequently asked question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
    /// Grouping label for the FAQ overview (e.g. "Installation")
    pub category: String,
}

/// Company contact details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    /// Brand name used in greetings and templates
    #[serde(default = "default_company_name")]
    pub name: String,
    /// Phone numbers in display order
    #[serde(default)]
    pub phone: Vec<String>,
    #[serde(default)]
    pub email: String,
    /// Website domain without scheme
    #[serde(default)]
    pub website: String,
    #[serde(default = "default_office_hours")]
    pub office_hours: String,
}

fn default_company_name() -> String {
    "GPlus Elevator".to_string()
}

fn default_office_hours() -> String {
    "Monday - Saturday: 9:00 AM - 6:00 PM".to_string()
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: default_company_name(),
            phone: Vec::new(),
            email: String::new(),
            website: String::new(),
            office_hours: default_office_hours(),
        }
    }
}

/// Named groups of suggested follow-up phrases
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuickReplySet {
    groups: BTreeMap<String, Vec<String>>,
}

impl QuickReplySet {
    pub const INITIAL: &'static str = "initial";
    pub const PRODUCTS: &'static str = "products";

    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a group
    pub fn with_group<I, S>(mut self, name: impl Into<String>, replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups
            .insert(name.into(), replies.into_iter().map(Into::into).collect());
        self
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    /// Replies of a group, empty when the group is missing
    pub fn group_or_empty(&self, name: &str) -> Vec<String> {
        self.get(name).map(<[String]>::to_vec).unwrap_or_default()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Captured quotation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Model id
    pub model: String,
    pub size: String,
    pub door_type: String,
    pub enclosure: String,
    /// Accessory ids
    #[serde(default)]
    pub accessories: Vec<String>,
    pub customer_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}
