//! Built-in catalog
//!
//! Default reference data used when no knowledge-base file is configured.

use gplus_core::{
    AccessoryOption, CompanyInfo, DoorType, ElevatorModel, EnclosureType, FaqItem, QuickReplySet,
    Series, Tier,
};

fn standard_sizes() -> Vec<String> {
    vec!["3x3".to_string(), "3.6x3.6".to_string(), "4x4".to_string()]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

struct ModelSpec<'a> {
    id: &'a str,
    tier: Tier,
    series: Series,
    door_type: DoorType,
    enclosure: EnclosureType,
    base_price: u64,
    description: &'a str,
    features: &'a [&'a str],
}

impl ModelSpec<'_> {
    fn build(self) -> ElevatorModel {
        ElevatorModel {
            id: self.id.to_string(),
            name: format!(
                "{} {} - {} Door + {}",
                self.tier,
                self.series,
                self.door_type,
                self.enclosure.display_name()
            ),
            tier: self.tier,
            series: self.series,
            sizes: standard_sizes(),
            door_type: self.door_type,
            enclosure: self.enclosure,
            base_price: self.base_price,
            description: self.description.to_string(),
            features: strings(self.features),
        }
    }
}

/// Elevator models
pub fn default_models() -> Vec<ElevatorModel> {
    let classic_features: &[&str] = &["MS cabin", "Acrylic COP/LOP", "ARD backup"];
    let ultra_features: &[&str] = &["SS304 cabin", "SS COP/LOP", "ARD backup"];

    vec![
        ModelSpec {
            id: "g1-classic-manual-acp",
            tier: Tier::G1,
            series: Series::Classic,
            door_type: DoorType::Manual,
            enclosure: EnclosureType::Acp,
            base_price: 500_000,
            description: "Entry-level home lift for single-story homes",
            features: classic_features,
        },
        ModelSpec {
            id: "g1-classic-manual-glass1",
            tier: Tier::G1,
            series: Series::Classic,
            door_type: DoorType::Manual,
            enclosure: EnclosureType::GlassOneSide,
            base_price: 550_000,
            description: "Classic cabin with a single glass side",
            features: classic_features,
        },
        ModelSpec {
            id: "g1-classic-manual-glass2",
            tier: Tier::G1,
            series: Series::Classic,
            door_type: DoorType::Manual,
            enclosure: EnclosureType::GlassTwoSides,
            base_price: 580_000,
            description: "Classic cabin with two glass sides",
            features: classic_features,
        },
        ModelSpec {
            id: "g1-ultra-manual-glass1",
            tier: Tier::G1,
            series: Series::Ultra,
            door_type: DoorType::Manual,
            enclosure: EnclosureType::GlassOneSide,
            base_price: 570_000,
            description: "Stainless steel cabin with a single glass side",
            features: ultra_features,
        },
        ModelSpec {
            id: "g1-ultra-auto-glass2",
            tier: Tier::G1,
            series: Series::Ultra,
            door_type: DoorType::Auto,
            enclosure: EnclosureType::GlassTwoSides,
            base_price: 650_000,
            description: "Premium stainless cabin with auto door and panoramic glass",
            features: ultra_features,
        },
        ModelSpec {
            id: "g2-classic-manual-acp",
            tier: Tier::G2,
            series: Series::Classic,
            door_type: DoorType::Manual,
            enclosure: EnclosureType::Acp,
            base_price: 570_000,
            description: "Customer's Favorite Model for two-story homes",
            features: classic_features,
        },
        ModelSpec {
            id: "g2-classic-manual-glass1",
            tier: Tier::G2,
            series: Series::Classic,
            door_type: DoorType::Manual,
            enclosure: EnclosureType::GlassOneSide,
            base_price: 640_000,
            description: "Best seller with a single glass side",
            features: classic_features,
        },
        ModelSpec {
            id: "g2-classic-manual-glass2",
            tier: Tier::G2,
            series: Series::Classic,
            door_type: DoorType::Manual,
            enclosure: EnclosureType::GlassTwoSides,
            base_price: 670_000,
            description: "Best seller with two glass sides",
            features: classic_features,
        },
        ModelSpec {
            id: "g2-classic-auto-acp",
            tier: Tier::G2,
            series: Series::Classic,
            door_type: DoorType::Auto,
            enclosure: EnclosureType::Acp,
            base_price: 680_000,
            description: "Best seller with MS auto sliding door",
            features: classic_features,
        },
        ModelSpec {
            id: "g2-ultra-manual-glass1",
            tier: Tier::G2,
            series: Series::Ultra,
            door_type: DoorType::Manual,
            enclosure: EnclosureType::GlassOneSide,
            base_price: 720_000,
            description: "Stainless steel best seller with premium finishes",
            features: ultra_features,
        },
    ]
    .into_iter()
    .map(ModelSpec::build)
    .collect()
}

/// Accessories, priced at the lower end of each range
pub fn default_accessories() -> Vec<AccessoryOption> {
    [
        ("rf-password", "RF & Password Access", 10_000, "RF card and keypad access control"),
        ("fingerprint", "Fingerprint + Password", 15_000, "Biometric access with password fallback"),
        ("touch-screen", "Touch Screen Panel", 3_000, "Touch screen car operating panel"),
        ("iot-controller", "IoT Smart Controller", 80_000, "Remote monitoring and app control"),
        ("phase-converter", "Phase Converter", 20_000, "Runs the lift on single-phase supply"),
        ("floor-announcer", "Floor Announcing System", 5_000, "Voice announcement at each landing"),
    ]
    .into_iter()
    .map(|(id, name, price, description)| AccessoryOption {
        id: id.to_string(),
        name: name.to_string(),
        price,
        description: description.to_string(),
    })
    .collect()
}

/// Frequently asked questions
pub fn default_faqs() -> Vec<FaqItem> {
    [
        (
            "space",
            "How much space does a home lift need?",
            "A minimum of 3x3 feet. No extensive civil work is needed; existing homes only need core cutting.",
            "Installation",
        ),
        (
            "install-time",
            "How long does installation take?",
            "1-3 weeks depending on customization. Standard models take 10-15 working days to fabricate and 5-10 to install.",
            "Installation",
        ),
        (
            "license",
            "Do I need a license for a home lift?",
            "No license is required for residential installations.",
            "Installation",
        ),
        (
            "price",
            "What is the price range of your elevators?",
            "₹5L - ₹7.2L based on specifications, including GST and erection cost.",
            "Pricing",
        ),
        (
            "payment",
            "What is the payment schedule?",
            "10% advance, 40% at booking/fabrication, 45% on material arrival and 5% at 80% completion.",
            "Pricing",
        ),
        (
            "safety-standards",
            "Are your elevators safe?",
            "Yes. Multiple redundant safety systems exceed industry codes.",
            "Safety",
        ),
        (
            "power-outage",
            "What happens during a power outage?",
            "The ARD (Automatic Rescue Device) with battery backup brings the cabin to the nearest landing.",
            "Safety",
        ),
        (
            "amc",
            "Do you offer maintenance contracts?",
            "Yes. AMC is recommended; Basic and Comprehensive packages are available.",
            "Maintenance",
        ),
        (
            "warranty",
            "What is the warranty period?",
            "1 year comprehensive + 1 year extended.",
            "Maintenance",
        ),
        (
            "capacity",
            "How many people can the lift carry?",
            "3-5 people or 220 kg.",
            "Technical",
        ),
    ]
    .into_iter()
    .map(|(id, question, answer, category)| FaqItem {
        id: id.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
        category: category.to_string(),
    })
    .collect()
}

pub fn default_company() -> CompanyInfo {
    CompanyInfo {
        name: "GPlus Elevator".to_string(),
        phone: strings(&["+91 98450 12345", "+91 80 4123 4567"]),
        email: "info@gpluselevator.com".to_string(),
        website: "www.gpluselevator.com".to_string(),
        ..CompanyInfo::default()
    }
}

/// Quick-reply groups
pub fn default_quick_replies() -> QuickReplySet {
    QuickReplySet::new()
        .with_group(
            QuickReplySet::INITIAL,
            [
                "Products",
                "Price List",
                "Installation",
                "Safety Features",
                "Request Quote",
                "Contact Us",
            ],
        )
        .with_group(
            QuickReplySet::PRODUCTS,
            ["G+1 Series", "G+2 Series", "G+3 Series", "Classic vs Ultra", "Back to Menu"],
        )
}
