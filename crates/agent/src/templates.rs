//! Response templates
//!
//! One responder per rule category. Anything that depends on catalog data
//! (model listings, price ranges, sizes, accessories, FAQs, contact details)
//! is interpolated from the knowledge base; an empty catalog renders empty
//! segments rather than failing.

use gplus_config::KnowledgeBase;
use gplus_core::{format_lakhs, format_thousands, DoorType, EnclosureType, FaqItem, Series, Tier};

const PRICE_FOOTER: &str = "All prices include GST + Erection Cost";

fn lakhs(amount: u64) -> String {
    format!("₹{}L", format_lakhs(amount))
}

fn price_span((low, high): (u64, u64)) -> String {
    if low == high {
        lakhs(low)
    } else {
        format!("{} - {}", lakhs(low), lakhs(high))
    }
}

fn bullets<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("• {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Price range of one series across every tier
fn series_range(kb: &KnowledgeBase, series: Series) -> Option<(u64, u64)> {
    let mut prices = kb
        .models
        .iter()
        .filter(|m| m.series == series)
        .map(|m| m.base_price);
    let first = prices.next()?;
    Some(prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
}

/// `• name / ₹x.xx Lakhs / features` blocks for one tier and series
fn model_listing(kb: &KnowledgeBase, tier: Tier, series: Series) -> String {
    kb.models_by(tier, series)
        .map(|m| {
            format!(
                "• {}\n  ₹{} Lakhs\n  {}",
                m.name,
                format_lakhs(m.base_price),
                m.features.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn series_sections(kb: &KnowledgeBase, tier: Tier) -> String {
    Series::ALL
        .iter()
        .map(|series| {
            format!(
                "**{} Series** ({}):\n{}",
                series,
                series.cabin_material(),
                model_listing(kb, tier, *series)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn tier_price_lines(kb: &KnowledgeBase, tier: Tier, prefix: &str) -> Vec<String> {
    Series::ALL
        .iter()
        .filter_map(|series| {
            kb.price_range(tier, *series)
                .map(|range| format!("{}{}: {}", prefix, series, price_span(range)))
        })
        .collect()
}

fn brand(kb: &KnowledgeBase) -> &str {
    &kb.company.name
}

pub fn product_overview(kb: &KnowledgeBase) -> String {
    let tiers = Tier::ALL
        .iter()
        .map(|tier| {
            let mut lines = vec![match tier {
                Tier::G2 => format!("**{} Series** ({} Landings) ⭐ BEST SELLER", tier, tier.landings()),
                _ => format!("**{} Series** ({} Landings)", tier, tier.landings()),
            }];
            let prices = tier_price_lines(kb, *tier, "• ");
            if *tier == Tier::G3 {
                lines.push("• Perfect for two-story homes with terrace".to_string());
            }
            if prices.is_empty() {
                lines.push("• Custom pricing available".to_string());
            } else {
                lines.extend(prices);
            }
            if *tier == Tier::G2 {
                lines.push("• Our Customer's Favorite Model (CFM)!".to_string());
            }
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "🏢 **{} Models**\n\n\
         We offer three main model categories:\n\n\
         {}\n\n\
         All models come in:\n\
         • Sizes: {} feet\n\
         • Door Types: Manual or Auto\n\
         • Enclosures: ACP or Glass (1-2 sides)\n\n\
         Which model interests you?",
        brand(kb),
        tiers,
        kb.all_sizes().join(", ")
    )
}

pub fn g1_models(kb: &KnowledgeBase) -> String {
    format!(
        "**G+1 Models** (2 Landings)\n\n\
         Perfect for single-story homes or small buildings:\n\n\
         {}\n\n\
         {}",
        series_sections(kb, Tier::G1),
        PRICE_FOOTER
    )
}

pub fn g2_models(kb: &KnowledgeBase) -> String {
    format!(
        "**G+2 Models** ⭐ BEST SELLER (3 Landings)\n\n\
         Our Customer's Favorite Model (CFM)! Perfect for:\n\
         • Two-story homes\n\
         • Homes with terrace access\n\
         • Maximum versatility\n\n\
         {}\n\n\
         **Why G+2 is Popular:**\n\
         ✓ Most versatile installation\n\
         ✓ Perfect size-to-value ratio\n\
         ✓ 3x3 ft fits most homes\n\
         ✓ Terrace or closed floor options\n\n\
         {}",
        series_sections(kb, Tier::G2),
        PRICE_FOOTER
    )
}

pub fn g3_models(kb: &KnowledgeBase) -> String {
    let available = bullets(
        Series::ALL
            .iter()
            .map(|s| format!("{} Series ({})", s, s.cabin_material())),
    );
    let mut sizes: Vec<String> = kb.all_sizes().iter().map(|s| format!("{} feet", s)).collect();
    sizes.push("Customized sizes available".to_string());

    let pricing = if kb.models_by_tier(Tier::G3).next().is_some() {
        format!("{}\n\n{}", series_sections(kb, Tier::G3), PRICE_FOOTER)
    } else {
        "Custom quotes based on:\n\
         • Chosen cabin type\n\
         • Door type (Manual/Auto)\n\
         • Enclosure type (ACP/Glass)\n\
         • Additional accessories"
            .to_string()
    };

    format!(
        "**G+3 Models** (4 Landings)\n\n\
         Ideal for:\n\
         • Two-story homes with terrace\n\
         • Apartment-style individual houses\n\
         • Families needing maximum accessibility\n\n\
         **Available in Both:**\n\
         {}\n\n\
         **Sizes:**\n\
         {}\n\n\
         **Pricing:**\n\
         {}\n\n\
         Would you like a personalized quote?",
        available,
        bullets(sizes),
        pricing
    )
}

pub fn pricing(kb: &KnowledgeBase) -> String {
    let by_tier = Tier::ALL
        .iter()
        .filter_map(|tier| {
            let lines = tier_price_lines(kb, *tier, "");
            if lines.is_empty() {
                return None;
            }
            let star = if *tier == Tier::G2 { " ⭐" } else { "" };
            Some(format!("**{} Series:**{}\n{}", tier, star, lines.join("\n")))
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "💰 **{} Pricing**\n\n\
         **Base Prices by Model:**\n\n\
         {}\n\n\
         **Price Factors:**\n\
         • Cabin Type (MS/SS/Gold)\n\
         • Door Type (Manual/Auto)\n\
         • Enclosure (ACP/Glass)\n\
         • Size ({})\n\
         • Accessories\n\n\
         **Payment Plan:**\n\
         • 10% - Advance\n\
         • 40% - At booking/fabrication\n\
         • 45% - Material arrival\n\
         • 5% - 80% completion\n\n\
         **What's Included:**\n\
         ✓ All materials & GST\n\
         ✓ Professional installation\n\
         ✓ 1-year warranty\n\
         ✓ Quality certification\n\
         ✓ Post-installation support\n\n\
         Use our calculator for exact pricing!",
        brand(kb),
        by_tier,
        kb.all_sizes().join(", ")
    )
}

pub fn installation(_kb: &KnowledgeBase) -> String {
    "🔧 **Installation Process**\n\n\
     **Space Requirements:**\n\
     • Minimal: 3x3 feet (standard)\n\
     • No extensive civil work needed\n\
     • Core cutting for existing homes\n\n\
     **Timeline:**\n\
     Standard Models:\n\
     • Fabrication: 10-15 working days\n\
     • Installation: 5-10 working days\n\n\
     Customized Models:\n\
     • Fabrication: 20-25 working days\n\
     • Installation: 10-15 working days\n\n\
     **Pre-Installation (Customer's Part):**\n\
     1. Core cutting of roof\n\
     2. 3-Phase supply with MCCB\n\
     3. Bulkhead lighting\n\
     4. Completed plastering & tiling\n\
     5. For terrace: 12ft closed structure\n\n\
     **Our Installation Includes:**\n\
     ✓ Professional setup team\n\
     ✓ Quality assurance testing\n\
     ✓ Compliance with building codes\n\
     ✓ Complete commissioning\n\
     ✓ User training\n\n\
     **No License Required** for residential installations!\n\n\
     Ready to get started?"
        .to_string()
}

pub fn technical_specs(kb: &KnowledgeBase) -> String {
    let landings = Tier::ALL
        .iter()
        .map(|t| format!("{} ({})", t, t.landings()))
        .collect::<Vec<_>>()
        .join(", ");
    let doors = DoorType::ALL
        .iter()
        .filter(|d| kb.models.iter().any(|m| m.door_type == **d))
        .map(DoorType::label)
        .collect::<Vec<_>>()
        .join(", ");
    let enclosures = EnclosureType::ALL
        .iter()
        .filter(|e| kb.models.iter().any(|m| m.enclosure == **e))
        .map(EnclosureType::display_name)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "⚙️ **Technical Specifications**\n\n\
         **Capacity:** 3-5 people or 220 kg\n\
         **Cabin Sizes:** {} feet\n\
         **Landings:** {}\n\
         **Power Supply:** 3-Phase with MCCB (phase converter available)\n\
         **Leveling Accuracy:** 3mm\n\
         **Rescue:** ARD with 8-hour battery backup\n\
         **Door Options:** {}\n\
         **Enclosures:** {}\n\n\
         Need help picking the right configuration?",
        kb.all_sizes().join(" / "),
        landings,
        doors,
        enclosures
    )
}

pub fn maintenance(_kb: &KnowledgeBase) -> String {
    "🛠️ **Maintenance Services**\n\n\
     **Two AMC Options:**\n\n\
     **1. Basic AMC** (₹8,000-17,000/year)\n\
     • Quarterly inspections (4/year)\n\
     • Preventive maintenance\n\
     • Cleaning & lubrication\n\
     • Basic adjustments\n\
     • Parts NOT included\n\n\
     **2. Comprehensive AMC** (₹30,000-55,000/year)\n\
     • Everything in Basic AMC\n\
     • All parts replacement included\n\
     • Emergency repairs within 24-72 hrs\n\
     • 24/7 support availability\n\
     • No hidden costs\n\n\
     **What's Covered:**\n\
     ✓ Motor inspection\n\
     ✓ Control system checks\n\
     ✓ Cable & shaft examination\n\
     ✓ Safety system testing\n\
     ✓ Lubrication of moving parts\n\
     ✓ Oil level monitoring\n\
     ✓ Complete cleaning\n\n\
     **Emergency Service:**\n\
     • Response: 6-8 hours\n\
     • Available 24/7\n\
     • Expert technicians\n\n\
     **Warranty:**\n\
     1 year comprehensive + 1 year extended\n\n\
     Protect your investment with professional maintenance!"
        .to_string()
}

pub fn safety(_kb: &KnowledgeBase) -> String {
    "🛡️ **Safety Features**\n\n\
     **Built-in Safety Systems:**\n\n\
     **Emergency Protection:**\n\
     • ARD (Automatic Rescue Device)\n\
     • 8-hour battery backup\n\
     • Emergency alarm button\n\
     • Two-way video calling\n\
     • Auto-location transmission\n\n\
     **Door Safety:**\n\
     • Multi-beam light curtain\n\
     • Auto-reverse on obstruction\n\
     • Double safety locks\n\
     • Emergency manual release\n\
     • Entrapment sensors\n\n\
     **Mechanical Safety:**\n\
     • Overspeed governors\n\
     • Progressive safety gear\n\
     • 150% rated load buffers\n\
     • Advanced rope monitoring\n\
     • Seismic detection system\n\n\
     **Fire Safety:**\n\
     • Fire recall operation\n\
     • Firefighter controls\n\
     • Smoke detector integration\n\
     • Emergency positioning\n\n\
     **Operational Safety:**\n\
     • Precise leveling (3mm accuracy)\n\
     • Automatic braking system\n\
     • Power failure protection\n\
     • Overload sensors\n\n\
     **Standards Compliance:**\n\
     ✓ Exceeds industry standards\n\
     ✓ Multiple redundant systems\n\
     ✓ Regular safety inspections\n\
     ✓ Certified components\n\n\
     Your safety is our priority!"
        .to_string()
}

pub fn cabin_material(kb: &KnowledgeBase) -> String {
    let series = Series::ALL
        .iter()
        .map(|s| {
            let count = kb.models.iter().filter(|m| m.series == *s).count();
            let availability = match series_range(kb, *s) {
                Some((low, _)) => format!("{} models from {}", count, lakhs(low)),
                None => "Available on request".to_string(),
            };
            format!("**{} Series** - {}\n{}", s, s.cabin_material(), availability)
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "🪞 **Cabin Materials**\n\n\
         {}\n\n\
         **Luxury** - Gold plated cabin\n\
         Available on request\n\n\
         **Control Panels:**\n\
         • Acrylic (Standard)\n\
         • SS304 (Premium)\n\
         • Gold/Rose Gold finish\n\n\
         Classic cabins are powder-coated; Ultra cabins are polished stainless steel.",
        series
    )
}

pub fn door(kb: &KnowledgeBase) -> String {
    let doors = DoorType::ALL
        .iter()
        .map(|d| {
            let options = match d {
                DoorType::Manual => "• Mesh sliding\n• MS/SS swing (half/full vision)",
                DoorType::Auto => "• MS auto sliding\n• SS auto sliding\n• Half/full vision glass",
            };
            let count = kb.models.iter().filter(|m| m.door_type == *d).count();
            format!("**{} Doors:**\n{}\nAvailable on {} models", d, options, count)
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "🚪 **Door Options**\n\n\
         {}\n\n\
         Every door has a multi-beam light curtain and double safety locks.",
        doors
    )
}

pub fn enclosure(kb: &KnowledgeBase) -> String {
    let enclosures = EnclosureType::ALL
        .iter()
        .map(|e| match kb.starting_price_for_enclosure(*e) {
            Some(price) => format!("• {}: from {}", e.display_name(), lakhs(price)),
            None => format!("• {}: on request", e.display_name()),
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "🏗️ **Shaft Enclosures**\n\n\
         {}\n\n\
         **Materials:**\n\
         • ACP (Aluminum Composite)\n\
         • 8mm Toughened Glass\n\
         • 12mm Toughened Glass\n\
         • Multi-color glass options\n\n\
         Glass enclosures suit homes where the lift is a design feature.",
        enclosures
    )
}

pub fn customization(kb: &KnowledgeBase) -> String {
    let accessories = bullets(
        kb.accessories
            .iter()
            .map(|a| format!("{} (₹{}k)", a.name, format_thousands(a.price))),
    );

    format!(
        "🎨 **Customization Options**\n\n\
         **Cabin Materials:**\n\
         • MS (Mild Steel) - Classic\n\
         • SS304 (Stainless Steel) - Ultra\n\
         • Gold Plated - Luxury\n\n\
         **Door Types:**\n\
         Manual:\n\
         • Mesh sliding\n\
         • MS/SS swing (half/full vision)\n\n\
         Auto:\n\
         • MS auto sliding\n\
         • SS auto sliding\n\
         • Half/full vision glass\n\n\
         **Enclosures:**\n\
         • ACP (Aluminum Composite)\n\
         • 8mm Toughened Glass\n\
         • 12mm Toughened Glass\n\
         • Multi-color glass options\n\n\
         **Control Panels:**\n\
         • Acrylic (Standard)\n\
         • SS304 (Premium)\n\
         • Gold/Rose Gold finish\n\
         • Touch screen options\n\n\
         **Accessories:**\n\
         {}\n\n\
         **Additional:**\n\
         • Custom colors & finishes\n\
         • LED lighting options\n\n\
         Create your perfect elevator!",
        accessories
    )
}

pub fn faq_overview(kb: &KnowledgeBase) -> String {
    let groups = kb
        .faqs_by_category()
        .into_iter()
        .map(|(category, items)| {
            format!(
                "**{}**\n{}",
                category,
                bullets(items.iter().map(|faq| faq.question.as_str()))
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "❓ **Frequently Asked Questions**\n\n\
         {}\n\n\
         Which topic would you like to explore?",
        groups
    )
}

pub fn contact(kb: &KnowledgeBase) -> String {
    let company = &kb.company;
    format!(
        "📞 **Contact {}**\n\n\
         **Get in Touch:**\n\n\
         📱 **Phone:**\n\
         {}\n\n\
         📧 **Email:**\n\
         {}\n\n\
         🌐 **Website:**\n\
         {}\n\n\
         **Office Hours:**\n\
         {}\n\n\
         **Quick Actions:**\n\
         • Request detailed quotation\n\
         • Schedule site visit\n\
         • Product demonstration\n\
         • Technical consultation\n\
         • AMC enrollment\n\n\
         **Response Time:**\n\
         We typically respond within:\n\
         • Phone: Immediate\n\
         • Email: Within 24 hours\n\
         • WhatsApp: Within 2 hours\n\n\
         **Service Coverage:**\n\
         Available for installations across India\n\n\
         How would you like to proceed?",
        company.name,
        company.phone.join("\n"),
        company.email,
        company.website,
        company.office_hours
    )
}

pub fn quote(kb: &KnowledgeBase) -> String {
    let sizes = kb.all_sizes().join(", ");
    format!(
        "📋 **Request a Quote**\n\n\
         To provide you with an accurate quotation, I need:\n\n\
         **Project Details:**\n\
         1. Building type (Residential/Commercial)\n\
         2. Number of floors (G+1/G+2/G+3)\n\
         3. Preferred size ({})\n\
         4. Model preference (Classic/Ultra)\n\
         5. Door type (Manual/Auto)\n\
         6. Enclosure type (ACP/Glass)\n\n\
         **Installation Site:**\n\
         7. Indoor or outdoor\n\
         8. New construction or existing building\n\
         9. Available space details\n\n\
         **Contact Information:**\n\
         10. Your name\n\
         11. Phone number\n\
         12. Email address\n\
         13. Location/Address\n\n\
         **Additional Requirements:**\n\
         • Any special customizations\n\
         • Preferred accessories\n\
         • Timeline requirements\n\n\
         **Next Steps:**\n\
         1. Use our Price Calculator\n\
         2. Contact us directly for site visit\n\
         3. Get detailed quotation within 24 hrs\n\n\
         Ready to calculate your price?",
        sizes
    )
}

pub fn comparison(kb: &KnowledgeBase) -> String {
    let range = |series| {
        series_range(kb, series)
            .map(price_span)
            .unwrap_or_else(|| "On request".to_string())
    };

    format!(
        "⚖️ **Classic vs Ultra Comparison**\n\n\
         **Classic Series:**\n\
         ✓ MS (Mild Steel) cabin\n\
         ✓ Powder-coated finish\n\
         ✓ Acrylic control panels\n\
         ✓ Cost-effective option\n\
         ✓ Durable & reliable\n\
         ✓ Multiple color choices\n\
         ✓ Perfect for budget-conscious\n\n\
         **Price Range:** {}\n\n\
         **Ultra Series:**\n\
         ✓ SS304 stainless steel cabin\n\
         ✓ Premium rust-resistant\n\
         ✓ SS control panels\n\
         ✓ Sleek modern appearance\n\
         ✓ Enhanced durability\n\
         ✓ Reflective surfaces\n\
         ✓ Low maintenance\n\n\
         **Price Range:** {}\n\n\
         **Key Differences:**\n\
         | Feature | Classic | Ultra |\n\
         |---------|---------|-------|\n\
         | Cabin | MS | SS304 |\n\
         | COP/LOP | Acrylic | SS |\n\
         | Auto Door | MS | SS |\n\
         | Finish | Powder coat | Polished |\n\
         | Corrosion | Resistant | Highly resistant |\n\
         | Maintenance | Regular | Minimal |\n\n\
         **Both Include:**\n\
         • Same safety features\n\
         • Same motor & technology\n\
         • Same warranty\n\
         • Same installation process\n\n\
         Choose based on budget & aesthetic preference!",
        range(Series::Classic),
        range(Series::Ultra)
    )
}

pub fn back_to_menu(kb: &KnowledgeBase) -> String {
    format!("What would you like to know about {}s?", brand(kb))
}

/// Answer built from a matched FAQ entry
pub fn faq_answer(faq: &FaqItem) -> String {
    format!(
        "**{}**\n\n{}\n\nIs there anything else you would like to know?",
        faq.question, faq.answer
    )
}

/// Fallback when neither a rule nor an FAQ matches
pub fn generic_menu(kb: &KnowledgeBase) -> String {
    format!(
        "I'm here to help with {}s! I can assist you with:\n\n\
         • Product information & models\n\
         • Pricing & calculations\n\
         • Installation process\n\
         • Safety features\n\
         • Maintenance services\n\
         • Customization options\n\
         • Quote requests\n\
         • Contact information\n\n\
         What would you like to know?",
        brand(kb)
    )
}

/// Time-of-day salutation for the welcome message
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

pub fn welcome(kb: &KnowledgeBase, hour: u32) -> String {
    format!(
        "{}! Welcome to {} 🏢\n\n\
         I'm your virtual assistant, here to help you explore our next-generation elevator solutions. \
         How can I assist you today?",
        greeting_for_hour(hour),
        brand(kb)
    )
}
