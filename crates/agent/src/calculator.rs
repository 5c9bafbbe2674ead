//! Price calculator
//!
//! Total = model base price + selected accessories. Unknown accessory ids
//! contribute nothing.

use serde::Serialize;

use gplus_config::KnowledgeBase;
use gplus_core::{format_lakhs, format_thousands};

use crate::AgentError;

/// Accessory ids picked by the user, in selection order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessorySelection {
    ids: Vec<String>,
}

impl AccessorySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select if absent, deselect if present. Returns whether it is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|existing| existing == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// One priced line of an estimate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceLine {
    pub id: String,
    pub name: String,
    pub price: u64,
}

/// Result of pricing a configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceEstimate {
    pub model: PriceLine,
    pub accessories: Vec<PriceLine>,
    pub accessories_total: u64,
    pub total: u64,
}

impl PriceEstimate {
    /// Breakdown as shown to the user
    pub fn summary(&self) -> String {
        let mut lines = vec![
            self.model.name.clone(),
            format!("Base price: ₹{}L", format_lakhs(self.model.price)),
        ];
        for accessory in &self.accessories {
            lines.push(format!(
                "{}: +₹{}k",
                accessory.name,
                format_thousands(accessory.price)
            ));
        }
        if !self.accessories.is_empty() {
            lines.push(format!(
                "Accessories total: ₹{}L",
                format_lakhs(self.accessories_total)
            ));
        }
        lines.push(format!("Total: ₹{}L", format_lakhs(self.total)));
        lines.push("Including GST + Erection Cost".to_string());
        lines.join("\n")
    }
}

/// Price a model with the given accessories
pub fn estimate_price<S: AsRef<str>>(
    knowledge: &KnowledgeBase,
    model_id: &str,
    accessory_ids: &[S],
) -> Result<PriceEstimate, AgentError> {
    let model = knowledge
        .find_model(model_id)
        .ok_or_else(|| AgentError::UnknownModel(model_id.to_string()))?;

    let mut accessories = Vec::new();
    for id in accessory_ids {
        let id = id.as_ref();
        match knowledge.find_accessory(id) {
            Some(accessory) => accessories.push(PriceLine {
                id: accessory.id.clone(),
                name: accessory.name.clone(),
                price: accessory.price,
            }),
            None => tracing::debug!(accessory = %id, "Ignoring unknown accessory"),
        }
    }

    let accessories_total: u64 = accessories.iter().map(|a| a.price).sum();

    Ok(PriceEstimate {
        model: PriceLine {
            id: model.id.clone(),
            name: model.name.clone(),
            price: model.base_price,
        },
        total: model.base_price + accessories_total,
        accessories,
        accessories_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_only() {
        let kb = KnowledgeBase::default();
        let estimate = estimate_price::<&str>(&kb, "g1-classic-manual-acp", &[]).unwrap();
        assert_eq!(estimate.total, 500_000);
        assert_eq!(estimate.accessories_total, 0);
    }

    #[test]
    fn test_with_accessories() {
        let kb = KnowledgeBase::default();
        let estimate =
            estimate_price(&kb, "g2-classic-manual-acp", &["fingerprint", "iot-controller"]).unwrap();
        assert_eq!(estimate.accessories_total, 95_000);
        assert_eq!(estimate.total, 665_000);
        assert_eq!(estimate.accessories.len(), 2);
    }

    #[test]
    fn test_unknown_accessory_contributes_zero() {
        let kb = KnowledgeBase::default();
        let estimate =
            estimate_price(&kb, "g1-classic-manual-acp", &["touch-screen", "jetpack"]).unwrap();
        assert_eq!(estimate.total, 503_000);
        assert_eq!(estimate.accessories.len(), 1);
    }

    #[test]
    fn test_unknown_model() {
        let kb = KnowledgeBase::default();
        let err = estimate_price::<&str>(&kb, "g9-gold", &[]).unwrap_err();
        assert!(matches!(err, AgentError::UnknownModel(id) if id == "g9-gold"));
    }

    #[test]
    fn test_summary() {
        let kb = KnowledgeBase::default();
        let estimate = estimate_price(&kb, "g1-classic-manual-acp", &["rf-password"]).unwrap();
        assert_eq!(
            estimate.summary(),
            "G+1 Classic - Manual Door + ACP\n\
             Base price: ₹5.00L\n\
             RF & Password Access: +₹10k\n\
             Accessories total: ₹0.10L\n\
             Total: ₹5.10L\n\
             Including GST + Erection Cost"
        );
    }

    #[test]
    fn test_summary_without_accessories_skips_subtotal() {
        let kb = KnowledgeBase::default();
        let estimate = estimate_price::<&str>(&kb, "g1-classic-manual-acp", &[]).unwrap();
        assert!(!estimate.summary().contains("Accessories total"));
    }

    #[test]
    fn test_selection_prices_in_order() {
        let kb = KnowledgeBase::default();
        let mut selection = AccessorySelection::new();
        selection.toggle("iot-controller");
        selection.toggle("fingerprint");

        let estimate = estimate_price(&kb, "g2-classic-manual-acp", selection.ids()).unwrap();
        let ids: Vec<_> = estimate.accessories.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["iot-controller", "fingerprint"]);
        assert_eq!(estimate.total, 665_000);
    }

    #[test]
    fn test_selection_toggle_keeps_order() {
        let mut selection = AccessorySelection::new();
        assert!(selection.toggle("a"));
        assert!(selection.toggle("b"));
        assert!(selection.toggle("c"));
        assert!(!selection.toggle("b"));
        assert_eq!(selection.ids(), ["a".to_string(), "c".to_string()]);

        selection.clear();
        assert!(selection.is_empty());
    }
}
