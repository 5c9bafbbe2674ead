//! Knowledge base loader
//!
//! Unified interface for loading and accessing the catalog the assistant
//! answers from.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use gplus_core::{
    AccessoryOption, CompanyInfo, ElevatorModel, EnclosureType, FaqItem, QuickReplySet, Series,
    Tier,
};

use crate::catalog;
use crate::{ConfigError, RuntimeEnvironment};

/// Read-only reference tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    #[serde(default)]
    pub models: Vec<ElevatorModel>,
    #[serde(default)]
    pub accessories: Vec<AccessoryOption>,
    #[serde(default)]
    pub faqs: Vec<FaqItem>,
    #[serde(default)]
    pub company: CompanyInfo,
    #[serde(default)]
    pub quick_replies: QuickReplySet,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self {
            models: catalog::default_models(),
            accessories: catalog::default_accessories(),
            faqs: catalog::default_faqs(),
            company: catalog::default_company(),
            quick_replies: catalog::default_quick_replies(),
        }
    }
}

impl KnowledgeBase {
    /// Knowledge base with no entries at all
    pub fn empty() -> Self {
        Self {
            models: Vec::new(),
            accessories: Vec::new(),
            faqs: Vec::new(),
            company: CompanyInfo::default(),
            quick_replies: QuickReplySet::new(),
        }
    }

    /// Load from YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = read_existing(path.as_ref())?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load from JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = read_existing(path.as_ref())?;
        serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load from file, choosing the format by extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if is_yaml(path) {
            Self::from_yaml_file(path)
        } else {
            Self::from_json_file(path)
        }
    }

    /// Save to YAML file
    pub fn to_yaml_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content =
            serde_yaml::to_string(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the tables
    ///
    /// Duplicate ids are errors. A missing `initial` quick-reply group is only
    /// logged, since the engine then attaches an empty list.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        check_unique("model", self.models.iter().map(|m| m.id.as_str()), &mut errors);
        check_unique(
            "accessory",
            self.accessories.iter().map(|a| a.id.as_str()),
            &mut errors,
        );
        check_unique("faq", self.faqs.iter().map(|f| f.id.as_str()), &mut errors);

        for faq in &self.faqs {
            if faq.question.trim().is_empty() {
                errors.push(format!("FAQ '{}' has an empty question", faq.id));
            }
        }

        if self.quick_replies.get(QuickReplySet::INITIAL).is_none() {
            tracing::warn!("Knowledge base has no 'initial' quick-reply group");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn find_model(&self, id: &str) -> Option<&ElevatorModel> {
        self.models.iter().find(|m| m.id == id)
    }

    pub fn find_accessory(&self, id: &str) -> Option<&AccessoryOption> {
        self.accessories.iter().find(|a| a.id == id)
    }

    /// Models of a tier, in catalog order
    pub fn models_by_tier(&self, tier: Tier) -> impl Iterator<Item = &ElevatorModel> {
        self.models.iter().filter(move |m| m.tier == tier)
    }

    /// Models of a tier and series, in catalog order
    pub fn models_by(&self, tier: Tier, series: Series) -> impl Iterator<Item = &ElevatorModel> {
        self.models_by_tier(tier).filter(move |m| m.series == series)
    }

    /// Lowest and highest base price for a tier and series
    pub fn price_range(&self, tier: Tier, series: Series) -> Option<(u64, u64)> {
        price_bounds(self.models_by(tier, series))
    }

    /// Lowest base price among models with the given enclosure
    pub fn starting_price_for_enclosure(&self, enclosure: EnclosureType) -> Option<u64> {
        self.models
            .iter()
            .filter(|m| m.enclosure == enclosure)
            .map(|m| m.base_price)
            .min()
    }

    /// Distinct cabin sizes in first-seen order
    pub fn all_sizes(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.models
            .iter()
            .flat_map(|m| m.sizes.iter())
            .map(String::as_str)
            .filter(|size| seen.insert(*size))
            .collect()
    }

    /// FAQs grouped by category, categories in first-seen order
    pub fn faqs_by_category(&self) -> Vec<(&str, Vec<&FaqItem>)> {
        let mut groups: Vec<(&str, Vec<&FaqItem>)> = Vec::new();
        for faq in &self.faqs {
            match groups.iter_mut().find(|(name, _)| *name == faq.category) {
                Some((_, items)) => items.push(faq),
                None => groups.push((faq.category.as_str(), vec![faq])),
            }
        }
        groups
    }

    /// The `initial` quick-reply group, empty if missing
    pub fn initial_quick_replies(&self) -> Vec<String> {
        self.quick_replies.group_or_empty(QuickReplySet::INITIAL)
    }
}

fn read_existing(path: &Path) -> Result<String, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn check_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>, errors: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(format!("Duplicate {} id: {}", kind, id));
        }
    }
}

fn price_bounds<'a>(models: impl Iterator<Item = &'a ElevatorModel>) -> Option<(u64, u64)> {
    models.fold(None, |bounds, m| match bounds {
        None => Some((m.base_price, m.base_price)),
        Some((lo, hi)) => Some((lo.min(m.base_price), hi.max(m.base_price))),
    })
}

/// Shared knowledge base with reload support
///
/// Readers take an `Arc` snapshot, so a reload never changes the data under
/// a response that is already being rendered.
pub struct KnowledgeBaseManager {
    current: RwLock<Arc<KnowledgeBase>>,
    path: Option<PathBuf>,
}

impl KnowledgeBaseManager {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self {
            current: RwLock::new(Arc::new(knowledge)),
            path: None,
        }
    }

    /// Load from file and remember the path for [`reload`](Self::reload)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let knowledge = load_validated(path)?;
        Ok(Self {
            current: RwLock::new(Arc::new(knowledge)),
            path: Some(path.to_path_buf()),
        })
    }

    /// Load from file, falling back to the built-in catalog when the file is
    /// missing outside production
    pub fn load_or_default(
        path: impl AsRef<Path>,
        environment: RuntimeEnvironment,
    ) -> Result<Self, ConfigError> {
        match Self::from_file(path.as_ref()) {
            Ok(manager) => Ok(manager),
            Err(ConfigError::FileNotFound(missing)) if !environment.is_production() => {
                tracing::warn!(
                    path = %missing,
                    "Knowledge base file not found, using built-in catalog"
                );
                Ok(Self::new(KnowledgeBase::default()))
            }
            Err(e) => Err(e),
        }
    }

    /// Reload from the file this manager was loaded from
    pub fn reload(&self) -> Result<(), ConfigError> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| ConfigError::FileNotFound("No knowledge base path set".to_string()))?;

        let knowledge = load_validated(path)?;
        *self.current.write() = Arc::new(knowledge);
        tracing::info!(path = %path.display(), "Knowledge base reloaded");
        Ok(())
    }

    /// Current knowledge base
    pub fn snapshot(&self) -> Arc<KnowledgeBase> {
        Arc::clone(&self.current.read())
    }

    /// Replace the knowledge base
    pub fn update(&self, knowledge: KnowledgeBase) {
        *self.current.write() = Arc::new(knowledge);
    }
}

impl Default for KnowledgeBaseManager {
    fn default() -> Self {
        Self::new(KnowledgeBase::default())
    }
}

fn load_validated(path: &Path) -> Result<KnowledgeBase, ConfigError> {
    let knowledge = KnowledgeBase::from_file(path)?;
    knowledge
        .validate()
        .map_err(|errors| ConfigError::InvalidValue {
            field: path.display().to_string(),
            message: errors.join("; "),
        })?;

    tracing::debug!(
        models = knowledge.models.len(),
        accessories = knowledge.accessories.len(),
        faqs = knowledge.faqs.len(),
        "Knowledge base loaded"
    );
    Ok(knowledge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let kb = KnowledgeBase::default();
        assert!(kb.validate().is_ok());
        assert!(!kb.initial_quick_replies().is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut kb = KnowledgeBase::default();
        let duplicate = kb.models[0].clone();
        kb.models.push(duplicate);
        let errors = kb.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Duplicate model id"));
    }

    #[test]
    fn test_price_range() {
        let kb = KnowledgeBase::default();
        assert_eq!(
            kb.price_range(Tier::G1, Series::Classic),
            Some((500_000, 580_000))
        );
        assert_eq!(kb.price_range(Tier::G3, Series::Ultra), None);
    }

    #[test]
    fn test_starting_price_for_enclosure() {
        let kb = KnowledgeBase::default();
        assert_eq!(kb.starting_price_for_enclosure(EnclosureType::Acp), Some(500_000));
        assert_eq!(KnowledgeBase::empty().starting_price_for_enclosure(EnclosureType::Acp), None);
    }

    #[test]
    fn test_faqs_by_category_keeps_order() {
        let kb = KnowledgeBase::default();
        let groups = kb.faqs_by_category();
        let names: Vec<&str> = groups.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["Installation", "Pricing", "Safety", "Maintenance", "Technical"]
        );
        assert_eq!(groups[0].1.len(), 3);
    }

    #[test]
    fn test_all_sizes_dedupes() {
        let kb = KnowledgeBase::default();
        assert_eq!(kb.all_sizes(), vec!["3x3", "3.6x3.6", "4x4"]);
        assert!(KnowledgeBase::empty().all_sizes().is_empty());
    }

    #[test]
    fn test_yaml_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kb.yaml");
        let kb = KnowledgeBase::default();
        kb.to_yaml_file(&path).unwrap();

        let loaded = KnowledgeBase::from_file(&path).unwrap();
        assert_eq!(loaded, kb);
    }

    #[test]
    fn test_json_file_with_partial_tables() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"faqs": [{{"id": "w", "question": "What is the warranty period?",
                "answer": "2 years.", "category": "Maintenance"}}]}}"#
        )
        .unwrap();

        let kb = KnowledgeBase::from_file(file.path()).unwrap();
        assert!(kb.models.is_empty());
        assert_eq!(kb.faqs.len(), 1);
        assert_eq!(kb.company.name, "GPlus Elevator");
        assert!(kb.initial_quick_replies().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let result = KnowledgeBase::from_file("does/not/exist.yaml");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_save_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("kb.yaml");
        let result = KnowledgeBase::default().to_yaml_file(&path);
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_manager_fallback_and_reload() {
        let manager = KnowledgeBaseManager::load_or_default(
            "does/not/exist.yaml",
            RuntimeEnvironment::Development,
        )
        .unwrap();
        assert_eq!(*manager.snapshot(), KnowledgeBase::default());
        assert!(manager.reload().is_err());

        let strict = KnowledgeBaseManager::load_or_default(
            "does/not/exist.yaml",
            RuntimeEnvironment::Production,
        );
        assert!(strict.is_err());
    }

    #[test]
    fn test_manager_reload_picks_up_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kb.yaml");
        KnowledgeBase::default().to_yaml_file(&path).unwrap();

        let manager = KnowledgeBaseManager::from_file(&path).unwrap();
        let before = manager.snapshot();

        let mut changed = KnowledgeBase::default();
        changed.company.email = "sales@example.com".to_string();
        changed.to_yaml_file(&path).unwrap();
        manager.reload().unwrap();

        assert_eq!(before.company.email, "info@gpluselevator.com");
        assert_eq!(manager.snapshot().company.email, "sales@example.com");
    }

    #[test]
    fn test_manager_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kb.yaml");
        let mut kb = KnowledgeBase::default();
        kb.faqs.push(kb.faqs[0].clone());
        kb.to_yaml_file(&path).unwrap();

        let result = KnowledgeBaseManager::from_file(&path);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_shipped_file_matches_builtin_catalog() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/knowledge_base.yaml");
        let shipped = KnowledgeBase::from_yaml_file(path).unwrap();
        assert_eq!(shipped, KnowledgeBase::default());
    }
}
