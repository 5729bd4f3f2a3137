use std::collections::HashSet;
use std::fmt;

use serde::{Serialize, Deserialize, Deserializer};

use crate::validation::{validate_color, validate_label, validate_weight};

/// Presentation category of a prize. Drives which sound/confetti effect the
/// frontend plays; the selector itself never looks at it.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrizeTier {
    Grand,
    Secondary,
    Consolation,
    #[default]
    None,
}

impl PrizeTier {
    /// Tier codes used by the catalog JSON. Unknown values map to `None`
    /// so a new tier in the data cannot break loading.
    pub fn from_code(code: &str) -> Self {
        match code {
            "grand" => PrizeTier::Grand,
            "secondary" => PrizeTier::Secondary,
            "consolation" => PrizeTier::Consolation,
            _ => PrizeTier::None,
        }
    }
}

impl<'de> Deserialize<'de> for PrizeTier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(PrizeTier::from_code(&code))
    }
}

/// One record of the prize catalog, as loaded from `game_data.json`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PrizeEntry {
    pub label: String,
    pub weight: f64,
    pub quantity: u32,
    #[serde(default)]
    pub tier: PrizeTier,
    #[serde(default)]
    pub image: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Empty,
    DuplicateLabel(String),
    InvalidEntry { label: String, code: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "prize catalog is empty"),
            CatalogError::DuplicateLabel(label) => {
                write!(f, "duplicate prize label: {}", label)
            }
            CatalogError::InvalidEntry { label, code } => {
                write!(f, "invalid prize entry {:?}: {}", label, code)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Ordered collection of prizes with remaining stock. Built once at load
/// time; after that the only mutation is the selector decrementing the
/// quantity of a winning entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub(crate) entries: Vec<PrizeEntry>,
}

impl Catalog {
    /// Validates and wraps the loaded records. A catalog that fails here
    /// must never reach the selector.
    pub fn from_entries(entries: Vec<PrizeEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut labels = HashSet::new();
        for entry in &entries {
            let check = validate_label(&entry.label)
                .and_then(|_| validate_weight(entry.weight))
                .and_then(|_| validate_color(&entry.color));
            if let Err(err) = check {
                log::error!("rejecting prize entry {:?}: {}", entry.label, err.code);
                return Err(CatalogError::InvalidEntry {
                    label: entry.label.clone(),
                    code: err.code.to_string(),
                });
            }
            if !labels.insert(entry.label.clone()) {
                return Err(CatalogError::DuplicateLabel(entry.label.clone()));
            }
        }

        log::info!("loaded prize catalog with {} entries", entries.len());
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[PrizeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Indices of entries that still have stock, in catalog order.
    pub fn available_indices(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.quantity > 0)
            .map(|(index, _)| index)
            .collect()
    }

    /// Sum of weights over the available set.
    pub fn total_available_weight(&self) -> f64 {
        self.entries
            .iter()
            .filter(|entry| entry.quantity > 0)
            .map(|entry| entry.weight)
            .sum()
    }

    /// Total remaining stock across all entries.
    pub fn total_quantity(&self) -> u32 {
        self.entries.iter().map(|entry| entry.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, weight: f64, quantity: u32) -> PrizeEntry {
        PrizeEntry {
            label: label.to_string(),
            weight,
            quantity,
            tier: PrizeTier::None,
            image: String::new(),
            color: "#336699".to_string(),
        }
    }

    #[test]
    fn test_catalog_from_json_records() {
        let json = r##"[
            {"label": "Voucher", "weight": 1, "quantity": 2,
             "tier": "grand", "image": "assets/images/voucher.png", "color": "#f97316"},
            {"label": "Keychain", "weight": 3.5, "quantity": 10,
             "tier": "mystery", "color": "#06b6d4"}
        ]"##;
        let entries: Vec<PrizeEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].tier, PrizeTier::Grand);
        // Unknown and missing tiers both fall back to None.
        assert_eq!(entries[1].tier, PrizeTier::None);
        assert_eq!(entries[1].image, "");

        let catalog = Catalog::from_entries(entries).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.total_quantity(), 12);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(Catalog::from_entries(vec![]), Err(CatalogError::Empty));
    }

    #[test]
    fn test_non_positive_weight_rejected() {
        let result = Catalog::from_entries(vec![entry("A", 0.0, 1)]);
        assert!(matches!(result, Err(CatalogError::InvalidEntry { .. })));
    }

    #[test]
    fn test_duplicate_labels_rejected() {
        let result = Catalog::from_entries(vec![entry("A", 1.0, 1), entry("A", 2.0, 1)]);
        assert_eq!(result, Err(CatalogError::DuplicateLabel("A".to_string())));
    }

    #[test]
    fn test_bad_color_rejected() {
        let mut bad = entry("A", 1.0, 1);
        bad.color = "tomato".to_string();
        assert!(matches!(
            Catalog::from_entries(vec![bad]),
            Err(CatalogError::InvalidEntry { .. })
        ));
    }

    #[test]
    fn test_zero_quantity_is_valid_but_unavailable() {
        let catalog =
            Catalog::from_entries(vec![entry("A", 1.0, 0), entry("B", 2.0, 3)]).unwrap();
        assert_eq!(catalog.available_indices(), vec![1]);
        assert_eq!(catalog.total_available_weight(), 2.0);
    }
}
