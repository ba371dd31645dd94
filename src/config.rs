// Run configuration for a delivery simulation

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{Inventory, Location, Quantity};
use crate::utils::distance::DistanceMetric;

/// Everything a delivery run needs, passed explicitly to the simulation
///
/// When loaded from JSON only `start` is required; any other missing field is
/// empty (`deliveries`, `stock`), absent (`requirement`, `plot_output`) or
/// Euclidean (`metric`). The built-in scenario is only used through `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// Hub the route departs from
    pub start: Location,

    /// Delivery locations, in the order they were listed
    #[serde(default)]
    pub deliveries: Vec<Location>,

    /// Metric used to pick the nearest next stop
    #[serde(default)]
    pub metric: DistanceMetric,

    /// Initial stock, applied in order
    #[serde(default)]
    pub stock: Vec<StockEntry>,

    /// Quantity that must be on hand before dispatch
    #[serde(default)]
    pub requirement: Option<StockEntry>,

    /// Where to render the route as a PNG, if anywhere
    #[serde(default)]
    pub plot_output: Option<PathBuf>,
}

/// An item name paired with a quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    pub item: String,
    pub quantity: Quantity,
}

impl StockEntry {
    pub fn new<S: Into<String>>(item: S, quantity: Quantity) -> Self {
        Self {
            item: item.into(),
            quantity,
        }
    }
}

impl Default for DeliveryConfig {
    /// San Francisco hub delivering to New York, Los Angeles, Chicago and Houston
    fn default() -> Self {
        Self {
            start: Location::new(37.7749, -122.4194),
            deliveries: vec![
                Location::new(40.7128, -74.0060),
                Location::new(34.0522, -118.2437),
                Location::new(41.8781, -87.6298),
                Location::new(29.7604, -95.3698),
            ],
            metric: DistanceMetric::Euclidean,
            stock: vec![StockEntry::new("item_1", 100), StockEntry::new("item_2", 75)],
            requirement: Some(StockEntry::new("item_1", 20)),
            plot_output: None,
        }
    }
}

impl DeliveryConfig {
    /// Parse a JSON document; fields other than `start` may be left out
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Build the starting inventory from `stock`
    pub fn inventory(&self) -> Inventory {
        let mut inventory = Inventory::new();
        for entry in &self.stock {
            inventory.increment(&entry.item, entry.quantity);
        }
        inventory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_inventory() {
        let inventory = DeliveryConfig::default().inventory();

        assert_eq!(inventory.status(), vec![("item_1", 100), ("item_2", 75)]);
    }

    #[test]
    fn test_partial_json_leaves_other_fields_empty() {
        let config = DeliveryConfig::from_json_str(
            r#"{
                "start": { "latitude": 0.0, "longitude": 0.0 },
                "deliveries": [
                    { "latitude": 1.0, "longitude": 1.0 },
                    { "latitude": 2.0, "longitude": 0.5 }
                ],
                "metric": "manhattan"
            }"#,
        )
        .unwrap();

        assert_eq!(config.start, Location::new(0.0, 0.0));
        assert_eq!(config.deliveries.len(), 2);
        assert_eq!(config.metric, DistanceMetric::Manhattan);
        assert!(config.stock.is_empty());
        assert_eq!(config.requirement, None);
        assert_eq!(config.plot_output, None);
    }

    #[test]
    fn test_stock_only_json_has_no_requirement() {
        let config = DeliveryConfig::from_json_str(
            r#"{
                "start": { "latitude": 1.0, "longitude": 2.0 },
                "stock": [ { "item": "parcel", "quantity": 3 } ]
            }"#,
        )
        .unwrap();

        assert!(config.deliveries.is_empty());
        assert_eq!(config.metric, DistanceMetric::Euclidean);
        assert_eq!(config.requirement, None);
        assert_eq!(config.inventory().status(), vec![("parcel", 3)]);
    }

    #[test]
    fn test_missing_start_is_rejected() {
        let result = DeliveryConfig::from_json_str(r#"{ "deliveries": [] }"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let config = DeliveryConfig::default();
        let json = serde_json::to_string(&config).unwrap();

        assert_eq!(DeliveryConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_json() {
        let result = DeliveryConfig::from_json_str("{ \"deliveries\": 3 }");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = DeliveryConfig::from_path("does/not/exist.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
