use itertools::Itertools;
use log::debug;

use crate::entities::{CargoItem, InvalidCargo, LoadingInstance};
use crate::util::{Color, palette_color};

/// Capacity used when no other capacity is configured
pub const DEFAULT_CAPACITY: f64 = 50.0;

/// Capacity and cargo list as configured before a simulation starts.
/// Unlike a [`LoadingInstance`], a manifest can still be edited.
#[derive(Clone, Debug, PartialEq)]
pub struct CargoManifest {
    capacity: f64,
    items: Vec<CargoItem>,
}

impl Default for CargoManifest {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl CargoManifest {
    pub fn new(capacity: f64) -> Self {
        Self {
            capacity,
            items: vec![],
        }
    }

    /// The demonstration cargo: four kinds of cargo for a ship of 50 tons
    pub fn with_sample_data() -> Self {
        let mut manifest = Self::new(DEFAULT_CAPACITY);
        for (name, weight, profit) in [
            ("Copper Coils", 10.0, 60.0),
            ("Rice Bags", 20.0, 100.0),
            ("Machinery Parts", 15.0, 75.0),
            ("Cement Blocks", 30.0, 120.0),
        ] {
            manifest
                .add(name, weight, profit)
                .expect("sample cargo is valid");
        }
        manifest
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn set_capacity(&mut self, capacity: f64) {
        self.capacity = capacity;
    }

    pub fn items(&self) -> &[CargoItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Adds cargo, coloured by its position in the list at the moment it is added
    pub fn add(
        &mut self,
        name: impl Into<String>,
        weight: f64,
        profit: f64,
    ) -> Result<&CargoItem, InvalidCargo> {
        let color = palette_color(self.items.len());
        self.add_with_color(name, weight, profit, color)
    }

    pub fn add_with_color(
        &mut self,
        name: impl Into<String>,
        weight: f64,
        profit: f64,
        color: Color,
    ) -> Result<&CargoItem, InvalidCargo> {
        let item = CargoItem::try_new(name, weight, profit, color)?;
        debug!(
            "[MANIFEST] added {} ({} tons, profit {}, ratio {:.2})",
            item.name,
            item.weight,
            item.profit,
            item.ratio()
        );
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Adds cargo from its textual fields, as typed in a form
    pub fn add_from_fields(
        &mut self,
        name: &str,
        weight: &str,
        profit: &str,
    ) -> Result<&CargoItem, InvalidCargo> {
        let parse = |field: &'static str, input: &str| {
            input
                .trim()
                .parse::<f64>()
                .map_err(|_| InvalidCargo::Unparsable {
                    field,
                    input: input.to_string(),
                })
        };
        let weight = parse("weight", weight)?;
        let profit = parse("profit", profit)?;
        self.add(name.trim(), weight, profit)
    }

    /// Removes the cargo at `index`, if there is any. Other cargo keeps its colour.
    pub fn remove(&mut self, index: usize) -> Option<CargoItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Profit-to-weight ratio of every cargo, in list order
    pub fn ratios(&self) -> Vec<(&str, f64)> {
        self.items
            .iter()
            .map(|i| (i.name.as_str(), i.ratio()))
            .collect_vec()
    }

    /// Freezes the current state into an instance that both strategies can share
    pub fn freeze(&self) -> LoadingInstance {
        LoadingInstance::new(self.capacity, self.items.iter().cloned())
    }
}
