use std::sync::Arc;

use crate::entities::CargoItem;

/// Frozen snapshot of a capacity and a cargo list, shared by both strategies of a simulation.
/// Once created, neither the capacity nor the items can change.
#[derive(Clone, Debug)]
pub struct LoadingInstance {
    capacity: f64,
    items: Arc<[Arc<CargoItem>]>,
}

impl LoadingInstance {
    pub fn new(capacity: f64, items: impl IntoIterator<Item = CargoItem>) -> Self {
        let items = items.into_iter().map(Arc::new).collect();
        Self { capacity, items }
    }

    /// Capacity of the ship in tons
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Cargo in the order in which it was supplied
    pub fn items(&self) -> &[Arc<CargoItem>] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(|i| i.weight).sum()
    }

    pub fn total_profit(&self) -> f64 {
        self.items.iter().map(|i| i.profit).sum()
    }
}
