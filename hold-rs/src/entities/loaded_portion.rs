use std::sync::Arc;

use crate::entities::CargoItem;

/// Part (or the whole) of a [`CargoItem`] that has been placed aboard.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedPortion {
    /// The cargo this portion was taken from
    pub item: Arc<CargoItem>,
    /// Tons loaded, in `(0, item.weight]`
    pub amount: f64,
}

impl LoadedPortion {
    pub fn whole(item: Arc<CargoItem>) -> Self {
        let amount = item.weight;
        Self { item, amount }
    }

    pub fn partial(item: Arc<CargoItem>, amount: f64) -> Self {
        debug_assert!(amount > 0.0 && amount <= item.weight, "invalid amount: {amount}");
        Self { item, amount }
    }

    pub fn is_fractional(&self) -> bool {
        self.amount < self.item.weight
    }

    /// Share of the item's weight that was loaded, in `(0, 1]`
    pub fn fraction(&self) -> f64 {
        self.amount / self.item.weight
    }

    /// Profit this portion contributes to the total
    pub fn profit(&self) -> f64 {
        self.item.profit * self.fraction()
    }

    /// Label of a fractional portion, e.g. `5.0/30`
    pub fn fraction_label(&self) -> Option<String> {
        self.is_fractional()
            .then(|| format!("{:.1}/{}", self.amount, self.item.weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::PALETTE;
    use float_cmp::approx_eq;

    fn cement() -> Arc<CargoItem> {
        Arc::new(CargoItem::try_new("Cement Blocks", 30.0, 120.0, PALETTE[3]).unwrap())
    }

    #[test]
    fn whole_portion_is_not_fractional() {
        let portion = LoadedPortion::whole(cement());
        assert!(!portion.is_fractional());
        assert!(approx_eq!(f64, portion.profit(), 120.0));
        assert_eq!(portion.fraction_label(), None);
    }

    #[test]
    fn partial_portion_contributes_proportionally() {
        let portion = LoadedPortion::partial(cement(), 5.0);
        assert!(portion.is_fractional());
        assert!(approx_eq!(f64, portion.profit(), 20.0, epsilon = 1e-9));
        assert_eq!(portion.fraction_label().as_deref(), Some("5.0/30"));
    }
}
