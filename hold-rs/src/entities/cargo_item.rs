use crate::util::Color;
use thiserror::Error;

/// A kind of cargo which can be loaded aboard, fully or partially.
#[derive(Clone, Debug, PartialEq)]
pub struct CargoItem {
    /// Identifying label, duplicates are permitted
    pub name: String,
    /// Weight of the full cargo in tons, always strictly positive
    pub weight: f64,
    /// Profit obtained when the full cargo is loaded, never negative
    pub profit: f64,
    /// Presentation-only attributes, never consulted by the strategies
    pub display: CargoDisplay,
}

/// Attributes of a [`CargoItem`] that only matter for displaying it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CargoDisplay {
    pub color: Color,
}

/// Reasons why a [`CargoItem`] cannot be created.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidCargo {
    #[error("cargo name must not be empty")]
    EmptyName,

    #[error("cargo '{name}' has a non-positive weight: {weight}")]
    NonPositiveWeight { name: String, weight: f64 },

    #[error("cargo '{name}' has a negative profit: {profit}")]
    NegativeProfit { name: String, profit: f64 },

    #[error("cargo '{name}' has a non-finite {field}: {value}")]
    NonFinite {
        name: String,
        field: &'static str,
        value: f64,
    },

    #[error("could not parse {field} from '{input}'")]
    Unparsable { field: &'static str, input: String },
}

impl CargoItem {
    /// Creates a new cargo item, rejecting anything that would make its ratio undefined or negative.
    pub fn try_new(
        name: impl Into<String>,
        weight: f64,
        profit: f64,
        color: Color,
    ) -> Result<Self, InvalidCargo> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InvalidCargo::EmptyName);
        }
        for (field, value) in [("weight", weight), ("profit", profit)] {
            if !value.is_finite() {
                return Err(InvalidCargo::NonFinite { name, field, value });
            }
        }
        if weight <= 0.0 {
            return Err(InvalidCargo::NonPositiveWeight { name, weight });
        }
        if profit < 0.0 {
            return Err(InvalidCargo::NegativeProfit { name, profit });
        }

        Ok(CargoItem {
            name,
            weight,
            profit,
            display: CargoDisplay { color },
        })
    }

    /// Profit per ton, the sort key of the greedy strategy
    pub fn ratio(&self) -> f64 {
        self.profit / self.weight
    }

    pub fn color(&self) -> Color {
        self.display.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::PALETTE;
    use float_cmp::approx_eq;

    #[test]
    fn ratio_is_profit_per_ton() {
        let item = CargoItem::try_new("Copper Coils", 10.0, 60.0, PALETTE[0]).unwrap();
        assert!(approx_eq!(f64, item.ratio(), 6.0));
    }

    #[test]
    fn zero_and_negative_weight_are_rejected() {
        for weight in [0.0, -3.0] {
            let err = CargoItem::try_new("Sand", weight, 10.0, PALETTE[0]).unwrap_err();
            assert!(matches!(err, InvalidCargo::NonPositiveWeight { .. }));
        }
    }

    #[test]
    fn negative_profit_is_rejected() {
        let err = CargoItem::try_new("Scrap", 5.0, -1.0, PALETTE[0]).unwrap_err();
        assert_eq!(
            err,
            InvalidCargo::NegativeProfit {
                name: "Scrap".into(),
                profit: -1.0
            }
        );
    }

    #[test]
    fn zero_profit_is_allowed() {
        assert!(CargoItem::try_new("Ballast", 5.0, 0.0, PALETTE[0]).is_ok());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let err = CargoItem::try_new("Fog", f64::NAN, 1.0, PALETTE[0]).unwrap_err();
        assert!(matches!(err, InvalidCargo::NonFinite { field: "weight", .. }));
        let err = CargoItem::try_new("Gold", 1.0, f64::INFINITY, PALETTE[0]).unwrap_err();
        assert!(matches!(err, InvalidCargo::NonFinite { field: "profit", .. }));
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = CargoItem::try_new("   ", 1.0, 1.0, PALETTE[0]).unwrap_err();
        assert_eq!(err, InvalidCargo::EmptyName);
    }
}
