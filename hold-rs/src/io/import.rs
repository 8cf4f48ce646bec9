use anyhow::{Context, Result, ensure};
use log::info;

use crate::io::ext_repr::ExtManifest;
use crate::manifest::CargoManifest;

/// Imports a manifest into the library, validating every cargo item
pub fn import(ext_manifest: &ExtManifest) -> Result<CargoManifest> {
    ensure!(
        ext_manifest.capacity.is_finite(),
        "capacity must be a finite number, got {}",
        ext_manifest.capacity
    );

    let mut manifest = CargoManifest::new(ext_manifest.capacity);
    for (i, ext_item) in ext_manifest.cargo.iter().enumerate() {
        let added = match ext_item.color {
            Some(color) => manifest.add_with_color(
                ext_item.name.as_str(),
                ext_item.weight,
                ext_item.profit,
                color,
            ),
            None => manifest.add(ext_item.name.as_str(), ext_item.weight, ext_item.profit),
        };
        added.with_context(|| format!("invalid cargo at position {i}"))?;
    }

    info!(
        "[IMPORT] manifest{} with {} cargo items and capacity {}",
        ext_manifest
            .name
            .as_ref()
            .map(|n| format!(" '{n}'"))
            .unwrap_or_default(),
        manifest.len(),
        manifest.capacity()
    );

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ext_repr::ExtCargoItem;
    use crate::util::{Color, PALETTE};

    fn ext_item(name: &str, weight: f64, profit: f64, color: Option<Color>) -> ExtCargoItem {
        ExtCargoItem {
            name: name.into(),
            weight,
            profit,
            color,
        }
    }

    #[test]
    fn missing_colours_come_from_the_palette() {
        let ext = ExtManifest {
            name: None,
            capacity: 20.0,
            cargo: vec![
                ext_item("Tea", 2.0, 8.0, Some(Color(0, 0, 0))),
                ext_item("Salt", 3.0, 3.0, None),
            ],
        };
        let manifest = import(&ext).unwrap();
        assert_eq!(manifest.items()[0].color(), Color(0, 0, 0));
        assert_eq!(manifest.items()[1].color(), PALETTE[1]);
    }

    #[test]
    fn invalid_cargo_is_reported_with_its_position() {
        let ext = ExtManifest {
            name: Some("broken".into()),
            capacity: 20.0,
            cargo: vec![ext_item("Tea", 2.0, 8.0, None), ext_item("Air", -1.0, 3.0, None)],
        };
        let err = import(&ext).unwrap_err();
        assert!(format!("{err:#}").contains("position 1"));
    }

    #[test]
    fn non_finite_capacity_is_rejected() {
        let ext = ExtManifest {
            name: None,
            capacity: f64::NAN,
            cargo: vec![],
        };
        assert!(import(&ext).is_err());
    }
}
