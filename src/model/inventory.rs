//! Catalog records that order lines can be looked up from.
//!
//! # Resource Framework
//! [`InventoryItem`] implements [`ResourceEntity`](resource_framework::ResourceEntity) in
//! [`inventory_actor`](crate::inventory_actor). The catalog is read-only: it is seeded
//! from [`sample_catalog`] and never created, updated or deleted through the actor.
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for catalog items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ItemId)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: ItemId,
    pub plnt: String,
    pub plant_name: String,
    #[serde(rename = "materialCI")]
    pub material_ci: String,
    pub old_material_no: String,
    pub material_description: String,
    pub s_loc: String,
    pub description: String,
    pub total_stock: u32,
    pub current_stock: u32,
    pub minimum_stock: u32,
}

impl InventoryItem {
    pub fn is_below_minimum(&self) -> bool {
        self.current_stock < self.minimum_stock
    }

    /// Case-insensitive substring match on the material description.
    pub fn matches_term(&self, term: &str) -> bool {
        self.material_description
            .to_lowercase()
            .contains(&term.trim().to_lowercase())
    }
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: u32,
    plnt: &str,
    plant_name: &str,
    material_ci: &str,
    old_material_no: &str,
    material_description: &str,
    s_loc: &str,
    description: &str,
    stock: (u32, u32, u32),
) -> InventoryItem {
    let (total_stock, current_stock, minimum_stock) = stock;
    InventoryItem {
        id: ItemId(id),
        plnt: plnt.into(),
        plant_name: plant_name.into(),
        material_ci: material_ci.into(),
        old_material_no: old_material_no.into(),
        material_description: material_description.into(),
        s_loc: s_loc.into(),
        description: description.into(),
        total_stock,
        current_stock,
        minimum_stock,
    }
}

/// The built-in demonstration catalog: five tyre SKUs across three plants, in id order.
pub fn sample_catalog() -> Vec<InventoryItem> {
    vec![
        item(
            1,
            "A001",
            "Main Distribution Center",
            "T-2055516-BFG",
            "BFG-205",
            "BF Goodrich 205/55/R16 All-Terrain",
            "WH-01",
            "Premium all-terrain tire",
            (200, 143, 50),
        ),
        item(
            2,
            "A001",
            "Main Distribution Center",
            "T-2557016-MIC",
            "MIC-255",
            "Michelin 255/70/R16 Highway Terrain",
            "WH-02",
            "Premium highway terrain tire",
            (150, 97, 30),
        ),
        item(
            3,
            "A002",
            "South Region Hub",
            "T-2157016-PIR",
            "PIR-215",
            "Pirelli 215/70/R16 Sport",
            "WH-03",
            "Sport performance tire",
            (120, 65, 40),
        ),
        item(
            4,
            "A002",
            "South Region Hub",
            "T-1957516-BST",
            "BST-195",
            "Bridgestone 195/75/R16 All Season",
            "WH-01",
            "All-season tire for passenger vehicles",
            (250, 212, 60),
        ),
        item(
            5,
            "A003",
            "North Distribution Hub",
            "T-2257517-CNT",
            "CNT-225",
            "Continental 225/75/R17 Winter",
            "WH-02",
            "Winter tire with advanced grip",
            (180, 86, 45),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_is_in_id_order() {
        let ids: Vec<u32> = sample_catalog().iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn serializes_with_catalog_field_names() {
        let json = serde_json::to_value(&sample_catalog()[0]).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["materialCI"], "T-2055516-BFG");
        assert_eq!(json["plantName"], "Main Distribution Center");
        assert_eq!(json["sLoc"], "WH-01");
        assert_eq!(json["minimumStock"], 50);
    }

    #[test]
    fn term_matching_ignores_case() {
        let michelin = &sample_catalog()[1];
        assert!(michelin.matches_term("HIGHWAY"));
        assert!(michelin.matches_term(""));
        assert!(!michelin.matches_term("winter"));
    }

    #[test]
    fn below_minimum() {
        let mut item = sample_catalog().remove(0);
        assert!(!item.is_below_minimum());
        item.current_stock = 10;
        assert!(item.is_below_minimum());
    }
}
