//! Canonical statement fields and their groups.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Statement section a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldGroup {
    /// Revenue lines.
    Revenue,
    /// Cost of goods sold lines.
    Cost,
    /// Operating expense lines.
    Expense,
}

impl FieldGroup {
    /// Groups in reconciliation order.
    pub const ALL: [Self; 3] = [Self::Revenue, Self::Cost, Self::Expense];
}

/// A canonical income statement field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementField {
    /// Total operating revenue.
    TotalRevenue,
    /// Food sales.
    FoodRevenue,
    /// Beverage sales.
    BeverageRevenue,
    /// Dessert sales.
    DessertRevenue,
    /// Other revenue.
    OtherRevenue,
    /// Customer discounts.
    Discounts,
    /// Total cost of goods sold.
    TotalCogs,
    /// Food cost.
    FoodCost,
    /// Beverage cost.
    BeverageCost,
    /// Dessert cost.
    DessertCost,
    /// Other direct cost.
    OtherCost,
    /// Total operating expenses.
    TotalOperatingExpenses,
    /// Labor cost.
    LaborCost,
    /// Wages.
    Wages,
    /// Benefits and insurance.
    Benefits,
    /// Rent.
    RentExpense,
    /// Storefront rent.
    StorefrontRent,
    /// Dormitory rent.
    DormitoryRent,
    /// Utilities.
    Utilities,
    /// Marketing.
    Marketing,
    /// Other operating expenses.
    OtherExpenses,
}

impl StatementField {
    /// Every field, in statement order.
    pub const ALL: [Self; 21] = [
        Self::TotalRevenue,
        Self::FoodRevenue,
        Self::BeverageRevenue,
        Self::DessertRevenue,
        Self::OtherRevenue,
        Self::Discounts,
        Self::TotalCogs,
        Self::FoodCost,
        Self::BeverageCost,
        Self::DessertCost,
        Self::OtherCost,
        Self::TotalOperatingExpenses,
        Self::LaborCost,
        Self::Wages,
        Self::Benefits,
        Self::RentExpense,
        Self::StorefrontRent,
        Self::DormitoryRent,
        Self::Utilities,
        Self::Marketing,
        Self::OtherExpenses,
    ];

    /// Canonical snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TotalRevenue => "total_revenue",
            Self::FoodRevenue => "food_revenue",
            Self::BeverageRevenue => "beverage_revenue",
            Self::DessertRevenue => "dessert_revenue",
            Self::OtherRevenue => "other_revenue",
            Self::Discounts => "discounts",
            Self::TotalCogs => "total_cogs",
            Self::FoodCost => "food_cost",
            Self::BeverageCost => "beverage_cost",
            Self::DessertCost => "dessert_cost",
            Self::OtherCost => "other_cost",
            Self::TotalOperatingExpenses => "total_operating_expenses",
            Self::LaborCost => "labor_cost",
            Self::Wages => "wages",
            Self::Benefits => "benefits",
            Self::RentExpense => "rent_expense",
            Self::StorefrontRent => "storefront_rent",
            Self::DormitoryRent => "dormitory_rent",
            Self::Utilities => "utilities",
            Self::Marketing => "marketing",
            Self::OtherExpenses => "other_expenses",
        }
    }

    /// Group the field belongs to.
    #[must_use]
    pub const fn group(self) -> FieldGroup {
        match self {
            Self::TotalRevenue
            | Self::FoodRevenue
            | Self::BeverageRevenue
            | Self::DessertRevenue
            | Self::OtherRevenue
            | Self::Discounts => FieldGroup::Revenue,
            Self::TotalCogs
            | Self::FoodCost
            | Self::BeverageCost
            | Self::DessertCost
            | Self::OtherCost => FieldGroup::Cost,
            Self::TotalOperatingExpenses
            | Self::LaborCost
            | Self::Wages
            | Self::Benefits
            | Self::RentExpense
            | Self::StorefrontRent
            | Self::DormitoryRent
            | Self::Utilities
            | Self::Marketing
            | Self::OtherExpenses => FieldGroup::Expense,
        }
    }
}

impl std::fmt::Display for StatementField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatementField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let term = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == term)
            .ok_or_else(|| format!("Unrecognized term: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trips_every_field() {
        for field in StatementField::ALL {
            assert_eq!(StatementField::from_str(field.as_str()), Ok(field));
        }
    }

    #[test]
    fn test_from_str_rejects_raw_labels() {
        assert!(StatementField::from_str("营业收入").is_err());
        assert!(StatementField::from_str("gross_profit").is_err());
        assert!(StatementField::from_str("").is_err());
    }

    #[test]
    fn test_groups() {
        assert_eq!(StatementField::Discounts.group(), FieldGroup::Revenue);
        assert_eq!(StatementField::OtherCost.group(), FieldGroup::Cost);
        assert_eq!(StatementField::DormitoryRent.group(), FieldGroup::Expense);

        let revenue_fields = StatementField::ALL
            .iter()
            .filter(|f| f.group() == FieldGroup::Revenue)
            .count();
        assert_eq!(revenue_fields, 6);
    }

    #[test]
    fn test_serde_name_matches_as_str() {
        let json = serde_json::to_string(&StatementField::TotalOperatingExpenses).unwrap();
        assert_eq!(json, "\"total_operating_expenses\"");
    }
}
