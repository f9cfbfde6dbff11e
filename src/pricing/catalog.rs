//! Fixed service catalog.
//!
//! The packages, add-ons, size classes and condition levels the admin
//! console lets a caller pick from. The multipliers and package prices
//! here are the closed sets quote validation checks against; callers
//! resolve names to amounts before asking for a quote.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A detail package with a fixed price and base labor time.
#[derive(Debug, Clone, Copy)]
pub struct Package {
    pub name: &'static str,
    pub price: i64,
    pub base_time_hours: Decimal,
}

/// Optional extra with a fixed price.
#[derive(Debug, Clone, Copy)]
pub struct AddOn {
    pub name: &'static str,
    pub price: i64,
}

/// Vehicle size class and its price/time multiplier.
#[derive(Debug, Clone, Copy)]
pub struct SizeClass {
    pub label: &'static str,
    pub multiplier: Decimal,
}

/// Vehicle condition level and its price/time multiplier.
#[derive(Debug, Clone, Copy)]
pub struct ConditionLevel {
    pub label: &'static str,
    pub multiplier: Decimal,
}

pub const PACKAGES: [Package; 3] = [
    Package {
        name: "The Base",
        price: 149,
        base_time_hours: dec!(1.5),
    },
    Package {
        name: "The Standard",
        price: 249,
        base_time_hours: dec!(3.0),
    },
    Package {
        name: "The Works",
        price: 399,
        base_time_hours: dec!(5.0),
    },
];

pub const ADD_ONS: [AddOn; 6] = [
    AddOn {
        name: "Wax",
        price: 40,
    },
    AddOn {
        name: "Engine Bay",
        price: 50,
    },
    AddOn {
        name: "Ozone",
        price: 30,
    },
    AddOn {
        name: "Headlight Restoration",
        price: 80,
    },
    AddOn {
        name: "Pet Hair (Light)",
        price: 29,
    },
    AddOn {
        name: "Pet Hair (Heavy)",
        price: 69,
    },
];

pub const SIZE_CLASSES: [SizeClass; 4] = [
    SizeClass {
        label: "Coupe / Compact",
        multiplier: dec!(0.9),
    },
    SizeClass {
        label: "Sedan / Midsize",
        multiplier: dec!(1.0),
    },
    SizeClass {
        label: "SUV / Truck",
        multiplier: dec!(1.2),
    },
    SizeClass {
        label: "XL / Oversize",
        multiplier: dec!(1.4),
    },
];

pub const CONDITION_LEVELS: [ConditionLevel; 3] = [
    ConditionLevel {
        label: "Excellent",
        multiplier: dec!(0.9),
    },
    ConditionLevel {
        label: "Normal",
        multiplier: dec!(1.0),
    },
    ConditionLevel {
        label: "Dirty / Heavy Use",
        multiplier: dec!(1.2),
    },
];

/// Base labor time for a base price that matches a package price exactly.
///
/// Lookup is by value, not by input path: a custom quote that happens to
/// equal a package price reuses that package's base time.
pub fn base_time_for_price(base_price: Decimal) -> Option<Decimal> {
    PACKAGES
        .iter()
        .find(|package| Decimal::from(package.price) == base_price)
        .map(|package| package.base_time_hours)
}

pub fn is_package_price(amount: Decimal) -> bool {
    PACKAGES
        .iter()
        .any(|package| Decimal::from(package.price) == amount)
}

pub fn is_size_multiplier(multiplier: Decimal) -> bool {
    SIZE_CLASSES.iter().any(|size| size.multiplier == multiplier)
}

pub fn is_condition_multiplier(multiplier: Decimal) -> bool {
    CONDITION_LEVELS
        .iter()
        .any(|level| level.multiplier == multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_time_lookup_by_exact_price() {
        assert_eq!(base_time_for_price(dec!(149)), Some(dec!(1.5)));
        assert_eq!(base_time_for_price(dec!(249)), Some(dec!(3.0)));
        assert_eq!(base_time_for_price(dec!(399)), Some(dec!(5.0)));
        assert_eq!(base_time_for_price(dec!(185)), None);
        assert_eq!(base_time_for_price(dec!(500)), None);
    }

    #[test]
    fn test_base_time_lookup_ignores_scale() {
        // 149.00 from a custom quote is the same price as the package.
        assert_eq!(base_time_for_price(dec!(149.00)), Some(dec!(1.5)));
    }

    #[test]
    fn test_multiplier_membership() {
        assert!(is_size_multiplier(dec!(0.9)));
        assert!(is_size_multiplier(dec!(1.4)));
        assert!(!is_size_multiplier(dec!(1.1)));

        assert!(is_condition_multiplier(dec!(1.2)));
        assert!(!is_condition_multiplier(dec!(1.4)));
    }

    #[test]
    fn test_package_price_membership() {
        assert!(is_package_price(dec!(249)));
        assert!(!is_package_price(dec!(250)));
    }
}
