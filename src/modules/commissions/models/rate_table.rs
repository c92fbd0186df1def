// Commission rate tables
//
// Every amount the engine pays comes from a `CommissionRates` value. The
// default reproduces the rates the dashboards were built against; a YAML file
// can replace them wholesale at startup, and tests construct their own.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use super::sale::{Package, SaleType};
use super::tier::Tier;
use crate::core::{AppError, Result};

/// Fixed upfront commission per eligible sale, by sale type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpfrontRates {
    pub full_setup: Decimal,
    pub decoder_only: Decimal,
    pub digital_virtual_stock: Decimal,
}

impl Default for UpfrontRates {
    fn default() -> Self {
        Self {
            full_setup: Decimal::from(5_000),
            decoder_only: Decimal::from(2_000),
            digital_virtual_stock: Decimal::ZERO,
        }
    }
}

/// Commission paid for selling a subscription package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRate {
    pub package: Package,
    pub amount: Decimal,
}

impl PackageRate {
    pub fn new(package: Package, amount: i64) -> Self {
        Self {
            package,
            amount: Decimal::from(amount),
        }
    }
}

/// Monthly bonus band: `tier` reps with `min_sales..=max_sales` sales earn `bonus_amount`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusBand {
    pub tier: Tier,
    pub min_sales: u32,
    pub max_sales: u32,
    pub bonus_amount: Decimal,
}

impl BonusBand {
    pub fn new(tier: Tier, min_sales: u32, max_sales: u32, bonus_amount: i64) -> Self {
        Self {
            tier,
            min_sales,
            max_sales,
            bonus_amount: Decimal::from(bonus_amount),
        }
    }

    pub fn matches(&self, tier: Tier, monthly_sales_count: u32) -> bool {
        self.tier == tier
            && monthly_sales_count >= self.min_sales
            && monthly_sales_count <= self.max_sales
    }
}

/// Complete, immutable set of commission rates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionRates {
    pub upfront: UpfrontRates,

    /// Flat amount for every eligible sale, regardless of type
    pub activation: Decimal,

    /// Package table; names are compared upper-cased
    pub packages: Vec<PackageRate>,

    /// Ordered band table. Bands may overlap; the first match wins.
    pub bonus_bands: Vec<BonusBand>,
}

impl Default for CommissionRates {
    fn default() -> Self {
        Self {
            upfront: UpfrontRates::default(),
            activation: Decimal::from(1_500),
            packages: vec![
                PackageRate::new(Package::Premium, 65_000),
                PackageRate::new(Package::CompactPlus, 35_000),
                PackageRate::new(Package::Compact, 17_000),
                PackageRate::new(Package::Shangwe, 6_000),
                PackageRate::new(Package::Access, 2_750),
                PackageRate::new(Package::Bomba, 2_750),
            ],
            bonus_bands: vec![
                BonusBand::new(Tier::Shaba, 5, 9, 50_000),
                BonusBand::new(Tier::Shaba, 10, 14, 115_000),
                BonusBand::new(Tier::Fedha, 15, 19, 200_000),
                BonusBand::new(Tier::Dhahabu, 20, 24, 300_000),
                // Shadowed by the band above; kept so the table matches the
                // one the dashboards have always shipped.
                BonusBand::new(Tier::Dhahabu, 20, 24, 350_000),
                BonusBand::new(Tier::Dhahabu, 25, 29, 450_000),
                BonusBand::new(Tier::Dhahabu, 30, u32::MAX, 600_000),
                BonusBand::new(Tier::Tanzanite, 20, 29, 500_000),
                BonusBand::new(Tier::Tanzanite, 30, u32::MAX, 750_000),
            ],
        }
    }
}

impl CommissionRates {
    /// Parse a rate table from YAML and validate it
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let rates: CommissionRates = serde_yaml::from_str(yaml)?;
        rates.validate()?;
        Ok(rates)
    }

    /// Load a rate table file in the `from_yaml_str` format
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let rates = Self::from_yaml_str(&contents)?;

        info!(
            path = %path.display(),
            packages = rates.packages.len(),
            bonus_bands = rates.bonus_bands.len(),
            "Loaded commission rate table"
        );

        Ok(rates)
    }

    /// Reject tables that could produce negative or nonsensical amounts
    pub fn validate(&self) -> Result<()> {
        let upfront = [
            ("full_setup", self.upfront.full_setup),
            ("decoder_only", self.upfront.decoder_only),
            ("digital_virtual_stock", self.upfront.digital_virtual_stock),
        ];
        for (name, amount) in upfront {
            if amount < Decimal::ZERO {
                return Err(AppError::configuration(format!(
                    "Upfront rate {} cannot be negative",
                    name
                )));
            }
        }

        if self.activation < Decimal::ZERO {
            return Err(AppError::configuration(
                "Activation rate cannot be negative",
            ));
        }

        for rate in &self.packages {
            if rate.amount < Decimal::ZERO {
                return Err(AppError::configuration(format!(
                    "Package rate for {} cannot be negative",
                    rate.package
                )));
            }
        }

        for band in &self.bonus_bands {
            if band.min_sales > band.max_sales {
                return Err(AppError::configuration(format!(
                    "Bonus band for {} has min_sales {} above max_sales {}",
                    band.tier, band.min_sales, band.max_sales
                )));
            }
            if band.bonus_amount < Decimal::ZERO {
                return Err(AppError::configuration(format!(
                    "Bonus amount for {} {}-{} cannot be negative",
                    band.tier, band.min_sales, band.max_sales
                )));
            }
        }

        Ok(())
    }

    /// Upfront commission for a sale type; unknown types earn nothing
    pub fn upfront_for(&self, sale_type: SaleType) -> Decimal {
        match sale_type {
            SaleType::FullSetup => self.upfront.full_setup,
            SaleType::DecoderOnly => self.upfront.decoder_only,
            SaleType::DigitalVirtualStock => self.upfront.digital_virtual_stock,
            SaleType::Unknown => Decimal::ZERO,
        }
    }

    /// Package commission; packages missing from the table earn nothing
    pub fn package_rate(&self, package: &Package) -> Decimal {
        self.packages
            .iter()
            .find(|rate| rate.package.name() == package.name())
            .map(|rate| rate.amount)
            .unwrap_or(Decimal::ZERO)
    }
}
