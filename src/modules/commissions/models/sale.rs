// Sale record as supplied by the dashboard's data store.
//
// The engine never loads sales itself; callers resolve the row and pass it in
// as a `SaleInput`. Enum-like columns are parsed into closed types here so the
// calculators can match on them exhaustively.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of stock movement behind a sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum SaleType {
    /// Full setup (decoder, dish and installation)
    #[serde(rename = "FS")]
    FullSetup,

    /// Decoder only
    #[serde(rename = "DO")]
    DecoderOnly,

    /// Digital/virtual stock, no physical decoder
    #[serde(rename = "DVS")]
    DigitalVirtualStock,

    /// Any sale type the engine does not recognise; earns no upfront commission
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl SaleType {
    /// Parse a stored sale type code. Codes match exactly; anything else,
    /// including a differently-cased code, is `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value {
            "FS" => SaleType::FullSetup,
            "DO" => SaleType::DecoderOnly,
            "DVS" => SaleType::DigitalVirtualStock,
            _ => SaleType::Unknown,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SaleType::FullSetup => "FS",
            SaleType::DecoderOnly => "DO",
            SaleType::DigitalVirtualStock => "DVS",
            SaleType::Unknown => "UNKNOWN",
        }
    }
}

impl From<String> for SaleType {
    fn from(value: String) -> Self {
        SaleType::parse(&value)
    }
}

impl From<&str> for SaleType {
    fn from(value: &str) -> Self {
        SaleType::parse(value)
    }
}

impl fmt::Display for SaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Whether the stock behind a sale has been paid for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Paid => write!(f, "paid"),
            PaymentStatus::Unpaid => write!(f, "unpaid"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "paid" => Ok(PaymentStatus::Paid),
            "unpaid" => Ok(PaymentStatus::Unpaid),
            _ => Err(format!("Invalid payment status: {}", s)),
        }
    }
}

/// Subscription package sold alongside a sale
///
/// Names are matched upper-cased. Packages missing from the built-in list are
/// kept as `Other` so a rate table loaded from configuration can still price
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Package {
    Premium,
    CompactPlus,
    Compact,
    Shangwe,
    Access,
    Bomba,
    Other(String),
}

impl Package {
    /// Normalise a stored package name; empty names mean no package
    pub fn from_name(name: &str) -> Option<Self> {
        if name.is_empty() {
            return None;
        }

        let package = match name.to_uppercase().as_str() {
            "PREMIUM" => Package::Premium,
            "COMPACT PLUS" => Package::CompactPlus,
            "COMPACT" => Package::Compact,
            "SHANGWE" => Package::Shangwe,
            "ACCESS" => Package::Access,
            "BOMBA" => Package::Bomba,
            other => Package::Other(other.to_string()),
        };

        Some(package)
    }

    pub fn name(&self) -> &str {
        match self {
            Package::Premium => "PREMIUM",
            Package::CompactPlus => "COMPACT PLUS",
            Package::Compact => "COMPACT",
            Package::Shangwe => "SHANGWE",
            Package::Access => "ACCESS",
            Package::Bomba => "BOMBA",
            Package::Other(name) => name,
        }
    }
}

impl From<String> for Package {
    fn from(value: String) -> Self {
        let upper = value.to_uppercase();
        Package::from_name(&upper).unwrap_or(Package::Other(upper))
    }
}

impl From<Package> for String {
    fn from(package: Package) -> Self {
        package.name().to_string()
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One sale as handed to the commission engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleInput {
    /// Caller-assigned identifier, echoed back untouched
    #[serde(default)]
    pub sale_id: String,

    pub sale_type: SaleType,

    /// Raw package name as stored; `None` or `""` means no package selected
    #[serde(default)]
    pub package_name: Option<String>,

    pub payment_status: PaymentStatus,

    /// `None` while the sale awaits an admin decision
    #[serde(default)]
    pub admin_approved: Option<bool>,

    /// Stock batch reference. Accepted for completeness; no commission rule
    /// reads it.
    #[serde(default)]
    pub stock_id: Option<String>,
}

impl SaleInput {
    pub fn new(
        sale_id: impl Into<String>,
        sale_type: SaleType,
        package_name: Option<&str>,
        payment_status: PaymentStatus,
        admin_approved: Option<bool>,
    ) -> Self {
        Self {
            sale_id: sale_id.into(),
            sale_type,
            package_name: package_name.map(str::to_string),
            payment_status,
            admin_approved,
            stock_id: None,
        }
    }

    pub fn with_stock_id(mut self, stock_id: impl Into<String>) -> Self {
        self.stock_id = Some(stock_id.into());
        self
    }

    /// Normalised package, if one was selected
    pub fn package(&self) -> Option<Package> {
        self.package_name.as_deref().and_then(Package::from_name)
    }
}
