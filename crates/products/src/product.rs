use core::fmt;
use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, Entity, ProductId, ValueObject};

/// Expiry date of a perishable product (calendar date, no time zone).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpiryDate(NaiveDate);

impl ExpiryDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl ValueObject for ExpiryDate {}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for ExpiryDate {
    type Err = DomainError;

    /// Parses ISO-8601 `yyyy-mm-dd`: four-digit year, zero-padded month and day.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if !is_iso_date_shape(input) {
            return Err(DomainError::validation(format!(
                "expiry date '{input}': expected yyyy-mm-dd"
            )));
        }
        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| DomainError::validation(format!("expiry date '{input}': {e}")))
    }
}

/// chrono's `%Y-%m-%d` also takes signs and unpadded fields; only the exact
/// `dddd-dd-dd` layout gets through here.
fn is_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl From<NaiveDate> for ExpiryDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

/// Warranty period of a non-perishable product, in whole months.
///
/// Not validated: zero and negative periods are stored as given.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarrantyPeriod(i64);

impl WarrantyPeriod {
    pub fn months(months: i64) -> Self {
        Self(months)
    }

    pub fn in_months(&self) -> i64 {
        self.0
    }
}

impl ValueObject for WarrantyPeriod {}

impl fmt::Display for WarrantyPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months", self.0)
    }
}

/// Variant-specific part of a product. Fixed at creation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProductKind {
    Perishable { expiry_date: ExpiryDate },
    NonPerishable { warranty: WarrantyPeriod },
}

impl ProductKind {
    pub fn expiry_date(&self) -> Option<ExpiryDate> {
        match self {
            ProductKind::Perishable { expiry_date } => Some(*expiry_date),
            ProductKind::NonPerishable { .. } => None,
        }
    }

    pub fn warranty(&self) -> Option<WarrantyPeriod> {
        match self {
            ProductKind::Perishable { .. } => None,
            ProductKind::NonPerishable { warranty } => Some(*warranty),
        }
    }
}

/// Catalog item.
///
/// Only name, price and quantity are mutable after construction. No field is
/// validated: negative prices and quantities are stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    quantity_in_stock: i64,
    kind: ProductKind,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        quantity_in_stock: i64,
        kind: ProductKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity_in_stock,
            kind,
        }
    }

    pub fn perishable(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        quantity_in_stock: i64,
        expiry_date: ExpiryDate,
    ) -> Self {
        Self::new(
            id,
            name,
            price,
            quantity_in_stock,
            ProductKind::Perishable { expiry_date },
        )
    }

    pub fn non_perishable(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        quantity_in_stock: i64,
        warranty: WarrantyPeriod,
    ) -> Self {
        Self::new(
            id,
            name,
            price,
            quantity_in_stock,
            ProductKind::NonPerishable { warranty },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity_in_stock(&self) -> i64 {
        self.quantity_in_stock
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    pub fn is_perishable(&self) -> bool {
        matches!(self.kind, ProductKind::Perishable { .. })
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn set_quantity_in_stock(&mut self, quantity: i64) {
        self.quantity_in_stock = quantity;
    }

    /// Add `delta` (possibly negative) to the stock count.
    ///
    /// There is no floor. Overflow wraps, so applying `delta` and then
    /// `-delta` always restores the previous quantity.
    pub fn adjust_stock(&mut self, delta: i64) -> i64 {
        self.quantity_in_stock = self.quantity_in_stock.wrapping_add(delta);
        self.quantity_in_stock
    }

    /// Human-readable one-line description: base fields, then the variant field.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product ID: {}, Name: {}, Price: {}, Quantity in stock: {}",
            self.id,
            self.name,
            format_price(self.price),
            self.quantity_in_stock
        )?;
        match &self.kind {
            ProductKind::Perishable { expiry_date } => write!(f, ", Expiry Date: {expiry_date}"),
            ProductKind::NonPerishable { warranty } => write!(f, ", Warranty Period: {warranty}"),
        }
    }
}

/// Render a price the way the catalog has always printed it.
///
/// Integral values keep one decimal (`10.0`), other values use the shortest
/// round-trip form (`2.5`, `19.99`). Magnitudes outside `[1e-3, 1e7)` switch to
/// scientific notation with an upper-case exponent (`1.0E7`).
fn format_price(price: f64) -> String {
    if price.is_nan() {
        return "NaN".to_string();
    }
    if price.is_infinite() {
        let rendered = if price > 0.0 { "Infinity" } else { "-Infinity" };
        return rendered.to_string();
    }

    let magnitude = price.abs();
    if magnitude != 0.0 && !(1e-3..1e7).contains(&magnitude) {
        let rendered = format!("{price:e}");
        return match rendered.split_once('e') {
            Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
            Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
            None => rendered,
        };
    }

    if price.fract() == 0.0 {
        format!("{price:.1}")
    } else {
        format!("{price}")
    }
}
