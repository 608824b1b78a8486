//! Unit-economics calculators
//!
//! - [`calculate_profit_margin`]: profit and margin from per-unit costs,
//!   returns and fixed costs
//! - [`quote_price`]: selling price needed to hit a target margin
//! - [`quote_bulk_order`]: discounted bulk purchase cost and savings
//!
//! All three validate their inputs and return `Error::InvalidData` instead of
//! dividing by zero. Ratios that have no meaningful value (margin on zero
//! revenue, return rate with nothing sold) are `None`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// One order: unit price after discounts and quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub price: f64,
    pub quantity: f64,
}

impl OrderLine {
    pub fn revenue(&self) -> f64 {
        self.price * self.quantity
    }
}

/// Parses `PRICExQTY`, e.g. `24.99x3`
impl std::str::FromStr for OrderLine {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (price, quantity) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("Invalid order '{}': expected PRICExQTY", s))?;
        let price: f64 = price
            .trim()
            .trim_start_matches('$')
            .parse()
            .map_err(|_| format!("Invalid price in order '{}'", s))?;
        let quantity: f64 = quantity
            .trim()
            .parse()
            .map_err(|_| format!("Invalid quantity in order '{}'", s))?;
        Ok(Self { price, quantity })
    }
}

/// Inputs for a profit margin calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfitMarginInput {
    /// Average price after discounts; used for revenue when `orders` is empty
    pub selling_price: f64,
    /// Units sold, before returns
    pub units_sold: u64,
    pub units_returned: u64,
    pub product_cost_per_unit: f64,
    pub packaging_cost_per_unit: f64,
    pub confirmation_fee_per_unit: f64,
    pub marketing_cost_per_unit: f64,
    /// Handling cost per returned unit
    pub return_cost_per_unit: f64,
    /// Fixed costs for the period, allocated once
    pub fixed_cost_total: f64,
    #[serde(default)]
    pub orders: Vec<OrderLine>,
}

impl ProfitMarginInput {
    /// Product, packaging, confirmation and marketing cost of one unit
    pub fn unit_variable_cost(&self) -> f64 {
        self.product_cost_per_unit
            + self.packaging_cost_per_unit
            + self.confirmation_fee_per_unit
            + self.marketing_cost_per_unit
    }

    /// Sum of the order lines, or `selling_price × units_sold` without any
    pub fn revenue(&self) -> f64 {
        if self.orders.is_empty() {
            self.selling_price * self.units_sold as f64
        } else {
            self.orders.iter().map(OrderLine::revenue).sum()
        }
    }

    fn validate(&self) -> Result<()> {
        let amounts = [
            ("selling_price", self.selling_price),
            ("product_cost_per_unit", self.product_cost_per_unit),
            ("packaging_cost_per_unit", self.packaging_cost_per_unit),
            ("confirmation_fee_per_unit", self.confirmation_fee_per_unit),
            ("marketing_cost_per_unit", self.marketing_cost_per_unit),
            ("return_cost_per_unit", self.return_cost_per_unit),
            ("fixed_cost_total", self.fixed_cost_total),
        ];
        for (name, value) in amounts {
            ensure_non_negative(name, value)?;
        }
        for (i, order) in self.orders.iter().enumerate() {
            ensure_non_negative(&format!("orders[{}].price", i), order.price)?;
            ensure_non_negative(&format!("orders[{}].quantity", i), order.quantity)?;
        }
        Ok(())
    }
}

/// Result of a profit margin calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitMarginReport {
    pub total_revenue: f64,
    pub unit_variable_cost: f64,
    /// Variable cost over sold and returned units
    pub total_product_cost: f64,
    pub total_return_cost: f64,
    pub total_costs: f64,
    pub total_profit: f64,
    /// Percent of revenue; `None` without revenue
    pub profit_margin: Option<f64>,
    /// `None` when nothing was sold
    pub fixed_cost_per_unit: Option<f64>,
    /// Percent of sold-plus-returned units that came back; `None` when nothing was sold
    pub return_rate: Option<f64>,
}

/// Profit, margin and return rate from unit economics
pub fn calculate_profit_margin(input: &ProfitMarginInput) -> Result<ProfitMarginReport> {
    input.validate()?;

    let total_revenue = input.revenue();
    let unit_variable_cost = input.unit_variable_cost();
    let handled_units = (input.units_sold + input.units_returned) as f64;

    // Returned units were produced and shipped too
    let total_product_cost = unit_variable_cost * handled_units;
    let total_return_cost = input.return_cost_per_unit * input.units_returned as f64;
    let total_costs = total_product_cost + input.fixed_cost_total + total_return_cost;
    let total_profit = total_revenue - total_costs;

    let profit_margin = (total_revenue > 0.0).then(|| total_profit / total_revenue * 100.0);
    let sold = input.units_sold > 0;
    let fixed_cost_per_unit = sold.then(|| input.fixed_cost_total / input.units_sold as f64);
    let return_rate = sold.then(|| input.units_returned as f64 / handled_units * 100.0);

    debug!(
        revenue = total_revenue,
        costs = total_costs,
        profit = total_profit,
        "Calculated profit margin"
    );

    Ok(ProfitMarginReport {
        total_revenue,
        unit_variable_cost,
        total_product_cost,
        total_return_cost,
        total_costs,
        total_profit,
        profit_margin,
        fixed_cost_per_unit,
        return_rate,
    })
}

/// Per-unit costs that a selling price has to cover
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitCosts {
    pub product: f64,
    pub shipping: f64,
    pub marketing: f64,
}

impl UnitCosts {
    pub fn total(&self) -> f64 {
        self.product + self.shipping + self.marketing
    }
}

/// Selling price for a target margin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub total_cost: f64,
    /// Requested margin, percent of the selling price
    pub desired_margin: f64,
    /// Rounded to cents
    pub selling_price: f64,
    /// Margin achieved at the rounded price
    pub actual_margin: f64,
}

/// Price so that `(price - cost) / price` equals `margin_percent`
///
/// `price = cost / (1 - margin)`; a margin of 100% or more has no price.
pub fn quote_price(costs: &UnitCosts, margin_percent: f64) -> Result<PriceQuote> {
    ensure_non_negative("product cost", costs.product)?;
    ensure_non_negative("shipping cost", costs.shipping)?;
    ensure_non_negative("marketing cost", costs.marketing)?;
    if !(0.0..100.0).contains(&margin_percent) {
        return Err(Error::InvalidData(format!(
            "Margin must be at least 0% and below 100% (got {}%)",
            margin_percent
        )));
    }

    let total_cost = costs.total();
    let selling_price = round_to(total_cost / (1.0 - margin_percent / 100.0), 2);
    let actual_margin = if selling_price > 0.0 {
        (selling_price - total_cost) / selling_price * 100.0
    } else {
        0.0
    };

    Ok(PriceQuote {
        total_cost,
        desired_margin: margin_percent,
        selling_price,
        actual_margin,
    })
}

/// A bulk purchase at a discount
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulkOrder {
    pub quantity: u64,
    /// Regular price per unit
    pub unit_price: f64,
    /// Discount off the regular total, in percent
    pub discount_percent: f64,
    /// Extra fixed costs of the order (shipping, handling)
    pub additional_costs: f64,
}

/// Cost breakdown of a bulk purchase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulkOrderQuote {
    /// Quantity × regular unit price
    pub regular_total: f64,
    /// Discounted total plus additional costs
    pub total_cost: f64,
    pub unit_cost: f64,
    /// Discount amount; additional costs are not netted against it
    pub savings: f64,
    /// Savings as a percent of the regular total; `None` when that is 0
    pub savings_percent: Option<f64>,
}

pub fn quote_bulk_order(order: &BulkOrder) -> Result<BulkOrderQuote> {
    if order.quantity == 0 {
        return Err(Error::InvalidData(
            "Bulk order quantity must be at least 1".into(),
        ));
    }
    ensure_non_negative("unit price", order.unit_price)?;
    ensure_non_negative("additional costs", order.additional_costs)?;
    if !(0.0..=100.0).contains(&order.discount_percent) {
        return Err(Error::InvalidData(format!(
            "Discount must be between 0% and 100% (got {}%)",
            order.discount_percent
        )));
    }

    let discount = order.discount_percent / 100.0;
    let regular_total = order.quantity as f64 * order.unit_price;
    let total_cost = regular_total * (1.0 - discount) + order.additional_costs;
    let savings = regular_total * discount;

    Ok(BulkOrderQuote {
        regular_total,
        total_cost,
        unit_cost: total_cost / order.quantity as f64,
        savings,
        savings_percent: (regular_total > 0.0).then(|| savings / regular_total * 100.0),
    })
}

fn ensure_non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidData(format!(
            "{} must be a non-negative number (got {})",
            name, value
        )));
    }
    Ok(())
}

fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10_f64.powi(digits);
    (value * factor).round() / factor
}
