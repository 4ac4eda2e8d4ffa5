//! Cost readout and the checkout collaborator's request/response shape.

use crate::constants::{DEFAULT_SHIPPING_FEE, END_CAP_SURCHARGE, PER_INCH_RATE, SHIPPING_ZONES};
use crate::error::CheckoutError;
use crate::plenum::BoxSpec;
use fnv::FnvHashMap;

/// Flat shipping fee per zone key, with a fallback for unknown zones.
#[derive(Clone, Debug, PartialEq)]
pub struct ShippingTable {
    fees: FnvHashMap<String, f64>,
    default_fee: f64,
}

impl ShippingTable {
    pub fn new(default_fee: f64) -> Self {
        Self {
            fees: FnvHashMap::default(),
            default_fee,
        }
    }

    pub fn with_zone(mut self, zone: impl Into<String>, fee: f64) -> Self {
        self.fees.insert(zone.into(), fee);
        self
    }

    pub fn fee(&self, zone: &str) -> f64 {
        self.fees.get(zone).copied().unwrap_or(self.default_fee)
    }

    pub fn default_fee(&self) -> f64 {
        self.default_fee
    }
}

impl Default for ShippingTable {
    fn default() -> Self {
        SHIPPING_ZONES
            .iter()
            .fold(Self::new(DEFAULT_SHIPPING_FEE), |t, &(zone, fee)| {
                t.with_zone(zone, fee)
            })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PricingConfig {
    pub per_inch_rate: f64,
    pub end_cap_surcharge: f64,
    pub shipping: ShippingTable,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            per_inch_rate: PER_INCH_RATE,
            end_cap_surcharge: END_CAP_SURCHARGE,
            shipping: ShippingTable::default(),
        }
    }
}

#[inline]
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Dimension charge + feature surcharge + zone shipping, rounded to cents.
pub fn compute_cost(spec: &BoxSpec, zone: &str, pricing: &PricingConfig) -> f64 {
    let inches = spec.width_a as f64 + spec.width_b as f64 + spec.height as f64;
    let dimension = inches * pricing.per_inch_rate;
    let end_cap = if spec.end_cap {
        pricing.end_cap_surcharge
    } else {
        0.0
    };
    round_cents(dimension + end_cap + pricing.shipping.fee(zone))
}

/// What the checkout backend needs to price and create a cart entry.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteRequest {
    pub width_a: f32,
    pub width_b: f32,
    pub height: f32,
    pub lip_size: f32,
    pub end_cap: bool,
    pub zone: String,
    pub price: f64,
}

impl QuoteRequest {
    pub fn from_spec(spec: &BoxSpec, zone: &str, price: f64) -> Self {
        Self {
            width_a: spec.width_a,
            width_b: spec.width_b,
            height: spec.height,
            lip_size: spec.lip_size,
            end_cap: spec.end_cap,
            zone: zone.to_string(),
            price,
        }
    }

    /// Human-readable variant label, e.g. `W14xB8xH20 - Lip:1" - EndCap:yes - Zip:5`.
    pub fn option_value(&self) -> String {
        format!(
            "W{}xB{}xH{} - Lip:{}\" - EndCap:{} - Zip:{}",
            self.width_a,
            self.width_b,
            self.height,
            self.lip_size,
            if self.end_cap { "yes" } else { "no" },
            self.zone
        )
    }

    pub fn sku(&self) -> String {
        format!(
            "PLM-{}-{}-{}-{}-{}",
            self.width_a,
            self.width_b,
            self.height,
            if self.end_cap { "EC" } else { "NEC" },
            self.zone
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Quote {
    pub price: f64,
    pub checkout_ref: String,
}

/// External pricing/checkout backend. Transport is up to the deployment.
pub trait CheckoutService {
    fn quote(&self, request: &QuoteRequest) -> Result<Quote, CheckoutError>;
}
