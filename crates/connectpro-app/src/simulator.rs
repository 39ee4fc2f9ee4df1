//! # Campaign Pricing Simulator
//!
//! Form state, wire schema, and response mapping for the one page that
//! crosses a real network boundary. The HTTP call itself lives in the web
//! layer; this module owns everything testable around it: the payload
//! shape the pricing service expects, the response schema validated at
//! the boundary, the revenue and ROI arithmetic, and the submission cache
//! that lets an identical form state short-circuit to its previous result.
//!
//! The pricing service is a separate reinforcement-learning backend and
//! its wire names are Portuguese (`preco_recomendado`, `lucro_estimado_sl`).
//! Those names are part of the contract and are kept verbatim here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::SimulationError;

/// Base URL of the local pricing service.
pub const SIMULATOR_BASE_URL: &str = "http://127.0.0.1:8000";

/// Profit factor assumed when the service omits `lucro_estimado_sl`.
pub const DEFAULT_PROFIT_FACTOR: f64 = 1.5;

/// Audience coverage is not returned by the service; the page reports a
/// fixed fraction.
pub const AUDIENCE_COVERAGE: f64 = 0.85;

/// Target regions offered by the form.
pub const REGIONS: [&str; 5] = [
    "North America",
    "Europe",
    "Asia",
    "South America",
    "Africa",
];

/// Product tiers offered by the form.
pub const PRODUCT_TIERS: [&str; 2] = ["Low Ticket", "High Ticket"];

/// Which pricing endpoint a simulation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingModel {
    /// One-time sale price.
    #[default]
    Fixed,
    /// Recurring monthly price.
    Subscription,
}

impl PricingModel {
    /// Every model, in form order.
    pub const ALL: [Self; 2] = [Self::Fixed, Self::Subscription];

    /// Service path for this model.
    #[must_use]
    pub const fn endpoint_path(self) -> &'static str {
        match self {
            Self::Fixed => "/recommend_price",
            Self::Subscription => "/recommend_subscription_price",
        }
    }

    /// Wire value, also used by the form select.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Subscription => "subscription",
        }
    }

    /// Human-readable option label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fixed => "Fixed Price",
            Self::Subscription => "Subscription",
        }
    }

    /// Billing cadence shown under the recommended amount.
    #[must_use]
    pub const fn cadence(self) -> &'static str {
        match self {
            Self::Fixed => "one-time",
            Self::Subscription => "per month",
        }
    }

    /// Parse a select value back into a model.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "fixed" => Some(Self::Fixed),
            "subscription" => Some(Self::Subscription),
            _ => None,
        }
    }
}

/// The simulator form, serialized as-is into the POST body.
///
/// Only region, product tier, budget, and pricing model have visible
/// controls; platform and the demographic fields ride along at their
/// defaults because the pricing models were trained on them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulatorForm {
    /// Target region, one of [`REGIONS`].
    pub region: String,
    /// Advertising platform.
    pub platform: String,
    /// Product tier, one of [`PRODUCT_TIERS`].
    pub product_tier: String,
    /// Monthly budget in dollars, expected positive.
    pub budget: f64,
    /// Audience age bracket.
    pub age: String,
    /// Audience gender.
    pub gender: String,
    /// Creative content format.
    pub content: String,
    /// Selected pricing model, camel-cased on the wire.
    #[serde(rename = "pricingModel")]
    pub pricing_model: PricingModel,
}

impl Default for SimulatorForm {
    fn default() -> Self {
        Self {
            region: "North America".to_string(),
            platform: "Instagram".to_string(),
            product_tier: "Low Ticket".to_string(),
            budget: 1000.0,
            age: "25-34".to_string(),
            gender: "Female".to_string(),
            content: "Image".to_string(),
            pricing_model: PricingModel::Fixed,
        }
    }
}

impl SimulatorForm {
    /// Full URL of the endpoint this form submits to.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{SIMULATOR_BASE_URL}{}", self.pricing_model.endpoint_path())
    }

    /// Cache key covering every field, so any edit invalidates the hit.
    #[must_use]
    pub fn cache_key(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}|{}|{}",
            self.region,
            self.platform,
            self.product_tier,
            self.budget,
            self.age,
            self.gender,
            self.content,
            self.pricing_model.value(),
        )
    }

    /// Whether the budget field holds a usable value.
    #[must_use]
    pub fn budget_is_valid(&self) -> bool {
        self.budget.is_finite() && self.budget > 0.0
    }
}

/// Digital-twin market bounds shown in the configuration panel.
///
/// The retrain control next to these is an external collaborator hook with
/// no request contract in this scope, so the bounds are display-only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketConfig {
    /// Low-ticket price floor.
    pub low_min: f64,
    /// Low-ticket price ceiling.
    pub low_max: f64,
    /// High-ticket price floor.
    pub high_min: f64,
    /// High-ticket price ceiling.
    pub high_max: f64,
    /// Smallest simulated budget.
    pub budget_min: f64,
    /// Largest simulated budget.
    pub budget_max: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            low_min: 10.0,
            low_max: 97.0,
            high_min: 497.0,
            high_max: 5000.0,
            budget_min: 500.0,
            budget_max: 20000.0,
        }
    }
}

/// The pricing service's response body.
///
/// Mirrors the service's own response model. Only the recommended price is
/// required; everything else the service may omit, and the profit estimate
/// falls back to [`DEFAULT_PROFIT_FACTOR`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricePrediction {
    /// Recommended price in dollars.
    pub preco_recomendado: f64,
    /// Estimated profit factor relative to budget.
    #[serde(default)]
    pub lucro_estimado_sl: Option<f64>,
    /// Which model produced the recommendation.
    #[serde(default)]
    pub modelo: Option<String>,
    /// 5% value-at-risk of the return distribution.
    #[serde(default)]
    pub var_5_percent: Option<f64>,
    /// 5% conditional value-at-risk.
    #[serde(default)]
    pub cvar_5_percent: Option<f64>,
    /// Service-side inference latency.
    #[serde(default)]
    pub latencia_ms: Option<f64>,
    /// Whether knowledge-based safety rules adjusted the price.
    #[serde(default)]
    pub kbs_applied: Option<bool>,
    /// Optional natural-language rationale.
    #[serde(default)]
    pub llm_explanation: Option<String>,
}

impl PricePrediction {
    /// Boundary validation before the response is trusted.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.preco_recomendado.is_finite() || self.preco_recomendado < 0.0 {
            return Err(SimulationError::Schema {
                reason: format!(
                    "recommended price {} is outside the valid range",
                    self.preco_recomendado
                ),
            });
        }
        if let Some(factor) = self.lucro_estimado_sl {
            if !factor.is_finite() {
                return Err(SimulationError::Schema {
                    reason: "profit estimate is not a finite number".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Profit factor with the default applied.
    #[must_use]
    pub fn profit_factor(&self) -> f64 {
        self.lucro_estimado_sl.unwrap_or(DEFAULT_PROFIT_FACTOR)
    }
}

/// What the results card renders, derived once per submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRecommendation {
    /// Which pricing model the recommendation is for.
    pub pricing_type: PricingModel,
    /// Recommended price in dollars.
    pub amount: f64,
    /// Projected monthly revenue, budget included.
    pub estimated_revenue: f64,
    /// Return on investment as a percentage of budget.
    pub roi: f64,
    /// Audience coverage fraction, fixed client-side.
    pub coverage: f64,
    /// Targeted location names, echoing the form's region.
    pub locations: Vec<String>,
}

impl PricingRecommendation {
    /// Profit over the given budget, the revenue net of spend.
    #[must_use]
    pub fn estimated_profit(&self, budget: f64) -> f64 {
        self.estimated_revenue - budget
    }
}

/// Map a validated prediction onto the submitted form.
///
/// Revenue is `budget * (1 + factor)` and ROI is the profit share of the
/// budget, which reduces to `factor * 100`.
#[must_use]
pub fn recommend(form: &SimulatorForm, prediction: &PricePrediction) -> PricingRecommendation {
    let factor = prediction.profit_factor();
    let profit = form.budget * factor;
    let roi = if form.budget > 0.0 {
        profit / form.budget * 100.0
    } else {
        0.0
    };
    PricingRecommendation {
        pricing_type: form.pricing_model,
        amount: prediction.preco_recomendado,
        estimated_revenue: form.budget + profit,
        roi,
        coverage: AUDIENCE_COVERAGE,
        locations: vec![form.region.clone()],
    }
}

/// Completed simulations keyed by the full form contents.
///
/// Submitting an unchanged form re-displays the cached recommendation
/// without touching the network; any field edit forms a new key.
#[derive(Debug, Clone, Default)]
pub struct SimulationCache {
    entries: HashMap<String, PricingRecommendation>,
}

impl SimulationCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the result of a previous submission of this exact form.
    #[must_use]
    pub fn get(&self, form: &SimulatorForm) -> Option<&PricingRecommendation> {
        self.entries.get(&form.cache_key())
    }

    /// Record a submission's result.
    pub fn put(&mut self, form: &SimulatorForm, recommendation: PricingRecommendation) {
        self.entries.insert(form.cache_key(), recommendation);
    }

    /// Number of distinct form states simulated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any simulation has completed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn prediction(price: f64, factor: Option<f64>) -> PricePrediction {
        PricePrediction {
            preco_recomendado: price,
            lucro_estimado_sl: factor,
            modelo: None,
            var_5_percent: None,
            cvar_5_percent: None,
            latencia_ms: None,
            kbs_applied: None,
            llm_explanation: None,
        }
    }

    #[test]
    fn test_default_form_is_the_baseline_scenario() {
        let form = SimulatorForm::default();
        assert_eq!(form.region, "North America");
        assert_eq!(form.product_tier, "Low Ticket");
        assert!(close(form.budget, 1000.0));
        assert_eq!(form.pricing_model, PricingModel::Fixed);
        assert!(form.budget_is_valid());
    }

    #[test]
    fn test_endpoint_follows_pricing_model() {
        let mut form = SimulatorForm::default();
        assert_eq!(form.endpoint(), "http://127.0.0.1:8000/recommend_price");
        form.pricing_model = PricingModel::Subscription;
        assert_eq!(
            form.endpoint(),
            "http://127.0.0.1:8000/recommend_subscription_price"
        );
    }

    #[test]
    fn test_payload_uses_wire_field_names() {
        let payload = serde_json::to_value(SimulatorForm::default()).unwrap();
        assert_eq!(payload["product_tier"], "Low Ticket");
        assert_eq!(payload["pricingModel"], "fixed");
        assert_eq!(payload["age"], "25-34");
        assert!(payload.get("pricing_model").is_none());
    }

    #[test]
    fn test_baseline_recommendation_numbers() {
        // budget 1000 with price 49.99 and factor 1.5 must come out as
        // $49.99 recommended, $2,500 revenue, $1,500 profit, 150.0% ROI
        let form = SimulatorForm::default();
        let rec = recommend(&form, &prediction(49.99, Some(1.5)));
        assert_eq!(rec.pricing_type, PricingModel::Fixed);
        assert!(close(rec.amount, 49.99));
        assert!(close(rec.estimated_revenue, 2500.0));
        assert!(close(rec.estimated_profit(form.budget), 1500.0));
        assert!(close(rec.roi, 150.0));
        assert!(close(rec.coverage, AUDIENCE_COVERAGE));
        assert_eq!(rec.locations, vec!["North America".to_string()]);
    }

    #[test]
    fn test_missing_profit_estimate_falls_back_to_default() {
        let form = SimulatorForm::default();
        let rec = recommend(&form, &prediction(49.99, None));
        assert!(close(rec.estimated_revenue, 2500.0));
        assert!(close(rec.roi, 150.0));
    }

    #[test]
    fn test_roi_scales_with_the_factor_not_the_budget() {
        let mut form = SimulatorForm::default();
        form.budget = 8000.0;
        let rec = recommend(&form, &prediction(497.0, Some(0.75)));
        assert!(close(rec.estimated_revenue, 14000.0));
        assert!(close(rec.roi, 75.0));
    }

    #[test]
    fn test_validation_rejects_bad_responses() {
        assert!(prediction(49.99, Some(1.5)).validate().is_ok());
        assert!(prediction(-1.0, Some(1.5)).validate().is_err());
        assert!(prediction(f64::NAN, Some(1.5)).validate().is_err());
        assert!(prediction(49.99, Some(f64::INFINITY)).validate().is_err());
    }

    #[test]
    fn test_prediction_accepts_full_and_minimal_bodies() {
        let full: PricePrediction = serde_json::from_str(
            r#"{
                "modelo": "RL (Venda Única) Dinâmico",
                "preco_recomendado": 49.99,
                "lucro_estimado_sl": 1.5,
                "var_5_percent": -0.2,
                "cvar_5_percent": -0.35,
                "latencia_ms": 12.5,
                "kbs_applied": false,
                "llm_explanation": "baseline"
            }"#,
        )
        .unwrap();
        assert!(close(full.preco_recomendado, 49.99));
        assert_eq!(full.kbs_applied, Some(false));

        let minimal: PricePrediction =
            serde_json::from_str(r#"{"preco_recomendado": 12.0}"#).unwrap();
        assert!(minimal.lucro_estimado_sl.is_none());
        assert!(close(minimal.profit_factor(), DEFAULT_PROFIT_FACTOR));
    }

    #[test]
    fn test_cache_hits_only_on_identical_forms() {
        let mut cache = SimulationCache::new();
        let form = SimulatorForm::default();
        assert!(cache.get(&form).is_none());

        cache.put(&form, recommend(&form, &prediction(49.99, Some(1.5))));
        assert!(cache.get(&form).is_some());
        assert_eq!(cache.len(), 1);

        // Any edited field forms a new key
        let mut edited = form.clone();
        edited.budget = 1500.0;
        assert!(cache.get(&edited).is_none());

        let mut switched = form.clone();
        switched.pricing_model = PricingModel::Subscription;
        assert!(cache.get(&switched).is_none());
    }

    #[test]
    fn test_market_config_defaults() {
        let config = MarketConfig::default();
        assert!(close(config.low_min, 10.0));
        assert!(close(config.low_max, 97.0));
        assert!(close(config.high_min, 497.0));
        assert!(close(config.high_max, 5000.0));
        assert!(close(config.budget_min, 500.0));
        assert!(close(config.budget_max, 20000.0));
    }

    #[test]
    fn test_pricing_model_round_trips_through_select_values() {
        for model in PricingModel::ALL {
            assert_eq!(PricingModel::from_value(model.value()), Some(model));
        }
        assert_eq!(PricingModel::from_value("auction"), None);
        assert_eq!(PricingModel::Fixed.cadence(), "one-time");
        assert_eq!(PricingModel::Subscription.cadence(), "per month");
    }
}
