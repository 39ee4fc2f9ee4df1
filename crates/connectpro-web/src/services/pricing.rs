//! Campaign pricing service: POSTs the simulator form to the pricing engine
//! and memoizes recommendations per exact form input.

use connectpro_app::{
    recommend, PricePrediction, PricingRecommendation, SimulationCache, SimulationError,
    SimulatorForm,
};
use gloo_net::http::Request;
use leptos::prelude::*;

/// Pricing service provided in context at the application root.
///
/// The cache lives for the whole session: identical inputs never hit the
/// network twice.
#[derive(Clone, Copy)]
pub struct PricingService {
    cache: StoredValue<SimulationCache>,
}

impl PricingService {
    pub fn new() -> Self {
        Self {
            cache: StoredValue::new(SimulationCache::new()),
        }
    }

    /// Run one simulation: cache lookup first, then a POST to the engine.
    ///
    /// Failures are logged with their structured detail here; callers only
    /// render the generic banner.
    pub async fn simulate(
        &self,
        form: &SimulatorForm,
    ) -> Result<PricingRecommendation, SimulationError> {
        if let Some(hit) = self.cache.with_value(|cache| cache.get(form).cloned()) {
            log::info!("pricing cache hit for {}", form.endpoint());
            return Ok(hit);
        }

        match request_prediction(form).await {
            Ok(prediction) => {
                let recommendation = recommend(form, &prediction);
                self.cache
                    .update_value(|cache| cache.put(form, recommendation.clone()));
                Ok(recommendation)
            }
            Err(err) => {
                log::error!("campaign simulation failed: {err}");
                Err(err)
            }
        }
    }
}

async fn request_prediction(form: &SimulatorForm) -> Result<PricePrediction, SimulationError> {
    let response = Request::post(&form.endpoint())
        .json(form)
        .map_err(|err| SimulationError::Transport {
            reason: err.to_string(),
        })?
        .send()
        .await
        .map_err(|err| SimulationError::Transport {
            reason: err.to_string(),
        })?;

    if !response.ok() {
        return Err(SimulationError::Status {
            status: response.status(),
        });
    }

    let prediction: PricePrediction =
        response
            .json()
            .await
            .map_err(|err| SimulationError::Schema {
                reason: err.to_string(),
            })?;
    prediction.validate()?;
    Ok(prediction)
}

/// Hook for using the pricing service
pub fn use_pricing() -> PricingService {
    use_context::<PricingService>().expect("PricingService must be provided in context")
}
