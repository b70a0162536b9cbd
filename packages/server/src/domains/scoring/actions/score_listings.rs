use tracing::{debug, info};

use crate::common::{normalize_vin, BuyerError, BuyerResult};
use crate::domains::scoring::data::{ScoreRequest, ScoreResponse};
use crate::domains::scoring::models::CreateScore;
use crate::domains::scoring::utils::{ScoreOutcome, ScoringInput};
use crate::kernel::ServerDeps;

struct PlannedScore {
    vin: String,
    vehicle_exists: bool,
    outcome: ScoreOutcome,
}

/// Score a batch and append one score row per item.
///
/// Every item is scored before anything is written, so a validation
/// failure (or, in strict mode, an unknown VIN) leaves storage untouched.
/// Items without a year use the stored vehicle's year.
pub async fn score_listings(
    requests: Vec<ScoreRequest>,
    deps: &ServerDeps,
) -> BuyerResult<Vec<ScoreResponse>> {
    let mut planned = Vec::with_capacity(requests.len());

    for (index, request) in requests.into_iter().enumerate() {
        let vin = normalize_vin(&request.vin);
        if vin.is_empty() {
            return Err(BuyerError::Validation("vin is required".into()).at_index(index));
        }

        let vehicle = deps.store.find_vehicle(&vin).await?;
        if vehicle.is_none() && deps.strict_vins {
            return Err(BuyerError::NotFound(format!(
                "vehicle {} has not been ingested",
                vin
            )));
        }

        let year = request.year.filter(|year| *year > 0).or_else(|| {
            vehicle
                .as_ref()
                .filter(|vehicle| vehicle.has_year())
                .map(|vehicle| vehicle.year)
        });

        let input = ScoringInput {
            vin: vin.clone(),
            price: request.price,
            miles: request.miles,
            dom: request.dom,
            source: request.source,
            year,
        };
        let outcome = deps.scorer.score(&input).map_err(|e| e.at_index(index))?;

        planned.push(PlannedScore {
            vin,
            vehicle_exists: vehicle.is_some(),
            outcome,
        });
    }

    info!(count = planned.len(), "Persisting scores");

    let mut responses = Vec::with_capacity(planned.len());
    for PlannedScore {
        vin,
        vehicle_exists,
        outcome,
    } in planned
    {
        if !vehicle_exists {
            deps.store.insert_vehicle_if_absent(&vin).await?;
        }

        let score = deps
            .store
            .insert_score(CreateScore {
                vin,
                score: outcome.score,
                buy_max: outcome.buy_max,
                reason_codes: outcome
                    .reason_codes
                    .iter()
                    .map(|code| code.as_str().to_string())
                    .collect(),
            })
            .await?;

        debug!(
            vin = %score.vin,
            score = score.score,
            buy_max = score.buy_max,
            baseline_price = outcome.baseline_price,
            "Score stored"
        );
        responses.push(ScoreResponse::from_score(score));
    }

    Ok(responses)
}
