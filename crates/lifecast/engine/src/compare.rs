//! Multi-scenario comparison aggregation.

use lifecast_types::{Comparison, ScenarioId, Simulation};

use crate::errors::{EngineError, EngineResult};

/// Aggregate N simulations into a comparison.
///
/// Best/worst/average are taken over final net worth; riskiest and safest
/// over the summary risk score, first occurrence winning ties. The input
/// orders are preserved.
pub fn aggregate(
    scenario_ids: Vec<ScenarioId>,
    simulations: Vec<Simulation>,
) -> EngineResult<Comparison> {
    let first = simulations.first().ok_or(EngineError::EmptyComparison)?;

    let mut best_net_worth = first.summary.final_net_worth;
    let mut worst_net_worth = first.summary.final_net_worth;
    let mut net_worth_sum = 0.0;
    let mut riskiest = first;
    let mut safest = first;

    for simulation in &simulations {
        let net_worth = simulation.summary.final_net_worth;
        net_worth_sum += net_worth;
        if net_worth > best_net_worth {
            best_net_worth = net_worth;
        }
        if net_worth < worst_net_worth {
            worst_net_worth = net_worth;
        }
        // Strict comparisons: the first occurrence wins ties.
        if simulation.summary.risk_score > riskiest.summary.risk_score {
            riskiest = simulation;
        }
        if simulation.summary.risk_score < safest.summary.risk_score {
            safest = simulation;
        }
    }

    let average_net_worth = net_worth_sum / simulations.len() as f64;
    let riskiest = riskiest.scenario_id.clone();
    let safest = safest.scenario_id.clone();

    Ok(Comparison {
        scenario_ids,
        simulations,
        best_net_worth,
        worst_net_worth,
        average_net_worth,
        riskiest,
        safest,
    })
}
