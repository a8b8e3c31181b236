//! End-to-end flow through the planner facade: create, attach, simulate,
//! branch, compare, delete, with the audit trail checked along the way.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use lifecast_audit::MemoryAuditLogger;
use lifecast_engine::{BranchConfig, EngineError, LifecastPlanner};
use lifecast_registry::RegistryError;
use lifecast_types::{Baseline, Confidence, EventDraft, Impact, ScenarioConfig, ScenarioId};

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn planner() -> (LifecastPlanner, MemoryAuditLogger) {
    let logger = MemoryAuditLogger::new();
    (LifecastPlanner::new(Arc::new(logger.clone())), logger)
}

#[test]
fn full_planning_session() {
    let (mut planner, logger) = planner();

    let base_id = planner
        .create_scenario(
            ScenarioConfig::named("Base case")
                .with_window(date(2024, 1, 1), date(2026, 1, 1))
                .with_baseline(Baseline::new(80000.0, 60000.0, 100000.0, 50000.0)),
        )
        .unwrap();

    planner
        .add_event(
            &base_id,
            EventDraft::new("promotion", "CAREER", "Promotion", date(2025, 6, 15))
                .with_impact(Impact::new(20000.0, 0.0, 0.0, 0.0))
                .with_confidence(Confidence::Medium),
        )
        .unwrap();
    planner
        .add_event(
            &base_id,
            EventDraft::new("medical_emergency", "HEALTH", "ER visit", date(2025, 8, 3))
                .with_impact(Impact::new(0.0, 2000.0, -10000.0, 0.0))
                .with_confidence(Confidence::Low),
        )
        .unwrap();

    let simulation = planner.simulate_scenario(&base_id).unwrap();
    assert_eq!(simulation.projections.len(), 24);

    // Income steps up in June 2025 (month 18) and stays up.
    assert_eq!(simulation.projections[16].income, 80000.0);
    assert_eq!(simulation.projections[17].income, 100000.0);
    assert_eq!(simulation.projections[23].income, 100000.0);

    // August 2025 (month 20) takes the expense/asset hit.
    assert_eq!(simulation.projections[19].expenses, 62000.0);
    assert_eq!(simulation.projections[19].assets, 90000.0);
    assert_eq!(simulation.summary.final_net_worth, 40000.0);

    // Promotion contributes nothing; emergency contributes 25 + 20.
    assert_eq!(simulation.summary.risk_score, 22.5);
    // medium(2) + low(1) averages to 1.5: medium.
    assert_eq!(simulation.summary.confidence, Confidence::Medium);
    assert_eq!(simulation.events.len(), 2);

    // Branch a recovery plan on top of the base.
    let branch_id = planner
        .create_branch(
            &base_id,
            BranchConfig::named("With side income").with_events(vec![EventDraft::new(
                "bonus",
                "WINDFALL",
                "Consulting bonus",
                date(2025, 10, 1),
            )
            .with_impact(Impact::new(0.0, 0.0, 15000.0, 0.0))]),
        )
        .unwrap();

    let base = planner.get_scenario(&base_id).unwrap();
    let branch = planner.get_scenario(&branch_id).unwrap();
    assert_eq!(branch.events.len(), base.events.len() + 1);

    let comparison = planner
        .compare_scenarios(&[base_id.clone(), branch_id.clone()])
        .unwrap();
    assert_eq!(comparison.worst_net_worth, 40000.0);
    assert_eq!(comparison.best_net_worth, 55000.0);
    assert_eq!(comparison.simulations.len(), 2);

    // Cleanup is idempotent and observable.
    planner.delete_scenario(&branch_id).unwrap();
    assert!(planner.get_scenario(&branch_id).is_none());
    planner.delete_scenario(&branch_id).unwrap();
    assert_eq!(planner.all_scenarios().len(), 1);

    // Audit trail: two creations, three attachments, one branch, one
    // comparison, one deletion, and a simulation record per run.
    assert_eq!(logger.records_of("scenario.created").len(), 2);
    assert_eq!(logger.records_of("scenario.event_added").len(), 3);
    assert_eq!(logger.records_of("branch.created").len(), 1);
    assert_eq!(logger.records_of("comparison.completed").len(), 1);
    assert_eq!(logger.records_of("scenario.deleted").len(), 1);
    assert_eq!(logger.records_of("simulation.completed").len(), 3);
}

#[test]
fn not_found_propagates_through_every_operation() {
    let (mut planner, _logger) = planner();
    let missing = ScenarioId::new("scenario-missing");

    assert!(matches!(
        planner.simulate_scenario(&missing),
        Err(EngineError::Registry(RegistryError::ScenarioNotFound(_)))
    ));
    assert!(matches!(
        planner.add_event(
            &missing,
            EventDraft::new("promotion", "CAREER", "x", Utc::now())
        ),
        Err(EngineError::Registry(RegistryError::ScenarioNotFound(_)))
    ));
    assert!(matches!(
        planner.create_branch(&missing, BranchConfig::default()),
        Err(EngineError::Registry(RegistryError::ScenarioNotFound(_)))
    ));
    // Deletion of an unknown id stays a no-op.
    assert!(planner.delete_scenario(&missing).is_ok());
}
