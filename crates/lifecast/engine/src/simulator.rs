//! Monthly timeline simulation.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use lifecast_audit::AuditLogger;
use lifecast_types::{
    LifeEvent, MonthlyProjection, Scenario, Simulation, SimulationSummary,
};
use serde_json::json;
use tracing::debug;

use crate::confidence::estimate_confidence;
use crate::errors::EngineResult;
use crate::months::{add_months, month_span, same_month};
use crate::risk::risk_score;

/// Steps a scenario month by month and aggregates the result.
///
/// Deterministic: the scenario's event list is read once, sorted by date,
/// and replayed over the monthly grid. The only side effect is the audit
/// record emitted per completed simulation.
pub struct SimulationEngine {
    logger: Arc<dyn AuditLogger>,
}

impl SimulationEngine {
    pub fn new(logger: Arc<dyn AuditLogger>) -> Self {
        Self { logger }
    }

    /// Simulate one scenario into monthly projections plus summary metrics.
    pub fn simulate(&self, scenario: &Scenario) -> EngineResult<Simulation> {
        let started = Instant::now();

        // Stable sort: same-date events keep their attachment order.
        let mut events = scenario.events.clone();
        events.sort_by_key(|e| e.date);

        let months = month_span(scenario.start_date, scenario.end_date);

        // Running totals start from the baseline and carry across months
        // unless an event changes them; there is no per-month rate
        // multiplication.
        let mut income = scenario.baseline.income;
        let mut expenses = scenario.baseline.expenses;
        let mut assets = scenario.baseline.assets;
        let mut liabilities = scenario.baseline.liabilities;

        let mut total_income = 0.0;
        let mut total_expenses = 0.0;

        let mut projections = Vec::with_capacity(months as usize);
        let mut window_events: Vec<LifeEvent> = Vec::new();

        for index in 0..months {
            let date = add_months(scenario.start_date, index);

            let mut fired = Vec::new();
            for event in events.iter().filter(|e| same_month(e.date, date)) {
                income += event.impact.income;
                expenses += event.impact.expenses;
                assets += event.impact.assets;
                liabilities += event.impact.liabilities;
                fired.push(event.id.clone());
                window_events.push(event.clone());
            }

            total_income += income;
            total_expenses += expenses;

            projections.push(MonthlyProjection {
                month: index + 1,
                date,
                income,
                expenses,
                net_income: income - expenses,
                assets,
                liabilities,
                net_worth: assets - liabilities,
                events: fired,
            });
        }

        // Reconciliation: events inside [start, end] whose month was never
        // simulated (degenerate zero-month windows, or events dated in the
        // uncounted final partial month) still surface in the flat event
        // list, without touching the numeric totals.
        let fired_ids: HashSet<_> = window_events.iter().map(|e| e.id.clone()).collect();
        for event in &events {
            if event.date >= scenario.start_date
                && event.date <= scenario.end_date
                && !fired_ids.contains(&event.id)
            {
                window_events.push(event.clone());
            }
        }

        let summary = SimulationSummary {
            total_income,
            total_expenses,
            final_net_worth: assets - liabilities,
            // Scored over the scenario's full event list, not the window.
            risk_score: risk_score(&scenario.events),
            confidence: estimate_confidence(&scenario.events),
        };

        let duration_ms = started.elapsed().as_millis() as u64;

        debug!(
            scenario = %scenario.id,
            months,
            events = scenario.events.len(),
            final_net_worth = summary.final_net_worth,
            "simulation complete"
        );

        let payload = json!({
            "scenario_id": scenario.id.as_str(),
            "months": months,
            "event_count": scenario.events.len(),
            "duration_ms": duration_ms,
            "final_net_worth": summary.final_net_worth,
        });
        if let Err(err) = self.logger.log("simulation.completed", payload.clone()) {
            self.logger.log_error("simulation.completed", &err, payload);
            return Err(err.into());
        }

        Ok(Simulation {
            scenario_id: scenario.id.clone(),
            scenario_name: scenario.name.clone(),
            start_date: scenario.start_date,
            end_date: scenario.end_date,
            projections,
            events: window_events,
            summary,
            duration_ms,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone};
    use lifecast_audit::MemoryAuditLogger;
    use lifecast_types::{
        Baseline, Confidence, EventDraft, EventId, Impact, ScenarioId,
    };
    use std::collections::HashMap;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn scenario(start: DateTime<Utc>, end: DateTime<Utc>, baseline: Baseline) -> Scenario {
        Scenario {
            id: ScenarioId::new("scenario-test"),
            name: "Test".into(),
            description: String::new(),
            start_date: start,
            end_date: end,
            events: Vec::new(),
            assumptions: HashMap::new(),
            baseline,
            created_at: start,
            updated_at: start,
        }
    }

    fn attach(
        scenario: &mut Scenario,
        id: &str,
        event_date: DateTime<Utc>,
        impact: Impact,
    ) {
        let draft = EventDraft::new("event", "CAREER", id, event_date).with_impact(impact);
        scenario
            .events
            .push(LifeEvent::from_draft(draft, EventId::new(id), event_date));
    }

    fn engine() -> (SimulationEngine, MemoryAuditLogger) {
        let logger = MemoryAuditLogger::new();
        (SimulationEngine::new(Arc::new(logger.clone())), logger)
    }

    #[test]
    fn baseline_only_scenario_matches_reference_figures() {
        // 2024-01-01 .. 2026-01-01, baseline 80000/60000/100000/50000,
        // no events: 24 projections, net worth 50000, risk 0, high
        // confidence.
        let (engine, logger) = engine();
        let scenario = scenario(
            date(2024, 1, 1),
            date(2026, 1, 1),
            Baseline::new(80000.0, 60000.0, 100000.0, 50000.0),
        );

        let simulation = engine.simulate(&scenario).unwrap();
        assert_eq!(simulation.projections.len(), 24);
        assert_eq!(simulation.summary.final_net_worth, 50000.0);
        assert_eq!(simulation.summary.risk_score, 0.0);
        assert_eq!(simulation.summary.confidence, Confidence::High);

        for projection in &simulation.projections {
            assert_eq!(projection.income, 80000.0);
            assert_eq!(projection.expenses, 60000.0);
            assert_eq!(projection.net_income, 20000.0);
            assert_eq!(projection.net_worth, 50000.0);
            assert!(projection.events.is_empty());
        }

        assert_eq!(simulation.summary.total_income, 24.0 * 80000.0);
        assert_eq!(simulation.summary.total_expenses, 24.0 * 60000.0);
        assert_eq!(logger.records_of("simulation.completed").len(), 1);
    }

    #[test]
    fn event_shifts_income_from_its_month_onward() {
        let (engine, _logger) = engine();
        let mut scenario = scenario(
            date(2024, 1, 1),
            date(2026, 1, 1),
            Baseline::new(80000.0, 60000.0, 100000.0, 50000.0),
        );
        attach(
            &mut scenario,
            "event-raise",
            date(2025, 6, 15),
            Impact::new(20000.0, 0.0, 0.0, 0.0),
        );

        let simulation = engine.simulate(&scenario).unwrap();
        // June 2025 is month 18 (1-based) from January 2024.
        for projection in &simulation.projections {
            if projection.month < 18 {
                assert_eq!(projection.income, 80000.0, "month {}", projection.month);
            } else {
                assert_eq!(projection.income, 100000.0, "month {}", projection.month);
            }
        }

        let june = &simulation.projections[17];
        assert_eq!(june.events, vec![EventId::new("event-raise")]);
        assert_eq!(simulation.events.len(), 1);
    }

    #[test]
    fn event_matches_on_month_regardless_of_day() {
        let (engine, _logger) = engine();
        let mut scenario = scenario(
            date(2024, 1, 10),
            date(2024, 6, 10),
            Baseline::default(),
        );
        // Dated before the projection's day-of-month: still fires in March.
        attach(
            &mut scenario,
            "event-a",
            date(2024, 3, 2),
            Impact::new(0.0, 0.0, 5000.0, 0.0),
        );

        let simulation = engine.simulate(&scenario).unwrap();
        let march = &simulation.projections[2];
        assert_eq!(march.events.len(), 1);
        assert_eq!(march.assets, 5000.0);
    }

    #[test]
    fn same_month_events_apply_in_date_order_and_stably() {
        let (engine, _logger) = engine();
        let mut scenario = scenario(date(2024, 1, 1), date(2024, 3, 1), Baseline::default());
        // Attachment order deliberately scrambled; same-date pair must keep
        // attachment order.
        attach(
            &mut scenario,
            "event-late",
            date(2024, 1, 20),
            Impact::new(0.0, 0.0, 1.0, 0.0),
        );
        attach(
            &mut scenario,
            "event-tie-a",
            date(2024, 1, 5),
            Impact::new(0.0, 0.0, 2.0, 0.0),
        );
        attach(
            &mut scenario,
            "event-tie-b",
            date(2024, 1, 5),
            Impact::new(0.0, 0.0, 4.0, 0.0),
        );

        let simulation = engine.simulate(&scenario).unwrap();
        let january = &simulation.projections[0];
        assert_eq!(
            january.events,
            vec![
                EventId::new("event-tie-a"),
                EventId::new("event-tie-b"),
                EventId::new("event-late"),
            ]
        );
        assert_eq!(january.assets, 7.0);
    }

    #[test]
    fn zero_month_window_still_reports_in_window_events() {
        let (engine, _logger) = engine();
        let mut scenario = scenario(
            date(2024, 5, 1),
            date(2024, 5, 20),
            Baseline::new(80000.0, 60000.0, 0.0, 0.0),
        );
        attach(
            &mut scenario,
            "event-in-window",
            date(2024, 5, 10),
            Impact::new(-50000.0, 0.0, 0.0, 0.0),
        );

        let simulation = engine.simulate(&scenario).unwrap();
        assert!(simulation.projections.is_empty());
        // The event surfaces in the flat list but never touched totals.
        assert_eq!(simulation.events.len(), 1);
        assert_eq!(simulation.summary.total_income, 0.0);
        assert_eq!(simulation.summary.final_net_worth, 0.0);
        // Risk and confidence still come from the full event list.
        assert_eq!(simulation.summary.risk_score, 30.0);
        assert_eq!(simulation.summary.confidence, Confidence::Medium);
    }

    #[test]
    fn out_of_window_events_do_not_fire_or_surface() {
        let (engine, _logger) = engine();
        let mut scenario = scenario(date(2024, 1, 1), date(2024, 6, 1), Baseline::default());
        attach(
            &mut scenario,
            "event-future",
            date(2030, 1, 1),
            Impact::new(0.0, 0.0, 1000.0, 0.0),
        );

        let simulation = engine.simulate(&scenario).unwrap();
        assert!(simulation.events.is_empty());
        assert!(simulation.projections.iter().all(|p| p.events.is_empty()));
        // The out-of-window event still counts toward risk/confidence.
        assert_eq!(simulation.summary.risk_score, 0.0);
        assert_eq!(simulation.summary.confidence, Confidence::Medium);
    }

    #[test]
    fn liabilities_event_moves_net_worth_down() {
        let (engine, _logger) = engine();
        let mut scenario = scenario(
            date(2024, 1, 1),
            date(2024, 7, 1),
            Baseline::new(0.0, 0.0, 100000.0, 20000.0),
        );
        attach(
            &mut scenario,
            "event-loan",
            date(2024, 3, 1),
            Impact::new(0.0, 500.0, 30000.0, 40000.0),
        );

        let simulation = engine.simulate(&scenario).unwrap();
        assert_eq!(simulation.projections[1].net_worth, 80000.0);
        assert_eq!(simulation.projections[2].net_worth, 70000.0);
        assert_eq!(simulation.summary.final_net_worth, 70000.0);
    }
}
