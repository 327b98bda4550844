//! Integration tests that load the example rule set in
//! `data/rules/examples/` and evaluate it against the example flights.

use chrono::{DateTime, TimeZone, Utc};

use paxmsg_rules::loader::{find_flight, load_flights, RuleLoader};
use paxmsg_rules::schema::EvaluationResult;
use paxmsg_rules::templates::unknown_placeholders;
use paxmsg_rules::RuleEvaluator;

/// Resolve the data directory relative to the workspace root.
/// Integration tests run from the crate directory, so we go up two levels.
fn data_dir() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest.join("../../data")
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
}

fn load_examples() -> Vec<paxmsg_rules::schema::Rule> {
    RuleLoader::new(data_dir().join("rules/examples"))
        .load_all()
        .unwrap_or_else(|e| panic!("Failed to load example rules: {}", e))
}

#[test]
fn example_rules_load_in_path_order() {
    let rules = load_examples();
    let ids: Vec<&str> = rules.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["boarding-soon", "delay-notice", "on-time", "wifi-down"]);

    let wifi = rules.iter().find(|r| r.id == "wifi-down").unwrap();
    assert!(!wifi.is_active);

    for rule in &rules {
        assert!(
            unknown_placeholders(&rule.message_template).is_empty(),
            "{} uses unsupported placeholders",
            rule.id
        );
    }
}

#[test]
fn delayed_flight_ten_minutes_out() {
    let flights = load_flights(&data_dir().join("flights.json")).unwrap();
    let flight = find_flight(&flights, "f-1001").unwrap();
    let rules = load_examples();

    let results = RuleEvaluator::evaluate(flight, &rules, now()).unwrap();
    assert_eq!(
        results,
        vec![
            EvaluationResult {
                rule_id: "boarding-soon".to_string(),
                message: "Boarding soon".to_string(),
            },
            EvaluationResult {
                rule_id: "delay-notice".to_string(),
                message: "Flight LH123 delayed".to_string(),
            },
        ]
    );
}

#[test]
fn on_time_flight_hours_out() {
    let flights = load_flights(&data_dir().join("flights.json")).unwrap();
    let flight = find_flight(&flights, "f-1002").unwrap();
    let rules = load_examples();

    let results = RuleEvaluator::evaluate(flight, &rules, now()).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].rule_id, "on-time");
    assert_eq!(
        results[0].message,
        "BA9 is on time, departing 2026-03-01T14:00:00+01:00"
    );
}

#[test]
fn results_serialize_as_wire_json() {
    let flights = load_flights(&data_dir().join("flights.json")).unwrap();
    let flight = find_flight(&flights, "f-1001").unwrap();
    let results = RuleEvaluator::evaluate(flight, &load_examples(), now()).unwrap();

    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json[0]["ruleId"], "boarding-soon");
    assert_eq!(json[1]["message"], "Flight LH123 delayed");
}
