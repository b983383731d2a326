//! End-to-end sequence scenarios mixing the wrapper types and the
//! iterator adaptors the way application code composes them.

use millpond::prelude::*;
use millpond::seq::cartesian_product;

#[derive(Clone, Debug, PartialEq)]
struct Employee {
    id: u32,
    name: &'static str,
    dept: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
struct Badge {
    employee_id: u32,
    code: &'static str,
}

fn employees() -> Vec<Employee> {
    vec![
        Employee { id: 1, name: "ada", dept: "eng" },
        Employee { id: 2, name: "grace", dept: "eng" },
        Employee { id: 3, name: "linus", dept: "ops" },
    ]
}

fn badges() -> Vec<Badge> {
    vec![
        Badge { employee_id: 2, code: "B-20" },
        Badge { employee_id: 2, code: "B-21" },
        Badge { employee_id: 9, code: "B-90" },
    ]
}

#[test]
fn full_outer_join_reports_orphans_on_both_sides() {
    let rows: Vec<_> = employees()
        .into_iter()
        .full_outer_join(badges(), |e| e.id, |b| b.employee_id)
        .collect();

    // ada and linus have no badge, badge B-90 has no employee, grace has two.
    assert_eq!(rows.len(), 5);
    assert!(rows[0].0.has_value() && rows[0].1.is_empty());
    assert_eq!(rows[1].1.as_ref().map(|b| b.code), Maybe::new("B-20"));
    assert_eq!(rows[2].1.as_ref().map(|b| b.code), Maybe::new("B-21"));
    assert!(rows[3].0.has_value() && rows[3].1.is_empty());
    assert!(rows[4].0.is_empty());
    assert_eq!(rows[4].1.as_ref().map(|b| b.code), Maybe::new("B-90"));
}

#[test]
fn left_outer_join_drives_report_rows() {
    let report: Vec<String> = employees()
        .into_iter()
        .left_outer_join(badges(), |e| e.id, |b| b.employee_id)
        .map(|(employee, badge)| {
            let code = badge.map(|b| b.code).value_or("none");
            format!("{}: {}", employee.name, code)
        })
        .collect();

    assert_eq!(
        report,
        vec!["ada: none", "grace: B-20", "grace: B-21", "linus: none"]
    );
}

#[test]
fn right_outer_join_finds_unassigned_badges() {
    let unassigned: Vec<&str> = employees()
        .into_iter()
        .right_outer_join(badges(), |e| e.id, |b| b.employee_id)
        .filter(|(employee, _)| employee.is_empty())
        .map(|(_, badge)| badge.code)
        .collect();

    assert_eq!(unassigned, vec!["B-90"]);
}

#[test]
fn zip_all_pairs_uneven_streams() {
    let names = ["ada", "grace", "linus"];
    let desks = [101, 102];

    let assignments: Vec<String> = names
        .into_iter()
        .zip_all(desks)
        .map(|(name, desk)| {
            format!(
                "{} -> {}",
                name.value_or("(vacant)"),
                desk.map(|d| d.to_string()).value_or("(none)".to_string())
            )
        })
        .collect();

    assert_eq!(
        assignments,
        vec!["ada -> 101", "grace -> 102", "linus -> (none)"]
    );
}

#[test]
fn counting_checks_compose_with_filters() {
    let staff = employees();
    assert!(staff.iter().at_least_by(2, |e| e.dept == "eng"));
    assert!(staff.iter().at_most_by(1, |e| e.dept == "ops"));
    assert!(!staff.iter().map(|e| e.id).has_duplicates());
    assert!(staff
        .iter()
        .map(|e| e.dept)
        .set_equal(["ops", "eng"]));
}

#[test]
fn indexing_into_projected_sequences() {
    let staff = employees();
    assert_eq!(staff.iter().map(|e| e.name).index_of(&"grace"), Some(1));
    assert_eq!(staff.iter().index_of_by(|e| e.dept == "ops"), Some(2));
    assert_eq!(staff.iter().map(|e| e.name).index_of(&"bob"), None);
}

#[test]
fn insert_and_append_preserve_lazy_pipelines() {
    let ordered: Vec<u32> = employees()
        .into_iter()
        .map(|e| e.id)
        .insert_at(1, 99)
        .continue_with(100)
        .collect();
    assert_eq!(ordered, vec![1, 99, 2, 3, 100]);
}

#[test]
fn partial_ordering_picks_top_candidates() {
    let scores = vec![("ada", 88), ("grace", 95), ("linus", 70), ("barbara", 92)];

    let top_two: Vec<&str> = scores
        .iter()
        .partial_order_by_key_desc(|(_, score)| *score, 2)
        .map(|(name, _)| *name)
        .collect();
    assert_eq!(top_two, vec!["grace", "barbara"]);

    let bottom: Vec<&str> = scores
        .iter()
        .partial_order_by_key(|(_, score)| *score, 1)
        .map(|(name, _)| *name)
        .collect();
    assert_eq!(bottom, vec!["linus"]);
}

#[test]
fn combinations_feed_downstream_filters() {
    let teams: Vec<Vec<&str>> = ["ada", "grace", "linus"]
        .into_iter()
        .combinations()
        .filter(|team| team.len() == 2)
        .collect();

    assert_eq!(teams.len(), 3);
    for team in &teams {
        assert!(!team.clone().into_iter().has_duplicates());
    }
}

#[test]
fn cartesian_product_builds_configuration_grids() {
    let grid = cartesian_product(vec![
        vec!["debug", "release"],
        vec!["linux", "mac"],
    ]);
    assert_eq!(
        grid,
        vec![
            vec!["debug", "linux"],
            vec!["debug", "mac"],
            vec!["release", "linux"],
            vec!["release", "mac"],
        ]
    );
}

#[test]
fn maybe_results_render_in_join_output() {
    let row = [1u32]
        .into_iter()
        .full_outer_join(Vec::<u32>::new(), |o| *o, |i| *i)
        .next()
        .unwrap();
    assert_eq!(row.0.render(), "Maybe(1)");
    assert_eq!(row.1.render(), "Maybe.Empty");
}
