//! Public API coverage for standout-query.

use standout_query::{
    between, cursor, equal, greater, greater_or_equal, less, less_or_equal, limit, limit_str,
    not_equal, not_one_of, offset, offset_str, one_of, select, validate, Criteria, Number,
    Operator, Query, QueryConfig, QueryError, Timestamp, Value, VersionConflict,
};

// ============================================================================
// Operator coverage
// ============================================================================

#[test]
fn operator_round_trips_through_name() {
    for op in Operator::ALL {
        assert_eq!(op.as_str().parse::<Operator>().unwrap(), op);
        assert_eq!(op.to_string(), op.as_str());
    }
}

#[test]
fn operator_undefined_code() {
    assert_eq!(Operator::name_for_code(0), standout_query::UNDEFINED);
    assert_eq!(Operator::name_for_code(8), "nin");
    assert_eq!(Operator::from_code(100), None);
}

#[test]
fn operator_serializes_as_short_name() {
    assert_eq!(
        serde_json::to_string(&Operator::NotIn).unwrap(),
        r#""nin""#
    );
    assert_eq!(
        serde_json::from_str::<Operator>(r#""gte""#).unwrap(),
        Operator::GreaterOrEqual
    );
}

// ============================================================================
// Option coverage
// ============================================================================

#[test]
fn every_constructor_targets_its_operator() {
    let query = Query::new(vec![
        equal("f", 1, vec![]),
        not_equal("f", 2, vec![]),
        greater("f", 3, vec![]),
        greater_or_equal("f", 4, vec![]),
        less("f", 5, vec![]),
        less_or_equal("f", 6, vec![]),
        one_of("f", vec![7, 8], vec![]),
        not_one_of("f", vec![9], vec![]),
        between("f", 11, 10, vec![]),
    ])
    .unwrap();

    let ops: Vec<Operator> = query
        .criteria("f")
        .unwrap()
        .iter()
        .map(Criteria::operator)
        .collect();
    assert_eq!(
        ops,
        [
            Operator::Equal,
            Operator::NotEqual,
            Operator::GreaterThan,
            Operator::GreaterOrEqual,
            Operator::LessThan,
            Operator::LessOrEqual,
            Operator::In,
            Operator::NotIn,
            Operator::GreaterOrEqual,
            Operator::LessOrEqual,
        ]
    );
}

#[test]
fn heterogeneous_values_share_one_query() {
    let query = Query::new(vec![
        equal("name", String::from("ada"), vec![]),
        equal("admin", true, vec![]),
        greater("score", 9.5f64, vec![]),
        less("created", Timestamp::from_secs(10), vec![]),
        one_of("level", vec![1u8, 2], vec![]),
    ])
    .unwrap();

    let first = |field: &str| query.criteria(field).unwrap()[0].value().clone();
    assert_eq!(first("name").as_str(), Some("ada"));
    assert_eq!(first("admin").as_bool(), Some(true));
    assert_eq!(first("score").as_f64(), Some(9.5));
    assert_eq!(first("created").as_timestamp(), Some(Timestamp(10_000)));
    assert_eq!(
        first("level").as_list(),
        Some(&[Value::Number(Number::U64(1)), Value::Number(Number::U64(2))][..])
    );
}

#[test]
fn between_with_strings() {
    let query = Query::new(vec![between("name", "m", "c", vec![])]).unwrap();
    let criteria = query.criteria("name").unwrap();
    assert_eq!(criteria[0].value().as_str(), Some("c"));
    assert_eq!(criteria[1].value().as_str(), Some("m"));
}

#[test]
fn one_of_rejecting_one_element_adds_nothing() {
    let result = Query::new(vec![one_of(
        "x",
        vec![1, 2, 3],
        vec![validate::from_fn(|n: &i32| *n != 2, "2 is not allowed")],
    )]);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("2 is not allowed"));
}

#[test]
fn failed_option_does_not_hide_others() {
    let err = Query::new(vec![
        equal("a", 0, vec![validate::min(1)]),
        offset_str("abc", vec![]),
        limit_str("9", vec![validate::range(10, 20)]),
        cursor("", vec![validate::not_empty()]),
    ])
    .unwrap_err();
    assert_eq!(err.errors().len(), 4);
    assert_eq!(err.to_string().lines().count(), 4);
}

#[test]
fn pagination_accessors() {
    let query = Query::new(vec![
        offset(3, vec![]),
        limit(0, vec![]),
        cursor("next", vec![]),
    ])
    .unwrap();
    assert_eq!(query.offset(), Some(3));
    assert_eq!(query.limit(), None);
    assert_eq!(query.cursor(), Some("next"));
}

#[test]
fn offset_str_failure_keeps_default() {
    assert!(matches!(
        Query::new(vec![offset_str("abc", vec![])]),
        Err(QueryError::Parse { field: "offset", .. })
    ));
    let query = Query::new(vec![offset_str("0", vec![])]).unwrap();
    assert_eq!(query.offset(), None);
}

#[test]
fn validator_regex_pattern() {
    let slug = validate::pattern(r"^[a-z0-9-]+$").unwrap();
    assert!(Query::new(vec![equal("slug", "hello-world", vec![slug])]).is_ok());

    let slug = validate::pattern(r"^[a-z0-9-]+$").unwrap();
    assert!(Query::new(vec![equal("slug", "Hello World", vec![slug])]).is_err());
}

// ============================================================================
// Serialization coverage
// ============================================================================

#[test]
fn query_serializes_for_debugging() {
    let query = Query::new(vec![
        equal("status", "active", vec![]),
        one_of("tag", vec!["a", "b"], vec![]),
        limit(5, vec![]),
    ])
    .unwrap();

    let json = serde_json::to_value(&query).unwrap();
    assert_eq!(json["limit"], 5);
    assert_eq!(
        json["criteria"]["status"],
        serde_json::json!([{ "op": "eq", "value": "active" }])
    );
    assert_eq!(
        json["criteria"]["tag"],
        serde_json::json!([{ "op": "in", "value": ["a", "b"] }])
    );
}

// ============================================================================
// Config and helpers
// ============================================================================

#[test]
fn config_pagination_from_yaml() {
    let config = QueryConfig::from_yaml_str("max_limit: 25\nmax_offset: 100\n").unwrap();
    let query = Query::new(config.pagination(Some("10"), Some("25"))).unwrap();
    assert_eq!(query.offset(), Some(10));
    assert_eq!(query.limit(), Some(25));

    let err = Query::new(config.pagination(Some("101"), Some("26"))).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.errors().len(), 2);
}

#[test]
fn select_helpers() {
    assert_eq!(select::single(&[1]), Some(&1));
    assert_eq!(select::single_by(&[1, 2, 3], |n| *n > 2), Some(&3));
    assert_eq!(select::single_by(&[1, 2, 3], |n| *n > 1), None);
}

#[test]
fn version_conflict_is_an_error() {
    let err: Box<dyn std::error::Error> = Box::new(VersionConflict {
        expected: 1,
        actual: 2,
    });
    assert_eq!(err.to_string(), "version conflict: expected 1, found 2");
}
