use stackfold::aggregator::{Aggregation, FrameRecord, StackSample};
use stackfold::profile::{build_profile, estimated_nanos, Mapping, ValueType};
use stackfold::utils::error::ProfileError;

fn frames(n: usize) -> Vec<FrameRecord> {
    (0..n)
        .map(|i| FrameRecord::new(format!("f{}.go", i), 10 * i as i64 + 5, 10 * i as i64))
        .collect()
}

fn aggregation_of(entries: Vec<(&str, u64, Vec<FrameRecord>)>) -> Aggregation {
    entries
        .into_iter()
        .map(|(stack, count, frames)| (stack.to_string(), StackSample::new(count, frames)))
        .collect()
}

#[test]
fn test_main_foo_scenario() {
    let aggregation = aggregation_of(vec![(
        "main;foo",
        3,
        vec![
            FrameRecord::new("main.go", 12, 10),
            FrameRecord::new("foo.go", 4, 2),
        ],
    )]);

    let profile = build_profile(&aggregation, 99).unwrap();

    assert_eq!(profile.functions.len(), 2);
    assert_eq!(profile.locations.len(), 2);
    assert_eq!(profile.samples.len(), 1);

    let sample = &profile.samples[0];
    assert_eq!(sample.values, vec![3, 30_303_030]);
    assert_eq!(profile.sample_function_names(sample), vec!["foo", "main"]);

    // IDs are handed out root first
    assert_eq!(sample.location_ids, vec![2, 1]);
    assert_eq!(profile.functions[0].id, 1);
    assert_eq!(profile.functions[0].name, "main");
    assert_eq!(profile.functions[0].start_line, 10);
    assert_eq!(profile.locations[0].lines[0].line, 12);
}

#[test]
fn test_empty_aggregation_keeps_fixed_header() {
    let profile = build_profile(&Aggregation::new(), 99).unwrap();

    assert!(profile.functions.is_empty());
    assert!(profile.locations.is_empty());
    assert!(profile.samples.is_empty());
    assert_eq!(
        profile.mappings,
        vec![Mapping {
            id: 1,
            has_functions: true
        }]
    );
    assert_eq!(
        profile.sample_types,
        vec![
            ValueType::new("samples", "count"),
            ValueType::new("time", "nanoseconds"),
        ]
    );
}

#[test]
fn test_shared_leaf_is_not_deduplicated() {
    let aggregation = aggregation_of(vec![("a;c", 1, frames(2)), ("b;c", 2, frames(2))]);

    let profile = build_profile(&aggregation, 100).unwrap();

    let c_functions: Vec<u64> = profile
        .functions
        .iter()
        .filter(|f| f.name == "c")
        .map(|f| f.id)
        .collect();
    assert_eq!(c_functions.len(), 2);
    assert_ne!(c_functions[0], c_functions[1]);
    assert_eq!(profile.locations.len(), 4);

    let leaf_locations: Vec<u64> = profile.samples.iter().map(|s| s.location_ids[0]).collect();
    assert_ne!(leaf_locations[0], leaf_locations[1]);
}

#[test]
fn test_sample_shape_per_entry() {
    let aggregation = aggregation_of(vec![
        ("main", 1, frames(1)),
        ("main;a;b;c;d", 5, frames(5)),
        ("main;a", 0, frames(2)),
    ]);

    let profile = build_profile(&aggregation, 250).unwrap();

    assert_eq!(profile.samples.len(), 3);
    assert_eq!(profile.functions.len(), 8);
    assert_eq!(profile.locations.len(), 8);

    for sample in &profile.samples {
        let names = profile.sample_function_names(sample);
        let mut root_first = names.clone();
        root_first.reverse();
        let signature = root_first.join(";");

        let entry = aggregation.get(&signature).unwrap();
        assert_eq!(sample.location_ids.len(), entry.frames.len());
        assert_eq!(sample.values[0], entry.count as i64);
        assert_eq!(sample.values[1], entry.count as i64 * (1_000_000_000 / 250));
    }
}

#[test]
fn test_ids_are_unique_and_sequential() {
    let aggregation = aggregation_of(vec![("x;y", 1, frames(2)), ("z", 1, frames(1))]);

    let profile = build_profile(&aggregation, 99).unwrap();

    let mut function_ids: Vec<u64> = profile.functions.iter().map(|f| f.id).collect();
    function_ids.sort_unstable();
    assert_eq!(function_ids, vec![1, 2, 3]);

    let mut location_ids: Vec<u64> = profile.locations.iter().map(|l| l.id).collect();
    location_ids.sort_unstable();
    assert_eq!(location_ids, vec![1, 2, 3]);
}

#[test]
fn test_nanos_truncate_before_multiplying() {
    for hz in [1, 3, 7, 99, 100, 997, 1_000_000_000] {
        for count in [0i64, 1, 2, 99, 12_345] {
            assert_eq!(estimated_nanos(count, hz), count * (1_000_000_000 / hz as i64));
        }
    }
}

#[test]
fn test_missing_frames_rejected() {
    let aggregation = aggregation_of(vec![("main;foo", 3, Vec::new())]);

    let err = build_profile(&aggregation, 99).unwrap_err();

    assert_eq!(
        err,
        ProfileError::FrameCountMismatch {
            stack: "main;foo".to_string(),
            segments: 2,
            records: 0,
        }
    );
}

#[test]
fn test_zero_hz_rejected_before_input_checks() {
    let aggregation = aggregation_of(vec![("main;foo", 3, Vec::new())]);

    assert_eq!(
        build_profile(&aggregation, 0),
        Err(ProfileError::InvalidFrequency(0))
    );
}
