//! Integration tests for frame grouping over record files

use std::collections::BTreeSet;
use std::io::Cursor;

use super::helpers::{fixtures_dir, load_fixture, temp_file};
use pedview::{FrameSource, ReplayError};

fn frames_of(body: &str) -> Vec<pedview::Frame> {
    FrameSource::from_reader(Cursor::new(body.to_string()))
        .collect::<Result<Vec<_>, _>>()
        .expect("fixture should parse")
}

#[test]
fn corridor_fixture_groups_by_timestamp() {
    let frames = frames_of(&load_fixture("corridor.csv"));
    assert_eq!(frames.len(), 5);

    let times: Vec<f64> = frames.iter().map(|f| f.time()).collect();
    assert_eq!(times, vec![0.0, 0.1, 0.2, 0.3, 0.4]);
    assert_eq!(frames[0].len(), 3);
    assert!(frames[3].contains("4"));
    assert!(!frames[3].contains("3"));
}

#[test]
fn timestamps_strictly_increase() {
    let frames = frames_of(&load_fixture("corridor.csv"));
    for pair in frames.windows(2) {
        assert!(pair[0].time() < pair[1].time());
    }
}

#[test]
fn union_of_frame_agents_equals_input_ids() {
    let body = load_fixture("corridor.csv");
    let input_ids: BTreeSet<String> = body
        .lines()
        .skip(1)
        .filter_map(|line| line.split(',').nth(1))
        .map(|id| id.trim().to_string())
        .collect();

    let frames = frames_of(&body);
    let frame_ids: BTreeSet<String> = frames
        .iter()
        .flat_map(|f| f.ids().map(|id| id.as_str().to_string()))
        .collect();

    assert_eq!(frame_ids, input_ids);
}

#[test]
fn parsing_twice_gives_identical_frames() {
    let body = load_fixture("corridor.csv");
    assert_eq!(frames_of(&body), frames_of(&body));
}

#[test]
fn goal_sign_column_is_optional_per_row() {
    let frames = frames_of(&load_fixture("corridor.csv"));
    let first = &frames[0];
    assert_eq!(first.get("1").unwrap().goal_sign, Some(1));
    assert_eq!(first.get("2").unwrap().goal_sign, Some(-1));
    assert_eq!(first.get("3").unwrap().goal_sign, None);
}

#[test]
fn malformed_line_reports_exact_line() {
    let mut source = FrameSource::from_reader(Cursor::new(load_fixture("malformed.csv")));
    let err = source.next_frame().unwrap_err();
    match &err {
        ReplayError::MalformedRecord { line, raw, .. } => {
            assert_eq!(*line, 3);
            assert!(raw.starts_with("abc"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("line 3"));

    // The stream is dead after an error
    assert!(source.next_frame().unwrap().is_none());
}

#[test]
fn header_only_file_is_empty_stream() {
    let mut source = FrameSource::open(fixtures_dir().join("header_only.csv")).unwrap();
    assert!(matches!(source.next_frame(), Err(ReplayError::EmptyStream)));
}

#[test]
fn single_timestamp_yields_one_frame() {
    let frames = frames_of(&load_fixture("single_frame.csv"));
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].len(), 2);
}

#[test]
fn missing_file_is_reported() {
    let result = FrameSource::open(fixtures_dir().join("does_not_exist.csv"));
    assert!(matches!(result, Err(ReplayError::FileNotFound { .. })));
}

#[test]
fn open_reads_from_disk() {
    let (_dir, path) = temp_file(
        "run.csv",
        "time,id,x,y,vx,vy,radius\n0.0,a,1,1,1,0,0.2\n0.5,a,1.5,1,1,0,0.2\n",
    );
    let frames: Vec<_> = FrameSource::open(&path)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[1].time(), 0.5);
}

#[test]
fn whitespace_around_fields_is_trimmed() {
    let frames = frames_of("time, id, x, y, vx, vy, radius\n 0.0 , a , 1 , 1 , 1 , 0 , 0.2 \n");
    let record = frames[0].get("a").expect("trimmed id");
    assert_eq!(record.x, 1.0);
    assert_eq!(record.radius, 0.2);
}
