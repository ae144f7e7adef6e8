use std::sync::{Arc, Mutex};

use super::*;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn captured<R>(f: impl FnOnce() -> R) -> (R, String) {
    let cap = Capture::default();
    let writer = cap.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .with_writer(move || writer.clone())
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    let text = String::from_utf8(cap.0.lock().unwrap().clone()).unwrap();
    (out, text)
}

#[test]
fn no_animation_directives_means_single_unnamed_frame() {
    let cfg = scan_config(&[Command::cuboid(0.0, 0.0, 0.0, 1.0, 1.0, 1.0)]).unwrap();
    assert_eq!(cfg.frame_count, 1);
    assert_eq!(cfg.base_name, "");
}

#[test]
fn basename_without_frames_keeps_single_frame() {
    let cfg = scan_config(&[Command::basename("solo")]).unwrap();
    assert_eq!(cfg.frame_count, 1);
    assert_eq!(cfg.base_name, "solo");
}

#[test]
fn vary_without_frames_is_fatal() {
    let err = scan_config(&[Command::vary("k", 0, 3, 0.0, 1.0)]).unwrap_err();
    assert!(matches!(err, AnimdlError::Animation(_)));
    assert!(AnimationPlan::build(&[Command::vary("k", 0, 3, 0.0, 1.0)]).is_err());
}

#[test]
fn frames_without_basename_uses_default_and_logs_note() {
    let (cfg, log) = captured(|| scan_config(&[Command::frames(3)]).unwrap());
    assert_eq!(cfg.base_name, DEFAULT_BASENAME);
    assert_eq!(cfg.frame_count, 3);
    assert!(log.contains("INFO"));
    assert!(log.contains("base"));
}

#[test]
fn frames_must_be_a_positive_integer() {
    assert!(scan_config(&[Command::frames(0)]).is_err());
    let fractional = Command::new(Op::Frames, vec![2.5.into()]);
    assert!(scan_config(&[fractional]).is_err());
    let missing = Command::new(Op::Frames, vec![]);
    assert!(scan_config(&[missing]).is_err());
}

#[test]
fn oversized_frame_counts_are_rejected() {
    let huge = Command::new(Op::Frames, vec![1.0e20.into()]);
    assert!(matches!(
        AnimationPlan::build(&[huge]),
        Err(AnimdlError::Animation(_))
    ));

    let over = scan_config(&[Command::frames(MAX_FRAME_COUNT + 1)]).unwrap_err();
    assert!(over.to_string().contains("frames must be <="));
    assert_eq!(
        scan_config(&[Command::frames(MAX_FRAME_COUNT)])
            .unwrap()
            .frame_count,
        MAX_FRAME_COUNT
    );

    assert!(matches!(
        build_timeline(&[], u64::MAX),
        Err(AnimdlError::Animation(_))
    ));
}

#[test]
fn timeline_length_matches_frame_count() {
    for n in [1u64, 2, 7, 30] {
        let plan = AnimationPlan::build(&[Command::frames(n), Command::basename("b")]).unwrap();
        assert_eq!(plan.knobs.len() as u64, n);
        assert!(plan.knobs.rows().iter().all(|row| row.is_empty()));
    }
}

#[test]
fn vary_hits_endpoints_exactly_and_interpolates_between() {
    let (f0, f1, v0, v1) = (2u64, 9u64, 0.3, 1.7);
    let timeline = build_timeline(&[Command::vary("k", f0, f1, v0, v1)], 12).unwrap();

    assert_eq!(timeline.value(FrameIndex(f0), "k"), Some(v0));
    assert_eq!(timeline.value(FrameIndex(f1), "k"), Some(v1));
    for i in (f0 + 1)..f1 {
        let expected = v0 + (v1 - v0) * ((i - f0) as f64) / ((f1 - f0) as f64);
        assert_eq!(timeline.value(FrameIndex(i), "k"), Some(expected));
    }
    assert_eq!(timeline.value(FrameIndex(0), "k"), None);
    assert_eq!(timeline.value(FrameIndex(10), "k"), None);
}

#[test]
fn knobs_are_independent() {
    let timeline = build_timeline(
        &[
            Command::vary("a", 0, 2, 0.0, 2.0),
            Command::vary("b", 1, 3, 10.0, 40.0),
        ],
        4,
    )
    .unwrap();
    assert_eq!(timeline.value(FrameIndex(1), "a"), Some(1.0));
    assert_eq!(timeline.value(FrameIndex(1), "b"), Some(10.0));
    assert_eq!(timeline.value(FrameIndex(3), "a"), None);
    assert_eq!(timeline.value(FrameIndex(3), "b"), Some(40.0));
}

#[test]
fn overlapping_vary_later_directive_wins() {
    let timeline = build_timeline(
        &[
            Command::vary("k", 0, 4, 0.0, 4.0),
            Command::vary("k", 2, 6, 100.0, 140.0),
        ],
        8,
    )
    .unwrap();
    assert_eq!(timeline.value(FrameIndex(1), "k"), Some(1.0));
    assert_eq!(timeline.value(FrameIndex(2), "k"), Some(100.0));
    assert_eq!(timeline.value(FrameIndex(4), "k"), Some(120.0));
    assert_eq!(timeline.value(FrameIndex(6), "k"), Some(140.0));
}

#[test]
fn zero_length_and_reversed_ranges_are_rejected() {
    let err = build_timeline(&[Command::vary("k", 3, 3, 0.0, 1.0)], 5).unwrap_err();
    assert!(matches!(err, AnimdlError::Animation(_)));
    assert!(build_timeline(&[Command::vary("k", 4, 1, 0.0, 1.0)], 5).is_err());
}

#[test]
fn vary_outside_frame_range_is_rejected() {
    let err = build_timeline(&[Command::vary("k", 0, 5, 0.0, 1.0)], 5).unwrap_err();
    assert!(err.to_string().contains("outside"));
}

#[test]
fn vary_requires_knob_name() {
    let mut cmd = Command::vary("k", 0, 1, 0.0, 1.0);
    cmd.knob = None;
    assert!(build_timeline(&[cmd], 2).is_err());
}

#[test]
fn timeline_serializes_as_array_of_rows() {
    let timeline = build_timeline(&[Command::vary("k", 0, 1, 0.0, 1.0)], 3).unwrap();
    let json = serde_json::to_string(&timeline).unwrap();
    assert_eq!(json, r#"[{"k":0.0},{"k":1.0},{}]"#);
}
