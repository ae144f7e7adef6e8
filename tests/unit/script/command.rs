use super::*;

#[test]
fn unknown_ops_are_preserved_verbatim() {
    let cmd: Command = serde_json::from_str(r#"{"op":"mesh","args":["teapot.obj"]}"#).unwrap();
    assert_eq!(cmd.op, Op::Other("mesh".to_string()));
    assert_eq!(cmd.op.to_string(), "mesh");
}

#[test]
fn known_ops_parse_to_variants() {
    for (name, op) in [
        ("box", Op::Box),
        ("sphere", Op::Sphere),
        ("torus", Op::Torus),
        ("line", Op::Line),
        ("move", Op::Move),
        ("scale", Op::Scale),
        ("rotate", Op::Rotate),
        ("push", Op::Push),
        ("pop", Op::Pop),
        ("display", Op::Display),
        ("save", Op::Save),
        ("frames", Op::Frames),
        ("basename", Op::Basename),
        ("vary", Op::Vary),
    ] {
        assert_eq!(Op::from(name.to_string()), op);
        assert_eq!(op.as_str(), name);
    }
}

#[test]
fn constants_alias_maps_to_material() {
    let cmd: Command = serde_json::from_str(
        r#"{"op":"box","args":[0,0,0,1,1,1],"constants":"shiny"}"#,
    )
    .unwrap();
    assert_eq!(cmd.material.as_deref(), Some("shiny"));
    assert_eq!(cmd.knob, None);
}

#[test]
fn mixed_operands_deserialize() {
    let cmd: Command =
        serde_json::from_str(r#"{"op":"rotate","args":["y",90],"knob":"spin"}"#).unwrap();
    assert_eq!(cmd, Command::rotate("y", 90.0).with_knob("spin"));
    assert_eq!(cmd.arg_str(0), Some("y"));
    assert_eq!(cmd.arg_num(1), Some(90.0));
    assert_eq!(cmd.arg_num(0), None);
}

#[test]
fn expect_num_reports_op_and_position() {
    let cmd = Command::new(Op::Move, vec![Arg::Num(1.0)]);
    let err = cmd.expect_num(2).unwrap_err().to_string();
    assert!(err.contains("'move'"));
    assert!(err.contains("position 2"));
}

#[test]
fn scaled_nums_applies_multiplier() {
    let cmd = Command::translate(1.0, -2.0, 4.0);
    let [x, y, z] = cmd.scaled_nums::<3>(0.5).unwrap();
    assert_eq!((x, y, z), (0.5, -1.0, 2.0));
    assert!(cmd.scaled_nums::<4>(1.0).is_err());
}

#[test]
fn serialize_omits_absent_knob_and_material() {
    let json = serde_json::to_string(&Command::push()).unwrap();
    assert_eq!(json, r#"{"op":"push","args":[]}"#);
}
