use bridgehand_cli::run;

fn run_capture(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn eval_reports_suit_table() {
    let (code, out, _) = run_capture(&["bridgehand", "eval", "AKQJT...98765432"]);
    assert_eq!(code, 0);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Hand: AKQJT...98765432");
    assert!(lines[1].starts_with("Suit"));
    // spades: solid, two quick tricks, biddable 2
    assert!(lines[2].contains("AKQJT"));
    assert!(lines[2].contains("yes"));
    assert!(lines[2].contains("2.0"));
    // clubs: eight small cards
    assert!(lines[5].contains("98765432"));
    assert_eq!(lines[6], "HCP 10  BPC 18");
}

#[test]
fn eval_accepts_dash_for_void() {
    let (code, out, _) = run_capture(&["bridgehand", "eval", "KJ4.A963.-.QT8752"]);
    assert_eq!(code, 0);
    assert!(out.starts_with("Hand: KJ4.A963..QT8752"));
}

#[test]
fn eval_penalizes_unprotected_honors() {
    let (code, out, _) = run_capture(&["bridgehand", "eval", "AT98.K.QJ.765432"]);
    assert_eq!(code, 0);
    assert!(out.contains("HCP 10  BPC 11"));
}

#[test]
fn eval_rejects_bad_notation() {
    for bad in ["AKQJT..98765432", "AKQJX...98765432", "AAKQJT...8765432"] {
        let (code, out, err) = run_capture(&["bridgehand", "eval", bad]);
        assert_eq!(code, 2, "{} should be rejected", bad);
        assert!(out.is_empty());
        assert!(err.starts_with("Error: Engine error:"));
    }
}
