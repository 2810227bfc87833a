use bridgehand_cli::run;

#[test]
fn hunt_finds_a_long_suit() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        [
            "bridgehand", "hunt", "--seed", "42", "--seat", "south", "--min-biddable", "3",
        ],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));
    let s = String::from_utf8(out).unwrap();
    assert!(s.starts_with("Found after "));
    assert!(s.contains("South holds"));
    assert!(s.contains("Dealer:"));
    assert!(s.contains("BPC"));
}

#[test]
fn hunt_is_deterministic() {
    let args = ["bridgehand", "hunt", "--seed", "9", "--seat", "west", "--min-biddable", "4"];
    let mut a: Vec<u8> = Vec::new();
    let mut b: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    assert_eq!(run(args, &mut a, &mut err), 0);
    assert_eq!(run(args, &mut b, &mut err), 0);
    assert_eq!(a, b);
}

#[test]
fn hunt_exhausted_exits_with_error() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        [
            "bridgehand",
            "hunt",
            "--seed",
            "1",
            "--min-biddable",
            "30",
            "--max-boards",
            "10",
        ],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 2);
    assert!(out.is_empty());
    let e = String::from_utf8_lossy(&err);
    assert!(e.starts_with("Error: Not found:"));
    assert!(e.contains("in 10 board(s)"));
}
