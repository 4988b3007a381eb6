use bvmem::{Footprint, MemoryReport, NUM_BITS};

fn run(seed: u64) -> String {
    let bv = bvmem::generate_with_seed(seed).unwrap();
    let mut out = vec![];
    MemoryReport::new(NUM_BITS, bv.size_in_bytes())
        .write_to(&mut out)
        .unwrap();
    String::from_utf8(out).unwrap()
}

fn parse_value(line: &str, unit: &str) -> f64 {
    line.strip_prefix("Memory usage: ")
        .and_then(|s| s.strip_suffix(unit))
        .unwrap()
        .parse()
        .unwrap()
}

#[test]
fn test_four_lines() {
    let text = run(113);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Bit vector size: 1048576 bits");
    assert_eq!(lines[1], "Memory usage: 131072 bytes");
    assert_eq!(lines[2], "Memory usage: 128.00 KB");
    assert!(text.ends_with(" MB\n"));
}

#[test]
fn test_lines_are_consistent() {
    for seed in [0, 1, 113] {
        let text = run(seed);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Bit vector size: 1048576 bits");

        let bytes = parse_value(lines[1], " bytes");
        let kb = parse_value(lines[2], " KB");
        let mb = parse_value(lines[3], " MB");
        assert!(bytes >= (NUM_BITS / 8) as f64);
        assert!((kb - bytes / 1024.0).abs() <= 0.005 + f64::EPSILON);
        assert!((mb - bytes / 1024.0 / 1024.0).abs() <= 0.005 + f64::EPSILON);
    }
}

#[test]
fn test_same_seed_same_report() {
    assert_eq!(run(7), run(7));
}
