use recbench::harness::{self, HarnessConfig, ITERATIVE, RECURSIVE};

struct Row {
    alg: String,
    n: u64,
    tempo: u64,
}

fn parse(out: Vec<u8>) -> (String, Vec<Row>) {
    let out = String::from_utf8(out).unwrap();
    let mut lines = out.lines();
    let header = lines.next().unwrap().to_owned();

    let rows = lines
        .map(|l| {
            let fields: Vec<_> = l.split(',').collect();
            assert_eq!(fields.len(), 3, "line: {l:?}");
            Row {
                alg: fields[0].to_owned(),
                n: fields[1].parse().unwrap(),
                // Parsing as unsigned also checks that no time is negative.
                tempo: fields[2].parse().unwrap(),
            }
        })
        .collect();

    (header, rows)
}

fn check_order(config: &HarnessConfig, rows: &[Row]) {
    assert_eq!(rows.len(), config.expected_rows());

    let mut expected = Vec::new();
    for n in config.sizes.clone() {
        for _ in 0..config.trials {
            expected.push((RECURSIVE, n));
            expected.push((ITERATIVE, n));
        }
    }

    let got: Vec<_> = rows.iter().map(|r| (r.alg.as_str(), r.n)).collect();
    assert_eq!(got, expected);
}

#[test]
fn fibonacci_small_range() {
    let config = HarnessConfig {
        sizes: 1..=3,
        trials: 1,
    };
    let (header, rows) = parse(harness::fibonacci(&config, Vec::new()).unwrap());

    assert_eq!(header, "alg,n,tempo");
    let got: Vec<_> = rows.iter().map(|r| format!("{},{}", r.alg, r.n)).collect();
    assert_eq!(
        got,
        [
            "recursivo,1",
            "iterativo,1",
            "recursivo,2",
            "iterativo,2",
            "recursivo,3",
            "iterativo,3",
        ]
    );
}

#[test]
fn fibonacci_default_run() {
    let config = HarnessConfig::default();
    assert_eq!(config.expected_rows(), 700);

    let (header, rows) = parse(harness::fibonacci(&config, Vec::new()).unwrap());
    assert_eq!(header, "alg,n,tempo");
    check_order(&config, &rows);
}

#[test]
fn factorial_default_run() {
    let config = HarnessConfig::default();

    let (header, rows) = parse(harness::factorial(&config, Vec::new()).unwrap());
    assert_eq!(header, "alg,n,tempo");
    check_order(&config, &rows);
}

#[test]
fn recursion_costs_more_for_large_n() {
    let config = HarnessConfig {
        sizes: 30..=30,
        trials: 3,
    };
    let (_, rows) = parse(harness::fibonacci(&config, Vec::new()).unwrap());

    let fastest = |alg: &str| {
        rows.iter()
            .filter(|r| r.alg == alg)
            .map(|r| r.tempo)
            .min()
            .unwrap()
    };

    // ~2.7M calls against 29 additions; not close on any machine.
    assert!(fastest(RECURSIVE) > fastest(ITERATIVE));
}
