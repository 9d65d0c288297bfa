use springrow::{parse_record, parse_records, ArrangementCounter, Count};

const SAMPLE: &str = "\
???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1";

fn totals(factor: usize) -> (Vec<Count>, Count) {
    let records = parse_records(SAMPLE).unwrap();
    let mut counter = ArrangementCounter::new();

    let counts: Vec<_> = records
        .iter()
        .map(|record| counter.count_record(&record.unfold(factor)))
        .collect();
    let total = counts.iter().sum();

    (counts, total)
}

#[test]
fn sample_records() {
    let (counts, total) = totals(1);

    assert_eq!(counts, vec![1, 4, 1, 1, 4, 10]);
    assert_eq!(total, 21);
}

#[test]
fn sample_records_unfolded() {
    let (counts, total) = totals(5);

    assert_eq!(counts, vec![1, 16384, 1, 16, 2500, 506_250]);
    assert_eq!(total, 525_152);
}

#[test]
fn unfold_once_counts_the_same() {
    for line in SAMPLE.lines() {
        let record = parse_record(line).unwrap();
        let mut counter = ArrangementCounter::new();

        let base = counter.count_record(&record);
        assert_eq!(counter.count_record(&record.unfold(1)), base, "{}", record);
    }
}

#[test]
fn unfolding_is_not_a_simple_power() {
    let record = parse_record("??? 1").unwrap();
    let mut counter = ArrangementCounter::new();

    assert_eq!(counter.count_record(&record), 3);
    // the joint cells admit placements the isolated copies do not
    assert_eq!(counter.count_record(&record.unfold(2)), 15);
}

#[test]
fn one_counter_for_the_whole_batch() {
    let records = parse_records(SAMPLE).unwrap();

    let mut shared = ArrangementCounter::new();
    let with_shared_cache: Vec<_> = records
        .iter()
        .map(|record| shared.count_record(&record.unfold(5)))
        .collect();

    let isolated: Vec<_> = records
        .iter()
        .map(|record| ArrangementCounter::new().count_record(&record.unfold(5)))
        .collect();

    assert_eq!(with_shared_cache, isolated);
}

#[test]
fn bad_input_is_rejected() {
    assert!(parse_records("???.### 1,1,3\n..!. 1\n").is_err());
}
