use super::*;

fn slot(date: &str) -> Timeslot {
    Timeslot {
        id: format!("slot-{date}"),
        date: date.to_owned(),
        allows_alcohol: false,
        store_id: "790".to_owned(),
        fulfillment_type: "pickup".to_owned(),
        capacity: 1,
        day_of_week: 0,
        start_time: String::new(),
        end_time: String::new(),
    }
}

#[test]
fn counts_each_distinct_date_once_and_sum_matches_input() {
    let slots = vec![slot("2024-01-02"), slot("2024-01-02"), slot("2024-01-03")];

    let counts = slot_counts_by_date(&slots);

    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get("2024-01-02"), Some(&2));
    assert_eq!(counts.get("2024-01-03"), Some(&1));
    assert_eq!(counts.values().sum::<usize>(), slots.len());
}

#[test]
fn empty_input_yields_empty_map() {
    let counts = slot_counts_by_date(&[]);
    assert!(counts.is_empty());
}

#[test]
fn dates_iterate_in_ascending_lexical_order() {
    let slots = vec![
        slot("2024-02-01"),
        slot("2024-01-15"),
        slot("2024-01-02"),
        slot("2024-02-01"),
    ];

    let dates: Vec<String> = slot_counts_by_date(&slots).into_keys().collect();

    assert_eq!(dates, vec!["2024-01-02", "2024-01-15", "2024-02-01"]);
    assert!(dates.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn aggregation_is_deterministic_for_identical_input() {
    let slots = vec![slot("2024-01-03"), slot("2024-01-02"), slot("2024-01-03")];

    let first = slot_counts_by_date(&slots);
    let second = slot_counts_by_date(&slots);

    assert_eq!(first, second);
}
