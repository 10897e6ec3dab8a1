use day6::{count_after_days, count_after_days_naive};

#[test]
fn naive_and_counting_simulations_agree() {
    let timers = [3, 4, 3, 1, 2];
    assert_eq!(count_after_days_naive(&timers, 18), 26);
    assert_eq!(count_after_days(&timers, 18), 26);
    assert_eq!(
        count_after_days_naive(&timers, 80) as u64,
        count_after_days(&timers, 80)
    );
}
