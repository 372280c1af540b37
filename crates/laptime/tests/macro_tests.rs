use laptime::{Microseconds, Ticks, Timer, lap, timed};

#[test]
fn test_timed_with_message_from_another_crate() {
    let mut timer = Timer::<Microseconds>::new();
    let value = timed!("squares", timer, { (0..4u32).map(|i| i * i).sum::<u32>() });

    assert_eq!(value, 14);
    assert!(!timer.is_running());
    assert_eq!(timer.len(), 2);
    assert_eq!(timer.all_samples().first(), Some(&Ticks::ZERO));
}

#[test]
fn test_lap_from_another_crate() {
    let mut timer = Timer::<Microseconds>::new();
    timer.start();
    let value = lap!(timer, { "lap" });
    timer.stop();

    assert_eq!(value, "lap");
    assert_eq!(timer.len(), 3);
}
