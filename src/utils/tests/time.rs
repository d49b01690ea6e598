#[cfg(test)]
mod tests {
    use crate::current_time_nanos;
    use crate::utils::Timer;
    use std::thread;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    #[test]
    fn test_current_time_nanos_increases() {
        let time1 = current_time_nanos();
        // Sleep for a bit to ensure time passes
        thread::sleep(Duration::from_millis(5));
        let time2 = current_time_nanos();

        // The second time should be greater than the first
        assert!(time2 > time1, "Time should increase between calls");
    }

    #[test]
    fn test_current_time_nanos_is_reasonably_current() {
        // Get current time using both methods
        let time_from_function = current_time_nanos();
        let time_direct = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_nanos() as u64;

        // The times should be very close to each other
        // Allow a small difference due to execution time between the two calls
        let difference = time_direct.abs_diff(time_from_function);
        assert!(
            difference < Duration::from_secs(1).as_nanos() as u64,
            "Times should be within one second of each other"
        );
    }

    #[test]
    fn test_timer_measures_elapsed_time() {
        let timer = Timer::start();
        thread::sleep(Duration::from_millis(5));
        let elapsed = timer.elapsed_ns();

        assert!(
            elapsed >= Duration::from_millis(5).as_nanos() as u64,
            "Timer should measure at least the slept duration"
        );
    }
}
