//! Unit tests for the response-time window

#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_empty_window_average_is_zero() {
        let window = ResponseTimeWindow::new(10);
        assert_eq!(window.average_ms(), 0.0);
        assert_eq!(window.peak_ms(), 0.0);
        assert!(window.is_empty());
    }

    #[test]
    fn test_average_covers_current_samples() {
        let mut window = ResponseTimeWindow::new(10);
        window.push(10.0);
        window.push(20.0);
        window.push(30.0);

        assert_eq!(window.len(), 3);
        assert_eq!(window.average_ms(), 20.0);
    }

    #[test]
    fn test_capacity_is_never_exceeded() {
        let mut window = ResponseTimeWindow::new(10);
        for i in 0..50 {
            window.push(i as f64);
            assert!(window.len() <= 10);
        }
        assert_eq!(window.len(), 10);
    }

    #[test]
    fn test_oldest_sample_evicted_first() {
        let mut window = ResponseTimeWindow::new(10);
        for i in 1..=11 {
            window.push(i as f64);
        }

        let stats = window.stats();
        // Eleven insertions into a window of ten: the first sample is gone,
        // the newest is at the back.
        assert!(!stats.samples.contains(&1.0));
        assert_eq!(stats.samples.first(), Some(&2.0));
        assert_eq!(stats.samples.last(), Some(&11.0));
    }

    #[test]
    fn test_peak_survives_eviction() {
        let mut window = ResponseTimeWindow::new(3);
        window.push(500.0);
        for _ in 0..10 {
            window.push(1.0);
        }

        assert!(!window.stats().samples.contains(&500.0));
        assert_eq!(window.peak_ms(), 500.0);
    }

    #[test]
    fn test_peak_is_non_decreasing() {
        let mut window = ResponseTimeWindow::new(5);
        let mut last_peak = 0.0;
        for latency in [3.0, 9.0, 2.0, 9.0, 1.0, 12.0, 4.0] {
            window.push(latency);
            assert!(window.peak_ms() >= last_peak);
            last_peak = window.peak_ms();
        }
        assert_eq!(window.peak_ms(), 12.0);
    }

    #[test]
    fn test_average_tracks_window_not_history() {
        let mut window = ResponseTimeWindow::new(2);
        window.push(100.0);
        window.push(100.0);
        window.push(10.0);
        window.push(10.0);

        // Only the two surviving samples count.
        assert_eq!(window.average_ms(), 10.0);
        assert_eq!(window.peak_ms(), 100.0);
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut window = ResponseTimeWindow::new(0);
        assert_eq!(window.capacity(), 1);
        window.push(5.0);
        window.push(7.0);
        assert_eq!(window.len(), 1);
        assert_eq!(window.average_ms(), 7.0);
    }

    #[test]
    fn test_all_zero_samples_average_zero() {
        let mut window = ResponseTimeWindow::new(4);
        window.push(0.0);
        window.push(0.0);
        assert_eq!(window.average_ms(), 0.0);
    }

    #[test]
    fn test_stats_mirror_window_state() {
        let mut window = ResponseTimeWindow::new(10);
        window.push(4.0);
        window.push(8.0);

        let stats = window.stats();
        assert_eq!(stats.samples, vec![4.0, 8.0]);
        assert_eq!(stats.average_ms, 6.0);
        assert_eq!(stats.peak_ms, 8.0);
    }
}
