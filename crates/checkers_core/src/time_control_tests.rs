use super::*;
use std::thread;

#[test]
fn test_search_limits_depth_only() {
    let limits = SearchLimits::depth(5);
    assert_eq!(limits.depth, 5);
    assert!(limits.move_time.is_none());
    assert!(!limits.should_stop());
}

#[test]
fn test_default_limits_match_player_depth() {
    assert_eq!(SearchLimits::default().depth, 5);
}

#[test]
fn test_time_control_expiry() {
    let mut limits = SearchLimits::depth_and_time(4, Duration::from_millis(10));
    limits.start();
    assert!(!limits.should_stop());

    thread::sleep(Duration::from_millis(20));
    assert!(limits.time_control.check_time());
    assert!(limits.should_stop());
}

#[test]
fn test_time_control_no_limit() {
    let mut tc = TimeControl::new(None);
    tc.start();
    thread::sleep(Duration::from_millis(5));
    assert!(!tc.check_time());
    assert!(tc.elapsed() >= Duration::from_millis(5));
}

#[test]
fn test_stop_handle_stops_clone() {
    let tc = TimeControl::new(None);
    let copy = tc.clone();
    tc.stop_handle().store(true, Ordering::SeqCst);
    assert!(copy.is_stopped());
}

#[test]
fn test_check_interval() {
    let tc = TimeControl::default();
    assert!(tc.should_check_time(0));
    assert!(tc.should_check_time(2048));
    assert!(!tc.should_check_time(1000));
}

#[test]
fn test_custom_check_interval() {
    let tc = TimeControl::with_check_interval(None, 3);
    assert!(tc.should_check_time(0));
    assert!(!tc.should_check_time(2));
    assert!(tc.should_check_time(3));

    let every_node = TimeControl::with_check_interval(None, 0);
    assert!(every_node.should_check_time(1));
}
