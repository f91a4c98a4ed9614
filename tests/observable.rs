mod common;

use common::Recorder;
use countup::Observable;

#[test]
fn subscribe_delivers_current_value_immediately() {
    let observable = Observable::new(7);
    let recorder = Recorder::new();
    let sink = recorder.sink();
    let _sub = observable.subscribe(move |v: &i32| sink(*v));
    assert_eq!(recorder.values(), vec![7]);
}

#[test]
fn set_notifies_all_subscribers_in_order() {
    let observable = Observable::new(0);
    let order = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));

    let first = std::sync::Arc::clone(&order);
    let _a = observable.subscribe(move |v: &i32| first.lock().push(("a", *v)));
    let second = std::sync::Arc::clone(&order);
    let _b = observable.subscribe(move |v: &i32| second.lock().push(("b", *v)));

    observable.set(3);

    assert_eq!(
        *order.lock(),
        vec![("a", 0), ("b", 0), ("a", 3), ("b", 3)]
    );
}

#[test]
fn unsubscribe_stops_delivery() {
    let observable = Observable::new(0);
    let recorder = Recorder::new();
    let sink = recorder.sink();
    let sub = observable.subscribe(move |v: &i32| sink(*v));

    observable.set(1);
    sub.unsubscribe();
    observable.set(2);

    assert_eq!(recorder.values(), vec![0, 1]);
    assert_eq!(observable.subscriber_count(), 0);
}

#[test]
fn dropping_subscription_unsubscribes() {
    let observable = Observable::new(0);
    let recorder = Recorder::new();
    {
        let sink = recorder.sink();
        let _sub = observable.subscribe(move |v: &i32| sink(*v));
        assert_eq!(observable.subscriber_count(), 1);
    }
    observable.set(9);
    assert_eq!(recorder.values(), vec![0]);
}

#[test]
fn update_returns_and_publishes_new_value() {
    let observable = Observable::new(10);
    let recorder = Recorder::new();
    let sink = recorder.sink();
    let _sub = observable.subscribe(move |v: &i32| sink(*v));

    let next = observable.update(|v| v * 2);

    assert_eq!(next, 20);
    assert_eq!(observable.get(), 20);
    assert_eq!(recorder.values(), vec![10, 20]);
}

#[test]
fn instances_do_not_share_subscribers() {
    let left = Observable::new(0);
    let right = Observable::new(0);
    let recorder = Recorder::new();
    let sink = recorder.sink();
    let _sub = left.subscribe(move |v: &i32| sink(*v));

    right.set(5);

    assert_eq!(recorder.values(), vec![0]);
    assert_eq!(right.subscriber_count(), 0);
}

#[test]
fn concurrent_updates_are_not_lost() {
    let observable = std::sync::Arc::new(Observable::new(0u64));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let observable = std::sync::Arc::clone(&observable);
            std::thread::spawn(move || {
                for _ in 0..5_000 {
                    observable.update(|v| v + 1);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(observable.get(), 40_000);
}

#[test]
fn subscription_dropped_mid_notification_misses_that_value() {
    let observable = Observable::new(0);
    let later_slot: std::sync::Arc<parking_lot::Mutex<Option<countup::Subscription<i32>>>> =
        std::sync::Arc::new(parking_lot::Mutex::new(None));

    // Registered first, so it runs before the one it removes.
    let slot = std::sync::Arc::clone(&later_slot);
    let _remover = observable.subscribe(move |v: &i32| {
        if *v == 1 {
            slot.lock().take();
        }
    });

    let recorder = Recorder::new();
    let sink = recorder.sink();
    *later_slot.lock() = Some(observable.subscribe(move |v: &i32| sink(*v)));

    observable.set(1);

    assert_eq!(recorder.values(), vec![0]);
    assert_eq!(observable.subscriber_count(), 1);
}
