mod common;
use crate::common::{init_tracing, with_timeout};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use devlaunch::exit::{ExitTrigger, OnceExit, register_process_exit};

fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&count);
    (count, move || {
        c.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn callback_runs_once_across_all_triggers() {
    init_tracing();
    let (count, callback) = counter();
    let once = OnceExit::new(callback);

    assert!(!once.has_fired());
    assert!(once.trigger(ExitTrigger::Interrupt));
    assert!(!once.trigger(ExitTrigger::Terminate));
    assert!(!once.trigger(ExitTrigger::NormalExit));
    assert!(!once.trigger(ExitTrigger::Interrupt));

    assert!(once.has_fired());
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn guard_is_set_before_callback_runs() {
    init_tracing();
    let seen = Arc::new(AtomicUsize::new(0));
    let holder: Arc<std::sync::Mutex<Option<OnceExit>>> = Arc::new(std::sync::Mutex::new(None));

    let seen_cb = Arc::clone(&seen);
    let holder_cb = Arc::clone(&holder);
    let once = OnceExit::new(move || {
        // Re-entrant trigger from inside the callback must be a no-op.
        let inner = holder_cb.lock().unwrap().clone();
        if let Some(inner) = inner {
            assert!(inner.has_fired());
            assert!(!inner.trigger(ExitTrigger::Terminate));
        }
        seen_cb.fetch_add(1, Ordering::SeqCst);
    });
    *holder.lock().unwrap() = Some(once.clone());

    assert!(once.trigger(ExitTrigger::Interrupt));
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[test]
fn concurrent_triggers_run_callback_once() {
    init_tracing();
    let (count, callback) = counter();
    let once = OnceExit::new(callback);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let once = once.clone();
            std::thread::spawn(move || {
                let trigger = if i % 2 == 0 {
                    ExitTrigger::Interrupt
                } else {
                    ExitTrigger::Terminate
                };
                once.trigger(trigger)
            })
        })
        .collect();

    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ran| *ran)
        .count();

    assert_eq!(winners, 1);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn dropping_registration_is_normal_exit() {
    with_timeout(async {
        init_tracing();
        let (count, callback) = counter();

        let registration = register_process_exit(callback);
        assert!(!registration.has_fired());
        drop(registration);

        assert_eq!(count.load(Ordering::SeqCst), 1);
    })
    .await
}

#[tokio::test]
async fn manual_trigger_then_drop_runs_once() {
    with_timeout(async {
        init_tracing();
        let (count, callback) = counter();

        let registration = register_process_exit(callback);
        assert!(registration.trigger(ExitTrigger::Terminate));
        assert!(registration.has_fired());
        drop(registration);

        assert_eq!(count.load(Ordering::SeqCst), 1);
    })
    .await
}

#[tokio::test]
async fn registrations_are_independent() {
    with_timeout(async {
        init_tracing();
        let (first_count, first) = counter();
        let (second_count, second) = counter();

        let a = register_process_exit(first);
        let b = register_process_exit(second);

        assert!(a.trigger(ExitTrigger::Interrupt));
        assert_eq!(first_count.load(Ordering::SeqCst), 1);
        assert_eq!(second_count.load(Ordering::SeqCst), 0);
        assert!(!b.has_fired());

        drop(b);
        drop(a);
        assert_eq!(first_count.load(Ordering::SeqCst), 1);
        assert_eq!(second_count.load(Ordering::SeqCst), 1);
    })
    .await
}
