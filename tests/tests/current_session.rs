use rfcmap::{CurrentSessions, Structure};
use tests::fixtures::FlightList;
use tests::{flight_manager, MockConnector};

use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn nothing_is_bound_by_default() {
    let connector = MockConnector::new();
    let manager = flight_manager(&connector);

    let _session = manager.open_session().unwrap();

    let err = manager.current_session().unwrap_err();
    assert!(err.is_no_current_session());
}

#[test]
fn bound_session_is_current() {
    let connector = MockConnector::new();
    let manager = flight_manager(&connector);

    let bound = manager.open_current().unwrap();
    let current = manager.current_session().unwrap();

    assert_eq!(bound.id(), current.id());

    current
        .execute(&mut FlightList::frankfurt_to_berlin())
        .unwrap();
    assert_eq!(connector.log().len(), 1);
    assert_eq!(connector.connects(), 1);
}

#[test]
fn binding_is_per_thread() {
    let connector = MockConnector::new();
    let manager = flight_manager(&connector);

    let bound = manager.open_current().unwrap();

    let other = manager.clone();
    let other_id = thread::spawn(move || {
        assert!(other
            .current_session()
            .unwrap_err()
            .is_no_current_session());
        other.open_current().unwrap().id()
    })
    .join()
    .unwrap();

    assert_ne!(bound.id(), other_id);
    assert_eq!(manager.current_session().unwrap().id(), bound.id());
}

#[test]
fn second_bind_is_rejected_and_closed() {
    let connector = MockConnector::new();
    let manager = flight_manager(&connector);

    let first = manager.open_current().unwrap();
    let err = manager.open_current().unwrap_err();

    assert!(err.is_session_already_bound());
    assert_eq!(connector.connects(), 2);
    assert_eq!(connector.closes(), 1);
    assert_eq!(manager.current_session().unwrap().id(), first.id());
}

#[test]
fn closed_session_is_no_longer_current() {
    let connector = MockConnector::new();
    let manager = flight_manager(&connector);

    let bound = manager.open_current().unwrap();
    bound.close().unwrap();
    bound.close().unwrap();

    assert!(!bound.is_open());
    assert_eq!(connector.closes(), 1);
    assert!(manager
        .current_session()
        .unwrap_err()
        .is_no_current_session());

    let err = bound
        .execute(&mut FlightList::frankfurt_to_berlin())
        .unwrap_err();
    assert!(err.is_session_closed());

    // A new session can be bound once the old one is closed.
    let next = manager.open_current().unwrap();
    assert_ne!(next.id(), bound.id());
}

#[test]
fn unbind_keeps_session_open() {
    let connector = MockConnector::new();
    let manager = flight_manager(&connector);

    let bound = manager.open_current().unwrap();
    let unbound = manager.unbind_current().unwrap();

    assert_eq!(unbound.id(), bound.id());
    assert!(unbound.is_open());
    assert!(manager.unbind_current().is_none());
    assert!(manager.current_session().is_err());
    assert_eq!(connector.closes(), 0);

    drop(bound);
    drop(unbound);
    assert_eq!(connector.closes(), 1);
}

#[test]
fn exited_thread_releases_its_session() {
    let connector = MockConnector::new();
    let manager = flight_manager(&connector);

    let workers = (0..3)
        .map(|_| {
            let manager = manager.clone();
            thread::spawn(move || {
                let bound = manager.open_current().unwrap();
                bound
                    .execute(&mut FlightList::frankfurt_to_berlin())
                    .unwrap();
            })
        })
        .collect::<Vec<_>>();

    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(connector.connects(), 3);
    assert_eq!(connector.closes(), 3);
    assert_eq!(connector.open_connections(), 0);
    assert!(manager
        .current_session()
        .unwrap_err()
        .is_no_current_session());
}

#[test]
fn exited_thread_closes_session_still_held_elsewhere() {
    let connector = MockConnector::new();
    let manager = flight_manager(&connector);

    let other = manager.clone();
    let kept = thread::spawn(move || other.open_current().unwrap())
        .join()
        .unwrap();

    assert!(!kept.is_open());
    assert_eq!(connector.open_connections(), 0);

    let err = kept
        .execute(&mut FlightList::frankfurt_to_berlin())
        .unwrap_err();
    assert!(err.is_session_closed());
}

#[test]
fn exited_threads_leave_no_bindings() {
    let connector = MockConnector::new();
    let manager = flight_manager(&connector);
    let current = Arc::new(CurrentSessions::new());

    let main = current.bind(manager.open_session().unwrap()).unwrap();

    let workers = (0..4)
        .map(|_| {
            let current = current.clone();
            let manager = manager.clone();
            thread::spawn(move || {
                current.bind(manager.open_session().unwrap()).unwrap();
                assert!(current.current().is_ok());
            })
        })
        .collect::<Vec<_>>();

    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(current.len(), 1);
    assert_eq!(current.current().unwrap().id(), main.id());
    assert_eq!(connector.open_connections(), 1);
}

#[test]
fn concurrent_use_fails_fast() {
    let entered = Arc::new(Barrier::new(2));
    let release = Arc::new(Barrier::new(2));

    let connector = MockConnector::new();
    connector.reply_with({
        let entered = entered.clone();
        let release = release.clone();
        move |_, _| {
            entered.wait();
            release.wait();
            Ok(Structure::new())
        }
    });
    let manager = flight_manager(&connector);

    let shared = manager.open_current().unwrap();

    let worker = {
        let shared = shared.clone();
        thread::spawn(move || shared.execute(&mut FlightList::frankfurt_to_berlin()))
    };

    entered.wait();

    let err = shared
        .execute(&mut FlightList::frankfurt_to_berlin())
        .unwrap_err();
    assert!(err.is_concurrent_use());
    assert!(shared.is_open());

    release.wait();
    worker.join().unwrap().unwrap();

    assert_eq!(connector.log().len(), 1);

    connector.reply(Structure::new());
    shared.invoke("RFC_PING", Structure::new()).unwrap();
    assert_eq!(connector.log().count("RFC_PING"), 1);
}
