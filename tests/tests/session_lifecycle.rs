use rfcmap::{Structure, TransportError};
use rust_decimal::Decimal;
use tests::fixtures::{flight_list_reply, Flight, FlightDetail, FlightList};
use tests::{flight_manager, MockConnector};

use std::thread;

#[test]
fn execute_after_close_fails() {
    let connector = MockConnector::new();
    let manager = flight_manager(&connector);

    let mut session = manager.open_session().unwrap();
    session.close();

    assert!(!session.is_open());

    let err = session
        .execute(&mut FlightList::frankfurt_to_berlin())
        .unwrap_err();
    assert!(err.is_session_closed());

    let err = session.invoke("RFC_PING", Structure::new()).unwrap_err();
    assert!(err.is_session_closed());

    assert!(connector.log().is_empty());
}

#[test]
fn close_twice_releases_once() {
    let connector = MockConnector::new();
    let manager = flight_manager(&connector);

    let mut session = manager.open_session().unwrap();
    assert_eq!(connector.connects(), 1);

    session.close();
    session.close();
    drop(session);

    assert_eq!(connector.closes(), 1);
}

#[test]
fn drop_releases_connection() {
    let connector = MockConnector::new();
    let manager = flight_manager(&connector);

    {
        let mut session = manager.open_session().unwrap();
        session
            .execute(&mut FlightList::frankfurt_to_berlin())
            .unwrap();
        assert_eq!(connector.open_connections(), 1);
    }

    assert_eq!(connector.open_connections(), 0);
}

#[test]
fn failed_call_releases_connection_on_drop() {
    let connector = MockConnector::new();
    connector.reply_with(|_, _| Err(TransportError::message("connection reset by peer")));
    let manager = flight_manager(&connector);

    let result = (|| -> rfcmap::Result<()> {
        let mut session = manager.open_session()?;
        session.execute(&mut FlightList::frankfurt_to_berlin())
    })();

    assert!(result.unwrap_err().is_remote_execution());
    assert_eq!(connector.open_connections(), 0);
}

#[test]
fn remote_failure_keeps_diagnostics_and_session() {
    let connector = MockConnector::new();
    connector.reply_with(|function, _| {
        Err(TransportError::new(
            "RFC_ABAP_EXCEPTION",
            format!("{function} raised FLIGHT_NOT_FOUND"),
        ))
    });
    let manager = flight_manager(&connector);

    let mut session = manager.open_session().unwrap();
    let err = session
        .execute(&mut FlightList::frankfurt_to_berlin())
        .unwrap_err();

    assert!(err.is_remote_execution());
    assert_eq!(err.remote_function(), Some("BAPI_FLIGHT_GETLIST"));
    assert_eq!(
        err.transport().and_then(|t| t.code()),
        Some("RFC_ABAP_EXCEPTION")
    );
    assert_eq!(
        err.transport().map(|t| t.diagnostic()),
        Some("BAPI_FLIGHT_GETLIST raised FLIGHT_NOT_FOUND")
    );

    // The session stays usable; retrying is the caller's decision.
    assert!(session.is_open());
    connector.reply(flight_list_reply(&[]));
    session
        .execute(&mut FlightList::frankfurt_to_berlin())
        .unwrap();
    assert_eq!(connector.log().count("BAPI_FLIGHT_GETLIST"), 2);
}

#[test]
fn only_functions_can_be_executed() {
    let connector = MockConnector::new();
    let manager = flight_manager(&connector);

    let mut session = manager.open_session().unwrap();
    let err = session
        .execute(&mut Flight::new("LH", 400, Decimal::ONE))
        .unwrap_err();

    assert!(err.is_mapping_configuration());
    assert!(connector.log().is_empty());
}

#[test]
fn refused_connection_yields_no_session() {
    let connector = MockConnector::new();
    connector.refuse("RFC_LOGON_FAILURE", "Name or password is incorrect");
    let manager = flight_manager(&connector);

    let err = manager.open_session().unwrap_err();

    assert!(err.is_connection());
    assert_eq!(
        err.to_string(),
        "failed to open connection: [RFC_LOGON_FAILURE] Name or password is incorrect"
    );
    assert_eq!(connector.connects(), 0);
    assert_eq!(connector.closes(), 0);
}

#[test]
fn sessions_run_independently() {
    let connector = MockConnector::new();
    connector.reply_with(|_, parameters| Ok(parameters.clone()));
    let manager = flight_manager(&connector);

    let workers: Vec<_> = ["LH", "AA", "AZ", "BA"]
        .into_iter()
        .map(|airline| {
            let manager = manager.clone();
            thread::spawn(move || {
                let mut session = manager.open_session().unwrap();
                let mut call = FlightDetail {
                    airline_id: airline.to_string(),
                    connection_id: 400,
                    ..FlightDetail::default()
                };
                session.execute(&mut call).unwrap();
                (session.id(), call.airline_id)
            })
        })
        .collect();

    let mut ids = vec![];
    for (worker, airline) in workers.into_iter().zip(["LH", "AA", "AZ", "BA"]) {
        let (id, echoed) = worker.join().unwrap();
        assert_eq!(echoed, airline);
        ids.push(id);
    }

    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);

    let mut connections: Vec<_> = connector
        .log()
        .calls()
        .into_iter()
        .map(|call| call.connection)
        .collect();
    connections.sort();
    assert_eq!(connections, [1, 2, 3, 4]);

    assert_eq!(connector.connects(), 4);
    assert_eq!(connector.closes(), 4);
}
