use pretty_assertions::assert_eq;
use rfcmap::call::Scalar;
use rfcmap::{Node, Structure, Table};
use rust_decimal::Decimal;
use tests::fixtures::{flight_list_reply, BapiReturn, Flight, FlightList, FlightSearch};
use tests::{flight_manager, MockConnector};

#[test]
fn search_builds_scalars_in_order_and_an_empty_table() {
    let connector = MockConnector::new();
    let manager = flight_manager(&connector);

    let search = FlightSearch {
        country: "DE".to_string(),
        city: "Frankfurt".to_string(),
        max_rows: 10,
        flights: vec![],
    };

    let structure = manager.build(&search).unwrap();

    assert_eq!(
        structure.names().collect::<Vec<_>>(),
        ["COUNTRY", "CITY", "MAX_ROWS", "FLIGHTS"]
    );
    assert_eq!(structure.scalar("COUNTRY"), Some(&Scalar::from("DE")));
    assert_eq!(structure.scalar("CITY"), Some(&Scalar::from("Frankfurt")));
    assert_eq!(structure.scalar("MAX_ROWS"), Some(&Scalar::Int(10)));
    assert_eq!(structure.table("FLIGHTS").map(|t| t.len()), Some(0));
}

#[test]
fn search_returns_rows_in_transport_order() {
    let connector = MockConnector::new();
    let manager = flight_manager(&connector);

    let rows = vec![
        Flight::new("LH", 400, Decimal::new(24900, 2)),
        Flight::new("AA", 17, Decimal::new(51000, 2)),
    ];

    let reply_rows = rows.clone();
    connector.reply_with(move |_, parameters| {
        let mut reply = parameters.clone();
        reply.insert(
            "FLIGHTS",
            reply_rows.iter().map(Flight::row).collect::<Table>(),
        );
        Ok(reply)
    });

    let mut search = FlightSearch {
        country: "DE".to_string(),
        city: "Frankfurt".to_string(),
        max_rows: 10,
        flights: vec![],
    };

    let mut session = manager.open_session().unwrap();
    session.execute(&mut search).unwrap();

    assert_eq!(search.flights.len(), 2);
    assert_eq!(search.flights, rows);
    assert_eq!(search.city, "Frankfurt");
}

#[test]
fn flight_list_sends_declared_parameters() {
    let connector = MockConnector::new();
    let manager = flight_manager(&connector);

    let mut session = manager.open_session().unwrap();
    let mut call = FlightList::frankfurt_to_berlin();
    session.execute(&mut call).unwrap();

    let invocation = connector.log().last().unwrap();
    assert_eq!(invocation.function, "BAPI_FLIGHT_GETLIST");
    assert_eq!(
        invocation.parameters.names().collect::<Vec<_>>(),
        [
            "FROM_COUNTRY",
            "FROM_CITY",
            "TO_COUNTRY",
            "TO_CITY",
            "AFTERNOON",
            "MAX_ROWS",
            "FLIGHT_LIST"
        ]
    );

    let expected = Structure::new()
        .with("FROM_COUNTRY", Scalar::from("DE "))
        .with("FROM_CITY", Scalar::Char(format!("{:<20}", "FRANKFURT")))
        .with("TO_COUNTRY", Scalar::from("DE "))
        .with("TO_CITY", Scalar::Char(format!("{:<20}", "BERLIN")))
        .with("AFTERNOON", Scalar::from(""))
        .with("MAX_ROWS", Scalar::Int(10))
        .with("FLIGHT_LIST", Node::Table(Table::new()));

    assert_eq!(invocation.parameters, expected);
}

#[test]
fn execute_merges_reply_into_call() {
    let connector = MockConnector::new();
    let manager = flight_manager(&connector);

    let flights = vec![
        Flight::new("LH", 400, Decimal::new(24900, 2)),
        Flight::new("LH", 400, Decimal::new(24900, 2)),
        Flight::new("LH", 402, Decimal::new(19900, 2)),
    ];
    connector.reply(flight_list_reply(&flights));

    let mut session = manager.open_session().unwrap();
    let mut call = FlightList::frankfurt_to_berlin();
    session.execute(&mut call).unwrap();

    let mut expected = FlightList::frankfurt_to_berlin();
    expected.flight_list = flights;
    expected.ret = Some(BapiReturn {
        kind: "S".to_string(),
        message: String::new(),
    });

    assert_eq!(call, expected);
}

#[test]
fn execute_detached_leaves_call_untouched() {
    let connector = MockConnector::new();
    let manager = flight_manager(&connector);

    let flights = vec![Flight::new("AZ", 788, Decimal::new(9900, 2))];
    connector.reply(flight_list_reply(&flights));

    let mut session = manager.open_session().unwrap();
    let call = FlightList::frankfurt_to_berlin();
    let reply = session.execute_detached(&call).unwrap();

    assert_eq!(call, FlightList::frankfurt_to_berlin());
    assert_eq!(reply.flight_list, flights);
    assert_eq!(reply.from_city, "");
    assert_eq!(reply.max_rows, 0);
}

#[test]
fn reply_without_optional_field_keeps_default() {
    let connector = MockConnector::new();
    let manager = flight_manager(&connector);

    let mut flight = Flight::new("LH", 400, Decimal::new(24900, 2));
    flight.currency = None;
    flight.departure = None;

    connector.reply(Structure::new().with(
        "FLIGHT_LIST",
        Table::from(vec![flight.row()]),
    ));

    let mut session = manager.open_session().unwrap();
    let reply = session
        .execute_detached(&FlightList::frankfurt_to_berlin())
        .unwrap();

    assert_eq!(reply.flight_list, [flight]);
    assert_eq!(reply.ret, None);
}

#[test]
fn connector_receives_connection_namespace() {
    let connector = MockConnector::new();
    let manager = flight_manager(&connector);

    let _session = manager.open_session().unwrap();
    let properties = connector.last_properties().unwrap();

    assert_eq!(
        properties.iter().collect::<Vec<_>>(),
        [("ashost", "10.0.0.1"), ("sysnr", "00")]
    );
    assert_eq!(manager.properties().get("mapping.types"), Some("BAPI_FLIGHT_GETLIST"));
}

#[test]
fn invalid_reply_leaves_call_unchanged() {
    let connector = MockConnector::new();
    let manager = flight_manager(&connector);

    let mut reply = flight_list_reply(&[Flight::new("LH", 400, Decimal::ONE)]);
    reply.insert("MAX_ROWS", Scalar::from("ten"));
    connector.reply(reply);

    let mut session = manager.open_session().unwrap();
    let mut call = FlightList::frankfurt_to_berlin();
    let err = session.execute(&mut call).unwrap_err();

    assert!(err.is_mapping());
    assert_eq!(err.field_path(), Some("MAX_ROWS"));
    assert_eq!(call, FlightList::frankfurt_to_berlin());
}

#[test]
fn invalid_parameter_is_not_sent() {
    let connector = MockConnector::new();
    let manager = flight_manager(&connector);

    let mut session = manager.open_session().unwrap();
    let mut call = FlightList::frankfurt_to_berlin();
    call.from_city = "SAN FRANCISCO INTERNATIONAL".to_string();

    let err = session.execute(&mut call).unwrap_err();

    assert_eq!(err.field_path(), Some("FROM_CITY"));
    assert!(err.root().is_invalid_value());
    assert!(connector.log().is_empty());
    assert!(session.is_open());
}
