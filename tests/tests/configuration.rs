use pretty_assertions::assert_eq;
use rfcmap::call::Scalar;
use rfcmap::{Environment, Mapped, SessionManager, Structure};
use tests::fixtures::{FlightData, FlightDetail, FlightList};
use tests::{init_logging, mapped, MockConnector};

use std::fs;
use uuid::Uuid;

#[derive(Debug, Default, Mapped)]
#[rfc(function = "Z_BOOKING")]
struct Booking {
    #[rfc(converter = "class")]
    class: String,

    #[rfc(converter = "seats")]
    seats: u16,
}

fn write_config(contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("rfcmap-{}.yaml", Uuid::new_v4()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn manager_from_configuration_file() {
    init_logging();

    let path = write_config(
        r#"
connection:
  ashost: sap.example.com
  client: 100
mapping:
  types: [BAPI_FLIGHT_GETLIST, Z_BOOKING]
converter:
  class: text
  seats: u16
"#,
    );

    let mut properties = Environment::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    Environment::overlay_env(
        &mut properties,
        [("RFCMAP_CONNECTION_CLIENT".to_string(), "200".to_string())],
    );

    let connector = MockConnector::new();
    let manager = mapped!(FlightList, Booking)
        .properties(properties)
        .build(connector.clone())
        .unwrap();

    let mut session = manager.open_session().unwrap();
    let connection = connector.last_properties().unwrap();
    assert_eq!(connection.get("ashost"), Some("sap.example.com"));
    assert_eq!(connection.get("client"), Some("200"));

    let mut booking = Booking {
        class: "Y".to_string(),
        seats: 2,
    };
    session.execute(&mut booking).unwrap();

    assert_eq!(
        connector.log().last().unwrap().parameters,
        Structure::new()
            .with("CLASS", Scalar::from("Y"))
            .with("SEATS", Scalar::Int(2))
    );
}

#[test]
fn listed_type_must_be_registered() {
    let err = mapped!(FlightList)
        .property("mapping.types", "BAPI_FLIGHT_GETLIST,BAPI_FLIGHT_GETDETAIL")
        .build(MockConnector::new())
        .unwrap_err();

    assert!(err.is_invalid_configuration());
    assert_eq!(
        err.to_string(),
        "invalid configuration: `BAPI_FLIGHT_GETDETAIL` is listed in `mapping.types` but no mapped type with that remote name is registered"
    );
}

#[test]
fn missing_converter_binding_fails_at_build() {
    let err = SessionManager::builder()
        .register::<Booking>()
        .property("converter.class", "text")
        .build(MockConnector::new())
        .unwrap_err();

    assert!(err.is_no_converter_found());
    assert_eq!(
        err.to_string(),
        "no converter found for native type `u16` (override key `seats`)"
    );
}

#[test]
fn nested_structure_round_trips_through_manager() {
    let manager = mapped!(FlightDetail).build(MockConnector::new()).unwrap();

    let detail = FlightDetail {
        airline_id: "LH".to_string(),
        connection_id: 400,
        flight_date: None,
        data: Some(FlightData {
            city_from: "FRANKFURT".to_string(),
            city_to: "BERLIN".to_string(),
        }),
    };

    let structure = manager.build(&detail).unwrap();
    assert_eq!(
        structure
            .structure("FLIGHT_DATA")
            .unwrap()
            .names()
            .collect::<Vec<_>>(),
        ["CITYFROM", "CITYTO"]
    );

    let back: FlightDetail = manager.map(&structure).unwrap();
    assert_eq!(back, detail);
}
