use chrono::{NaiveDate, NaiveTime};
use rfcmap::call::Scalar;
use rfcmap::{Mapped, Node, Structure, Table};
use rust_decimal::Decimal;

/// `BAPI_FLIGHT_GETLIST`: flights between two cities.
#[derive(Debug, Default, Clone, PartialEq, Mapped)]
#[rfc(function = "BAPI_FLIGHT_GETLIST")]
pub struct FlightList {
    #[rfc(width = 3)]
    pub from_country: String,

    #[rfc(width = 20)]
    pub from_city: String,

    #[rfc(width = 3)]
    pub to_country: String,

    #[rfc(width = 20)]
    pub to_city: String,

    pub airline: Option<String>,

    pub afternoon: bool,

    pub max_rows: i32,

    #[rfc(table)]
    pub flight_list: Vec<Flight>,

    #[rfc(name = "RETURN")]
    pub ret: Option<BapiReturn>,
}

#[derive(Debug, Default, Clone, PartialEq, Mapped)]
#[rfc(table_row = "BAPISFLDAT")]
pub struct Flight {
    #[rfc(name = "AIRLINEID")]
    pub airline_id: String,

    #[rfc(name = "CONNECTID", width = 4)]
    pub connection_id: u32,

    #[rfc(name = "FLIGHTDATE")]
    pub flight_date: Option<NaiveDate>,

    #[rfc(name = "AIRPORTFR")]
    pub airport_from: String,

    #[rfc(name = "AIRPORTTO")]
    pub airport_to: String,

    #[rfc(name = "DEPTIME")]
    pub departure: Option<NaiveTime>,

    #[rfc(scale = 2, precision = 15)]
    pub price: Option<Decimal>,

    #[rfc(name = "CURR")]
    pub currency: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Mapped)]
#[rfc(structure = "BAPIRET2")]
pub struct BapiReturn {
    #[rfc(name = "TYPE")]
    pub kind: String,

    pub message: String,
}

/// `BAPI_FLIGHT_GETDETAIL`: one flight, identified by carrier and number.
#[derive(Debug, Default, Clone, PartialEq, Mapped)]
#[rfc(function = "BAPI_FLIGHT_GETDETAIL")]
pub struct FlightDetail {
    #[rfc(name = "AIRLINEID")]
    pub airline_id: String,

    #[rfc(name = "CONNECTIONID", width = 4)]
    pub connection_id: u32,

    #[rfc(name = "FLIGHTDATE")]
    pub flight_date: Option<NaiveDate>,

    #[rfc(name = "FLIGHT_DATA")]
    pub data: Option<FlightData>,
}

#[derive(Debug, Default, Clone, PartialEq, Mapped)]
#[rfc(structure = "BAPISFLDAT")]
pub struct FlightData {
    #[rfc(name = "CITYFROM")]
    pub city_from: String,

    #[rfc(name = "CITYTO")]
    pub city_to: String,
}

impl FlightList {
    /// The search of the Frankfurt to Berlin example.
    pub fn frankfurt_to_berlin() -> FlightList {
        FlightList {
            from_country: "DE".to_string(),
            from_city: "FRANKFURT".to_string(),
            to_country: "DE".to_string(),
            to_city: "BERLIN".to_string(),
            airline: None,
            afternoon: false,
            max_rows: 10,
            ..FlightList::default()
        }
    }
}

impl Flight {
    pub fn new(airline_id: &str, connection_id: u32, price: Decimal) -> Flight {
        Flight {
            airline_id: airline_id.to_string(),
            connection_id,
            flight_date: NaiveDate::from_ymd_opt(2024, 3, 15),
            airport_from: "FRA".to_string(),
            airport_to: "TXL".to_string(),
            departure: NaiveTime::from_hms_opt(14, 30, 0),
            price: Some(price),
            currency: Some("EUR".to_string()),
        }
    }

    /// The remote row this flight maps to.
    pub fn row(&self) -> Structure {
        let mut row = Structure::new()
            .with("AIRLINEID", Scalar::from(self.airline_id.as_str()))
            .with(
                "CONNECTID",
                Scalar::Char(format!("{:04}", self.connection_id)),
            );

        if let Some(date) = self.flight_date {
            row.insert("FLIGHTDATE", Scalar::Char(date.format("%Y%m%d").to_string()));
        }

        row.insert("AIRPORTFR", Scalar::from(self.airport_from.as_str()));
        row.insert("AIRPORTTO", Scalar::from(self.airport_to.as_str()));

        if let Some(time) = self.departure {
            row.insert("DEPTIME", Scalar::Char(time.format("%H%M%S").to_string()));
        }

        if let Some(price) = self.price {
            row.insert("PRICE", Scalar::Decimal(price));
        }

        if let Some(currency) = &self.currency {
            row.insert("CURR", Scalar::from(currency.as_str()));
        }

        row
    }
}

/// A successful reply to `BAPI_FLIGHT_GETLIST` carrying `flights`.
pub fn flight_list_reply(flights: &[Flight]) -> Structure {
    Structure::new()
        .with(
            "FLIGHT_LIST",
            Node::Table(flights.iter().map(Flight::row).collect::<Table>()),
        )
        .with(
            "RETURN",
            Structure::new()
                .with("TYPE", Scalar::from("S"))
                .with("MESSAGE", Scalar::from("")),
        )
}

/// A minimal search: three scalars and a table.
#[derive(Debug, Default, Clone, PartialEq, Mapped)]
#[rfc(function = "Z_FLIGHT_SEARCH")]
pub struct FlightSearch {
    pub country: String,

    pub city: String,

    pub max_rows: i32,

    pub flights: Vec<Flight>,
}
