//! Shared setup for end-to-end tests: a scripted transport, fixture mapped
//! types and log capture.

pub mod fixtures;

mod mock_transport;
pub use mock_transport::{CallLog, Invocation, MockConnector};

use rfcmap::{Builder, SessionManager};

use std::sync::Once;

/// Creates a builder with the given mapped types registered.
#[macro_export]
macro_rules! mapped {
    (
        $( $ty:ty ),*
    ) => {{
        let mut builder = rfcmap::SessionManager::builder();
        $( builder.register::<$ty>(); )*
        builder
    }};
}

/// Routes library logs to the test output. Set `RUST_LOG` to see them.
pub fn init_logging() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Builds a manager for the flight fixtures on top of `connector`.
pub fn flight_manager(connector: &MockConnector) -> SessionManager {
    init_logging();

    let mut builder: Builder = mapped!(
        fixtures::FlightList,
        fixtures::FlightDetail,
        fixtures::FlightSearch
    );
    builder
        .property("connection.ashost", "10.0.0.1")
        .property("connection.sysnr", "00")
        .property("mapping.types", "BAPI_FLIGHT_GETLIST");

    builder
        .build(connector.clone())
        .expect("flight fixtures must resolve")
}
