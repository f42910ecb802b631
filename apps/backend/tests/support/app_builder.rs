use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use backend::config::db::DbProfile;
use backend::handlers::Handlers;
use backend::infra::state::build_state;
use backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use backend::routes;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Fresh migrated SQLite in-memory state. Every call gets its own database.
pub async fn test_state() -> AppState {
    build_state()
        .with_db(DbProfile::InMemory)
        .with_security(SecurityConfig::new(TEST_SECRET))
        .build()
        .await
        .expect("in-memory state should build")
}

/// Builder for test services wired exactly like `main`.
pub struct TestAppBuilder {
    state: AppState,
    handlers: Option<Handlers>,
}

impl TestAppBuilder {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            handlers: None,
        }
    }

    /// Serve these handlers instead of ones built over the state's connection.
    pub fn with_handlers(mut self, handlers: Handlers) -> Self {
        self.handlers = Some(handlers);
        self
    }

    pub async fn build(
        self,
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
        let handlers = self
            .handlers
            .unwrap_or_else(|| Handlers::new(&self.state));
        let data = web::Data::new(self.state);

        test::init_service(
            App::new()
                .wrap(StructuredLogger)
                .wrap(TraceSpan)
                .wrap(RequestTrace)
                .app_data(data)
                .configure(routes::configure(handlers)),
        )
        .await
    }
}

pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder::new(state)
}
