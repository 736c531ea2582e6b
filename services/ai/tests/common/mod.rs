use axum_test::TestServer;
use std::sync::Arc;
use today_ai::analyzer::ItemAnalyzer;
use today_ai::config::Config;
use today_ai::{create_app, AppState};

pub fn setup_test_server() -> TestServer {
    let app = create_app(AppState::new(&Config::default()));
    TestServer::new(app).unwrap()
}

pub fn setup_test_server_with(config: Config, analyzer: Arc<dyn ItemAnalyzer>) -> TestServer {
    let app = create_app(AppState::with_analyzer(&config, analyzer));
    TestServer::new(app).unwrap()
}

pub mod fixtures {
    use serde_json::{json, Value};

    pub const ITEM_ROUTES: [&str; 3] = ["/categorize", "/prioritize", "/embed"];

    pub fn buy_milk() -> Value {
        json!({"id": "1", "title": "Buy milk"})
    }

    pub fn with_content() -> Value {
        json!({
            "id": "42",
            "title": "Plan offsite",
            "content": "Book venue, send invites, order catering"
        })
    }

    pub fn empty_title() -> Value {
        json!({"id": "1", "title": ""})
    }
}
