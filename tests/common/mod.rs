//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use fakestore::catalog::Product;
use fakestore::config::{ApiConfig, DisplayConfig};
use fakestore::ui::app::App;
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a fresh `config.toml` in a temporary directory.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// API settings pointing at `base_url` with short timeouts.
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    }
}

pub fn product(id: u64, category: &str) -> Product {
    Product {
        id,
        title: format!("Product {id}"),
        price: id as f64 + 0.5,
        description: format!("Description of product {id}"),
        category: category.to_string(),
        image: format!("https://fakestoreapi.com/img/{id}.jpg"),
    }
}

pub fn products_json(products: &[Product]) -> String {
    serde_json::to_string(products).expect("Failed to encode products")
}

// -- App helpers --------------------------------------------------------------

/// App without pictures so only listing commands reach the channel.
pub fn make_app() -> App {
    App::new(&DisplayConfig {
        columns: 2,
        images: false,
    })
}
