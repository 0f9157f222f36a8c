use std::path::PathBuf;

use ficbridge_app::context::AppContext;
use ficbridge_domain::{ApiConfig, Config, ExecutionConfig, FailurePolicy};
use serde_json::Value;
use tempfile::TempDir;
use wiremock::MockServer;

/// Context wired to a mock API server.
pub fn context_for(server: &MockServer, policy: FailurePolicy) -> AppContext {
    let config = Config {
        api: ApiConfig { base_url: server.uri(), ..ApiConfig::default() },
        execution: ExecutionConfig { failure_policy: policy, ..ExecutionConfig::default() },
        ..Config::default()
    };
    AppContext::new_with_config(config).expect("context should build")
}

/// Write `contents` as JSON into `dir/name` and return the path.
pub fn write_json(dir: &TempDir, name: &str, contents: &Value) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_vec_pretty(contents).expect("serializable"))
        .expect("file should be written");
    path
}
