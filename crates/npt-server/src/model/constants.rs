//! Server constants: configuration keys, defaults and response messages

// ============================================================================
// Configuration keys
// ============================================================================

pub const SERVER_ADDRESS: &str = "server.address";
pub const SERVER_PORT: &str = "server.port";
pub const SERVER_CONTEXT_PATH: &str = "server.context_path";
pub const SERVER_SHUTDOWN_TIMEOUT_SECS: &str = "server.shutdown_timeout_secs";

pub const STORAGE_MODE: &str = "npt.storage.mode";
pub const DATA_DIR: &str = "npt.data.dir";
pub const DATA_FILE: &str = "npt.data.file";

pub const LOGS_PATH: &str = "npt.logs.path";
pub const LOGS_CONSOLE: &str = "npt.logs.console";
pub const LOGS_FILE: &str = "npt.logs.file";
pub const LOGS_LEVEL: &str = "npt.logs.level";
pub const LOGS_ROTATION: &str = "npt.logs.rotation";

pub const HRIS_LOGIN_MODE: &str = "hris.login.mode";
pub const HRIS_LOGIN_URL: &str = "hris.login.url";
pub const HRIS_LOGIN_API_KEY: &str = "hris.login.api_key";
pub const HRIS_LOGIN_AUTHORIZATION: &str = "hris.login.authorization";
pub const HRIS_LOGIN_TIMEOUT_MS: &str = "hris.login.timeout_ms";

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CONFIG_FILE: &str = "conf/application.yml";
pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 3001;
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_DATA_FILE: &str = "npt-entries.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_ROTATION: &str = "daily";

// ============================================================================
// Response messages
// ============================================================================

pub const ENTRY_SAVED_MESSAGE: &str = "NPT entry saved successfully";
pub const ENTRY_UPDATED_MESSAGE: &str = "Entry updated successfully";
pub const ENTRY_DELETED_MESSAGE: &str = "Entry deleted successfully";
pub const STORAGE_FAILED_MESSAGE: &str = "Failed to access NPT entry store";
pub const INVALID_ENTRY_ID_MESSAGE: &str = "Invalid entry id";
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON body";
