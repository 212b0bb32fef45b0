//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Remote API
// =============================================================================

/// Base URL used when no environment variable provides one
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Preferred environment variable for the API base URL
pub const ENV_PUBLIC_API_URL: &str = "HOTEL_PUBLIC_API_URL";

/// Legacy environment variable for the API base URL
pub const ENV_LEGACY_API_URL: &str = "API_BASE_URL";

/// Display name of the application
pub const APP_NAME: &str = "Hotel Management";

// =============================================================================
// Endpoints
// =============================================================================

/// Token issuance (expects a form-url-encoded body)
pub const AUTH_TOKEN_PATH: &str = "/api/v1/auth/token";

/// Account registration
pub const AUTH_REGISTER_PATH: &str = "/api/v1/auth/register";

/// Dashboard summary
pub const DASHBOARD_PATH: &str = "/api/v1/dashboard/";

/// Clients collection
pub const CLIENTS_PATH: &str = "/api/v1/clients/";

/// Client search
pub const CLIENTS_SEARCH_PATH: &str = "/api/v1/clients/search";

/// Rooms collection
pub const ROOMS_PATH: &str = "/api/v1/quartos/";

/// Room occupancy calendar
pub const ROOMS_CALENDAR_PATH: &str = "/api/v1/quartos/calendario";

/// Reservations collection
pub const RESERVATIONS_PATH: &str = "/api/v1/reservas/";

// =============================================================================
// Authentication
// =============================================================================

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// Content type sent with JSON requests
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Content type required by the token endpoint
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

// =============================================================================
// Durable storage
// =============================================================================

/// Storage key holding the session token
pub const TOKEN_STORAGE_KEY: &str = "auth_token";

/// Storage key holding the theme preference
pub const THEME_STORAGE_KEY: &str = "theme_mode";

/// Directory created under the platform data dir
pub const STORAGE_DIR_NAME: &str = "hotel-client";

/// File name of the JSON storage backend
pub const STORAGE_FILE_NAME: &str = "storage.json";

// =============================================================================
// Pagination
// =============================================================================

/// Default number of records to skip
pub const DEFAULT_SKIP: u32 = 0;

/// Default page size accepted by the list endpoints
pub const DEFAULT_LIMIT: u32 = 100;

// =============================================================================
// Theme
// =============================================================================

/// Marker applied while the dark theme is active
pub const DARK_THEME_MARKER: &str = "dark";
