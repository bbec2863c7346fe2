// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use monitor_console_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn api() {
        let err = CoreError::Api {
            endpoint: "/config".into(),
            message: "HTTP 500 Internal Server Error".into(),
        };
        assert_eq!(
            err.to_string(),
            "Backend error (/config): HTTP 500 Internal Server Error"
        );
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }

    #[test]
    fn load_failed() {
        let err = CoreError::LoadFailed("Network error: timed out".into());
        assert_eq!(
            err.to_string(),
            "Failed to load status and configuration: Network error: timed out"
        );
    }

    #[test]
    fn save_failed() {
        let err = CoreError::SaveFailed("Backend error (/config): HTTP 502".into());
        assert_eq!(
            err.to_string(),
            "Failed to save configuration: Backend error (/config): HTTP 502"
        );
    }

    #[test]
    fn not_loaded() {
        let err = CoreError::NotLoaded;
        assert_eq!(
            err.to_string(),
            "No configuration loaded — call load() first"
        );
    }
}

// ── From conversions ────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn serde_json_error_becomes_deserialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn deserialization_keeps_the_parser_message() {
        let json_err = serde_json::from_str::<serde_json::Value>("").unwrap_err();
        let msg = json_err.to_string();
        let err: CoreError = json_err.into();
        assert_eq!(err.to_string(), format!("Deserialization error: {msg}"));
    }
}
