//! Extension registry errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("Extension has no name")]
    MissingName,

    #[error("Extension already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Extension not registered: {0}")]
    NotRegistered(String),

    #[error("Extension name is registered to a different object: {0}")]
    IdentityMismatch(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_error() {
        let err = ExtensionError::MissingName;
        assert!(err.to_string().contains("no name"));
    }

    #[test]
    fn test_already_registered_error() {
        let err = ExtensionError::AlreadyRegistered("AutolinkerExtension".to_string());
        let display = err.to_string();
        assert!(display.contains("already registered"));
        assert!(display.contains("AutolinkerExtension"));
    }

    #[test]
    fn test_not_registered_error() {
        let err = ExtensionError::NotRegistered("TemplatesComposerExtension".to_string());
        let display = err.to_string();
        assert!(display.contains("not registered"));
        assert!(display.contains("TemplatesComposerExtension"));
    }

    #[test]
    fn test_identity_mismatch_error() {
        let err = ExtensionError::IdentityMismatch("SignatureExtension".to_string());
        let display = err.to_string();
        assert!(display.contains("different object"));
        assert!(display.contains("SignatureExtension"));
    }

    #[test]
    fn test_all_error_variants() {
        let errors: Vec<ExtensionError> = vec![
            ExtensionError::MissingName,
            ExtensionError::AlreadyRegistered("a".to_string()),
            ExtensionError::NotRegistered("b".to_string()),
            ExtensionError::IdentityMismatch("c".to_string()),
        ];

        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}
