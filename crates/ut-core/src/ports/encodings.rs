//! Text-encoding catalog port.

/// Enumerates the standard character-encoding names available for text
/// flavor expansion, in a stable catalog order.
pub trait EncodingCatalogPort: Send + Sync {
    fn standard_encodings(&self) -> Vec<String>;
}

#[cfg(test)]
mockall::mock! {
    pub EncodingCatalog {}

    impl EncodingCatalogPort for EncodingCatalog {
        fn standard_encodings(&self) -> Vec<String>;
    }
}
