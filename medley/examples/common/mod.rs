use std::sync::Arc;

use medley::{Credentials, Medley, MedleyBuilder, MedleyConnector};

#[must_use]
pub fn get_connectors() -> Vec<Arc<dyn MedleyConnector>> {
    if std::env::var("MEDLEY_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        vec![Arc::new(medley_mock::MockConnector::new())]
    } else {
        // Providers without credentials answer with sample data.
        medley_providers::connectors_from_credentials(&Credentials::from_env())
    }
}

/// Builder preloaded with every selected connector.
#[must_use]
pub fn builder() -> MedleyBuilder {
    get_connectors()
        .into_iter()
        .fold(Medley::builder(), MedleyBuilder::with_connector)
}
