use std::time::Duration;

use medley::{Capability, ContentKind, Medley, MedleyError};

use crate::helpers::{MockConnector, items};

#[test]
fn build_without_connectors_is_invalid() {
    let err = Medley::builder().build().err().unwrap();
    assert!(matches!(err, MedleyError::InvalidArg(_)));
}

#[test]
fn build_rejects_zero_limits() {
    let c = MockConnector::builder()
        .returns_ok(Capability::TopTracks, items(ContentKind::Music, &["t1"]))
        .build();
    let err = Medley::builder()
        .with_connector(c)
        .trending_limit(0)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, MedleyError::InvalidArg(_)));
}

#[test]
fn builder_modifiers_land_in_config() {
    let c = MockConnector::builder()
        .returns_ok(Capability::TopTracks, items(ContentKind::Music, &["t1"]))
        .build();
    let medley = Medley::builder()
        .with_connector(c)
        .provider_timeout(Duration::from_secs(3))
        .request_timeout(Duration::from_secs(7))
        .shuffle(false)
        .trending_limit(8)
        .per_source_limit(2)
        .build()
        .unwrap();
    let cfg = medley.config();
    assert_eq!(cfg.provider_timeout, Duration::from_secs(3));
    assert_eq!(cfg.request_timeout, Some(Duration::from_secs(7)));
    assert!(!cfg.shuffle);
    assert_eq!(cfg.trending_limit, 8);
    assert_eq!(cfg.per_source_limit, 2);
}
