use std::collections::HashSet;

use proptest::prelude::*;

use medley::{CallContext, Capability, ContentKind, Medley};

use crate::helpers::{MockConnector, ids, items};

const NAMES: [&str; 4] = ["p0", "p1", "p2", "p3"];

proptest! {
    #![proptest_config(ProptestConfig { cases: 40, .. ProptestConfig::default() })]
    #[test]
    fn trending_is_capped_and_unique(
        counts in proptest::collection::vec(0usize..=6, 1..=4),
        limit in 1usize..=30,
        shuffle in any::<bool>(),
    ) {
        let total: usize = counts.iter().sum();
        let got = tokio_test::block_on(async move {
            let mut builder = Medley::builder().trending_limit(limit).shuffle(shuffle);
            for (i, n) in counts.iter().enumerate() {
                // Every provider reuses the same raw ids so merged ids must be disambiguated.
                let raw: Vec<String> = (0..*n).map(|k| k.to_string()).collect();
                let raw: Vec<&str> = raw.iter().map(String::as_str).collect();
                builder = builder.with_connector(
                    MockConnector::builder()
                        .name(NAMES[i])
                        .returns_ok(Capability::PopularMovies, items(ContentKind::Movie, &raw))
                        .build(),
                );
            }
            let medley = builder.build().unwrap();
            medley.trending_content(&CallContext::new()).await
        });

        match got.into_data() {
            Some(page) => {
                prop_assert_eq!(page.len(), total.min(limit));
                let unique: HashSet<&str> = ids(&page.items).into_iter().collect();
                prop_assert_eq!(unique.len(), page.len());
            }
            None => prop_assert!(false, "trending failed for {total} items"),
        }
    }
}
