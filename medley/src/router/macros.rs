/// Generate a router async method that walks capable providers in priority order
/// and calls a single-provider method, keeping a sample-data answer only until a
/// later provider succeeds.
///
/// `prefix` labels ids rewritten by `ensure_unique_ids` when a page repeats an id.
#[macro_export]
macro_rules! medley_router_method {
    (
        $(#[$meta:meta])*
        method: $name:ident( $q_ident:ident : $q_ty:ty ),
        kind: $kind:expr,
        accessor: $accessor:ident,
        capability: $capability:expr,
        prefix: $prefix:expr,
        call: $call_name:ident
    ) => {
        $(#[$meta])*
        #[cfg_attr(
            feature = "tracing",
            tracing::instrument(
                target = "medley::router",
                skip(self, $q_ident, ctx),
                fields(capability = %$capability),
            )
        )]
        pub async fn $name(
            &self,
            $q_ident: $q_ty,
            ctx: &medley_core::CallContext,
        ) -> medley_core::Outcome<medley_core::ContentPage> {
            self.fetch_single($kind, $capability, $prefix, ctx, move |c| {
                c.$accessor()?;
                Some(async move {
                    match c.$accessor() {
                        Some(p) => p.$call_name($q_ident, ctx).await,
                        None => medley_core::Outcome::Failure(medley_core::MedleyError::connector(
                            c.name(),
                            concat!("missing ", stringify!($call_name), " capability during call"),
                        )),
                    }
                })
            })
            .await
        }
    };
}
