//! Shared test utilities for sig-db unit tests.

pub(crate) mod helpers {
    use sig_core::entities::{Aspect, Signal};
    use sig_core::enums::AspectType;

    use crate::SignalDb;
    use crate::service::SignalService;

    /// Create an in-memory `SignalService`.
    pub async fn test_service() -> SignalService {
        let db = SignalDb::open_local(":memory:").await.unwrap();
        SignalService::from_db(db)
    }

    /// Create signal `id` (named `S{id}`) with one aspect per entry of `types`,
    /// returned in creation order.
    pub async fn signal_with(
        svc: &SignalService,
        id: i64,
        types: &[AspectType],
    ) -> (Signal, Vec<Aspect>) {
        let signal = svc.create_signal(id, &format!("S{id}")).await.unwrap();
        let mut aspects = Vec::with_capacity(types.len());
        for &aspect_type in types {
            aspects.push(svc.create_aspect(id, aspect_type).await.unwrap());
        }
        (signal, aspects)
    }
}
