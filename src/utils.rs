use uuid::Uuid;

/// Returns a fresh random id suitable for `transferId` or `withdrawalId`.
///
/// Reuse the same id when resubmitting the same operation; a new id means a
/// new transfer.
pub fn generate_idempotency_id() -> String {
    Uuid::new_v4().to_string()
}
