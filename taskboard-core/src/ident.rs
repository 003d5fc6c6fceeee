use std::sync::atomic::{AtomicU64, Ordering};

static TASK_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a new unique task id (`task-` plus 12 hex chars).
/// Uses an atomic counter for intra-process uniqueness combined with a
/// nanosecond timestamp, hashed via SHA-256 for uniform distribution.
/// A raw clock reading would collide under rapid successive creation.
pub fn generate_task_id() -> String {
    use sha2::{Digest, Sha256};
    let seq = TASK_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    let ts = std::time::SystemTime::now()
        .duration_since(std::time::SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let mut hasher = Sha256::new();
    hasher.update(seq.to_le_bytes());
    hasher.update(ts.to_le_bytes());
    let hash = hasher.finalize();
    format!("task-{}", hex::encode(&hash[..6]))
}
