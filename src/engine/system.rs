//! OS-native engine.

use super::{platform, EngineError};
use crate::Uuid;

/// Generates UUIDs with the UUID facility of the operating system.
///
/// On Linux this reads `/proc/sys/kernel/random/uuid`; on Windows it calls `CoCreateGuid` and
/// converts the native-endian GUID fields to big-endian. Both facilities are safe to call from
/// concurrent threads, so a `SystemEngine` needs no lock of its own. Other platforms report
/// [`std::io::ErrorKind::Unsupported`] on every call. The order of successive UUIDs is whatever
/// the platform provides; both facilities yield random (version 4) values with no order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SystemEngine {
    _private: (),
}

impl SystemEngine {
    /// Creates an engine. No host resource is touched until the first call.
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Generates a new UUID by calling the native facility.
    ///
    /// # Errors
    ///
    /// Returns an error if the native facility fails, is unavailable, or produces a malformed
    /// value.
    pub fn generate(&self) -> Result<Uuid, EngineError> {
        match platform::native_uuid() {
            Ok(bytes) => Ok(Uuid::from(bytes)),
            Err(err) => {
                tracing::warn!(error = %err, "native uuid facility failed");
                Err(err)
            }
        }
    }
}

#[cfg(all(test, any(target_os = "linux", windows)))]
mod tests {
    use super::SystemEngine;
    use crate::Uuid;

    const N_SAMPLES: usize = 100_000;

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        let g = SystemEngine::new();
        for _ in 0..1_000 {
            assert!(re.is_match(&g.generate().unwrap().to_string()));
        }
    }

    /// Generates 100k identifiers without collision
    #[test]
    fn generates_100k_identifiers_without_collision() {
        use std::collections::BTreeSet;
        let g = SystemEngine::new();
        let mut s = BTreeSet::<Uuid>::new();
        for _ in 0..N_SAMPLES {
            assert!(s.insert(g.generate().unwrap()));
        }
        assert_eq!(s.len(), N_SAMPLES);
    }

    /// Serves concurrent callers from one instance
    #[test]
    fn serves_concurrent_callers_from_one_instance() {
        use std::{collections::HashSet, thread};
        let g = SystemEngine::new();
        let s: HashSet<Uuid> = thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        (0..1_000)
                            .map(|_| g.generate().unwrap())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });
        assert_eq!(s.len(), 4 * 1_000);
    }
}
