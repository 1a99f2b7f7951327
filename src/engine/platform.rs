//! Host facilities the engines depend on: the network hardware address and the OS-native UUID
//! generator. Everything platform-specific stays in this module.
//!
//! The native generator is `/proc/sys/kernel/random/uuid` on Linux and `CoCreateGuid` on
//! Windows. Other platforms have none.

use super::EngineError;

/// Returns the first usable network hardware address of the host.
pub(crate) fn host_node() -> Result<[u8; 6], EngineError> {
    let address = mac_address::get_mac_address()
        .map_err(EngineError::NodeLookup)?
        .ok_or(EngineError::NodeUnavailable)?;
    let node = address.bytes();
    // loopback and virtual interfaces may report an all-zero address
    if node == [0u8; 6] {
        return Err(EngineError::NodeUnavailable);
    }
    Ok(node)
}

/// Returns a UUID produced by the operating system, in canonical byte order.
#[cfg(target_os = "linux")]
pub(crate) fn native_uuid() -> Result<[u8; 16], EngineError> {
    use crate::Uuid;

    // the kernel emits a fresh random UUID in canonical form on every read
    const PATH: &str = "/proc/sys/kernel/random/uuid";
    let text = std::fs::read_to_string(PATH)?;
    Ok(Uuid::parse_canonical(text.trim_end())?.into_bytes())
}

/// Returns a UUID produced by the operating system, in canonical byte order.
#[cfg(windows)]
pub(crate) fn native_uuid() -> Result<[u8; 16], EngineError> {
    use crate::Uuid;
    use windows_sys::core::GUID;
    use windows_sys::Win32::System::Com::CoCreateGuid;

    let mut guid = GUID {
        data1: 0,
        data2: 0,
        data3: 0,
        data4: [0; 8],
    };
    // SAFETY: `guid` is a valid, writable GUID for the duration of the call
    let hr = unsafe { CoCreateGuid(&mut guid) };
    if hr != 0 {
        return Err(std::io::Error::from_raw_os_error(hr).into());
    }
    // the integer fields are native-endian; the UUID stores them big-endian
    Ok(Uuid::from_fields(guid.data1, guid.data2, guid.data3, &guid.data4).into_bytes())
}

/// Returns a UUID produced by the operating system, in canonical byte order.
#[cfg(not(any(target_os = "linux", windows)))]
pub(crate) fn native_uuid() -> Result<[u8; 16], EngineError> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "no native UUID facility on this platform",
    )
    .into())
}

#[cfg(test)]
mod tests {
    use super::native_uuid;
    use crate::{Uuid, Variant, Version};

    /// Reads random UUIDs from the operating system
    #[cfg(any(target_os = "linux", windows))]
    #[test]
    fn reads_random_uuids_from_the_operating_system() {
        let e = Uuid::from(native_uuid().unwrap());
        assert_eq!(e.variant(), Variant::Rfc4122);
        assert_eq!(e.version(), Some(Version::Random));
        assert_ne!(Uuid::from(native_uuid().unwrap()), e);
    }

    /// Reports the missing facility
    #[cfg(not(any(target_os = "linux", windows)))]
    #[test]
    fn reports_the_missing_facility() {
        let err = native_uuid().unwrap_err();
        assert!(matches!(
            err,
            crate::EngineError::System(ref e) if e.kind() == std::io::ErrorKind::Unsupported
        ));
    }
}
