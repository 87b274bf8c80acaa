//! Capture device enumeration and interface address lookup.
//!
//! The list returned by pcap is owned by the caller and dropped with it;
//! nothing is cached between calls.

use std::fmt;
use std::net::IpAddr;

use pcap::Device;

use crate::error::CaptureError;

/// A capture device and the addresses assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub name: String,
    pub description: Option<String>,
    pub addresses: Vec<IpAddr>,
    pub loopback: bool,
    pub up: bool,
}

impl From<&Device> for DeviceInfo {
    fn from(device: &Device) -> Self {
        DeviceInfo {
            name: device.name.clone(),
            description: device.desc.clone(),
            addresses: device.addresses.iter().map(|a| a.addr).collect(),
            loopback: device.flags.is_loopback(),
            up: device.flags.is_up(),
        }
    }
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(desc) = &self.description {
            write!(f, " ({desc})")?;
        }
        if self.loopback {
            write!(f, " [loopback]")?;
        }
        if !self.up {
            write!(f, " [down]")?;
        }
        if !self.addresses.is_empty() {
            let addrs: Vec<String> = self.addresses.iter().map(|a| a.to_string()).collect();
            write!(f, ": {}", addrs.join(", "))?;
        }
        Ok(())
    }
}

/// Lists every device pcap can capture on.
pub fn list_devices() -> Result<Vec<DeviceInfo>, CaptureError> {
    Ok(Device::list()?.iter().map(DeviceInfo::from).collect())
}

/// The device pcap would pick when none is named.
pub fn default_device() -> Result<DeviceInfo, CaptureError> {
    Device::lookup()?
        .as_ref()
        .map(DeviceInfo::from)
        .ok_or(CaptureError::NoDevices)
}

pub(crate) fn find_device(name: &str) -> Result<Device, CaptureError> {
    Device::list()?
        .into_iter()
        .find(|d| d.name == name)
        .ok_or_else(|| CaptureError::DeviceNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn from_bare_device() {
        let info = DeviceInfo::from(&Device::from("eth0"));
        assert_eq!(info.name, "eth0");
        assert!(info.description.is_none());
        assert!(info.addresses.is_empty());
        assert!(!info.loopback);
    }

    #[test]
    fn display_lists_addresses() {
        let info = DeviceInfo {
            name: "lo".into(),
            description: Some("Loopback".into()),
            addresses: vec![IpAddr::V4(Ipv4Addr::LOCALHOST), "::1".parse().unwrap()],
            loopback: true,
            up: true,
        };
        assert_eq!(info.to_string(), "lo (Loopback) [loopback]: 127.0.0.1, ::1");
    }

    #[test]
    fn display_marks_down_devices() {
        let info = DeviceInfo {
            name: "wlan0".into(),
            description: None,
            addresses: Vec::new(),
            loopback: false,
            up: false,
        };
        assert_eq!(info.to_string(), "wlan0 [down]");
    }
}
