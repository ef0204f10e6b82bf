//! Device registry: API-registered devices merged with configured
//! device groups.

use tracing::warn;

use crate::config::Config;
use crate::request;
use crate::transport::{DeviceRecord, Transport};

/// A push target: either a registered device or a configured group
/// alias (where id and name coincide).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub id: String,
    pub name: String,
}

/// Fetch registered devices and append configured groups.
///
/// A failed or malformed listDevices call degrades to "no API devices"
/// with a single diagnostic; configured groups still apply.
pub fn refresh(transport: &Transport, config: &Config) -> Vec<Device> {
    let records = transport
        .send(&request::list_devices_url(&config.api_key))
        .and_then(|envelope| envelope.records);
    merge(records, config)
}

/// Merge API records with device groups, preserving order: API devices
/// first, then groups in configuration order. No de-duplication.
fn merge(records: Option<Vec<DeviceRecord>>, config: &Config) -> Vec<Device> {
    let mut devices = Vec::new();

    match records {
        Some(records) => {
            for record in records {
                devices.push(Device {
                    id: record.device_id,
                    name: record.device_name,
                });
            }
        }
        None => warn!("Please register at least one device with Join"),
    }

    for group in &config.device_groups {
        devices.push(Device {
            id: group.clone(),
            name: group.clone(),
        });
    }

    devices
}
