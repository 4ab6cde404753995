//! Access point credential generation
//!
//! Both the SSID suffix and the passphrase come from a single time-based
//! UUID. The UUID node id is the AP interface's MAC address, so the SSID
//! suffix stays stable per device while the passphrase changes every run.

use std::path::Path;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::core::types::GeneratedCredentials;

impl GeneratedCredentials {
    /// Derive credentials from an identifier
    ///
    /// SSID is `prefix` plus the last 6 hex digits, passphrase the first 8.
    pub fn from_uuid(prefix: &str, id: &Uuid) -> Self {
        let bytes = id.as_bytes();
        Self {
            ssid: format!("{}{}", prefix, hex::encode(&bytes[13..])),
            passphrase: hex::encode(&bytes[..4]),
        }
    }
}

/// Generate fresh credentials for `interface`
pub async fn generate(prefix: &str, sysfs_net_dir: &Path, interface: &str) -> GeneratedCredentials {
    let node_id = node_id(sysfs_net_dir, interface).await;
    let id = Uuid::now_v1(&node_id);
    debug!("Generated identifier {}", id);
    GeneratedCredentials::from_uuid(prefix, &id)
}

/// MAC address of `interface`, or a random multicast node id
async fn node_id(sysfs_net_dir: &Path, interface: &str) -> [u8; 6] {
    let path = sysfs_net_dir.join(interface).join("address");
    match tokio::fs::read_to_string(&path).await {
        Ok(content) => match parse_mac(&content) {
            Some(mac) => return mac,
            None => warn!("Malformed MAC address in {}", path.display()),
        },
        Err(e) => warn!("Cannot read MAC address from {}: {}", path.display(), e),
    }
    random_node_id()
}

fn parse_mac(s: &str) -> Option<[u8; 6]> {
    let digits: String = s.trim().split(':').collect();
    let bytes = hex::decode(digits).ok()?;
    bytes.try_into().ok()
}

fn random_node_id() -> [u8; 6] {
    let mut node = [0u8; 6];
    node.copy_from_slice(&Uuid::new_v4().as_bytes()[..6]);
    // RFC 4122 4.5: random node ids set the multicast bit
    node[0] |= 0x01;
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_from_uuid() {
        let id = Uuid::parse_str("c232ab00-9414-11ec-b3c8-9f6bdeced846").unwrap();
        let creds = GeneratedCredentials::from_uuid("spiro-", &id);

        assert_eq!(creds.ssid, "spiro-ced846");
        assert_eq!(creds.passphrase, "c232ab00");
    }

    #[test]
    fn test_from_uuid_matches_text_form() {
        for _ in 0..16 {
            let id = Uuid::new_v4();
            let text = id.hyphenated().to_string();
            let creds = GeneratedCredentials::from_uuid("spiro-", &id);

            assert_eq!(creds.ssid, format!("spiro-{}", &text[30..36]));
            assert_eq!(creds.passphrase, &text[0..8]);
        }
    }

    #[test]
    fn test_parse_mac() {
        assert_eq!(
            parse_mac("b8:27:eb:12:34:56\n"),
            Some([0xb8, 0x27, 0xeb, 0x12, 0x34, 0x56])
        );
        assert_eq!(parse_mac("b8:27:eb:12:34"), None);
        assert_eq!(parse_mac("not a mac"), None);
    }

    #[test]
    fn test_random_node_id_is_multicast() {
        assert_eq!(random_node_id()[0] & 0x01, 0x01);
    }

    #[tokio::test]
    async fn test_generate_uses_interface_mac() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("wlan0")).unwrap();
        std::fs::write(dir.path().join("wlan0/address"), "b8:27:eb:12:34:56\n").unwrap();

        let creds = generate("spiro-", dir.path(), "wlan0").await;

        assert_eq!(creds.ssid, "spiro-123456");
        assert_eq!(creds.passphrase.len(), 8);
        assert!(creds.passphrase.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn test_generate_without_interface() {
        let dir = tempdir().unwrap();

        let creds = generate("spiro-", dir.path(), "wlan0").await;

        assert!(creds.ssid.starts_with("spiro-"));
        assert_eq!(creds.ssid.len(), "spiro-".len() + 6);
        assert_eq!(creds.passphrase.len(), 8);
    }

    #[tokio::test]
    async fn test_generate_is_fresh_each_call() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("wlan0")).unwrap();
        std::fs::write(dir.path().join("wlan0/address"), "b8:27:eb:12:34:56\n").unwrap();

        let a = generate("spiro-", dir.path(), "wlan0").await;
        let b = generate("spiro-", dir.path(), "wlan0").await;

        assert_ne!(a.passphrase, b.passphrase);
    }
}
