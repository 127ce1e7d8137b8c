//! Z/IP Neighbor Discovery command class (0x58)

use std::net::Ipv6Addr;

pub mod v1 {
    use super::*;

    zwave_commands! {
        /// Mapping between a node id and its IPv6 address
        ZipNodeAdvertisement(0x58, 0x01, version = 1) {
            validity: u8 => bits(0, 0, 2),
            local: bool => flag(0, 2),
            node_id: u8 => u8(1),
            ipv6_address: [u8; 16] => array(2),
            home_id: u32 => u32(18),
        }

        ZipNodeSolicitation(0x58, 0x03, version = 1) {
            node_id: u8 => u8(1),
            ipv6_address: [u8; 16] => array(2),
        }

        ZipInvNodeSolicitation(0x58, 0x04, version = 1) {
            local: bool => flag(0, 2),
            node_id: u8 => u8(1),
        }
    }

    impl ZipNodeAdvertisement {
        pub const VALIDITY_INFORMATION_OK: u8 = 0x00;
        pub const VALIDITY_INFORMATION_OBSOLETE: u8 = 0x01;
        pub const VALIDITY_INFORMATION_NOT_FOUND: u8 = 0x02;

        pub fn ipv6_addr(&self) -> Ipv6Addr {
            Ipv6Addr::from(self.ipv6_address)
        }
    }

    impl ZipNodeSolicitation {
        pub fn new(node_id: u8, address: Ipv6Addr) -> Self {
            Self {
                node_id,
                ipv6_address: address.octets(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ZwaveCommand;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_node_solicitation() {
        let address: Ipv6Addr = "fd00:bbbb::3".parse().unwrap();
        let solicitation = v1::ZipNodeSolicitation::new(0x03, address);
        let payload = solicitation.payload();

        assert_eq!(payload.len(), 18);
        assert_eq!(payload[0], 0x00);
        assert_eq!(payload[1], 0x03);
        assert_eq!(payload[2..4], [0xFD, 0x00]);
        assert_eq!(v1::ZipNodeSolicitation::from_payload(&payload), solicitation);
    }

    #[test]
    fn test_node_advertisement() {
        let mut payload = vec![0x06, 0x0A];
        payload.extend(Ipv6Addr::LOCALHOST.octets());
        payload.extend([0xC0, 0xFF, 0xEE, 0x01]);
        let advertisement = v1::ZipNodeAdvertisement::from_payload(&payload);

        assert!(advertisement.local);
        assert_eq!(
            advertisement.validity,
            v1::ZipNodeAdvertisement::VALIDITY_INFORMATION_NOT_FOUND
        );
        assert_eq!(advertisement.ipv6_addr(), Ipv6Addr::LOCALHOST);
        assert_eq!(advertisement.home_id, 0xC0FF_EE01);
    }
}
