//! Z/IP Gateway command class (0x5F)

use std::net::Ipv6Addr;

pub mod v1 {
    use super::*;

    zwave_commands! {
        /// Point unsolicited traffic at an IPv6 address and port
        UnsolicitedDestinationSet(0x5F, 0x08, version = 1) {
            unsolicited_ipv6_destination: [u8; 16] => array(0),
            unsolicited_destination_port: u16 => u16(16),
        }

        UnsolicitedDestinationGet(0x5F, 0x09, version = 1) {}

        UnsolicitedDestinationReport(0x5F, 0x0A, version = 1) {
            unsolicited_ipv6_destination: [u8; 16] => array(0),
            unsolicited_destination_port: u16 => u16(16),
        }
    }

    impl UnsolicitedDestinationSet {
        pub fn new(address: Ipv6Addr, port: u16) -> Self {
            Self {
                unsolicited_ipv6_destination: address.octets(),
                unsolicited_destination_port: port,
            }
        }
    }

    impl UnsolicitedDestinationReport {
        pub fn ipv6_addr(&self) -> Ipv6Addr {
            Ipv6Addr::from(self.unsolicited_ipv6_destination)
        }
    }
}
