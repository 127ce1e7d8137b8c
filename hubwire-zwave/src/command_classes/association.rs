//! Association command class (0x85)

pub mod v1 {
    zwave_commands! {
        AssociationSet(0x85, 0x01, version = 1) {
            grouping_identifier: u8 => u8(0),
            node_id: Vec<u8> => rest(1),
        }

        AssociationGet(0x85, 0x02, version = 1) {
            grouping_identifier: u8 => u8(0),
        }

        AssociationReport(0x85, 0x03, version = 1) {
            grouping_identifier: u8 => u8(0),
            max_nodes_supported: u8 => u8(1),
            reports_to_follow: u8 => u8(2),
            node_id: Vec<u8> => rest(3),
        }

        AssociationRemove(0x85, 0x04, version = 1) {
            grouping_identifier: u8 => u8(0),
            node_id: Vec<u8> => rest(1),
        }

        AssociationGroupingsGet(0x85, 0x05, version = 1) {}

        AssociationGroupingsReport(0x85, 0x06, version = 1) {
            supported_groupings: u8 => u8(0),
        }
    }

    impl AssociationSet {
        pub fn new(grouping_identifier: u8, node_id: impl Into<Vec<u8>>) -> Self {
            Self {
                grouping_identifier,
                node_id: node_id.into(),
            }
        }
    }

    impl AssociationRemove {
        /// Remove every node from `grouping_identifier`
        pub fn all(grouping_identifier: u8) -> Self {
            Self {
                grouping_identifier,
                node_id: Vec::new(),
            }
        }
    }
}

pub mod v2 {
    zwave_commands! {
        AssociationSpecificGroupGet(0x85, 0x0B, version = 2) {}

        AssociationSpecificGroupReport(0x85, 0x0C, version = 2) {
            group: u8 => u8(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ZwaveCommand;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_groupings_report() {
        let report = v1::AssociationGroupingsReport::from_payload(&[0x05]);

        assert_eq!(report.supported_groupings, 5);
        assert_eq!(report.payload(), vec![0x05]);
        assert_eq!(report.to_string(), "AssociationGroupingsReport(supported_groupings: 5)");
    }

    #[test]
    fn test_association_set_format() {
        assert_eq!(v1::AssociationSet::new(1, [0x01, 0x0F]).format(), "850101010F");
        assert_eq!(v1::AssociationRemove::all(2).format(), "850402");
    }

    #[test]
    fn test_association_report() {
        let report = v1::AssociationReport::from_payload(&[0x01, 0x05, 0x00, 0x01, 0x02]);

        assert_eq!(report.max_nodes_supported, 5);
        assert_eq!(report.node_id, vec![0x01, 0x02]);
    }
}
