use crate::api::models::{DnsRecord, DnsRecordUpdate};
use crate::error::{Error, Result};
use log::warn;

const RECORD_TYPE_A: &str = "A";
const ROOT_HOST: &str = "@";
const WILDCARD_HOST: &str = "*";

fn is_root(record: &DnsRecord, domain: &str) -> bool {
    record.record_type == RECORD_TYPE_A
        && (record.hostname == ROOT_HOST || record.hostname == domain)
}

fn is_wildcard(record: &DnsRecord, domain: &str) -> bool {
    record.record_type == RECORD_TYPE_A
        && (record.hostname == WILDCARD_HOST || record.hostname == domain)
}

/// Destination of the first root A record.
pub fn root_destination<'a>(records: &'a [DnsRecord], domain: &str) -> Result<&'a str> {
    records
        .iter()
        .find(|record| is_root(record, domain))
        .map(|record| record.destination.as_str())
        .ok_or_else(|| Error::NotFound(format!("A record not found for domain {}", domain)))
}

// Ids are numeric on the wire. A signed integer is accepted; 0 or anything
// unparsable counts as absent.
fn parse_id(record: &DnsRecord) -> Option<i64> {
    match record.id.parse::<i64>() {
        Ok(0) => None,
        Ok(id) => Some(id),
        Err(e) => {
            warn!(
                "Skipping {} record {:?} with non-numeric id {:?}: {}",
                record.hostname, record.record_type, record.id, e
            );
            None
        }
    }
}

/// Builds the update set pointing the root and wildcard A records at `ip`.
///
/// Each scan keeps the last matching record, so a record whose hostname is the
/// domain itself can satisfy both.
pub fn build_updates(records: &[DnsRecord], domain: &str, ip: &str) -> Result<Vec<DnsRecordUpdate>> {
    let mut root_id = None;
    let mut wildcard_id = None;

    for record in records {
        if is_root(record, domain) {
            root_id = parse_id(record);
        }
        if is_wildcard(record, domain) {
            wildcard_id = parse_id(record);
        }
    }

    let updates: Vec<DnsRecordUpdate> = [(root_id, ROOT_HOST), (wildcard_id, WILDCARD_HOST)]
        .into_iter()
        .filter_map(|(id, hostname)| {
            id.map(|id| DnsRecordUpdate {
                id,
                hostname: hostname.to_string(),
                record_type: RECORD_TYPE_A.to_string(),
                destination: ip.to_string(),
                deleterecord: false,
            })
        })
        .collect();

    if updates.is_empty() {
        return Err(Error::NotFound(format!(
            "no existing records to update for domain {}",
            domain
        )));
    }

    Ok(updates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, hostname: &str, record_type: &str, destination: &str) -> DnsRecord {
        DnsRecord {
            id: id.to_string(),
            hostname: hostname.to_string(),
            record_type: record_type.to_string(),
            destination: destination.to_string(),
        }
    }

    #[test]
    fn test_root_destination_ignores_other_records() {
        let records = vec![
            record("10", "www", "A", "9.9.9.9"),
            record("11", "@", "MX", "mail.example.com"),
            record("12", "@", "AAAA", "::1"),
            record("1", "@", "A", "1.2.3.4"),
            record("13", "*", "A", "8.8.8.8"),
        ];

        assert_eq!(root_destination(&records, "example.com").unwrap(), "1.2.3.4");
    }

    #[test]
    fn test_root_destination_matches_domain_hostname() {
        let records = vec![record("5", "example.com", "A", "4.4.4.4")];
        assert_eq!(root_destination(&records, "example.com").unwrap(), "4.4.4.4");
    }

    #[test]
    fn test_root_destination_takes_first_match() {
        let records = vec![
            record("1", "@", "A", "1.1.1.1"),
            record("2", "@", "A", "2.2.2.2"),
        ];
        assert_eq!(root_destination(&records, "example.com").unwrap(), "1.1.1.1");
    }

    #[test]
    fn test_root_destination_not_found() {
        assert!(matches!(
            root_destination(&[], "example.com"),
            Err(Error::NotFound(_))
        ));

        let records = vec![
            record("1", "*", "A", "1.2.3.4"),
            record("2", "@", "CNAME", "other.example.net"),
        ];
        assert!(matches!(
            root_destination(&records, "example.com"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_build_updates_root_only() {
        let records = vec![record("1", "@", "A", "1.2.3.4")];
        let updates = build_updates(&records, "example.com", "5.6.7.8").unwrap();

        assert_eq!(
            updates,
            vec![DnsRecordUpdate {
                id: 1,
                hostname: "@".to_string(),
                record_type: "A".to_string(),
                destination: "5.6.7.8".to_string(),
                deleterecord: false,
            }]
        );
    }

    #[test]
    fn test_build_updates_root_and_wildcard() {
        let records = vec![
            record("7", "*", "A", "1.2.3.4"),
            record("3", "www", "A", "1.2.3.4"),
            record("4", "@", "A", "1.2.3.4"),
        ];
        let updates = build_updates(&records, "example.com", "5.6.7.8").unwrap();

        assert_eq!(updates.len(), 2);
        assert_eq!((updates[0].id, updates[0].hostname.as_str()), (4, "@"));
        assert_eq!((updates[1].id, updates[1].hostname.as_str()), (7, "*"));
        assert!(updates.iter().all(|u| u.destination == "5.6.7.8" && !u.deleterecord));
    }

    #[test]
    fn test_build_updates_wildcard_only() {
        let records = vec![record("7", "*", "A", "1.2.3.4")];
        let updates = build_updates(&records, "example.com", "5.6.7.8").unwrap();

        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].hostname, "*");
    }

    #[test]
    fn test_build_updates_domain_hostname_counts_for_both() {
        let records = vec![record("9", "example.com", "A", "1.2.3.4")];
        let updates = build_updates(&records, "example.com", "5.6.7.8").unwrap();

        let ids: Vec<_> = updates.iter().map(|u| (u.id, u.hostname.as_str())).collect();
        assert_eq!(ids, vec![(9, "@"), (9, "*")]);
    }

    #[test]
    fn test_build_updates_skips_non_numeric_id() {
        let records = vec![
            record("abc", "@", "A", "1.2.3.4"),
            record("7", "*", "A", "1.2.3.4"),
        ];
        let updates = build_updates(&records, "example.com", "5.6.7.8").unwrap();

        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].hostname, "*");
    }

    #[test]
    fn test_build_updates_accepts_signed_ids() {
        let records = vec![
            record("-3", "@", "A", "1.2.3.4"),
            record("+5", "*", "A", "1.2.3.4"),
        ];
        let updates = build_updates(&records, "example.com", "5.6.7.8").unwrap();

        let ids: Vec<_> = updates.iter().map(|u| (u.id, u.hostname.as_str())).collect();
        assert_eq!(ids, vec![(-3, "@"), (5, "*")]);
    }

    #[test]
    fn test_build_updates_zero_id_is_absent() {
        let records = vec![
            record("0", "@", "A", "1.2.3.4"),
            record("7", "*", "A", "1.2.3.4"),
        ];
        let updates = build_updates(&records, "example.com", "5.6.7.8").unwrap();

        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].hostname, "*");
    }

    #[test]
    fn test_build_updates_nothing_to_update() {
        assert!(matches!(
            build_updates(&[], "example.com", "5.6.7.8"),
            Err(Error::NotFound(_))
        ));

        let records = vec![
            record("1", "www", "A", "1.2.3.4"),
            record("bad", "@", "A", "1.2.3.4"),
        ];
        assert!(matches!(
            build_updates(&records, "example.com", "5.6.7.8"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_update_serializes_numeric_id() {
        let records = vec![record("1", "@", "A", "1.2.3.4")];
        let updates = build_updates(&records, "example.com", "5.6.7.8").unwrap();

        assert_eq!(
            serde_json::to_value(&updates).unwrap(),
            serde_json::json!([{
                "id": 1,
                "hostname": "@",
                "type": "A",
                "destination": "5.6.7.8",
                "deleterecord": false
            }])
        );
    }
}
