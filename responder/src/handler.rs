use dns::DecodeError;
use resolution::Resolver;

/// decode -> resolve -> encode for one datagram.
pub fn handle_datagram(resolver: &Resolver, request: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let (header, question) = dns::decode_request(request)?;
    let answer = resolver.resolve(&question).into_answer();

    Ok(dns::encode_response(&header, &question, answer.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use record_types::RecordType;
    use resolution::RecordStore;

    fn resolver() -> Resolver {
        let store = RecordStore::builder()
            .insert("example.com", RecordType::A, "93.184.216.34")
            .unwrap()
            .insert("example.com", RecordType::AAAA, "::1")
            .unwrap()
            .insert("1.0.0.127.in-addr.arpa", RecordType::PTR, "localhost")
            .unwrap()
            .build();

        Resolver::new(store)
    }

    fn answer_count(response: &[u8]) -> u16 {
        u16::from_be_bytes([response[6], response[7]])
    }

    #[test]
    fn supported_hit_has_one_answer() {
        let r = resolver();
        let hits = [
            ("example.com", 1),
            ("example.com", 28),
            ("1.0.0.127.in-addr.arpa", 12),
        ];
        for (name, qtype) in hits.iter() {
            let response = handle_datagram(&r, &dns::encode_query(5, name, *qtype)).unwrap();
            assert_eq!(answer_count(&response), 1, "{} {}", name, qtype);
        }
    }

    #[test]
    fn miss_or_unsupported_has_no_answer() {
        let r = resolver();
        let misses = [
            ("unknown.test", 1),
            ("unknown.test", 28),
            ("example.com", 12),
            ("example.com", 16),
            ("example.com", 999),
        ];
        for (name, qtype) in misses.iter() {
            let request = dns::encode_query(5, name, *qtype);
            let response = handle_datagram(&r, &request).unwrap();

            assert_eq!(answer_count(&response), 0, "{} {}", name, qtype);
            assert_eq!(response.len(), request.len());
        }
    }

    #[test]
    fn case_does_not_change_answer_data() {
        let r = resolver();
        let upper = handle_datagram(&r, &dns::encode_query(1, "EXAMPLE.COM", 1)).unwrap();
        let lower = handle_datagram(&r, &dns::encode_query(1, "example.com", 1)).unwrap();

        let upper = dns::decode_response(&upper).unwrap();
        let lower = dns::decode_response(&lower).unwrap();
        assert_eq!(upper.answers()[0].rdata(), lower.answers()[0].rdata());
        assert_eq!(upper.question().map(|q| q.name()), Some("EXAMPLE.COM"));
    }

    #[test]
    fn non_utf8_question_is_echoed_unchanged() {
        let r = resolver();
        let mut request = vec![0x12, 0x34, 0x01, 0x00, 0, 1, 0, 0, 0, 0, 0, 0];
        request.extend_from_slice(&[3, 97, 255, 98, 3, 99, 111, 109, 0, 0, 1, 0, 1]);

        let response = handle_datagram(&r, &request).unwrap();

        assert_eq!(answer_count(&response), 0);
        assert_eq!(&response[dns::HEADER_LEN..], &request[dns::HEADER_LEN..]);
    }

    #[test]
    fn short_datagram_is_rejected() {
        let r = resolver();
        for len in 0..dns::HEADER_LEN {
            let request = vec![0u8; len];
            assert_eq!(
                handle_datagram(&r, &request),
                Err(DecodeError::TruncatedMessage { len })
            );
        }
    }
}
