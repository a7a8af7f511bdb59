use crate::error::DecodeError;
use byteorder::{ByteOrder, BE};

pub const HEADER_LEN: usize = 12;

// QR = 1, RD = 1, RA = 1, opcode QUERY, rcode NOERROR
pub const RESPONSE_FLAGS: u16 = 0x8180;

// RD = 1
pub const QUERY_FLAGS: u16 = 0x0100;

// 12 bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    id: u16,
    flags: u16,
    qdcount: u16,
    ancount: u16,
    nscount: u16,
    arcount: u16,
}

impl Header {
    pub fn query(id: u16) -> Self {
        Self {
            id,
            flags: QUERY_FLAGS,
            qdcount: 1,
            ancount: 0,
            nscount: 0,
            arcount: 0,
        }
    }

    /// Header of the reply to `request`. Exactly one question is echoed, so
    /// `qdcount` is always 1 whatever the request declared.
    pub fn response_to(request: &Header, has_answer: bool) -> Self {
        Self {
            id: request.id,
            flags: RESPONSE_FLAGS,
            qdcount: 1,
            ancount: u16::from(has_answer),
            nscount: 0,
            arcount: 0,
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];
        BE::write_u16(&mut bytes[0..2], self.id);
        BE::write_u16(&mut bytes[2..4], self.flags);
        BE::write_u16(&mut bytes[4..6], self.qdcount);
        BE::write_u16(&mut bytes[6..8], self.ancount);
        BE::write_u16(&mut bytes[8..10], self.nscount);
        BE::write_u16(&mut bytes[10..12], self.arcount);

        bytes
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() < HEADER_LEN {
            return Err(DecodeError::TruncatedMessage { len: bytes.len() });
        }

        let h = Self {
            id: BE::read_u16(&bytes[0..2]),
            flags: BE::read_u16(&bytes[2..4]),
            qdcount: BE::read_u16(&bytes[4..6]),
            ancount: BE::read_u16(&bytes[6..8]),
            nscount: BE::read_u16(&bytes[8..10]),
            arcount: BE::read_u16(&bytes[10..12]),
        };

        Ok(h)
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn flags(&self) -> u16 {
        self.flags
    }

    pub fn qd_count(&self) -> u16 {
        self.qdcount
    }

    pub fn answer_count(&self) -> u16 {
        self.ancount
    }

    pub fn authority_count(&self) -> u16 {
        self.nscount
    }

    pub fn additional_count(&self) -> u16 {
        self.arcount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_short_buffer_is_truncated() {
        let bytes = [0u8; HEADER_LEN];
        for len in 0..HEADER_LEN {
            assert_eq!(
                Header::decode(&bytes[..len]),
                Err(DecodeError::TruncatedMessage { len })
            );
        }
    }

    #[test]
    fn decode_fields_big_endian() {
        let bytes = [0xab, 0xcd, 0x01, 0x20, 0, 1, 0, 2, 0, 3, 0, 4, 0xff];
        let h = Header::decode(&bytes).unwrap();

        assert_eq!(h.id(), 0xabcd);
        assert_eq!(h.flags(), 0x0120);
        assert_eq!(h.qd_count(), 1);
        assert_eq!(h.answer_count(), 2);
        assert_eq!(h.authority_count(), 3);
        assert_eq!(h.additional_count(), 4);
    }

    #[test]
    fn response_header_fixes_flags_and_counts() {
        let request = Header::decode(&[0x12, 0x34, 0x78, 0x00, 0, 3, 0, 0, 0, 1, 0, 1]).unwrap();

        let with_answer = Header::response_to(&request, true);
        assert_eq!(
            with_answer.to_bytes(),
            [0x12, 0x34, 0x81, 0x80, 0, 1, 0, 1, 0, 0, 0, 0]
        );

        let without_answer = Header::response_to(&request, false);
        assert_eq!(without_answer.answer_count(), 0);
        assert_eq!(without_answer.authority_count(), 0);
        assert_eq!(without_answer.additional_count(), 0);
    }
}
