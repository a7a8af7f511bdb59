use crate::answer::CLASS_IN;
use crate::error::DecodeError;
use crate::utils::{domain_to_qname, read_qname};
use byteorder::{ByteOrder, BE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    domain: String,
    // wire form, echoed back byte for byte
    qname: Vec<u8>,
    qtype: u16,
    qclass: u16,
}

impl Question {
    pub fn new(domain: &str, qtype: u16) -> Self {
        Self {
            domain: domain.to_string(),
            qname: domain_to_qname(domain),
            qtype,
            qclass: CLASS_IN,
        }
    }

    pub fn to_bytes(&self, bytes: &mut Vec<u8>) {
        bytes.extend_from_slice(&self.qname);

        let mut tail = [0u8; 4];
        BE::write_u16(&mut tail[0..2], self.qtype);
        BE::write_u16(&mut tail[2..4], self.qclass);
        bytes.extend_from_slice(&tail);
    }

    /// Decodes the question starting at `offset`, returning it together with
    /// the offset right after QCLASS.
    pub fn decode(bytes: &[u8], offset: usize) -> Result<(Self, usize), DecodeError> {
        let (domain, index) = read_qname(bytes, offset)?;

        if bytes.len() < index + 4 {
            return Err(DecodeError::TruncatedQuestion { offset: index });
        }

        let qtype = BE::read_u16(&bytes[index..index + 2]);
        let qclass = BE::read_u16(&bytes[index + 2..index + 4]);

        let q = Self {
            domain,
            qname: bytes[offset..index].to_vec(),
            qtype,
            qclass,
        };

        Ok((q, index + 4))
    }

    /// Name as text, with non UTF-8 bytes replaced. Used for lookup and logs.
    pub fn name(&self) -> &str {
        &self.domain
    }

    pub fn qtype(&self) -> u16 {
        self.qtype
    }

    pub fn qclass(&self) -> u16 {
        self.qclass
    }
}
