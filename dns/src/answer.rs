use crate::header::HEADER_LEN;
use byteorder::{ByteOrder, BE};

pub const CLASS_IN: u16 = 1;

pub const ANSWER_TTL: u32 = 300;

// The question section always starts right after the header and is never
// compressed itself, so the answer name can point at it.
const QUESTION_NAME_POINTER: u16 = 0xC000 | HEADER_LEN as u16;

/// A single answer record whose owner name is the question name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    rtype: u16,
    rclass: u16,
    ttl: u32,
    rdata: Vec<u8>,
}

impl Answer {
    pub fn new(rtype: u16, rdata: Vec<u8>) -> Self {
        Self {
            rtype,
            rclass: CLASS_IN,
            ttl: ANSWER_TTL,
            rdata,
        }
    }

    pub fn rtype(&self) -> u16 {
        self.rtype
    }

    pub fn rclass(&self) -> u16 {
        self.rclass
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn rdata(&self) -> &[u8] {
        &self.rdata
    }

    pub fn to_bytes(&self, bytes: &mut Vec<u8>) {
        let mut fixed = [0u8; 12];
        BE::write_u16(&mut fixed[0..2], QUESTION_NAME_POINTER);
        BE::write_u16(&mut fixed[2..4], self.rtype);
        BE::write_u16(&mut fixed[4..6], self.rclass);
        BE::write_u32(&mut fixed[6..10], self.ttl);
        BE::write_u16(&mut fixed[10..12], self.rdata.len() as u16);

        bytes.extend_from_slice(&fixed);
        bytes.extend_from_slice(&self.rdata);
    }
}
