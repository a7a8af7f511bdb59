use crate::error::DecodeError;
use crate::utils::read_qname;
use byteorder::{ByteOrder, BE};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

// Type, class, TTL and RDLENGTH.
const FIXED_LEN: usize = 10;

#[derive(Debug, Clone)]
pub struct ResourceRecord {
    domain: String,
    rtype: u16,
    rclass: u16,
    ttl: u32,
    rdata: Vec<u8>,
}

impl ResourceRecord {
    pub fn parse(bytes: &[u8], offset: usize) -> Result<(Self, usize), DecodeError> {
        let (domain, index) = read_record_name(bytes, offset)?;

        if bytes.len() < index + FIXED_LEN {
            return Err(DecodeError::TruncatedRecord { offset: index });
        }

        let rtype = BE::read_u16(&bytes[index..index + 2]);
        let rclass = BE::read_u16(&bytes[index + 2..index + 4]);
        let ttl = BE::read_u32(&bytes[index + 4..index + 8]);
        let rdlength = BE::read_u16(&bytes[index + 8..index + 10]) as usize;

        let rdata_begin = index + FIXED_LEN;
        let rdata_end = rdata_begin + rdlength;
        if bytes.len() < rdata_end {
            return Err(DecodeError::TruncatedRecord {
                offset: rdata_begin,
            });
        }

        let record = Self {
            domain,
            rtype,
            rclass,
            ttl,
            rdata: bytes[rdata_begin..rdata_end].to_vec(),
        };

        Ok((record, rdata_end))
    }

    pub fn domain(&self) -> &str {
        &self.domain
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

    /// Address carried by an A or AAAA record, judged by RDATA length.
    pub fn address(&self) -> Option<IpAddr> {
        match self.rdata.len() {
            4 => {
                let mut octets = [0u8; 4];
                octets.copy_from_slice(&self.rdata);
                Some(IpAddr::V4(Ipv4Addr::from(octets)))
            }
            16 => {
                let mut octets = [0u8; 16];
                octets.copy_from_slice(&self.rdata);
                Some(IpAddr::V6(Ipv6Addr::from(octets)))
            }
            _ => None,
        }
    }

    /// RDATA read as an uncompressed domain name, as in PTR records.
    pub fn target_name(&self) -> Option<String> {
        read_qname(&self.rdata, 0).ok().map(|(name, _)| name)
    }
}

// [192, 12]: a single pointer hop is followed, which is all our responder emits.
fn read_record_name(bytes: &[u8], offset: usize) -> Result<(String, usize), DecodeError> {
    match bytes.get(offset) {
        Some(first_byte) if first_byte & 0xC0 == 0xC0 => {
            let second_byte = *bytes
                .get(offset + 1)
                .ok_or(DecodeError::TruncatedRecord { offset })?;
            let pointer = (usize::from(first_byte & 0x3F) << 8) | usize::from(second_byte);

            let (name, _) = read_qname(bytes, pointer)?;
            Ok((name, offset + 2))
        }
        Some(_) => read_qname(bytes, offset),
        None => Err(DecodeError::TruncatedRecord { offset }),
    }
}
