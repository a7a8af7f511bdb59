use crate::record_store::RecordStore;
use dns::{domain_to_qname, Answer, Question};
use record_types::RecordType;
use std::net::{Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(Answer),
    NotFound,
    Unsupported(RecordType),
}

impl Resolution {
    /// Not found and unsupported both mean an empty answer section.
    pub fn into_answer(self) -> Option<Answer> {
        match self {
            Resolution::Found(answer) => Some(answer),
            Resolution::NotFound | Resolution::Unsupported(_) => None,
        }
    }

    pub fn outcome(&self) -> &'static str {
        match self {
            Resolution::Found(_) => "found",
            Resolution::NotFound => "not_found",
            Resolution::Unsupported(_) => "unsupported",
        }
    }
}

pub struct Resolver {
    store: RecordStore,
}

impl Resolver {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub fn resolve(&self, question: &Question) -> Resolution {
        let q_type = RecordType::from(question.qtype());

        let resolution = match q_type {
            RecordType::A => self.lookup(question.name(), q_type, ipv4_rdata),
            RecordType::AAAA => self.lookup(question.name(), q_type, ipv6_rdata),
            RecordType::PTR => self.lookup(question.name(), q_type, ptr_rdata),
            other => Resolution::Unsupported(other),
        };

        tracing::debug!(
            qname = question.name(),
            qtype = %q_type,
            outcome = resolution.outcome(),
            "resolved question"
        );

        resolution
    }

    fn lookup<F>(&self, name: &str, q_type: RecordType, to_rdata: F) -> Resolution
    where
        F: FnOnce(&str) -> Option<Vec<u8>>,
    {
        let value = match self.store.get(name, q_type) {
            Some(value) => value,
            None => return Resolution::NotFound,
        };

        match to_rdata(value) {
            Some(rdata) => Resolution::Found(Answer::new(q_type.code(), rdata)),
            None => {
                tracing::warn!(
                    qname = name,
                    qtype = %q_type,
                    value,
                    "stored record data is malformed"
                );
                Resolution::NotFound
            }
        }
    }
}

fn ipv4_rdata(text: &str) -> Option<Vec<u8>> {
    let addr = text.parse::<Ipv4Addr>().ok()?;
    Some(addr.octets().to_vec())
}

fn ipv6_rdata(text: &str) -> Option<Vec<u8>> {
    let addr = text.parse::<Ipv6Addr>().ok()?;
    Some(addr.octets().to_vec())
}

fn ptr_rdata(target: &str) -> Option<Vec<u8>> {
    Some(domain_to_qname(target))
}
