use crate::error::DecodeError;
use crate::header::{Header, HEADER_LEN};
use crate::question::Question;
use crate::resource_record::ResourceRecord;
use std::net::IpAddr;

#[derive(Debug)]
pub struct ResponseMessage {
    header: Header,
    question: Option<Question>,
    answer_records: Vec<ResourceRecord>,
}

impl ResponseMessage {
    // 解析 DNS 的响应
    pub fn parse_response(response: &[u8]) -> Result<Self, DecodeError> {
        let header = Header::decode(response)?;

        let mut offset = HEADER_LEN;
        let question = if header.qd_count() == 1 {
            let (question, next) = Question::decode(response, offset)?;
            offset = next;
            Some(question)
        } else {
            None
        };

        let count = header.answer_count() as usize;
        let mut answer_records: Vec<ResourceRecord> = Vec::with_capacity(count);
        for _ in 0..count {
            let (record, next) = ResourceRecord::parse(response, offset)?;
            answer_records.push(record);
            offset = next;
        }

        let msg = Self {
            header,
            question,
            answer_records,
        };

        Ok(msg)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn answers(&self) -> &[ResourceRecord] {
        &self.answer_records
    }

    pub fn first_address(&self) -> Option<IpAddr> {
        self.answer_records.first()?.address()
    }
}
