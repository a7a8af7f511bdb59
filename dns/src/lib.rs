//! Wire codec for the subset of RFC 1035 a static responder needs: one
//! question in, at most one answer out.

mod answer;
mod error;
mod header;
mod question;
mod request_message;
mod resource_record;
mod response_message;
mod utils;

pub use answer::{Answer, ANSWER_TTL, CLASS_IN};
pub use error::DecodeError;
pub use header::{Header, HEADER_LEN, QUERY_FLAGS, RESPONSE_FLAGS};
pub use question::Question;
pub use resource_record::ResourceRecord;
pub use response_message::ResponseMessage;
pub use utils::{domain_to_qname, read_qname};

/// Decodes the header and the first question of a query.
pub fn decode_request(request_bytes: &[u8]) -> Result<(Header, Question), DecodeError> {
    let header = Header::decode(request_bytes)?;
    let (question, _) = Question::decode(request_bytes, HEADER_LEN)?;

    Ok((header, question))
}

/// Builds the reply echoing `question`, with `answer` as the only record.
pub fn encode_response(header: &Header, question: &Question, answer: Option<&Answer>) -> Vec<u8> {
    let response_header = Header::response_to(header, answer.is_some());

    let mut response_bytes: Vec<u8> = Vec::with_capacity(HEADER_LEN + question.name().len() + 64);
    response_bytes.extend_from_slice(&response_header.to_bytes());
    question.to_bytes(&mut response_bytes);
    if let Some(answer) = answer {
        answer.to_bytes(&mut response_bytes);
    }

    response_bytes
}

pub fn encode_query(id: u16, domain: &str, qtype: u16) -> Vec<u8> {
    let request_msg = request_message::RequestMessage::new(id, domain, qtype);
    let mut request_bytes: Vec<u8> = vec![];
    request_msg.to_bytes(&mut request_bytes);

    request_bytes
}

pub fn decode_response(response_bytes: &[u8]) -> Result<ResponseMessage, DecodeError> {
    ResponseMessage::parse_response(response_bytes)
}
