use crate::header::Header;
use crate::question::Question;

pub struct RequestMessage {
    header: Header,
    question: Question,
}

impl RequestMessage {
    pub fn new(id: u16, domain: &str, qtype: u16) -> Self {
        let header = Header::query(id);
        let question = Question::new(domain, qtype);

        Self { header, question }
    }

    pub fn to_bytes(&self, bytes: &mut Vec<u8>) {
        bytes.extend_from_slice(&self.header.to_bytes());
        self.question.to_bytes(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_bytes_test() {
        let mut bytes: Vec<u8> = vec![];

        let msg = RequestMessage::new(209 * 256 + 183, "baidu.com", 1);
        msg.to_bytes(&mut bytes);

        let expected = vec![
            209, 183, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, // header
            5, 98, 97, 105, 100, 117, 3, 99, 111, 109, 0, 0, 1, 0, 1, // question
        ];

        assert_eq!(bytes, expected);
    }
}
