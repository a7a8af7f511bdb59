use crate::error::DecodeError;

// A length octet cannot describe a longer label.
const MAX_WIRE_LABEL_LEN: usize = u8::MAX as usize;

// 把 wire 格式的名字转换为可读的字符串，返回名字以及结束符之后的偏移
//
// Compression pointers are not followed: a length octet with the top two
// bits set is read as an ordinary label length.
pub fn read_qname(bytes: &[u8], offset: usize) -> Result<(String, usize), DecodeError> {
    let mut labels = Vec::new();

    let mut index = offset;
    loop {
        let label_len = match bytes.get(index) {
            Some(len) => *len as usize,
            None => return Err(DecodeError::TruncatedQuestion { offset: index }),
        };

        if label_len == 0 {
            index += 1;
            break;
        }

        let label_begin_index = index + 1;
        let next_index = label_begin_index + label_len;

        if next_index > bytes.len() {
            return Err(DecodeError::InvalidLabelLength {
                offset: index,
                length: label_len,
                available: bytes.len() - label_begin_index,
            });
        }

        let label_bytes = &bytes[label_begin_index..next_index];
        labels.push(String::from_utf8_lossy(label_bytes).into_owned());

        index = next_index;
    }

    Ok((labels.join("."), index))
}

// 把域名转换为长度前缀的 label 序列，以 0 结尾
//
// Empty segments (leading, trailing or doubled dots) are skipped.
pub fn domain_to_qname(domain: &str) -> Vec<u8> {
    let mut qname: Vec<u8> = Vec::with_capacity(domain.len() + 2);

    for label in domain.split('.').filter(|l| !l.is_empty()) {
        let label_bytes = label.as_bytes();
        let label_bytes = &label_bytes[..label_bytes.len().min(MAX_WIRE_LABEL_LEN)];

        qname.push(label_bytes.len() as u8);
        qname.extend_from_slice(label_bytes);
    }

    qname.push(0);

    qname
}
