extern crate tokio;

use std::error::Error;
use std::net::SocketAddr;
use std::time::Duration;

use log::{info, warn};
use record_types::RecordType;
use tokio::net::UdpSocket;
use tokio::time::timeout;

const QUERY_ID: u16 = 0xd1b7;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = env_logger::try_init();

    let server = std::env::args().nth(1).unwrap_or("127.0.0.1:5353".to_string());
    let server = server.parse::<SocketAddr>()?;
    let name = std::env::args().nth(2).unwrap_or("example.com".to_string());
    let q_type = std::env::args()
        .nth(3)
        .unwrap_or("A".to_string())
        .parse::<RecordType>()?;

    let local_addr: SocketAddr = if server.is_ipv4() {
        "0.0.0.0:0".parse()?
    } else {
        "[::]:0".parse()?
    };
    let sock = UdpSocket::bind(local_addr).await?;

    // 1. sends the query
    let request = dns::encode_query(QUERY_ID, &name, q_type.code());
    sock.send_to(&request, server).await?;
    info!("sent {} {} query to {}", name, q_type, server);

    // 2. waits for the response
    let mut buf = [0u8; 512];
    let len = match timeout(Duration::from_secs(2), sock.recv(&mut buf)).await {
        Ok(received) => received?,
        Err(_) => {
            warn!("no response from {} within 2s", server);
            return Ok(());
        }
    };

    let response = dns::decode_response(&buf[..len])?;
    if response.header().id() != QUERY_ID {
        warn!("response id {} does not match query", response.header().id());
    }

    println!(
        "{} {}: {} answer(s)",
        name,
        q_type,
        response.header().answer_count()
    );
    for record in response.answers() {
        let rtype = RecordType::from(record.rtype());
        let data = match rtype {
            RecordType::PTR => record.target_name(),
            _ => record.address().map(|addr| addr.to_string()),
        };

        match data {
            Some(data) => println!("{}\t{}\t{}\t{}", record.domain(), record.ttl(), rtype, data),
            None => println!(
                "{}\t{}\t{}\t{:?}",
                record.domain(),
                record.ttl(),
                rtype,
                record.rdata()
            ),
        }
    }

    Ok(())
}
